//! `normalizer`：把原始输入整理成后续算法统一使用的字符序列。
//!
//! 步骤：
//! - 删除所有空白（不只是首尾；多段落输入会被压成一段连续文本）
//! - NFKD 分解
//! - 丢弃分解后产生的非间距附加符号（Mn）；Mc / Me 保留
//!
//! 之后 tokenizer/resolver 的所有下标都基于这里的字符下标，而不是原文的字节下标。

use unicode_normalization::UnicodeNormalization;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::AnalysisError;

/// 规范化后的文本：按 Unicode 标量值存储，创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    chars: Vec<char>,
}

impl NormalizedText {
    /// 规范化原始输入。
    ///
    /// - 输入为空字符串：`EmptyInput { after_normalization: false }`
    /// - 规范化后为空（例如只有空白）：`EmptyInput { after_normalization: true }`
    pub fn new(raw: &str) -> Result<Self, AnalysisError> {
        if raw.is_empty() {
            return Err(AnalysisError::EmptyInput {
                after_normalization: false,
            });
        }
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let chars: Vec<char> = compact.nfkd().filter(|&c| !is_nonspacing_mark(c)).collect();
        if chars.is_empty() {
            return Err(AnalysisError::EmptyInput {
                after_normalization: true,
            });
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// 取 `[start, end)` 字符区间组成的字符串。
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_inner_whitespace() {
        let t = NormalizedText::new("你好\n 谢谢\t吗 ").unwrap();
        assert_eq!(t.as_string(), "你好谢谢吗");
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn strips_diacritics() {
        let t = NormalizedText::new("café nǐ").unwrap();
        assert_eq!(t.as_string(), "cafeni");
    }

    #[test]
    fn spacing_and_enclosing_marks_survive() {
        // U+0903 是 Mc，U+20DD 是 Me，只有 Mn 会被丢弃
        let t = NormalizedText::new("好\u{0903}").unwrap();
        assert_eq!(t.as_string(), "好\u{0903}");
        assert_eq!(t.len(), 2);
        let t = NormalizedText::new("1\u{20DD}\u{0301}").unwrap();
        assert_eq!(t.as_string(), "1\u{20DD}");
    }

    #[test]
    fn compatibility_forms_are_decomposed() {
        // 全角字母 -> ASCII
        let t = NormalizedText::new("ＡＢ１").unwrap();
        assert_eq!(t.as_string(), "AB1");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            NormalizedText::new(""),
            Err(AnalysisError::EmptyInput {
                after_normalization: false
            })
        ));
        assert!(matches!(
            NormalizedText::new(" \n\t "),
            Err(AnalysisError::EmptyInput {
                after_normalization: true
            })
        ));
    }

    #[test]
    fn slice_uses_char_indices() {
        let t = NormalizedText::new("中文abc").unwrap();
        assert_eq!(t.slice(1, 3), "文a");
    }
}
