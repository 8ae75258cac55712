//! `filter`：把分词片段过滤成有意义的词汇项。
//!
//! 一个词被丢弃，当且仅当满足任一条件：
//! - 去空白后为空
//! - 全部是数字
//! - 全部是标点/符号
//! - 含有任何 ASCII 字母或数字（中英混排词整体丢弃）
//! - 不含任何 CJK 表意文字
//! - 是命名实体识别给出的专有名词

use std::collections::HashSet;

use crate::model::TaggedSegment;

/// 固定的标点/符号集合：中西文标点、引号与常见符号块。
const PUNCTUATION: &str = concat!(
    "✓\",.:()!@[]+/\\！?？｡。＂＃＄％＆＇（）＊＋，－／：；＜＝＞＠［＼］＾＿｀｛｜｝～",
    "｟｠｢｣､、〃《》「」『』【】〔〕〖〗〘〙〚〛〜〝〞〟〰〾〿–—‘’‛“”„‟…‧﹏;﹔|-·*─'",
    "★☆○●◎◇◆□■△▲▽▼※→←↑↓⇒⇐⇑⇓∴∵∈∋⊆⊇⊂⊃∪∩∧∨¬∀∃",
    "=≠≈≡≤≥<>±×÷∞∫∑∏√∂∇",
    "‹›«»‚",
);

/// Filter：对分词片段做后处理。
pub trait Filter: Send + Sync {
    fn apply(&self, segments: Vec<TaggedSegment>) -> Vec<TaggedSegment>;
}

/// 默认 filter：按有效性规则丢弃片段，保留原顺序。
pub struct ValidityFilter<'a> {
    pub proper_nouns: &'a HashSet<String>,
}

impl Filter for ValidityFilter<'_> {
    fn apply(&self, mut segments: Vec<TaggedSegment>) -> Vec<TaggedSegment> {
        segments.retain(|s| is_valid_word(&s.text, self.proper_nouns));
        segments
    }
}

pub fn is_valid_word(word: &str, proper_nouns: &HashSet<String>) -> bool {
    if word.trim().is_empty() {
        return false;
    }
    if word.chars().all(char::is_numeric) {
        return false;
    }
    if word.chars().all(is_punctuation) {
        return false;
    }
    if word.chars().any(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    if !word.chars().any(is_cjk) {
        return false;
    }
    !proper_nouns.contains(word)
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// CJK 统一表意文字、扩展 A、扩展 B–F。
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |
        '\u{3400}'..='\u{4DBF}' |
        '\u{20000}'..='\u{2EBEF}'
    )
}
