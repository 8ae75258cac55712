//! 词汇集合：已知词（KnownWordSet）与显式未知词（UnknownWordSet）。
//!
//! 约定：
//! - 集合只保留“是否存在”，不保留频次或来源
//! - 一次分析期间只读；多个并发分析可以共享同一个 `Vocabulary`
//! - 同一个词同时出现在两边时，已知词优先（见 `Vocabulary::is_known`）

use std::collections::HashSet;

/// 无序、去重的词集合。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个词；空白会被裁掉，空串忽略。返回是否为新词。
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word: String = word.into();
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return false;
        }
        if trimmed.len() == word.len() {
            self.words.insert(word)
        } else {
            self.words.insert(trimmed.to_string())
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = WordSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for w in iter {
            self.insert(w);
        }
    }
}

/// 一次分析使用的全部词汇。
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    known: WordSet,
    unknown: WordSet,
}

impl Vocabulary {
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    pub fn known(&self) -> &WordSet {
        &self.known
    }

    pub fn unknown(&self) -> &WordSet {
        &self.unknown
    }

    /// 已知判定只看已知集合：即使也在未知集合里，仍算已知。
    pub fn is_known(&self, word: &str) -> bool {
        self.known.contains(word)
    }
}

/// 把多份词表与自定义词合并成 `Vocabulary`。
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    known: WordSet,
    unknown: WordSet,
}

impl VocabularyBuilder {
    /// 并入一份已知词表。
    pub fn known_list<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known.extend(words);
        self
    }

    /// 并入一份显式未知词表。
    pub fn unknown_list<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unknown.extend(words);
        self
    }

    /// 自定义已知词：每行一个，空行忽略。
    pub fn custom_words(mut self, text: &str) -> Self {
        self.known.extend(text.lines());
        self
    }

    pub fn build(self) -> Vocabulary {
        Vocabulary {
            known: self.known,
            unknown: self.unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_trims_and_skips_blank() {
        let mut s = WordSet::new();
        assert!(s.insert(" 你好 "));
        assert!(!s.insert("你好"));
        assert!(!s.insert("   "));
        assert_eq!(s.len(), 1);
        assert!(s.contains("你好"));
    }

    #[test]
    fn builder_unions_lists_and_custom_words() {
        let v = Vocabulary::builder()
            .known_list(["你好", "谢谢"])
            .known_list(["再见"])
            .custom_words("朋友\n\n  老师  \n")
            .unknown_list(["谢谢", "咖啡"])
            .build();
        assert_eq!(v.known().len(), 5);
        assert!(v.is_known("老师"));
        assert!(!v.is_known("咖啡"));
    }

    #[test]
    fn known_wins_over_unknown() {
        let v = Vocabulary::builder()
            .known_list(["学习"])
            .unknown_list(["学习"])
            .build();
        assert!(v.is_known("学习"));
        assert!(v.unknown().contains("学习"));
    }
}
