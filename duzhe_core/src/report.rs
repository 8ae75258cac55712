//! `report`：把统计结果整理成面向用户的报告。
//!
//! 行格式（顺序固定）：
//! ```text
//! Word Count: 12
//! Total Unique Words: 9
//! Comprehension: 83.3% - Very Challenging
//! Unique Unknown Words: 2
//!
//! === Unknown Words (by frequency) ===
//! 咖啡 (kā fēi) : 1 - coffee
//! 吧 (ba) : 1
//! ```
//! 未知词超过展示上限时追加 `... and N more`。

use std::fmt;

use serde::Serialize;

use crate::{
    dictionary::{Dictionary, Romanizer},
    error::AnalysisError,
    model::Comprehension,
    scorer::Assessment,
};

/// 默认最多展示的未知词条数。
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;
/// 释义最长字符数；超出时截到 77 字符并加 `...`。
const MAX_DEFINITION_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub word: String,
    pub romanization: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub word_count: usize,
    pub unique_words: usize,
    pub comprehension: f64,
    pub assessment: Assessment,
    pub unique_unknown_words: usize,
    pub unknown_words: Vec<ReportEntry>,
    /// 因展示上限被省略的未知词数量
    pub hidden: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word Count: {}", self.word_count)?;
        writeln!(f, "Total Unique Words: {}", self.unique_words)?;
        writeln!(
            f,
            "Comprehension: {:.1}% - {}",
            self.comprehension, self.assessment
        )?;
        write!(f, "Unique Unknown Words: {}", self.unique_unknown_words)?;
        if self.unknown_words.is_empty() {
            return Ok(());
        }
        write!(f, "\n\n=== Unknown Words (by frequency) ===")?;
        for e in &self.unknown_words {
            write!(f, "\n{} ({}) : {}", e.word, e.romanization, e.count)?;
            if let Some(d) = &e.definition {
                write!(f, " - {d}")?;
            }
        }
        if self.hidden > 0 {
            write!(f, "\n... and {} more", self.hidden)?;
        }
        Ok(())
    }
}

/// 报告生成器：持有词典与注音协作方的引用。
pub struct ReportWriter<'a, D: ?Sized, R: ?Sized> {
    pub dictionary: &'a D,
    pub romanizer: &'a R,
    pub display_limit: usize,
}

impl<'a, D, R> ReportWriter<'a, D, R>
where
    D: Dictionary + ?Sized,
    R: Romanizer + ?Sized,
{
    pub fn new(dictionary: &'a D, romanizer: &'a R) -> Self {
        Self {
            dictionary,
            romanizer,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    /// 设置展示上限；0 会被当作 1。
    pub fn display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit.max(1);
        self
    }

    pub fn render(&self, c: &Comprehension) -> Report {
        let shown = c.unknown.len().min(self.display_limit);
        let unknown_words = c.unknown[..shown]
            .iter()
            .map(|s| ReportEntry {
                word: s.word.clone(),
                romanization: self.romanizer.romanize(&s.word).unwrap_or_default(),
                count: s.count,
                definition: self.dictionary.definition(&s.word).map(truncate_definition),
            })
            .collect();
        Report {
            word_count: c.total,
            unique_words: c.unique,
            comprehension: c.percentage,
            assessment: c.assessment,
            unique_unknown_words: c.unknown.len(),
            unknown_words,
            hidden: c.unknown.len() - shown,
        }
    }

    /// 分析边界：成功时输出报告文本，失败时输出 `Error: ...`。
    pub fn render_outcome(&self, outcome: &Result<Comprehension, AnalysisError>) -> String {
        match outcome {
            Ok(c) => self.render(c).to_string(),
            Err(e) => e.to_user_message(),
        }
    }
}

fn truncate_definition(meaning: &str) -> String {
    if meaning.chars().count() > MAX_DEFINITION_CHARS {
        let head: String = meaning.chars().take(MAX_DEFINITION_CHARS - 3).collect();
        format!("{head}...")
    } else {
        meaning.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{dictionary::NoDictionary, scorer::score, vocabulary::WordSet};

    struct Echo;

    impl Romanizer for Echo {
        fn romanize(&self, word: &str) -> Option<String> {
            Some(format!("r:{word}"))
        }
    }

    struct Silent;

    impl Romanizer for Silent {
        fn romanize(&self, _word: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn renders_line_format() {
        let known: WordSet = ["我", "喝"].into_iter().collect();
        let c = score(["我", "喝", "咖啡", "咖啡", "吧"], &known).unwrap();
        let mut dict = HashMap::new();
        dict.insert("咖啡".to_string(), "coffee".to_string());
        let text = ReportWriter::new(&dict, &Echo).render(&c).to_string();
        assert_eq!(
            text,
            "Word Count: 5\n\
             Total Unique Words: 4\n\
             Comprehension: 40.0% - Too Difficult\n\
             Unique Unknown Words: 2\n\
             \n\
             === Unknown Words (by frequency) ===\n\
             咖啡 (r:咖啡) : 2 - coffee\n\
             吧 (r:吧) : 1"
        );
    }

    #[test]
    fn no_unknown_words_means_no_header() {
        let known: WordSet = ["好"].into_iter().collect();
        let c = score(["好"], &known).unwrap();
        let text = ReportWriter::new(&NoDictionary, &Silent).render(&c).to_string();
        assert!(text.ends_with("Comprehension: 100.0% - Too Easy\nUnique Unknown Words: 0"));
        assert!(!text.contains("==="));
    }

    #[test]
    fn display_cap_adds_trailer() {
        let words: Vec<String> = (0..25).map(|i| format!("词{i}")).collect();
        let c = score(&words, &WordSet::new()).unwrap();
        let report = ReportWriter::new(&NoDictionary, &Silent).render(&c);
        assert_eq!(report.unknown_words.len(), 20);
        assert_eq!(report.hidden, 5);
        let text = report.to_string();
        assert!(text.ends_with("\n... and 5 more"));
        assert!(text.contains("\n词0 () : 1\n"));
    }

    #[test]
    fn long_definitions_are_truncated() {
        let long = "a".repeat(90);
        let t = truncate_definition(&long);
        assert_eq!(t.chars().count(), 80);
        assert!(t.ends_with("..."));
        let exact = "b".repeat(80);
        assert_eq!(truncate_definition(&exact), exact);
    }

    #[test]
    fn errors_are_prefixed() {
        let w = ReportWriter::new(&NoDictionary, &Silent);
        let out = w.render_outcome(&Err(AnalysisError::NoValidWords));
        assert_eq!(out, "Error: No Chinese text found after filtering");
    }
}
