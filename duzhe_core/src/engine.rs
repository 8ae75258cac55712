use std::sync::atomic::AtomicBool;

use crate::dictionary::{Dictionary, Romanizer};
use crate::error::AnalysisError;
use crate::filter::{Filter, ValidityFilter};
use crate::model::Comprehension;
use crate::normalizer::NormalizedText;
use crate::recognizer::{EntityRecognizer, proper_nouns};
use crate::report::ReportWriter;
use crate::resolver::UnknownSpanResolver;
use crate::scorer;
use crate::segmenter::Segmenter;
use crate::tokenizer::{Tokenization, Tokenizer};
use crate::vocabulary::Vocabulary;

/// 默认单个词最多覆盖的字符数。
pub const DEFAULT_MAX_WORD_LENGTH: usize = 4;

/// 引擎：负责把原始文本 + 词汇转成 `Comprehension`。
///
/// 流水线：
/// - normalizer（规范化） -> tokenizer（DP 分词，未知片段交给 resolver/segmenter）
///   -> recognizer（专有名词） -> filter（有效性过滤） -> scorer（统计、档位）
///
/// 外部分词器与实体识别器在构造时注入，整个进程生命周期内复用；
/// 引擎本身只读，可以在多个并发分析之间共享。
pub struct Engine<S, N> {
    /// 外部分词器（未知片段兜底）
    segmenter: S,
    /// 命名实体识别器（专有名词排除）
    recognizer: N,
    /// 已知词/未知词匹配的最大长度（字符数）
    max_word_length: usize,
}

impl<S, N> Engine<S, N>
where
    S: Segmenter,
    N: EntityRecognizer,
{
    pub fn new(segmenter: S, recognizer: N) -> Self {
        Self {
            segmenter,
            recognizer,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }

    /// 限制单个词最多覆盖多少个字符；0 会被当作 1。
    pub fn max_word_length(mut self, n: usize) -> Self {
        self.max_word_length = n.max(1);
        self
    }

    /// 只做分词（不过滤、不打分）。
    pub fn tokenize(&self, text: &NormalizedText, vocabulary: &Vocabulary) -> Tokenization {
        self.tokenizer(vocabulary).tokenize(text)
    }

    pub fn analyze(&self, raw: &str, vocabulary: &Vocabulary) -> Result<Comprehension, AnalysisError> {
        self.analyze_with_cancel(raw, vocabulary, &AtomicBool::new(false))
    }

    /// 同 `analyze`；`cancel` 被置位时在下一个字符步返回 `Cancelled`。
    pub fn analyze_with_cancel(
        &self,
        raw: &str,
        vocabulary: &Vocabulary,
        cancel: &AtomicBool,
    ) -> Result<Comprehension, AnalysisError> {
        let text = NormalizedText::new(raw)?;
        tracing::debug!(chars = text.len(), "normalized input");

        let tokens = self.tokenizer(vocabulary).tokenize_with_cancel(&text, cancel)?;
        tracing::debug!(
            segments = tokens.segments.len(),
            covered = tokens.score,
            "tokenized"
        );

        let nouns = proper_nouns(&self.recognizer, &text.as_string());
        let filtered = ValidityFilter {
            proper_nouns: &nouns,
        }
        .apply(tokens.segments);
        tracing::debug!(
            proper_nouns = nouns.len(),
            words = filtered.len(),
            "filtered"
        );

        scorer::score(filtered.iter().map(|s| s.text.as_str()), vocabulary.known())
    }

    /// 分析边界：任何错误都转成 `Error: ...` 文本，不会向外传播。
    pub fn check<D, R>(&self, raw: &str, vocabulary: &Vocabulary, writer: &ReportWriter<'_, D, R>) -> String
    where
        D: Dictionary + ?Sized,
        R: Romanizer + ?Sized,
    {
        let outcome = self.analyze(raw, vocabulary);
        if let Err(e) = &outcome {
            tracing::debug!(error = %e, "analysis failed");
        }
        writer.render_outcome(&outcome)
    }

    fn tokenizer<'a>(&'a self, vocabulary: &'a Vocabulary) -> Tokenizer<'a, S> {
        Tokenizer {
            known: vocabulary.known(),
            resolver: UnknownSpanResolver {
                unknown: vocabulary.unknown(),
                segmenter: &self.segmenter,
                max_word_length: self.max_word_length,
            },
            max_word_length: self.max_word_length,
        }
    }
}
