//! `tokenizer`：以“已知词覆盖字符数最大”为目标的 DP 分词。
//!
//! 状态 `dp[i]` 表示前 i 个字符的最优路径：
//! - `score`：已知词覆盖的字符数（未知片段贡献 0）；未到达时为 `Score::NoPath`
//! - `path`：已经确定的片段序列（不含尚未解析的末尾未知片段）
//! - `pending`：末尾未知片段的起点；路径恰好停在已知词边界时为 `None`
//!
//! 转移：
//! - 对每个结束于 i、长度不超过 `max_word_length` 的已知词 `text[j..i]`，
//!   分数严格更高才替换。j 从小到大扫描，所以同分时先遇到的较长词胜出。
//! - 没有已知词结束于 i 时，从 `dp[0..i]` 中取分数最高者（同分取下标最小，增量维护），
//!   沿用它的路径，并把未知片段起点设为它的 `pending`（没有则为它自身下标）。
//!   这是全局回看，不是简单沿用 `dp[i-1]`。
//!
//! 未知片段只在需要时（被一个已知词“封口”或到达末尾）交给 resolver 解析。

use std::convert::Infallible;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    error::AnalysisError,
    model::TaggedSegment,
    normalizer::NormalizedText,
    resolver::UnknownSpanResolver,
    segmenter::Segmenter,
    vocabulary::WordSet,
};

/// DP 分数：`NoPath` 小于任何 `Scored`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Score {
    NoPath,
    Scored(usize),
}

/// 持久化链表节点：每次转移追加一批片段，前缀在各状态之间共享。
#[derive(Debug)]
struct Link {
    segments: Vec<TaggedSegment>,
    prev: Option<Rc<Link>>,
}

#[derive(Debug, Clone, Default)]
struct Path(Option<Rc<Link>>);

impl Path {
    fn extend(&self, segments: Vec<TaggedSegment>) -> Path {
        Path(Some(Rc::new(Link {
            segments,
            prev: self.0.clone(),
        })))
    }

    fn to_vec(&self) -> Vec<TaggedSegment> {
        let mut chunks: Vec<&[TaggedSegment]> = Vec::new();
        let mut cur = self.0.as_deref();
        while let Some(link) = cur {
            chunks.push(&link.segments);
            cur = link.prev.as_deref();
        }
        chunks.into_iter().rev().flatten().cloned().collect()
    }
}

#[derive(Debug, Clone)]
struct DpState {
    score: Score,
    path: Path,
    pending: Option<usize>,
}

impl DpState {
    fn start() -> Self {
        Self {
            score: Score::Scored(0),
            path: Path::default(),
            pending: None,
        }
    }

    fn unreached() -> Self {
        Self {
            score: Score::NoPath,
            path: Path::default(),
            pending: None,
        }
    }
}

/// 分词结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenization {
    /// 完整片段序列：拼接后等于规范化文本
    pub segments: Vec<TaggedSegment>,
    /// 已知词覆盖的字符总数
    pub score: usize,
}

/// DP 分词器。
pub struct Tokenizer<'a, S: ?Sized> {
    pub known: &'a WordSet,
    pub resolver: UnknownSpanResolver<'a, S>,
    pub max_word_length: usize,
}

impl<'a, S> Tokenizer<'a, S>
where
    S: Segmenter + ?Sized,
{
    pub fn tokenize(&self, text: &NormalizedText) -> Tokenization {
        match self.run(text, || Ok::<(), Infallible>(())) {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }

    /// 同 `tokenize`，但每推进一个字符前检查 `cancel`；被置位时丢弃中间状态并返回 `Cancelled`。
    pub fn tokenize_with_cancel(
        &self,
        text: &NormalizedText,
        cancel: &AtomicBool,
    ) -> Result<Tokenization, AnalysisError> {
        self.run(text, || {
            if cancel.load(Ordering::Relaxed) {
                Err(AnalysisError::Cancelled)
            } else {
                Ok(())
            }
        })
    }

    fn run<E>(
        &self,
        text: &NormalizedText,
        mut checkpoint: impl FnMut() -> Result<(), E>,
    ) -> Result<Tokenization, E> {
        let chars = text.chars();
        let n = chars.len();
        let max_len = self.max_word_length.max(1);

        let mut dp: Vec<DpState> = Vec::with_capacity(n + 1);
        dp.push(DpState::start());
        dp.resize(n + 1, DpState::unreached());
        // dp[0..i] 中分数最高的下标（同分取最小）；状态写入后不再改变，可以增量维护
        let mut best = 0;

        for i in 1..=n {
            checkpoint()?;

            for j in i.saturating_sub(max_len)..i {
                let Score::Scored(base) = dp[j].score else {
                    continue;
                };
                let candidate = Score::Scored(base + (i - j));
                if candidate <= dp[i].score {
                    continue;
                }
                let word: String = chars[j..i].iter().collect();
                if !self.known.contains(&word) {
                    continue;
                }
                let mut segments = match dp[j].pending {
                    Some(start) => self.resolve_unknown(&chars[start..j]),
                    None => Vec::new(),
                };
                segments.push(TaggedSegment::known(word));
                let path = dp[j].path.extend(segments);
                dp[i] = DpState {
                    score: candidate,
                    path,
                    pending: None,
                };
            }

            if dp[i].score == Score::NoPath {
                let prev = &dp[best];
                dp[i] = DpState {
                    score: prev.score,
                    path: prev.path.clone(),
                    pending: Some(prev.pending.unwrap_or(best)),
                };
            }
            if dp[i].score > dp[best].score {
                best = i;
            }
        }

        let last = &dp[n];
        let mut segments = last.path.to_vec();
        if let Some(start) = last.pending {
            segments.extend(self.resolve_unknown(&chars[start..n]));
        }
        let score = match last.score {
            Score::Scored(s) => s,
            Score::NoPath => 0,
        };
        Ok(Tokenization { segments, score })
    }

    fn resolve_unknown(&self, span: &[char]) -> Vec<TaggedSegment> {
        self.resolver
            .resolve(span)
            .into_iter()
            .map(TaggedSegment::unknown)
            .collect()
    }
}
