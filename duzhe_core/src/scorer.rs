//! `scorer`：统计过滤后的词，计算理解率与难度档位。

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::{
    error::AnalysisError,
    model::{Comprehension, WordStat},
    vocabulary::WordSet,
};

/// 难度档位（按理解率，下界包含）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Assessment {
    /// < 82
    #[serde(rename = "Too Difficult")]
    TooDifficult,
    /// 82–87
    #[serde(rename = "Very Challenging")]
    VeryChallenging,
    /// 87–89
    #[serde(rename = "Challenging")]
    Challenging,
    /// 89–92
    #[serde(rename = "Optimal")]
    Optimal,
    /// 92–95
    #[serde(rename = "Comfortable")]
    Comfortable,
    /// ≥ 95
    #[serde(rename = "Too Easy")]
    TooEasy,
}

impl Assessment {
    pub fn from_percentage(pct: f64) -> Self {
        if pct < 82.0 {
            Self::TooDifficult
        } else if pct < 87.0 {
            Self::VeryChallenging
        } else if pct < 89.0 {
            Self::Challenging
        } else if pct < 92.0 {
            Self::Optimal
        } else if pct < 95.0 {
            Self::Comfortable
        } else {
            Self::TooEasy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TooDifficult => "Too Difficult",
            Self::VeryChallenging => "Very Challenging",
            Self::Challenging => "Challenging",
            Self::Optimal => "Optimal",
            Self::Comfortable => "Comfortable",
            Self::TooEasy => "Too Easy",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 对过滤后的词序列打分。
///
/// 已知判定只看 `known`（已知集合优先于显式未知词表）。
/// 词序列为空时返回 `NoValidWords`，不会做除零。
pub fn score<I, S>(words: I, known: &WordSet) -> Result<Comprehension, AnalysisError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stats: Vec<WordStat> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for w in words {
        let w = w.as_ref();
        total += 1;
        match index.get(w) {
            Some(&i) => stats[i].count += 1,
            None => {
                index.insert(w.to_string(), stats.len());
                stats.push(WordStat {
                    word: w.to_string(),
                    count: 1,
                    known: known.contains(w),
                });
            }
        }
    }

    if total == 0 {
        return Err(AnalysisError::NoValidWords);
    }

    let known_count: usize = stats.iter().filter(|s| s.known).map(|s| s.count).sum();
    let percentage = known_count as f64 / total as f64 * 100.0;

    let mut unknown: Vec<WordStat> = stats.iter().filter(|s| !s.known).cloned().collect();
    // sort_by 是稳定排序：同次数保持首次出现顺序
    unknown.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(Comprehension {
        total,
        unique: stats.len(),
        known_count,
        percentage,
        assessment: Assessment::from_percentage(percentage),
        stats,
        unknown,
    })
}
