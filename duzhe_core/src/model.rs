use serde::Serialize;

use crate::scorer::Assessment;

/// 分词结果中的一个片段。
///
/// `known` 表示 tokenizer 是否把它当作已知词匹配出来；最终的已知/未知统计
/// 以已知词集合（`Vocabulary::known`，见 `scorer::score`）为准，而不是这个标记。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSegment {
    pub text: String,
    pub known: bool,
}

impl TaggedSegment {
    pub fn known(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            known: true,
        }
    }

    pub fn unknown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            known: false,
        }
    }
}

/// 单个词的出现次数统计（按字符串完全相等聚合）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordStat {
    pub word: String,
    pub count: usize,
    pub known: bool,
}

/// 一次分析的统计结果。
///
/// 设计目标：
/// - 只包含数据，不做格式化（格式化由 `report` 负责）
/// - `stats` 按首次出现顺序；`unknown` 按次数降序，同次数保持首次出现顺序
#[derive(Debug, Clone, PartialEq)]
pub struct Comprehension {
    /// 过滤后的词总数（按出现计）
    pub total: usize,
    /// 过滤后的不同词数
    pub unique: usize,
    /// 已知词出现总次数
    pub known_count: usize,
    /// known_count / total * 100
    pub percentage: f64,
    pub assessment: Assessment,
    /// 每个不同词的统计（首次出现顺序）
    pub stats: Vec<WordStat>,
    /// 未知词（次数降序，稳定排序）
    pub unknown: Vec<WordStat>,
}
