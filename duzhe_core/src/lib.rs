//! `duzhe_core`：纯逻辑层，不做任何文件 I/O。
//!
//! 给定一段中文文本和一份“已知词”词汇，估算读者能读懂多少：
//! - 以已知词覆盖字符数最大为目标做 DP 分词
//! - 未被覆盖的片段先匹配显式未知词表，再交给外部分词器
//! - 过滤掉标点、数字、拉丁字母、专有名词等非词汇项
//! - 统计理解率并给出难度档位，生成报告
//!
//! 分层：engine -> normalizer -> tokenizer（resolver/segmenter）-> recognizer -> filter -> scorer -> report
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod filter;
pub mod model;
pub mod normalizer;
pub mod recognizer;
pub mod report;
pub mod resolver;
pub mod scorer;
pub mod segmenter;
pub mod tokenizer;
pub mod vocabulary;

pub use engine::Engine;
pub use error::AnalysisError;
pub use vocabulary::{Vocabulary, WordSet};
