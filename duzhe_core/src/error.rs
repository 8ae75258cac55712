//! 分析过程中的错误分类。
//!
//! 所有错误都会在 `Engine::check` 边界被转换成 `Error: <message>` 文本，
//! 不会继续向上传播。

use std::path::PathBuf;

use thiserror::Error;

/// 一次分析可能失败的原因。
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// 输入为空，或规范化（去空白、去附加符号）后为空。
    #[error("{}", empty_input_message(*after_normalization))]
    EmptyInput { after_normalization: bool },

    /// 分词结果经过有效性过滤后一个词都不剩。
    #[error("No Chinese text found after filtering")]
    NoValidWords,

    /// 批处理模式下必需的已知词表目录不存在。
    #[error("Known words directory not found: '{}'", path.display())]
    MissingWordList { path: PathBuf },

    /// 调用方在 DP 逐字推进期间请求取消。
    #[error("Analysis cancelled")]
    Cancelled,
}

fn empty_input_message(after_normalization: bool) -> &'static str {
    if after_normalization {
        "No Chinese text found after filtering"
    } else {
        "No text provided"
    }
}

impl AnalysisError {
    /// 面向用户的一行错误信息（带 `Error:` 前缀）。
    pub fn to_user_message(&self) -> String {
        format!("Error: {self}")
    }
}
