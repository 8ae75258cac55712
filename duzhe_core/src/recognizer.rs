//! `recognizer`：命名实体识别（专有名词排除）的接口。
//!
//! 约定：
//! - 识别器显式构造、由调用方持有并按引用传入，不使用隐式的全局懒加载
//! - 识别失败不是致命错误：记录 WARN 后按“没有专有名词”继续

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

/// 关心的实体类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Person,
    /// 地缘政治实体（国家、城市）
    Place,
    Organization,
    Facility,
    Location,
}

/// 一个实体：原文片段 + 类别。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
}

#[derive(Debug, Error)]
#[error("entity recognizer failed: {0}")]
pub struct RecognizeError(pub String);

/// 命名实体识别器。
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizeError>;
}

impl<T> EntityRecognizer for &T
where
    T: EntityRecognizer + ?Sized,
{
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizeError> {
        (**self).recognize(text)
    }
}

/// 可选识别器：`None` 等价于不识别任何实体。
impl<T> EntityRecognizer for Option<T>
where
    T: EntityRecognizer,
{
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizeError> {
        match self {
            Some(r) => r.recognize(text),
            None => Ok(Vec::new()),
        }
    }
}

/// 不识别任何实体。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecognizer;

impl EntityRecognizer for NoRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<Entity>, RecognizeError> {
        Ok(Vec::new())
    }
}

/// 汇总专有名词集合；识别失败时降级为空集合。
pub fn proper_nouns<R>(recognizer: &R, text: &str) -> HashSet<String>
where
    R: EntityRecognizer + ?Sized,
{
    match recognizer.recognize(text) {
        Ok(entities) => entities.into_iter().map(|e| e.text).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "NER detection failed, continuing without proper noun exclusion");
            HashSet::new()
        }
    }
}
