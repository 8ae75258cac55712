//! `segmenter`：外部通用分词器的接口。
//!
//! core 不关心分词器来自 jieba、模型服务还是别的实现；只要求：
//! - 输入一段连续文本，返回有序的词序列
//! - 返回的词按顺序拼接后等于输入（不丢字、不重复）

/// 外部分词器：用于切分没有被已知词/显式未知词覆盖的片段。
pub trait Segmenter: Send + Sync {
    fn cut(&self, text: &str) -> Vec<String>;
}

impl<T> Segmenter for &T
where
    T: Segmenter + ?Sized,
{
    fn cut(&self, text: &str) -> Vec<String> {
        (**self).cut(text)
    }
}

/// 最朴素的分词器：每个字符一个词。没有配置外部分词器时使用。
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn cut(&self, text: &str) -> Vec<String> {
        text.chars().map(String::from).collect()
    }
}
