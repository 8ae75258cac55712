//! `resolver`：把没有已知词覆盖的字符区间切成词。
//!
//! 两种模式交替：
//! - 当前位置能匹配显式未知词表：取最长匹配（`max_word_length` 到 1），输出并跳过
//! - 否则向后找下一个“能匹配未知词表”的位置（只判断存在，不消费），
//!   把中间这一段整体交给外部分词器
//!
//! 显式未知词的边界永远优先于外部分词器自己的边界。

use crate::{segmenter::Segmenter, vocabulary::WordSet};

/// 未知片段解析器。
pub struct UnknownSpanResolver<'a, S: ?Sized> {
    /// 显式未知词表
    pub unknown: &'a WordSet,
    /// 外部分词器
    pub segmenter: &'a S,
    /// 最长匹配长度（字符数）
    pub max_word_length: usize,
}

impl<'a, S> UnknownSpanResolver<'a, S>
where
    S: Segmenter + ?Sized,
{
    pub fn resolve(&self, span: &[char]) -> Vec<String> {
        let mut out = Vec::new();
        let mut i = 0;
        while i < span.len() {
            if let Some(len) = self.longest_match(span, i) {
                out.push(span[i..i + len].iter().collect());
                i += len;
                continue;
            }
            let mut j = i + 1;
            while j < span.len() && self.longest_match(span, j).is_none() {
                j += 1;
            }
            let chunk: String = span[i..j].iter().collect();
            out.extend(self.segmenter.cut(&chunk));
            i = j;
        }
        out
    }

    /// 从 `at` 开始能匹配到的最长未知词长度。
    fn longest_match(&self, span: &[char], at: usize) -> Option<usize> {
        if self.unknown.is_empty() {
            return None;
        }
        let max_len = self.max_word_length.max(1).min(span.len() - at);
        (1..=max_len).rev().find(|&len| {
            let candidate: String = span[at..at + len].iter().collect();
            self.unknown.contains(&candidate)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::segmenter::CharSegmenter;

    /// 记录每次调用的输入，并把整段原样作为一个词返回。
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<String>>,
    }

    impl Segmenter for Recording {
        fn cut(&self, text: &str) -> Vec<String> {
            self.calls.lock().unwrap().push(text.to_string());
            vec![text.to_string()]
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn explicit_unknown_words_take_priority() {
        let unknown: WordSet = ["咖啡", "咖啡馆"].into_iter().collect();
        let seg = Recording::default();
        let r = UnknownSpanResolver {
            unknown: &unknown,
            segmenter: &seg,
            max_word_length: 4,
        };
        let out = r.resolve(&chars("咖啡馆里面"));
        assert_eq!(out, vec!["咖啡馆", "里面"]);
        assert_eq!(*seg.calls.lock().unwrap(), vec!["里面".to_string()]);
    }

    #[test]
    fn segmenter_chunk_stops_at_next_unknown_word() {
        let unknown: WordSet = ["咖啡"].into_iter().collect();
        let seg = Recording::default();
        let r = UnknownSpanResolver {
            unknown: &unknown,
            segmenter: &seg,
            max_word_length: 4,
        };
        let out = r.resolve(&chars("喝杯咖啡吧"));
        assert_eq!(out, vec!["喝杯", "咖啡", "吧"]);
        assert_eq!(
            *seg.calls.lock().unwrap(),
            vec!["喝杯".to_string(), "吧".to_string()]
        );
    }

    #[test]
    fn without_unknown_list_whole_span_goes_to_segmenter() {
        let unknown = WordSet::new();
        let r = UnknownSpanResolver {
            unknown: &unknown,
            segmenter: &CharSegmenter,
            max_word_length: 4,
        };
        assert_eq!(r.resolve(&chars("吗呢")), vec!["吗", "呢"]);
        assert!(r.resolve(&[]).is_empty());
    }

    #[test]
    fn longest_match_respects_max_length() {
        let unknown: WordSet = ["一二三四五", "一二"].into_iter().collect();
        let r = UnknownSpanResolver {
            unknown: &unknown,
            segmenter: &CharSegmenter,
            max_word_length: 4,
        };
        assert_eq!(
            r.resolve(&chars("一二三四五")),
            vec!["一二", "三", "四", "五"]
        );
    }
}
