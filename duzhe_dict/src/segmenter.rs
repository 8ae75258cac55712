use std::{fs::File, io::BufReader, path::Path};

use duzhe_core::segmenter::Segmenter;
use jieba_rs::Jieba;

use crate::LoadError;

/// jieba 分词（内置词典 + 可选用户词典，开启 HMM 新词识别）。
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaSegmenter").finish_non_exhaustive()
    }
}

impl JiebaSegmenter {
    pub fn new() -> Self {
        Self { jieba: Jieba::new() }
    }

    /// 追加用户词典（jieba 词典格式：`词 [词频] [词性]`）。
    pub fn with_user_dict(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut jieba = Jieba::new();
        jieba
            .load_dict(&mut BufReader::new(file))
            .map_err(|e| LoadError::UserDict(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded jieba user dictionary");
        Ok(Self { jieba })
    }
}

impl Segmenter for JiebaSegmenter {
    fn cut(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn pieces_concatenate_back() {
        let s = JiebaSegmenter::new();
        for text in ["我们中出了一个叛徒", "南京市长江大桥", "abc网球拍卖会def", "今天天气很好"] {
            let joined: String = s.cut(text).concat();
            assert_eq!(joined, text);
        }
    }

    #[test]
    fn user_dictionary_adds_words() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "读者工具 100000 n").unwrap();
        let s = JiebaSegmenter::with_user_dict(f.path()).unwrap();
        assert!(s.cut("读者工具很好").contains(&"读者工具".to_string()));
    }

    #[test]
    fn missing_user_dictionary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            JiebaSegmenter::with_user_dict(dir.path().join("none.txt")),
            Err(LoadError::Io { .. })
        ));
    }
}
