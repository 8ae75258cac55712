use std::{collections::HashMap, path::Path};

use duzhe_core::dictionary::{Dictionary, Romanizer};
use duzhe_pinyin::marked_from_numbered;

use crate::LoadError;

#[derive(Debug, Clone)]
struct Entry {
    /// 数字声调拼音，例如 `chuan2 tong3`
    pinyin: String,
    /// 第一条释义
    definition: String,
}

/// CC-CEDICT 格式（每行一条）：
///
/// - `繁體 简体 [pin1 yin1] /释义一/释义二/`
/// - 允许 `#` 开头注释行；格式不对或释义为空的行直接跳过
///
/// 只保留第一条释义；简体与（不同时的）繁体词头都指向同一条目。
/// 同一词头出现多次时，后出现的覆盖先出现的。
#[derive(Debug, Clone, Default)]
pub struct CedictDictionary {
    map: HashMap<String, Entry>,
}

impl CedictDictionary {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let s = crate::read_to_string(path.as_ref())?;
        let dict = Self::from_cedict_str(&s);
        tracing::debug!(path = %path.as_ref().display(), entries = dict.len(), "loaded CC-CEDICT");
        Ok(dict)
    }

    /// 词典文件缺失时降级为空词典（报告里不显示释义）。
    pub fn from_path_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "CC-CEDICT not found, definitions unavailable");
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, "error loading CC-CEDICT");
                Self::default()
            }
        }
    }

    pub fn from_cedict_str(s: &str) -> Self {
        let mut map: HashMap<String, Entry> = HashMap::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((traditional, simplified, entry)) = parse_line(line) else {
                continue;
            };
            if traditional != simplified {
                map.insert(traditional.to_string(), entry.clone());
            }
            map.insert(simplified.to_string(), entry);
        }
        Self { map }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// 词条自带的数字声调拼音。
    pub fn numbered_pinyin(&self, word: &str) -> Option<&str> {
        self.map
            .get(word)
            .map(|e| e.pinyin.as_str())
            .filter(|p| !p.is_empty())
    }
}

fn parse_line(line: &str) -> Option<(&str, &str, Entry)> {
    let mut parts = line.splitn(3, ' ');
    let traditional = parts.next()?;
    let simplified = parts.next()?;
    let rest = parts.next()?;

    let start = rest.find('/')?;
    let end = rest.rfind('/')?;
    if start >= end {
        return None;
    }
    let definition = rest[start + 1..end].split('/').next()?.trim().to_string();
    if definition.is_empty() {
        return None;
    }

    let pinyin = match (rest.find('['), rest.find(']')) {
        (Some(l), Some(r)) if l < r && r < start => rest[l + 1..r].trim().to_string(),
        _ => String::new(),
    };

    Some((traditional, simplified, Entry { pinyin, definition }))
}

impl Dictionary for CedictDictionary {
    fn definition(&self, word: &str) -> Option<&str> {
        self.map.get(word).map(|e| e.definition.as_str())
    }
}

/// 整词读音（词典里的拼音），比逐字注音更准确地处理多音字。
impl Romanizer for CedictDictionary {
    fn romanize(&self, word: &str) -> Option<String> {
        self.numbered_pinyin(word).map(marked_from_numbered)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
# CC-CEDICT
# comment line
傳統 传统 [chuan2 tong3] /tradition/traditional/convention/
銀行 银行 [yin2 hang2] /bank/CL:家[jia1],個|个[ge4]/
你好 你好 [ni3 hao3] /hello/hi/
broken line without slashes
壞 坏 [huai4] //
";

    #[test]
    fn first_definition_under_both_headwords() {
        let d = CedictDictionary::from_cedict_str(SAMPLE);
        assert_eq!(d.definition("传统"), Some("tradition"));
        assert_eq!(d.definition("傳統"), Some("tradition"));
        assert_eq!(d.definition("银行"), Some("bank"));
        assert_eq!(d.definition("你好"), Some("hello"));
        assert_eq!(d.definition("不存在"), None);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let d = CedictDictionary::from_cedict_str(SAMPLE);
        assert!(d.definition("broken").is_none());
        // 释义为空的条目不收录
        assert!(d.definition("壞").is_none());
        assert!(d.definition("坏").is_none());
        assert_eq!(d.len(), 5);
    }

    #[test]
    fn romanizes_from_entry_pinyin() {
        let d = CedictDictionary::from_cedict_str(SAMPLE);
        assert_eq!(d.romanize("银行").as_deref(), Some("yín háng"));
        assert_eq!(d.romanize("傳統").as_deref(), Some("chuán tǒng"));
        assert_eq!(d.romanize("猫"), None);
    }

    #[test]
    fn later_entries_overwrite_earlier() {
        let d = CedictDictionary::from_cedict_str(
            "行 行 [xing2] /to walk/\n行 行 [hang2] /row/\n",
        );
        assert_eq!(d.definition("行"), Some("row"));
        assert_eq!(d.numbered_pinyin("行"), Some("hang2"));
    }

    #[test]
    fn loads_from_file_and_tolerates_missing_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        let d = CedictDictionary::from_path(f.path()).unwrap();
        assert_eq!(d.definition("你好"), Some("hello"));

        let dir = tempfile::tempdir().unwrap();
        let missing = CedictDictionary::from_path_or_empty(dir.path().join("nope.txt"));
        assert!(missing.is_empty());
        assert!(matches!(
            CedictDictionary::from_path(dir.path().join("nope.txt")),
            Err(LoadError::Io { .. })
        ));
    }
}
