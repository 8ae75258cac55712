//! 词表目录：`known/` 与 `unknown/` 下的 `.txt` 词表。
//!
//! 约定：
//! - 每行一个词；`TAB` 或 `#` 之后的内容忽略；空行与 `#` 注释行跳过
//! - 选中的词表贡献已知词，目录里其余未选中的词表贡献显式未知词
//! - 默认选中 `known/` 下的全部词表（即批处理模式的行为）

use std::path::{Path, PathBuf};

use duzhe_core::{AnalysisError, Vocabulary};

use crate::LoadError;

/// HSK 词表的固定展示顺序；其余词表按文件名排在后面。
const HSK_ORDER: &[&str] = &[
    "HSK1.txt",
    "HSK2.txt",
    "HSK3.txt",
    "HSK4.txt",
    "HSK5.txt",
    "HSK6.txt",
    "HSKBand1.txt",
    "HSKBand2.txt",
    "HSKBand3.txt",
    "HSKBand4.txt",
    "HSKBand5.txt",
    "HSKBand6.txt",
    "HSKBand7-9.txt",
];

/// 目录缺失时的处理方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPolicy {
    /// 批处理：已知词目录缺失是错误
    Strict,
    /// 交互：缺失目录视为空
    Lenient,
}

/// 词表来自哪个目录。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrigin {
    Known,
    Unknown,
}

/// 词表分组（用于 `lists` 展示）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListGroup {
    Hsk2,
    Hsk3,
    Other,
}

#[derive(Debug, Clone)]
pub struct WordList {
    /// 文件名，例如 `HSK1.txt`
    pub name: String,
    pub path: PathBuf,
    pub origin: ListOrigin,
}

impl WordList {
    pub fn group(&self) -> ListGroup {
        if !HSK_ORDER.contains(&self.name.as_str()) {
            ListGroup::Other
        } else if self.name.starts_with("HSKBand") {
            ListGroup::Hsk3
        } else {
            ListGroup::Hsk2
        }
    }

    /// 展示名：去掉 `.txt`，`HSKBand3` 显示为 `Band 3`。
    pub fn display_name(&self) -> String {
        let stem = self.name.strip_suffix(".txt").unwrap_or(&self.name);
        match stem.strip_prefix("HSKBand") {
            Some(band) => format!("Band {band}"),
            None => stem.to_string(),
        }
    }

    pub fn read(&self) -> Result<Vec<String>, LoadError> {
        read_word_list(&self.path)
    }
}

/// 两个目录下的全部词表（已排序）。
#[derive(Debug, Clone, Default)]
pub struct WordListCatalog {
    lists: Vec<WordList>,
}

impl WordListCatalog {
    pub fn scan(
        known_dir: impl AsRef<Path>,
        unknown_dir: impl AsRef<Path>,
        policy: ListPolicy,
    ) -> Result<Self, LoadError> {
        let known_dir = known_dir.as_ref();
        let unknown_dir = unknown_dir.as_ref();

        if !known_dir.is_dir() {
            match policy {
                ListPolicy::Strict => {
                    return Err(AnalysisError::MissingWordList {
                        path: known_dir.to_path_buf(),
                    }
                    .into());
                }
                ListPolicy::Lenient => {
                    tracing::warn!(dir = %known_dir.display(), "known words directory not found, treating as empty");
                }
            }
        }

        let mut lists = list_txt_files(known_dir, ListOrigin::Known)?;
        let mut seen: Vec<String> = lists.iter().map(|l| l.name.clone()).collect();
        for l in list_txt_files(unknown_dir, ListOrigin::Unknown)? {
            // 同名文件以 known/ 下的为准
            if !seen.contains(&l.name) {
                seen.push(l.name.clone());
                lists.push(l);
            }
        }
        lists.sort_by_key(|l| sort_key(&l.name));
        tracing::debug!(lists = lists.len(), "scanned word lists");
        Ok(Self { lists })
    }

    pub fn lists(&self) -> &[WordList] {
        &self.lists
    }

    pub fn get(&self, name: &str) -> Option<&WordList> {
        self.lists.iter().find(|l| l.name == name)
    }

    /// 默认选择：`known/` 下的全部词表。
    pub fn default_selection(&self) -> Vec<String> {
        self.lists
            .iter()
            .filter(|l| l.origin == ListOrigin::Known)
            .map(|l| l.name.clone())
            .collect()
    }

    /// 按选择构建词汇：选中的为已知，未选中的为显式未知，`custom` 每行一个已知词。
    ///
    /// 选择里不存在的词表名会被忽略（记录 WARN）。
    pub fn vocabulary<S: AsRef<str>>(&self, selected: &[S], custom: &str) -> Result<Vocabulary, LoadError> {
        for name in selected {
            if self.get(name.as_ref()).is_none() {
                tracing::warn!(list = name.as_ref(), "selected word list not found, ignoring");
            }
        }
        let mut builder = Vocabulary::builder();
        for list in &self.lists {
            let words = list.read()?;
            tracing::debug!(list = %list.name, words = words.len(), "loaded word list");
            if selected.iter().any(|s| s.as_ref() == list.name) {
                builder = builder.known_list(words);
            } else {
                builder = builder.unknown_list(words);
            }
        }
        Ok(builder.custom_words(custom).build())
    }
}

fn sort_key(name: &str) -> (usize, String) {
    let rank = HSK_ORDER
        .iter()
        .position(|h| *h == name)
        .unwrap_or(HSK_ORDER.len());
    (rank, name.to_string())
}

fn list_txt_files(dir: &Path, origin: ListOrigin) -> Result<Vec<WordList>, LoadError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        out.push(WordList {
            name: name.to_string(),
            path: path.clone(),
            origin,
        });
    }
    Ok(out)
}

pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let s = crate::read_to_string(path.as_ref())?;
    Ok(parse_word_list(&s))
}

/// 解析词表文本。
pub fn parse_word_list(s: &str) -> Vec<String> {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let word = line.split('\t').next()?.split('#').next()?.trim();
            (!word.is_empty()).then(|| word.to_string())
        })
        .collect()
}
