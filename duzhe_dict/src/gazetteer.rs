use std::{collections::HashMap, path::Path};

use aho_corasick::{AhoCorasick, MatchKind};
use duzhe_core::recognizer::{Entity, EntityKind, EntityRecognizer, RecognizeError};

use crate::LoadError;

/// 基于实体词表的识别器：文本中出现的表内名称即为专有名词。
///
/// 文件格式（每行一条，`#` 开头为注释）：
///
/// ```text
/// 李明	PERSON
/// 北京	GPE
/// ```
///
/// 类别不区分大小写：`PERSON` / `GPE` / `LOC` / `ORG` / `FAC`。
/// 重叠时取最左最长的匹配。
pub struct GazetteerRecognizer {
    matcher: AhoCorasick,
    kinds: Vec<EntityKind>,
}

impl std::fmt::Debug for GazetteerRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GazetteerRecognizer")
            .field("entries", &self.kinds.len())
            .finish()
    }
}

impl GazetteerRecognizer {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let s = crate::read_to_string(path.as_ref())?;
        let g = Self::from_gazetteer_str(&s)?;
        tracing::debug!(path = %path.as_ref().display(), entries = g.len(), "loaded entity gazetteer");
        Ok(g)
    }

    pub fn from_gazetteer_str(s: &str) -> Result<Self, LoadError> {
        let mut names: Vec<String> = Vec::new();
        let mut kinds: Vec<EntityKind> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, kind) = match line.split_once('\t') {
                Some((n, k)) => (n.trim(), k.trim()),
                None => {
                    return Err(LoadError::Parse {
                        line: i + 1,
                        message: "expected `name<TAB>KIND`".into(),
                    });
                }
            };
            let kind = parse_kind(kind).ok_or_else(|| LoadError::Parse {
                line: i + 1,
                message: format!("unknown entity kind '{kind}'"),
            })?;
            if name.is_empty() {
                continue;
            }
            // 重复名称：后出现的类别覆盖
            match index.get(name) {
                Some(&at) => kinds[at] = kind,
                None => {
                    index.insert(name.to_string(), names.len());
                    names.push(name.to_string());
                    kinds.push(kind);
                }
            }
        }

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&names)?;
        Ok(Self { matcher, kinds })
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

fn parse_kind(s: &str) -> Option<EntityKind> {
    match s.to_ascii_uppercase().as_str() {
        "PERSON" => Some(EntityKind::Person),
        "GPE" => Some(EntityKind::Place),
        "LOC" => Some(EntityKind::Location),
        "ORG" => Some(EntityKind::Organization),
        "FAC" => Some(EntityKind::Facility),
        _ => None,
    }
}

impl EntityRecognizer for GazetteerRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizeError> {
        Ok(self
            .matcher
            .find_iter(text)
            .map(|m| Entity {
                text: text[m.start()..m.end()].to_string(),
                kind: self.kinds[m.pattern().as_usize()],
            })
            .collect())
    }
}
