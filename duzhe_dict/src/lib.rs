//! 基于文件的协作方实现：CC-CEDICT 词典、词表目录、jieba 分词、实体词表。

use std::{io, path::PathBuf};

use duzhe_core::AnalysisError;
use thiserror::Error;

pub mod cedict;
pub mod gazetteer;
pub mod segmenter;
pub mod wordlist;

pub use cedict::CedictDictionary;
pub use gazetteer::GazetteerRecognizer;
pub use segmenter::JiebaSegmenter;
pub use wordlist::{ListPolicy, WordListCatalog};

/// 加载词典/词表/实体表时的错误。
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid user dictionary: {0}")]
    UserDict(String),

    #[error("failed to build entity matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

pub(crate) fn read_to_string(path: &std::path::Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
