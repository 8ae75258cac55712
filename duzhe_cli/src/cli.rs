use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// duzhe - 中文阅读难度估算：按已知词表统计理解率，列出生词
#[derive(Parser, Debug)]
#[command(name = "duzhe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory of known-word lists (*.txt)
    #[arg(long, global = true, env = "DUZHE_KNOWN_DIR", default_value = "known")]
    pub known_dir: PathBuf,

    /// Directory of explicit unknown-word lists (*.txt)
    #[arg(long, global = true, env = "DUZHE_UNKNOWN_DIR", default_value = "unknown")]
    pub unknown_dir: PathBuf,

    /// CC-CEDICT file used for definitions
    #[arg(long, global = true, env = "DUZHE_CEDICT", default_value = "definitions.txt")]
    pub cedict: PathBuf,

    /// Entity gazetteer (`name<TAB>KIND` per line) used to exclude proper nouns
    #[arg(long, global = true, env = "DUZHE_ENTITIES", value_name = "FILE")]
    pub entities: Option<PathBuf>,

    /// Extra jieba user dictionary
    #[arg(long, global = true, env = "DUZHE_USER_DICT", value_name = "FILE")]
    pub user_dict: Option<PathBuf>,

    /// File of custom known words, one per line
    #[arg(long, global = true, env = "DUZHE_CUSTOM_WORDS", value_name = "FILE")]
    pub custom: Option<PathBuf>,

    /// Maximum number of unknown words shown per report
    #[arg(long, global = true, env = "DUZHE_DISPLAY_LIMIT", default_value_t = 20)]
    pub limit: usize,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors
    #[arg(short, long, global = true, env = "DUZHE_QUIET")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse every .txt file in a directory
    Batch {
        #[arg(value_name = "INPUT_DIR", default_value = "input")]
        input_dir: PathBuf,
    },

    /// Analyse one file, or stdin with "-"
    Check {
        #[arg(value_name = "FILE", default_value = "-")]
        file: String,
    },

    /// Show available word lists
    Lists,

    /// Interactive mode: paste text, get a report
    Repl,
}
