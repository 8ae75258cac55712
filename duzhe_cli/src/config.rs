use std::path::PathBuf;

use crate::cli::Cli;

/// 命令运行所需的全部配置（由命令行参数与环境变量合并而来）。
#[derive(Debug, Clone)]
pub struct Settings {
    pub known_dir: PathBuf,
    pub unknown_dir: PathBuf,
    pub cedict: PathBuf,
    pub entities: Option<PathBuf>,
    pub user_dict: Option<PathBuf>,
    pub custom: Option<PathBuf>,
    pub display_limit: usize,
    pub json: bool,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            known_dir: cli.known_dir.clone(),
            unknown_dir: cli.unknown_dir.clone(),
            cedict: cli.cedict.clone(),
            entities: cli.entities.clone(),
            user_dict: cli.user_dict.clone(),
            custom: cli.custom.clone(),
            display_limit: cli.limit.max(1),
            json: cli.json,
        }
    }
}
