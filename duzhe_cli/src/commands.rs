//! 子命令：batch / check / lists。返回值表示命令是否成功。
//!
//! 输出统一写到传入的 `out`（stdout），日志走 tracing（stderr）。

use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use duzhe_core::{
    AnalysisError, Engine, Vocabulary, model::Comprehension, report::ReportWriter,
};
use duzhe_dict::{
    CedictDictionary, GazetteerRecognizer, JiebaSegmenter, ListPolicy, WordListCatalog,
    wordlist::ListGroup,
};
use duzhe_pinyin::ToneRomanizer;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::json;

use crate::config::Settings;

pub type DuzheEngine = Engine<JiebaSegmenter, Option<GazetteerRecognizer>>;

/// 一次运行共享的只读协作方。
pub struct Toolkit {
    pub engine: DuzheEngine,
    pub cedict: CedictDictionary,
    pub catalog: WordListCatalog,
    /// `--custom` 文件内容（每行一个已知词）
    pub custom: String,
    pub display_limit: usize,
    pub json: bool,
}

impl Toolkit {
    pub fn load(settings: &Settings, policy: ListPolicy) -> Result<Self> {
        let catalog = WordListCatalog::scan(&settings.known_dir, &settings.unknown_dir, policy)?;
        let segmenter = match &settings.user_dict {
            Some(p) => JiebaSegmenter::with_user_dict(p)?,
            None => JiebaSegmenter::new(),
        };
        let recognizer = settings
            .entities
            .as_ref()
            .map(|p| GazetteerRecognizer::from_path(p))
            .transpose()?;
        let custom = match &settings.custom {
            Some(p) => std::fs::read_to_string(p)
                .with_context(|| format!("failed to read custom words '{}'", p.display()))?,
            None => String::new(),
        };
        Ok(Self {
            engine: Engine::new(segmenter, recognizer),
            cedict: CedictDictionary::from_path_or_empty(&settings.cedict),
            catalog,
            custom,
            display_limit: settings.display_limit,
            json: settings.json,
        })
    }

    /// 默认选择（`known/` 下全部词表）+ 自定义词。
    pub fn default_vocabulary(&self) -> Result<Vocabulary> {
        Ok(self
            .catalog
            .vocabulary(&self.catalog.default_selection(), &self.custom)?)
    }

    /// 把一次分析的结果格式化为文本报告或 JSON。
    pub fn format_outcome(&self, outcome: &Result<Comprehension, AnalysisError>) -> String {
        let romanizer = (&self.cedict, ToneRomanizer::new());
        let writer = ReportWriter::new(&self.cedict, &romanizer).display_limit(self.display_limit);
        if !self.json {
            return writer.render_outcome(outcome);
        }
        let value = match outcome {
            Ok(c) => serde_json::to_value(writer.render(c)),
            Err(e) => Ok(json!({ "error": e.to_string() })),
        };
        value
            .and_then(|v| serde_json::to_string_pretty(&v))
            .unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
    }
}

enum FileOutcome {
    Skipped,
    Failed(String),
    Analysed(Result<Comprehension, AnalysisError>),
}

pub fn batch(settings: &Settings, input_dir: &Path, out: &mut impl Write) -> Result<bool> {
    if !input_dir.exists() {
        tracing::error!(dir = %input_dir.display(), "input directory not found");
        writeln!(out, "Error: Input directory '{}' does not exist.", input_dir.display())?;
        writeln!(out, "Please create the directory and add .txt files to analyze.")?;
        return Ok(false);
    }
    if !input_dir.is_dir() {
        tracing::error!(dir = %input_dir.display(), "input path is not a directory");
        writeln!(out, "Error: '{}' is not a directory.", input_dir.display())?;
        return Ok(false);
    }

    let files = txt_files(input_dir)?;
    if files.is_empty() {
        tracing::warn!(dir = %input_dir.display(), "no .txt files found");
        writeln!(out, "No .txt files found in '{}' directory.", input_dir.display())?;
        writeln!(out, "Please add .txt files containing Chinese text to analyze.")?;
        return Ok(true);
    }

    let kit = Toolkit::load(settings, ListPolicy::Strict)?;
    let vocabulary = kit.default_vocabulary()?;
    if !kit.json {
        writeln!(out, "Processing {} file(s)...", files.len())?;
    }

    // 并行分析；collect 保持文件名顺序
    let results: Vec<(String, FileOutcome)> = files
        .par_iter()
        .map(|path| {
            let name = file_name(path);
            let outcome = match std::fs::read_to_string(path) {
                Err(e) => {
                    tracing::error!(file = %name, error = %e, "error processing file");
                    FileOutcome::Failed(e.to_string())
                }
                Ok(text) if text.trim().is_empty() => {
                    tracing::warn!(file = %name, "file is empty, skipping");
                    FileOutcome::Skipped
                }
                Ok(text) => FileOutcome::Analysed(kit.engine.analyze(&text, &vocabulary)),
            };
            (name, outcome)
        })
        .collect();

    if kit.json {
        let items: Vec<serde_json::Value> = results
            .iter()
            .map(|(name, outcome)| match outcome {
                FileOutcome::Skipped => json!({ "file": name, "skipped": "empty file" }),
                FileOutcome::Failed(e) => json!({ "file": name, "error": e }),
                FileOutcome::Analysed(Err(e)) => json!({ "file": name, "error": e.to_string() }),
                FileOutcome::Analysed(Ok(c)) => {
                    let romanizer = (&kit.cedict, ToneRomanizer::new());
                    let writer = ReportWriter::new(&kit.cedict, &romanizer).display_limit(kit.display_limit);
                    json!({ "file": name, "report": writer.render(c) })
                }
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
        return Ok(true);
    }

    let banner = "=".repeat(60);
    for (name, outcome) in &results {
        match outcome {
            FileOutcome::Skipped => writeln!(out, "\n[{name}] - SKIPPED (empty file)")?,
            FileOutcome::Failed(e) => writeln!(out, "\n[{name}] - ERROR: {e}")?,
            FileOutcome::Analysed(result) => {
                writeln!(out, "\n{banner}")?;
                writeln!(out, "File: {name}")?;
                writeln!(out, "{banner}")?;
                writeln!(out, "{}", kit.format_outcome(result))?;
            }
        }
    }
    Ok(true)
}

/// 分析单个文件；`-` 表示 stdin。
pub fn check(settings: &Settings, file: &str, out: &mut impl Write) -> Result<bool> {
    let text = if file == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s).context("failed to read stdin")?;
        s
    } else {
        std::fs::read_to_string(file).with_context(|| format!("failed to read '{file}'"))?
    };
    check_text(settings, &text, out)
}

pub fn check_text(settings: &Settings, text: &str, out: &mut impl Write) -> Result<bool> {
    let kit = Toolkit::load(settings, ListPolicy::Lenient)?;
    let vocabulary = kit.default_vocabulary()?;
    let outcome = kit.engine.analyze(text, &vocabulary);
    writeln!(out, "{}", kit.format_outcome(&outcome))?;
    Ok(outcome.is_ok())
}

#[derive(Debug, Serialize)]
struct ListRow {
    name: String,
    display_name: String,
    group: &'static str,
    words: usize,
    selected: bool,
}

pub fn lists(settings: &Settings, out: &mut impl Write) -> Result<bool> {
    let catalog = WordListCatalog::scan(&settings.known_dir, &settings.unknown_dir, ListPolicy::Lenient)?;
    let selected = catalog.default_selection();

    let mut rows = Vec::with_capacity(catalog.lists().len());
    for list in catalog.lists() {
        rows.push(ListRow {
            name: list.name.clone(),
            display_name: list.display_name(),
            group: group_title(list.group()),
            words: list.read()?.len(),
            selected: selected.contains(&list.name),
        });
    }

    if settings.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(true);
    }
    if rows.is_empty() {
        writeln!(out, "No word lists found.")?;
        return Ok(true);
    }
    let mut current = "";
    for row in &rows {
        if row.group != current {
            current = row.group;
            writeln!(out, "{current}:")?;
        }
        let mark = if row.selected { 'x' } else { ' ' };
        writeln!(out, "  [{mark}] {} ({} words)", row.display_name, row.words)?;
    }
    Ok(true)
}

fn group_title(group: ListGroup) -> &'static str {
    match group {
        ListGroup::Hsk2 => "HSK 2.0",
        ListGroup::Hsk3 => "HSK 3.0",
        ListGroup::Other => "Other",
    }
}

fn txt_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("failed to read '{}'", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
