use std::io::{BufRead, Write};

use anyhow::Result;
use duzhe_core::Vocabulary;

use crate::commands::Toolkit;

/// 交互模式：每行文本单独分析。
///
/// - `:q` / `:quit` / `:exit` 退出（EOF 同样退出）
/// - `:add <词>...` 在本次会话里追加已知词
/// - `:select <词表>...` 重新选择已知词表（可省略 `.txt`）；不带参数时显示当前选择
pub fn repl<R: BufRead, W: Write>(kit: &Toolkit, input: &mut R, out: &mut W) -> Result<()> {
    let mut selected = kit.catalog.default_selection();
    let mut custom = kit.custom.clone();
    let mut vocabulary = kit.catalog.vocabulary(&selected, &custom)?;

    writeln!(
        out,
        "duzhe | known words: {} | lists: {}",
        vocabulary.known().len(),
        selected.join(", ")
    )?;
    writeln!(out, "粘贴中文文本后回车。:add <词> 添加已知词，:select <词表>... 切换词表，:q 退出。")?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        write!(out, "text> ")?;
        out.flush()?;
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let mut tokens = text.split_whitespace();
        let command = tokens.next().unwrap_or_default();
        if command == ":q" || command == ":quit" || command == ":exit" {
            break;
        }

        if command == ":add" {
            let words: Vec<&str> = tokens.collect();
            if words.is_empty() {
                writeln!(out, "用法：:add <词>...")?;
                continue;
            }
            for w in &words {
                custom.push('\n');
                custom.push_str(w);
            }
            vocabulary = rebuild(kit, &selected, &custom)?;
            writeln!(out, "added: {} | known words: {}", words.join(" "), vocabulary.known().len())?;
            continue;
        }

        if command == ":select" {
            let names: Vec<String> = tokens.map(list_file_name).collect();
            if names.is_empty() {
                writeln!(out, "selected: {}", selected.join(", "))?;
                continue;
            }
            let missing: Vec<&str> = names
                .iter()
                .filter(|n| kit.catalog.get(n).is_none())
                .map(String::as_str)
                .collect();
            if !missing.is_empty() {
                writeln!(out, "未找到词表：{}", missing.join(", "))?;
                continue;
            }
            selected = names;
            vocabulary = rebuild(kit, &selected, &custom)?;
            writeln!(
                out,
                "selected: {} | known words: {}",
                selected.join(", "),
                vocabulary.known().len()
            )?;
            continue;
        }

        if command.starts_with(':') {
            writeln!(out, "未知命令：{command}（可用 :add / :select / :q）")?;
            continue;
        }

        let outcome = kit.engine.analyze(text, &vocabulary);
        writeln!(out, "{}", kit.format_outcome(&outcome))?;
        writeln!(out, "--------------------")?;
    }

    Ok(())
}

fn rebuild(kit: &Toolkit, selected: &[String], custom: &str) -> Result<Vocabulary> {
    Ok(kit.catalog.vocabulary(selected, custom)?)
}

fn list_file_name(name: &str) -> String {
    if name.ends_with(".txt") {
        name.to_string()
    } else {
        format!("{name}.txt")
    }
}
