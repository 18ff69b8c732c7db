//! 交互式输入
//!
//! 未在命令行指定文件时提示输入路径

mod completer;

pub use completer::PathCompleter;

use crate::error::{Error, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;

/// 路径提示语
pub const PATH_PROMPT: &str = "Enter the graph file to read: ";

/// 读取一行路径，取第一个空白分隔的词
pub fn prompt_for_path() -> Result<PathBuf> {
    let mut editor: Editor<PathCompleter, DefaultHistory> =
        Editor::new().map_err(|e| Error::PromptError(e.to_string()))?;
    editor.set_helper(Some(PathCompleter::new()));

    match editor.readline(PATH_PROMPT) {
        Ok(line) => parse_path_line(&line),
        Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
            Err(Error::PromptError("未输入文件路径".to_string()))
        }
        Err(e) => Err(Error::PromptError(e.to_string())),
    }
}

/// 从输入行中取出路径
pub fn parse_path_line(line: &str) -> Result<PathBuf> {
    line.split_whitespace()
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| Error::PromptError("未输入文件路径".to_string()))
}
