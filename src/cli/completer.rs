//! 文件路径补全器
//!
//! 基于 rustyline 实现 Tab 补全功能，优先列出 DOT 文件

use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 常见的 DOT 文件扩展名
const DOT_EXTENSIONS: &[&str] = &[".dot", ".gv"];

/// 路径补全器
pub struct PathCompleter {
    files: FilenameCompleter,
}

impl Default for PathCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCompleter {
    pub fn new() -> Self {
        Self {
            files: FilenameCompleter::new(),
        }
    }
}

fn is_dot_candidate(pair: &Pair) -> bool {
    let name = pair.replacement.to_lowercase();
    name.ends_with('/') || DOT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

impl Completer for PathCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, mut candidates) = self.files.complete(line, pos, ctx)?;

        // 目录和 DOT 文件排在前面，其余保持原顺序
        candidates.sort_by_key(|pair| !is_dot_candidate(pair));
        Ok((start, candidates))
    }
}

impl Hinter for PathCompleter {
    type Hint = String;
}

impl Highlighter for PathCompleter {}

impl Validator for PathCompleter {}

impl Helper for PathCompleter {}
