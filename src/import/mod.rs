//! 数据导入模块
//!
//! 从 DOT 文本构建只读的 [`Graph`]

mod lexer;
mod parser;

pub use parser::{DotParser, ImportStats};

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 首行（小写）包含 "digraph" 即为有向图
pub fn is_digraph(input: &str) -> bool {
    input
        .lines()
        .next()
        .map_or(false, |line| line.to_lowercase().contains("digraph"))
}

/// DOT 导入器
#[derive(Debug, Default, Clone, Copy)]
pub struct DotImporter;

impl DotImporter {
    pub fn new() -> Self {
        Self
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<(Graph, ImportStats)> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = input.len(), "读取 DOT 文件");
        self.parse_str(&input)
    }

    /// 从字符串解析
    pub fn parse_str(&self, input: &str) -> Result<(Graph, ImportStats)> {
        let directed = is_digraph(input);
        let (graph, stats) = DotParser::new(input, directed)?.parse()?;

        info!(
            directed,
            vertices = stats.vertices,
            edges = stats.edges,
            duplicates = stats.duplicate_edges,
            "图已加载"
        );
        Ok((graph, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_digraph_first_line_only() {
        assert!(is_digraph("DiGraph G {\n}"));
        assert!(is_digraph("strict digraph {}"));
        assert!(!is_digraph("graph G {\n a -- b }"));
        // 只看首行
        assert!(!is_digraph("// comment\ndigraph { }"));
        assert!(!is_digraph(""));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "digraph G {{").unwrap();
        writeln!(file, "  A -> B;").unwrap();
        writeln!(file, "  B -> C;").unwrap();
        writeln!(file, "}}").unwrap();

        let (graph, stats) = DotImporter::new().load(file.path()).unwrap();
        assert!(graph.is_directed());
        assert_eq!(stats.vertices, 3);
        assert_eq!(stats.edges, 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DotImporter::new()
            .load(dir.path().join("missing.dot"))
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_parse_failure_exit_code() {
        let err = DotImporter::new().parse_str("digraph { a -> ; }").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_comment_first_line_means_undirected() {
        // 首行不含 digraph，但关键字是 digraph：类型冲突
        let err = DotImporter::new()
            .parse_str("/* g */\ndigraph { a -> b }")
            .unwrap_err();
        assert!(matches!(err, Error::ParseFailure { line: 2, .. }));
    }
}
