//! 端到端场景测试：DOT 文件 -> 报告文本 / 进程退出码

use graphscan::app;
use graphscan::{AnalysisConfig, DotImporter, OutputFormat, ReportKind};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn write_dot(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn render_file(content: &str, reports: Vec<ReportKind>) -> String {
    let file = write_dot(content);
    let config = AnalysisConfig::new(reports, OutputFormat::Text);
    let mut out = Vec::new();
    app::analyze_file(file.path(), &config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn stamp(name: &str, tin: u64, tout: u64) -> String {
    format!("{:<12} d={} f={}\n", name, tin, tout)
}

#[test]
fn directed_matrix_and_levels() {
    let output = render_file(
        "digraph G {\n  A -> B;\n  B -> C;\n  A -> C;\n}\n",
        vec![ReportKind::Matrix, ReportKind::Levels],
    );
    assert_eq!(
        output,
        "Directed graph loaded.\n\
         \n\
         Adjacency matrix:\n\
         0 1 1\n\
         0 0 1\n\
         0 0 0\n\
         \n\
         BFS levels from A:\n\
         Level 0: A\n\
         Level 1: B C\n"
    );
}

#[test]
fn undirected_chain_dfs() {
    let output = render_file("graph G {\n  A -- B;\n  B -- C;\n}\n", vec![ReportKind::Dfs]);

    let mut expected = String::from("Undirected graph loaded.\n\nTimestamps (discovery/finish):\n");
    expected.push_str(&stamp("A", 1, 6));
    expected.push_str(&stamp("B", 2, 5));
    expected.push_str(&stamp("C", 3, 4));
    expected.push_str("\nDFS discovery order: A B C\n");
    expected.push_str("\nDFS (parent -> children):\nA -> {B}\nB -> {C}\nC -> {}\n");
    assert_eq!(output, expected);
}

#[test]
fn disjoint_undirected_components() {
    let output = render_file(
        "graph G {\n  A -- B;\n  C -- D;\n}\n",
        vec![ReportKind::Components],
    );

    let mut expected = String::from(
        "Undirected graph loaded.\n\
         \n\
         Adjacency lists:\n\
         A: B\n\
         B: A\n\
         C: D\n\
         D: C\n\
         \n\
         Component (BFS): A B\n\
         Component (BFS): C D\n\
         \n\
         Timestamps (discovery/finish):\n",
    );
    expected.push_str(&stamp("A", 1, 3));
    expected.push_str(&stamp("B", 2, 4));
    expected.push_str(&stamp("C", 5, 7));
    expected.push_str(&stamp("D", 6, 8));
    assert_eq!(output, expected);
}

#[test]
fn all_reports_in_fixed_order() {
    let output = render_file("digraph { x -> y }", vec![ReportKind::All]);

    let positions: Vec<usize> = [
        "Adjacency matrix:",
        "BFS levels from x:",
        "DFS discovery order:",
        "Component (BFS):",
    ]
    .iter()
    .map(|marker| output.find(marker).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!output.contains("Adjacency lists:"));
}

#[test]
fn labels_and_attributes_do_not_change_structure() {
    let plain = render_file("graph { a -- b; b -- c }", vec![ReportKind::All]);
    let decorated = render_file(
        "graph {\n  node [shape=box];\n  a [label=\"start\"];\n  a -- b [label=\"x\", weight=2];\n  b:e -- c:w;\n}\n",
        vec![ReportKind::All],
    );
    assert_eq!(plain, decorated);
}

#[test]
fn json_document_matches_text_results() {
    let file = write_dot("graph G {\n  A -- B;\n  C -- D;\n}\n");
    let config = AnalysisConfig::new(vec![ReportKind::All], OutputFormat::Json);
    let mut out = Vec::new();
    app::analyze_file(file.path(), &config, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["directed"], false);
    assert_eq!(value["components"]["components"][1][0], "C");
    assert_eq!(value["levels"]["source"], "A");
}

#[test]
fn missing_file_is_reported() {
    let err = DotImporter::new()
        .load("/definitely/not/here.dot")
        .unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn binary_exit_codes() {
    let bin = env!("CARGO_BIN_EXE_graphscan");

    let ok = write_dot("digraph { A -> B }");
    let status = Command::new(bin)
        .arg("--file")
        .arg(ok.path())
        .output()
        .unwrap();
    assert!(status.status.success());
    assert!(String::from_utf8_lossy(&status.stdout).starts_with("Directed graph loaded."));

    let missing = Command::new(bin)
        .args(["--file", "/definitely/not/here.dot"])
        .output()
        .unwrap();
    assert_eq!(missing.status.code(), Some(1));
    assert!(missing.stdout.is_empty());

    let broken = write_dot("graph { A -> B }");
    let failed = Command::new(bin)
        .arg("--file")
        .arg(broken.path())
        .output()
        .unwrap();
    assert_eq!(failed.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&failed.stderr).contains("DOT 解析失败"));
}
