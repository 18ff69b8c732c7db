//! 结果打印器
//!
//! 提供纯文本和表格两种格式的报告输出

use crate::algorithm::{AdjacencyMatrix, BfsLevels, ComponentScan, DfsForest, TimestampTable};
use crate::graph::{Graph, VertexId};
use prettytable::{format, Cell, Row, Table};
use std::collections::{BTreeMap, BTreeSet};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 纯文本
    Text,
    /// 表格模式
    Table,
}

/// 报告打印器
pub struct Printer<'g> {
    graph: &'g Graph,
    mode: PrintMode,
}

impl<'g> Printer<'g> {
    pub fn new(graph: &'g Graph, mode: PrintMode) -> Self {
        Self { graph, mode }
    }

    /// 图类型说明
    pub fn header(&self) -> String {
        if self.graph.is_directed() {
            "Directed graph loaded.\n".to_string()
        } else {
            "Undirected graph loaded.\n".to_string()
        }
    }

    /// 邻接矩阵
    pub fn matrix(&self, matrix: &AdjacencyMatrix) -> String {
        let mut output = String::from("Adjacency matrix:\n");

        match self.mode {
            PrintMode::Text => {
                for row in matrix.rows() {
                    let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                    output.push_str(&cells.join(" "));
                    output.push('\n');
                }
            }
            PrintMode::Table => {
                let mut table = Self::new_table();
                let mut header = vec![Cell::new("")];
                header.extend(matrix.names().iter().map(|n| Cell::new(n)));
                table.set_titles(Row::new(header));

                for (name, row) in matrix.names().iter().zip(matrix.rows()) {
                    let mut cells = vec![Cell::new(name)];
                    cells.extend(row.iter().map(|c| Cell::new(&c.to_string())));
                    table.add_row(Row::new(cells));
                }
                output.push_str(&table.to_string());
            }
        }

        output
    }

    /// BFS 分层
    pub fn levels(&self, levels: &BfsLevels) -> String {
        let mut output = match &levels.source {
            Some(source) => format!("BFS levels from {}:\n", source),
            None => "BFS levels:\n".to_string(),
        };

        for level in &levels.levels {
            output.push_str(&format!(
                "Level {}: {}\n",
                level.depth,
                level.vertices.join(" ")
            ));
        }

        output
    }

    /// DFS 时间戳表、发现顺序和父子关系
    pub fn dfs(&self, forest: &DfsForest) -> String {
        let mut output = self.timestamps(&forest.timestamps);

        output.push_str(&format!(
            "\nDFS discovery order: {}\n",
            self.join_names(&forest.discovery_order, " ")
        ));

        output.push_str("\nDFS (parent -> children):\n");
        for &v in &forest.discovery_order {
            output.push_str(&format!(
                "{} -> {{{}}}\n",
                self.graph.name(v),
                self.join_names(forest.children(v), ", ")
            ));
        }

        output
    }

    /// 连通分量
    pub fn components(&self, scan: &ComponentScan) -> String {
        let mut output = String::new();

        if !self.graph.is_directed() {
            output.push_str(&self.adjacency_lists());
            output.push('\n');
        }

        for component in &scan.components {
            output.push_str(&format!(
                "Component (BFS): {}\n",
                self.join_names(&component.members, " ")
            ));
        }

        output.push('\n');
        output.push_str(&self.timestamps(&scan.timestamps));
        output
    }

    /// 时间戳表，按插入顺序
    fn timestamps(&self, table: &TimestampTable) -> String {
        let mut output = String::from("Timestamps (discovery/finish):\n");

        match self.mode {
            PrintMode::Text => {
                for entry in table.entries() {
                    output.push_str(&format!(
                        "{:<12} d={} f={}\n",
                        self.graph.name(entry.vertex),
                        entry.tin,
                        entry.tout
                    ));
                }
            }
            PrintMode::Table => {
                let mut t = Self::new_table();
                t.set_titles(Row::new(vec![
                    Cell::new("Vertex"),
                    Cell::new("d"),
                    Cell::new("f"),
                ]));
                for entry in table.entries() {
                    t.add_row(Row::new(vec![
                        Cell::new(self.graph.name(entry.vertex)),
                        Cell::new(&entry.tin.to_string()),
                        Cell::new(&entry.tout.to_string()),
                    ]));
                }
                output.push_str(&t.to_string());
            }
        }

        output
    }

    /// 无向图的邻接表，字典序，仅含有边的顶点
    fn adjacency_lists(&self) -> String {
        let mut lists: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for edge in self.graph.edges() {
            let u = self.graph.name(edge.src());
            let v = self.graph.name(edge.dst());
            lists.entry(u).or_default().insert(v);
            lists.entry(v).or_default().insert(u);
        }

        let mut output = String::from("Adjacency lists:\n");
        for (u, neighbors) in lists {
            output.push_str(u);
            output.push(':');
            for v in neighbors {
                output.push(' ');
                output.push_str(v);
            }
            output.push('\n');
        }
        output
    }

    fn join_names(&self, ids: &[VertexId], sep: &str) -> String {
        ids.iter()
            .map(|&v| self.graph.name(v))
            .collect::<Vec<_>>()
            .join(sep)
    }

    fn new_table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }
}
