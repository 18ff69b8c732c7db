//! 邻接矩阵
//!
//! 行列顺序为顶点名称的字典序，与插入顺序无关。

use crate::graph::Graph;
use serde::{Deserialize, Serialize};

/// 稠密 N×N 0/1 矩阵
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    /// 按字典序排列的顶点名称
    names: Vec<String>,
    /// cells[i][j] == 1 表示 names[i] 到 names[j] 有边
    cells: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    /// 从图构建矩阵
    pub fn from_graph(graph: &Graph) -> Self {
        let mut names: Vec<String> = graph.vertices().map(|v| v.name().to_string()).collect();
        names.sort();

        // 插入顺序下标 -> 字典序下标
        let mut position = vec![0usize; graph.vertex_count()];
        for vertex in graph.vertices() {
            if let Ok(pos) = names.binary_search_by(|n| n.as_str().cmp(vertex.name())) {
                position[vertex.id().index()] = pos;
            }
        }

        let n = names.len();
        let mut cells = vec![vec![0u8; n]; n];
        for edge in graph.edges() {
            let i = position[edge.src().index()];
            let j = position[edge.dst().index()];
            cells[i][j] = 1;
            if !graph.is_directed() {
                cells[j][i] = 1;
            }
        }

        Self { names, cells }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    /// 名称在字典序中的位置
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).ok()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i][j] != 0
    }

    /// 第 i 行中为 1 的列，升序
    pub fn successors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells[i]
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != 0)
            .map(|(j, _)| j)
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.cells[i][j] == self.cells[j][i]))
    }
}
