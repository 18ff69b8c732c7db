//! BFS 分层
//!
//! 在邻接矩阵上做单源广度优先搜索，源点固定为字典序第一个顶点。

use super::matrix::AdjacencyMatrix;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// 同一距离上的顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub depth: usize,
    /// 按字典序下标升序
    pub vertices: Vec<String>,
}

/// 分层结果，不可达顶点不出现
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BfsLevels {
    pub source: Option<String>,
    pub levels: Vec<Level>,
}

impl BfsLevels {
    /// 顶点所在层
    pub fn depth_of(&self, name: &str) -> Option<usize> {
        self.levels
            .iter()
            .find(|level| level.vertices.iter().any(|v| v == name))
            .map(|level| level.depth)
    }

    pub fn reached(&self) -> usize {
        self.levels.iter().map(|l| l.vertices.len()).sum()
    }
}

/// BFS 分层引擎
pub struct BfsLevelEngine<'a> {
    matrix: &'a AdjacencyMatrix,
}

impl<'a> BfsLevelEngine<'a> {
    pub fn new(matrix: &'a AdjacencyMatrix) -> Self {
        Self { matrix }
    }

    /// 从 source（字典序下标）出发的边数距离，不可达为 None
    pub fn distances(&self, source: usize) -> Vec<Option<usize>> {
        let n = self.matrix.len();
        let mut dist = vec![None; n];
        if source >= n {
            return dist;
        }

        let mut queue = VecDeque::new();
        dist[source] = Some(0);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            let next = dist[u].map_or(0, |d| d + 1);
            for v in self.matrix.successors(u) {
                if dist[v].is_none() {
                    dist[v] = Some(next);
                    queue.push_back(v);
                }
            }
        }

        dist
    }

    /// 从字典序第一个顶点分层
    pub fn levels(&self) -> BfsLevels {
        if self.matrix.is_empty() {
            return BfsLevels::default();
        }

        let dist = self.distances(0);
        let max_depth = dist.iter().flatten().copied().max().unwrap_or(0);

        let levels: Vec<Level> = (0..=max_depth)
            .map(|depth| Level {
                depth,
                vertices: dist
                    .iter()
                    .enumerate()
                    .filter(|&(_, d)| *d == Some(depth))
                    .map(|(i, _)| self.matrix.name(i).to_string())
                    .collect(),
            })
            .collect();

        let result = BfsLevels {
            source: Some(self.matrix.name(0).to_string()),
            levels,
        };
        debug!(
            source = self.matrix.name(0),
            depth = max_depth,
            reached = result.reached(),
            "BFS 分层完成"
        );
        result
    }
}
