//! JSON 输出
//!
//! 把各算法结果中的顶点 ID 换成名称后序列化

use crate::algorithm::{AdjacencyMatrix, BfsLevels, ComponentScan, DfsForest, TimestampTable};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MatrixView<'a> {
    /// 行列顺序（字典序）
    pub order: &'a [String],
    pub rows: &'a [Vec<u8>],
}

#[derive(Debug, Serialize)]
pub struct TimestampView<'a> {
    pub vertex: &'a str,
    pub tin: u64,
    pub tout: u64,
}

#[derive(Debug, Serialize)]
pub struct ForestNode<'a> {
    pub vertex: &'a str,
    pub children: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct DfsView<'a> {
    pub timestamps: Vec<TimestampView<'a>>,
    pub discovery_order: Vec<&'a str>,
    pub forest: Vec<ForestNode<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ComponentsView<'a> {
    pub components: Vec<Vec<&'a str>>,
    pub timestamps: Vec<TimestampView<'a>>,
}

/// 一次分析的完整 JSON 文档
#[derive(Debug, Serialize)]
pub struct AnalysisDocument<'a> {
    pub directed: bool,
    pub vertices: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<MatrixView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<&'a BfsLevels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs: Option<DfsView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentsView<'a>>,
    #[serde(skip)]
    graph: &'a Graph,
}

impl<'a> AnalysisDocument<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            vertices: graph.vertices().map(|v| v.name()).collect(),
            matrix: None,
            levels: None,
            dfs: None,
            components: None,
            graph,
        }
    }

    pub fn with_matrix(mut self, matrix: &'a AdjacencyMatrix) -> Self {
        self.matrix = Some(MatrixView {
            order: matrix.names(),
            rows: matrix.rows(),
        });
        self
    }

    pub fn with_levels(mut self, levels: &'a BfsLevels) -> Self {
        self.levels = Some(levels);
        self
    }

    pub fn with_dfs(mut self, forest: &DfsForest) -> Self {
        let view = DfsView {
            timestamps: self.timestamps(&forest.timestamps),
            discovery_order: self.names(&forest.discovery_order),
            forest: forest
                .discovery_order
                .iter()
                .map(|&v| ForestNode {
                    vertex: self.name(v),
                    children: self.names(forest.children(v)),
                })
                .collect(),
        };
        self.dfs = Some(view);
        self
    }

    pub fn with_components(mut self, scan: &ComponentScan) -> Self {
        let view = ComponentsView {
            components: scan
                .components
                .iter()
                .map(|c| self.names(&c.members))
                .collect(),
            timestamps: self.timestamps(&scan.timestamps),
        };
        self.components = Some(view);
        self
    }

    /// 序列化为带缩进的 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::SerializationError(e.to_string()))
    }

    fn name(&self, v: VertexId) -> &'a str {
        self.graph.name(v)
    }

    fn names(&self, ids: &[VertexId]) -> Vec<&'a str> {
        ids.iter().map(|&v| self.name(v)).collect()
    }

    fn timestamps(&self, table: &TimestampTable) -> Vec<TimestampView<'a>> {
        table
            .entries()
            .iter()
            .map(|e| TimestampView {
                vertex: self.name(e.vertex),
                tin: e.tin,
                tout: e.tout,
            })
            .collect()
    }
}
