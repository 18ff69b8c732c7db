//! 图数据结构
//!
//! 解析器构建一次后只读；遍历状态全部由各算法自行持有

use super::edge::{Edge, EdgeId};
use super::vertex::{Vertex, VertexId};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::collections::HashSet;
use tracing::debug;

/// 邻接表中单个顶点的邻居列表
pub type NeighborList = SmallVec<[VertexId; 4]>;

/// 添加边的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// 新边
    Added(EdgeId),
    /// 边已存在，忽略
    DuplicateIgnored,
}

impl EdgeInsert {
    pub fn is_added(&self) -> bool {
        matches!(self, EdgeInsert::Added(_))
    }
}

/// 图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 是否有向
    directed: bool,
    /// 名称 -> 顶点，位置即顶点 ID
    vertices: IndexMap<String, Vertex>,
    /// 按添加顺序的边
    edges: Vec<Edge>,
    /// 去重键集合
    edge_keys: HashSet<(VertexId, VertexId)>,
    /// 邻接表，顺序为边的添加顺序
    adjacency: Vec<NeighborList>,
}

impl Graph {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，名称已存在时返回原 ID
    ///
    /// 重复声明带标签时覆盖原标签。
    pub fn add_vertex(&mut self, name: &str, label: Option<&str>) -> VertexId {
        if let Some((index, _, vertex)) = self.vertices.get_full_mut(name) {
            if let Some(label) = label {
                vertex.set_label(label);
            }
            return VertexId::new(index);
        }

        let id = VertexId::new(self.vertices.len());
        let vertex = match label {
            Some(label) => Vertex::with_label(id, name, label),
            None => Vertex::new(id, name),
        };
        self.vertices.insert(name.to_string(), vertex);
        self.adjacency.push(NeighborList::new());
        id
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get_index(id.index()).map(|(_, v)| v)
    }

    /// 通过名称获取顶点
    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertices.get(name)
    }

    /// 名称对应的 ID
    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.vertices.get_index_of(name).map(VertexId::new)
    }

    /// 顶点名称，ID 越界时返回空串
    pub fn name(&self, id: VertexId) -> &str {
        self.vertex(id).map(Vertex::name).unwrap_or("")
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边，端点不存在时自动创建
    pub fn add_edge(&mut self, src: &str, dst: &str, label: Option<&str>) -> EdgeInsert {
        let src_id = self.add_vertex(src, None);
        let dst_id = self.add_vertex(dst, None);

        let key = Edge::key(src_id, dst_id, self.directed);
        if !self.edge_keys.insert(key) {
            debug!(src, dst, "重复边已忽略");
            return EdgeInsert::DuplicateIgnored;
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(
            id,
            src_id,
            dst_id,
            label.map(str::to_string),
        ));

        self.adjacency[src_id.index()].push(dst_id);
        if !self.directed && src_id != dst_id {
            self.adjacency[dst_id.index()].push(src_id);
        }

        EdgeInsert::Added(id)
    }

    /// 按添加顺序的所有边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 两点是否相邻（无向图对称）
    pub fn has_edge(&self, src: VertexId, dst: VertexId) -> bool {
        self.edge_keys
            .contains(&Edge::key(src, dst, self.directed))
    }

    // ==================== 邻居查询 ====================

    /// 邻居列表，顺序与边的添加顺序一致
    ///
    /// 有向图只包含出边终点；无向图包含所有关联边的另一端。
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency
            .get(id.index())
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
}
