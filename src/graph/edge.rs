//! 边定义

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// 边 ID（按添加顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// 边
///
/// 无向图中的边只存一次，遍历和矩阵构建时按双向处理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    src: VertexId,
    dst: VertexId,
    label: Option<String>,
}

impl Edge {
    /// 创建新边
    pub fn new(id: EdgeId, src: VertexId, dst: VertexId, label: Option<String>) -> Self {
        Self {
            id,
            src,
            dst,
            label,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn src(&self) -> VertexId {
        self.src
    }

    pub fn dst(&self) -> VertexId {
        self.dst
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// 去重键：无向边按无序对比较
    pub fn key(src: VertexId, dst: VertexId, directed: bool) -> (VertexId, VertexId) {
        if directed || src <= dst {
            (src, dst)
        } else {
            (dst, src)
        }
    }
}
