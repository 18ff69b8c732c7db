//! 顶点定义
//!
//! 顶点以名称为身份，索引在插入时分配，作为所有遍历状态数组的下标

use serde::{Deserialize, Serialize};

/// 顶点 ID（插入顺序下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 顶点名称（全局唯一）
    name: String,
    /// 显示标签，不参与遍历
    label: Option<String>,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: VertexId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            label: None,
        }
    }

    /// 创建带标签的顶点
    pub fn with_label(id: VertexId, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            label: Some(label.into()),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// 设置标签
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }
}
