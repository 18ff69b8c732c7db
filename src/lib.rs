//! GraphScan - DOT 图结构遍历工具
//!
//! 读取有向/无向图描述并计算结构遍历信息：
//! - 按字典序排列的邻接矩阵
//! - 从字典序首顶点出发的 BFS 分层
//! - 迭代式 DFS 的发现/完成时间戳与发现森林
//! - 基于 BFS 的连通分量扫描

pub mod algorithm;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod report;

// 重导出常用类型
pub use algorithm::{
    AdjacencyMatrix, BfsLevelEngine, BfsLevels, ComponentScan, ComponentScanner, DfsEngine,
    DfsForest, TimestampTable,
};
pub use config::{AnalysisConfig, OutputFormat, ReportKind};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, EdgeInsert, Graph, Vertex, VertexId};
pub use import::DotImporter;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
