//! 图算法模块
//!
//! 邻接矩阵与 BFS 分层使用字典序，DFS 与连通分量扫描使用插入顺序。

mod bfs_levels;
mod components;
mod dfs;
mod matrix;
mod state;

pub use bfs_levels::{BfsLevelEngine, BfsLevels, Level};
pub use components::{Component, ComponentScan, ComponentScanner};
pub use dfs::{DfsEngine, DfsForest};
pub use matrix::AdjacencyMatrix;
pub use state::{Clock, TimestampEntry, TimestampTable, VisitState};
