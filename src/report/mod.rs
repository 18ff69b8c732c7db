//! 报告输出模块

mod json;
mod printer;

pub use json::{AnalysisDocument, ComponentsView, DfsView, ForestNode, MatrixView, TimestampView};
pub use printer::{PrintMode, Printer};
