//! 分析配置

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 报告类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// 邻接矩阵（字典序）
    Matrix,
    /// BFS 分层
    Levels,
    /// DFS 时间戳、发现顺序与森林
    Dfs,
    /// 连通分量（BFS）
    Components,
    /// 全部
    All,
}

impl ReportKind {
    /// 输出顺序
    pub const ORDERED: [ReportKind; 4] = [
        ReportKind::Matrix,
        ReportKind::Levels,
        ReportKind::Dfs,
        ReportKind::Components,
    ];
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 纯文本
    #[default]
    Text,
    /// 表格
    Table,
    /// JSON
    Json,
}

/// 分析配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub reports: Vec<ReportKind>,
    pub format: OutputFormat,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reports: vec![ReportKind::All],
            format: OutputFormat::Text,
        }
    }
}

impl AnalysisConfig {
    pub fn new(reports: Vec<ReportKind>, format: OutputFormat) -> Self {
        Self { reports, format }
    }

    /// 是否需要某类报告
    pub fn wants(&self, kind: ReportKind) -> bool {
        self.reports
            .iter()
            .any(|&r| r == kind || r == ReportKind::All)
    }

    /// 去重后按固定顺序排列的报告
    pub fn resolved_reports(&self) -> Vec<ReportKind> {
        ReportKind::ORDERED
            .into_iter()
            .filter(|&kind| self.wants(kind))
            .collect()
    }
}
