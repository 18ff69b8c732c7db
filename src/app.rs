//! 分析流程
//!
//! 加载图、按配置运行各算法并把报告写入输出流。各算法只读图，互不共享状态。

use crate::algorithm::{
    AdjacencyMatrix, BfsLevelEngine, BfsLevels, ComponentScan, ComponentScanner, DfsEngine,
    DfsForest,
};
use crate::config::{AnalysisConfig, OutputFormat, ReportKind};
use crate::error::Result;
use crate::graph::Graph;
use crate::import::DotImporter;
use crate::report::{AnalysisDocument, PrintMode, Printer};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// 一次分析的全部结果
#[derive(Debug, Default)]
pub struct AnalysisResults {
    pub matrix: Option<AdjacencyMatrix>,
    pub levels: Option<BfsLevels>,
    pub dfs: Option<DfsForest>,
    pub components: Option<ComponentScan>,
}

impl AnalysisResults {
    /// 只运行配置中需要的算法
    pub fn compute(graph: &Graph, config: &AnalysisConfig) -> Self {
        let mut results = Self::default();

        if config.wants(ReportKind::Matrix) || config.wants(ReportKind::Levels) {
            let matrix = AdjacencyMatrix::from_graph(graph);
            if config.wants(ReportKind::Levels) {
                results.levels = Some(BfsLevelEngine::new(&matrix).levels());
            }
            if config.wants(ReportKind::Matrix) {
                results.matrix = Some(matrix);
            }
        }
        if config.wants(ReportKind::Dfs) {
            results.dfs = Some(DfsEngine::new(graph).run());
        }
        if config.wants(ReportKind::Components) {
            results.components = Some(ComponentScanner::new(graph).run());
        }

        results
    }
}

/// 分析并输出报告
pub fn run<W: Write>(graph: &Graph, config: &AnalysisConfig, out: &mut W) -> Result<()> {
    let results = AnalysisResults::compute(graph, config);
    debug!(reports = ?config.resolved_reports(), format = ?config.format, "输出报告");

    match config.format {
        OutputFormat::Json => {
            let mut doc = AnalysisDocument::new(graph);
            if let Some(matrix) = &results.matrix {
                doc = doc.with_matrix(matrix);
            }
            if let Some(levels) = &results.levels {
                doc = doc.with_levels(levels);
            }
            if let Some(forest) = &results.dfs {
                doc = doc.with_dfs(forest);
            }
            if let Some(scan) = &results.components {
                doc = doc.with_components(scan);
            }
            writeln!(out, "{}", doc.to_json()?)?;
        }
        OutputFormat::Text | OutputFormat::Table => {
            let mode = if config.format == OutputFormat::Table {
                PrintMode::Table
            } else {
                PrintMode::Text
            };
            let printer = Printer::new(graph, mode);

            write!(out, "{}", printer.header())?;
            for kind in config.resolved_reports() {
                let section = match kind {
                    ReportKind::Matrix => results.matrix.as_ref().map(|m| printer.matrix(m)),
                    ReportKind::Levels => results.levels.as_ref().map(|l| printer.levels(l)),
                    ReportKind::Dfs => results.dfs.as_ref().map(|f| printer.dfs(f)),
                    ReportKind::Components => {
                        results.components.as_ref().map(|c| printer.components(c))
                    }
                    ReportKind::All => None,
                };
                if let Some(section) = section {
                    write!(out, "\n{}", section)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// 从文件加载并分析
pub fn analyze_file<P: AsRef<Path>, W: Write>(
    path: P,
    config: &AnalysisConfig,
    out: &mut W,
) -> Result<()> {
    let (graph, _) = DotImporter::new().load(path)?;
    run(&graph, config, out)
}
