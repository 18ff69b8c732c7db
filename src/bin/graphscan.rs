//! GraphScan 命令行入口
//!
//! 读取 DOT 图描述，输出邻接矩阵、BFS 分层、DFS 时间戳和连通分量报告

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use graphscan::app;
use graphscan::cli::prompt_for_path;
use graphscan::config::{AnalysisConfig, OutputFormat, ReportKind};
use graphscan::import::DotImporter;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphscan")]
#[command(about = "DOT 图结构遍历工具")]
#[command(version)]
struct Args {
    /// DOT 文件路径（省略时交互式输入）
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 输出的报告，可重复指定
    #[arg(short, long, value_enum, default_value = "all")]
    report: Vec<ReportKind>,

    /// 输出格式
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "错误:".red().bold(), err);
            let code = err
                .downcast_ref::<graphscan::Error>()
                .map_or(1, graphscan::Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let path = match args.file {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let (graph, _) = DotImporter::new()
        .load(&path)
        .context("加载图失败")?;

    let config = AnalysisConfig::new(args.report, args.format);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    app::run(&graph, &config, &mut out)?;
    Ok(())
}

/// 日志写到 stderr，stdout 只输出报告
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "graphscan=debug"
    } else {
        "graphscan=warn"
    };
    let filter =
        EnvFilter::try_from_env("GRAPHSCAN_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
