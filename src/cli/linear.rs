//! # linear 子命令 CLI 定义
//!
//! 线性函数 y = m·x + b 的采样、绘图和导出。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/linear.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (x, y)
    Csv,
    /// XY data file (tab separated)
    Xy,
}

impl std::fmt::Display for PlotOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotOutputFormat::Png => write!(f, "png"),
            PlotOutputFormat::Svg => write!(f, "svg"),
            PlotOutputFormat::Csv => write!(f, "csv"),
            PlotOutputFormat::Xy => write!(f, "xy"),
        }
    }
}

/// linear 子命令参数
#[derive(Args, Debug)]
pub struct LinearArgs {
    /// Slope m
    #[arg(short = 'm', long, allow_hyphen_values = true)]
    pub slope: String,

    /// Intercept b
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    pub intercept: String,

    /// Lower bound of the x range
    #[arg(long, allow_hyphen_values = true)]
    pub x_min: String,

    /// Upper bound of the x range
    #[arg(long, allow_hyphen_values = true)]
    pub x_max: String,

    /// Number of evenly spaced samples
    #[arg(short = 'n', long, default_value = "500", allow_hyphen_values = true)]
    pub samples: String,

    /// Output file path
    #[arg(short, long, default_value = "linear.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<PlotOutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: the function itself)
    #[arg(long)]
    pub title: Option<String>,

    /// Number of sample rows printed as a table
    #[arg(long, default_value_t = 10)]
    pub table_rows: usize,

    /// Skip writing the output file
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
