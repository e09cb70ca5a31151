//! # simulate 子命令 CLI 定义
//!
//! 计算所选公式变体的强度曲线，对每个可见度 V 生成一张图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/simulate.rs`

use super::physics::PhysicsArgs;
use crate::optics::Variant;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SimulateOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV curve table only (no figure)
    Csv,
}

impl SimulateOutputFormat {
    /// 主输出文件扩展名
    pub fn extension(self) -> &'static str {
        match self {
            SimulateOutputFormat::Png => "png",
            SimulateOutputFormat::Svg => "svg",
            SimulateOutputFormat::Csv => "csv",
        }
    }
}

/// simulate 子命令参数
#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub physics: PhysicsArgs,

    /// Formula variants to evaluate (comma separated)
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = Variant::DEFAULT_SET)]
    pub variants: Vec<Variant>,

    /// Visibility values to sweep; one output per value (comma separated)
    #[arg(long, value_delimiter = ',', default_values_t = [1.0, 0.5])]
    pub visibility: Vec<f64>,

    /// Screen coordinate range in µm (e.g., "-500:500")
    #[arg(long, default_value = "-500:500", allow_hyphen_values = true)]
    pub x_range: String,

    /// Number of sample points
    #[arg(long, default_value_t = 16000)]
    pub points: usize,

    /// Divide all curves of a run by their shared peak
    #[arg(long, default_value_t = false)]
    pub normalize: bool,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Output file name prefix; files are named <prefix>_V<visibility>.<ext>
    #[arg(long, default_value = "result")]
    pub prefix: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: SimulateOutputFormat,

    /// Also write the sampled curves as <prefix>_V<visibility>.csv
    #[arg(long, default_value_t = false)]
    pub export_curves: bool,

    /// Also write the parameter record as <prefix>_V<visibility>_params.csv
    #[arg(long, default_value_t = false)]
    pub save_params: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 2400)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub height: u32,

    /// Title for the plot (default: "Model with V=<visibility>")
    #[arg(long)]
    pub title: Option<String>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
