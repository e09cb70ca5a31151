//! # report 子命令 CLI 定义
//!
//! 打印由物理参数导出的特征尺度。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/report.rs`

use super::physics::PhysicsArgs;

use clap::Args;
use std::path::PathBuf;

/// report 子命令参数
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub physics: PhysicsArgs,

    /// Visibility V recorded in the parameter dump
    #[arg(long)]
    pub visibility: Option<f64>,

    /// Write the parameter record (name,value) to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
