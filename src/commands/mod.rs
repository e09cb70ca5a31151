//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `optics/`, `utils/`
//! - 子模块: simulate, report

pub mod report;
pub mod simulate;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Simulate(args) => simulate::execute(args),
        Commands::Report(args) => report::execute(args),
    }
}
