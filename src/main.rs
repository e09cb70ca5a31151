//! # fringe - 双缝衍射/干涉强度曲线工具
//!
//! 在屏幕坐标网格上计算多种唯象强度公式（单缝衍射、非相干叠加、
//! 相干干涉、局部相位调制），并绘图比较。
//!
//! ## 子命令
//! - `simulate` - 计算强度曲线并输出图表/数据（可见度扫描）
//! - `report`   - 打印派生物理尺度（条纹间距、包络宽度、几何位移）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── optics/    (强度模型、绘图、导出)
//!   │     ├── batch/     (并行扫描)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod optics;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
