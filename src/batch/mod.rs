//! # 批量处理模块
//!
//! 提供统一的批量运行能力（可见度扫描中的每个 V 值为一次独立运行）。
//!
//! ## 功能
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{BatchRunner, ProcessResult};
