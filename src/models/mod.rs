//! # 数据模型模块
//!
//! 定义物理参数、采样网格和强度曲线数据模型。
//!
//! ## 依赖关系
//! - 被 `optics/` 和 `commands/` 使用
//! - 子模块: params, grid, curve

pub mod curve;
pub mod grid;
pub mod params;

pub use curve::{CurveSet, IntensityCurve};
pub use grid::SampleGrid;
pub use params::{PhysicalParameters, ShiftConvention};
