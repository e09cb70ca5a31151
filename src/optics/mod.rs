//! # 双缝强度模型模块
//!
//! 提供双缝衍射/干涉强度曲线的计算、归一化、绘图与导出。
//!
//! ## 子模块
//! - `sinc`: sinc² 包络函数
//! - `evaluator`: 逐元素强度公式
//! - `variant`: 公式变体枚举与曲线集合计算
//! - `normalize`: 共享峰值归一化
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs`、`commands/report.rs` 使用
//! - 使用 `models/` 的参数、网格与曲线

pub mod evaluator;
pub mod export;
pub mod normalize;
pub mod plot;
pub mod sinc;
pub mod variant;

pub use normalize::normalize_by_peak;
pub use variant::{FringeCalculator, Variant};
