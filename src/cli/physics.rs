//! # 物理参数 CLI 定义
//!
//! `simulate` 与 `report` 共享的物理参数选项。
//!
//! ## 参数解析顺序
//! 内置默认值 < `--params` 参数记录文件 < 显式命令行选项
//!
//! ## 依赖关系
//! - 被 `cli/simulate.rs`、`cli/report.rs` 展开使用
//! - 使用 `optics/export.rs` 加载参数记录

use crate::error::Result;
use crate::models::{PhysicalParameters, ShiftConvention};
use crate::optics::export;

use clap::Args;
use std::path::PathBuf;

/// 物理参数选项（长度单位均为米）
#[derive(Args, Debug, Clone)]
pub struct PhysicsArgs {
    /// Parameter record CSV (name,value) to start from
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Amplitude scale I0
    #[arg(long)]
    pub i0: Option<f64>,

    /// Slit width w in meters
    #[arg(long)]
    pub slit_width: Option<f64>,

    /// Slit separation d in meters
    #[arg(long)]
    pub separation: Option<f64>,

    /// Wavelength λ in meters
    #[arg(long)]
    pub wavelength: Option<f64>,

    /// Screen distance L in meters
    #[arg(long)]
    pub screen_distance: Option<f64>,

    /// Local reference distance L1 in meters (geometric shift only)
    #[arg(long)]
    pub reference_distance: Option<f64>,

    /// Geometric shift convention for the two slit envelopes
    #[arg(long, value_enum, default_value_t = ShiftConvention::HalfBaseline)]
    pub shift_convention: ShiftConvention,
}

impl PhysicsArgs {
    /// 解析最终物理参数
    pub fn resolve(&self) -> Result<PhysicalParameters> {
        let base = match &self.params {
            Some(path) => export::load_params(path)?,
            None => PhysicalParameters::default(),
        };

        PhysicalParameters::new(
            self.i0.unwrap_or(base.i0),
            self.slit_width.unwrap_or(base.slit_width),
            self.separation.unwrap_or(base.separation),
            self.wavelength.unwrap_or(base.wavelength),
            self.screen_distance.unwrap_or(base.screen_distance),
            self.reference_distance.unwrap_or(base.reference_distance),
            base.visibility,
        )
    }
}
