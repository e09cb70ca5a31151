//! # 物理参数数据模型
//!
//! 定义双缝实验的不可变物理参数记录，以及两种几何位移约定。
//!
//! ## 单位
//! 所有长度均为 SI 单位（米），I0 与 V 为无量纲量。
//!
//! ## 依赖关系
//! - 被 `optics/` 和 `commands/` 使用
//! - 无外部模块依赖

use crate::error::{FringeError, Result};

use clap::ValueEnum;

/// 几何位移 x_shift 的计算约定
///
/// 两种约定量纲不同、代数上也不等价，只能显式选择其一。
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ShiftConvention {
    /// x_shift = L·d / (2·L1)
    #[default]
    HalfBaseline,
    /// x_shift = d·L1 / L
    Projected,
}

impl std::fmt::Display for ShiftConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftConvention::HalfBaseline => write!(f, "half-baseline"),
            ShiftConvention::Projected => write!(f, "projected"),
        }
    }
}

/// 双缝实验物理参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    /// 振幅标度 I0
    pub i0: f64,
    /// 缝宽 w（m）
    pub slit_width: f64,
    /// 缝间距 d（m）
    pub separation: f64,
    /// 波长 λ（m）
    pub wavelength: f64,
    /// 屏幕距离 L（m）
    pub screen_distance: f64,
    /// 局部参考距离 L1（m），仅用于位移计算
    pub reference_distance: f64,
    /// 可见度 V
    pub visibility: f64,
}

impl Default for PhysicalParameters {
    /// 电子干涉基准参数：w = 100 nm, d = 450 nm, λ = 2.5 pm, L = 10 m, L1 = 0.25 m
    fn default() -> Self {
        Self {
            i0: 1.0,
            slit_width: 100e-9,
            separation: 450e-9,
            wavelength: 2.5e-12,
            screen_distance: 10.0,
            reference_distance: 0.25,
            visibility: 1.0,
        }
    }
}

impl PhysicalParameters {
    /// 创建并校验参数
    pub fn new(
        i0: f64,
        slit_width: f64,
        separation: f64,
        wavelength: f64,
        screen_distance: f64,
        reference_distance: f64,
        visibility: f64,
    ) -> Result<Self> {
        let params = Self {
            i0,
            slit_width,
            separation,
            wavelength,
            screen_distance,
            reference_distance,
            visibility,
        };
        params.validate()?;
        Ok(params)
    }

    /// 返回替换了可见度的副本
    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }

    /// 返回替换了缝间距的副本
    pub fn with_separation(mut self, separation: f64) -> Self {
        self.separation = separation;
        self
    }

    /// 校验参数
    ///
    /// V 只要求有限，不限制在 [0, 1]。
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("I0", self.i0),
            ("w", self.slit_width),
            ("lambda", self.wavelength),
            ("L", self.screen_distance),
            ("L1", self.reference_distance),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(name, value, "must be a positive finite number"));
            }
        }

        if !self.separation.is_finite() || self.separation < 0.0 {
            return Err(invalid(
                "d",
                self.separation,
                "must be a non-negative finite number",
            ));
        }

        if !self.visibility.is_finite() {
            return Err(invalid("V", self.visibility, "must be finite"));
        }

        Ok(())
    }

    /// 按指定约定计算几何位移 x_shift（m）
    pub fn shift(&self, convention: ShiftConvention) -> f64 {
        match convention {
            ShiftConvention::HalfBaseline => self.half_baseline_shift(),
            ShiftConvention::Projected => self.projected_shift(),
        }
    }

    /// x_shift = L·d / (2·L1)
    pub fn half_baseline_shift(&self) -> f64 {
        self.screen_distance * (self.separation / (2.0 * self.reference_distance))
    }

    /// x_shift = d·L1 / L
    pub fn projected_shift(&self) -> f64 {
        self.separation * self.reference_distance / self.screen_distance
    }

    /// 干涉条纹间距 λL/d（m），d = 0 时无定义
    pub fn fringe_spacing(&self) -> Option<f64> {
        if self.separation > 0.0 {
            Some(self.wavelength * self.screen_distance / self.separation)
        } else {
            None
        }
    }

    /// 单缝衍射包络宽度 λL/w（m）
    pub fn envelope_width(&self) -> f64 {
        self.wavelength * self.screen_distance / self.slit_width
    }
}

fn invalid(name: &str, value: f64, reason: &str) -> FringeError {
    FringeError::InvalidParameter {
        name: name.to_string(),
        reason: format!("{} (got {})", reason, value),
    }
}
