//! # 公式变体与曲线集合计算
//!
//! 用显式的变体枚举选择要计算的强度公式，替代逐个复制的脚本。
//!
//! ## 算法概述
//! 1. 校验物理参数
//! 2. 一次性计算共享中间量 (I1, I2, φ, φ1)
//! 3. 按请求顺序追加每个变体的曲线
//! 4. 检查所有曲线无 NaN/inf
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `optics/evaluator.rs`
//! - 使用 `models/` 的参数、网格与曲线

use crate::error::Result;
use crate::models::{CurveSet, IntensityCurve, PhysicalParameters, SampleGrid, ShiftConvention};
use crate::optics::evaluator::{
    self, combine_coherent, combine_incoherent, combine_uncorrected, modulate_local, Modulation,
    Phases, Slit,
};

use clap::ValueEnum;

/// 强度公式变体
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Single-slit diffraction I0·sinc²
    PlainDiffraction,
    /// Two slits without interference: I1 + I2
    IncoherentSum,
    /// Standard interference: I1 + I2 + 2V√(I1I2)cosφ
    CoherentStandard,
    /// Uncorrected interference: I1 + I2 + √(I1I2)cosφ
    CoherentUncorrected,
    /// Local modulation I·(1 + V·cos(±2φ1)) for each slit, plus their sum
    CosineModulation,
    /// Local modulation I·(1 + V·sin(±2φ1)) for each slit, plus their sum
    SineModulation,
    /// Standard interference with coincident slits (d = 0)
    ZeroSeparation,
}

impl Variant {
    /// 基准运行所用的变体组合
    pub const DEFAULT_SET: [Variant; 4] = [
        Variant::PlainDiffraction,
        Variant::IncoherentSum,
        Variant::CoherentUncorrected,
        Variant::CosineModulation,
    ];
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::PlainDiffraction => write!(f, "plain-diffraction"),
            Variant::IncoherentSum => write!(f, "incoherent-sum"),
            Variant::CoherentStandard => write!(f, "coherent-standard"),
            Variant::CoherentUncorrected => write!(f, "coherent-uncorrected"),
            Variant::CosineModulation => write!(f, "cosine-modulation"),
            Variant::SineModulation => write!(f, "sine-modulation"),
            Variant::ZeroSeparation => write!(f, "zero-separation"),
        }
    }
}

/// 双缝强度计算器
pub struct FringeCalculator {
    params: PhysicalParameters,
    convention: ShiftConvention,
}

impl FringeCalculator {
    /// 创建新的计算器
    pub fn new(params: PhysicalParameters, convention: ShiftConvention) -> Self {
        Self { params, convention }
    }

    /// 计算请求的全部变体，重复的变体只计算一次
    pub fn evaluate(&self, grid: &SampleGrid, variants: &[Variant]) -> Result<CurveSet> {
        self.params.validate()?;

        let x = grid.as_slice();
        let (i1, i2) = evaluator::two_slit_intensities(&self.params, x, self.convention);
        let phases = evaluator::interference_phase(&self.params, x);
        let v = self.params.visibility;

        let mut seen = Vec::with_capacity(variants.len());
        let mut set = CurveSet::new();

        for &variant in variants {
            if seen.contains(&variant) {
                continue;
            }
            seen.push(variant);

            match variant {
                Variant::PlainDiffraction => {
                    set.push(IntensityCurve::new(
                        "1 slit (diffraction)",
                        evaluator::single_slit_intensity(&self.params, x),
                    ))?;
                }
                Variant::IncoherentSum => {
                    set.push(IntensityCurve::new(
                        "2 slits: I1 + I2",
                        combine_incoherent(&i1, &i2)?,
                    ))?;
                }
                Variant::CoherentStandard => {
                    set.push(IntensityCurve::new(
                        format!("Interference 2V√(I1I2)cosφ, V={}", v),
                        combine_coherent(&i1, &i2, &phases.global, v)?,
                    ))?;
                }
                Variant::CoherentUncorrected => {
                    set.push(IntensityCurve::new(
                        "Interference √(I1I2)cosφ (uncorrected)",
                        combine_uncorrected(&i1, &i2, &phases.global)?,
                    ))?;
                }
                Variant::CosineModulation => {
                    self.push_modulation(&mut set, &i1, &i2, &phases, Modulation::Cosine)?;
                }
                Variant::SineModulation => {
                    self.push_modulation(&mut set, &i1, &i2, &phases, Modulation::Sine)?;
                }
                Variant::ZeroSeparation => {
                    let coincident = self.params.with_separation(0.0);
                    let (z1, z2) =
                        evaluator::two_slit_intensities(&coincident, x, self.convention);
                    let zero_phase = evaluator::interference_phase(&coincident, x);
                    set.push(IntensityCurve::new(
                        format!("Coincident slits (d = 0), V={}", v),
                        combine_coherent(&z1, &z2, &zero_phase.global, v)?,
                    ))?;
                }
            }
        }

        for curve in set.curves() {
            curve.ensure_finite()?;
        }

        Ok(set)
    }

    /// 追加两条缝的局部调制曲线及其和
    fn push_modulation(
        &self,
        set: &mut CurveSet,
        i1: &[f64],
        i2: &[f64],
        phases: &Phases,
        family: Modulation,
    ) -> Result<()> {
        let v = self.params.visibility;
        let trig = match family {
            Modulation::Cosine => "cos",
            Modulation::Sine => "sin",
        };

        let m1 = modulate_local(i1, &phases.local, v, Slit::First, family)?;
        let m2 = modulate_local(i2, &phases.local, v, Slit::Second, family)?;
        let sum = combine_incoherent(&m1, &m2)?;

        set.push(IntensityCurve::new(
            format!("I1 + I1·V·{}(2φ1), V={}", trig, v),
            m1,
        ))?;
        set.push(IntensityCurve::new(
            format!("I2 + I2·V·{}(-2φ1), V={}", trig, v),
            m2,
        ))?;
        set.push(IntensityCurve::new(
            format!("Sum of {} modulations, V={}", trig, v),
            sum,
        ))?;

        Ok(())
    }
}
