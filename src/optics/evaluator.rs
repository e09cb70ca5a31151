//! # 强度模型求值
//!
//! 在采样网格上逐元素计算双缝强度公式。
//!
//! ## 公式
//! - 单缝: I(x) = I0 · sinc²(π·w·x / (λ·L))
//! - 双缝包络: I1,2(x) = I0 · sinc²(π·w·(x ∓ x_shift) / (λ·L))
//! - 条纹相位: φ = 2π·d·x / (λ·L)，局部相位: φ1 = (2π/λ)·(d/2)·(x/L)
//! - 非相干叠加: I1 + I2
//! - 相干叠加: I1 + I2 + 2·V·√(I1·I2)·cos φ
//! - 未修正相干叠加: I1 + I2 + √(I1·I2)·cos φ
//! - 局部调制: I · (1 + V·trig(±2·φ1))，trig ∈ {cos, sin}
//!
//! ## 依赖关系
//! - 被 `optics/variant.rs` 调用
//! - 使用 `optics/sinc.rs`
//! - 使用 `models/params.rs`

use crate::error::{FringeError, Result};
use crate::models::{PhysicalParameters, ShiftConvention};
use crate::optics::sinc::normalized_sinc2_array;

use std::f64::consts::PI;

/// 条纹相位对
#[derive(Debug, Clone)]
pub struct Phases {
    /// 全局条纹相位 φ
    pub global: Vec<f64>,
    /// 局部相位 φ1（φ = 2·φ1）
    pub local: Vec<f64>,
}

/// 局部调制的三角函数族
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulation {
    Cosine,
    Sine,
}

impl Modulation {
    fn apply(self, arg: f64) -> f64 {
        match self {
            Modulation::Cosine => arg.cos(),
            Modulation::Sine => arg.sin(),
        }
    }
}

/// 被调制的缝，决定相位符号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slit {
    /// 第一条缝，符号 +1
    First,
    /// 第二条缝，符号 -1
    Second,
}

impl Slit {
    pub fn sign(self) -> f64 {
        match self {
            Slit::First => 1.0,
            Slit::Second => -1.0,
        }
    }
}

/// 以 center 为中心的单缝包络
fn slit_envelope(params: &PhysicalParameters, x: &[f64], center: f64) -> Vec<f64> {
    let k = PI * params.slit_width / (params.wavelength * params.screen_distance);
    let u: Vec<f64> = x.iter().map(|&xi| k * (xi - center)).collect();
    normalized_sinc2_array(&u)
        .into_iter()
        .map(|s| params.i0 * s)
        .collect()
}

/// 单缝衍射强度
pub fn single_slit_intensity(params: &PhysicalParameters, x: &[f64]) -> Vec<f64> {
    slit_envelope(params, x, 0.0)
}

/// 两条缝各自的衍射强度 (I1, I2)，中心分别位于 +x_shift 与 -x_shift
pub fn two_slit_intensities(
    params: &PhysicalParameters,
    x: &[f64],
    convention: ShiftConvention,
) -> (Vec<f64>, Vec<f64>) {
    let shift = params.shift(convention);
    (
        slit_envelope(params, x, shift),
        slit_envelope(params, x, -shift),
    )
}

/// 计算全局相位 φ 与局部相位 φ1
pub fn interference_phase(params: &PhysicalParameters, x: &[f64]) -> Phases {
    let d = params.separation;
    let lam = params.wavelength;
    let l = params.screen_distance;

    let global = x.iter().map(|&xi| 2.0 * PI * d * xi / (lam * l)).collect();
    let local = x
        .iter()
        .map(|&xi| (2.0 * PI / lam) * (d / 2.0) * (xi / l))
        .collect();

    Phases { global, local }
}

/// 非相干叠加 I1 + I2
pub fn combine_incoherent(i1: &[f64], i2: &[f64]) -> Result<Vec<f64>> {
    check_len(i1.len(), i2.len())?;
    Ok(i1.iter().zip(i2).map(|(a, b)| a + b).collect())
}

/// 相干叠加 I1 + I2 + 2·V·√(I1·I2)·cos φ
pub fn combine_coherent(
    i1: &[f64],
    i2: &[f64],
    phi: &[f64],
    visibility: f64,
) -> Result<Vec<f64>> {
    check_len(i1.len(), i2.len())?;
    check_len(i1.len(), phi.len())?;
    Ok(i1
        .iter()
        .zip(i2)
        .zip(phi)
        .map(|((a, b), p)| a + b + 2.0 * visibility * (a * b).sqrt() * p.cos())
        .collect())
}

/// 未修正相干叠加 I1 + I2 + √(I1·I2)·cos φ（无因子 2，无 V）
pub fn combine_uncorrected(i1: &[f64], i2: &[f64], phi: &[f64]) -> Result<Vec<f64>> {
    check_len(i1.len(), i2.len())?;
    check_len(i1.len(), phi.len())?;
    Ok(i1
        .iter()
        .zip(i2)
        .zip(phi)
        .map(|((a, b), p)| a + b + (a * b).sqrt() * p.cos())
        .collect())
}

/// 局部调制 I · (1 + V·trig(sign·2·φ1))
pub fn modulate_local(
    intensity: &[f64],
    phi1: &[f64],
    visibility: f64,
    slit: Slit,
    family: Modulation,
) -> Result<Vec<f64>> {
    check_len(intensity.len(), phi1.len())?;
    let sign = slit.sign();
    Ok(intensity
        .iter()
        .zip(phi1)
        .map(|(i, p)| i * (1.0 + visibility * family.apply(sign * 2.0 * p)))
        .collect())
}

fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(FringeError::LengthMismatch { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SampleGrid;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_single_slit_peak_at_center() {
        let params = PhysicalParameters::default();
        let i = single_slit_intensity(&params, &[0.0]);
        assert_eq!(i[0], params.i0);

        let brighter = PhysicalParameters {
            i0: 3.5,
            ..params
        };
        assert_eq!(single_slit_intensity(&brighter, &[0.0])[0], 3.5);
    }

    #[test]
    fn test_first_slit_regression_at_origin() {
        let params = PhysicalParameters::default();
        assert!(close(params.shift(ShiftConvention::HalfBaseline), 9e-6, 1e-18));

        let (i1, i2) = two_slit_intensities(&params, &[0.0], ShiftConvention::HalfBaseline);
        assert!(close(i1[0], 0.9957435958085835, 1e-9), "I1(0) = {}", i1[0]);
        // 对称参数下两缝在原点强度相同
        assert!(close(i1[0], i2[0], 1e-15));
    }

    #[test]
    fn test_two_slit_mirror_symmetry() {
        let params = PhysicalParameters::default();
        let shift = params.shift(ShiftConvention::HalfBaseline);

        let convention = ShiftConvention::HalfBaseline;
        for &x in &[-3e-4, -4.2e-5, 0.0, 1.7e-5, 2.5e-4] {
            let (i1, _) = two_slit_intensities(&params, &[x + shift], convention);
            let (_, i2) = two_slit_intensities(&params, &[x - shift], convention);
            assert!(close(i1[0], i2[0], 1e-9), "x = {}: {} vs {}", x, i1[0], i2[0]);
        }

        // I1(x) = I2(-x)
        let grid = SampleGrid::linspace(-1e-4, 1e-4, 201).unwrap();
        let (i1, i2) =
            two_slit_intensities(&params, grid.as_slice(), ShiftConvention::Projected);
        let n = grid.len();
        for i in 0..n {
            assert!(close(i1[i], i2[n - 1 - i], 1e-9));
        }
    }

    #[test]
    fn test_global_phase_is_twice_local() {
        let params = PhysicalParameters::default();
        let grid = SampleGrid::linspace(-5e-4, 5e-4, 101).unwrap();
        let phases = interference_phase(&params, grid.as_slice());

        for (g, l) in phases.global.iter().zip(&phases.local) {
            assert!(close(*g, 2.0 * l, 1e-9 * g.abs().max(1.0)));
        }
    }

    #[test]
    fn test_incoherent_equals_coherent_without_visibility() {
        let i1 = [0.2, 0.9, 1.0, 0.0];
        let i2 = [0.7, 0.1, 1.0, 0.4];
        let incoherent = combine_incoherent(&i1, &i2).unwrap();

        for &phi0 in &[0.0, 0.3, PI / 2.0, PI, 5.0] {
            let phi = [phi0; 4];
            let coherent = combine_coherent(&i1, &i2, &phi, 0.0).unwrap();
            assert_eq!(incoherent, coherent);
        }
    }

    #[test]
    fn test_coherent_is_periodic_in_phase() {
        let i1 = [0.2, 0.9, 1.0];
        let i2 = [0.7, 0.1, 1.0];
        let phi = [0.1, 1.3, -2.0];
        let shifted: Vec<f64> = phi.iter().map(|p| p + 2.0 * PI).collect();

        let a = combine_coherent(&i1, &i2, &phi, 0.8).unwrap();
        let b = combine_coherent(&i1, &i2, &shifted, 0.8).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert!(close(*x, *y, 1e-12));
        }
    }

    #[test]
    fn test_coherent_bright_and_dark_fringes() {
        let bright = combine_coherent(&[1.0], &[1.0], &[0.0], 1.0).unwrap();
        let dark = combine_coherent(&[1.0], &[1.0], &[PI], 1.0).unwrap();
        assert!(close(bright[0], 4.0, 1e-12));
        assert!(close(dark[0], 0.0, 1e-12));
    }

    #[test]
    fn test_uncorrected_differs_from_standard() {
        let uncorrected = combine_uncorrected(&[1.0], &[1.0], &[0.0]).unwrap();
        let standard = combine_coherent(&[1.0], &[1.0], &[0.0], 1.0).unwrap();
        assert!(close(uncorrected[0], 3.0, 1e-12));
        assert!(close(standard[0], 4.0, 1e-12));
    }

    #[test]
    fn test_modulation_identity_without_visibility() {
        let intensity = [0.0, 0.5, 1.0, 2.0];
        let phi1 = [0.0, 0.7, -1.4, 3.0];

        for family in [Modulation::Cosine, Modulation::Sine] {
            for slit in [Slit::First, Slit::Second] {
                let out = modulate_local(&intensity, &phi1, 0.0, slit, family).unwrap();
                assert_eq!(out, intensity.to_vec());
            }
        }
    }

    #[test]
    fn test_modulation_sign_symmetry() {
        let intensity = [1.0];
        let phi1 = [0.4];

        let c1 = modulate_local(&intensity, &phi1, 1.0, Slit::First, Modulation::Cosine).unwrap();
        let c2 = modulate_local(&intensity, &phi1, 1.0, Slit::Second, Modulation::Cosine).unwrap();
        assert!(close(c1[0], c2[0], 1e-15));

        let s1 = modulate_local(&intensity, &phi1, 1.0, Slit::First, Modulation::Sine).unwrap();
        let s2 = modulate_local(&intensity, &phi1, 1.0, Slit::Second, Modulation::Sine).unwrap();
        assert!(close(s1[0] + s2[0], 2.0, 1e-15));
        assert!(close(s1[0], 1.0 + 0.8_f64.sin(), 1e-15));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        assert!(combine_incoherent(&[1.0, 2.0], &[1.0]).is_err());
        assert!(combine_coherent(&[1.0], &[1.0], &[0.0, 1.0], 1.0).is_err());
        assert!(modulate_local(&[1.0], &[], 1.0, Slit::First, Modulation::Sine).is_err());
    }
}
