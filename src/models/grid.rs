//! # 采样网格
//!
//! 屏幕坐标 x 的均匀采样，等价于 `linspace(start, end, n)`（包含两端点）。
//!
//! ## 依赖关系
//! - 被 `optics/` 和 `commands/simulate.rs` 使用

use crate::error::{FringeError, Result};

/// 均匀采样网格（严格递增，点数固定）
#[derive(Debug, Clone)]
pub struct SampleGrid {
    x: Vec<f64>,
}

impl SampleGrid {
    /// 默认采样点数
    pub const DEFAULT_POINTS: usize = 16000;

    /// 默认半宽（m），即 ±500 µm
    pub const DEFAULT_HALF_WIDTH: f64 = 5e-4;

    /// 生成 [start, end] 上的 n 个均匀采样点
    pub fn linspace(start: f64, end: f64, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(FringeError::InvalidGrid(format!(
                "at least 2 points required, got {}",
                n
            )));
        }
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(FringeError::InvalidGrid(format!(
                "interval [{}, {}] must be finite with start < end",
                start, end
            )));
        }

        let x = uniform(start, end, n);
        // 步长小于 start 处的浮点间隔时会出现重复坐标
        if !x.windows(2).all(|w| w[0] < w[1]) {
            return Err(FringeError::InvalidGrid(format!(
                "{} points over [{}, {}] are not strictly increasing in f64",
                n, start, end
            )));
        }

        Ok(Self { x })
    }

    /// 采样坐标
    pub fn as_slice(&self) -> &[f64] {
        &self.x
    }

    /// 采样点数
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// 采样间距
    pub fn step(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    /// 区间 (min, max)
    pub fn bounds(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            x: uniform(
                -Self::DEFAULT_HALF_WIDTH,
                Self::DEFAULT_HALF_WIDTH,
                Self::DEFAULT_POINTS,
            ),
        }
    }
}

/// 调用方保证 n >= 2 且 start < end
fn uniform(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    let mut x: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    // 末点精确落在 end 上
    x[n - 1] = end;
    x
}
