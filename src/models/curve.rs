//! # 强度曲线数据模型
//!
//! 定义带标签的采样强度曲线，以及同一次运行共享的曲线集合。
//!
//! ## 依赖关系
//! - 被 `optics/` 产生，被 `optics/plot.rs`、`optics/export.rs` 消费

use crate::error::{FringeError, Result};

/// 单条强度曲线
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityCurve {
    /// 图例标签
    pub label: String,
    /// 每个网格点一个强度值
    pub values: Vec<f64>,
}

impl IntensityCurve {
    /// 创建新的强度曲线
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// 曲线最大值（空曲线返回 None）
    pub fn peak(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// 检查所有采样值均为有限数
    pub fn ensure_finite(&self) -> Result<()> {
        match self.values.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(FringeError::NonFiniteIntensity {
                curve: self.label.clone(),
                index,
            }),
            None => Ok(()),
        }
    }
}

/// 同一次运行中的曲线集合（归一化、绘图、导出的基本单位）
#[derive(Debug, Clone, Default)]
pub struct CurveSet {
    curves: Vec<IntensityCurve>,
    normalized: bool,
}

impl CurveSet {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加曲线，长度必须与已有曲线一致
    pub fn push(&mut self, curve: IntensityCurve) -> Result<()> {
        if let Some(first) = self.curves.first() {
            if first.values.len() != curve.values.len() {
                return Err(FringeError::LengthMismatch {
                    expected: first.values.len(),
                    found: curve.values.len(),
                });
            }
        }
        self.curves.push(curve);
        Ok(())
    }

    pub fn curves(&self) -> &[IntensityCurve] {
        &self.curves
    }

    pub(crate) fn curves_mut(&mut self) -> &mut [IntensityCurve] {
        &mut self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// 所有曲线的联合最大值
    pub fn shared_peak(&self) -> Option<f64> {
        self.curves.iter().filter_map(IntensityCurve::peak).reduce(f64::max)
    }

    /// 是否已按共享峰值归一化
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub(crate) fn mark_normalized(&mut self) {
        self.normalized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_reports_first_bad_index() {
        let curve = IntensityCurve::new("bad", vec![1.0, 2.0, f64::NAN, f64::INFINITY]);
        match curve.ensure_finite().unwrap_err() {
            FringeError::NonFiniteIntensity { curve, index } => {
                assert_eq!(curve, "bad");
                assert_eq!(index, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_push_rejects_length_mismatch() {
        let mut set = CurveSet::new();
        set.push(IntensityCurve::new("a", vec![0.0; 4])).unwrap();
        assert!(set.push(IntensityCurve::new("b", vec![0.0; 3])).is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_shared_peak_spans_all_curves() {
        let mut set = CurveSet::new();
        set.push(IntensityCurve::new("a", vec![0.5, 1.0])).unwrap();
        set.push(IntensityCurve::new("b", vec![3.0, 0.1])).unwrap();
        assert_eq!(set.shared_peak(), Some(3.0));
        assert_eq!(set.curves()[1].values[0], 3.0);
    }
}
