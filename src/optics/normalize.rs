//! # 共享峰值归一化
//!
//! 将同一次运行的所有曲线除以同一个标量：全部采样值的联合最大值。
//! 归一化后各曲线的相对高度保持可比。
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `models/curve.rs` 的 CurveSet

use crate::error::{FringeError, Result};
use crate::models::CurveSet;

/// 按联合峰值归一化曲线集合，返回所用的除数
///
/// 除数在任何除法之前一次性求出。峰值非正或非有限时返回错误，曲线保持不变。
pub fn normalize_by_peak(set: &mut CurveSet) -> Result<f64> {
    let peak = set.shared_peak().unwrap_or(0.0);

    if !peak.is_finite() || peak <= 0.0 {
        return Err(FringeError::DegenerateNormalization { peak });
    }

    for curve in set.curves_mut() {
        for v in curve.values.iter_mut() {
            *v /= peak;
        }
    }
    set.mark_normalized();

    Ok(peak)
}
