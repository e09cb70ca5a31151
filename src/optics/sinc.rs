//! # sinc² 函数
//!
//! 单缝衍射包络 sinc²(u) = (sin u / u)²，在 u = 0 处取极限值 1。
//!
//! ## 依赖关系
//! - 被 `optics/evaluator.rs` 调用
//! - 纯函数，无外部依赖

/// 计算 sinc²(u)
///
/// u = 0 时直接代入极限值 1，不做 0/0 除法。
#[inline]
pub fn normalized_sinc2(u: f64) -> f64 {
    let s = if u == 0.0 { 1.0 } else { u.sin() / u };
    s * s
}

/// 对数组逐元素计算 sinc²
pub fn normalized_sinc2_array(u: &[f64]) -> Vec<f64> {
    u.iter().copied().map(normalized_sinc2).collect()
}
