//! # 统一错误处理模块
//!
//! 定义 fringe 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// fringe 统一错误类型
#[derive(Error, Debug)]
pub enum FringeError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 物理参数 / 采样网格错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid physical parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid sample grid: {0}")]
    InvalidGrid(String),

    // ─────────────────────────────────────────────────────────────
    // 数值错误
    // ─────────────────────────────────────────────────────────────
    #[error("Array length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Cannot normalize curves: shared peak is {peak} (all-zero or non-finite parameter set)")]
    DegenerateNormalization { peak: f64 },

    #[error("Curve '{curve}' has a non-finite sample at index {index}")]
    NonFiniteIntensity { curve: String, index: usize },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // CSV / 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FringeError>;
