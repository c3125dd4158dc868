//! # 统一错误处理模块
//!
//! 定义 adpiplot 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个数据文件的读取失败（文件缺失、无有效数据、列越界）不是错误，
//! 而是 `models::series::ReadFailure`，由调用方汇总后再决定是否转为错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// adpiplot 统一错误类型
#[derive(Error, Debug)]
pub enum AdpiError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid system configuration: {0}")]
    Config(String),

    #[error("Unknown column '{label}'. Available columns: {available}")]
    UnknownColumn { label: String, available: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid data in {path}: {reason}")]
    InvalidData { path: String, reason: String },

    #[error("{count} data file(s) missing or invalid")]
    MissingOrInvalid { count: usize },

    #[error("No valid data file found: nothing was plotted")]
    NoDataPlotted,

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plot rendering failed: {0}")]
    Plot(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AdpiError>;
