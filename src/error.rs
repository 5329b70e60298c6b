//! # 统一错误处理模块
//!
//! 定义 sbatchgen 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// sbatchgen 统一错误类型
#[derive(Error, Debug)]
pub enum SbatchError {
    // ─────────────────────────────────────────────────────────────
    // 字段注册表错误
    // ─────────────────────────────────────────────────────────────
    /// 字段标识符不在注册表中（调用方与注册表不一致）
    #[error("Unknown field identifier: '{field}'")]
    UnknownField { field: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数文件错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid parameter file: {path}\nReason: {reason}")]
    InvalidParameterFile { path: String, reason: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No script has been generated yet, nothing to save")]
    NothingToSave,
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SbatchError>;
