//! # 统一错误处理模块
//!
//! 定义 nucalc 的所有错误类型，使用 `thiserror` 派生。
//!
//! 计算相关的错误只有两类：
//! - `Parse`: 输入文本不是合法数字
//! - `Domain`: 数值合法但违反公式前提条件
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// nucalc 统一错误类型
#[derive(Error, Debug)]
pub enum NucalcError {
    // ─────────────────────────────────────────────────────────────
    // 输入错误（用户可修正）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid value for '{field}': '{input}' {reason}")]
    Parse {
        field: String,
        input: String,
        reason: String,
    },

    #[error("{0}")]
    Domain(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 终端 I/O
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NucalcError {
    /// 构造解析错误
    pub fn parse(field: &str, input: &str, reason: impl Into<String>) -> Self {
        NucalcError::Parse {
            field: field.to_string(),
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// 构造定义域错误
    pub fn domain(msg: impl Into<String>) -> Self {
        NucalcError::Domain(msg.into())
    }

    /// 是否为用户可通过修改输入修正的错误
    pub fn is_input_error(&self) -> bool {
        matches!(self, NucalcError::Parse { .. } | NucalcError::Domain(_))
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, NucalcError>;
