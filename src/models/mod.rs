//! # 数据模型模块
//!
//! 定义计算结果数据模型。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `cli/shell.rs` 使用
//! - 子模块: result

pub mod result;

pub use result::{CalculationResult, Unit};
