//! # 核半径
//!
//! R = r0 · A^(1/3)，r0 = 1.2 fm。
//!
//! ## 依赖关系
//! - 使用 `constants.rs` 的 R0_FM

use crate::constants::R0_FM;
use crate::error::{NucalcError, Result};

/// 由质量数计算核半径 (fm)
pub fn nuclear_radius(mass_number: i64) -> Result<f64> {
    if mass_number < 1 {
        return Err(NucalcError::domain("A must be a positive integer"));
    }
    Ok(R0_FM * (mass_number as f64).cbrt())
}
