//! # 物理常数
//!
//! 计算中用到的两个固定常数。
//!
//! ## 依赖关系
//! - 被 `formula/` 和 `input/` 使用

/// 核半径参数 r0 (fm)
pub const R0_FM: f64 = 1.2;

/// 1 u 对应的能量 (MeV/c²)
pub const U_TO_MEV: f64 = 931.494;

/// 原子质量单位 -> MeV
pub fn atomic_mass_to_mev(mass_u: f64) -> f64 {
    mass_u * U_TO_MEV
}
