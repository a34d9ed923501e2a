//! # 公式库
//!
//! 纯函数形式的公式计算，无状态、无 I/O。
//!
//! ## 子模块
//! - `radius`: 核半径 R = r0 · A^(1/3)
//! - `recoil`: 弹性散射反冲能
//! - `linear`: 线性函数采样
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `cli/shell` 调用
//! - 使用 `constants.rs`

pub mod linear;
pub mod radius;
pub mod recoil;

pub use linear::{linear_function_samples, DEFAULT_SAMPLES, MAX_SAMPLES};
pub use radius::nuclear_radius;
pub use recoil::recoil_energy;
