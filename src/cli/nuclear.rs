//! # radius / recoil 子命令 CLI 定义
//!
//! 数值参数以原始文本接收，由 `input/` 统一校验。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/radius.rs`, `commands/recoil.rs`

use clap::Args;

/// radius 子命令参数
#[derive(Args, Debug)]
pub struct RadiusArgs {
    /// Mass number A (positive integer)
    #[arg(short = 'A', long, allow_hyphen_values = true)]
    pub mass_number: String,
}

/// recoil 子命令参数
#[derive(Args, Debug)]
pub struct RecoilArgs {
    /// Incoming energy E in MeV
    #[arg(short = 'E', long, allow_hyphen_values = true)]
    pub energy: String,

    /// Scattering angle θ in degrees (0-360)
    #[arg(short, long, allow_hyphen_values = true)]
    pub theta: String,

    /// Target mass m in atomic mass units (1 u = 931.494 MeV/c²)
    #[arg(short, long, allow_hyphen_values = true)]
    pub mass: String,
}
