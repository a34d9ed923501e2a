//! # 反冲能
//!
//! 非相对论弹性散射中靶核获得的动能：
//!
//! ```text
//! E_R = 2 E² sin²(θ/2) / (m + 2 E sin²(θ/2))
//! ```
//!
//! 其中 E、m 单位为 MeV，结果换算为 keV。
//! θ 对任意实数都有定义（周期 360°），此处不限制角度范围。
//!
//! ## 依赖关系
//! - 被 `commands/recoil.rs` 调用
//! - 靶质量的 u -> MeV 换算由调用方通过 `constants::atomic_mass_to_mev` 完成

use crate::error::{NucalcError, Result};

/// 计算反冲能 (keV)
///
/// `energy_mev`: 入射能量 (MeV)，`theta_deg`: 散射角（度），
/// `target_mass_mev`: 靶质量 (MeV/c²)。
pub fn recoil_energy(energy_mev: f64, theta_deg: f64, target_mass_mev: f64) -> Result<f64> {
    if !(energy_mev > 0.0) {
        return Err(NucalcError::domain("E must be greater than 0 MeV"));
    }
    if !(target_mass_mev > 0.0) {
        return Err(NucalcError::domain("m must be greater than 0"));
    }

    let half_angle = theta_deg.to_radians() / 2.0;
    let sin2 = half_angle.sin().powi(2);

    let denominator = target_mass_mev + 2.0 * energy_mev * sin2;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(NucalcError::domain(
            "Degenerate denominator m + 2E·sin²(θ/2) (division by zero)",
        ));
    }

    let recoil_mev = 2.0 * energy_mev * energy_mev * sin2 / denominator;
    Ok(recoil_mev * 1000.0)
}
