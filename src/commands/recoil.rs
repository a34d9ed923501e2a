//! # recoil 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/nuclear.rs` 定义的 RecoilArgs
//! - 使用 `formula::recoil_energy` 和 `constants::atomic_mass_to_mev`

use crate::cli::nuclear::RecoilArgs;
use crate::constants::{atomic_mass_to_mev, U_TO_MEV};
use crate::error::Result;
use crate::formula;
use crate::input::{RecoilEnergyForm, RecoilEnergyInput};
use crate::models::{CalculationResult, Unit};
use crate::utils::output;

/// 公式的文本形式
pub const EQUATION: &str = "E_R = 2E² sin²(θ/2) / (m + 2E sin²(θ/2))";

/// 质量单位说明
pub fn unit_note() -> String {
    format!("Note: 1 u = {} MeV/c²", U_TO_MEV)
}

/// 执行 recoil 命令
pub fn execute(args: RecoilArgs, precision: usize) -> Result<()> {
    output::print_header("Recoil energy");
    output::print_equation(EQUATION);

    let input = RecoilEnergyForm::new(args.energy, args.theta, args.mass).validate()?;
    output::print_info(&unit_note());
    output::print_info(&format!(
        "E = {} MeV, θ = {}°, m = {} u ({:.3} MeV/c²)",
        input.energy_mev,
        input.theta_deg,
        input.mass_u,
        atomic_mass_to_mev(input.mass_u)
    ));

    let result = calculate(&input)?;
    output::print_result(&result.display(precision));
    Ok(())
}

/// 计算反冲能（靶质量先由 u 换算为 MeV）
pub fn calculate(input: &RecoilEnergyInput) -> Result<CalculationResult> {
    let mass_mev = atomic_mass_to_mev(input.mass_u);
    let recoil_kev = formula::recoil_energy(input.energy_mev, input.theta_deg, mass_mev)?;
    Ok(CalculationResult::scalar("E_R", recoil_kev, Unit::KiloElectronVolt))
}
