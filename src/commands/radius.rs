//! # radius 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/nuclear.rs` 定义的 RadiusArgs
//! - 使用 `formula::nuclear_radius`

use crate::cli::nuclear::RadiusArgs;
use crate::error::Result;
use crate::formula;
use crate::input::{NuclearRadiusForm, NuclearRadiusInput};
use crate::models::{CalculationResult, Unit};
use crate::utils::output;

/// 公式的文本形式
pub const EQUATION: &str = "R_eq = r0 · A^(1/3),  r0 = 1.2 fm";

/// 执行 radius 命令
pub fn execute(args: RadiusArgs, precision: usize) -> Result<()> {
    output::print_header("Nuclear radius");
    output::print_equation(EQUATION);

    let input = NuclearRadiusForm::new(args.mass_number).validate()?;
    let result = calculate(&input)?;

    output::print_result(&result.display(precision));
    Ok(())
}

/// 计算核半径
pub fn calculate(input: &NuclearRadiusInput) -> Result<CalculationResult> {
    let radius = formula::nuclear_radius(input.mass_number)?;
    Ok(CalculationResult::scalar("Req", radius, Unit::Femtometer))
}
