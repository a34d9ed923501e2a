//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `radius`: 核半径
//! - `recoil`: 反冲能
//! - `linear`: 线性函数采样与绘图
//! - `shell`: 交互式计算器
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: nuclear, linear, shell

pub mod linear;
pub mod nuclear;
pub mod shell;

use clap::{Parser, Subcommand};

/// nucalc - 核物理公式计算器
#[derive(Parser, Debug)]
#[command(name = "nucalc")]
#[command(version)]
#[command(about = "Nuclear radius and recoil energy calculator with a linear-function plotter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Number of decimals shown in results
    #[arg(long, global = true, env = "NUCALC_PRECISION", default_value_t = 3)]
    pub precision: usize,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Nuclear radius R = r0 * A^(1/3)
    Radius(nuclear::RadiusArgs),

    /// Recoil energy of the target nucleus in elastic scattering
    Recoil(nuclear::RecoilArgs),

    /// Sample and plot the linear function y = m*x + b
    Linear(linear::LinearArgs),

    /// Interactive calculator session
    Shell(shell::ShellArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_radius() {
        let cli = Cli::try_parse_from(["nucalc", "radius", "--mass-number", "27"]).unwrap();
        assert_eq!(cli.precision, 3);
        match cli.command {
            Commands::Radius(args) => assert_eq!(args.mass_number, "27"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_values() {
        let cli = Cli::try_parse_from([
            "nucalc", "linear", "--slope", "-2", "--intercept", "1", "--x-min", "-10", "--x-max",
            "10",
        ])
        .unwrap();
        match cli.command {
            Commands::Linear(args) => {
                assert_eq!(args.slope, "-2");
                assert_eq!(args.x_min, "-10");
                assert_eq!(args.samples, "500");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_precision() {
        let cli = Cli::try_parse_from([
            "nucalc", "recoil", "--energy", "5", "--theta", "90", "--mass", "20", "--precision", "5",
        ])
        .unwrap();
        assert_eq!(cli.precision, 5);
    }
}
