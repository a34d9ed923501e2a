//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑：校验输入 -> 调用公式库 -> 输出结果。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `input/`, `formula/`, `models/`, `utils/`
//! - 子模块: radius, recoil, linear, shell

pub mod linear;
pub mod radius;
pub mod recoil;
pub mod shell;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let precision = cli.precision;
    match cli.command {
        Commands::Radius(args) => radius::execute(args, precision),
        Commands::Recoil(args) => recoil::execute(args, precision),
        Commands::Linear(args) => linear::execute(args, precision),
        Commands::Shell(args) => shell::execute(args, precision),
    }
}
