//! # nucalc - 核物理公式计算器
//!
//! 计算核半径、弹性散射反冲能，并对线性函数采样绘图。
//!
//! ## 子命令
//! - `radius` - 核半径 R = r0 · A^(1/3)
//! - `recoil` - 反冲能 E_R
//! - `linear` - 线性函数 y = m·x + b 采样、绘图、导出
//! - `shell`  - 交互式计算器
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── input/     (输入校验)
//!   │     ├── formula/   (公式库)
//!   │     ├── models/    (计算结果)
//!   │     └── plot/      (绘图与导出)
//!   ├── constants.rs (物理常数)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod constants;
mod error;
mod formula;
mod input;
mod models;
mod plot;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        if e.is_input_error() {
            utils::output::print_warning("Check the input values and run the command again");
        }
        std::process::exit(1);
    }
}
