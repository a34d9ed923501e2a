//! # shell 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/shell.rs`

use clap::Args;

/// shell 子命令参数
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Clear the screen before each calculation
    #[arg(long, default_value_t = false)]
    pub clear: bool,
}
