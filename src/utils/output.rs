//! # 美化输出工具
//!
//! 提供统一的终端输出样式。`*_line` 函数返回带样式的字符串，
//! 供交互式会话写入任意输出流；`print_*` 函数直接打印到终端。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `cli/shell.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 成功消息行
pub fn success_line(msg: &str) -> String {
    format!("{} {}", "[OK]".green().bold(), msg)
}

/// 错误消息行
pub fn error_line(msg: &str) -> String {
    format!("{} {}", "[ERR]".red().bold(), msg)
}

/// 信息消息行
pub fn info_line(msg: &str) -> String {
    format!("{} {}", "[*]".blue().bold(), msg)
}

/// 公式行
pub fn equation_line(equation: &str) -> String {
    format!("    {}", equation.cyan())
}

/// 结果行
pub fn result_line(result: &str) -> String {
    format!("{} {}", "Result:".bold(), result.blue())
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{}", success_line(msg));
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{}", error_line(msg));
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{}", info_line(msg));
}

/// 打印公式
pub fn print_equation(equation: &str) {
    println!("{}\n", equation_line(equation));
}

/// 打印计算结果
pub fn print_result(result: &str) {
    println!("{}", result_line(result));
}

/// 标题栏
pub fn header_block(title: &str) -> String {
    let line = "─".repeat(60);
    format!("\n{}\n  {}\n{}\n", line.dimmed(), title.bold(), line.dimmed())
}

/// 打印标题栏
pub fn print_header(title: &str) {
    println!("{}", header_block(title));
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_message_text() {
        assert!(error_line("A must be a positive integer").contains("A must be a positive integer"));
        assert!(result_line("Req = 3.600 fm").contains("Req = 3.600 fm"));
        assert!(header_block("Nuclear radius").contains("Nuclear radius"));
    }
}
