//! # 曲线绘制与导出模块
//!
//! ## 子模块
//! - `chart`: 图表生成 (PNG/SVG)
//! - `export`: 数据导出 (CSV/XY)
//!
//! ## 依赖关系
//! - 被 `commands/linear.rs` 和 `commands/shell.rs` 使用

pub mod chart;
pub mod export;

/// 线性函数的文本形式，如 `y = 2·x + 1`
pub fn function_label(slope: f64, intercept: f64) -> String {
    // -0.0 按 +0 显示
    if intercept < 0.0 {
        format!("y = {}·x - {}", slope, -intercept)
    } else {
        format!("y = {}·x + {}", slope, intercept.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_label() {
        assert_eq!(function_label(2.0, 1.0), "y = 2·x + 1");
        assert_eq!(function_label(-0.5, -3.0), "y = -0.5·x - 3");
        assert_eq!(function_label(1.0, 0.0), "y = 1·x + 0");
        assert_eq!(function_label(2.0, -0.0), "y = 2·x + 0");
    }
}
