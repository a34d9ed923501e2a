//! # 计算结果数据模型
//!
//! 单个带单位的数值，或线性函数的采样序列。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `cli/shell.rs` 使用

use std::fmt;

/// 结果单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// 飞米
    Femtometer,
    /// 千电子伏
    KiloElectronVolt,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Femtometer => write!(f, "fm"),
            Unit::KiloElectronVolt => write!(f, "keV"),
        }
    }
}

/// 计算结果
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationResult {
    /// 单个数值
    Scalar {
        /// 显示用符号，如 "Req"
        symbol: &'static str,
        value: f64,
        unit: Unit,
    },
    /// (x, y) 采样序列
    Samples(Vec<(f64, f64)>),
}

impl CalculationResult {
    pub fn scalar(symbol: &'static str, value: f64, unit: Unit) -> Self {
        CalculationResult::Scalar {
            symbol,
            value,
            unit,
        }
    }

    /// 按给定小数位数格式化
    pub fn display(&self, precision: usize) -> String {
        match self {
            CalculationResult::Scalar {
                symbol,
                value,
                unit,
            } => format!("{} = {:.*} {}", symbol, precision, value, unit),
            CalculationResult::Samples(samples) => match (samples.first(), samples.last()) {
                (Some((x0, _)), Some((x1, _))) => format!(
                    "{} samples over [{:.*}, {:.*}]",
                    samples.len(),
                    precision,
                    x0,
                    precision,
                    x1
                ),
                _ => "0 samples".to_string(),
            },
        }
    }
}
