//! # 线性函数采样
//!
//! 在 [x_min, x_max] 上均匀取 n 个点（含两端），y = m·x + b。
//!
//! ## 依赖关系
//! - 被 `commands/linear.rs` 调用
//! - 结果交给 `plot.rs` / `export.rs` 输出

use crate::error::{NucalcError, Result};

/// 默认采样点数
pub const DEFAULT_SAMPLES: usize = 500;

/// 采样点数上限
pub const MAX_SAMPLES: usize = 1_000_000;

/// 对 y = m·x + b 均匀采样
pub fn linear_function_samples(
    slope: f64,
    intercept: f64,
    x_min: f64,
    x_max: f64,
    n: usize,
) -> Result<Vec<(f64, f64)>> {
    if !(x_min < x_max) {
        return Err(NucalcError::domain("x_min must be less than x_max"));
    }
    if n < 2 {
        return Err(NucalcError::domain("Number of samples must be at least 2"));
    }
    if n > MAX_SAMPLES {
        return Err(NucalcError::domain(format!(
            "Number of samples must be at most {}",
            MAX_SAMPLES
        )));
    }

    let step = (x_max - x_min) / (n - 1) as f64;
    if !step.is_finite() {
        return Err(NucalcError::domain("x range is too wide to sample"));
    }
    let samples = (0..n)
        .map(|i| {
            // 末点直接取 x_max，避免累积误差
            let x = if i == n - 1 {
                x_max
            } else {
                x_min + i as f64 * step
            };
            (x, slope * x + intercept)
        })
        .collect();

    Ok(samples)
}
