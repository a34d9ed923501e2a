//! # 输入校验模块
//!
//! 将用户输入的原始文本转换为带类型的数值。
//! 文本不是合法数字时返回 `NucalcError::Parse`（携带字段名），
//! 数值越界时返回 `NucalcError::Domain`，两者互不混淆。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `cli/shell.rs` 使用
//! - 子模块: forms（每种计算一个表单结构）

pub mod forms;

pub use forms::{
    FieldSpec, LinearFunctionForm, LinearFunctionInput, NuclearRadiusForm, NuclearRadiusInput,
    RecoilEnergyForm, RecoilEnergyInput,
};

use crate::error::{NucalcError, Result};

/// 解析实数字段（必须为有限值）
pub fn parse_real(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NucalcError::parse(field, text, "is empty"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| NucalcError::parse(field, trimmed, "is not a number"))?;

    if !value.is_finite() {
        return Err(NucalcError::parse(field, trimmed, "is not a finite number"));
    }

    Ok(value)
}

/// 解析整数字段
///
/// 接受 `"27"` 以及整值实数 `"27.0"`，拒绝带小数部分的值。
pub fn parse_integer(field: &str, text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let value = parse_real(field, text)?;
    if value.fract() != 0.0 {
        return Err(NucalcError::parse(field, trimmed, "must be an integer"));
    }
    if value.abs() >= i64::MAX as f64 {
        return Err(NucalcError::parse(field, trimmed, "is out of range"));
    }

    Ok(value as i64)
}

/// 解析非负计数字段（采样点数等）
pub fn parse_count(field: &str, text: &str) -> Result<usize> {
    let value = parse_integer(field, text)?;
    usize::try_from(value).map_err(|_| NucalcError::parse(field, text.trim(), "must not be negative"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_field(err: NucalcError) -> String {
        match err {
            NucalcError::Parse { field, .. } => field,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_real_accepts_numbers() {
        assert_eq!(parse_real("E", "5").unwrap(), 5.0);
        assert_eq!(parse_real("E", " 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_real("b", "-1e3").unwrap(), -1000.0);
    }

    #[test]
    fn test_parse_real_rejects_garbage() {
        assert_eq!(parse_field(parse_real("E", "abc").unwrap_err()), "E");
        assert_eq!(parse_field(parse_real("theta", "").unwrap_err()), "theta");
        assert_eq!(parse_field(parse_real("m", "   ").unwrap_err()), "m");
        assert_eq!(parse_field(parse_real("m", "1,5").unwrap_err()), "m");
    }

    #[test]
    fn test_parse_real_rejects_non_finite() {
        for text in ["inf", "-inf", "NaN", "infinity"] {
            assert_eq!(parse_field(parse_real("x_min", text).unwrap_err()), "x_min");
        }
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("A", "27").unwrap(), 27);
        assert_eq!(parse_integer("A", "27.0").unwrap(), 27);
        assert_eq!(parse_integer("A", "-5").unwrap(), -5);
    }

    #[test]
    fn test_parse_integer_rejects_fraction() {
        match parse_integer("A", "27.5").unwrap_err() {
            NucalcError::Parse { field, reason, .. } => {
                assert_eq!(field, "A");
                assert_eq!(reason, "must be an integer");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_integer_rejects_out_of_range() {
        assert_eq!(parse_field(parse_integer("A", "9223372036854775808").unwrap_err()), "A");
        assert_eq!(parse_field(parse_integer("A", "1e19").unwrap_err()), "A");
        assert_eq!(parse_integer("A", "9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("n", "500").unwrap(), 500);
        assert_eq!(parse_field(parse_count("n", "-1").unwrap_err()), "n");
    }
}
