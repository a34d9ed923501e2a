//! # 计算表单
//!
//! 每种计算对应一个表单结构（原始文本）和一个输入结构（已校验的数值）。
//! 字段通过结构体成员直接访问，不存在运行时按名称查找字段的情况。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `cli/shell.rs` 使用
//! - 使用 `input/mod.rs` 的解析函数

use super::{parse_count, parse_integer, parse_real};
use crate::error::{NucalcError, Result};
use crate::formula::{DEFAULT_SAMPLES, MAX_SAMPLES};

/// 字段描述（名称、标签、单位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 错误信息中使用的字段名
    pub name: &'static str,
    /// 提示标签
    pub label: &'static str,
    /// 单位
    pub unit: &'static str,
}

// ─────────────────────────────────────────────────────────────
// 核半径
// ─────────────────────────────────────────────────────────────

/// 核半径表单
#[derive(Debug, Clone, Default)]
pub struct NuclearRadiusForm {
    pub mass_number: String,
}

/// 已校验的核半径输入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NuclearRadiusInput {
    /// 质量数 A (>= 1)
    pub mass_number: i64,
}

impl NuclearRadiusForm {
    pub const MASS_NUMBER: FieldSpec = FieldSpec {
        name: "A",
        label: "A (Mass Number):",
        unit: "[unitless]",
    };

    pub fn new(mass_number: impl Into<String>) -> Self {
        Self {
            mass_number: mass_number.into(),
        }
    }

    /// 校验并转换为数值输入
    pub fn validate(&self) -> Result<NuclearRadiusInput> {
        let mass_number = parse_integer(Self::MASS_NUMBER.name, &self.mass_number)?;
        if mass_number < 1 {
            return Err(NucalcError::domain("A must be a positive integer"));
        }
        Ok(NuclearRadiusInput { mass_number })
    }
}

// ─────────────────────────────────────────────────────────────
// 反冲能
// ─────────────────────────────────────────────────────────────

/// 反冲能表单
#[derive(Debug, Clone, Default)]
pub struct RecoilEnergyForm {
    pub energy: String,
    pub theta: String,
    pub mass: String,
}

/// 已校验的反冲能输入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoilEnergyInput {
    /// 入射能量 (MeV)
    pub energy_mev: f64,
    /// 散射角（度），0 <= θ <= 360
    pub theta_deg: f64,
    /// 靶质量 (u)
    pub mass_u: f64,
}

impl RecoilEnergyForm {
    pub const ENERGY: FieldSpec = FieldSpec {
        name: "E",
        label: "E (Incoming energy):",
        unit: "[MeV]",
    };
    pub const THETA: FieldSpec = FieldSpec {
        name: "theta",
        label: "θ (Scattering angle):",
        unit: "[deg]",
    };
    pub const MASS: FieldSpec = FieldSpec {
        name: "m",
        label: "m (Target mass):",
        unit: "[u]",
    };

    pub fn new(energy: impl Into<String>, theta: impl Into<String>, mass: impl Into<String>) -> Self {
        Self {
            energy: energy.into(),
            theta: theta.into(),
            mass: mass.into(),
        }
    }

    /// 校验并转换为数值输入
    pub fn validate(&self) -> Result<RecoilEnergyInput> {
        let energy_mev = parse_real(Self::ENERGY.name, &self.energy)?;
        let theta_deg = parse_real(Self::THETA.name, &self.theta)?;
        let mass_u = parse_real(Self::MASS.name, &self.mass)?;

        if energy_mev <= 0.0 {
            return Err(NucalcError::domain("E must be greater than 0 MeV"));
        }
        if !(0.0..=360.0).contains(&theta_deg) {
            return Err(NucalcError::domain("theta must be between 0 and 360 degrees"));
        }
        if mass_u <= 0.0 {
            return Err(NucalcError::domain("m must be greater than 0 u"));
        }

        Ok(RecoilEnergyInput {
            energy_mev,
            theta_deg,
            mass_u,
        })
    }
}

// ─────────────────────────────────────────────────────────────
// 线性函数
// ─────────────────────────────────────────────────────────────

/// 线性函数表单
#[derive(Debug, Clone)]
pub struct LinearFunctionForm {
    pub slope: String,
    pub intercept: String,
    pub x_min: String,
    pub x_max: String,
    pub samples: String,
}

/// 已校验的线性函数输入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFunctionInput {
    pub slope: f64,
    pub intercept: f64,
    pub x_min: f64,
    pub x_max: f64,
    /// 采样点数 (>= 2)
    pub samples: usize,
}

impl Default for LinearFunctionForm {
    fn default() -> Self {
        Self {
            slope: String::new(),
            intercept: String::new(),
            x_min: String::new(),
            x_max: String::new(),
            samples: DEFAULT_SAMPLES.to_string(),
        }
    }
}

impl LinearFunctionForm {
    pub const SLOPE: FieldSpec = FieldSpec {
        name: "m",
        label: "m (Slope):",
        unit: "",
    };
    pub const INTERCEPT: FieldSpec = FieldSpec {
        name: "b",
        label: "b (Intercept):",
        unit: "",
    };
    pub const X_MIN: FieldSpec = FieldSpec {
        name: "x_min",
        label: "x_min:",
        unit: "",
    };
    pub const X_MAX: FieldSpec = FieldSpec {
        name: "x_max",
        label: "x_max:",
        unit: "",
    };
    pub const SAMPLES: FieldSpec = FieldSpec {
        name: "n",
        label: "n (Samples):",
        unit: "",
    };

    /// 校验并转换为数值输入
    pub fn validate(&self) -> Result<LinearFunctionInput> {
        let slope = parse_real(Self::SLOPE.name, &self.slope)?;
        let intercept = parse_real(Self::INTERCEPT.name, &self.intercept)?;
        let x_min = parse_real(Self::X_MIN.name, &self.x_min)?;
        let x_max = parse_real(Self::X_MAX.name, &self.x_max)?;
        let samples = parse_count(Self::SAMPLES.name, &self.samples)?;

        if x_min >= x_max {
            return Err(NucalcError::domain("x_min must be less than x_max"));
        }
        if samples < 2 {
            return Err(NucalcError::domain("Number of samples must be at least 2"));
        }
        if samples > MAX_SAMPLES {
            return Err(NucalcError::domain(format!(
                "Number of samples must be at most {}",
                MAX_SAMPLES
            )));
        }

        Ok(LinearFunctionInput {
            slope,
            intercept,
            x_min,
            x_max,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_form(m: &str, b: &str, lo: &str, hi: &str) -> LinearFunctionForm {
        LinearFunctionForm {
            slope: m.to_string(),
            intercept: b.to_string(),
            x_min: lo.to_string(),
            x_max: hi.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_radius_form_valid() {
        let input = NuclearRadiusForm::new("56").validate().unwrap();
        assert_eq!(input.mass_number, 56);
    }

    #[test]
    fn test_radius_form_zero_is_domain_error() {
        assert!(matches!(
            NuclearRadiusForm::new("0").validate(),
            Err(NucalcError::Domain(_))
        ));
    }

    #[test]
    fn test_radius_form_text_is_parse_error() {
        match NuclearRadiusForm::new("iron").validate() {
            Err(NucalcError::Parse { field, .. }) => assert_eq!(field, "A"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_recoil_form_valid() {
        let input = RecoilEnergyForm::new("5", "90", "20").validate().unwrap();
        assert_eq!(input.energy_mev, 5.0);
        assert_eq!(input.theta_deg, 90.0);
        assert_eq!(input.mass_u, 20.0);
    }

    #[test]
    fn test_recoil_form_names_bad_field() {
        match RecoilEnergyForm::new("5", "ninety", "20").validate() {
            Err(NucalcError::Parse { field, .. }) => assert_eq!(field, "theta"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_recoil_form_domain_checks() {
        for (e, theta, m) in [("0", "90", "20"), ("5", "-1", "20"), ("5", "361", "20"), ("5", "90", "0")] {
            assert!(matches!(
                RecoilEnergyForm::new(e, theta, m).validate(),
                Err(NucalcError::Domain(_))
            ));
        }
    }

    #[test]
    fn test_recoil_form_accepts_angle_bounds() {
        assert!(RecoilEnergyForm::new("5", "0", "20").validate().is_ok());
        assert!(RecoilEnergyForm::new("5", "360", "20").validate().is_ok());
    }

    #[test]
    fn test_linear_form_default_samples() {
        let input = linear_form("2", "1", "0", "10").validate().unwrap();
        assert_eq!(input.samples, DEFAULT_SAMPLES);
        assert_eq!(input.slope, 2.0);
        assert_eq!(input.intercept, 1.0);
    }

    #[test]
    fn test_linear_form_rejects_inverted_range() {
        match linear_form("2", "1", "10", "0").validate() {
            Err(NucalcError::Domain(msg)) => assert_eq!(msg, "x_min must be less than x_max"),
            other => panic!("expected domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_linear_form_rejects_huge_sample_count() {
        for n in ["9e18", "1e11", "1000001"] {
            let form = LinearFunctionForm {
                samples: n.to_string(),
                ..linear_form("2", "1", "0", "10")
            };
            match form.validate() {
                Err(NucalcError::Domain(msg)) => assert!(msg.contains("at most")),
                other => panic!("expected domain error for {}, got {:?}", n, other),
            }
        }
    }

    #[test]
    fn test_linear_form_parse_error_before_domain_error() {
        match linear_form("2", "x", "10", "0").validate() {
            Err(NucalcError::Parse { field, .. }) => assert_eq!(field, "b"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
