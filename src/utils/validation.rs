use crate::utils::error::{QueryError, Result};
use bigdecimal::{BigDecimal, Zero};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(QueryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QueryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: &BigDecimal) -> Result<()> {
    if *value < BigDecimal::zero() {
        return Err(QueryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not be negative".to_string(),
        });
    }
    Ok(())
}

/// 檢查一組門檻值是否為非遞減排列
pub fn validate_non_decreasing(field_name: &str, values: &[(&str, &BigDecimal)]) -> Result<()> {
    for pair in values.windows(2) {
        let (lower_name, lower) = pair[0];
        let (upper_name, upper) = pair[1];
        if lower > upper {
            return Err(QueryError::InvalidArgument {
                argument: field_name.to_string(),
                reason: format!(
                    "{} ({}) must not exceed {} ({})",
                    lower_name, lower, upper_name, upper
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| QueryError::MissingConfigError {
        field: field_name.to_string(),
    })
}
