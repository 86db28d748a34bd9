//! Input validation
//!
//! Turns raw form values into typed, checked measurements before any arithmetic
//! runs.

use std::fmt;

use thiserror::Error;

use crate::bmi::Gender;
use crate::measurement::{HeightUnit, WeightUnit};

/// Numeric form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Height,
    Weight,
    Age,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Age => "age",
        })
    }
}

/// Validation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid input! {0} is required.")]
    Missing(Field),

    #[error("Invalid input! {field} must be a number, got '{value}'.")]
    NotANumber { field: Field, value: String },

    #[error("Invalid input! {field} must be a positive value, got {value}.")]
    NotPositive { field: Field, value: f64 },

    #[error("Invalid input! Gender must be selected.")]
    MissingGender,

    #[error("Invalid input! Gender must be 'male' or 'female', got '{0}'.")]
    UnknownGender(String),
}

/// Raw values as they arrive from the input source
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a> {
    pub height: &'a str,
    pub weight: &'a str,
    pub height_unit: HeightUnit,
    pub weight_unit: WeightUnit,
    pub age: &'a str,
    pub gender: &'a str,
}

/// Input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub height: f64,
    pub weight: f64,
    pub height_unit: HeightUnit,
    pub weight_unit: WeightUnit,
    pub age: f64,
    pub gender: Gender,
}

fn positive_number(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing(field));
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }

    Ok(value)
}

/// Validate every field, reporting the first failure
pub fn validate(input: &RawInput<'_>) -> Result<ValidatedInput, ValidationError> {
    let height = positive_number(Field::Height, input.height)?;
    let weight = positive_number(Field::Weight, input.weight)?;
    let age = positive_number(Field::Age, input.age)?;

    let gender = match input.gender.trim() {
        "" => return Err(ValidationError::MissingGender),
        g => Gender::from_str(g).ok_or_else(|| ValidationError::UnknownGender(g.to_string()))?,
    };

    Ok(ValidatedInput {
        height,
        weight,
        height_unit: input.height_unit,
        weight_unit: input.weight_unit,
        age,
        gender,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<'a>(height: &'a str, weight: &'a str, age: &'a str, gender: &'a str) -> RawInput<'a> {
        RawInput {
            height,
            weight,
            height_unit: HeightUnit::Centimeters,
            weight_unit: WeightUnit::Kilograms,
            age,
            gender,
        }
    }

    #[test]
    fn test_valid_input() {
        let v = validate(&raw("180", " 80.5 ", "30", "male")).unwrap();
        assert_eq!(v.height, 180.0);
        assert_eq!(v.weight, 80.5);
        assert_eq!(v.age, 30.0);
        assert_eq!(v.gender, Gender::Male);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate(&raw("", "80", "30", "male")),
            Err(ValidationError::Missing(Field::Height))
        );
        assert_eq!(
            validate(&raw("180", "80", "  ", "male")),
            Err(ValidationError::Missing(Field::Age))
        );
        assert_eq!(
            validate(&raw("180", "80", "30", "")),
            Err(ValidationError::MissingGender)
        );
    }

    #[test]
    fn test_non_positive_values() {
        assert_eq!(
            validate(&raw("0", "80", "30", "male")),
            Err(ValidationError::NotPositive { field: Field::Height, value: 0.0 })
        );
        assert_eq!(
            validate(&raw("180", "80", "-1", "male")),
            Err(ValidationError::NotPositive { field: Field::Age, value: -1.0 })
        );
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(matches!(
            validate(&raw("abc", "80", "30", "male")),
            Err(ValidationError::NotANumber { field: Field::Height, .. })
        ));
        assert!(matches!(
            validate(&raw("180", "NaN", "30", "male")),
            Err(ValidationError::NotANumber { field: Field::Weight, .. })
        ));
        assert!(matches!(
            validate(&raw("180", "80", "inf", "male")),
            Err(ValidationError::NotANumber { field: Field::Age, .. })
        ));
    }

    #[test]
    fn test_unknown_gender() {
        assert_eq!(
            validate(&raw("180", "80", "30", "robot")),
            Err(ValidationError::UnknownGender("robot".to_string()))
        );
    }

    #[test]
    fn test_error_message_is_user_facing() {
        let err = validate(&raw("180", "80", "30", "")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input! Gender must be selected.");
    }
}
