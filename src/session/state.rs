//! Session state
//!
//! Transient form input and the latest result, held by the caller and passed
//! through session operations.

use serde::{Deserialize, Serialize};

use crate::bmi::BmiResult;
use crate::measurement::{HeightUnit, WeightUnit};

use super::validation::RawInput;

/// Form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub height: String,
    pub height_unit: HeightUnit,
    pub weight: String,
    pub weight_unit: WeightUnit,
    pub age: String,
    pub gender: String,
}

impl FormInput {
    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height = value.into();
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        self.age = value.into();
    }

    pub fn set_gender(&mut self, value: impl Into<String>) {
        self.gender = value.into();
    }

    pub fn set_height_unit(&mut self, unit: HeightUnit) {
        self.height_unit = unit;
    }

    pub fn set_weight_unit(&mut self, unit: WeightUnit) {
        self.weight_unit = unit;
    }

    /// Advance cm -> m -> ft.in. -> cm
    pub fn toggle_height_unit(&mut self) -> HeightUnit {
        self.height_unit = self.height_unit.next();
        self.height_unit
    }

    /// Flip kg <-> lbs
    pub fn toggle_weight_unit(&mut self) -> WeightUnit {
        self.weight_unit = self.weight_unit.toggled();
        self.weight_unit
    }

    pub fn as_raw(&self) -> RawInput<'_> {
        RawInput {
            height: &self.height,
            weight: &self.weight,
            height_unit: self.height_unit,
            weight_unit: self.weight_unit,
            age: &self.age,
            gender: &self.gender,
        }
    }
}

/// Everything the caller renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub input: FormInput,
    pub outcome: Option<BmiResult>,
    /// Non-fatal notice, e.g. history could not be saved
    pub warning: Option<String>,
}

impl SessionState {
    pub fn bmi(&self) -> Option<f64> {
        self.outcome.as_ref().map(|r| r.value)
    }

    pub fn category(&self) -> Option<&str> {
        self.outcome.as_ref().map(|r| r.label.as_str())
    }

    pub fn tip(&self) -> Option<&str> {
        self.outcome.as_ref().map(|r| r.tip.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = FormInput::default();
        assert_eq!(input.height_unit, HeightUnit::Centimeters);
        assert_eq!(input.weight_unit, WeightUnit::Kilograms);
        assert!(input.height.is_empty());
        assert!(input.gender.is_empty());
    }

    #[test]
    fn test_toggles() {
        let mut input = FormInput::default();
        assert_eq!(input.toggle_height_unit(), HeightUnit::Meters);
        assert_eq!(input.toggle_height_unit(), HeightUnit::FeetInches);
        assert_eq!(input.toggle_height_unit(), HeightUnit::Centimeters);
        assert_eq!(input.toggle_weight_unit(), WeightUnit::Pounds);
        assert_eq!(input.toggle_weight_unit(), WeightUnit::Kilograms);
    }

    #[test]
    fn test_outputs_empty_without_outcome() {
        let state = SessionState::default();
        assert_eq!(state.bmi(), None);
        assert_eq!(state.category(), None);
        assert_eq!(state.tip(), None);
    }
}
