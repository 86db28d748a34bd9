//! Computed BMI result

use serde::Serialize;

use super::classifier::{Category, Classification, Gender};

/// A successfully computed and classified BMI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    /// BMI rounded to two decimal places
    pub value: f64,
    pub category: Category,
    pub gender: Gender,
    /// Display label, e.g. "Overweight (Female)"
    pub label: String,
    pub tip: String,
}

impl BmiResult {
    pub fn new(value: f64, classification: Classification) -> Self {
        Self {
            value,
            category: classification.category,
            gender: classification.gender,
            label: classification.label(),
            tip: classification.tip.to_string(),
        }
    }

    /// Value formatted with two decimals
    pub fn format_value(&self) -> String {
        format!("{:.2}", self.value)
    }
}
