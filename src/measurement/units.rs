//! Unit types and conversion constants
//!
//! Height and weight units accepted on input, plus the factors that take them to
//! canonical metric units.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;
/// Meters per foot
pub const M_PER_FT: f64 = 0.3048;
/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Height unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Centimeters,
    Meters,
    /// Feet and inches, entered as a single decimal number of feet
    FeetInches,
}

impl HeightUnit {
    /// Order used when cycling through units on the form
    const CYCLE: [HeightUnit; 3] = [
        HeightUnit::Centimeters,
        HeightUnit::Meters,
        HeightUnit::FeetInches,
    ];

    /// Label shown on the unit toggle
    pub fn label(&self) -> &'static str {
        match self {
            HeightUnit::Centimeters => "cm",
            HeightUnit::Meters => "m",
            HeightUnit::FeetInches => "ft.in.",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(HeightUnit::Centimeters)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Some(HeightUnit::Meters),
            "ft.in." | "ft. & in." | "ft" | "feet" | "feet_inches" | "feet_and_inches" => {
                Some(HeightUnit::FeetInches)
            }
            _ => None,
        }
    }

    /// Next unit in the cm -> m -> ft.in. cycle
    pub fn next(&self) -> Self {
        let idx = Self::CYCLE.iter().position(|u| u == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }
}

/// Weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Kilograms,
    Pounds,
}

impl WeightUnit {
    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lbs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(WeightUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pounds),
            _ => None,
        }
    }

    /// The other weight unit
    pub fn toggled(&self) -> Self {
        match self {
            WeightUnit::Kilograms => WeightUnit::Pounds,
            WeightUnit::Pounds => WeightUnit::Kilograms,
        }
    }

    pub fn kilograms_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Kilograms => 1.0,
            WeightUnit::Pounds => KG_PER_LB,
        }
    }
}
