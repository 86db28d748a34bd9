//! Unit conversion functions
//!
//! Normalizes heights to meters and weights to kilograms. Callers validate that
//! magnitudes are finite and positive before converting.

use super::units::{HeightUnit, WeightUnit, CM_PER_M, M_PER_FT};

/// Convert a height in the given unit to meters
///
/// `HeightUnit::FeetInches` is read as decimal feet: 5.5 means five and a half
/// feet, not five feet five inches.
pub fn to_meters(value: f64, unit: HeightUnit) -> f64 {
    let meters = match unit {
        HeightUnit::Centimeters => value / CM_PER_M,
        HeightUnit::Meters => value,
        HeightUnit::FeetInches => value * M_PER_FT,
    };
    tracing::debug!(value, unit = unit.label(), meters, "converted height");
    meters
}

/// Convert a weight in the given unit to kilograms
pub fn to_kilograms(value: f64, unit: WeightUnit) -> f64 {
    let kilograms = value * unit.kilograms_per_unit();
    tracing::debug!(value, unit = unit.label(), kilograms, "converted weight");
    kilograms
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_HEIGHT_UNITS: [HeightUnit; 3] = [
        HeightUnit::Centimeters,
        HeightUnit::Meters,
        HeightUnit::FeetInches,
    ];

    #[test]
    fn test_centimeters_to_meters() {
        assert!((to_meters(180.0, HeightUnit::Centimeters) - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_meters_unchanged() {
        assert_eq!(to_meters(1.75, HeightUnit::Meters), 1.75);
    }

    #[test]
    fn test_decimal_feet_to_meters() {
        assert!((to_meters(5.0, HeightUnit::FeetInches) - 1.524).abs() < 1e-12);
        assert!((to_meters(5.5, HeightUnit::FeetInches) - 1.6764).abs() < 1e-12);
    }

    #[test]
    fn test_zero_height_is_zero_for_every_unit() {
        for unit in ALL_HEIGHT_UNITS {
            assert_eq!(to_meters(0.0, unit), 0.0);
        }
    }

    #[test]
    fn test_height_conversion_is_monotonic() {
        for unit in ALL_HEIGHT_UNITS {
            let mut previous = to_meters(0.0, unit);
            for step in 1..200 {
                let current = to_meters(step as f64 * 0.5, unit);
                assert!(current > previous, "{:?} not increasing at step {}", unit, step);
                previous = current;
            }
        }
    }

    #[test]
    fn test_weight_conversion() {
        assert_eq!(to_kilograms(80.0, WeightUnit::Kilograms), 80.0);
        assert!((to_kilograms(150.0, WeightUnit::Pounds) - 68.0388).abs() < 1e-9);
        // Pounds are lighter than kilograms, never the inverse
        assert!(to_kilograms(100.0, WeightUnit::Pounds) < 100.0);
    }
}
