//! BMI arithmetic

use thiserror::Error;

/// Calculation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Cannot compute BMI: height of {height_m} m leaves nothing to divide by")]
    Division { height_m: f64 },

    #[error("Cannot compute BMI: result {0} is not a finite number")]
    NonFinite(f64),

    #[error("Cannot compute BMI: result rounds to {0}, which is not positive")]
    NotPositive(f64),
}

/// Round to two decimal places, halves away from zero
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute BMI from canonical height (meters) and weight (kilograms)
///
/// The result is rounded to two decimal places. Inputs so lopsided that the
/// rounded value is no longer positive are rejected.
pub fn compute(height_m: f64, weight_kg: f64) -> Result<f64, CalcError> {
    if height_m == 0.0 {
        return Err(CalcError::Division { height_m });
    }

    let raw = weight_kg / (height_m * height_m);
    if !raw.is_finite() {
        return Err(CalcError::NonFinite(raw));
    }

    let rounded = round_to_hundredths(raw);
    if rounded <= 0.0 {
        return Err(CalcError::NotPositive(rounded));
    }

    Ok(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_metric() {
        assert_eq!(compute(1.8, 80.0), Ok(24.69));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let first = compute(1.524, 68.0388).unwrap();
        let second = compute(1.524, 68.0388).unwrap();
        assert_eq!(first, second);
        assert!((first - 29.29).abs() < 0.011);
    }

    #[test]
    fn test_zero_height_fails() {
        assert_eq!(compute(0.0, 70.0), Err(CalcError::Division { height_m: 0.0 }));
    }

    #[test]
    fn test_underflowing_height_is_not_silently_infinite() {
        assert!(matches!(compute(1e-200, 70.0), Err(CalcError::NonFinite(_))));
    }

    #[test]
    fn test_result_rounding_to_zero_fails() {
        assert_eq!(compute(1000.0, 0.5), Err(CalcError::NotPositive(0.0)));
        assert_eq!(compute(100.0, 60.0), Ok(0.01));
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(24.691358), 24.69);
        assert_eq!(round_to_hundredths(18.499), 18.5);
        assert_eq!(round_to_hundredths(30.0), 30.0);
    }
}
