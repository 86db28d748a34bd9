//! History entry model
//!
//! One persisted BMI computation. Inputs are kept exactly as the user typed them,
//! before any unit conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field persisted either as a JSON number or as the string the user typed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric reading of the field, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// A ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation time in milliseconds since the Unix epoch, unique per ledger
    pub id: i64,
    /// Creation date, e.g. "10/18/2026"
    pub date: String,
    pub bmi: FieldValue,
    pub height: FieldValue,
    pub weight: FieldValue,
    pub age: FieldValue,
    pub gender: String,
}

/// Format a creation date the way the ledger shows it
pub fn format_entry_date(date: chrono::NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_string_typed_entries() {
        let json = r#"{"id":1700000000000,"date":"11/14/2023","bmi":"24.69","height":"180","weight":"80","age":"30","gender":"male"}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.bmi, FieldValue::Text("24.69".into()));
        assert_eq!(entry.bmi.as_f64(), Some(24.69));
        assert_eq!(entry.height.to_string(), "180");
        assert_eq!(entry.gender, "male");
    }

    #[test]
    fn test_reads_number_typed_entries() {
        let json = r#"{"id":2,"date":"1/2/2024","bmi":29.29,"height":5,"weight":150,"age":25,"gender":"female"}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.bmi, FieldValue::Number(29.29));
        assert_eq!(entry.age.as_f64(), Some(25.0));
    }

    #[test]
    fn test_format_entry_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_entry_date(date), "3/7/2026");
    }
}
