//! BMI session
//!
//! Validates input, runs conversion, calculation and classification, and records
//! each successful result in the history store.

use chrono::{DateTime, Local, Utc};
use thiserror::Error;

use crate::bmi::{classify, compute, BmiResult, CalcError};
use crate::history::HistoryStore;
use crate::measurement::{to_kilograms, to_meters};
use crate::models::{format_entry_date, FieldValue, HistoryEntry};

use super::state::SessionState;
use super::validation::{validate, RawInput, ValidationError};

/// Session error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Calculation(#[from] CalcError),
}

/// A computed result plus any non-fatal storage problem
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub result: BmiResult,
    pub warning: Option<String>,
}

pub struct BmiSession {
    store: HistoryStore,
}

impl BmiSession {
    pub fn new(store: HistoryStore) -> Self {
        Self { store }
    }

    /// Validate, compute, classify and record one BMI reading
    pub fn submit(&mut self, input: RawInput<'_>) -> Result<Submission, SessionError> {
        self.submit_at(input, Utc::now())
    }

    /// `submit` with an explicit creation time
    pub fn submit_at(
        &mut self,
        input: RawInput<'_>,
        now: DateTime<Utc>,
    ) -> Result<Submission, SessionError> {
        let valid = validate(&input)?;

        let height_m = to_meters(valid.height, valid.height_unit);
        let weight_kg = to_kilograms(valid.weight, valid.weight_unit);
        let value = compute(height_m, weight_kg)?;
        let result = BmiResult::new(value, classify(value, valid.gender));

        let entry = HistoryEntry {
            id: self.store.next_id(now.timestamp_millis()),
            date: format_entry_date(now.with_timezone(&Local).date_naive()),
            bmi: FieldValue::Number(value),
            height: FieldValue::from(input.height),
            weight: FieldValue::from(input.weight),
            age: FieldValue::from(input.age),
            gender: valid.gender.as_str().to_string(),
        };

        let warning = match self.store.append(entry) {
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("BMI computed but history was not saved: {}", e);
                Some(e.to_string())
            }
        };

        Ok(Submission { result, warning })
    }

    /// Run `submit` on the state's form input and return the updated state
    ///
    /// On failure the caller keeps its current state and shows the error.
    pub fn calculate(&mut self, state: &SessionState) -> Result<SessionState, SessionError> {
        let submission = self.submit(state.input.as_raw())?;
        Ok(SessionState {
            input: state.input.clone(),
            outcome: Some(submission.result),
            warning: submission.warning,
        })
    }

    /// Fresh transient state. The ledger is not touched.
    pub fn reset(&self) -> SessionState {
        SessionState::default()
    }

    /// Empty the ledger
    pub fn clear_history(&mut self) -> Result<(), crate::history::StoreError> {
        self.store.clear()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.store.entries()
    }
}
