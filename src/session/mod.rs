//! Session module
//!
//! Orchestrates a BMI calculation from raw form input to a recorded result.

pub mod orchestrator;
pub mod state;
pub mod validation;

pub use orchestrator::{BmiSession, SessionError, Submission};
pub use state::{FormInput, SessionState};
pub use validation::{validate, Field, RawInput, ValidatedInput, ValidationError};
