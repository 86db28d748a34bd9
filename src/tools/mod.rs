//! Tools module
//!
//! MCP tool implementations for the BMI tracker.

pub mod bmi;
pub mod status;
