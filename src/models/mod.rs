//! Data models
//!
//! Rust structs representing stored records.

mod history_entry;
mod stored_value;

pub use history_entry::{format_entry_date, FieldValue, HistoryEntry};
pub use stored_value::StoredValue;
