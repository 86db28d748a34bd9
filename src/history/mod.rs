//! History module
//!
//! Durable, append-only ledger of BMI computations.

pub mod store;

pub use store::{HistoryStore, StoreError, HISTORY_KEY};
