//! History store
//!
//! Owns the BMI ledger. The ledger is kept in memory and mirrored to a single
//! record in the key-value table as a JSON array; every mutation rewrites the
//! whole array.

use thiserror::Error;

use crate::db::{Database, DbError};
use crate::models::{HistoryEntry, StoredValue};

/// Key of the record holding the ledger
pub const HISTORY_KEY: &str = "bmiHistory";

/// History store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("History storage error: {0}")]
    Database(#[from] DbError),

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("History already contains an entry with id {0}")]
    DuplicateId(i64),
}

pub struct HistoryStore {
    database: Database,
    ledger: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Open the store, loading whatever ledger is persisted
    pub fn open(database: Database) -> Result<Self, StoreError> {
        let mut store = Self {
            database,
            ledger: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Re-read the persisted ledger
    ///
    /// A missing record or one that does not parse yields an empty ledger.
    /// Database errors are returned and the in-memory ledger is left as it was.
    pub fn load(&mut self) -> Result<&[HistoryEntry], StoreError> {
        let record = self
            .database
            .with_conn(|conn| StoredValue::get(conn, HISTORY_KEY))?;

        self.ledger = match record {
            Some(record) => serde_json::from_str(&record.value).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable BMI history: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        tracing::debug!(entries = self.ledger.len(), "loaded bmi history");
        Ok(&self.ledger)
    }

    /// Entries in chronological order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Id for an entry created at `now_ms`, strictly greater than any existing id
    pub fn next_id(&self, now_ms: i64) -> i64 {
        match self.ledger.iter().map(|e| e.id).max() {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        }
    }

    /// Append an entry and persist the full ledger
    ///
    /// If persisting fails the entry stays in the in-memory ledger and the
    /// write error is returned.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<&[HistoryEntry], StoreError> {
        if self.ledger.iter().any(|e| e.id == entry.id) {
            return Err(StoreError::DuplicateId(entry.id));
        }

        tracing::info!(id = entry.id, bmi = %entry.bmi, "appending bmi history entry");
        self.ledger.push(entry);
        self.persist()?;

        Ok(&self.ledger)
    }

    /// Remove every entry, in storage and then in memory
    pub fn clear(&mut self) -> Result<(), StoreError> {
        let existed = self
            .database
            .with_conn(|conn| StoredValue::delete(conn, HISTORY_KEY))?;
        self.ledger.clear();
        tracing::info!(existed, "cleared bmi history");
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.ledger)?;
        self.database
            .with_conn(|conn| StoredValue::set(conn, HISTORY_KEY, &json))?;
        Ok(())
    }
}
