use std::sync::Mutex;

use thiserror::Error;
use tracing::warn;
use validator::Validate;

use crate::models::LawyerRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Directory not found: {0}")]
    NotFound(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Where the lawyer directory lives.
///
/// Implementations hand the matcher a full snapshot; the directory is
/// small enough that loading it whole is the simplest correct thing.
pub trait DirectoryStore {
    /// Load every record in the directory.
    ///
    /// Implementations validate records on the way out, so the matcher
    /// never sees entries that fail the schema.
    fn load(&self) -> Result<Vec<LawyerRecord>, StoreError>;

    /// Replace the directory with the given records.
    fn save(&self, records: &[LawyerRecord]) -> Result<(), StoreError>;
}

/// Drop records that fail validation, keeping the rest.
///
/// A single malformed entry should not take the whole directory down,
/// so bad records are logged and skipped rather than turned into a load
/// error.
pub fn validate_records(records: Vec<LawyerRecord>) -> Vec<LawyerRecord> {
    records
        .into_iter()
        .filter(|record| {
            if let Err(errors) = record.validate() {
                warn!(id = %record.id, %errors, "Rejecting invalid record");
                return false;
            }
            if !record.case_counts_consistent() {
                warn!(
                    id = %record.id,
                    cases_won = record.cases_won,
                    total_cases = record.total_cases,
                    "Rejecting record with more wins than cases"
                );
                return false;
            }
            true
        })
        .collect()
}

/// In-memory store, used by tests and as a scratch directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<LawyerRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<LawyerRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl DirectoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<LawyerRecord>, StoreError> {
        let guard = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(validate_records(guard.clone()))
    }

    fn save(&self, records: &[LawyerRecord]) -> Result<(), StoreError> {
        let mut guard = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = records.to_vec();
        Ok(())
    }
}
