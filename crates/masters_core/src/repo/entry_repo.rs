//! Entry repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide upsert/read APIs over the session results table.
//! - Keep row ordering rules inside the storage boundary.
//!
//! # Invariants
//! - Write paths must call `Entry::validate()` before mutating the table.
//! - At most one row per start number; updates keep the row position.
//! - New start numbers append, so table order is first-save order.

use crate::model::entry::{Entry, EntryValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Whether an upsert created a new row or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

impl UpsertOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
        }
    }
}

/// Repository interface for the results table.
pub trait EntryRepository {
    fn upsert_entry(&mut self, entry: &Entry) -> RepoResult<UpsertOutcome>;
    fn get_entry(&self, start_no: &str) -> RepoResult<Option<Entry>>;
    fn list_entries(&self) -> RepoResult<Vec<Entry>>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-memory table; contents are lost when the session ends.
#[derive(Debug, Default)]
pub struct InMemoryEntryRepository {
    rows: Vec<Entry>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryRepository for InMemoryEntryRepository {
    fn upsert_entry(&mut self, entry: &Entry) -> RepoResult<UpsertOutcome> {
        entry.validate()?;

        let outcome = match self
            .rows
            .iter_mut()
            .find(|row| row.start_no == entry.start_no)
        {
            Some(row) => {
                row.clone_from(entry);
                UpsertOutcome::Updated
            }
            None => {
                self.rows.push(entry.clone());
                UpsertOutcome::Inserted
            }
        };

        debug!(
            "event=entry_upsert module=repo status=ok outcome={} rows={}",
            outcome.as_str(),
            self.rows.len()
        );
        Ok(outcome)
    }

    fn get_entry(&self, start_no: &str) -> RepoResult<Option<Entry>> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.start_no == start_no)
            .cloned())
    }

    fn list_entries(&self) -> RepoResult<Vec<Entry>> {
        Ok(self.rows.clone())
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
