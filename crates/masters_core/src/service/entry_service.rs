//! Entry use-case service.
//!
//! # Responsibility
//! - Turn a form evaluation into a stored row (the "Save Entry" action).
//! - Expose read APIs used by the table view and the edit selector.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - A save without all declared values never reaches the repository.

use crate::form::FormEvaluation;
use crate::model::entry::{Entry, StartNo};
use crate::repo::entry_repo::{EntryRepository, RepoError, UpsertOutcome};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for entry use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Declared snatch, CJ or entry total is missing or not a whole number.
    MissingDeclaredValues,
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDeclaredValues => {
                write!(f, "Enter Declared Snatch, CJ, and Entry Total.")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::MissingDeclaredValues => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Confirmation returned by a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub entry: Entry,
    pub outcome: UpsertOutcome,
}

impl SaveReceipt {
    /// User-facing confirmation text.
    pub fn message(&self) -> &'static str {
        match self.outcome {
            UpsertOutcome::Inserted => "Entry saved!",
            UpsertOutcome::Updated => "Entry updated!",
        }
    }
}

/// Use-case service wrapper over an entry repository.
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves the row described by a form evaluation.
    ///
    /// # Contract
    /// - Missing declared values return `MissingDeclaredValues`.
    /// - Existing start numbers are overwritten in place.
    pub fn save_from_form(&mut self, evaluation: &FormEvaluation) -> ServiceResult<SaveReceipt> {
        let Some(entry) = evaluation.to_entry() else {
            warn!("event=entry_save module=service status=rejected reason=missing_declared_values");
            return Err(ServiceError::MissingDeclaredValues);
        };
        self.save_entry(entry)
    }

    pub fn save_entry(&mut self, entry: Entry) -> ServiceResult<SaveReceipt> {
        let outcome = self.repo.upsert_entry(&entry)?;
        info!(
            "event=entry_save module=service status=ok outcome={} has_snatch_taken={}",
            outcome.as_str(),
            entry.snatch_taken.is_some()
        );
        Ok(SaveReceipt { entry, outcome })
    }

    pub fn get_entry(&self, start_no: &str) -> ServiceResult<Option<Entry>> {
        Ok(self.repo.get_entry(start_no)?)
    }

    pub fn list_entries(&self) -> ServiceResult<Vec<Entry>> {
        Ok(self.repo.list_entries()?)
    }

    /// Unique start numbers in table order.
    pub fn start_numbers(&self) -> ServiceResult<Vec<StartNo>> {
        Ok(self
            .repo
            .list_entries()?
            .into_iter()
            .map(|entry| entry.start_no)
            .collect())
    }

    pub fn entry_count(&self) -> usize {
        self.repo.len()
    }
}
