//! Core logic for the Masters 80% rule calculator.
//! This crate is the single source of truth for the arithmetic and table rules.

pub mod calc;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use calc::{
    clean_jerk_metrics, eighty_percent_threshold, parse_integer, parse_whole_number,
    snatch_metrics, CleanJerkMetrics, Declaration, SnatchMetrics,
};
pub use form::{FormEvaluation, FormField, FormState, FormWarning};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entry::{Entry, EntryValidationError, StartNo, TABLE_COLUMNS};
pub use repo::entry_repo::{
    EntryRepository, InMemoryEntryRepository, RepoError, RepoResult, UpsertOutcome,
};
pub use service::entry_service::{EntryService, SaveReceipt, ServiceError, ServiceResult};
pub use session::{Page, Session, SessionError, SessionResult, TableView, EMPTY_TABLE_MESSAGE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Session over a fresh in-memory table.
pub fn new_session() -> Session<InMemoryEntryRepository> {
    Session::new(EntryService::new(InMemoryEntryRepository::new()))
}
