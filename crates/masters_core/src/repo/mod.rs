//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract for the results table.
//! - Isolate storage details from service and navigation logic.
//!
//! # Invariants
//! - Repository writes must enforce `Entry::validate()` before storing.

pub mod entry_repo;
