//! Domain model for the results table.
//!
//! # Responsibility
//! - Define the canonical row shape shared by the calculator and table views.
//!
//! # Invariants
//! - Every row is identified by its start number.
//! - Rows are never deleted, only overwritten by a full re-save.

pub mod entry;
