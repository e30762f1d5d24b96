//! Entry domain model.
//!
//! # Responsibility
//! - Define the single table row recorded per entrant.
//! - Keep derived metrics consistent with the declared inputs.
//!
//! # Invariants
//! - `start_no` is the unique key; the store never holds two rows with it.
//! - Snatch metrics always match `calc::snatch_metrics` for the inputs.
//! - CJ metrics are present iff `snatch_taken` is present, and then match
//!   `calc::clean_jerk_metrics`.

use crate::calc::{
    clean_jerk_metrics, snatch_metrics, CleanJerkMetrics, Declaration, SnatchMetrics,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Entrant identifier as typed into the form ("Start No. / Name").
pub type StartNo = String;

/// Column labels in table order.
pub const TABLE_COLUMNS: [&str; 9] = [
    "Start No.",
    "Snatch",
    "CJ",
    "ET",
    "Snatch +/-",
    "Min Snatch",
    "Snatch Taken",
    "CJ +/-",
    "Min CJ",
];

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub start_no: StartNo,
    pub snatch: i32,
    pub clean_jerk: i32,
    pub entry_total: i32,
    pub snatch_plus_minus: i64,
    pub min_snatch: i64,
    /// Entered after the first snatch attempt.
    pub snatch_taken: Option<i32>,
    pub cj_plus_minus: Option<i64>,
    pub min_cj: Option<i64>,
}

/// Consistency failures between stored inputs and derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    SnatchMetricsMismatch {
        expected: SnatchMetrics,
        actual: SnatchMetrics,
    },
    CleanJerkMetricsMismatch {
        expected: Option<CleanJerkMetrics>,
        actual: (Option<i64>, Option<i64>),
    },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SnatchMetricsMismatch { expected, actual } => write!(
                f,
                "snatch metrics ({}, {}) do not match declared values; expected ({}, {})",
                actual.plus_minus, actual.minimum, expected.plus_minus, expected.minimum
            ),
            Self::CleanJerkMetricsMismatch { expected, actual } => write!(
                f,
                "cj metrics {actual:?} do not match snatch taken; expected {expected:?}"
            ),
        }
    }
}

impl Error for EntryValidationError {}

impl Entry {
    /// Builds an entry with all metrics derived from the given inputs.
    pub fn compute(
        start_no: impl Into<StartNo>,
        declared: Declaration,
        snatch_taken: Option<i32>,
    ) -> Self {
        let snatch = snatch_metrics(&declared);
        let clean_jerk = snatch_taken.map(|taken| clean_jerk_metrics(&declared, taken));
        Self {
            start_no: start_no.into(),
            snatch: declared.snatch,
            clean_jerk: declared.clean_jerk,
            entry_total: declared.entry_total,
            snatch_plus_minus: snatch.plus_minus,
            min_snatch: snatch.minimum,
            snatch_taken,
            cj_plus_minus: clean_jerk.map(|metrics| metrics.plus_minus),
            min_cj: clean_jerk.map(|metrics| metrics.minimum),
        }
    }

    /// Declared values of this row.
    pub fn declaration(&self) -> Declaration {
        Declaration {
            snatch: self.snatch,
            clean_jerk: self.clean_jerk,
            entry_total: self.entry_total,
        }
    }

    /// Checks that derived fields agree with the inputs.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        let declared = self.declaration();

        let expected = snatch_metrics(&declared);
        let actual = SnatchMetrics {
            plus_minus: self.snatch_plus_minus,
            minimum: self.min_snatch,
        };
        if expected != actual {
            return Err(EntryValidationError::SnatchMetricsMismatch { expected, actual });
        }

        let expected = self
            .snatch_taken
            .map(|taken| clean_jerk_metrics(&declared, taken));
        let matches = match expected {
            Some(metrics) => {
                self.cj_plus_minus == Some(metrics.plus_minus) && self.min_cj == Some(metrics.minimum)
            }
            None => self.cj_plus_minus.is_none() && self.min_cj.is_none(),
        };
        if !matches {
            return Err(EntryValidationError::CleanJerkMetricsMismatch {
                expected,
                actual: (self.cj_plus_minus, self.min_cj),
            });
        }

        Ok(())
    }

    /// Cell texts in [`TABLE_COLUMNS`] order; absent values render empty.
    pub fn table_cells(&self) -> [String; 9] {
        fn optional<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        [
            self.start_no.clone(),
            self.snatch.to_string(),
            self.clean_jerk.to_string(),
            self.entry_total.to_string(),
            self.snatch_plus_minus.to_string(),
            self.min_snatch.to_string(),
            optional(self.snatch_taken),
            optional(self.cj_plus_minus),
            optional(self.min_cj),
        ]
    }
}
