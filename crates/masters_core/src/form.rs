//! Calculator input form state.
//!
//! # Responsibility
//! - Hold raw field text exactly as typed.
//! - Evaluate the text into metrics and user-facing warnings.
//! - Pre-fill from a stored row and clear after save.
//!
//! # Invariants
//! - Unparseable numeric text is treated as missing, never as an error.
//! - Metrics are only produced when all three declared values parse.
//! - Snatch taken is only evaluated once the declared values are present,
//!   and only plain integer text is accepted for it.

use crate::calc::{
    clean_jerk_metrics, parse_integer, parse_whole_number, snatch_metrics, CleanJerkMetrics,
    Declaration, SnatchMetrics,
};
use crate::model::entry::{Entry, StartNo};
use std::fmt::{Display, Formatter};

/// Editable fields of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StartNo,
    DeclaredSnatch,
    DeclaredCleanJerk,
    DeclaredEntryTotal,
    SnatchTaken,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::StartNo => "Start No. / Name",
            Self::DeclaredSnatch => "Declared Snatch",
            Self::DeclaredCleanJerk => "Declared CJ",
            Self::DeclaredEntryTotal => "Declared Entry Total",
            Self::SnatchTaken => "Snatch Taken",
        }
    }
}

/// Prompts shown instead of metrics when input is missing or invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormWarning {
    MissingDeclaredValues,
    InvalidSnatchTaken,
}

impl Display for FormWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDeclaredValues => {
                write!(f, "Enter Declared Snatch, CJ, and Entry Total.")
            }
            Self::InvalidSnatchTaken => write!(f, "Enter First Snatch Taken"),
        }
    }
}

/// Raw text of every form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub start_no: String,
    pub declared_snatch: String,
    pub declared_clean_jerk: String,
    pub declared_entry_total: String,
    pub snatch_taken: String,
}

/// Result of evaluating the current form text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEvaluation {
    pub start_no: StartNo,
    pub declared: Option<Declaration>,
    pub snatch_taken: Option<i32>,
    pub snatch: Option<SnatchMetrics>,
    pub clean_jerk: Option<CleanJerkMetrics>,
    pub warnings: Vec<FormWarning>,
}

impl FormEvaluation {
    /// Row that a save action would store, when the declared values are present.
    pub fn to_entry(&self) -> Option<Entry> {
        self.declared
            .map(|declared| Entry::compute(self.start_no.clone(), declared, self.snatch_taken))
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::StartNo => &self.start_no,
            FormField::DeclaredSnatch => &self.declared_snatch,
            FormField::DeclaredCleanJerk => &self.declared_clean_jerk,
            FormField::DeclaredEntryTotal => &self.declared_entry_total,
            FormField::SnatchTaken => &self.snatch_taken,
        }
    }

    pub fn set_field(&mut self, field: FormField, text: impl Into<String>) {
        let slot = match field {
            FormField::StartNo => &mut self.start_no,
            FormField::DeclaredSnatch => &mut self.declared_snatch,
            FormField::DeclaredCleanJerk => &mut self.declared_clean_jerk,
            FormField::DeclaredEntryTotal => &mut self.declared_entry_total,
            FormField::SnatchTaken => &mut self.snatch_taken,
        };
        *slot = text.into();
    }

    /// Loads a stored row back into the text fields for editing.
    pub fn prefill_from(&mut self, entry: &Entry) {
        self.start_no.clone_from(&entry.start_no);
        self.declared_snatch = entry.snatch.to_string();
        self.declared_clean_jerk = entry.clean_jerk.to_string();
        self.declared_entry_total = entry.entry_total.to_string();
        self.snatch_taken = entry
            .snatch_taken
            .map(|value| value.to_string())
            .unwrap_or_default();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn evaluate(&self) -> FormEvaluation {
        let declared = match (
            parse_whole_number(&self.declared_snatch),
            parse_whole_number(&self.declared_clean_jerk),
            parse_whole_number(&self.declared_entry_total),
        ) {
            (Some(snatch), Some(clean_jerk), Some(entry_total)) => Some(Declaration {
                snatch,
                clean_jerk,
                entry_total,
            }),
            _ => None,
        };

        let Some(declared) = declared else {
            return FormEvaluation {
                start_no: self.start_no.clone(),
                declared: None,
                snatch_taken: None,
                snatch: None,
                clean_jerk: None,
                warnings: vec![FormWarning::MissingDeclaredValues],
            };
        };

        let mut warnings = Vec::new();
        let snatch_taken = parse_integer(&self.snatch_taken);
        if snatch_taken.is_none() && !self.snatch_taken.is_empty() {
            warnings.push(FormWarning::InvalidSnatchTaken);
        }

        FormEvaluation {
            start_no: self.start_no.clone(),
            declared: Some(declared),
            snatch_taken,
            snatch: Some(snatch_metrics(&declared)),
            clean_jerk: snatch_taken.map(|taken| clean_jerk_metrics(&declared, taken)),
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormField, FormState, FormWarning};
    use crate::calc::Declaration;
    use crate::model::entry::Entry;

    fn filled(snatch: &str, clean_jerk: &str, total: &str) -> FormState {
        let mut form = FormState::new();
        form.set_field(FormField::StartNo, "12");
        form.set_field(FormField::DeclaredSnatch, snatch);
        form.set_field(FormField::DeclaredCleanJerk, clean_jerk);
        form.set_field(FormField::DeclaredEntryTotal, total);
        form
    }

    #[test]
    fn empty_form_warns_and_has_no_metrics() {
        let evaluation = FormState::new().evaluate();
        assert_eq!(evaluation.warnings, vec![FormWarning::MissingDeclaredValues]);
        assert!(evaluation.snatch.is_none());
        assert!(evaluation.clean_jerk.is_none());
        assert!(evaluation.to_entry().is_none());
    }

    #[test]
    fn non_numeric_declared_value_suppresses_metrics() {
        for form in [
            filled("abc", "120", "270"),
            filled("100", "12o", "270"),
            filled("100", "120", "270.5"),
        ] {
            let evaluation = form.evaluate();
            assert!(evaluation.declared.is_none());
            assert!(evaluation.snatch.is_none());
            assert_eq!(evaluation.warnings, vec![FormWarning::MissingDeclaredValues]);
        }
    }

    #[test]
    fn missing_declared_values_skip_snatch_taken_check() {
        let mut form = filled("", "120", "270");
        form.set_field(FormField::SnatchTaken, "oops");
        assert_eq!(
            form.evaluate().warnings,
            vec![FormWarning::MissingDeclaredValues]
        );
    }

    #[test]
    fn declared_values_produce_snatch_metrics_only() {
        let evaluation = filled("100", "120", "270").evaluate();
        let snatch = evaluation.snatch.expect("snatch metrics");
        assert_eq!(snatch.plus_minus, 4);
        assert_eq!(snatch.minimum, 96);
        assert!(evaluation.clean_jerk.is_none());
        assert!(evaluation.warnings.is_empty());
    }

    #[test]
    fn snatch_taken_produces_clean_jerk_metrics() {
        let mut form = filled("100", "120", "270");
        form.set_field(FormField::SnatchTaken, "125");
        let evaluation = form.evaluate();
        let clean_jerk = evaluation.clean_jerk.expect("cj metrics");
        assert_eq!(clean_jerk.plus_minus, 29);
        assert_eq!(clean_jerk.minimum, 91);
    }

    #[test]
    fn invalid_snatch_taken_warns_but_keeps_snatch_metrics() {
        let mut form = filled("100", "120", "270");
        form.set_field(FormField::SnatchTaken, "heavy");
        let evaluation = form.evaluate();
        assert!(evaluation.snatch.is_some());
        assert!(evaluation.clean_jerk.is_none());
        assert_eq!(evaluation.warnings, vec![FormWarning::InvalidSnatchTaken]);

        let entry = evaluation.to_entry().expect("declared values present");
        assert_eq!(entry.snatch_taken, None);
        assert_eq!(entry.min_cj, None);
    }

    #[test]
    fn prefill_round_trips_a_stored_row() {
        let declared = Declaration {
            snatch: 100,
            clean_jerk: 120,
            entry_total: 270,
        };
        let mut form = FormState::new();
        form.prefill_from(&Entry::compute("Alice", declared, None));
        assert_eq!(form.field(FormField::StartNo), "Alice");
        assert_eq!(form.field(FormField::DeclaredEntryTotal), "270");
        assert_eq!(form.field(FormField::SnatchTaken), "");

        form.prefill_from(&Entry::compute("Alice", declared, Some(125)));
        assert_eq!(form.field(FormField::SnatchTaken), "125");

        form.clear();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn decimal_snatch_taken_is_rejected() {
        let mut form = filled("100.0", "120", "270");
        form.set_field(FormField::SnatchTaken, "125.0");
        let evaluation = form.evaluate();
        assert!(evaluation.snatch.is_some());
        assert!(evaluation.clean_jerk.is_none());
        assert_eq!(evaluation.warnings, vec![FormWarning::InvalidSnatchTaken]);
    }
}
