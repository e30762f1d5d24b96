//! Per-session view state and navigation.
//!
//! # Responsibility
//! - Track the active view (Calculator or Table).
//! - Carry a selected row from the table back into the calculator form.
//! - Reset form and selection after a successful save.
//!
//! # Invariants
//! - A selected row is loaded into the form at most once per selection, so
//!   re-rendering the calculator never overwrites the user's edits.
//! - Only start numbers present in the table can be selected.

use crate::form::{FormEvaluation, FormField, FormState};
use crate::model::entry::{Entry, StartNo};
use crate::repo::entry_repo::EntryRepository;
use crate::service::entry_service::{EntryService, SaveReceipt, ServiceError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

pub const EMPTY_TABLE_MESSAGE: &str = "No entries yet. Go to Calculator to add data.";

#[derive(Debug)]
pub enum SessionError {
    UnknownStartNo(StartNo),
    Service(ServiceError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStartNo(start_no) => write!(f, "no entry with start number `{start_no}`"),
            Self::Service(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::UnknownStartNo(_) => None,
        }
    }
}

impl From<ServiceError> for SessionError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Calculator,
    Table,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Table => "Table",
        }
    }
}

/// Read-only table projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Empty { message: &'static str },
    Rows {
        rows: Vec<Entry>,
        /// Choices for the "select a start number" control.
        start_numbers: Vec<StartNo>,
    },
}

/// Single-user session over one results table.
pub struct Session<R: EntryRepository> {
    service: EntryService<R>,
    form: FormState,
    page: Page,
    selected_start: Option<StartNo>,
    row_loaded: bool,
}

impl<R: EntryRepository> Session<R> {
    pub fn new(service: EntryService<R>) -> Self {
        Self {
            service,
            form: FormState::new(),
            page: Page::default(),
            selected_start: None,
            row_loaded: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn selected_start(&self) -> Option<&str> {
        self.selected_start.as_deref()
    }

    pub fn service(&self) -> &EntryService<R> {
        &self.service
    }

    /// Switches view; entering the calculator applies any pending selection.
    pub fn navigate(&mut self, page: Page) -> SessionResult<()> {
        debug!("event=navigate module=session page={}", page.label());
        self.page = page;
        if page == Page::Calculator {
            self.enter_calculator()?;
        }
        Ok(())
    }

    /// Selects a stored row for editing and opens the calculator.
    pub fn select_for_edit(&mut self, start_no: &str) -> SessionResult<()> {
        if self.service.get_entry(start_no)?.is_none() {
            return Err(SessionError::UnknownStartNo(start_no.to_string()));
        }
        self.selected_start = Some(start_no.to_string());
        self.row_loaded = false;
        self.navigate(Page::Calculator)
    }

    /// Pre-fills the form from the selected row, once per selection.
    ///
    /// Returns whether the form was loaded by this call.
    pub fn enter_calculator(&mut self) -> SessionResult<bool> {
        if self.row_loaded {
            return Ok(false);
        }
        let Some(start_no) = self.selected_start.as_deref() else {
            return Ok(false);
        };
        let Some(entry) = self.service.get_entry(start_no)? else {
            return Ok(false);
        };

        self.form.prefill_from(&entry);
        self.row_loaded = true;
        info!("event=row_loaded module=session status=ok");
        Ok(true)
    }

    pub fn set_field(&mut self, field: FormField, text: impl Into<String>) {
        self.form.set_field(field, text);
    }

    pub fn clear_form(&mut self) {
        self.form.clear();
        self.selected_start = None;
        self.row_loaded = false;
    }

    pub fn evaluate(&self) -> FormEvaluation {
        self.form.evaluate()
    }

    /// Saves the form; on success the form and selection are reset.
    pub fn save(&mut self) -> SessionResult<SaveReceipt> {
        let receipt = self.service.save_from_form(&self.form.evaluate())?;
        self.clear_form();
        Ok(receipt)
    }

    pub fn table_view(&self) -> SessionResult<TableView> {
        let rows = self.service.list_entries()?;
        if rows.is_empty() {
            return Ok(TableView::Empty {
                message: EMPTY_TABLE_MESSAGE,
            });
        }
        let start_numbers = self.service.start_numbers()?;
        Ok(TableView::Rows {
            rows,
            start_numbers,
        })
    }
}
