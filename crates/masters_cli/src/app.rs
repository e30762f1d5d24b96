//! Command parsing and dispatch for the interactive prompt.
//!
//! # Invariants
//! - No input line aborts the session; failures become printed messages.
//! - Every command returns the text to print for the resulting view.

use crate::render;
use masters_core::{
    new_session, FormField, InMemoryEntryRepository, Page, Session, TableView,
};
use std::fmt::{Display, Formatter};

pub const HELP: &str = "\
commands:
  calc | table            switch view
  start <text>            set Start No. / Name
  snatch <n>              set Declared Snatch
  cj <n>                  set Declared CJ
  total <n>               set Declared Entry Total
  taken <n>               set Snatch Taken
  save                    save entry (updates an existing start number)
  edit [start no]         load a saved row into the calculator
                          (no argument selects a blank start number)
  clear                   empty the form
  json                    print the table as JSON
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(Page),
    Set(FormField, String),
    Save,
    Edit(String),
    Clear,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "type `help` for commands"),
            Self::Unknown(name) => write!(f, "unknown command `{name}`; type `help`"),
        }
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let trimmed = line.trim();
        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };

        let set = |field: FormField| -> Result<Self, CommandError> {
            Ok(Self::Set(field, rest.to_string()))
        };
        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "calc" | "calculator" => Ok(Self::Show(Page::Calculator)),
            "table" => Ok(Self::Show(Page::Table)),
            "start" => set(FormField::StartNo),
            "snatch" => set(FormField::DeclaredSnatch),
            "cj" => set(FormField::DeclaredCleanJerk),
            "total" | "et" => set(FormField::DeclaredEntryTotal),
            "taken" => set(FormField::SnatchTaken),
            "save" => Ok(Self::Save),
            "edit" => Ok(Self::Edit(rest.to_string())),
            "clear" => Ok(Self::Clear),
            "json" => Ok(Self::Json),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    session: Session<InMemoryEntryRepository>,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: new_session(),
        }
    }

    /// Text for the currently active view.
    pub fn render(&self) -> String {
        match self.session.page() {
            Page::Calculator => {
                render::calculator(self.session.form(), &self.session.evaluate())
            }
            Page::Table => match self.session.table_view() {
                Ok(view) => render::table(&view),
                Err(err) => format!("error: {err}\n"),
            },
        }
    }

    pub fn handle_line(&mut self, line: &str) -> (Flow, String) {
        match Command::parse(line) {
            Ok(Command::Quit) => (Flow::Quit, String::new()),
            Ok(command) => (Flow::Continue, self.execute(command)),
            Err(err) => (Flow::Continue, format!("{err}\n")),
        }
    }

    fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Show(page) => self.show(page),
            Command::Set(field, text) => {
                self.session.set_field(field, text);
                self.show(Page::Calculator)
            }
            Command::Save => match self.session.save() {
                Ok(receipt) => format!("{}\n{}", receipt.message(), self.render()),
                Err(err) => format!("warning: {err}\n"),
            },
            Command::Edit(start_no) => match self.session.select_for_edit(&start_no) {
                Ok(()) => self.render(),
                Err(err) => format!("error: {err}\n"),
            },
            Command::Clear => {
                self.session.clear_form();
                self.show(Page::Calculator)
            }
            Command::Json => self.table_json(),
            Command::Help => format!("{HELP}\n"),
            Command::Quit => String::new(),
        }
    }

    fn show(&mut self, page: Page) -> String {
        match self.session.navigate(page) {
            Ok(()) => self.render(),
            Err(err) => format!("error: {err}\n"),
        }
    }

    fn table_json(&self) -> String {
        let rows = match self.session.table_view() {
            Ok(TableView::Rows { rows, .. }) => rows,
            Ok(TableView::Empty { .. }) => Vec::new(),
            Err(err) => return format!("error: {err}\n"),
        };
        match serde_json::to_string_pretty(&rows) {
            Ok(json) => format!("{json}\n"),
            Err(err) => format!("error: {err}\n"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
