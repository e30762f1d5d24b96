//! Interactive terminal front end for the 80% rule calculator.
//!
//! # Responsibility
//! - Parse process flags and start core logging.
//! - Run the read-eval-print loop over one in-memory session.

mod app;
mod render;

use app::{App, Flow};
use clap::Parser;
use log::{debug, info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

const PROMPT: &str = "masters> ";
const DEFAULT_LOG_DIR_NAME: &str = "masters-logs";

#[derive(Debug, Parser)]
#[command(name = "masters", version, about = "Masters 80% rule minimums")]
struct Args {
    /// trace | debug | info | warn | error
    #[arg(long, env = "MASTERS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files.
    #[arg(long, env = "MASTERS_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = args
        .log_level
        .unwrap_or_else(|| masters_core::default_log_level().to_string());
    let log_dir = args.log_dir.unwrap_or_else(|| {
        std::env::temp_dir()
            .join(DEFAULT_LOG_DIR_NAME)
            .display()
            .to_string()
    });
    if let Err(err) = masters_core::init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("failed to open terminal: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new();
    println!("Masters 80% Rule Minimums (v{})", masters_core::core_version());
    println!("type `help` for commands\n");
    print!("{}", app.render());

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = editor.add_history_entry(line.as_str()) {
                        debug!("event=history module=cli status=error error={err}");
                    }
                }
                let (flow, output) = app.handle_line(&line);
                print!("{output}");
                if flow == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                warn!("event=readline module=cli status=error");
                eprintln!("input error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    info!("event=app_exit module=cli status=ok");
    ExitCode::SUCCESS
}
