//! Plain-text rendering of the two views.

use masters_core::{Entry, FormEvaluation, FormField, FormState, TableView, TABLE_COLUMNS};
use std::fmt::Write;

pub fn calculator(form: &FormState, evaluation: &FormEvaluation) -> String {
    let mut out = String::from("== Calculator ==\n");
    let _ = writeln!(
        out,
        "{}: {}",
        FormField::StartNo.label(),
        form.field(FormField::StartNo)
    );

    out.push_str("-- Declared Entry Values --\n");
    for field in [
        FormField::DeclaredSnatch,
        FormField::DeclaredCleanJerk,
        FormField::DeclaredEntryTotal,
    ] {
        let _ = writeln!(out, "{}: {}", field.label(), form.field(field));
    }

    if let Some(snatch) = evaluation.snatch {
        out.push_str("-- Snatch Evaluation --\n");
        let _ = writeln!(out, "Snatch Plus/Minus: {}", snatch.plus_minus);
        let _ = writeln!(out, "Minimum Snatch: {}", snatch.minimum);

        out.push_str("-- CJ Evaluation --\n");
        let _ = writeln!(
            out,
            "{}: {}",
            FormField::SnatchTaken.label(),
            form.field(FormField::SnatchTaken)
        );
        if let Some(clean_jerk) = evaluation.clean_jerk {
            let _ = writeln!(out, "CJ Plus/Minus: {}", clean_jerk.plus_minus);
            let _ = writeln!(out, "Minimum CJ: {}", clean_jerk.minimum);
        }
    }

    for warning in &evaluation.warnings {
        let _ = writeln!(out, "warning: {warning}");
    }
    out
}

pub fn table(view: &TableView) -> String {
    let mut out = String::from("== Results Table ==\n");
    match view {
        TableView::Empty { message } => {
            let _ = writeln!(out, "warning: {message}");
        }
        TableView::Rows {
            rows,
            start_numbers,
        } => {
            out.push_str(&grid(rows));
            let _ = writeln!(
                out,
                "Select a Start Number to input Snatch Taken: {}",
                start_numbers.join(", ")
            );
            out.push_str("Use `edit <start no>` to update it in the calculator.\n");
        }
    }
    out
}

fn grid(rows: &[Entry]) -> String {
    let cells: Vec<[String; 9]> = rows.iter().map(Entry::table_cells).collect();
    let mut widths = TABLE_COLUMNS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, TABLE_COLUMNS.iter().copied(), &widths);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}
