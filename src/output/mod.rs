//! Output formatting for subnet data.
//!
//! This module handles formatting and outputting subnet rows:
//! - [`rows`] - Row construction from splits, filters and zone plans
//! - [`terminal`] - Aligned table with colors
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON report

mod csv;
mod json;
mod rows;
mod terminal;

use std::error::Error;

pub use csv::render_csv;
pub use json::render_json;
pub use rows::{rows_from_cidrs, rows_from_ipv4, rows_from_ipv6, rows_from_plan, SubnetRow};
pub use terminal::{family_tag, format_field, render_table};

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Render `rows` in the requested format.
pub fn render(
    format: OutputFormat,
    command: &str,
    rows: &[SubnetRow],
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Csv => Ok(render_csv(rows)),
        OutputFormat::Json => render_json(command, rows),
    }
}

/// Print `rows` to stdout in the requested format.
pub fn print_rows(
    format: OutputFormat,
    command: &str,
    rows: &[SubnetRow],
) -> Result<(), Box<dyn Error>> {
    log::debug!("printing {} rows as {format:?}", rows.len());
    let rendered = render(format, command, rows)?;
    print!("{rendered}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
