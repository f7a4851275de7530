//! JSON output.

use super::SubnetRow;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Report<'a> {
    generated_at: String,
    command: &'a str,
    count: usize,
    subnets: &'a [SubnetRow],
}

/// Render rows as a pretty JSON report stamped with the current UTC time.
pub fn render_json(command: &str, rows: &[SubnetRow]) -> Result<String, Box<dyn Error>> {
    let report = Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        command,
        count: rows.len(),
        subnets: rows,
    };
    serde_json::to_string_pretty(&report).map_err(|e| format!("Error serializing JSON: {e}").into())
}
