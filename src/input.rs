//! Reading CIDR lists from the command line and from files.

use regex::Regex;
use std::error::Error;
use std::path::Path;
use std::sync::OnceLock;

/// Regex for splitting a CIDR list on whitespace and commas.
static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[\s,]+").expect("Invalid Regex"))
}

/// Split free text into CIDR strings.
///
/// Lines starting with `#` are comments. Entries are not validated here.
pub fn split_cidr_list(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| get_separator_regex().split(line))
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a CIDR list from a file.
///
/// A file whose content starts with `[` is parsed as a JSON array of strings,
/// anything else as text for [`split_cidr_list`].
pub fn read_cidr_list(path: impl AsRef<Path>) -> Result<Vec<String>, Box<dyn Error>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading CIDR list {}: {e}", path.display()))?;

    let cidrs = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<String>>(&content)
            .map_err(|e| format!("Error parsing JSON CIDR list {}: {e}", path.display()))?
    } else {
        split_cidr_list(&content)
    };
    log::info!("Read {} CIDRs from {}", cidrs.len(), path.display());
    Ok(cidrs)
}

/// Combine CIDRs given as arguments with those read from an optional file.
///
/// Argument values may themselves hold comma separated lists.
pub fn collect_cidrs(args: &[String], file: Option<&Path>) -> Result<Vec<String>, Box<dyn Error>> {
    let mut cidrs: Vec<String> = args.iter().flat_map(|a| split_cidr_list(a)).collect();
    if let Some(file) = file {
        cidrs.extend(read_cidr_list(file)?);
    }
    if cidrs.is_empty() {
        log::warn!("No CIDRs given");
    }
    Ok(cidrs)
}
