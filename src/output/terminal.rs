//! Terminal table output.

use super::SubnetRow;
use crate::models::AddressFamily;
use colored::{ColoredString, Colorize};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Family field padded to `width`, green for IPv4 and cyan for IPv6.
///
/// Padding happens before colouring so escape codes don't eat into the width.
pub fn family_tag(family: AddressFamily, width: usize) -> ColoredString {
    let field = format_field(family, width);
    match family {
        AddressFamily::Ipv4 => field.green(),
        AddressFamily::Ipv6 => field.cyan(),
    }
}

/// Render rows as an aligned table, one quoted field per column.
pub fn render_table(rows: &[SubnetRow]) -> String {
    let cidr_width = column_width(rows.iter().map(|r| r.cidr.len()), 18);
    let addr_width = column_width(
        rows.iter().map(|r| r.first.len().max(r.last.len())),
        17,
    );
    let zone_width = column_width(rows.iter().filter_map(|r| r.zone.as_ref().map(String::len)), 8);

    let mut out = format!(
        "{} {} {} {} {} {} {} {}\n",
        format_field("cnt", 5),
        format_field("family", 8),
        format_field("cidr", cidr_width),
        format_field("first", addr_width),
        format_field("last", addr_width),
        format_field("hosts", 12),
        format_field("zone", zone_width),
        format_field("role", 9),
    );
    for row in rows {
        out.push_str(&format!(
            "{} {} {} {} {} {} {} {}\n",
            format_field(row.index, 5),
            family_tag(row.family, 8),
            format_field(&row.cidr, cidr_width),
            format_field(&row.first, addr_width),
            format_field(&row.last, addr_width),
            format_field(hosts_field(row.hosts), 12),
            format_field(row.zone.as_deref().unwrap_or("-"), zone_width),
            format_field(row.role.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()), 9),
        ));
    }
    out
}

pub(super) fn hosts_field(hosts: Option<u64>) -> String {
    hosts.map(|h| h.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Widest value plus quotes, never below `min`.
fn column_width(lengths: impl Iterator<Item = usize>, min: usize) -> usize {
    lengths.map(|l| l + 2).max().unwrap_or(0).max(min)
}
