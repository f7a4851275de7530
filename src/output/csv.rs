//! CSV output formatting for subnet rows.

use super::terminal::{format_field, hosts_field};
use super::SubnetRow;
use itertools::Itertools;

const HEADER: [&str; 8] = ["cnt", "family", "cidr", "first", "last", "hosts", "zone", "role"];

/// Render rows as CSV with every field quoted.
pub fn render_csv(rows: &[SubnetRow]) -> String {
    let mut out = HEADER.iter().map(|h| format_field(h, 0)).join(",");
    out.push('\n');
    for row in rows {
        out.push_str(&csv_row(row));
        out.push('\n');
    }
    out
}

fn csv_row(row: &SubnetRow) -> String {
    [
        row.index.to_string(),
        row.family.to_string(),
        row.cidr.clone(),
        row.first.clone(),
        row.last.clone(),
        hosts_field(row.hosts),
        row.zone.clone().unwrap_or_default(),
        row.role.map(|r| r.to_string()).unwrap_or_default(),
    ]
    .iter()
    .map(|field| format_field(escape_csv_field(field), 0))
    .join(",")
}

/// Double any embedded quotes; the caller adds the surrounding ones.
fn escape_csv_field(input: &str) -> String {
    input.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{rows_from_cidrs, rows_from_plan};
    use crate::processing::plan_zone_subnets;

    #[test]
    fn test_render_csv_plan() {
        let plan = plan_zone_subnets("10.0.0.0/24", &["us-east-1a"], None).unwrap();
        let csv = render_csv(&rows_from_plan(&plan));
        assert_eq!(
            csv,
            concat!(
                "\"cnt\",\"family\",\"cidr\",\"first\",\"last\",\"hosts\",\"zone\",\"role\"\n",
                "\"1\",\"IPv4\",\"10.0.0.0/25\",\"10.0.0.0\",\"10.0.0.127\",\"123\",\"us-east-1a\",\"public\"\n",
                "\"2\",\"IPv4\",\"10.0.0.128/25\",\"10.0.0.128\",\"10.0.0.255\",\"123\",\"us-east-1a\",\"private\"\n",
            )
        );
    }

    #[test]
    fn test_render_csv_ipv6_without_zone() {
        let csv = render_csv(&rows_from_cidrs(&["2001:db8::/126"]).unwrap());
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "\"1\",\"IPv6\",\"2001:db8::/126\",\"2001:db8::\",\"2001:db8::3\",\"-\",\"\",\"\""
        );
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field("say \"hi\""), "say \"\"hi\"\"");
    }
}
