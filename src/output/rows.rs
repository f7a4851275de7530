//! Printable rows built from split results, filter results and zone plans.

use crate::error::CidrError;
use crate::models::{num_usable_hosts, AddressFamily, Cidr, Ipv4, Ipv6, MAX_LENGTH, MAX_LENGTH_V6};
use crate::processing::{SubnetRole, ZoneSubnet};
use serde::Serialize;

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetRow {
    /// 1-based position in the result.
    pub index: usize,
    pub cidr: String,
    pub family: AddressFamily,
    /// Network address.
    pub first: String,
    /// Broadcast / last address.
    pub last: String,
    /// Usable IPv4 hosts after the reserved addresses; not shown for IPv6.
    pub hosts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<SubnetRole>,
}

impl SubnetRow {
    fn from_ipv4(index: usize, ipv4: &Ipv4) -> SubnetRow {
        SubnetRow {
            index,
            cidr: ipv4.to_string(),
            family: AddressFamily::Ipv4,
            first: ipv4.lo().to_string(),
            last: ipv4.hi().to_string(),
            hosts: Some(num_usable_hosts(ipv4.mask)),
            zone: None,
            role: None,
        }
    }

    fn from_ipv6(index: usize, ipv6: &Ipv6) -> SubnetRow {
        SubnetRow {
            index,
            cidr: ipv6.to_string(),
            family: AddressFamily::Ipv6,
            first: ipv6.lo().to_string(),
            last: ipv6.hi().to_string(),
            hosts: None,
            zone: None,
            role: None,
        }
    }
}

pub fn rows_from_ipv4(subnets: &[Ipv4]) -> Vec<SubnetRow> {
    subnets
        .iter()
        .enumerate()
        .map(|(i, s)| SubnetRow::from_ipv4(i + 1, s))
        .collect()
}

pub fn rows_from_ipv6(subnets: &[Ipv6]) -> Vec<SubnetRow> {
    subnets
        .iter()
        .enumerate()
        .map(|(i, s)| SubnetRow::from_ipv6(i + 1, s))
        .collect()
}

/// The IPv4 block behind an IPv4-mapped IPv6 block (`::ffff:a.b.c.d/96+n`).
fn mapped_ipv4(ipv6: &Ipv6) -> Option<Ipv4> {
    let addr = ipv6.addr.to_ipv4_mapped()?;
    let mask = ipv6.mask.checked_sub(MAX_LENGTH_V6 - MAX_LENGTH)?;
    Some(Ipv4 { addr, mask })
}

/// Rows for a filtered CIDR list. The `cidr` column keeps the text as given.
///
/// IPv4-mapped blocks get an IPv4 row. A mapped address with a prefix shorter
/// than /96 covers more than the mapped range and stays an IPv6 row.
pub fn rows_from_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<SubnetRow>, CidrError> {
    cidrs
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let mut row = match Cidr::parse(text.as_ref())? {
                Cidr::V4(v4) => SubnetRow::from_ipv4(i + 1, &v4),
                Cidr::V6(v6) => match mapped_ipv4(&v6) {
                    Some(v4) => SubnetRow::from_ipv4(i + 1, &v4),
                    None => SubnetRow::from_ipv6(i + 1, &v6),
                },
            };
            row.cidr = text.as_ref().to_string();
            Ok(row)
        })
        .collect()
}

/// Rows for a zone plan: the IPv4 subnet of each entry, followed by its IPv6
/// subnet when the plan is dual stack.
pub fn rows_from_plan(plan: &[ZoneSubnet]) -> Vec<SubnetRow> {
    let mut rows = Vec::new();
    for subnet in plan {
        let mut v4 = SubnetRow::from_ipv4(rows.len() + 1, &subnet.ipv4);
        v4.zone = Some(subnet.zone.clone());
        v4.role = Some(subnet.role);
        rows.push(v4);
        if let Some(ipv6) = &subnet.ipv6 {
            let mut v6 = SubnetRow::from_ipv6(rows.len() + 1, ipv6);
            v6.zone = Some(subnet.zone.clone());
            v6.role = Some(subnet.role);
            rows.push(v6);
        }
    }
    rows
}
