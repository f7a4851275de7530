//! Address-family filtering of CIDR lists.

use crate::error::CidrError;
use crate::models::{AddressFamily, Cidr};

/// Split a CIDR list into its IPv4 and IPv6 entries.
///
/// The original strings are returned in input order. The first entry that
/// does not parse aborts the whole call.
pub fn partition_cidrs<S: AsRef<str>>(
    cidrs: &[S],
) -> Result<(Vec<String>, Vec<String>), CidrError> {
    let mut ipv4 = Vec::new();
    let mut ipv6 = Vec::new();

    for cidr in cidrs {
        let cidr = cidr.as_ref();
        match Cidr::parse(cidr)?.family() {
            AddressFamily::Ipv4 => ipv4.push(cidr.to_string()),
            AddressFamily::Ipv6 => ipv6.push(cidr.to_string()),
        }
    }
    log::trace!(
        "partitioned {} CIDRs into {} IPv4 and {} IPv6",
        cidrs.len(),
        ipv4.len(),
        ipv6.len()
    );
    Ok((ipv4, ipv6))
}

/// Return only the IPv4 entries of `cidrs`.
pub fn get_ipv4_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<String>, CidrError> {
    partition_cidrs(cidrs).map(|(ipv4, _)| ipv4)
}

/// Return only the IPv6 entries of `cidrs`.
pub fn get_ipv6_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<String>, CidrError> {
    partition_cidrs(cidrs).map(|(_, ipv6)| ipv6)
}
