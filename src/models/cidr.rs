//! Family-tagged CIDR block and the `address/prefix` parser shared by both families.

use super::{Ipv4, Ipv6};
use crate::error::CidrError;
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// Address family of a parsed CIDR block.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// A CIDR block of either family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Cidr {
    V4(Ipv4),
    V6(Ipv6),
}

impl Cidr {
    /// Parse `address/prefix` notation.
    ///
    /// The prefix must be plain decimal digits and fit the address family.
    /// Surrounding whitespace is not accepted.
    pub fn parse(input: &str) -> Result<Cidr, CidrError> {
        let (addr, prefix) = input
            .split_once('/')
            .ok_or_else(|| CidrError::parse(input, "missing /prefix"))?;

        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrError::parse(input, format!("invalid prefix {prefix:?}")));
        }
        let mask: u8 = prefix
            .parse()
            .map_err(|_| CidrError::parse(input, format!("prefix {prefix} out of range")))?;

        let addr: IpAddr = addr
            .parse()
            .map_err(|_| CidrError::parse(input, format!("invalid IP address {addr:?}")))?;

        let cidr = match addr {
            IpAddr::V4(v4) => Ipv4::from_parts(v4, mask).map(Cidr::V4),
            IpAddr::V6(v6) => Ipv6::from_parts(v6, mask).map(Cidr::V6),
        };
        cidr.map_err(|e| CidrError::parse(input, e.to_string()))
    }

    /// Family used for filtering.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) have an IPv4 form and
    /// count as IPv4.
    pub fn family(&self) -> AddressFamily {
        match self {
            Cidr::V4(_) => AddressFamily::Ipv4,
            Cidr::V6(v6) if v6.addr.to_ipv4_mapped().is_some() => AddressFamily::Ipv4,
            Cidr::V6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn mask(&self) -> u8 {
        match self {
            Cidr::V4(v4) => v4.mask,
            Cidr::V6(v6) => v6.mask,
        }
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cidr::V4(v4) => fmt::Display::fmt(v4, f),
            Cidr::V6(v6) => fmt::Display::fmt(v6, f),
        }
    }
}

impl std::str::FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::parse(s)
    }
}
