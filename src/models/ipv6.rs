//! IPv6 CIDR blocks.

use super::Cidr;
use crate::error::CidrError;
use crate::models::AddressFamily;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv6Addr;

/// Maximum length for an IPv6 subnet mask (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Prefix length of every IPv6 subnet handed to a VPC.
pub const SUBNET_LENGTH_V6: u8 = 64;

/// Convert a CIDR prefix length to an IPv6 mask as u128.
pub fn get_cidr_mask_v6(len: u8) -> Result<u128, CidrError> {
    if len > MAX_LENGTH_V6 {
        return Err(CidrError::PrefixTooLong {
            len,
            max_len: MAX_LENGTH_V6,
        });
    }
    Ok(u128::MAX.checked_shl((MAX_LENGTH_V6 - len) as u32).unwrap_or(0))
}

/// Get the network address for a given IPv6 address and prefix length.
pub fn cut_addr_v6(addr: Ipv6Addr, len: u8) -> Result<Ipv6Addr, CidrError> {
    let mask = get_cidr_mask_v6(len)?;
    Ok(Ipv6Addr::from(u128::from(addr) & mask))
}

/// IPv6 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6 {
    /// The IPv6 address.
    pub addr: Ipv6Addr,
    /// The prefix length (0-128).
    pub mask: u8,
}

impl Serialize for Ipv6 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv6 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv6::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv6 {
    /// Create a new [`Ipv6`] from a CIDR string (e.g., "2001:db8::/32").
    pub fn new(addr_cidr: &str) -> Result<Ipv6, CidrError> {
        match Cidr::parse(addr_cidr)? {
            Cidr::V6(ipv6) => Ok(ipv6),
            Cidr::V4(_) => Err(CidrError::UnexpectedAddressType {
                input: addr_cidr.to_string(),
                expected: AddressFamily::Ipv6,
            }),
        }
    }

    /// Build from parts, rejecting masks longer than /128.
    pub fn from_parts(addr: Ipv6Addr, mask: u8) -> Result<Ipv6, CidrError> {
        if mask > MAX_LENGTH_V6 {
            return Err(CidrError::PrefixTooLong {
                len: mask,
                max_len: MAX_LENGTH_V6,
            });
        }
        Ok(Ipv6 { addr, mask })
    }

    /// The same block with the host bits cleared.
    pub fn network(&self) -> Ipv6 {
        Ipv6 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Lowest address in the block.
    pub fn lo(&self) -> Ipv6Addr {
        let host_bits = u128::MAX.checked_shr(self.mask as u32).unwrap_or(0);
        Ipv6Addr::from(u128::from(self.addr) & !host_bits)
    }

    /// Highest address in the block.
    pub fn hi(&self) -> Ipv6Addr {
        let host_bits = u128::MAX.checked_shr(self.mask as u32).unwrap_or(0);
        Ipv6Addr::from(u128::from(self.addr) | host_bits)
    }

    pub fn contains(&self, ip: Ipv6Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
