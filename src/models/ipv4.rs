//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 addresses with subnet masks,
//! along with the bit helpers used when carving subnets.

use super::Cidr;
use crate::error::CidrError;
use crate::models::AddressFamily;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Addresses a cloud provider keeps for itself in every IPv4 subnet
/// (network, router, DNS, future use, broadcast).
pub const RESERVED_HOSTS: u64 = 5;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_subnet_split::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixTooLong {
            len,
            max_len: MAX_LENGTH,
        })
    } else {
        Ok(mask_bits(len))
    }
}

/// Mask for `len`, with lengths past /32 treated as /32.
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Number of usable host addresses in a subnet of prefix length `len`.
///
/// Prefixes too small to hold anything after the reserved addresses return 0.
pub fn num_usable_hosts(len: u8) -> u64 {
    if len > MAX_LENGTH {
        return 0;
    }
    let total = 1u64 << (MAX_LENGTH - len);
    total.saturating_sub(RESERVED_HOSTS)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Host bits are kept as written; use [`Ipv4::network`] for the block base.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        match Cidr::parse(addr_cidr)? {
            Cidr::V4(ipv4) => Ok(ipv4),
            Cidr::V6(_) => Err(CidrError::UnexpectedAddressType {
                input: addr_cidr.to_string(),
                expected: AddressFamily::Ipv4,
            }),
        }
    }

    /// Build from parts, rejecting masks longer than /32.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, CidrError> {
        if mask > MAX_LENGTH {
            return Err(CidrError::PrefixTooLong {
                len: mask,
                max_len: MAX_LENGTH,
            });
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The same block with the host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !mask_bits(self.mask))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & mask_bits(self.mask))
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// Total number of addresses covered by the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
