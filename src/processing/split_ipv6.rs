//! Sequential /64 IPv6 subnet splitting.
//!
//! The parent is cut down to a /64 and every subnet bumps the subnet-ID octet
//! (byte 7) once before it is emitted. The first subnet is therefore the one
//! *after* the parent base: splitting `2600:1f14:e08:7400::/56` starts at
//! `...:7401::/64`, leaving `...:7400::/64` unallocated.

use crate::error::CidrError;
use crate::models::{cut_addr_v6, Ipv6, SUBNET_LENGTH_V6};
use std::net::Ipv6Addr;

/// Index of the octet incremented per subnet.
const SUBNET_ID_BYTE: usize = 7;

/// Split an IPv6 CIDR block into `num_subnets` sequential /64 subnets.
///
/// Fails with [`CidrError::SubnetIdOverflow`] rather than wrapping when the
/// subnet-ID byte would pass 255.
pub fn split_into_subnets_ipv6(
    cidr_block: &str,
    num_subnets: usize,
) -> Result<Vec<Ipv6>, CidrError> {
    if num_subnets == 0 {
        return Err(CidrError::InvalidSubnetCount(num_subnets));
    }
    let parent = Ipv6::new(cidr_block)?;
    if parent.mask > SUBNET_LENGTH_V6 {
        log::warn!(
            "{cidr_block} is longer than /{SUBNET_LENGTH_V6}, widening to /{SUBNET_LENGTH_V6}"
        );
    }
    let base = cut_addr_v6(parent.addr, parent.mask.min(SUBNET_LENGTH_V6))?;

    let start = base.octets()[SUBNET_ID_BYTE];
    let overflow = || CidrError::SubnetIdOverflow {
        cidr: cidr_block.to_string(),
        count: num_subnets,
    };
    let last = u8::try_from(num_subnets)
        .ok()
        .and_then(|n| start.checked_add(n))
        .ok_or_else(overflow)?;

    let mut octets = base.octets();
    let mut subnets = Vec::with_capacity(num_subnets);
    while octets[SUBNET_ID_BYTE] < last {
        octets[SUBNET_ID_BYTE] += 1;
        subnets.push(Ipv6 {
            addr: Ipv6Addr::from(octets),
            mask: SUBNET_LENGTH_V6,
        });
    }

    log::debug!(
        "split {cidr_block} into {} x /{SUBNET_LENGTH_V6} subnets",
        subnets.len()
    );
    Ok(subnets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(subnets: &[Ipv6]) -> Vec<String> {
        subnets.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_skips_parent_base_subnet() {
        let subnets = split_into_subnets_ipv6("2600:1f14:e08:7400::/56", 2).unwrap();
        assert_eq!(
            strings(&subnets),
            ["2600:1f14:e08:7401::/64", "2600:1f14:e08:7402::/64"]
        );
    }

    #[test]
    fn test_split_host_bits_are_cleared() {
        let subnets = split_into_subnets_ipv6("2600:1f14:e08:7400:aaaa::1/56", 1).unwrap();
        assert_eq!(strings(&subnets), ["2600:1f14:e08:7401::/64"]);
    }

    #[test]
    fn test_split_long_prefix_is_truncated_to_64() {
        let subnets = split_into_subnets_ipv6("2001:db8:0:10:ffff::/80", 2).unwrap();
        assert_eq!(
            strings(&subnets),
            ["2001:db8:0:11::/64", "2001:db8:0:12::/64"]
        );
    }

    #[test]
    fn test_split_short_prefix_only_walks_byte_seven() {
        // Bits between /48 and byte 7 stay as they are in the parent.
        let subnets = split_into_subnets_ipv6("2001:db8:1::/48", 3).unwrap();
        assert_eq!(
            strings(&subnets),
            [
                "2001:db8:1:1::/64",
                "2001:db8:1:2::/64",
                "2001:db8:1:3::/64"
            ]
        );
    }

    #[test]
    fn test_split_twice_is_not_split_once_for_double() {
        let once = split_into_subnets_ipv6("2600:1f14:e08:7400::/56", 4).unwrap();
        let first = split_into_subnets_ipv6("2600:1f14:e08:7400::/56", 2).unwrap();
        let second = split_into_subnets_ipv6(&first[1].to_string(), 2).unwrap();
        assert_eq!(strings(&first), strings(&once[..2]));
        assert_eq!(
            strings(&second),
            ["2600:1f14:e08:7403::/64", "2600:1f14:e08:7404::/64"]
        );
    }

    #[test]
    fn test_split_subnet_id_overflow() {
        assert_eq!(split_into_subnets_ipv6("2001:db8::/56", 255).unwrap().len(), 255);
        assert_eq!(
            split_into_subnets_ipv6("2001:db8::/56", 256).unwrap_err(),
            CidrError::SubnetIdOverflow {
                cidr: "2001:db8::/56".to_string(),
                count: 256
            }
        );
        let tail = split_into_subnets_ipv6("2001:db8:0:fe::/64", 1).unwrap();
        assert_eq!(strings(&tail), ["2001:db8:0:ff::/64"]);
        assert!(split_into_subnets_ipv6("2001:db8:0:fe::/64", 2).is_err());
    }

    #[test]
    fn test_split_invalid_input() {
        assert_eq!(
            split_into_subnets_ipv6("2001:db8::/56", 0).unwrap_err(),
            CidrError::InvalidSubnetCount(0)
        );
        assert!(matches!(
            split_into_subnets_ipv6("not-a-cidr", 2),
            Err(CidrError::Parse { .. })
        ));
        assert!(matches!(
            split_into_subnets_ipv6("10.0.0.0/16", 2),
            Err(CidrError::UnexpectedAddressType { .. })
        ));
    }
}
