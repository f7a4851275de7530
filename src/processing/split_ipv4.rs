//! Equal-size IPv4 subnet splitting.
//!
//! Carves a parent block into `num_subnets` children of the same size. Counts
//! that are not a power of two are rounded up for sizing, and only the first
//! `num_subnets` children are returned.

use crate::error::CidrError;
use crate::models::{Ipv4, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Number of extra prefix bits needed for `num_subnets` children, `ceil(log2(n))`.
fn subnet_bits(num_subnets: usize) -> Option<u32> {
    num_subnets
        .checked_next_power_of_two()
        .map(|n| n.trailing_zeros())
}

/// Split an IPv4 CIDR block into `num_subnets` equally sized subnets.
///
/// # Examples
/// ```
/// use cidr_subnet_split::split_into_subnets_ipv4;
/// let subnets = split_into_subnets_ipv4("10.0.0.0/24", 3).unwrap();
/// let subnets: Vec<String> = subnets.iter().map(|s| s.to_string()).collect();
/// assert_eq!(subnets, ["10.0.0.0/26", "10.0.0.64/26", "10.0.0.128/26"]);
/// ```
pub fn split_into_subnets_ipv4(
    cidr_block: &str,
    num_subnets: usize,
) -> Result<Vec<Ipv4>, CidrError> {
    if num_subnets == 0 {
        return Err(CidrError::InvalidSubnetCount(num_subnets));
    }
    let parent = Ipv4::new(cidr_block)?.network();
    let network_len = parent.mask;

    let capacity_error = |subnet_bits: u32| CidrError::Capacity {
        cidr: cidr_block.to_string(),
        count: num_subnets,
        network_len,
        subnet_bits,
        max_len: MAX_LENGTH,
    };

    let subnet_bits = subnet_bits(num_subnets).ok_or_else(|| capacity_error(u32::MAX))?;
    if network_len as u32 + subnet_bits > MAX_LENGTH as u32 {
        return Err(capacity_error(subnet_bits));
    }
    let new_len = network_len + subnet_bits as u8;
    let unused = (1usize << subnet_bits) - num_subnets;
    if unused > 0 {
        log::debug!(
            "split {cidr_block} into {num_subnets}: leaving {unused} trailing /{new_len} unused"
        );
    }

    let base = u32::from(parent.addr) as u64;
    let step = 1u64 << (MAX_LENGTH - new_len);
    let subnets = (0..num_subnets as u64)
        .map(|i| Ipv4 {
            // Fits in u32: i < 2^subnet_bits and the parent's host bits are clear.
            addr: Ipv4Addr::from((base + (i * step)) as u32),
            mask: new_len,
        })
        .collect::<Vec<_>>();

    log::debug!(
        "split {cidr_block} into {} x /{new_len} subnets",
        subnets.len()
    );
    Ok(subnets)
}
