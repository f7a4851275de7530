//! Subnet splitting logic.
//!
//! This module contains the pure computations of the crate:
//! - [`split_ipv4`] - Equal-size IPv4 subnet splitting
//! - [`split_ipv6`] - Sequential /64 IPv6 subnet splitting
//! - [`filter`] - Address-family filtering of CIDR lists
//! - [`zones`] - Public/private subnet plan per availability zone

mod filter;
mod split_ipv4;
mod split_ipv6;
mod zones;

// Re-export public functions
pub use filter::{get_ipv4_cidrs, get_ipv6_cidrs, partition_cidrs};
pub use split_ipv4::split_into_subnets_ipv4;
pub use split_ipv6::split_into_subnets_ipv6;
pub use zones::{plan_zone_subnets, SubnetRole, ZoneSubnet};
