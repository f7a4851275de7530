//! Address models for subnet splitting.
//!
//! This module contains the value types used throughout the crate:
//! - [`Ipv4`] - IPv4 CIDR block
//! - [`Ipv6`] - IPv6 CIDR block
//! - [`Cidr`] and [`AddressFamily`] - family-tagged block and its parser

mod cidr;
mod ipv4;
mod ipv6;

// Re-export public types
pub use cidr::{AddressFamily, Cidr};
pub use ipv4::{get_cidr_mask, num_usable_hosts, Ipv4, MAX_LENGTH, RESERVED_HOSTS};
pub use ipv6::{cut_addr_v6, get_cidr_mask_v6, Ipv6, MAX_LENGTH_V6, SUBNET_LENGTH_V6};
