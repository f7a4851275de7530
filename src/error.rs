//! Error types for CIDR parsing and subnet splitting.

use crate::models::AddressFamily;

/// Errors returned by the splitter and filter functions.
///
/// Every variant carries the input it failed on, so callers can surface the
/// message as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidrError {
    #[error("invalid CIDR address {input:?}: {reason}")]
    Parse { input: String, reason: String },
    #[error("unexpected IP address type for {input}: expected {expected}")]
    UnexpectedAddressType {
        input: String,
        expected: AddressFamily,
    },
    #[error(
        "cannot split {cidr} into {count} subnets: /{network_len} plus {subnet_bits} subnet bits exceeds /{max_len}"
    )]
    Capacity {
        cidr: String,
        count: usize,
        network_len: u8,
        subnet_bits: u32,
        max_len: u8,
    },
    #[error("network length /{len} is too long, maximum is /{max_len}")]
    PrefixTooLong { len: u8, max_len: u8 },
    #[error("number of subnets must be at least 1, got {0}")]
    InvalidSubnetCount(usize),
    #[error("splitting {cidr} into {count} /64 subnets overflows the subnet ID byte")]
    SubnetIdOverflow { cidr: String, count: usize },
    #[error("at least one availability zone is required")]
    NoZones,
}

impl CidrError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        CidrError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
