//! Per availability zone subnet plan.
//!
//! A VPC gets one public and one private subnet in every zone. The VPC block
//! is split into `2 * zones` children: the first half are public, the second
//! half private, both in zone order.

use super::{split_into_subnets_ipv4, split_into_subnets_ipv6};
use crate::error::CidrError;
use crate::models::{Ipv4, Ipv6};
use serde::Serialize;
use std::fmt;

/// Whether a subnet routes through an internet gateway or a NAT gateway.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubnetRole {
    Public,
    Private,
}

impl fmt::Display for SubnetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubnetRole::Public => write!(f, "public"),
            SubnetRole::Private => write!(f, "private"),
        }
    }
}

/// One planned subnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneSubnet {
    pub zone: String,
    pub role: SubnetRole,
    pub ipv4: Ipv4,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<Ipv6>,
}

/// Plan a public and a private subnet for every zone.
///
/// Public subnets come first, then private ones, each in the order `zones`
/// was given.
pub fn plan_zone_subnets<S: AsRef<str>>(
    vpc_cidr: &str,
    zones: &[S],
    ipv6_cidr: Option<&str>,
) -> Result<Vec<ZoneSubnet>, CidrError> {
    if zones.is_empty() {
        return Err(CidrError::NoZones);
    }
    let count = zones.len() * 2;
    let ipv4_subnets = split_into_subnets_ipv4(vpc_cidr, count)?;
    let ipv6_subnets = ipv6_cidr
        .map(|cidr| split_into_subnets_ipv6(cidr, count))
        .transpose()?;

    let mut plan = Vec::with_capacity(count);
    for (role, offset) in [(SubnetRole::Public, 0), (SubnetRole::Private, zones.len())] {
        for (i, zone) in zones.iter().enumerate() {
            plan.push(ZoneSubnet {
                zone: zone.as_ref().to_string(),
                role,
                ipv4: ipv4_subnets[offset + i],
                ipv6: ipv6_subnets.as_ref().map(|v6| v6[offset + i]),
            });
        }
    }

    log::info!(
        "planned {} subnets for {vpc_cidr} across {} zones",
        plan.len(),
        zones.len()
    );
    Ok(plan)
}
