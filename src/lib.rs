// cargo watch -x 'fmt' -x 'test'

//! Split CIDR blocks into subnets and filter CIDR lists by address family.
//!
//! The four core operations are pure functions:
//! [`split_into_subnets_ipv4`], [`split_into_subnets_ipv6`],
//! [`get_ipv4_cidrs`] and [`get_ipv6_cidrs`].

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CidrError;
pub use models::{AddressFamily, Cidr, Ipv4, Ipv6};
pub use processing::{
    get_ipv4_cidrs, get_ipv6_cidrs, partition_cidrs, plan_zone_subnets, split_into_subnets_ipv4,
    split_into_subnets_ipv6, SubnetRole, ZoneSubnet,
};

use config::Command;
use output::{rows_from_cidrs, rows_from_ipv4, rows_from_ipv6, rows_from_plan, SubnetRow};
use std::error::Error;

/// Run one CLI command and return the rows to print.
pub fn run_command(command: &Command) -> Result<Vec<SubnetRow>, Box<dyn Error>> {
    log::info!("#Start {}", command.name());
    let rows = match command {
        Command::SplitIpv4 { cidr, count } => rows_from_ipv4(&split_into_subnets_ipv4(cidr, *count)?),
        Command::SplitIpv6 { cidr, count } => rows_from_ipv6(&split_into_subnets_ipv6(cidr, *count)?),
        Command::FilterIpv4 { cidrs, file } => {
            let cidrs = input::collect_cidrs(cidrs, file.as_deref())?;
            rows_from_cidrs(&get_ipv4_cidrs(&cidrs)?)?
        }
        Command::FilterIpv6 { cidrs, file } => {
            let cidrs = input::collect_cidrs(cidrs, file.as_deref())?;
            rows_from_cidrs(&get_ipv6_cidrs(&cidrs)?)?
        }
        Command::Zones {
            vpc_cidr,
            zones,
            ipv6_cidr,
        } => rows_from_plan(&plan_zone_subnets(vpc_cidr, zones, ipv6_cidr.as_deref())?),
    };
    log::info!("#End {} with {} rows", command.name(), rows.len());
    Ok(rows)
}
