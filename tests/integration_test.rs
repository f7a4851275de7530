//! Integration tests for cidr-subnet-split
//!
//! These tests drive the public API the way a subnet reconciler would.

use cidr_subnet_split::config::Command;
use cidr_subnet_split::output::{render, OutputFormat};
use cidr_subnet_split::{
    get_ipv4_cidrs, get_ipv6_cidrs, plan_zone_subnets, run_command, split_into_subnets_ipv4,
    split_into_subnets_ipv6, CidrError, Ipv4,
};
use std::path::PathBuf;

fn strings<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_split_ipv4_examples() {
    assert_eq!(
        strings(&split_into_subnets_ipv4("10.0.0.0/16", 4).unwrap()),
        [
            "10.0.0.0/18",
            "10.0.64.0/18",
            "10.0.128.0/18",
            "10.0.192.0/18"
        ]
    );
    assert_eq!(
        strings(&split_into_subnets_ipv4("10.0.0.0/24", 3).unwrap()),
        ["10.0.0.0/26", "10.0.0.64/26", "10.0.0.128/26"]
    );
}

#[test]
fn test_split_ipv4_disjoint_and_covering() {
    for (parent, n) in [("10.0.0.0/8", 16), ("192.168.4.0/22", 4), ("100.64.0.0/10", 1)] {
        let parent_block = Ipv4::new(parent).unwrap();
        let subnets = split_into_subnets_ipv4(parent, n).unwrap();
        assert_eq!(subnets.len(), n);
        for (i, a) in subnets.iter().enumerate() {
            assert!(parent_block.contains(a.lo()) && parent_block.contains(a.hi()));
            for b in &subnets[i + 1..] {
                assert!(a.hi() < b.lo() || b.hi() < a.lo(), "{a} overlaps {b}");
            }
        }
        let covered: u64 = subnets.iter().map(|s| s.size()).sum();
        assert_eq!(covered, parent_block.size(), "{parent} / {n}");
    }
}

#[test]
fn test_split_ipv4_capacity_error_returns_nothing() {
    let result = split_into_subnets_ipv4("10.0.0.0/28", 32);
    assert!(matches!(result, Err(CidrError::Capacity { .. })));
}

#[test]
fn test_split_ipv6_skips_base_subnet() {
    assert_eq!(
        strings(&split_into_subnets_ipv6("2600:1f14:e08:7400::/56", 2).unwrap()),
        ["2600:1f14:e08:7401::/64", "2600:1f14:e08:7402::/64"]
    );
}

#[test]
fn test_filter_examples() {
    let cidrs = ["10.0.0.0/24", "2001:db8::/32"];
    assert_eq!(get_ipv4_cidrs(&cidrs).unwrap(), ["10.0.0.0/24"]);
    assert_eq!(get_ipv6_cidrs(&cidrs).unwrap(), ["2001:db8::/32"]);
}

#[test]
fn test_malformed_input_is_an_error_everywhere() {
    let bad = "not-a-cidr";
    assert!(split_into_subnets_ipv4(bad, 2).is_err());
    assert!(split_into_subnets_ipv6(bad, 2).is_err());
    assert!(get_ipv4_cidrs(&[bad]).is_err());
    assert!(get_ipv6_cidrs(&[bad]).is_err());
}

#[test]
fn test_zone_plan_matches_split() {
    let zones = ["us-west-2a", "us-west-2b"];
    let plan = plan_zone_subnets("10.20.0.0/16", &zones, None).unwrap();
    let split = split_into_subnets_ipv4("10.20.0.0/16", 4).unwrap();
    let planned: Vec<Ipv4> = plan.iter().map(|s| s.ipv4).collect();
    assert_eq!(planned, split);
}

#[test]
fn test_run_command_filter_from_file() {
    let command = Command::FilterIpv6 {
        cidrs: vec!["fd00::/8".to_string()],
        file: Some(PathBuf::from("src/tests/test_data/cidr_list_01.txt")),
    };
    let rows = run_command(&command).expect("filter-ipv6 failed");
    let cidrs: Vec<&str> = rows.iter().map(|r| r.cidr.as_str()).collect();
    assert_eq!(
        cidrs,
        ["fd00::/8", "2600:1f14:e08:7400::/56", "fd12:3456:789a::/48"]
    );
}

#[test]
fn test_run_command_filter_bad_file_entry_fails() {
    let command = Command::FilterIpv4 {
        cidrs: vec![],
        file: Some(PathBuf::from("src/tests/test_data/cidr_list_02.json")),
    };
    let err = run_command(&command).unwrap_err();
    assert!(err.to_string().contains("not-a-cidr"));
}

#[test]
fn test_run_command_split_csv() {
    let command = Command::SplitIpv4 {
        cidr: "10.0.0.0/16".to_string(),
        count: 2,
    };
    let rows = run_command(&command).unwrap();
    let csv = render(OutputFormat::Csv, command.name(), &rows).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains("\"10.0.128.0/17\",\"10.0.128.0\",\"10.0.255.255\",\"32763\""));
}
