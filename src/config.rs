//! Command line and environment configuration.
//!
//! Every option can also come from the environment (or a `.env` file loaded
//! by `dotenv` in `main`).

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Split CIDR blocks into subnets and filter CIDR lists by address family.
#[derive(Debug, Parser)]
#[command(name = "cidr-subnet-split", version)]
pub struct Config {
    /// Output format.
    #[arg(long, short, value_enum, env = "CIDR_SPLIT_FORMAT", default_value = "table", global = true)]
    pub format: OutputFormat,

    /// log4rs configuration file; a stderr logger at warn level is used when it is missing.
    #[arg(long, env = "CIDR_SPLIT_LOG_CONFIG", default_value = DEFAULT_LOG_CONFIG, global = true)]
    pub log_config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split an IPv4 block into COUNT equally sized subnets.
    SplitIpv4 {
        cidr: String,
        count: usize,
    },
    /// Split an IPv6 block into COUNT sequential /64 subnets.
    SplitIpv6 {
        cidr: String,
        count: usize,
    },
    /// Keep only the IPv4 entries of a CIDR list.
    FilterIpv4 {
        /// CIDRs, space or comma separated.
        cidrs: Vec<String>,
        /// Read more CIDRs from a text or JSON file.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Keep only the IPv6 entries of a CIDR list.
    FilterIpv6 {
        cidrs: Vec<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Plan a public and a private subnet per availability zone.
    Zones {
        vpc_cidr: String,
        #[arg(required = true)]
        zones: Vec<String>,
        /// IPv6 block to carve /64s from for a dual stack plan.
        #[arg(long)]
        ipv6_cidr: Option<String>,
    },
}

impl Command {
    /// Name used in log lines and the JSON report.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SplitIpv4 { .. } => "split-ipv4",
            Command::SplitIpv6 { .. } => "split-ipv6",
            Command::FilterIpv4 { .. } => "filter-ipv4",
            Command::FilterIpv6 { .. } => "filter-ipv6",
            Command::Zones { .. } => "zones",
        }
    }
}

/// Initialise log4rs from `path`, or a warn level stderr logger if the file is absent.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("{} not found, logging to stderr", path.display());
    Ok(())
}
