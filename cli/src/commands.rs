pub mod check;
pub mod predict;
pub mod simulate;
pub mod translate;
pub mod validate;

use clap::{ArgAction, Parser, Subcommand};
use dualstack_common::config::{CommunicationMode, Config};

pub const DEFAULT_SUBNET: &str = "192.168.0.0/24";

#[derive(Parser)]
#[command(name = "dualstack", version)]
#[command(about = "An IPv4 to IPv6 transition simulator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// IPv4 subnet to report on and simulate
    #[arg(long, default_value = DEFAULT_SUBNET)]
    pub subnet: String,

    /// Let every host pair communicate
    #[arg(long, conflicts_with = "never")]
    pub always: bool,

    /// Let no host pair communicate
    #[arg(long)]
    pub never: bool,

    /// Refuse subnets with more usable hosts than this
    #[arg(long, value_name = "HOSTS")]
    pub max_hosts: Option<u64>,

    /// Seed for every random decision, making runs repeatable
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Reduce output (-q hides decorations, -qq also hides per-host lines)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate IPv4 addresses into their 2002::/16 IPv6 form
    #[command(alias = "t")]
    Translate {
        addresses: Vec<String>,

        /// Also translate this many random addresses
        #[arg(short, long, value_name = "COUNT")]
        random: Option<usize>,
    },
    /// Check whether addresses are valid IPv6 addresses
    #[command(alias = "v")]
    Validate {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Check whether subnets are valid IPv4 networks
    #[command(alias = "c")]
    Check {
        #[arg(required = true)]
        subnets: Vec<String>,
    },
    /// Project the year the IPv4 pool runs out
    #[command(alias = "p")]
    Predict {
        /// Addresses already allocated
        #[arg(long)]
        allocated: Option<f64>,

        /// Addresses allocated in the first year
        #[arg(long)]
        rate: Option<f64>,

        /// Yearly growth of the allocation rate (0.05 = 5%)
        #[arg(long)]
        growth: Option<f64>,

        /// First year of the projection (defaults to the current year)
        #[arg(long)]
        start_year: Option<i32>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let mode = if self.always {
            CommunicationMode::Always
        } else if self.never {
            CommunicationMode::Never
        } else {
            CommunicationMode::Random
        };

        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            seed: self.seed,
            mode,
            max_hosts: self.max_hosts,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
