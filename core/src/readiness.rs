//! # IPv6 Readiness Report
//!
//! Summarises how many IPv6 addresses a subnet would receive after translation.

use dualstack_common::error::Result;
use dualstack_common::network::subnet::Subnet;

use crate::expander::{self, SubnetMapping};

pub const RECOMMENDATION: &str = "Begin IPv6 deployment planning.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessReport {
    pub subnet: Subnet,
    /// Number of IPv6 addresses available, one per usable IPv4 host.
    pub available: usize,
    pub recommendation: &'static str,
}

impl ReadinessReport {
    pub fn from_mapping(mapping: &SubnetMapping) -> Self {
        Self {
            subnet: *mapping.subnet(),
            available: mapping.len(),
            recommendation: RECOMMENDATION,
        }
    }
}

/// Expands `input` (leniently, with an optional host limit) and reports on it.
pub fn assess(input: &str, limit: Option<u64>) -> Result<ReadinessReport> {
    let mapping = expander::expand_bounded(input, limit)?;
    Ok(ReadinessReport::from_mapping(&mapping))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
