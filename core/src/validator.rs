//! Input validation for subnets and IPv6 addresses.
//!
//! Malformed input is an ordinary negative answer here, never a fault. The
//! `check_*` functions keep the reason so a caller can print it; the `is_*`
//! functions fold it into a boolean.

use std::net::Ipv6Addr;

use dualstack_common::error::Result;
use dualstack_common::network::address;
use dualstack_common::network::subnet::{ParseMode, Subnet};
use tracing::debug;

/// Strictly parses a subnet. Unlike expansion, host bits set below the prefix are rejected.
pub fn check_subnet(input: &str) -> Result<Subnet> {
    let result = Subnet::parse(input, ParseMode::Strict);
    if let Err(e) = &result {
        debug!(input, error = %e, "subnet rejected");
    }
    result
}

pub fn is_valid_subnet(input: &str) -> bool {
    check_subnet(input).is_ok()
}

pub fn check_ipv6(input: &str) -> Result<Ipv6Addr> {
    address::parse_ipv6(input)
}

pub fn is_valid_ipv6(input: &str) -> bool {
    check_ipv6(input).is_ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
