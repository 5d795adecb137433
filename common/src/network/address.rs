//! # Address Parsing
//!
//! Textual parsing of single IPv4 and IPv6 addresses.
//!
//! IPv4 input must be exactly four dotted decimal octets in `0..=255`.
//! IPv6 input may use the full, compressed or embedded-IPv4 forms and may
//! carry a `%zone` suffix (e.g. `fe80::1%eth0`), which is accepted and dropped.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::{Result, TranslateError};

/// Parses a dotted-quad IPv4 address.
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr> {
    input
        .parse::<Ipv4Addr>()
        .map_err(|e| invalid(input, e.to_string()))
}

/// Parses an IPv6 address, tolerating a non-empty zone identifier.
pub fn parse_ipv6(input: &str) -> Result<Ipv6Addr> {
    let addr_str = match input.split_once('%') {
        None => input,
        Some((_, "")) => return Err(invalid(input, "empty zone identifier".into())),
        Some((_, zone)) if zone.contains('%') => {
            return Err(invalid(input, format!("invalid zone identifier '{zone}'")));
        }
        Some((addr, _)) => addr,
    };

    addr_str
        .parse::<Ipv6Addr>()
        .map_err(|e| invalid(input, e.to_string()))
}

fn invalid(input: &str, reason: String) -> TranslateError {
    TranslateError::InvalidAddress {
        input: input.to_string(),
        reason,
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
