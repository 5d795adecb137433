//! # Address Translator
//!
//! Builds an IPv6 address from an IPv4 one by prefix embedding:
//!
//! ```text
//!  0      2                  6                                    16
//! +------+------------------+-------------------------------------+
//! | 2002 |  IPv4 (4 bytes)  |            zero (10 bytes)          |
//! +------+------------------+-------------------------------------+
//! ```
//!
//! This is the 6to4 address layout with an all-zero subnet and interface id.
//! The IPv4 bytes sit unmodified at a fixed offset, so the mapping is injective.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use dualstack_common::error::Result;
use dualstack_common::network::address;

/// The fixed 16-bit marker placed in front of the embedded IPv4 address.
pub const PREFIX_MARKER: [u8; 2] = [0x20, 0x02];

/// Translates an IPv4 address into its embedded IPv6 form.
pub fn translate(ipv4: Ipv4Addr) -> Ipv6Addr {
    let mut octets = [0u8; 16];
    octets[..2].copy_from_slice(&PREFIX_MARKER);
    octets[2..6].copy_from_slice(&ipv4.octets());
    Ipv6Addr::from(octets)
}

/// Parses a dotted-quad address and translates it.
pub fn translate_str(input: &str) -> Result<Ipv6Addr> {
    address::parse_ipv4(input).map(translate)
}

/// Recovers the IPv4 address from an IPv6 address built by [`translate`].
///
/// Returns `None` for anything outside that exact layout, including 6to4
/// addresses that carry a subnet or interface id.
pub fn embedded_ipv4(ipv6: Ipv6Addr) -> Option<Ipv4Addr> {
    let octets = ipv6.octets();
    if octets[..2] != PREFIX_MARKER || octets[6..].iter().any(|&b| b != 0) {
        return None;
    }
    Some(Ipv4Addr::new(octets[2], octets[3], octets[4], octets[5]))
}

/// One IPv4 address together with the IPv6 address derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslationResult {
    pub ipv4: Ipv4Addr,
    pub ipv6: Ipv6Addr,
}

impl TranslationResult {
    pub fn from_ipv4(ipv4: Ipv4Addr) -> Self {
        Self {
            ipv4,
            ipv6: translate(ipv4),
        }
    }
}

impl fmt::Display for TranslationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IPv4: {} | IPv6: {}", self.ipv4, self.ipv6)
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
