//! # Subnet Model
//!
//! Parses and represents an IPv4 network in CIDR form.
//!
//! Accepted inputs:
//! * A bare address (e.g., `10.0.0.1`), read as a `/32`.
//! * A prefix length (e.g., `192.168.0.0/24`).
//! * A netmask (e.g., `192.168.0.0/255.255.255.0`).
//! * A hostmask (e.g., `192.168.0.0/0.0.0.255`).
//!
//! Parsing comes in two flavours, see [`ParseMode`]. The expander reads
//! subnets leniently while validation is strict, so `192.168.0.5/24` expands
//! to the hosts of `192.168.0.0/24` yet does not pass validation.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::{Result, TranslateError};
use crate::network::range::Ipv4Range;

const IPV4_BITS: u8 = 32;

/// How to treat an address with bits set below the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Reject with [`TranslateError::HostBitsSet`].
    Strict,
    /// Clear the host bits and keep going.
    Lenient,
}

/// An IPv4 network whose address is always the network address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    network: Ipv4Network,
}

impl Subnet {
    pub fn new(addr: Ipv4Addr, prefix: u8, mode: ParseMode) -> Result<Self> {
        let display = format!("{addr}/{prefix}");
        let raw = Ipv4Network::new(addr, prefix).map_err(|e| invalid(&display, e.to_string()))?;

        if mode == ParseMode::Strict && raw.network() != addr {
            return Err(TranslateError::HostBitsSet { input: display });
        }

        let network = Ipv4Network::new(raw.network(), prefix)
            .map_err(|e| invalid(&display, e.to_string()))?;

        Ok(Self { network })
    }

    /// Parses `address[/prefix|/netmask|/hostmask]`.
    pub fn parse(input: &str, mode: ParseMode) -> Result<Self> {
        let (addr_str, mask_str) = match input.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (input, None),
        };

        let addr = addr_str
            .parse::<Ipv4Addr>()
            .map_err(|e| invalid(input, format!("invalid address '{addr_str}': {e}")))?;

        let prefix = match mask_str {
            Some(mask) => parse_mask(mask).map_err(|reason| invalid(input, reason))?,
            None => IPV4_BITS,
        };

        Self::new(addr, prefix, mode).map_err(|e| match e {
            TranslateError::HostBitsSet { .. } => TranslateError::HostBitsSet {
                input: input.to_string(),
            },
            other => other,
        })
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    pub fn netmask(&self) -> Ipv4Addr {
        self.network.mask()
    }

    /// The usable host addresses, ascending.
    ///
    /// * `/0` to `/30`: everything between the network and broadcast address.
    /// * `/31`: both addresses (RFC 3021 point-to-point link).
    /// * `/32`: the single address.
    pub fn hosts(&self) -> Ipv4Range {
        let network = self.network();
        let broadcast = self.broadcast();
        match self.prefix() {
            31 | 32 => Ipv4Range::new(network, broadcast),
            _ => {
                let start = Ipv4Addr::from(u32::from(network) + 1);
                let end = Ipv4Addr::from(u32::from(broadcast) - 1);
                Ipv4Range::new(start, end)
            }
        }
    }

    /// Number of usable hosts, computed without enumerating them.
    pub fn host_count(&self) -> u64 {
        self.hosts().len()
    }

    /// Total number of addresses in the block, network and broadcast included.
    pub fn size(&self) -> u64 {
        1u64 << (IPV4_BITS - self.prefix())
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix())
    }
}

impl FromStr for Subnet {
    type Err = TranslateError;

    /// Strict parsing, the same rules validation applies.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, ParseMode::Strict)
    }
}

/// Parses the part after the slash: a decimal prefix length, a netmask or a hostmask.
fn parse_mask(mask: &str) -> std::result::Result<u8, String> {
    if !mask.is_empty() && mask.bytes().all(|b| b.is_ascii_digit()) {
        return match mask.parse::<u32>() {
            Ok(prefix) if prefix <= u32::from(IPV4_BITS) => Ok(prefix as u8),
            _ => Err(format!("invalid prefix length '{mask}'")),
        };
    }

    let bits = mask
        .parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| format!("invalid prefix length or mask '{mask}'"))?;

    contiguous_prefix(bits)
        .or_else(|| contiguous_prefix(!bits))
        .ok_or_else(|| format!("'{mask}' is neither a netmask nor a hostmask"))
}

/// Prefix length of a netmask made of leading ones followed only by zeros.
fn contiguous_prefix(bits: u32) -> Option<u8> {
    let ones = bits.leading_ones();
    (ones + bits.trailing_zeros() == u32::from(IPV4_BITS)).then_some(ones as u8)
}

fn invalid(input: &str, reason: String) -> TranslateError {
    TranslateError::InvalidSubnet {
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
