//! # IPv4 Range Model
//!
//! A continuous, inclusive range of IPv4 addresses. [`crate::network::subnet::Subnet`]
//! hands out its usable hosts as one of these.

use std::net::Ipv4Addr;
use std::ops::RangeInclusive;

/// Represents a continuous range of IPv4 addresses, inclusive.
///
/// A range whose start lies above its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Iterates the range in ascending numeric order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        self.bounds().map(Ipv4Addr::from)
    }

    /// The numeric bounds of the range, suitable for parallel iteration.
    pub fn bounds(&self) -> RangeInclusive<u32> {
        u32::from(self.start_addr)..=u32::from(self.end_addr)
    }

    /// Number of addresses in the range. A full `/0` holds 2^32, so this is a `u64`.
    pub fn len(&self) -> u64 {
        let start = u64::from(u32::from(self.start_addr));
        let end = u64::from(u32::from(self.end_addr));
        if start > end { 0 } else { end - start + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for Ipv4Range {
    type Item = Ipv4Addr;
    type IntoIter = std::iter::Map<RangeInclusive<u32>, fn(u32) -> Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.bounds()
            .map(<Ipv4Addr as From<u32>>::from as fn(u32) -> Ipv4Addr)
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
