//! Random IPv4 addresses, drawn uniformly over the whole 32-bit space.

use std::net::Ipv4Addr;

use rand::Rng;

pub fn random_ipv4<R: Rng + ?Sized>(rng: &mut R) -> Ipv4Addr {
    Ipv4Addr::from(rng.random::<u32>())
}

/// Draws `count` addresses.
pub fn random_ipv4s<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Ipv4Addr> {
    (0..count).map(|_| random_ipv4(rng)).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
