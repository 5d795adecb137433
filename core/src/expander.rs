//! # Subnet Expander
//!
//! Turns a subnet into the ordered list of its hosts' translations.
//!
//! Input is parsed **leniently**: host bits set in the address are cleared,
//! so `192.168.0.5/24` expands exactly like `192.168.0.0/24`.
//!
//! Expansion costs one translation per usable host, i.e. `2^(32 - prefix)`.
//! Nothing here caps that. Callers that take untrusted input should go
//! through [`expand_bounded`].

use std::net::{Ipv4Addr, Ipv6Addr};

use dualstack_common::error::{Result, TranslateError};
use dualstack_common::network::subnet::{ParseMode, Subnet};
use rayon::prelude::*;
use tracing::debug;

use crate::translator::TranslationResult;

/// The translations of every usable host in a subnet, in ascending host order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetMapping {
    subnet: Subnet,
    entries: Vec<TranslationResult>,
}

impl SubnetMapping {
    pub fn subnet(&self) -> &Subnet {
        &self.subnet
    }

    pub fn entries(&self) -> &[TranslationResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranslationResult> {
        self.entries.iter()
    }

    pub fn ipv4_addresses(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.entries.iter().map(|entry| entry.ipv4)
    }

    pub fn ipv6_addresses(&self) -> impl Iterator<Item = Ipv6Addr> + '_ {
        self.entries.iter().map(|entry| entry.ipv6)
    }
}

impl IntoIterator for SubnetMapping {
    type Item = TranslationResult;
    type IntoIter = std::vec::IntoIter<TranslationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a SubnetMapping {
    type Item = &'a TranslationResult;
    type IntoIter = std::slice::Iter<'a, TranslationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parses `input` leniently and expands it.
pub fn expand(input: &str) -> Result<SubnetMapping> {
    let subnet = Subnet::parse(input, ParseMode::Lenient)?;
    Ok(expand_subnet(subnet))
}

/// Like [`expand`], but refuses subnets with more than `limit` usable hosts.
///
/// The check runs on the computed host count, before anything is allocated.
/// A `None` limit behaves exactly like [`expand`].
pub fn expand_bounded(input: &str, limit: Option<u64>) -> Result<SubnetMapping> {
    let subnet = Subnet::parse(input, ParseMode::Lenient)?;
    check_limit(&subnet, limit)?;
    Ok(expand_subnet(subnet))
}

/// Fails with [`TranslateError::SubnetTooLarge`] when `subnet` exceeds `limit`.
pub fn check_limit(subnet: &Subnet, limit: Option<u64>) -> Result<()> {
    match limit {
        Some(limit) if subnet.host_count() > limit => Err(TranslateError::SubnetTooLarge {
            subnet: subnet.to_string(),
            hosts: subnet.host_count(),
            limit,
        }),
        _ => Ok(()),
    }
}

/// Translates every usable host of an already parsed subnet.
///
/// Hosts are translated on the rayon pool. Collecting into a `Vec` keeps the
/// ascending order of the range even though the range itself is unindexed.
pub fn expand_subnet(subnet: Subnet) -> SubnetMapping {
    let hosts = subnet.hosts();
    debug!(%subnet, hosts = hosts.len(), "expanding subnet");

    let entries: Vec<TranslationResult> = hosts
        .bounds()
        .into_par_iter()
        .map(|raw| TranslationResult::from_ipv4(Ipv4Addr::from(raw)))
        .collect();

    SubnetMapping { subnet, entries }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::translate;

    #[test]
    fn test_expand_slash24() {
        let mapping = expand("192.168.0.0/24").unwrap();

        assert_eq!(mapping.len(), 254);
        assert_eq!(mapping.entries()[0].ipv4, Ipv4Addr::new(192, 168, 0, 1));
        assert_eq!(mapping.entries()[253].ipv4, Ipv4Addr::new(192, 168, 0, 254));
        assert_eq!(mapping.entries()[0].ipv6.to_string(), "2002:c0a8:1::");
        assert_eq!(mapping.entries()[253].ipv6.to_string(), "2002:c0a8:fe::");
    }

    #[test]
    fn test_expand_is_strictly_ascending() {
        let mapping = expand("172.16.0.0/22").unwrap();
        let raw: Vec<u32> = mapping.ipv4_addresses().map(u32::from).collect();
        assert!(raw.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(raw.len(), 1022);
    }

    #[test]
    fn test_expand_slash30() {
        let mapping = expand("10.0.0.0/30").unwrap();
        assert_eq!(
            mapping.ipv4_addresses().collect::<Vec<_>>(),
            vec![Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)]
        );
    }

    #[test]
    fn test_expand_slash31_and_slash32() {
        assert_eq!(expand("10.0.0.0/31").unwrap().len(), 2);

        let single = expand("10.0.0.9/32").unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.entries()[0].ipv4, Ipv4Addr::new(10, 0, 0, 9));
    }

    #[test]
    fn test_expand_entries_match_translator() {
        let mapping = expand("10.1.2.0/28").unwrap();
        for entry in &mapping {
            assert_eq!(entry.ipv6, translate(entry.ipv4));
        }
    }

    #[test]
    fn test_expand_tolerates_host_bits() {
        let lenient = expand("192.168.0.5/24").unwrap();
        let canonical = expand("192.168.0.0/24").unwrap();
        assert_eq!(lenient, canonical);
        assert_eq!(lenient.subnet().to_string(), "192.168.0.0/24");
    }

    #[test]
    fn test_expand_is_idempotent() {
        assert_eq!(expand("10.9.8.0/26").unwrap(), expand("10.9.8.0/26").unwrap());
    }

    #[test]
    fn test_expand_invalid_subnet() {
        assert!(matches!(
            expand("not-a-subnet"),
            Err(TranslateError::InvalidSubnet { .. })
        ));
        assert!(matches!(
            expand("10.0.0.0/40"),
            Err(TranslateError::InvalidSubnet { .. })
        ));
    }

    #[test]
    fn test_expand_bounded() {
        assert_eq!(expand_bounded("10.0.0.0/24", Some(254)).unwrap().len(), 254);
        assert_eq!(expand_bounded("10.0.0.0/24", None).unwrap().len(), 254);

        assert_eq!(
            expand_bounded("10.0.0.0/8", Some(65_536)),
            Err(TranslateError::SubnetTooLarge {
                subnet: "10.0.0.0/8".to_string(),
                hosts: (1 << 24) - 2,
                limit: 65_536,
            })
        );
    }

    #[test]
    fn test_into_iter_owned() {
        let mapping = expand("10.0.0.0/30").unwrap();
        let pairs: Vec<TranslationResult> = mapping.into_iter().collect();
        assert_eq!(pairs.len(), 2);
    }
}
