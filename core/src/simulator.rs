//! # Dual-Stack Simulator
//!
//! Walks a subnet's hosts next to their translated IPv6 addresses, the way a
//! dual-stack network would carry both families over the same topology.
//!
//! The simulator owns the deterministic part: validation, expansion and the
//! paired iteration. Two seams are left to the caller:
//!
//! * a [`CommunicationPolicy`] decides, pair by pair, whether "traffic" flows;
//! * a [`SimulationObserver`] receives every pair and every communication.
//!
//! Randomness lives only in the policy. With [`Always`], [`Never`] or a seeded
//! [`CoinFlip`] a run is fully reproducible.

use dualstack_common::config::CommunicationMode;
use dualstack_common::error::TranslateError;
use dualstack_common::network::subnet::Subnet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::expander;
use crate::translator::TranslationResult;
use crate::validator;

/// Decides whether a host pair communicates.
pub trait CommunicationPolicy {
    fn should_communicate(&mut self, pair: &TranslationResult) -> bool;
}

impl<P: CommunicationPolicy + ?Sized> CommunicationPolicy for Box<P> {
    fn should_communicate(&mut self, pair: &TranslationResult) -> bool {
        (**self).should_communicate(pair)
    }
}

/// A fair coin flip per pair.
pub struct CoinFlip<R: Rng = StdRng> {
    rng: R,
}

impl CoinFlip<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CoinFlip<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CommunicationPolicy for CoinFlip<R> {
    fn should_communicate(&mut self, _pair: &TranslationResult) -> bool {
        self.rng.random_bool(0.5)
    }
}

pub struct Always;

impl CommunicationPolicy for Always {
    fn should_communicate(&mut self, _pair: &TranslationResult) -> bool {
        true
    }
}

pub struct Never;

impl CommunicationPolicy for Never {
    fn should_communicate(&mut self, _pair: &TranslationResult) -> bool {
        false
    }
}

/// Builds the policy selected on the command line.
pub fn policy_for(mode: CommunicationMode, seed: Option<u64>) -> Box<dyn CommunicationPolicy> {
    match (mode, seed) {
        (CommunicationMode::Always, _) => Box::new(Always),
        (CommunicationMode::Never, _) => Box::new(Never),
        (CommunicationMode::Random, Some(seed)) => Box::new(CoinFlip::seeded(seed)),
        (CommunicationMode::Random, None) => Box::new(CoinFlip::from_entropy()),
    }
}

/// Receives the events of a simulation run.
pub trait SimulationObserver {
    /// Called once, before the first pair, when the subnet was accepted.
    fn on_start(&mut self, _subnet: &Subnet, _pairs: usize) {}

    fn on_pair(&mut self, pair: &TranslationResult);

    /// Called right after [`SimulationObserver::on_pair`] when the policy allowed traffic.
    fn on_communication(&mut self, pair: &TranslationResult);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    pub pairs: usize,
    pub communications: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationOutcome {
    Completed(SimulationSummary),
    /// Nothing was enumerated. Carries the reason for the caller to report.
    Rejected(TranslateError),
}

pub struct DualStackSimulator<P: CommunicationPolicy> {
    policy: P,
    max_hosts: Option<u64>,
}

impl<P: CommunicationPolicy> DualStackSimulator<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            max_hosts: None,
        }
    }

    /// Rejects subnets with more usable hosts than `limit`.
    pub fn with_host_limit(mut self, limit: Option<u64>) -> Self {
        self.max_hosts = limit;
        self
    }

    /// Validates `input`, expands it and walks the pairs.
    ///
    /// A subnet the validator rejects produces no translations and no events.
    pub fn run<O>(&mut self, input: &str, observer: &mut O) -> SimulationOutcome
    where
        O: SimulationObserver + ?Sized,
    {
        let subnet = match validator::check_subnet(input) {
            Ok(subnet) => subnet,
            Err(e) => return SimulationOutcome::Rejected(e),
        };
        if let Err(e) = expander::check_limit(&subnet, self.max_hosts) {
            return SimulationOutcome::Rejected(e);
        }

        let mapping = expander::expand_subnet(subnet);
        observer.on_start(&subnet, mapping.len());

        let mut summary = SimulationSummary::default();
        for (host, entry) in subnet.hosts().iter().zip(mapping.iter()) {
            debug_assert_eq!(host, entry.ipv4);
            let pair = TranslationResult {
                ipv4: host,
                ipv6: entry.ipv6,
            };

            observer.on_pair(&pair);
            summary.pairs += 1;

            if self.policy.should_communicate(&pair) {
                observer.on_communication(&pair);
                summary.communications += 1;
            }
        }

        debug!(
            %subnet,
            pairs = summary.pairs,
            communications = summary.communications,
            "simulation finished"
        );
        SimulationOutcome::Completed(summary)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[derive(Default)]
    struct Recorder {
        started: Option<(Subnet, usize)>,
        pairs: Vec<TranslationResult>,
        communications: Vec<TranslationResult>,
    }

    impl SimulationObserver for Recorder {
        fn on_start(&mut self, subnet: &Subnet, pairs: usize) {
            self.started = Some((*subnet, pairs));
        }

        fn on_pair(&mut self, pair: &TranslationResult) {
            self.pairs.push(*pair);
        }

        fn on_communication(&mut self, pair: &TranslationResult) {
            self.communications.push(*pair);
        }
    }

    /// Counts how often it was consulted.
    struct Counting(usize);

    impl CommunicationPolicy for Counting {
        fn should_communicate(&mut self, _pair: &TranslationResult) -> bool {
            self.0 += 1;
            false
        }
    }

    #[test]
    fn test_pairs_follow_expansion() {
        let mut recorder = Recorder::default();
        let outcome = DualStackSimulator::new(Never).run("10.0.0.0/30", &mut recorder);

        assert_eq!(
            outcome,
            SimulationOutcome::Completed(SimulationSummary {
                pairs: 2,
                communications: 0
            })
        );
        let expected = expander::expand("10.0.0.0/30").unwrap();
        assert_eq!(recorder.pairs, expected.entries());
        assert_eq!(recorder.pairs[0].ipv4, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(recorder.started.map(|(_, n)| n), Some(2));
    }

    #[test]
    fn test_always_communicates_every_pair() {
        let mut recorder = Recorder::default();
        let outcome = DualStackSimulator::new(Always).run("192.168.0.0/24", &mut recorder);

        assert_eq!(
            outcome,
            SimulationOutcome::Completed(SimulationSummary {
                pairs: 254,
                communications: 254
            })
        );
        assert_eq!(recorder.pairs, recorder.communications);
    }

    #[test]
    fn test_invalid_subnet_is_a_silent_no_op() {
        let mut recorder = Recorder::default();
        let mut simulator = DualStackSimulator::new(Counting(0));

        for input in ["not-a-subnet", "999.999.999.999/24", "192.168.0.5/24"] {
            let outcome = simulator.run(input, &mut recorder);
            assert!(matches!(outcome, SimulationOutcome::Rejected(_)));
        }

        assert!(recorder.started.is_none());
        assert!(recorder.pairs.is_empty());
        assert!(recorder.communications.is_empty());
        assert_eq!(simulator.policy.0, 0);
    }

    #[test]
    fn test_host_limit_rejects_before_enumeration() {
        let mut recorder = Recorder::default();
        let outcome = DualStackSimulator::new(Always)
            .with_host_limit(Some(100))
            .run("10.0.0.0/16", &mut recorder);

        assert!(matches!(
            outcome,
            SimulationOutcome::Rejected(TranslateError::SubnetTooLarge { .. })
        ));
        assert!(recorder.pairs.is_empty());
    }

    #[test]
    fn test_seeded_coin_flip_is_reproducible() {
        let run = |seed| {
            let mut recorder = Recorder::default();
            DualStackSimulator::new(CoinFlip::seeded(seed)).run("10.0.0.0/26", &mut recorder);
            recorder.communications
        };

        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_coin_flip_communicates_a_subset() {
        let mut recorder = Recorder::default();
        let outcome = DualStackSimulator::new(CoinFlip::seeded(42)).run("10.0.0.0/24", &mut recorder);

        let SimulationOutcome::Completed(summary) = outcome else {
            panic!("expected a completed simulation, got {outcome:?}");
        };
        assert_eq!(summary.pairs, 254);
        assert!(summary.communications > 0 && summary.communications < 254);
        assert!(recorder.communications.iter().all(|c| recorder.pairs.contains(c)));
    }

    #[test]
    fn test_policy_for_modes() {
        let pair = TranslationResult::from_ipv4(Ipv4Addr::new(10, 0, 0, 1));
        assert!(policy_for(CommunicationMode::Always, None).should_communicate(&pair));
        assert!(!policy_for(CommunicationMode::Never, Some(1)).should_communicate(&pair));

        let mut a = policy_for(CommunicationMode::Random, Some(3));
        let mut b = policy_for(CommunicationMode::Random, Some(3));
        let flips_a: Vec<bool> = (0..32).map(|_| a.should_communicate(&pair)).collect();
        let flips_b: Vec<bool> = (0..32).map(|_| b.should_communicate(&pair)).collect();
        assert_eq!(flips_a, flips_b);
    }
}
