#![cfg(test)]
use crate::utils::RecordingObserver;
use dualstack_common::config::CommunicationMode;
use dualstack_common::error::TranslateError;
use dualstack_core::simulator::{self, DualStackSimulator, SimulationOutcome, SimulationSummary};
use dualstack_core::{expander, readiness, translator, validator};
use std::net::Ipv4Addr;

const DEFAULT_SUBNET: &str = "192.168.0.0/24";

/// The default command line run: readiness report, then a simulation over the same subnet.
#[test]
fn default_subnet_report_and_simulation_agree() {
    let report = readiness::assess(DEFAULT_SUBNET, None).expect("default subnet must expand");
    assert_eq!(report.available, 254);

    let mut observer = RecordingObserver::default();
    let policy = simulator::policy_for(CommunicationMode::Always, None);
    let outcome = DualStackSimulator::new(policy).run(DEFAULT_SUBNET, &mut observer);

    assert_eq!(
        outcome,
        SimulationOutcome::Completed(SimulationSummary {
            pairs: report.available,
            communications: report.available,
        })
    );
    assert_eq!(observer.started.len(), 1);
    assert_eq!(observer.pairs.first().map(|p| p.ipv4), Some(Ipv4Addr::new(192, 168, 0, 1)));
    assert_eq!(observer.pairs.last().map(|p| p.ipv4), Some(Ipv4Addr::new(192, 168, 0, 254)));
}

#[test]
fn simulation_pairs_are_index_aligned_with_hosts() {
    let mapping = expander::expand("10.20.30.0/27").unwrap();
    let hosts: Vec<Ipv4Addr> = mapping.subnet().hosts().iter().collect();

    let mut observer = RecordingObserver::default();
    let outcome = DualStackSimulator::new(simulator::CoinFlip::seeded(5))
        .run("10.20.30.0/27", &mut observer);

    assert!(matches!(outcome, SimulationOutcome::Completed(s) if s.pairs == hosts.len()));
    for (idx, pair) in observer.pairs.iter().enumerate() {
        assert_eq!(pair.ipv4, hosts[idx]);
        assert_eq!(pair.ipv6, translator::translate(hosts[idx]));
    }
}

#[test]
fn invalid_subnets_produce_no_pairs() {
    for input in ["not-a-subnet", "999.999.999.999/24", "10.0.0.0/64"] {
        assert!(!validator::is_valid_subnet(input));
        assert!(expander::expand(input).is_err());

        let mut observer = RecordingObserver::default();
        let outcome = DualStackSimulator::new(simulator::Always).run(input, &mut observer);

        assert!(matches!(outcome, SimulationOutcome::Rejected(_)));
        assert!(observer.started.is_empty());
        assert!(observer.pairs.is_empty());
        assert!(observer.communications.is_empty());
    }
}

/// Reporting is lenient about host bits, simulation is not.
#[test]
fn host_bits_are_reported_but_not_simulated() {
    let report = readiness::assess("192.168.0.5/24", None).unwrap();
    assert_eq!(report.available, 254);
    assert_eq!(report.subnet.to_string(), DEFAULT_SUBNET);

    let mut observer = RecordingObserver::default();
    let outcome = DualStackSimulator::new(simulator::Always).run("192.168.0.5/24", &mut observer);
    assert!(matches!(
        outcome,
        SimulationOutcome::Rejected(TranslateError::HostBitsSet { .. })
    ));
    assert!(observer.pairs.is_empty());
}

#[test]
fn translated_addresses_pass_ipv6_validation() {
    let mapping = expander::expand("172.16.5.0/28").unwrap();
    for ipv6 in mapping.ipv6_addresses() {
        let rendered = ipv6.to_string();
        assert!(validator::is_valid_ipv6(&rendered), "{rendered} failed validation");
        assert!(rendered.starts_with("2002:ac10:"));
    }
}

#[test]
fn expansion_is_idempotent() {
    let first = expander::expand("10.0.0.0/23").unwrap();
    let second = expander::expand("10.0.0.0/23").unwrap();
    assert_eq!(first.entries(), second.entries());
}

#[test]
fn host_limit_guards_report_and_simulation() {
    assert!(matches!(
        readiness::assess("10.0.0.0/8", Some(10_000)),
        Err(TranslateError::SubnetTooLarge { limit: 10_000, .. })
    ));

    let mut observer = RecordingObserver::default();
    let outcome = DualStackSimulator::new(simulator::Never)
        .with_host_limit(Some(10_000))
        .run("10.0.0.0/8", &mut observer);
    assert!(matches!(
        outcome,
        SimulationOutcome::Rejected(TranslateError::SubnetTooLarge { .. })
    ));
}
