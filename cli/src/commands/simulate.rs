use colored::*;
use dualstack_common::config::Config;
use dualstack_common::network::subnet::Subnet;
use dualstack_core::readiness::{self, ReadinessReport};
use dualstack_core::simulator::{
    self, DualStackSimulator, SimulationObserver, SimulationOutcome, SimulationSummary,
};
use dualstack_core::translator::TranslationResult;
use tracing::{info, warn};

use crate::terminal::{colors, format, print};

/// The default run: readiness report first, then the dual-stack simulation.
pub fn simulate(subnet: &str, cfg: &Config) -> anyhow::Result<()> {
    readiness_report(subnet, cfg);
    dual_stack_simulation(subnet, cfg);
    print::end_of_program(cfg.quiet);
    Ok(())
}

fn readiness_report(subnet: &str, cfg: &Config) {
    print::header("ipv6 readiness report", cfg.quiet);

    match readiness::assess(subnet, cfg.max_hosts) {
        Ok(report) => print_report(&report),
        Err(e) => warn!("Cannot report on {subnet}: {e}"),
    }
}

fn print_report(report: &ReadinessReport) {
    print::set_key_width(&["IPv6 addresses", "Recommended action"]);
    print::aligned_line("Subnet", report.subnet.to_string().color(colors::IPV4_ADDR));
    print::aligned_line(
        "IPv6 addresses",
        format::group_thousands(report.available as u64).green().bold(),
    );
    print::aligned_line("Recommended action", report.recommendation);
}

fn dual_stack_simulation(subnet: &str, cfg: &Config) {
    print::header("dual-stack simulation", cfg.quiet);

    let policy = simulator::policy_for(cfg.mode, cfg.seed);
    let mut simulator = DualStackSimulator::new(policy).with_host_limit(cfg.max_hosts);
    let mut observer = TerminalObserver { quiet: cfg.quiet };

    match simulator.run(subnet, &mut observer) {
        SimulationOutcome::Completed(summary) => simulation_ends(summary, cfg),
        SimulationOutcome::Rejected(e) => {
            warn!("IPv4 Subnet {subnet} is not a valid IPv4 subnet: {e}");
        }
    }
}

fn simulation_ends(summary: SimulationSummary, cfg: &Config) {
    let pairs: ColoredString = format!("{} host pairs", summary.pairs).bold().green();
    let comms: ColoredString = format!("{} communications", summary.communications)
        .bold()
        .yellow();
    let output: &ColoredString =
        &format!("Simulation Complete: {pairs} with {comms}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
        }
        _ => info!("{}", output),
    }
}

/// Prints simulation events as they happen.
struct TerminalObserver {
    quiet: u8,
}

impl SimulationObserver for TerminalObserver {
    fn on_start(&mut self, subnet: &Subnet, pairs: usize) {
        info!("IPv4 Subnet {subnet} is compatible with IPv6.");
        if self.quiet < 2 {
            print::print_status(format!(
                "Simulating dual-stack operation for IPv4 subnet {} ({} hosts)",
                subnet.to_string().color(colors::IPV4_ADDR),
                pairs
            ));
        }
    }

    fn on_pair(&mut self, pair: &TranslationResult) {
        if self.quiet >= 2 {
            return;
        }
        print::print(&format!(
            "{} {} {} {}",
            "IPv4:".color(colors::SEPARATOR),
            pair.ipv4.to_string().color(colors::IPV4_ADDR),
            "| IPv6:".color(colors::SEPARATOR),
            pair.ipv6.to_string().color(colors::IPV6_ADDR)
        ));
    }

    fn on_communication(&mut self, pair: &TranslationResult) {
        if self.quiet >= 2 {
            return;
        }
        print::print(&format!(
            "  {} Simulating communication from IPv4: {} to IPv6: {}",
            "↳".color(colors::ACCENT),
            pair.ipv4,
            pair.ipv6
        ));
        print::print(&format!("    {}", "Communication successful.".green()));
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
