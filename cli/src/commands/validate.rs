use colored::*;
use dualstack_common::config::Config;
use dualstack_core::{translator, validator};
use tracing::{info, warn};

use crate::terminal::{colors, format, print};

pub fn validate(addresses: &[String], cfg: &Config) -> anyhow::Result<()> {
    print::header("ipv6 address validation", cfg.quiet);

    for input in addresses {
        match validator::check_ipv6(input) {
            Ok(ipv6) => {
                info!("IPv6 Address {input} is valid.");
                if cfg.quiet > 1 {
                    continue;
                }
                print::print_status(format!(
                    "{} {}",
                    format::ipv6_to_type_str(&ipv6).color(colors::ACCENT),
                    ipv6.to_string().color(colors::IPV6_ADDR)
                ));
                if let Some(ipv4) = translator::embedded_ipv4(ipv6) {
                    print::print_status(format!(
                        "embeds IPv4 {}",
                        ipv4.to_string().color(colors::IPV4_ADDR)
                    ));
                }
            }
            Err(e) => warn!("IPv6 Address {input} is not valid: {e}"),
        }
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
