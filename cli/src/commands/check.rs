use dualstack_common::config::Config;
use dualstack_core::validator;
use tracing::{info, warn};

use crate::mprint;
use crate::terminal::{format, print};

pub fn check(subnets: &[String], cfg: &Config) -> anyhow::Result<()> {
    print::header("ipv4 subnet validation", cfg.quiet);

    for (idx, input) in subnets.iter().enumerate() {
        match validator::check_subnet(input) {
            Ok(subnet) => {
                info!("IPv4 Subnet {input} is compatible with IPv6.");
                if cfg.quiet < 2 {
                    print::tree(idx, &subnet.to_string(), format::subnet_to_details(&subnet));
                }
            }
            Err(e) => warn!("IPv4 Subnet {input} is not a valid IPv4 subnet: {e}"),
        }
        if cfg.quiet < 2 && idx + 1 != subnets.len() {
            mprint!();
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
