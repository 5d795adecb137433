use dualstack_common::config::Config;
use dualstack_core::random;
use dualstack_common::network::address;
use dualstack_core::translator::TranslationResult;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::net::Ipv4Addr;
use tracing::warn;

use crate::mprint;
use crate::terminal::{format, print};

pub fn translate(addresses: &[String], random_count: Option<usize>, cfg: &Config) -> anyhow::Result<()> {
    print::header("ipv4 to ipv6 translation", cfg.quiet);

    let mut inputs: Vec<Ipv4Addr> = Vec::with_capacity(addresses.len());
    for input in addresses {
        match address::parse_ipv4(input) {
            Ok(addr) => inputs.push(addr),
            Err(e) => warn!("{e}"),
        }
    }

    if let Some(count) = random_count {
        let mut rng: StdRng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        inputs.extend(random::random_ipv4s(&mut rng, count));
    }

    if inputs.is_empty() {
        warn!("Nothing to translate, pass addresses or --random <COUNT>");
        return Ok(());
    }

    for (idx, addr) in inputs.iter().enumerate() {
        let result = TranslationResult::from_ipv4(*addr);
        match cfg.quiet {
            2 => print::print(&result.ipv6.to_string()),
            _ => {
                print::tree(idx, &addr.to_string(), format::translation_to_details(&result));
                if idx + 1 != inputs.len() {
                    mprint!();
                }
            }
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
