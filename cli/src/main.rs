mod commands;
mod terminal;

use commands::predict::ProjectionArgs;
use commands::{CommandLine, Commands, check, predict, simulate, translate, validate};
use dualstack_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        None => simulate::simulate(&commands.subnet, &cfg),
        Some(Commands::Translate { addresses, random }) => {
            translate::translate(&addresses, random, &cfg)
        }
        Some(Commands::Validate { addresses }) => validate::validate(&addresses, &cfg),
        Some(Commands::Check { subnets }) => check::check(&subnets, &cfg),
        Some(Commands::Predict {
            allocated,
            rate,
            growth,
            start_year,
        }) => {
            let args = ProjectionArgs {
                allocated,
                rate,
                growth,
                start_year,
            };
            predict::predict(args, &cfg)
        }
    }
}
