use colored::*;
use dualstack_common::config::Config;
use dualstack_core::exhaustion::{self, ExhaustionConfig, ExhaustionProjection};
use tracing::{info, warn};

use crate::terminal::{colors, format, print};

/// Overrides for the default projection, one per command line flag.
#[derive(Debug, Default)]
pub struct ProjectionArgs {
    pub allocated: Option<f64>,
    pub rate: Option<f64>,
    pub growth: Option<f64>,
    pub start_year: Option<i32>,
}

impl ProjectionArgs {
    fn into_config(self) -> ExhaustionConfig {
        let defaults = ExhaustionConfig::default();
        ExhaustionConfig {
            allocated: self.allocated.unwrap_or(defaults.allocated),
            allocation_rate: self.rate.unwrap_or(defaults.allocation_rate),
            allocation_growth_rate: self.growth.unwrap_or(defaults.allocation_growth_rate),
            start_year: self.start_year.unwrap_or(defaults.start_year),
            ..defaults
        }
    }
}

pub fn predict(args: ProjectionArgs, cfg: &Config) -> anyhow::Result<()> {
    print::header("ipv4 exhaustion prediction", cfg.quiet);

    let config = args.into_config();
    print_parameters(&config, cfg);

    match exhaustion::predict(&config) {
        Ok(projection) => print_projection(&projection, &config, cfg),
        Err(e) => warn!("{e}"),
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}

fn print_parameters(config: &ExhaustionConfig, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print::set_key_width(&["Starting pool", "Allocation rate", "Rate growth"]);
    print::aligned_line("Starting pool", whole(config.starting_pool()));
    print::aligned_line("Allocation rate", whole(config.allocation_rate));
    print::aligned_line(
        "Rate growth",
        format!("{:.2}%", config.allocation_growth_rate * 100.0),
    );
}

fn print_projection(projection: &ExhaustionProjection, config: &ExhaustionConfig, cfg: &Config) {
    if cfg.quiet < 2 {
        let rows: Vec<format::Detail> = projection
            .samples
            .iter()
            .map(|sample| {
                (
                    sample.year.to_string(),
                    whole(sample.remaining).color(colors::IPV4_ADDR),
                )
            })
            .collect();
        if !rows.is_empty() {
            print::print_status("Remaining IPv4 addresses per year");
            print::branches(rows);
        }
    }

    match projection.exhaustion_year {
        Some(year) => info!(
            "Predicted year of IPv4 exhaustion: {}",
            year.to_string().bold().red()
        ),
        None => warn!(
            "The pool outlasts the {}-year horizon of the projection",
            config.horizon_years
        ),
    }
}

fn whole(value: f64) -> String {
    format::group_thousands(value.max(0.0).round() as u64)
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
    use crate::terminal::capture::{lines_of, printed};

    fn from_year(start_year: i32) -> ProjectionArgs {
        ProjectionArgs {
            start_year: Some(start_year),
            ..ProjectionArgs::default()
        }
    }

    #[test]
    fn test_exhaustion_year_at_every_quiet_level() {
        for quiet in 0..=2 {
            let cfg = Config { quiet, ..Config::default() };
            let lines = lines_of(|| predict(from_year(2024), &cfg).unwrap());

            assert!(
                printed(&lines, "Predicted year of IPv4 exhaustion: 2029"),
                "quiet {quiet}: {lines:?}"
            );
            assert_eq!(printed(&lines, "Starting pool"), quiet == 0);
            assert_eq!(printed(&lines, "Remaining IPv4 addresses per year"), quiet < 2);
        }
    }

    #[test]
    fn test_last_representable_start_year_is_reported() {
        let lines = lines_of(|| predict(from_year(i32::MAX), &Config::default()).unwrap());

        assert!(printed(&lines, "cannot start in 2147483647"), "{lines:?}");
        assert!(!printed(&lines, "Predicted year"));
    }
}
