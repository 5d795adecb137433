//! # IPv4 Exhaustion Projection
//!
//! A compounding-rate projection of the remaining IPv4 pool: every year the
//! allocation rate is subtracted from the pool and then grows by a fixed
//! percentage. The projection stops in the first year the pool reaches zero.
//!
//! The figures in [`ExhaustionConfig::default`] are illustrative, not measured.

use chrono::Datelike;
use dualstack_common::error::{Result, TranslateError};
use tracing::debug;

/// Parameters of an exhaustion projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExhaustionConfig {
    /// Size of the whole address space.
    pub total_addresses: f64,
    /// Addresses already handed out when the projection starts.
    pub allocated: f64,
    /// Addresses allocated during the first projected year.
    pub allocation_rate: f64,
    /// Yearly growth of the allocation rate, `0.05` meaning 5%.
    pub allocation_growth_rate: f64,
    pub start_year: i32,
    /// Gives up after this many years without exhaustion.
    pub horizon_years: u32,
}

impl Default for ExhaustionConfig {
    fn default() -> Self {
        Self {
            total_addresses: 2f64.powi(32),
            allocated: 3_700_000_000.0,
            allocation_rate: 130_000_000.0,
            allocation_growth_rate: 0.05,
            start_year: chrono::Local::now().year(),
            horizon_years: 1_000,
        }
    }
}

impl ExhaustionConfig {
    pub fn starting_pool(&self) -> f64 {
        self.total_addresses - self.allocated
    }

    fn validate(&self) -> Result<()> {
        let finite = [
            self.total_addresses,
            self.allocated,
            self.allocation_rate,
            self.allocation_growth_rate,
        ]
        .iter()
        .all(|value| value.is_finite());

        if !finite {
            return Err(TranslateError::InvalidProjection(
                "all figures must be finite".into(),
            ));
        }
        if self.allocated < 0.0 || self.allocated > self.total_addresses {
            return Err(TranslateError::InvalidProjection(format!(
                "allocated addresses ({}) must lie between 0 and the total ({})",
                self.allocated, self.total_addresses
            )));
        }
        if self.allocation_rate <= 0.0 {
            return Err(TranslateError::InvalidProjection(
                "allocation rate must be positive".into(),
            ));
        }
        if self.allocation_growth_rate < 0.0 {
            return Err(TranslateError::InvalidProjection(
                "allocation growth rate must not be negative".into(),
            ));
        }
        if i32::try_from(self.horizon_years)
            .ok()
            .and_then(|years| self.start_year.checked_add(years))
            .is_none()
        {
            return Err(TranslateError::InvalidProjection(format!(
                "a {}-year projection cannot start in {}",
                self.horizon_years, self.start_year
            )));
        }
        Ok(())
    }
}

/// Remaining pool at the end of one projected year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearSample {
    pub year: i32,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExhaustionProjection {
    /// The first year whose allocations drain the pool. `None` when the
    /// horizon was reached first.
    pub exhaustion_year: Option<i32>,
    /// One sample per year that ended with addresses left, ascending.
    pub samples: Vec<YearSample>,
}

/// Runs the projection described by `config`.
pub fn predict(config: &ExhaustionConfig) -> Result<ExhaustionProjection> {
    config.validate()?;

    let mut remaining = config.starting_pool();
    let mut rate = config.allocation_rate;
    let mut year = config.start_year;
    let mut samples = Vec::new();

    if remaining <= 0.0 {
        return Ok(ExhaustionProjection {
            exhaustion_year: Some(year),
            samples,
        });
    }

    for _ in 0..config.horizon_years {
        remaining -= rate;
        rate *= 1.0 + config.allocation_growth_rate;
        year += 1;

        if remaining <= 0.0 {
            debug!(year, "projected IPv4 exhaustion");
            return Ok(ExhaustionProjection {
                exhaustion_year: Some(year),
                samples,
            });
        }
        samples.push(YearSample { year, remaining });
    }

    Ok(ExhaustionProjection {
        exhaustion_year: None,
        samples,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
