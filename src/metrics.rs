use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scenario::SimulationConfig;
use crate::series::TimeSeriesOutput;

/// Post-run summary derived from a finished time series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub days: usize,

    pub initial_population: f64,
    pub final_population: f64,
    pub peak_population: f64,
    pub population_growth_multiple: f64,

    pub final_unlocked_tokens: f64,
    pub final_locked_tokens: f64,
    /// Locked share of the total token supply on the final day.
    pub locked_share: f64,

    pub artifacts_created: f64,
    pub final_complex_artifacts: f64,
    pub first_artifact_day: Option<usize>,

    pub final_small_units: f64,
    pub final_large_units: f64,
    pub cumulative_small_units: f64,
    pub cumulative_large_units: f64,
}

impl RunSummary {
    pub fn new(series: &TimeSeriesOutput, config: &SimulationConfig) -> Self {
        let days = series.len();
        let last = |v: &Vec<f64>| v.last().copied().unwrap_or(0.0);

        let final_population = last(&series.population);
        let peak_population = series
            .population
            .iter()
            .copied()
            .fold(0.0_f64, f64::max);
        let population_growth_multiple = if config.initial_players > 0.0 {
            final_population / config.initial_players
        } else {
            0.0
        };

        let final_unlocked = last(&series.unlocked_tokens);
        let final_locked = last(&series.locked_tokens);
        let supply = final_unlocked + final_locked;
        let locked_share = if supply > 0.0 {
            final_locked / supply
        } else {
            0.0
        };

        let final_artifacts = last(&series.complex_artifacts);
        let artifacts_created =
            (final_artifacts - config.initial_complex_artifacts).max(0.0);
        let first_artifact_day = series
            .complex_artifacts
            .iter()
            .position(|&count| count > config.initial_complex_artifacts);

        Self {
            generated_at: Utc::now(),
            days,
            initial_population: config.initial_players,
            final_population,
            peak_population,
            population_growth_multiple,
            final_unlocked_tokens: final_unlocked,
            final_locked_tokens: final_locked,
            locked_share,
            artifacts_created,
            final_complex_artifacts: final_artifacts,
            first_artifact_day,
            final_small_units: last(&series.small_units),
            final_large_units: last(&series.large_units),
            cumulative_small_units: last(&series.cumulative_small_units),
            cumulative_large_units: last(&series.cumulative_large_units),
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Run Summary ({} days):", self.days)?;
        writeln!(
            f,
            "  Population: {:.1} → {:.1} ({:.2}x, peak {:.1})",
            self.initial_population,
            self.final_population,
            self.population_growth_multiple,
            self.peak_population
        )?;
        writeln!(
            f,
            "  Token supply: {:.1} unlocked, {:.1} locked ({:.1}% locked)",
            self.final_unlocked_tokens,
            self.final_locked_tokens,
            self.locked_share * 100.0
        )?;
        match self.first_artifact_day {
            Some(day) => writeln!(
                f,
                "  Complex artifacts: {:.0} created (first on day {})",
                self.artifacts_created, day
            )?,
            None => writeln!(
                f,
                "  Complex artifacts: {:.0} created",
                self.artifacts_created
            )?,
        }
        writeln!(
            f,
            "  Inventory: {:.1} small, {:.1} large",
            self.final_small_units, self.final_large_units
        )?;
        writeln!(
            f,
            "  Cumulative inventory-days: {:.1} small, {:.1} large",
            self.cumulative_small_units, self.cumulative_large_units
        )?;
        Ok(())
    }
}
