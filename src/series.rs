use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;

/// Per-day output of one simulation run: one column per tracked quantity,
/// each of length `days`, written exactly once per index and read-only
/// after the run completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesOutput {
    pub population: Vec<f64>,
    pub unlocked_tokens: Vec<f64>,
    pub locked_tokens: Vec<f64>,
    pub small_units: Vec<f64>,
    pub large_units: Vec<f64>,
    /// Running sum of the small-unit inventory level, not of units created.
    pub cumulative_small_units: Vec<f64>,
    pub cumulative_large_units: Vec<f64>,
    pub complex_artifacts: Vec<f64>,
}

impl TimeSeriesOutput {
    pub fn with_days(days: usize) -> Self {
        Self {
            population: Vec::with_capacity(days),
            unlocked_tokens: Vec::with_capacity(days),
            locked_tokens: Vec::with_capacity(days),
            small_units: Vec::with_capacity(days),
            large_units: Vec::with_capacity(days),
            cumulative_small_units: Vec::with_capacity(days),
            cumulative_large_units: Vec::with_capacity(days),
            complex_artifacts: Vec::with_capacity(days),
        }
    }

    /// Number of recorded days.
    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }
}

/// A finished run bundled with the scenario that produced it, so saved
/// results are self-describing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub scenario: Scenario,
    pub series: TimeSeriesOutput,
}

impl RunRecord {
    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let record: Self = serde_json::from_str(&json)?;
        Ok(record)
    }
}
