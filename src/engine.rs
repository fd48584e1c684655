//! The single-pass daily simulation loop.
//!
//! Each day advances population, unit inventories, and token balances in a
//! fixed order. Anomalies (transiently negative inventories or balances)
//! are clamped to zero rather than rejected: the engine never fails
//! mid-run. Configuration problems are caught by `Scenario::validate`
//! before a run starts.

use log::{debug, info};
use rand::Rng;

use crate::core::{logistic_growth, units_for_artifact, EconomicState, SizeClass};
use crate::scenario::SimulationConfig;
use crate::series::TimeSeriesOutput;

/// Mean units combined into one complex artifact.
pub const UNITS_PER_ARTIFACT_MEAN: f64 = 32.0;
pub const UNITS_PER_ARTIFACT_STD_DEV: f64 = 10.0;

/// Total minted-token volume after which large-class combination unlocks.
pub const LARGE_COMBINATION_THRESHOLD: f64 = 1000.0;

/// Daily replenishment: base amount plus linear growth in the day index.
const SMALL_REPLENISH_BASE: f64 = 1.0;
const SMALL_REPLENISH_GROWTH: f64 = 0.05;
const LARGE_REPLENISH_BASE: f64 = 0.5;
const LARGE_REPLENISH_GROWTH: f64 = 0.025;

/// Run the simulation for `config.days` steps, recording one row per day.
///
/// The random source is an explicit parameter so runs are reproducible
/// under a fixed seed and parallel runs share no mutable state. A zero-day
/// config yields empty series without error.
pub fn run<R: Rng>(config: &SimulationConfig, rng: &mut R) -> TimeSeriesOutput {
    let mut state = EconomicState::new(config);
    let mut out = TimeSeriesOutput::with_days(config.days);

    for day in 0..config.days {
        step(config, &mut state, &mut out, day, rng);

        if day % 100 == 0 {
            debug!(
                "day {}: population {:.1}, unlocked {:.1}, locked {:.1}, artifacts {}",
                day, state.population, state.unlocked_tokens, state.locked_tokens,
                state.complex_artifacts
            );
        }
    }

    info!(
        "simulated {} days: final population {:.1}, {} artifacts",
        config.days, state.population, state.complex_artifacts
    );
    out
}

/// Advance one day. Step order is normative; reordering changes results.
fn step<R: Rng>(
    config: &SimulationConfig,
    state: &mut EconomicState,
    out: &mut TimeSeriesOutput,
    day: usize,
    rng: &mut R,
) {
    let t = day as f64;

    // 1. Population is a pure function of elapsed days, not incremental.
    state.population = logistic_growth(
        t,
        config.initial_players,
        config.carrying_capacity,
        config.growth_rate,
    );
    out.population.push(state.population);

    // 2. Running sum of each inventory level, taken before today's
    // consumption and replenishment.
    let prev_small = out.cumulative_small_units.last().copied().unwrap_or(0.0);
    let prev_large = out.cumulative_large_units.last().copied().unwrap_or(0.0);
    out.cumulative_small_units
        .push(prev_small + state.units.get(SizeClass::Small));
    out.cumulative_large_units
        .push(prev_large + state.units.get(SizeClass::Large));

    // 3-4. Each active player consumes one randomly sized unit and mints
    // its token value into the locked pool. The clamp runs inside the
    // loop, so a class can be drained past zero and reset within the same
    // day; minting is not bounded by inventory. Intentionally leaky.
    let active_players = (state.population * config.active_fraction).floor() as u64;
    for _ in 0..active_players {
        let class = if rng.random_bool(0.5) {
            SizeClass::Small
        } else {
            SizeClass::Large
        };
        let minted = class.mint_rate();
        state.units.remove(class, minted);
        state.locked_tokens += minted;
        state.total_minted += minted;
        state.units.clamp_non_negative();
    }

    // 5. Replenishment grows linearly with the day index.
    state
        .units
        .add(SizeClass::Small, SMALL_REPLENISH_BASE + t * SMALL_REPLENISH_GROWTH);
    state
        .units
        .add(SizeClass::Large, LARGE_REPLENISH_BASE + t * LARGE_REPLENISH_GROWTH);

    // 6. Artifact creation converts locked token back to unlocked. The
    // max allowed class is fixed once per day.
    let creators = (state.population * config.complex_creation_fraction).floor() as u64;
    let max_class = if state.total_minted >= LARGE_COMBINATION_THRESHOLD {
        SizeClass::Large
    } else {
        SizeClass::Small
    };
    for _ in 0..creators {
        let units_needed =
            units_for_artifact(rng, UNITS_PER_ARTIFACT_MEAN, UNITS_PER_ARTIFACT_STD_DEV);
        let class = if max_class == SizeClass::Large
            && state.units.get(SizeClass::Large) >= units_needed
        {
            SizeClass::Large
        } else {
            SizeClass::Small
        };

        if state.units.get(class) >= units_needed {
            state.units.remove(class, units_needed);
            let converted = class.mint_rate() * units_needed;
            state.unlocked_tokens += converted;
            state.locked_tokens -= converted;
            state.complex_artifacts += 1.0;
        }
        // Insufficient inventory: the attempt simply fizzles, no retry.
    }

    // 7. Post-hoc clamp; the model never reports a negative balance.
    state.unlocked_tokens = state.unlocked_tokens.max(0.0);
    state.locked_tokens = state.locked_tokens.max(0.0);
    state.complex_artifacts = state.complex_artifacts.max(0.0);

    // 8. Record the day.
    out.unlocked_tokens.push(state.unlocked_tokens);
    out.locked_tokens.push(state.locked_tokens);
    out.small_units.push(state.units.get(SizeClass::Small));
    out.large_units.push(state.units.get(SizeClass::Large));
    out.complex_artifacts.push(state.complex_artifacts);
}
