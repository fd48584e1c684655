use rand::Rng;

use crate::scenario::SimulationConfig;

/// The two size classes of basic reward units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 2] = [SizeClass::Small, SizeClass::Large];

    /// Tokens minted per unit of this class consumed.
    pub fn mint_rate(&self) -> f64 {
        match self {
            SizeClass::Small => 1.0,
            SizeClass::Large => 4.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Large => "large",
        }
    }
}

/// Inventory of uncombined basic units, per size class. Counts are
/// fractional: daily replenishment adds non-integer amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BasicUnits {
    pub small: f64,
    pub large: f64,
}

impl BasicUnits {
    pub fn get(&self, class: SizeClass) -> f64 {
        match class {
            SizeClass::Small => self.small,
            SizeClass::Large => self.large,
        }
    }

    pub fn add(&mut self, class: SizeClass, amount: f64) {
        match class {
            SizeClass::Small => self.small += amount,
            SizeClass::Large => self.large += amount,
        }
    }

    pub fn remove(&mut self, class: SizeClass, amount: f64) {
        match class {
            SizeClass::Small => self.small -= amount,
            SizeClass::Large => self.large -= amount,
        }
    }

    /// Clamp both classes to zero. Transient negatives are allowed between
    /// a removal and this clamp, never across a day boundary.
    pub fn clamp_non_negative(&mut self) {
        self.small = self.small.max(0.0);
        self.large = self.large.max(0.0);
    }

    pub fn total(&self) -> f64 {
        self.small + self.large
    }
}

/// All mutable economic state for one simulation run. Each run owns its
/// own instance, so parallel runs never share state.
#[derive(Debug, Clone)]
pub struct EconomicState {
    pub population: f64,
    pub unlocked_tokens: f64,
    pub locked_tokens: f64,
    pub units: BasicUnits,
    /// Running counter gating large-class combination. Incremented by
    /// minted-token amount rather than unit count, and seeded from the
    /// starting inventory.
    pub total_minted: f64,
    pub complex_artifacts: f64,
}

impl EconomicState {
    pub fn new(config: &SimulationConfig) -> Self {
        let units = BasicUnits {
            small: config.initial_small_units,
            large: config.initial_large_units,
        };
        Self {
            population: config.initial_players,
            unlocked_tokens: config.initial_unlocked_tokens,
            locked_tokens: config.initial_locked_tokens,
            total_minted: units.total(),
            units,
            complex_artifacts: config.initial_complex_artifacts,
        }
    }
}

/// Logistic growth model for the player population. Pure in `t`, so a
/// day's population never depends on earlier stochastic events.
pub fn logistic_growth(t: f64, p0: f64, k: f64, r: f64) -> f64 {
    k / (1.0 + ((k - p0) / p0) * (-r * t).exp())
}

/// Number of basic units combined into one complex artifact: a normal
/// draw floored to an integer, clamped to [1, mean + 3*std_dev].
pub fn units_for_artifact<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    // Box-Muller
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    let drawn = (mean + std_dev * z).floor();
    drawn.clamp(1.0, mean + 3.0 * std_dev)
}
