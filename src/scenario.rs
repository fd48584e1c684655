use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub config: SimulationConfig,
    pub random_seed: Option<u64>,
}

/// All numeric parameters of a run. Immutable once a run starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub days: usize,
    pub initial_players: f64,
    pub carrying_capacity: f64,
    pub growth_rate: f64,
    /// Fraction of the population consuming units on a given day.
    pub active_fraction: f64,
    pub initial_unlocked_tokens: f64,
    pub initial_locked_tokens: f64,
    pub initial_small_units: f64,
    pub initial_large_units: f64,
    pub initial_complex_artifacts: f64,
    /// Fraction of the population attempting an artifact combination per day.
    pub complex_creation_fraction: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 365 * 2,
            initial_players: 100.0,
            carrying_capacity: 1_000_000.0,
            growth_rate: 0.01,
            active_fraction: 0.1,
            initial_unlocked_tokens: 10_000.0,
            initial_locked_tokens: 5_000.0,
            initial_small_units: 100.0,
            initial_large_units: 50.0,
            initial_complex_artifacts: 0.0,
            complex_creation_fraction: 0.005,
        }
    }
}

impl Scenario {
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: String::new(),
            config: SimulationConfig::default(),
            random_seed: None,
        }
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let scenario: Self = serde_json::from_str(&json)?;
        Ok(scenario)
    }

    /// Pre-run configuration gate. The engine itself never validates;
    /// callers reject bad configuration here before starting a run.
    pub fn validate(&self) -> Result<(), String> {
        let c = &self.config;

        if c.days == 0 {
            return Err("Scenario must simulate at least one day".to_string());
        }
        if c.initial_players <= 0.0 {
            return Err(format!(
                "Initial players must be positive, got {}",
                c.initial_players
            ));
        }
        if c.carrying_capacity <= c.initial_players {
            return Err(format!(
                "Carrying capacity ({}) must exceed initial players ({})",
                c.carrying_capacity, c.initial_players
            ));
        }
        if c.growth_rate <= 0.0 {
            return Err(format!(
                "Growth rate must be positive, got {}",
                c.growth_rate
            ));
        }
        if c.active_fraction < 0.0 {
            return Err(format!(
                "Active fraction must be non-negative, got {}",
                c.active_fraction
            ));
        }
        if c.complex_creation_fraction < 0.0 {
            return Err(format!(
                "Complex-creation fraction must be non-negative, got {}",
                c.complex_creation_fraction
            ));
        }

        let amounts = [
            ("initial unlocked tokens", c.initial_unlocked_tokens),
            ("initial locked tokens", c.initial_locked_tokens),
            ("initial small units", c.initial_small_units),
            ("initial large units", c.initial_large_units),
            ("initial complex artifacts", c.initial_complex_artifacts),
        ];
        for (name, amount) in amounts {
            if amount < 0.0 {
                return Err(format!("{} must be non-negative, got {}", name, amount));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scenario: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "\nParameters:")?;
        writeln!(f, "  Days to simulate: {}", self.config.days)?;
        writeln!(
            f,
            "  Population: {} initial, {} capacity, {} growth rate",
            self.config.initial_players, self.config.carrying_capacity, self.config.growth_rate
        )?;
        writeln!(
            f,
            "  Active players: {}%",
            self.config.active_fraction * 100.0
        )?;
        writeln!(
            f,
            "  Artifact creators: {}%",
            self.config.complex_creation_fraction * 100.0
        )?;
        writeln!(
            f,
            "  Token supply: {} unlocked, {} locked",
            self.config.initial_unlocked_tokens, self.config.initial_locked_tokens
        )?;
        writeln!(
            f,
            "  Basic units: {} small, {} large",
            self.config.initial_small_units, self.config.initial_large_units
        )?;
        writeln!(
            f,
            "  Complex artifacts: {}",
            self.config.initial_complex_artifacts
        )?;
        if let Some(seed) = self.random_seed {
            writeln!(f, "  Random seed: {}", seed)?;
        }
        Ok(())
    }
}

pub fn create_standard_scenarios() -> HashMap<String, Scenario> {
    let mut scenarios = HashMap::new();

    let mut default = Scenario::new("two_year_default".to_string());
    default.description = "Two-year run with the reference parameters".to_string();
    scenarios.insert("default".to_string(), default);

    let mut smoke = Scenario::new("smoke".to_string());
    smoke.description = "Short run for quick inspection".to_string();
    smoke.config.days = 30;
    smoke.config.carrying_capacity = 10_000.0;
    scenarios.insert("smoke".to_string(), smoke);

    // No minting, no combination: supplies stay constant and inventories
    // follow the replenishment formula exactly.
    let mut dormant = Scenario::new("dormant".to_string());
    dormant.description = "No player activity; deterministic replenishment only".to_string();
    dormant.config.active_fraction = 0.0;
    dormant.config.complex_creation_fraction = 0.0;
    scenarios.insert("dormant".to_string(), dormant);

    let mut adoption = Scenario::new("high_adoption".to_string());
    adoption.description = "Fast growth with heavy daily participation".to_string();
    adoption.config.growth_rate = 0.03;
    adoption.config.active_fraction = 0.25;
    adoption.config.complex_creation_fraction = 0.02;
    scenarios.insert("adoption".to_string(), adoption);

    scenarios
}
