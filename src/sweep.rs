//! Parameter-sweep runner for batches of simulation runs.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::engine;
use crate::metrics::RunSummary;
use crate::scenario::Scenario;
use crate::series::RunRecord;

/// Configuration for a batch of sweep runs, loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepBatch {
    pub name: String,
    pub description: String,
    pub parallel: Option<usize>,
    pub runs: Vec<SweepRunConfig>,
}

/// Configuration for a single sweep run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRunConfig {
    pub name: String,
    /// Scenario JSON file; the built-in default scenario when absent.
    pub scenario: Option<PathBuf>,
    #[serde(default)]
    pub overrides: SweepOverrides,
    /// Number of repetitions; each gets a distinct derived seed.
    #[serde(default)]
    pub repeat: usize,
    pub output: Option<PathBuf>,
}

/// Parameter overrides for a sweep run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepOverrides {
    pub days: Option<usize>,
    pub random_seed: Option<u64>,
    pub active_fraction: Option<f64>,
    pub complex_creation_fraction: Option<f64>,
    pub initial_players: Option<f64>,
    pub carrying_capacity: Option<f64>,
    pub growth_rate: Option<f64>,
}

/// Result of one sweep run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    pub name: String,
    pub success: bool,
    pub error: Option<String>,
    pub summary: Option<RunSummary>,
    pub duration_ms: u64,
}

impl SweepBatch {
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read sweep file: {}", e))?;

        serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse YAML: {}", e))
    }

    /// Run all configured runs, sequentially or on a bounded thread pool.
    /// Each run owns its own state and RNG, so parallel runs share nothing.
    pub fn run(&self, quiet: bool) -> Vec<SweepResult> {
        let jobs = expand_repeats(&self.runs);
        let parallel = self.parallel.unwrap_or(1);

        if parallel == 1 {
            return jobs
                .iter()
                .map(|job| run_single(job, quiet))
                .collect();
        }

        let results = Arc::new(Mutex::new(Vec::new()));
        let mut handles = vec![];
        let semaphore = Arc::new(Mutex::new(parallel));

        for job in jobs {
            let results_clone = Arc::clone(&results);
            let sem_clone = Arc::clone(&semaphore);

            let handle = thread::spawn(move || {
                // Wait for an available slot.
                loop {
                    let mut sem = sem_clone.lock().unwrap();
                    if *sem > 0 {
                        *sem -= 1;
                        break;
                    }
                    drop(sem);
                    thread::sleep(std::time::Duration::from_millis(100));
                }

                let result = run_single(&job, quiet);
                results_clone.lock().unwrap().push(result);

                *sem_clone.lock().unwrap() += 1;
            });

            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        Arc::try_unwrap(results).unwrap().into_inner().unwrap()
    }
}

/// Expand `repeat` counts into individual jobs with derived seeds and
/// suffixed names/outputs.
fn expand_repeats(runs: &[SweepRunConfig]) -> Vec<SweepRunConfig> {
    let mut jobs = Vec::new();
    for run in runs {
        let repeat = run.repeat.max(1);
        if repeat == 1 {
            jobs.push(run.clone());
            continue;
        }
        for i in 0..repeat {
            let mut job = run.clone();
            job.name = format!("{}#{}", run.name, i);
            job.overrides.random_seed = run.overrides.random_seed.map(|s| s + i as u64);
            job.output = run.output.as_ref().map(|p| suffix_path(p, i));
            jobs.push(job);
        }
    }
    jobs
}

fn suffix_path(path: &Path, index: usize) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("run");
    let suffixed = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}-{}.{}", stem, index, ext),
        None => format!("{}-{}", stem, index),
    };
    path.with_file_name(suffixed)
}

fn run_single(config: &SweepRunConfig, quiet: bool) -> SweepResult {
    let start = std::time::Instant::now();

    if !quiet {
        println!("Running sweep: {}", config.name);
    }

    match execute(config) {
        Ok(summary) => SweepResult {
            name: config.name.clone(),
            success: true,
            error: None,
            summary: Some(summary),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => SweepResult {
            name: config.name.clone(),
            success: false,
            error: Some(e),
            summary: None,
            duration_ms: start.elapsed().as_millis() as u64,
        },
    }
}

fn execute(config: &SweepRunConfig) -> Result<RunSummary, String> {
    let mut scenario = match &config.scenario {
        Some(path) => Scenario::load_from_file(path.to_str().unwrap_or_default())
            .map_err(|e| format!("Failed to load scenario: {}", e))?,
        None => Scenario::new(config.name.clone()),
    };
    apply_sweep_overrides(&mut scenario, &config.overrides);
    scenario.validate()?;

    let mut rng = match scenario.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let series = engine::run(&scenario.config, &mut rng);
    let summary = RunSummary::new(&series, &scenario.config);
    info!("sweep run {} finished", config.name);

    if let Some(path) = &config.output {
        let record = RunRecord { scenario, series };
        record
            .save_to_file(path.to_str().unwrap_or_default())
            .map_err(|e| format!("Failed to write output: {}", e))?;
    }

    Ok(summary)
}

fn apply_sweep_overrides(scenario: &mut Scenario, overrides: &SweepOverrides) {
    if let Some(days) = overrides.days {
        scenario.config.days = days;
    }
    if let Some(seed) = overrides.random_seed {
        scenario.random_seed = Some(seed);
    }
    if let Some(fraction) = overrides.active_fraction {
        scenario.config.active_fraction = fraction;
    }
    if let Some(fraction) = overrides.complex_creation_fraction {
        scenario.config.complex_creation_fraction = fraction;
    }
    if let Some(players) = overrides.initial_players {
        scenario.config.initial_players = players;
    }
    if let Some(capacity) = overrides.carrying_capacity {
        scenario.config.carrying_capacity = capacity;
    }
    if let Some(rate) = overrides.growth_rate {
        scenario.config.growth_rate = rate;
    }
}
