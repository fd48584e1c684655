use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::process::exit;

use token_model::cli::{self, CliArgs, Command};
use token_model::engine;
use token_model::metrics::RunSummary;
use token_model::scenario::{create_standard_scenarios, Scenario};
use token_model::series::RunRecord;
use token_model::sweep::SweepBatch;

fn main() {
    env_logger::init();

    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error parsing arguments: {}", e);
            eprintln!("Use --help for usage information");
            exit(2);
        }
    };

    match args.command.clone() {
        Command::Run => run_simulation(&args),
        Command::Summary { file } => summarize_record(&file),
        Command::Sweep { config } => run_sweep(&config, args.quiet),
    }
}

fn run_simulation(args: &CliArgs) {
    let mut scenario = match &args.scenario_file {
        Some(path) => match Scenario::load_from_file(path.to_str().unwrap_or_default()) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario file {}: {}", path.display(), e);
                exit(1);
            }
        },
        None => {
            let mut scenarios = create_standard_scenarios();
            match scenarios.remove(&args.scenario_name) {
                Some(scenario) => scenario,
                None => {
                    eprintln!("Unknown scenario: {}", args.scenario_name);
                    eprintln!("Available: default, smoke, dormant, adoption");
                    exit(1);
                }
            }
        }
    };

    cli::apply_overrides(&mut scenario, args);

    if let Err(e) = scenario.validate() {
        eprintln!("Invalid scenario: {}", e);
        exit(1);
    }

    if args.verbose {
        println!("{}", scenario);
    }

    let mut rng = match scenario.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!("starting run: {} ({} days)", scenario.name, scenario.config.days);
    let series = engine::run(&scenario.config, &mut rng);
    let summary = RunSummary::new(&series, &scenario.config);

    if !args.quiet {
        println!("{}", summary);
    }

    if let Some(path) = &args.output_file {
        let record = RunRecord { scenario, series };
        match record.save_to_file(path.to_str().unwrap_or_default()) {
            Ok(()) => {
                if !args.quiet {
                    println!("Run record saved to {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("Failed to save run record: {}", e);
                exit(1);
            }
        }
    }
}

fn summarize_record(path: &Path) {
    let record = match RunRecord::load_from_file(path.to_str().unwrap_or_default()) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Failed to load run record {}: {}", path.display(), e);
            exit(1);
        }
    };

    println!("Scenario: {} ({})", record.scenario.name, record.scenario.description);
    let summary = RunSummary::new(&record.series, &record.scenario.config);
    println!("{}", summary);
}

fn run_sweep(config: &Path, quiet: bool) {
    let batch = match SweepBatch::load_from_file(config) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("Failed to load sweep config {}: {}", config.display(), e);
            exit(1);
        }
    };

    if !quiet {
        println!("Sweep: {} ({})", batch.name, batch.description);
        println!("{} configured runs\n", batch.runs.len());
    }

    let results = batch.run(quiet);
    let failed = results.iter().filter(|r| !r.success).count();

    if !quiet {
        println!("\nResults:");
        for result in &results {
            match (&result.summary, &result.error) {
                (Some(summary), _) => println!(
                    "  {} [{} ms]: population {:.1}, artifacts {:.0}, {:.1}% locked",
                    result.name,
                    result.duration_ms,
                    summary.final_population,
                    summary.final_complex_artifacts,
                    summary.locked_share * 100.0
                ),
                (None, Some(error)) => {
                    println!("  {} [{} ms]: FAILED: {}", result.name, result.duration_ms, error)
                }
                (None, None) => println!("  {}: FAILED", result.name),
            }
        }
        println!("\n{} succeeded, {} failed", results.len() - failed, failed);
    }

    if failed > 0 {
        exit(1);
    }
}
