//! Command-line interface for the token model simulation.

use crate::scenario::Scenario;
use lexopt::prelude::*;
use std::path::PathBuf;

/// Command-line arguments for the simulation.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
    pub scenario_name: String,
    pub scenario_file: Option<PathBuf>,
    pub days: Option<usize>,
    pub random_seed: Option<u64>,
    pub active_fraction: Option<f64>,
    pub creation_fraction: Option<f64>,
    pub initial_players: Option<f64>,
    pub carrying_capacity: Option<f64>,
    pub growth_rate: Option<f64>,
    pub output_file: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub enum Command {
    Run,
    Summary { file: PathBuf },
    Sweep { config: PathBuf },
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            command: Command::Run,
            scenario_name: "default".to_string(),
            scenario_file: None,
            days: None,
            random_seed: None,
            active_fraction: None,
            creation_fraction: None,
            initial_players: None,
            carrying_capacity: None,
            growth_rate: None,
            output_file: None,
            verbose: false,
            quiet: false,
        }
    }
}

pub fn parse_args() -> Result<CliArgs, lexopt::Error> {
    let mut args = lexopt::Parser::from_env();
    let mut cli_args = CliArgs::default();
    let mut subcommand = None;
    let mut summary_file = None;
    let mut sweep_config = None;

    while let Some(arg) = args.next()? {
        match arg {
            Value(val) => {
                let val_str = val.string()?;
                if subcommand.is_none() {
                    subcommand = Some(val_str);
                } else {
                    match subcommand.as_deref() {
                        Some("summary") => summary_file = Some(PathBuf::from(val_str)),
                        Some("sweep") => sweep_config = Some(PathBuf::from(val_str)),
                        _ => {}
                    }
                }
            }
            Long("scenario") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.scenario_name = val.string()?;
                }
            }
            Long("scenario-file") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.scenario_file = Some(PathBuf::from(val.string()?));
                }
            }
            Long("days") | Short('d') => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.days = Some(val.parse()?);
                }
            }
            Long("seed") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.random_seed = Some(val.parse()?);
                }
            }
            Long("active-fraction") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.active_fraction = Some(val.parse()?);
                }
            }
            Long("creation-fraction") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.creation_fraction = Some(val.parse()?);
                }
            }
            Long("initial-players") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.initial_players = Some(val.parse()?);
                }
            }
            Long("carrying-capacity") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.carrying_capacity = Some(val.parse()?);
                }
            }
            Long("growth-rate") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.growth_rate = Some(val.parse()?);
                }
            }
            Long("output") | Short('o') => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.output_file = Some(PathBuf::from(val.string()?));
                }
            }
            Long("verbose") | Short('v') => cli_args.verbose = true,
            Long("quiet") | Short('q') => cli_args.quiet = true,
            Long("help") | Short('h') => {
                print_help();
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    cli_args.command = match subcommand.as_deref() {
        Some("summary") => {
            if let Some(file) = summary_file {
                Command::Summary { file }
            } else {
                eprintln!("Error: summary command requires a results file");
                std::process::exit(1);
            }
        }
        Some("sweep") => {
            if let Some(config) = sweep_config {
                Command::Sweep { config }
            } else {
                eprintln!("Error: sweep command requires a configuration file");
                std::process::exit(1);
            }
        }
        Some("run") | None => Command::Run,
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_help();
            std::process::exit(1);
        }
    };

    Ok(cli_args)
}

/// Apply CLI overrides to a scenario's parameters.
pub fn apply_overrides(scenario: &mut Scenario, args: &CliArgs) {
    if let Some(days) = args.days {
        scenario.config.days = days;
    }
    if let Some(seed) = args.random_seed {
        scenario.random_seed = Some(seed);
    }
    if let Some(fraction) = args.active_fraction {
        scenario.config.active_fraction = fraction;
    }
    if let Some(fraction) = args.creation_fraction {
        scenario.config.complex_creation_fraction = fraction;
    }
    if let Some(players) = args.initial_players {
        scenario.config.initial_players = players;
    }
    if let Some(capacity) = args.carrying_capacity {
        scenario.config.carrying_capacity = capacity;
    }
    if let Some(rate) = args.growth_rate {
        scenario.config.growth_rate = rate;
    }
}

fn print_help() {
    println!("\nToken Model Simulation\n");
    println!("USAGE:");
    println!("    token-model-sim [COMMAND] [OPTIONS]\n");

    println!("COMMANDS:");
    println!("    run              Run the simulation (default)");
    println!("    summary FILE     Summarize a saved run record");
    println!("    sweep CONFIG     Run a parameter sweep from YAML config\n");

    println!("SIMULATION OPTIONS:");
    println!("    --scenario <NAME>          Use a built-in scenario (default: default)");
    println!("                               Available: default, smoke, dormant, adoption");
    println!("    --scenario-file <FILE>     Load scenario from JSON file");
    println!("    -d, --days <N>             Number of days to simulate");
    println!("    --seed <N>                 Random seed for reproducible runs");
    println!("    --active-fraction <X>      Fraction of players consuming units daily");
    println!("    --creation-fraction <X>    Fraction of players attempting combination daily");
    println!("    --initial-players <X>      Starting population");
    println!("    --carrying-capacity <X>    Population ceiling");
    println!("    --growth-rate <X>          Logistic growth rate\n");

    println!("OUTPUT OPTIONS:");
    println!("    -o, --output <FILE>        Save the run record to specified file");
    println!("    -v, --verbose              Print the scenario before running");
    println!("    -q, --quiet                Suppress non-essential output");
    println!("    -h, --help                 Print help information\n");

    println!("EXAMPLES:");
    println!("    # Run two years with a fixed seed");
    println!("    token-model-sim run --seed 12345 --days 730\n");

    println!("    # Run a built-in scenario and save the record");
    println!("    token-model-sim run --scenario adoption -o adoption.json\n");

    println!("    # Summarize a saved record");
    println!("    token-model-sim summary adoption.json\n");

    println!("    # Run a sweep batch");
    println!("    token-model-sim sweep sweeps/fractions.yaml");
}
