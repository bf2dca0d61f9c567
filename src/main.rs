mod api;
mod domain;
mod error;
mod loader;
mod logger;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::run_config_dto::RunConfigDto;
use crate::domain::predictor::{LinearPenaltyModel, PenaltyPredictor};
use crate::domain::simulation::exporter::SnapshotExporter;
use crate::domain::simulation::simulator::{DEFAULT_GAMMA, N_ITERATIONS, RunConfig, Simulation};
use crate::domain::topology::Topology;
use crate::error::{Error, Result};
use crate::loader::generator::GeneratorConfig;
use crate::loader::parser::{load_scenario, parse_json_file};

#[derive(Parser)]
#[command(name = "eon_rsa_sim", about = "Routing and spectrum assignment simulator for elastic optical networks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a simulation over a traffic scenario folder.
    Run {
        /// Scenario folder name, e.g. "70000_0". Required unless --config supplies it.
        scenario: Option<String>,

        /// Root directory holding the scenario folders.
        #[arg(long, default_value = "traffic_data")]
        data_dir: PathBuf,

        /// JSON run configuration file; explicit flags take precedence.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Route with penalty-weighted costs from the congestion predictor.
        #[arg(long)]
        predictive: bool,

        /// Weight of the predicted penalty in the routing cost.
        #[arg(long)]
        gamma: Option<f64>,

        /// Number of time steps to simulate.
        #[arg(long)]
        iterations: Option<usize>,

        /// Penalty model weight file (JSON), required with --predictive.
        #[arg(long)]
        model: Option<PathBuf>,

        /// Write per-step node feature snapshots to this CSV file.
        #[arg(long)]
        export_snapshots: Option<PathBuf>,
    },

    /// Generate a synthetic traffic scenario folder.
    Generate {
        /// Name of the scenario folder to create.
        scenario: String,

        #[arg(long, default_value = "traffic_data")]
        data_dir: PathBuf,

        #[arg(long, default_value_t = N_ITERATIONS)]
        steps: usize,

        #[arg(long, default_value_t = 40)]
        requests_per_step: usize,

        #[arg(long, default_value_t = 200.0)]
        max_size_gbps: f64,

        #[arg(long, default_value_t = 50)]
        max_duration: u64,

        #[arg(long, default_value_t = 7)]
        seed: u64,
    },
}

fn main() {
    logger::init();

    let cli = Cli::parse();

    if let Err(e) = dispatch(cli.command) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run { scenario, data_dir, config, predictive, gamma, iterations, model, export_snapshots } => {
            let run_config = resolve_run_config(scenario, config, predictive, gamma, iterations)?;

            let predictor: Option<Box<dyn PenaltyPredictor>> = match (&model, run_config.predictive) {
                (Some(path), true) => Some(Box::new(LinearPenaltyModel::from_file(path)?)),
                (None, true) => {
                    return Err(Error::InvalidConfig("predictive mode requires --model".to_string()));
                }
                (Some(_), false) => {
                    log::warn!("--model given without --predictive, the model stays unused");
                    None
                }
                (None, false) => None,
            };

            let exporter = match &export_snapshots {
                Some(path) => Some(SnapshotExporter::create(path)?),
                None => None,
            };

            let topology = Topology::reference();
            let traffic = load_scenario(&data_dir, &run_config.scenario, run_config.iterations, topology.n_nodes())?;

            let mut simulation = Simulation::new(topology, run_config, predictor, exporter);
            let report = simulation.run(&traffic)?;

            println!("{}", report);

            Ok(())
        }
        Command::Generate { scenario, data_dir, steps, requests_per_step, max_size_gbps, max_duration, seed } => {
            let generator_config = GeneratorConfig { steps, requests_per_step, max_size_gbps, max_duration, seed };

            loader::generator::generate_scenario(&data_dir, &scenario, Topology::reference().n_nodes(), &generator_config)
        }
    }
}

/// Builds the run configuration from an optional JSON file with CLI flags
/// layered on top.
fn resolve_run_config(
    scenario: Option<String>,
    config_path: Option<PathBuf>,
    predictive: bool,
    gamma: Option<f64>,
    iterations: Option<usize>,
) -> Result<RunConfig> {
    let dto: Option<RunConfigDto> = match &config_path {
        Some(path) => {
            log::info!("Loading run configuration from '{}'", path.display());
            Some(parse_json_file(path)?)
        }
        None => None,
    };

    let scenario = match scenario.or_else(|| dto.as_ref().map(|d| d.scenario.clone())) {
        Some(scenario) => scenario,
        None => return Err(Error::InvalidConfig("no scenario given, pass one as argument or via --config".to_string())),
    };

    let predictive = predictive || dto.as_ref().is_some_and(|d| d.predictive);
    let gamma = gamma.or(dto.as_ref().map(|d| d.gamma)).unwrap_or(DEFAULT_GAMMA);
    let iterations = iterations.or(dto.as_ref().map(|d| d.iterations)).unwrap_or(N_ITERATIONS);

    RunConfig::new(scenario, predictive, gamma, iterations)
}
