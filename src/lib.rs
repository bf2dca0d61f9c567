use std::path::Path;

use crate::domain::predictor::PenaltyPredictor;
use crate::domain::simulation::exporter::SnapshotExporter;
use crate::domain::simulation::simulator::{RunConfig, RunReport, Simulation};
use crate::domain::topology::Topology;
use crate::error::Result;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads the scenario traffic and drives one full simulation run over the
/// reference network.
///
/// The predictor and the snapshot exporter are optional capabilities owned
/// by the caller's setup code; the run itself only consumes them.
pub fn run_scenario(
    data_dir: &Path,
    config: RunConfig,
    predictor: Option<Box<dyn PenaltyPredictor>>,
    exporter: Option<SnapshotExporter>,
) -> Result<RunReport> {
    let topology = Topology::reference();

    let traffic = loader::parser::load_scenario(data_dir, &config.scenario, config.iterations, topology.n_nodes())?;
    log::info!("Traffic loaded for scenario '{}'", config.scenario);

    let mut simulation = Simulation::new(topology, config, predictor, exporter);
    let report = simulation.run(&traffic)?;

    log::info!("Run complete: {} total, {} accepted, {} blocked", report.total, report.accepted, report.blocked);

    Ok(report)
}
