use serde::Deserialize;

use crate::domain::simulation::simulator::{DEFAULT_GAMMA, N_ITERATIONS};

/// Wire form of a run configuration file.
///
/// Only carries what the file supplies; range checks happen in the
/// conversion to the domain `RunConfig`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfigDto {
    /// Traffic folder name, e.g. "70000_0".
    pub scenario: String,

    #[serde(default)]
    pub predictive: bool,

    #[serde(default = "default_gamma")]
    pub gamma: f64,

    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}

fn default_iterations() -> usize {
    N_ITERATIONS
}
