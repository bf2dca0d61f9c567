use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;

/// Parameters of a synthetic traffic scenario.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of step files to write.
    pub steps: usize,

    /// Arrivals per step.
    pub requests_per_step: usize,

    /// Upper bound of the uniform bandwidth draw, in Gbps.
    pub max_size_gbps: f64,

    /// Upper bound of the uniform holding time draw, in steps.
    pub max_duration: u64,

    /// RNG seed, so a scenario can be regenerated bit-identically.
    pub seed: u64,
}

/// Smallest bandwidth a generated request asks for, one slot equivalent.
const MIN_SIZE_GBPS: f64 = 12.5;

/// Writes a synthetic scenario folder in the traffic file format the loader
/// reads: one `<step>.txt` per step, one `start dest bandwidth_gbps
/// duration` line per request.
///
/// Endpoints are drawn uniformly over the node range with `start != dest`;
/// bandwidth and duration are uniform over their configured ranges.
pub fn generate_scenario(data_dir: &Path, scenario: &str, n_nodes: usize, config: &GeneratorConfig) -> Result<()> {
    let scenario_dir = data_dir.join(scenario);
    fs::create_dir_all(&scenario_dir)?;

    log::info!("Generating scenario '{}' with {} steps x {} requests (seed {})", scenario, config.steps, config.requests_per_step, config.seed);

    let mut rng = StdRng::seed_from_u64(config.seed);

    for step in 0..config.steps {
        let mut contents = String::new();

        for _ in 0..config.requests_per_step {
            let start = rng.random_range(0..n_nodes);

            let mut end = rng.random_range(0..n_nodes);
            while end == start {
                end = rng.random_range(0..n_nodes);
            }

            let size_gbps = rng.random_range(MIN_SIZE_GBPS..=config.max_size_gbps);
            let duration = rng.random_range(1..=config.max_duration);

            contents.push_str(&format!("{} {} {:.1} {}\n", start, end, size_gbps, duration));
        }

        fs::write(scenario_dir.join(format!("{}.txt", step)), contents)?;
    }

    log::info!("Scenario written to '{}'", scenario_dir.display());

    Ok(())
}
