use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::run_config_dto::RunConfigDto;
use crate::domain::modulation::{MODULATIONS, select_modulation};
use crate::domain::predictor::PenaltyPredictor;
use crate::domain::request::Request;
use crate::domain::routing;
use crate::domain::simulation::exporter::SnapshotExporter;
use crate::domain::spectrum::analyzer::SpectrumAnalyzer;
use crate::domain::spectrum::manager::{Allocation, SpectrumManager};
use crate::domain::spectrum::snapshot::{NodeSnapshot, SnapshotHistory};
use crate::domain::topology::{NodeId, Topology};
use crate::error::{Error, Result};

/// Default number of time steps in a run.
pub const N_ITERATIONS: usize = 1000;

/// Default weight of the predicted penalty in the routing cost.
pub const DEFAULT_GAMMA: f64 = 30.0;

/// Validated run parameters.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Scenario identifier, names the traffic folder.
    pub scenario: String,

    /// Routes with penalty-weighted costs when `true`, plain shortest paths
    /// otherwise.
    pub predictive: bool,

    /// Non-negative weight of the predicted penalty in the edge cost.
    pub gamma: f64,

    /// Number of time steps to simulate.
    pub iterations: usize,
}

impl RunConfig {
    pub fn new(scenario: impl Into<String>, predictive: bool, gamma: f64, iterations: usize) -> Result<Self> {
        if !(gamma >= 0.0) {
            return Err(Error::InvalidConfig(format!("gamma must be >= 0, got {}", gamma)));
        }

        if iterations == 0 {
            return Err(Error::InvalidConfig("iterations must be > 0".to_string()));
        }

        Ok(RunConfig { scenario: scenario.into(), predictive, gamma, iterations })
    }

    /// Converts the parsed configuration DTO into the validated domain form.
    pub fn from_dto(dto: RunConfigDto) -> Result<Self> {
        RunConfig::new(dto.scenario, dto.predictive, dto.gamma, dto.iterations)
    }
}

/// An accepted request together with its reservation and expiry step.
#[derive(Debug)]
struct ActiveAllocation {
    end_time: u64,
    allocation: Allocation,
    request: Request,
}

/// Aggregate outcome of a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub total: u64,
    pub accepted: u64,
    pub blocked: u64,
    pub elapsed: Duration,
}

impl RunReport {
    /// Fraction of requests blocked, `0.0` for an empty run.
    pub fn blocking_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.blocked as f64 / self.total as f64
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation finished")?;
        writeln!(f, "Total requests: {}", self.total)?;
        writeln!(f, "Accepted: {}", self.accepted)?;
        writeln!(f, "Blocked: {}", self.blocked)?;
        writeln!(f, "Blocking ratio: {:.4}", self.blocking_ratio())?;

        let seconds = self.elapsed.as_secs();
        write!(f, "Elapsed time: {:.3} s ({}:{:02}:{:02})", self.elapsed.as_secs_f64(), seconds / 3600, (seconds / 60) % 60, seconds % 60)
    }
}

/// The time-stepped admission-control loop.
///
/// Owns the spectrum grid, the active allocation set and the per-node
/// snapshot history; the predictor and the CSV exporter are injected
/// capabilities. One instance drives exactly one run and is not shared.
pub struct Simulation {
    topology: Arc<Topology>,
    config: RunConfig,
    spectrum: SpectrumManager,
    history: SnapshotHistory,
    predictor: Option<Box<dyn PenaltyPredictor>>,
    exporter: Option<SnapshotExporter>,
    active: Vec<ActiveAllocation>,
    total: u64,
    accepted: u64,
    blocked: u64,
}

impl Simulation {
    pub fn new(topology: Arc<Topology>, config: RunConfig, predictor: Option<Box<dyn PenaltyPredictor>>, exporter: Option<SnapshotExporter>) -> Self {
        if config.predictive && predictor.is_none() {
            log::warn!("Predictive mode requested without a predictor. All penalties stay 0 and routing degrades to plain shortest paths.");
        }

        let spectrum = SpectrumManager::new(&topology);
        let history = SnapshotHistory::new(topology.n_nodes());

        Simulation { topology, config, spectrum, history, predictor, exporter, active: Vec::new(), total: 0, accepted: 0, blocked: 0 }
    }

    /// Runs the configured number of time steps over the loaded traffic.
    ///
    /// Steps beyond the end of `traffic` process no arrivals but still
    /// expire allocations, matching the fixed-iteration terminal condition.
    pub fn run(&mut self, traffic: &[Vec<Request>]) -> Result<RunReport> {
        let started = Instant::now();

        for t in 0..self.config.iterations as u64 {
            let requests = traffic.get(t as usize).map(Vec::as_slice).unwrap_or(&[]);
            self.step(t, requests)?;

            if t % 100 == 0 {
                log::info!("Time {}: total={} accepted={} blocked={} active={}", t, self.total, self.accepted, self.blocked, self.active.len());
            }
        }

        if let Some(exporter) = &self.exporter {
            exporter.flush();
        }

        // Allocations still active here are dropped with the run state,
        // never released.
        Ok(RunReport { total: self.total, accepted: self.accepted, blocked: self.blocked, elapsed: started.elapsed() })
    }

    /// Processes one time step: expiry, snapshot/penalty refresh, then every
    /// arrival of the step in order.
    pub fn step(&mut self, t: u64, requests: &[Request]) -> Result<()> {
        // Expiry runs before arrivals so capacity departing at t is
        // available to requests arriving at t.
        self.expire_due_allocations(t);

        let penalties = if self.config.predictive || self.exporter.is_some() {
            self.snapshot_and_predict(t)
        } else {
            HashMap::new()
        };

        for request in requests {
            self.admit_request(t, request, &penalties)?;
        }

        Ok(())
    }

    /// Number of allocations currently holding spectrum.
    pub fn active_allocations(&self) -> usize {
        self.active.len()
    }

    pub fn counters(&self) -> (u64, u64, u64) {
        (self.total, self.accepted, self.blocked)
    }

    /// Read access to the spectrum grid, for inspection between steps.
    pub fn spectrum(&self) -> &SpectrumManager {
        &self.spectrum
    }

    /// Releases every allocation whose holding time ends at or before `t`.
    fn expire_due_allocations(&mut self, t: u64) {
        let (due, kept): (Vec<ActiveAllocation>, Vec<ActiveAllocation>) = self.active.drain(..).partition(|entry| entry.end_time <= t);
        self.active = kept;

        for entry in due {
            log::debug!("Releasing allocation {} for request {} -> {} at time {}", entry.allocation.id, entry.request.start, entry.request.end, t);
            self.spectrum.release(&entry.allocation);
        }
    }

    /// Takes a feature snapshot of every node and derives the per-node
    /// penalties for this step.
    ///
    /// Penalties are computed once per step and reused for every request
    /// routed in it; consulting the predictor per edge relaxation would
    /// multiply the model calls by path length.
    fn snapshot_and_predict(&mut self, t: u64) -> HashMap<NodeId, f64> {
        let n_nodes = self.topology.n_nodes();

        {
            let analyzer = SpectrumAnalyzer::new(&self.spectrum, &self.topology);

            for node in 0..n_nodes {
                let features = analyzer.node_feature_snapshot(node);

                if let Some(exporter) = &self.exporter {
                    exporter.export(t, node, &features);
                }

                self.history.push(node, NodeSnapshot { time: t, features });
            }
        }

        let mut penalties: HashMap<NodeId, f64> = HashMap::new();

        if let Some(predictor) = &self.predictor {
            for node in 0..n_nodes {
                // Nodes without a full history keep penalty 0; the
                // predictor is not consulted for them.
                if let Some(window) = self.history.window(node) {
                    let penalty = predictor.predict(&window);

                    if penalty > 1.0 {
                        log::error!("Predicted penalty above 1.0 for node {}: {}", node, penalty);
                    }

                    penalties.insert(node, penalty);
                }
            }
        }

        return penalties;
    }

    /// Admission decision for one request: route, select modulation, find a
    /// fit, reserve. Every miss along the way counts the request as blocked
    /// and processing continues with the next arrival.
    fn admit_request(&mut self, t: u64, request: &Request, penalties: &HashMap<NodeId, f64>) -> Result<()> {
        self.total += 1;

        let path = if self.config.predictive {
            routing::penalty_weighted_path(&self.topology, request.start, request.end, penalties, self.config.gamma)?
        } else {
            routing::shortest_path(&self.topology, request.start, request.end)?
        };

        let Some(path) = path else {
            log::debug!("Blocked {} -> {}: unreachable", request.start, request.end);
            self.blocked += 1;
            return Ok(());
        };

        let path_length = self.topology.path_physical_length(&path)?;

        let Some((modulation, n_slots)) = select_modulation(&MODULATIONS, path_length, request.size_gbps) else {
            log::debug!("Blocked {} -> {}: no modulation reaches {} km", request.start, request.end, path_length);
            self.blocked += 1;
            return Ok(());
        };

        let Some(start_slot) = self.spectrum.find_first_fit(&path, n_slots) else {
            log::debug!("Blocked {} -> {}: no contiguous block of {} slots", request.start, request.end, n_slots);
            self.blocked += 1;
            return Ok(());
        };

        let allocation = self.spectrum.reserve(&path, start_slot, n_slots);

        log::debug!(
            "Accepted {} -> {}: {} over {} slots from {}, allocation {}",
            request.start,
            request.end,
            modulation.name,
            n_slots,
            start_slot,
            allocation.id
        );

        self.active.push(ActiveAllocation { end_time: t + request.duration, allocation, request: request.clone() });
        self.accepted += 1;

        Ok(())
    }
}
