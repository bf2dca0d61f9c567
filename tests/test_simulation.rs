use std::sync::Arc;

use eon_rsa_sim::domain::predictor::PenaltyPredictor;
use eon_rsa_sim::domain::request::Request;
use eon_rsa_sim::domain::simulation::simulator::{RunConfig, Simulation};
use eon_rsa_sim::domain::spectrum::manager::N_SLOTS;
use eon_rsa_sim::domain::topology::Topology;

/// Predictor whose penalty is simply the node's latest mean occupancy.
///
/// Keeps the steering observable: a loaded node scores high, an idle one
/// scores zero.
#[derive(Debug, Clone)]
struct MeanOccupancyPredictor;

impl PenaltyPredictor for MeanOccupancyPredictor {
    fn predict(&self, window: &[[f64; 5]; 3]) -> f64 {
        window[0][0]
    }
}

fn topology_from_edges(n: usize, edges: &[(usize, usize, u32)]) -> Arc<Topology> {
    let mut matrix = vec![vec![0u32; n]; n];

    for (u, v, length) in edges {
        matrix[*u][*v] = *length;
        matrix[*v][*u] = *length;
    }

    Arc::new(Topology::new(matrix))
}

fn request(topology: &Topology, start: usize, end: usize, size_gbps: f64, duration: u64, arrival_time: u64) -> Request {
    Request::new(start, end, size_gbps, duration, arrival_time, topology.n_nodes()).expect("valid request")
}

#[test]
fn test_allocation_lifecycle_over_three_steps() {
    // Setup: one link, one request holding for 2 time units.
    let topology = topology_from_edges(2, &[(0, 1, 100)]);
    let config = RunConfig::new("lifecycle", false, 0.0, 3).expect("valid config");
    let mut simulation = Simulation::new(topology.clone(), config, None, None);

    let arrivals = vec![request(&topology, 0, 1, 50.0, 2, 0)];

    // Execution and verification step by step.
    simulation.step(0, &arrivals).expect("step 0");
    assert_eq!(simulation.active_allocations(), 1);
    // 50 Gbps over 100 km selects 32QAM: ceil(50/200) * 3 = 3 slots.
    assert_eq!(simulation.spectrum().free_slots_on_link(0, 1), N_SLOTS - 3);

    simulation.step(1, &[]).expect("step 1");
    assert_eq!(simulation.active_allocations(), 1, "Allocation must still be active one step before expiry");

    simulation.step(2, &[]).expect("step 2");
    assert_eq!(simulation.active_allocations(), 0, "Allocation must be released at arrival_time + duration");
    assert_eq!(simulation.spectrum().free_slots_on_link(0, 1), N_SLOTS);

    assert_eq!(simulation.counters(), (1, 1, 0));
}

#[test]
fn test_expiry_frees_capacity_for_same_step_arrival() {
    let topology = topology_from_edges(2, &[(0, 1, 100)]);
    let config = RunConfig::new("same-step", false, 0.0, 2).expect("valid config");
    let mut simulation = Simulation::new(topology.clone(), config, None, None);

    // 21200 Gbps on 32QAM: ceil(21200/200) * 3 = 318 slots, nearly the link.
    let first = vec![request(&topology, 0, 1, 21200.0, 1, 0)];
    let second = vec![request(&topology, 0, 1, 21200.0, 1, 1)];

    simulation.step(0, &first).expect("step 0");
    assert_eq!(simulation.spectrum().free_slots_on_link(0, 1), N_SLOTS - 318);

    // The first allocation ends at t=1; expiry must run before the new
    // arrival so the second request finds the link empty again.
    simulation.step(1, &second).expect("step 1");

    assert_eq!(simulation.counters(), (2, 2, 0));
    assert_eq!(simulation.spectrum().free_slots_on_link(0, 1), N_SLOTS - 318);
}

#[test]
fn test_unreachable_request_is_blocked_not_fatal() {
    // Node 2 exists but has no links.
    let topology = topology_from_edges(3, &[(0, 1, 100)]);
    let config = RunConfig::new("unreachable", false, 0.0, 1).expect("valid config");
    let mut simulation = Simulation::new(topology.clone(), config, None, None);

    let arrivals = vec![request(&topology, 0, 2, 50.0, 1, 0)];
    simulation.step(0, &arrivals).expect("step 0");

    assert_eq!(simulation.counters(), (1, 0, 1));
}

#[test]
fn test_request_beyond_modulation_reach_is_blocked() {
    let topology = topology_from_edges(2, &[(0, 1, 7000)]);
    let config = RunConfig::new("too-far", false, 0.0, 1).expect("valid config");
    let mut simulation = Simulation::new(topology.clone(), config, None, None);

    let arrivals = vec![request(&topology, 0, 1, 50.0, 1, 0)];
    simulation.step(0, &arrivals).expect("step 0");

    assert_eq!(simulation.counters(), (1, 0, 1));
    assert_eq!(simulation.spectrum().free_slots_on_link(0, 1), N_SLOTS, "A blocked request must not touch the grid");
}

#[test]
fn test_link_exhaustion_blocks_the_overflow_request() {
    let topology = topology_from_edges(2, &[(0, 1, 100)]);
    let config = RunConfig::new("exhaustion", false, 0.0, 1).expect("valid config");
    let mut simulation = Simulation::new(topology.clone(), config, None, None);

    // 106 requests of 3 slots each fill 318 of 320 slots; the 107th needs 3
    // more and must be blocked.
    let arrivals: Vec<Request> = (0..107).map(|_| request(&topology, 0, 1, 100.0, 10, 0)).collect();

    simulation.step(0, &arrivals).expect("step 0");

    assert_eq!(simulation.counters(), (107, 106, 1));
    assert_eq!(simulation.spectrum().free_slots_on_link(0, 1), 2);
}

#[test]
fn test_predictive_routing_steers_around_loaded_node() {
    // Diamond with two equal-length routes 0-1-3 and 0-2-3.
    let topology = topology_from_edges(4, &[(0, 1, 100), (1, 3, 100), (0, 2, 100), (2, 3, 100)]);
    let config = RunConfig::new("steering", true, 30.0, 20).expect("valid config");
    let mut simulation = Simulation::new(topology.clone(), config, Some(Box::new(MeanOccupancyPredictor)), None);

    // Load the link 1 -> 3 for ten steps so node 1's history fills with
    // rising occupancy while node 2 stays idle.
    for t in 0..10 {
        let arrivals = vec![request(&topology, 1, 3, 100.0, 100, t)];
        simulation.step(t, &arrivals).expect("warmup step");
    }

    // With a full window the probe at t=10 sees node 1 penalized and must
    // take the idle branch, even though the unweighted tie-break would have
    // picked node 1.
    let probe = vec![request(&topology, 0, 3, 100.0, 1, 10)];
    simulation.step(10, &probe).expect("probe step");

    let (total, accepted, blocked) = simulation.counters();
    assert_eq!((total, accepted, blocked), (11, 11, 0));

    assert_eq!(simulation.spectrum().free_slots_on_link(0, 2), N_SLOTS - 3, "Probe should route over node 2");
    assert_eq!(simulation.spectrum().free_slots_on_link(2, 3), N_SLOTS - 3, "Probe should route over node 2");
    assert_eq!(simulation.spectrum().free_slots_on_link(0, 1), N_SLOTS, "Link 0 -> 1 should stay untouched");
}

#[test]
fn test_empty_run_reports_zero_blocking_ratio() {
    let topology = topology_from_edges(2, &[(0, 1, 100)]);
    let config = RunConfig::new("empty", false, 0.0, 3).expect("valid config");
    let mut simulation = Simulation::new(topology, config, None, None);

    let report = simulation.run(&[]).expect("run");

    assert_eq!(report.total, 0);
    assert_eq!(report.blocking_ratio(), 0.0);
}

#[test]
fn test_run_config_rejects_negative_gamma() {
    assert!(RunConfig::new("bad", true, -1.0, 10).is_err());
    assert!(RunConfig::new("bad", true, 30.0, 0).is_err());
    assert!(RunConfig::new("good", true, 0.0, 10).is_ok());
}
