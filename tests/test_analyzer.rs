use eon_rsa_sim::domain::spectrum::analyzer::SpectrumAnalyzer;
use eon_rsa_sim::domain::spectrum::manager::{N_SLOTS, SlotState, SpectrumManager};
use eon_rsa_sim::domain::topology::Topology;

/// Node 0 with two outgoing links (0 -> 1, 0 -> 2); node 3 is isolated.
fn star_topology() -> Topology {
    let n = 4;
    let mut matrix = vec![vec![0u32; n]; n];

    matrix[0][1] = 100;
    matrix[0][2] = 100;

    Topology::new(matrix)
}

#[test]
fn test_fully_free_link_has_zero_occupancy_and_fragmentation() {
    let topology = star_topology();
    let spectrum = SpectrumManager::new(&topology);
    let analyzer = SpectrumAnalyzer::new(&spectrum, &topology);

    assert_eq!(analyzer.link_occupancy(0, 1), 0.0);
    assert_eq!(analyzer.largest_free_block(0, 1), N_SLOTS);
    assert_eq!(analyzer.fragmentation_index(0, 1), 0.0);
}

#[test]
fn test_fully_occupied_link_reports_fragmentation_one() {
    let topology = star_topology();
    let mut spectrum = SpectrumManager::new(&topology);

    for slot in 0..N_SLOTS {
        spectrum.set_slot_state(0, 1, slot, SlotState::Occupied);
    }

    let analyzer = SpectrumAnalyzer::new(&spectrum, &topology);

    assert_eq!(analyzer.link_occupancy(0, 1), 1.0);
    assert_eq!(analyzer.largest_free_block(0, 1), 0);
    assert_eq!(analyzer.fragmentation_index(0, 1), 1.0);
}

#[test]
fn test_largest_free_block_finds_the_longest_run() {
    let topology = star_topology();
    let mut spectrum = SpectrumManager::new(&topology);

    // Occupy two separators: free runs of 10, 19 and N_SLOTS - 31 slots.
    spectrum.set_slot_state(0, 1, 10, SlotState::Occupied);
    spectrum.set_slot_state(0, 1, 30, SlotState::Occupied);

    let analyzer = SpectrumAnalyzer::new(&spectrum, &topology);

    assert_eq!(analyzer.largest_free_block(0, 1), N_SLOTS - 31);
}

#[test]
fn test_fragmentation_index_formula() {
    let topology = star_topology();
    let mut spectrum = SpectrumManager::new(&topology);

    // Occupy everything except two free runs of 30 and 10 slots.
    for slot in 0..N_SLOTS {
        spectrum.set_slot_state(0, 1, slot, SlotState::Occupied);
    }
    for slot in 0..30 {
        spectrum.set_slot_state(0, 1, slot, SlotState::Free);
    }
    for slot in 50..60 {
        spectrum.set_slot_state(0, 1, slot, SlotState::Free);
    }

    let analyzer = SpectrumAnalyzer::new(&spectrum, &topology);

    // 1 - 30/40
    let expected = 1.0 - 30.0 / 40.0;
    assert!((analyzer.fragmentation_index(0, 1) - expected).abs() < 1e-9);
}

#[test]
fn test_node_snapshot_aggregates_outgoing_links() {
    let topology = star_topology();
    let mut spectrum = SpectrumManager::new(&topology);

    // Link 0 -> 1: 20 occupied slots at the front; link 0 -> 2 stays free.
    for slot in 0..20 {
        spectrum.set_slot_state(0, 1, slot, SlotState::Occupied);
    }

    let analyzer = SpectrumAnalyzer::new(&spectrum, &topology);
    let features = analyzer.node_feature_snapshot(0);

    let occupancy_0_1 = 20.0 / N_SLOTS as f64;

    // Mean and max occupancy over both links.
    assert!((features[0] - occupancy_0_1 / 2.0).abs() < 1e-9);
    assert!((features[1] - occupancy_0_1).abs() < 1e-9);
    // Worst largest free block is the occupied link's trailing run.
    assert_eq!(features[2], (N_SLOTS - 20) as f64);
    // One contiguous free run per link means zero fragmentation on both.
    assert_eq!(features[3], 0.0);
    assert_eq!(features[4], 0.0);
}

#[test]
fn test_snapshot_of_isolated_node_is_zero_vector() {
    let topology = star_topology();
    let spectrum = SpectrumManager::new(&topology);
    let analyzer = SpectrumAnalyzer::new(&spectrum, &topology);

    assert_eq!(analyzer.node_feature_snapshot(3), [0.0; 5]);
}
