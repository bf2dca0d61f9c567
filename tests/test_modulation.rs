use eon_rsa_sim::domain::modulation::{MODULATIONS, Modulation, select_modulation};

#[test]
fn test_reach_filter_excludes_short_reach_schemes() {
    // Setup: BPSK cannot span the path, QPSK can.
    let catalog = [
        Modulation { name: "BPSK", max_bitrate_gbps: 50, max_distance_km: 3500 },
        Modulation { name: "QPSK", max_bitrate_gbps: 100, max_distance_km: 6300 },
    ];

    // Execution: 4000 km path carrying 80 Gbps.
    let (modulation, n_slots) = select_modulation(&catalog, 4000, 80.0).expect("QPSK reaches 4000 km");

    // Verification: ceil(80 / 100) * 3 = 3 slots on the only candidate.
    assert_eq!(modulation.name, "QPSK");
    assert_eq!(n_slots, 3);
}

#[test]
fn test_no_scheme_reaches_far_enough() {
    // The full catalog tops out at 6300 km.
    let result = select_modulation(&MODULATIONS, 7000, 50.0);

    assert!(result.is_none(), "No modulation should reach 7000 km");
}

#[test]
fn test_slot_count_rounds_up_before_overhead() {
    // 80 Gbps over BPSK (50 Gbps per slot): ceil(1.6) = 2, times 3 overhead.
    let catalog = [Modulation { name: "BPSK", max_bitrate_gbps: 50, max_distance_km: 6300 }];

    let (_, n_slots) = select_modulation(&catalog, 4000, 80.0).expect("BPSK reaches 4000 km");

    assert_eq!(n_slots, 6);
}

#[test]
fn test_slot_count_tie_prefers_higher_bitrate() {
    // At 500 km all four schemes are candidates. 150 Gbps needs 3 slots on
    // both 16QAM (ceil(1.0)) and 32QAM (ceil(0.75)); the denser scheme wins.
    let (modulation, n_slots) = select_modulation(&MODULATIONS, 500, 150.0).expect("all schemes reach 500 km");

    assert_eq!(n_slots, 3);
    assert_eq!(modulation.name, "32QAM");
}

#[test]
fn test_long_path_falls_back_to_bpsk() {
    // Beyond 3500 km only BPSK survives the reach filter.
    let (modulation, n_slots) = select_modulation(&MODULATIONS, 4000, 80.0).expect("BPSK reaches 4000 km");

    assert_eq!(modulation.name, "BPSK");
    assert_eq!(n_slots, 6);
}

#[test]
fn test_minimum_slot_count_wins_over_catalog_order() {
    // 200 Gbps at 600 km: BPSK needs ceil(4)*3 = 12, QPSK ceil(2)*3 = 6,
    // 16QAM ceil(4/3)*3 = 6, 32QAM ceil(1)*3 = 3.
    let (modulation, n_slots) = select_modulation(&MODULATIONS, 600, 200.0).expect("32QAM reaches 600 km");

    assert_eq!(modulation.name, "32QAM");
    assert_eq!(n_slots, 3);
}
