/// A modulation scheme trading optical reach for spectral efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulation {
    pub name: &'static str,

    /// Bitrate in Gbps carried by one 12.5GHz slot equivalent.
    pub max_bitrate_gbps: u32,

    /// Maximum optical reach in km over which the scheme stays decodable.
    pub max_distance_km: u32,
}

/// Fixed modulation catalog, ordered by increasing bitrate.
pub const MODULATIONS: [Modulation; 4] = [
    Modulation { name: "BPSK", max_bitrate_gbps: 50, max_distance_km: 6300 },
    Modulation { name: "QPSK", max_bitrate_gbps: 100, max_distance_km: 3500 },
    Modulation { name: "16QAM", max_bitrate_gbps: 150, max_distance_km: 1200 },
    Modulation { name: "32QAM", max_bitrate_gbps: 200, max_distance_km: 600 },
];

/// Guard-band and framing overhead applied to every slot requirement.
pub const SLOT_OVERHEAD_FACTOR: usize = 3;

/// Picks the modulation for a path of the given physical length and the slot
/// count it needs for `size_gbps`.
///
/// Only schemes whose reach covers the full path length are candidates.
/// Among those, the one needing the fewest slots wins; on equal slot counts
/// the denser scheme (higher bitrate) is preferred.
///
/// # Returns
/// `Some((modulation, n_slots))`, or `None` when no scheme in the catalog
/// reaches far enough. The caller treats `None` as a blocked request, not as
/// an error.
pub fn select_modulation(catalog: &[Modulation], path_length_km: u64, size_gbps: f64) -> Option<(&Modulation, usize)> {
    let mut best: Option<(&Modulation, usize)> = None;

    for modulation in catalog {
        if (modulation.max_distance_km as u64) < path_length_km {
            continue;
        }

        let n_slots = (size_gbps / modulation.max_bitrate_gbps as f64).ceil() as usize * SLOT_OVERHEAD_FACTOR;

        let better = match best {
            None => true,
            Some((best_mod, best_slots)) => n_slots < best_slots || (n_slots == best_slots && modulation.max_bitrate_gbps > best_mod.max_bitrate_gbps),
        };

        if better {
            best = Some((modulation, n_slots));
        }
    }

    best
}
