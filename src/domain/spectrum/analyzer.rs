use crate::domain::spectrum::manager::{N_SLOTS, SlotState, SpectrumManager};
use crate::domain::topology::{NodeId, Topology};

/// Number of features in a node snapshot.
pub const N_FEATURES: usize = 5;

/// Read-only derived view over the spectrum occupancy grid.
///
/// Borrows the manager for its whole lifetime, so every query observes one
/// consistent grid state; no reservation can run while an analyzer is alive.
pub struct SpectrumAnalyzer<'a> {
    spectrum: &'a SpectrumManager,
    topology: &'a Topology,
}

impl<'a> SpectrumAnalyzer<'a> {
    pub fn new(spectrum: &'a SpectrumManager, topology: &'a Topology) -> Self {
        SpectrumAnalyzer { spectrum, topology }
    }

    /// Fraction of occupied slots on link `u -> v`, in `0.0..=1.0`.
    pub fn link_occupancy(&self, u: NodeId, v: NodeId) -> f64 {
        match self.spectrum.link(u, v) {
            Some(link) => {
                let occupied = link.iter().filter(|slot| **slot == SlotState::Occupied).count();
                occupied as f64 / N_SLOTS as f64
            }
            None => {
                log::error!("Link {} -> {} does not exist", u, v);
                return 0.0;
            }
        }
    }

    /// Size of the longest run of consecutive free slots on link `u -> v`.
    pub fn largest_free_block(&self, u: NodeId, v: NodeId) -> usize {
        let Some(link) = self.spectrum.link(u, v) else {
            log::error!("Link {} -> {} does not exist", u, v);
            return 0;
        };

        let mut best_run: usize = 0;
        let mut current_run: usize = 0;

        for slot in link {
            if *slot == SlotState::Free {
                current_run += 1;
                best_run = best_run.max(current_run);
            } else {
                current_run = 0;
            }
        }

        return best_run;
    }

    /// Fragmentation index of link `u -> v`:
    /// `1 - largest_free_block / total_free_slots`.
    ///
    /// A link with zero free slots reports exactly `1.0`; a fully free link
    /// reports `0.0`.
    pub fn fragmentation_index(&self, u: NodeId, v: NodeId) -> f64 {
        let Some(link) = self.spectrum.link(u, v) else {
            log::error!("Link {} -> {} does not exist", u, v);
            return 0.0;
        };

        let total_free = link.iter().filter(|slot| **slot == SlotState::Free).count();

        if total_free == 0 {
            return 1.0;
        }

        let largest_block = self.largest_free_block(u, v);
        return 1.0 - largest_block as f64 / total_free as f64;
    }

    /// Aggregated spectrum features over all outgoing links of `node`.
    ///
    /// Feature order: mean occupancy, max occupancy, min largest free block,
    /// mean fragmentation, max fragmentation.
    ///
    /// A node without outgoing links yields the zero vector; that only
    /// happens on a disconnected topology and is logged.
    pub fn node_feature_snapshot(&self, node: NodeId) -> [f64; N_FEATURES] {
        let neighbours = match self.topology.neighbours(node) {
            Ok(neighbours) => neighbours,
            Err(e) => {
                log::error!("Feature snapshot requested for invalid node: {}", e);
                return [0.0; N_FEATURES];
            }
        };

        if neighbours.is_empty() {
            log::error!("Node {} has no outgoing links.", node);
            return [0.0; N_FEATURES];
        }

        let mut occupancy_sum = 0.0;
        let mut occupancy_max = f64::MIN;
        let mut min_largest_block = usize::MAX;
        let mut fragmentation_sum = 0.0;
        let mut fragmentation_max = f64::MIN;

        for &neighbour in neighbours {
            let occupancy = self.link_occupancy(node, neighbour);
            let largest_block = self.largest_free_block(node, neighbour);
            let fragmentation = self.fragmentation_index(node, neighbour);

            occupancy_sum += occupancy;
            occupancy_max = occupancy_max.max(occupancy);
            min_largest_block = min_largest_block.min(largest_block);
            fragmentation_sum += fragmentation;
            fragmentation_max = fragmentation_max.max(fragmentation);
        }

        let n_links = neighbours.len() as f64;

        [occupancy_sum / n_links, occupancy_max, min_largest_block as f64, fragmentation_sum / n_links, fragmentation_max]
    }
}
