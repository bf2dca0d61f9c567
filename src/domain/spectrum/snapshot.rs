use std::collections::VecDeque;

use crate::domain::spectrum::analyzer::N_FEATURES;
use crate::domain::topology::NodeId;

/// Number of snapshots retained per node.
pub const SNAPSHOT_HISTORY_DEPTH: usize = 10;

/// Number of snapshots forming one predictor input window.
pub const FEATURE_WINDOW: usize = 3;

/// One timestamped feature vector of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSnapshot {
    /// Simulation step the snapshot was taken at.
    pub time: u64,

    /// Features as produced by the analyzer: mean occupancy, max occupancy,
    /// min largest free block, mean fragmentation, max fragmentation.
    pub features: [f64; N_FEATURES],
}

/// Rolling per-node history of the most recent snapshots.
///
/// A fixed-capacity ring per node: pushing an eleventh snapshot evicts the
/// oldest one.
#[derive(Debug)]
pub struct SnapshotHistory {
    by_node: Vec<VecDeque<NodeSnapshot>>,
}

impl SnapshotHistory {
    pub fn new(n_nodes: usize) -> Self {
        SnapshotHistory { by_node: (0..n_nodes).map(|_| VecDeque::with_capacity(SNAPSHOT_HISTORY_DEPTH)).collect() }
    }

    /// Appends a snapshot for `node`, evicting the oldest one once the
    /// history is full.
    pub fn push(&mut self, node: NodeId, snapshot: NodeSnapshot) {
        let history = &mut self.by_node[node];

        if history.len() == SNAPSHOT_HISTORY_DEPTH {
            history.pop_front();
        }

        history.push_back(snapshot);
    }

    pub fn len(&self, node: NodeId) -> usize {
        self.by_node[node].len()
    }

    /// The most recent snapshot for `node`, if any exists.
    pub fn latest(&self, node: NodeId) -> Option<&NodeSnapshot> {
        self.by_node[node].back()
    }

    /// The predictor input window for `node`: the latest, 5th-latest and
    /// 10th-latest feature vectors.
    ///
    /// # Returns
    /// `None` until the node has a full history of
    /// [`SNAPSHOT_HISTORY_DEPTH`] snapshots; the caller then skips the
    /// predictor and treats the node's penalty as zero.
    pub fn window(&self, node: NodeId) -> Option<[[f64; N_FEATURES]; FEATURE_WINDOW]> {
        let history = &self.by_node[node];

        if history.len() < SNAPSHOT_HISTORY_DEPTH {
            return None;
        }

        let len = history.len();

        Some([history[len - 1].features, history[len - 5].features, history[len - 10].features])
    }
}
