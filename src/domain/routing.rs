use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::domain::topology::{NodeId, Topology};
use crate::error::Result;

/// Entry in the Dijkstra priority queue.
///
/// Ordered so that `BinaryHeap` pops the entry with the lowest accumulated
/// cost first; equal costs pop in insertion order (`seq`), which keeps the
/// traversal deterministic without the result depending on it for
/// correctness.
struct QueueEntry {
    cost: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        other.cost.total_cmp(&self.cost).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Computes the unweighted shortest path from `start` to `target` over the
/// link length matrix.
///
/// # Returns
/// `Ok(Some(path))` with the node sequence from `start` to `target`
/// inclusive, `Ok(None)` when the target is unreachable (the caller treats
/// this as a blocked request), or an error when either endpoint is outside
/// the node range.
pub fn shortest_path(topology: &Topology, start: NodeId, target: NodeId) -> Result<Option<Vec<NodeId>>> {
    traverse(topology, start, target, |_, _, length| length as f64)
}

/// Computes the shortest path where every edge leaving node `u` is penalized
/// by the congestion score predicted for `u`.
///
/// The edge cost is `length * (1 + gamma * penalty[u])`; nodes absent from
/// the penalty map count as penalty `0`. `gamma` scales how strongly the
/// prediction discourages routing through a congested node.
pub fn penalty_weighted_path(
    topology: &Topology,
    start: NodeId,
    target: NodeId,
    penalty_by_node: &HashMap<NodeId, f64>,
    gamma: f64,
) -> Result<Option<Vec<NodeId>>> {
    traverse(topology, start, target, |u, _, length| {
        let penalty = penalty_by_node.get(&u).copied().unwrap_or(0.0);
        length as f64 * (1.0 + gamma * penalty)
    })
}

/// Shared Dijkstra core, parameterized over the edge cost function.
///
/// Both routing modes are the same traversal: binary-heap relaxation with
/// stale entries skipped, early exit once the target pops, predecessor walk
/// for reconstruction.
fn traverse<F>(topology: &Topology, start: NodeId, target: NodeId, edge_cost: F) -> Result<Option<Vec<NodeId>>>
where
    F: Fn(NodeId, NodeId, u32) -> f64,
{
    log::debug!("Routing from node {} to node {}", start, target);

    let n_nodes = topology.n_nodes();

    let mut dist: Vec<f64> = vec![f64::INFINITY; n_nodes];
    let mut prev: Vec<Option<NodeId>> = vec![None; n_nodes];
    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    // Both endpoints must be in range; this is a hard error, never clamped.
    topology.neighbours(start)?;
    topology.neighbours(target)?;

    dist[start] = 0.0;
    heap.push(QueueEntry { cost: 0.0, seq, node: start });

    while let Some(QueueEntry { cost, node, .. }) = heap.pop() {
        // Stale entry, a cheaper way to this node was already settled.
        if cost > dist[node] {
            continue;
        }

        if node == target {
            break;
        }

        for &next in topology.neighbours(node)? {
            let length = topology.distance(node, next)?;
            let next_cost = cost + edge_cost(node, next, length);

            if next_cost < dist[next] {
                dist[next] = next_cost;
                prev[next] = Some(node);
                seq += 1;
                heap.push(QueueEntry { cost: next_cost, seq, node: next });
            }
        }
    }

    if dist[target].is_infinite() {
        log::error!("No path exists from node {} to node {}", start, target);
        return Ok(None);
    }

    let mut path: Vec<NodeId> = vec![target];
    let mut node = target;

    while let Some(predecessor) = prev[node] {
        path.push(predecessor);
        node = predecessor;
    }

    path.reverse();
    return Ok(Some(path));
}
