use std::sync::Arc;

use lazy_static::lazy_static;

use crate::domain::topology_constants::{CITIES, DISTANCES};
use crate::error::{Error, Result};

/// Index of a node in the topology, `0..n_nodes`.
pub type NodeId = usize;

lazy_static! {
    static ref REFERENCE_TOPOLOGY: Arc<Topology> = Arc::new(Topology::new(DISTANCES.iter().map(|row| row.to_vec()).collect()));
}

/// Read-only graph representation of the physical network.
///
/// Owns the link length matrix and the neighbour list precomputed from it.
/// The topology is fixed for the lifetime of a run; every component that
/// needs connectivity information reads it through this type instead of
/// touching the raw matrix.
#[derive(Debug)]
pub struct Topology {
    /// Link length in km for every ordered node pair, `0` meaning no link.
    distances: Vec<Vec<u32>>,

    /// Outgoing neighbours per node, derived once from `distances`.
    neighbours: Vec<Vec<NodeId>>,
}

impl Topology {
    /// Builds a topology from a square link length matrix.
    ///
    /// Rows shorter than the node count are treated as having no further
    /// links; the matrix is not required to be symmetric.
    pub fn new(distances: Vec<Vec<u32>>) -> Self {
        let n_nodes = distances.len();
        let mut neighbours: Vec<Vec<NodeId>> = Vec::with_capacity(n_nodes);

        for row in distances.iter() {
            let outgoing: Vec<NodeId> = row.iter().enumerate().filter(|(_, d)| **d > 0).map(|(v, _)| v).collect();
            neighbours.push(outgoing);
        }

        Topology { distances, neighbours }
    }

    /// Returns the shared 28-node European reference network.
    pub fn reference() -> Arc<Topology> {
        REFERENCE_TOPOLOGY.clone()
    }

    pub fn n_nodes(&self) -> usize {
        self.distances.len()
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node >= self.n_nodes() {
            return Err(Error::NodeOutOfRange { node, n_nodes: self.n_nodes() });
        }
        Ok(())
    }

    /// Link length in km for the ordered pair `src -> dst`, `0` if no link exists.
    ///
    /// Out-of-range indices are a hard error, never clamped.
    pub fn distance(&self, src: NodeId, dst: NodeId) -> Result<u32> {
        self.check_node(src)?;
        self.check_node(dst)?;
        Ok(self.distances[src][dst])
    }

    /// Outgoing neighbours of `node` in ascending node order.
    pub fn neighbours(&self, node: NodeId) -> Result<&[NodeId]> {
        self.check_node(node)?;
        Ok(&self.neighbours[node])
    }

    pub fn has_link(&self, src: NodeId, dst: NodeId) -> bool {
        src < self.n_nodes() && dst < self.n_nodes() && self.distances[src][dst] > 0
    }

    /// Physical length of a routed path: the sum of the consecutive link
    /// lengths, which is what bounds optical reach.
    ///
    /// A zero-distance edge inside a computed path signals inconsistent data
    /// upstream; it is logged and contributes nothing to the sum.
    pub fn path_physical_length(&self, path: &[NodeId]) -> Result<u64> {
        let mut total: u64 = 0;

        for pair in path.windows(2) {
            let hop = self.distance(pair[0], pair[1])?;

            if hop == 0 {
                log::error!("Zero-distance edge {} -> {} inside a computed path. Topology and routing state disagree.", pair[0], pair[1]);
                continue;
            }

            total += hop as u64;
        }

        Ok(total)
    }
}

/// City name for a node of the reference network.
pub fn city_name(node: NodeId) -> Result<&'static str> {
    match CITIES.get(node) {
        Some((name, _)) => Ok(name),
        None => Err(Error::NodeOutOfRange { node, n_nodes: CITIES.len() }),
    }
}

/// Country of a node of the reference network.
pub fn city_country(node: NodeId) -> Result<&'static str> {
    match CITIES.get(node) {
        Some((_, country)) => Ok(country),
        None => Err(Error::NodeOutOfRange { node, n_nodes: CITIES.len() }),
    }
}

/// Looks a reference-network node up by city name, case-insensitively.
pub fn find_city(name: &str) -> Option<NodeId> {
    CITIES.iter().position(|(city, _)| city.eq_ignore_ascii_case(name))
}
