use crate::domain::topology::NodeId;
use crate::error::{Error, Result};

/// A single bandwidth request against the network.
///
/// Requests are produced by the traffic loader, validated on construction
/// and never mutated afterwards. The admission loop only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Source node.
    pub start: NodeId,

    /// Destination node, always different from `start`.
    pub end: NodeId,

    /// Requested bandwidth in Gbps, strictly positive.
    pub size_gbps: f64,

    /// Holding time in simulation steps, strictly positive.
    pub duration: u64,

    /// Step index at which the request arrives.
    pub arrival_time: u64,
}

impl Request {
    /// Validates all fields against the node range of the target topology.
    ///
    /// Malformed data is rejected here, at construction, so the admission
    /// loop can assume every request it receives is well formed.
    pub fn new(start: NodeId, end: NodeId, size_gbps: f64, duration: u64, arrival_time: u64, n_nodes: usize) -> Result<Self> {
        if start >= n_nodes {
            return Err(Error::InvalidRequest(format!("start must be 0-{}, got {}", n_nodes - 1, start)));
        }

        if end >= n_nodes {
            return Err(Error::InvalidRequest(format!("end must be 0-{}, got {}", n_nodes - 1, end)));
        }

        if start == end {
            return Err(Error::InvalidRequest(format!("start and end must differ, both are {}", start)));
        }

        if !(size_gbps > 0.0) {
            return Err(Error::InvalidRequest(format!("size_gbps must be > 0, got {}", size_gbps)));
        }

        if duration == 0 {
            return Err(Error::InvalidRequest("duration must be > 0, got 0".to_string()));
        }

        Ok(Request { start, end, size_gbps, duration, arrival_time })
    }
}
