use crate::domain::topology::{NodeId, Topology};

/// Number of 12.5GHz frequency slots per link.
pub const N_SLOTS: usize = 320;

/// State of a single frequency slot on a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Free,
    Occupied,
}

/// A live reservation of a contiguous slot range across every link of a path.
///
/// Handed out by [`SpectrumManager::reserve`] and owned by the simulation
/// loop until the holding time of its request ends, at which point it is
/// passed back to [`SpectrumManager::release`] exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Unique id, monotonically increasing over the lifetime of the manager.
    pub id: u64,

    /// Node sequence of the routed path, endpoints inclusive.
    pub path: Vec<NodeId>,

    /// First slot index of the reserved range.
    pub start_slot: usize,

    /// Number of consecutive slots reserved on every link of the path.
    pub n_slots: usize,
}

/// Owner of the per-link slot occupancy grid.
///
/// The grid mirrors the link length matrix: an ordered node pair with a link
/// holds an array of `N_SLOTS` slot states, a pair without a link holds
/// nothing. Slot arrays of distinct links are fully independent; paths are
/// the only thing coupling them.
#[derive(Debug)]
pub struct SpectrumManager {
    state: Vec<Vec<Option<Vec<SlotState>>>>,
    next_id: u64,
}

impl SpectrumManager {
    /// Builds the occupancy grid for every link the topology defines, all
    /// slots free.
    pub fn new(topology: &Topology) -> Self {
        log::debug!("Generating spectrum occupancy grid for {} nodes", topology.n_nodes());

        let n_nodes = topology.n_nodes();
        let mut state: Vec<Vec<Option<Vec<SlotState>>>> = Vec::with_capacity(n_nodes);

        for u in 0..n_nodes {
            let mut row: Vec<Option<Vec<SlotState>>> = Vec::with_capacity(n_nodes);

            for v in 0..n_nodes {
                if topology.has_link(u, v) {
                    row.push(Some(vec![SlotState::Free; N_SLOTS]));
                } else {
                    row.push(None);
                }
            }

            state.push(row);
        }

        SpectrumManager { state, next_id: 1 }
    }

    /// Slot array of the link `u -> v`, if that link exists.
    pub fn link(&self, u: NodeId, v: NodeId) -> Option<&[SlotState]> {
        self.state.get(u)?.get(v)?.as_deref()
    }

    /// Finds the lowest start index at which `n_slots` consecutive slots are
    /// free on **every** link along `path`.
    ///
    /// # Returns
    /// The first-fit start index, or `None` when `n_slots` is zero or larger
    /// than a link, when any consecutive pair on the path has no link, or
    /// when no common free range exists. All of these are blocked-request
    /// outcomes for the caller, not errors.
    pub fn find_first_fit(&self, path: &[NodeId], n_slots: usize) -> Option<usize> {
        if n_slots == 0 || n_slots > N_SLOTS {
            return None;
        }

        let mut links: Vec<&[SlotState]> = Vec::with_capacity(path.len().saturating_sub(1));

        for pair in path.windows(2) {
            links.push(self.link(pair[0], pair[1])?);
        }

        let last_start = N_SLOTS - n_slots;

        for start in 0..=last_start {
            let mut fits = true;

            for link in &links {
                if link[start..start + n_slots].iter().any(|slot| *slot == SlotState::Occupied) {
                    fits = false;
                    break;
                }
            }

            if fits {
                return Some(start);
            }
        }

        return None;
    }

    /// Marks the slot range occupied on every link of `path` and returns the
    /// allocation handle for the later release.
    ///
    /// Must only be called with parameters a preceding [`find_first_fit`]
    /// returned; the range is not re-validated here.
    ///
    /// [`find_first_fit`]: SpectrumManager::find_first_fit
    pub fn reserve(&mut self, path: &[NodeId], start_slot: usize, n_slots: usize) -> Allocation {
        let id = self.next_id;
        self.next_id += 1;

        for pair in path.windows(2) {
            match self.state[pair[0]][pair[1]].as_mut() {
                Some(link) => {
                    for slot in &mut link[start_slot..start_slot + n_slots] {
                        *slot = SlotState::Occupied;
                    }
                }
                None => {
                    log::error!("Reserve touched non-existent link {} -> {}. A fit was reported for a path the grid does not cover.", pair[0], pair[1]);
                }
            }
        }

        Allocation { id, path: path.to_vec(), start_slot, n_slots }
    }

    /// Frees the slot range of a previous reservation on every link of its
    /// path.
    ///
    /// A link that no longer exists is logged and skipped so the remaining
    /// links of the allocation still get freed.
    pub fn release(&mut self, allocation: &Allocation) {
        for pair in allocation.path.windows(2) {
            let link = self.state.get_mut(pair[0]).and_then(|row| row.get_mut(pair[1])).and_then(|entry| entry.as_mut());

            match link {
                Some(link) => {
                    for slot in &mut link[allocation.start_slot..allocation.start_slot + allocation.n_slots] {
                        *slot = SlotState::Free;
                    }
                }
                None => {
                    log::error!("Tried to release allocation {} on non-existent link {} -> {}", allocation.id, pair[0], pair[1]);
                }
            }
        }
    }

    /// Count of free slots on a link (debug helper).
    pub fn free_slots_on_link(&self, u: NodeId, v: NodeId) -> usize {
        match self.link(u, v) {
            Some(link) => link.iter().filter(|slot| **slot == SlotState::Free).count(),
            None => 0,
        }
    }

    /// Function is used for testing.
    pub fn set_slot_state(&mut self, u: NodeId, v: NodeId, slot: usize, state: SlotState) {
        match self.state[u][v].as_mut() {
            Some(link) => link[slot] = state,
            None => panic!("Link {} -> {} does not exist.", u, v),
        }
    }
}
