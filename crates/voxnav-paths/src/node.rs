use voxnav_core::Coord;

/// Stable handle to a [`SearchNode`] owned by a grid arena.
///
/// Parent links are stored as handles, never as references, so nodes can be
/// reset and reused between searches without invalidating anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap an arena index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The arena index this handle points at.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Per-cell search state.
///
/// One node exists per grid cell for the lifetime of the grid. A search only
/// touches the transient fields (`parent`, `g`, `h`, `open`, `closed`), and
/// the grid's reset restores them afterwards. `risk` and `occupied` belong to
/// the map and are never written by a search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode {
    coord: Coord,
    pub parent: Option<NodeId>,
    /// Accumulated cost from the start, in scaled units.
    pub g: u32,
    /// Heuristic estimate to the goal, in scaled units.
    pub h: u32,
    /// Static traversal risk ("safety cost") of the cell.
    pub risk: f32,
    pub occupied: bool,
    pub open: bool,
    pub closed: bool,
}

impl SearchNode {
    /// A free, zero-risk node with no search state.
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            parent: None,
            g: 0,
            h: 0,
            risk: 0.0,
            occupied: false,
            open: false,
            closed: false,
        }
    }

    /// The cell this node stands for.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Estimated total cost through this node.
    #[inline]
    pub fn score(&self) -> u32 {
        self.g.saturating_add(self.h)
    }

    /// Clear all transient search state, keeping identity, occupancy and risk.
    #[inline]
    pub fn clear_search_state(&mut self) {
        self.parent = None;
        self.g = 0;
        self.h = 0;
        self.open = false;
        self.closed = false;
    }
}
