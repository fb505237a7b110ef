use voxnav_core::{Bounds, Coord};

use crate::error::WorldError;
use crate::node::{NodeId, SearchNode};
use crate::traits::SearchGrid;

// ---------------------------------------------------------------------------
// DiscreteWorld
// ---------------------------------------------------------------------------

/// Dense occupancy grid owning one [`SearchNode`] per cell.
///
/// Nodes are stored x-fastest in a flat arena. The slot after the last cell
/// is the root slot searches use as the synthetic parent of their start, so
/// a search never allocates nodes of its own.
#[derive(Clone, Debug)]
pub struct DiscreteWorld {
    bounds: Bounds,
    size: Coord,
    resolution: f64,
    nodes: Vec<SearchNode>,
}

impl DiscreteWorld {
    /// Create a free, zero-risk world of `size` cells anchored at the origin.
    pub fn new(size: Coord, resolution: f64) -> Result<Self, WorldError> {
        Self::with_bounds(Bounds::with_size(size), resolution)
    }

    /// Create a free, zero-risk world covering `bounds`.
    pub fn with_bounds(bounds: Bounds, resolution: f64) -> Result<Self, WorldError> {
        if bounds.is_empty() {
            return Err(WorldError::EmptyBounds(bounds));
        }
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(WorldError::InvalidResolution(resolution));
        }
        let mut nodes: Vec<SearchNode> = bounds.iter().map(SearchNode::new).collect();
        nodes.push(SearchNode::new(bounds.min));
        Ok(Self {
            bounds,
            size: bounds.size(),
            resolution,
            nodes,
        })
    }

    /// Number of cells (the root slot is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Always false: construction rejects empty bounds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mark `c` as blocked or free. No-op if out of bounds.
    pub fn set_occupied(&mut self, c: Coord, occupied: bool) {
        if let Some(i) = self.idx(c) {
            self.nodes[i].occupied = occupied;
        }
    }

    /// Mark every cell of `region` that lies inside the world.
    pub fn fill_occupied(&mut self, region: Bounds, occupied: bool) {
        for c in region {
            self.set_occupied(c, occupied);
        }
    }

    /// Set the traversal risk of `c`. No-op if out of bounds.
    pub fn set_risk(&mut self, c: Coord, risk: f32) {
        if let Some(i) = self.idx(c) {
            self.nodes[i].risk = risk;
        }
    }

    /// Traversal risk of `c`, or `None` if out of bounds.
    pub fn risk(&self, c: Coord) -> Option<f32> {
        self.idx(c).map(|i| self.nodes[i].risk)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.nodes[..self.len()].iter().filter(|n| n.occupied).count()
    }

    /// Iterator over every cell node (the root slot excluded).
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.nodes[..self.len()].iter()
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat index. Returns `None` if out of bounds.
    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        let r = c - self.bounds.min;
        let (w, h) = (self.size.x as usize, self.size.y as usize);
        Some((r.z as usize * h + r.y as usize) * w + r.x as usize)
    }
}

impl SearchGrid for DiscreteWorld {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn node_id(&self, c: Coord) -> Option<NodeId> {
        self.idx(c).map(NodeId::new)
    }

    #[inline]
    fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    fn root(&self) -> NodeId {
        NodeId::new(self.nodes.len() - 1)
    }

    #[inline]
    fn resolution(&self) -> f64 {
        self.resolution
    }

    fn reset(&mut self) {
        for n in self.nodes.iter_mut() {
            n.clear_search_state();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> DiscreteWorld {
        DiscreteWorld::new(Coord::new(4, 3, 2), 0.5).unwrap()
    }

    #[test]
    fn rejects_degenerate_worlds() {
        assert_eq!(
            DiscreteWorld::new(Coord::new(4, 0, 2), 1.0).unwrap_err(),
            WorldError::EmptyBounds(Bounds::with_size(Coord::new(4, 0, 2)))
        );
        assert_eq!(
            DiscreteWorld::new(Coord::new(1, 1, 1), 0.0).unwrap_err(),
            WorldError::InvalidResolution(0.0)
        );
        assert!(DiscreteWorld::new(Coord::new(1, 1, 1), f64::NAN).is_err());
    }

    #[test]
    fn one_node_per_cell_plus_root() {
        let w = world();
        assert_eq!(w.len(), 24);
        assert_eq!(w.root(), NodeId::new(24));
        for c in w.bounds() {
            let id = w.node_id(c).unwrap();
            assert_eq!(w.node(id).coord(), c);
            assert_ne!(id, w.root());
        }
        assert_eq!(w.node_id(Coord::new(4, 0, 0)), None);
        assert_eq!(w.node_id(Coord::new(0, 0, -1)), None);
    }

    #[test]
    fn offset_bounds_index() {
        let b = Bounds::new(Coord::new(-2, 5, 1), Coord::new(1, 7, 3));
        let w = DiscreteWorld::with_bounds(b, 1.0).unwrap();
        for c in b {
            assert_eq!(w.node(w.node_id(c).unwrap()).coord(), c);
        }
    }

    #[test]
    fn occupancy_and_risk() {
        let mut w = world();
        let c = Coord::new(1, 2, 1);
        assert!(!w.is_occupied(c));
        w.set_occupied(c, true);
        assert!(w.is_occupied(c));
        assert!(w.is_occupied(Coord::new(9, 9, 9)));
        w.set_risk(c, 3.5);
        assert_eq!(w.risk(c), Some(3.5));
        assert_eq!(w.risk(Coord::new(9, 9, 9)), None);

        w.fill_occupied(Bounds::new(Coord::new(0, 0, 0), Coord::new(2, 3, 1)), true);
        assert_eq!(w.occupied_count(), 7);
    }

    #[test]
    fn flags_and_reset() {
        let mut w = world();
        let c = Coord::new(2, 1, 0);
        w.set_risk(c, 1.5);
        w.set_open(c, true);
        assert!(w.is_open(c));
        w.set_open(c, false);
        w.set_closed(c, true);
        assert!(w.is_closed(c));
        let id = w.node_id(c).unwrap();
        w.node_mut(id).g = 50;
        w.node_mut(id).parent = Some(w.root());
        let root = w.place_root(Coord::new(3, 2, 1));
        assert_eq!(w.node(root).coord(), Coord::new(3, 2, 1));

        w.reset();
        assert!(!w.is_open(c) && !w.is_closed(c));
        assert_eq!(w.node(id).parent, None);
        assert_eq!(w.node(id).g, 0);
        assert_eq!(w.risk(c), Some(1.5));
        assert!(w.iter().all(|n| !n.open && !n.closed && n.parent.is_none()));
    }

    #[test]
    fn out_of_bounds_flags_are_ignored() {
        let mut w = world();
        let c = Coord::new(-1, 0, 0);
        w.set_open(c, true);
        w.set_closed(c, true);
        assert!(!w.is_open(c));
        assert!(!w.is_closed(c));
    }
}
