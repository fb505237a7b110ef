use voxnav_core::{Bounds, Coord};

use crate::frontier::Frontier;
use crate::node::{NodeId, SearchNode};

/// Node storage a search runs over.
///
/// Implementors own exactly one [`SearchNode`] per in-bounds cell plus one
/// reserved root slot, returned by [`root`](SearchGrid::root), that a search
/// uses as the synthetic parent of its start cell.
pub trait SearchGrid {
    /// Cells covered by the grid.
    fn bounds(&self) -> Bounds;

    /// Handle of the node at `c`, or `None` if `c` is out of bounds.
    fn node_id(&self, c: Coord) -> Option<NodeId>;

    /// Borrow a node. `id` must come from this grid.
    fn node(&self, id: NodeId) -> &SearchNode;

    /// Mutably borrow a node. `id` must come from this grid.
    fn node_mut(&mut self, id: NodeId) -> &mut SearchNode;

    /// Handle of the reserved root slot.
    fn root(&self) -> NodeId;

    /// Size of one cell in physical units.
    fn resolution(&self) -> f64;

    /// Clear open/closed flags, parents and costs of every node, including
    /// the root slot.
    fn reset(&mut self);

    /// Re-seat the root slot at `at` with no parent and zero cost.
    fn place_root(&mut self, at: Coord) -> NodeId {
        let id = self.root();
        *self.node_mut(id) = SearchNode::new(at);
        id
    }

    /// Whether `c` is blocked. Out-of-bounds cells count as blocked.
    fn is_occupied(&self, c: Coord) -> bool {
        self.node_id(c).is_none_or(|id| self.node(id).occupied)
    }

    /// Whether the node at `c` is in the open set.
    fn is_open(&self, c: Coord) -> bool {
        self.node_id(c).is_some_and(|id| self.node(id).open)
    }

    /// Whether the node at `c` is in the closed set.
    fn is_closed(&self, c: Coord) -> bool {
        self.node_id(c).is_some_and(|id| self.node(id).closed)
    }

    /// Set the open flag at `c`. No-op if out of bounds.
    fn set_open(&mut self, c: Coord, open: bool) {
        if let Some(id) = self.node_id(c) {
            self.node_mut(id).open = open;
        }
    }

    /// Set the closed flag at `c`. No-op if out of bounds.
    fn set_closed(&mut self, c: Coord, closed: bool) {
        if let Some(id) = self.node_id(c) {
            self.node_mut(id).closed = closed;
        }
    }
}

/// Side channel receiving a snapshot on every expansion.
///
/// Meant for visualisation or monitoring. The unit type is the no-op
/// observer used when nobody is listening.
pub trait SearchObserver {
    /// Called once per expanded node, after it has been closed.
    fn on_expand(&mut self, current: Coord, open: &Frontier, closed: &[Coord]);
}

impl SearchObserver for () {
    #[inline]
    fn on_expand(&mut self, _current: Coord, _open: &Frontier, _closed: &[Coord]) {}
}
