//! The open set, ordered by score with deterministic tie-breaks.

use std::collections::{BTreeSet, HashMap};

use voxnav_core::Coord;

use crate::node::NodeId;
use crate::traits::SearchGrid;

/// Snapshot of the fields a node is ordered by.
///
/// Field order is the sort order: score, then the node's own coordinate,
/// then its parent's coordinate (`None` first). The handle only breaks ties
/// between entries that would otherwise be equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    score: u32,
    coord: Coord,
    parent: Option<Coord>,
    id: NodeId,
}

impl FrontierKey {
    fn of<G: SearchGrid + ?Sized>(grid: &G, id: NodeId) -> Self {
        let node = grid.node(id);
        Self {
            score: node.score(),
            coord: node.coord(),
            parent: node.parent.map(|p| grid.node(p).coord()),
            id,
        }
    }
}

/// Ordered open set of node handles.
///
/// Keys are snapshots, so a node whose `g`, `h` or parent changed while
/// queued must be passed to [`refresh`](Frontier::refresh) to be re-ordered.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    set: BTreeSet<FrontierKey>,
    keys: HashMap<NodeId, FrontierKey>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Whether `id` is queued.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.keys.contains_key(&id)
    }

    /// Queue `id` under its current fields. Re-queues it if already present.
    pub fn push<G: SearchGrid + ?Sized>(&mut self, grid: &G, id: NodeId) {
        self.remove(id);
        let key = FrontierKey::of(grid, id);
        self.set.insert(key);
        self.keys.insert(id, key);
    }

    /// Re-order `id` after its fields changed. No-op if it is not queued.
    pub fn refresh<G: SearchGrid + ?Sized>(&mut self, grid: &G, id: NodeId) {
        if self.contains(id) {
            self.push(grid, id);
        }
    }

    /// Drop `id` from the queue. Returns whether it was queued.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.keys.remove(&id) {
            Some(key) => self.set.remove(&key),
            None => false,
        }
    }

    /// Remove and return the minimum node.
    pub fn pop(&mut self) -> Option<NodeId> {
        let key = self.set.pop_first()?;
        self.keys.remove(&key.id);
        Some(key.id)
    }

    /// Handle of the minimum node, without removing it.
    pub fn peek(&self) -> Option<NodeId> {
        self.set.first().map(|k| k.id)
    }

    /// Queued coordinates, best first.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.set.iter().map(|k| k.coord)
    }

    /// Empty the queue.
    pub fn clear(&mut self) {
        self.set.clear();
        self.keys.clear();
    }
}
