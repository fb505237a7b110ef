//! The search driver shared by every expansion policy.

use std::ops::{Deref, DerefMut};
use std::time::Instant;

use log::{debug, trace, warn};
use voxnav_core::Coord;

use crate::config::SearchConfig;
use crate::data::{PathData, field};
use crate::distance::path_length;
use crate::error::{Endpoint, SearchError, SearchResult};
use crate::frontier::Frontier;
use crate::node::NodeId;
use crate::safety::SafetyCost;
use crate::traits::{SearchGrid, SearchObserver};

/// The pieces of the Theta* family that differ between variants.
///
/// The driver owns the loop: popping, closing, neighbour enumeration and
/// frontier upkeep. A policy decides costs and parent links.
pub trait ExpansionPolicy {
    /// Name written to the result record.
    fn name(&self) -> &'static str;

    /// `g` for `neighbour` when it is first reached from `current` by the
    /// unit step `dir`.
    fn provisional_cost<G: SearchGrid + ?Sized>(
        &self,
        grid: &G,
        current: NodeId,
        neighbour: NodeId,
        dir: Coord,
        config: &SearchConfig,
    ) -> u32;

    /// Check or repair `current`'s parent link right after it is closed.
    fn validate_vertex<G: SearchGrid + ?Sized>(&self, grid: &mut G, current: NodeId, config: &SearchConfig);

    /// Relax `neighbour` through `current` (or through its parent).
    fn compute_cost<G: SearchGrid + ?Sized>(
        &self,
        grid: &mut G,
        current: NodeId,
        neighbour: NodeId,
        config: &SearchConfig,
    );
}

// ---------------------------------------------------------------------------
// ResetOnDrop
// ---------------------------------------------------------------------------

/// Resets the grid when dropped, so every exit path (including a panic in
/// an observer) leaves it ready for the next search.
struct ResetOnDrop<'a, G: SearchGrid + ?Sized>(&'a mut G);

impl<G: SearchGrid + ?Sized> Deref for ResetOnDrop<'_, G> {
    type Target = G;
    fn deref(&self) -> &G {
        self.0
    }
}

impl<G: SearchGrid + ?Sized> DerefMut for ResetOnDrop<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.0
    }
}

impl<G: SearchGrid + ?Sized> Drop for ResetOnDrop<'_, G> {
    fn drop(&mut self) {
        self.0.reset();
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// How an exploration ended.
#[derive(Debug)]
pub(crate) struct Outcome {
    /// The goal node, if it was reached.
    pub(crate) goal: Option<NodeId>,
    /// Expanded nodes, in expansion order.
    pub(crate) closed: Vec<Coord>,
    pub(crate) line_of_sight_checks: usize,
}

/// Any-angle path search over a [`SearchGrid`].
///
/// The grid is borrowed mutably for the duration of a call, so two searches
/// can never run over the same grid at once. Its transient state is cleared
/// before the call returns.
#[derive(Clone, Debug)]
pub struct Search<P = SafetyCost> {
    config: SearchConfig,
    policy: P,
}

impl Search<SafetyCost> {
    /// Lazy Theta* with safety cost.
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        Self::with_policy(config, SafetyCost)
    }
}

impl<P: ExpansionPolicy> Search<P> {
    /// A search driven by a custom policy.
    pub fn with_policy(config: SearchConfig, policy: P) -> SearchResult<Self> {
        config.validate()?;
        Ok(Self { config, policy })
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Find a path from `source` to `target`.
    ///
    /// Fails fast if either endpoint is out of bounds or occupied. An
    /// unreachable target is not an error: the record reports
    /// `solved = false` with an empty path.
    pub fn find_path<G: SearchGrid + ?Sized>(
        &self,
        grid: &mut G,
        source: Coord,
        target: Coord,
    ) -> SearchResult<PathData> {
        self.find_path_observed(grid, source, target, &mut ())
    }

    /// [`find_path`](Self::find_path), reporting every expansion to
    /// `observer`.
    pub fn find_path_observed<G: SearchGrid + ?Sized, O: SearchObserver>(
        &self,
        grid: &mut G,
        source: Coord,
        target: Coord,
        observer: &mut O,
    ) -> SearchResult<PathData> {
        let src = checked_endpoint(&*grid, source, Endpoint::Source)?;
        checked_endpoint(&*grid, target, Endpoint::Target)?;

        let timer = Instant::now();
        let mut grid = ResetOnDrop(grid);
        let outcome = self.explore(&mut *grid, src, target, observer);
        let path = match outcome.goal {
            Some(goal) => reconstruct(&*grid, goal),
            None => Vec::new(),
        };
        let resolution = grid.resolution();
        drop(grid);
        let elapsed = timer.elapsed().as_secs_f64() * 1000.0;

        let solved = outcome.goal.is_some();
        if !solved {
            warn!(
                "no path from {source} to {target}: frontier exhausted after {} expansions",
                outcome.closed.len()
            );
        }

        let length = path_length(&path, resolution);
        debug!(
            "{}: {source} -> {target} solved={solved} waypoints={} explored={} los_checks={} length={length:.3} in {elapsed:.3}ms",
            self.policy.name(),
            path.len(),
            outcome.closed.len(),
            outcome.line_of_sight_checks,
        );

        let mut data = PathData::new();
        data.insert(field::SOLVED, solved);
        data.insert(field::ALGORITHM, self.policy.name());
        data.insert(field::START, source);
        data.insert(field::GOAL, target);
        data.insert(field::PATH, path);
        data.insert(field::TIME_SPENT, elapsed);
        data.insert(field::EXPLORED_NODES, outcome.closed.len());
        data.insert(field::PATH_LENGTH, length);
        data.insert(field::LINE_OF_SIGHT_CHECKS, outcome.line_of_sight_checks);
        Ok(data)
    }

    /// Run the search loop. Leaves the grid's search state in place.
    pub(crate) fn explore<G: SearchGrid + ?Sized, O: SearchObserver>(
        &self,
        grid: &mut G,
        src: NodeId,
        target: Coord,
        observer: &mut O,
    ) -> Outcome {
        let cfg = &self.config;
        let source = grid.node(src).coord();
        let root = grid.place_root(source);
        {
            let h = cfg.heuristic.estimate(source, target);
            let s = grid.node_mut(src);
            s.parent = Some(root);
            s.g = 0;
            s.h = h;
        }
        grid.set_open(source, true);

        let mut open = Frontier::new();
        open.push(grid, src);
        let mut closed = Vec::new();
        let mut line_of_sight_checks = 0;

        while let Some(current) = open.pop() {
            let here = grid.node(current).coord();

            if here == target {
                // Settle the goal's link too, so every path segment is
                // visible. The start's link to the root is trivially so.
                if current != src {
                    self.policy.validate_vertex(grid, current, cfg);
                    line_of_sight_checks += 1;
                }
                return Outcome {
                    goal: Some(current),
                    closed,
                    line_of_sight_checks,
                };
            }

            grid.set_open(here, false);
            grid.set_closed(here, true);
            closed.push(here);

            self.policy.validate_vertex(grid, current, cfg);
            line_of_sight_checks += 1;

            trace!(
                "expand {here} g={} h={} open={}",
                grid.node(current).g,
                grid.node(current).h,
                open.len()
            );
            observer.on_expand(here, &open, &closed);

            for &dir in cfg.connectivity.directions() {
                let next = here + dir;
                let Some(nb) = grid.node_id(next) else {
                    continue;
                };
                let n = grid.node(nb);
                if n.occupied || n.closed {
                    continue;
                }

                if !n.open {
                    let g = self.policy.provisional_cost(grid, current, nb, dir, cfg);
                    let h = cfg.heuristic.estimate(next, target);
                    let n = grid.node_mut(nb);
                    n.parent = Some(current);
                    n.g = g;
                    n.h = h;
                    grid.set_open(next, true);
                    open.push(grid, nb);
                }

                let before = (grid.node(nb).g, grid.node(nb).parent);
                self.policy.compute_cost(grid, current, nb, cfg);
                if (grid.node(nb).g, grid.node(nb).parent) != before {
                    open.refresh(grid, nb);
                }
            }
        }

        Outcome {
            goal: None,
            closed,
            line_of_sight_checks,
        }
    }
}

fn checked_endpoint<G: SearchGrid + ?Sized>(grid: &G, coord: Coord, endpoint: Endpoint) -> SearchResult<NodeId> {
    let Some(id) = grid.node_id(coord) else {
        return Err(SearchError::OutOfBounds {
            endpoint,
            coord,
            bounds: grid.bounds(),
        });
    };
    if grid.node(id).occupied {
        return Err(SearchError::Occupied { endpoint, coord });
    }
    Ok(id)
}

/// Walk parent links from `goal` back to the root, goal first.
///
/// The root slot sits on the start cell, so it only contributes a waypoint
/// when the chain did not already end there.
fn reconstruct<G: SearchGrid + ?Sized>(grid: &G, goal: NodeId) -> Vec<Coord> {
    let limit = grid.bounds().len() + 1;
    let mut path: Vec<Coord> = Vec::new();
    let mut next = Some(goal);
    while let Some(id) = next {
        if path.len() > limit {
            break;
        }
        let node = grid.node(id);
        if path.last() != Some(&node.coord()) {
            path.push(node.coord());
        }
        next = node.parent;
    }
    path
}
