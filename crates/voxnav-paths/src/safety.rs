//! Lazy Theta* with safety cost.
//!
//! Line of sight is checked once per expansion instead of once per edge:
//! a neighbour optimistically inherits its discoverer's parent, and the
//! link is only verified (and repaired) when the neighbour is expanded.

use voxnav_core::Coord;

use crate::config::SearchConfig;
use crate::distance::{edge_cost, step_cost};
use crate::los::line_of_sight;
use crate::node::NodeId;
use crate::search::ExpansionPolicy;
use crate::traits::SearchGrid;

/// Accumulated cost above which a neighbour's risk starts being attenuated.
pub const SAFETY_BAND_START: u32 = 100;
/// Accumulated cost above which the stronger attenuation applies (3D only).
pub const SAFETY_BAND_MID: u32 = 150;
/// Accumulated cost from which risk is no longer attenuated (3D only).
pub const SAFETY_BAND_END: u32 = 200;

const NEAR_DIVISOR: f32 = 1.4142;
const FAR_DIVISOR: f32 = 1.73;

/// Lazy Theta* policy blending per-cell risk into path cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SafetyCost;

impl SafetyCost {
    /// Neighbour risk after distance-dependent attenuation.
    ///
    /// The bands are exclusive: a cost of exactly 150 or 200 keeps the full
    /// risk in the 3D modes.
    pub fn attenuated_risk(risk: f32, accumulated: u32, planar: bool) -> f32 {
        if planar {
            if accumulated > SAFETY_BAND_START {
                risk / NEAR_DIVISOR
            } else {
                risk
            }
        } else if accumulated > SAFETY_BAND_START && accumulated < SAFETY_BAND_MID {
            risk / NEAR_DIVISOR
        } else if accumulated > SAFETY_BAND_MID && accumulated < SAFETY_BAND_END {
            risk / FAR_DIVISOR
        } else {
            risk
        }
    }

    /// Safety term added to a freshly discovered neighbour's cost.
    pub fn edge_safety(current_risk: f32, neighbour_risk: f32, accumulated: u32, planar: bool) -> f32 {
        let blended = current_risk + Self::attenuated_risk(neighbour_risk, accumulated, planar);
        blended / (2.0 * SAFETY_BAND_START as f32) * accumulated as f32
    }

    #[inline]
    fn weighted_risk(config: &SearchConfig, risk: f32) -> u32 {
        (config.cost_weight * risk) as u32
    }
}

impl ExpansionPolicy for SafetyCost {
    fn name(&self) -> &'static str {
        "lazythetastar"
    }

    fn provisional_cost<G: SearchGrid + ?Sized>(
        &self,
        grid: &G,
        current: NodeId,
        neighbour: NodeId,
        dir: Coord,
        config: &SearchConfig,
    ) -> u32 {
        let cur = grid.node(current);
        let accumulated = cur.g.saturating_add(step_cost(dir));
        let safety = Self::edge_safety(
            cur.risk,
            grid.node(neighbour).risk,
            accumulated,
            config.connectivity.is_planar(),
        );
        // `accumulated` already contains `cur.g`; it is counted twice.
        (cur.g.saturating_add(accumulated) as f32 + safety) as u32
    }

    fn validate_vertex<G: SearchGrid + ?Sized>(&self, grid: &mut G, current: NodeId, config: &SearchConfig) {
        let node = grid.node(current);
        let Some(parent) = node.parent else {
            return;
        };
        let here = node.coord();
        if line_of_sight(grid, grid.node(parent).coord(), here, config.max_line_of_sight) {
            return;
        }

        let mut best: Option<(NodeId, u32)> = None;
        for c in config.connectivity.around(here) {
            let Some(id) = grid.node_id(c) else {
                continue;
            };
            let n = grid.node(id);
            if n.occupied || !n.closed {
                continue;
            }
            let g = n
                .g
                .saturating_add(edge_cost(c, here))
                .saturating_add(Self::weighted_risk(config, n.risk));
            if best.is_none_or(|(_, b)| g < b) {
                best = Some((id, g));
            }
        }

        if let Some((id, g)) = best {
            let node = grid.node_mut(current);
            node.parent = Some(id);
            node.g = g;
        }
    }

    fn compute_cost<G: SearchGrid + ?Sized>(
        &self,
        grid: &mut G,
        current: NodeId,
        neighbour: NodeId,
        config: &SearchConfig,
    ) {
        let cur = grid.node(current);
        let Some(parent) = cur.parent else {
            return;
        };
        let risk = Self::weighted_risk(config, cur.risk);
        let p = grid.node(parent);
        let through_parent = p
            .g
            .saturating_add(edge_cost(p.coord(), grid.node(neighbour).coord()));
        let n = grid.node_mut(neighbour);
        if through_parent < n.g {
            n.parent = Some(parent);
            n.g = through_parent.saturating_add(risk);
        }
    }
}
