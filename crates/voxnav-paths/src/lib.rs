//! Any-angle path search on 3D occupancy grids.
//!
//! The main algorithm is Lazy Theta* with a safety cost: a node may take
//! its grandparent as parent whenever the straight segment between them is
//! free, and every cell carries a risk value that is blended into path cost
//! so routes prefer to keep away from hazards.
//!
//! - **Search** driver and expansion policies ([`Search`], [`SafetyCost`])
//! - **Line of sight** by 3D Bresenham stepping ([`line_of_sight`], [`Line3`])
//! - **Grid storage** with per-cell occupancy and risk ([`DiscreteWorld`])
//! - **Result records** keyed by field name ([`PathData`])
//!
//! A search borrows its grid mutably and clears the grid's search state
//! before returning, so one grid can serve any number of consecutive
//! searches.
//!
//! # Seams
//!
//! | Trait | Implemented by | Purpose |
//! |---|---|---|
//! | [`SearchGrid`] | [`DiscreteWorld`] | node storage and occupancy |
//! | [`ExpansionPolicy`] | [`SafetyCost`] | cost and parent-link rules |
//! | [`SearchObserver`] | `()` | per-expansion snapshots |

mod config;
mod data;
mod distance;
mod error;
mod frontier;
mod los;
mod neighbors;
mod node;
mod safety;
mod search;
mod traits;
mod world;

pub use config::{DEFAULT_MAX_LINE_OF_SIGHT, SearchConfig};
pub use data::{DataValue, PathData, field};
pub use distance::{DIAG_2D, DIAG_3D, DIST_SCALE, Heuristic, edge_cost, manhattan, octile, path_length, step_cost};
pub use error::{Endpoint, SearchError, SearchResult, WorldError};
pub use frontier::Frontier;
pub use los::{Line3, line_of_sight};
pub use neighbors::Connectivity;
pub use node::{NodeId, SearchNode};
pub use safety::{SAFETY_BAND_END, SAFETY_BAND_MID, SAFETY_BAND_START, SafetyCost};
pub use search::{ExpansionPolicy, Search};
pub use traits::{SearchGrid, SearchObserver};
pub use voxnav_core::{Bounds, Coord};
pub use world::DiscreteWorld;
