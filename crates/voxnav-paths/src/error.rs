//! Error types for grid construction and path search.

use std::fmt;

use thiserror::Error;
use voxnav_core::{Bounds, Coord};

/// Which end of a query a [`SearchError`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Errors rejected before a search touches the grid.
///
/// An unreachable target is not an error: it yields an unsolved
/// [`PathData`](crate::PathData).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// Endpoint lies outside the grid.
    #[error("{endpoint} {coord} is outside the grid bounds {bounds}")]
    OutOfBounds {
        endpoint: Endpoint,
        coord: Coord,
        bounds: Bounds,
    },

    /// Endpoint cell is occupied.
    #[error("{endpoint} {coord} is occupied")]
    Occupied { endpoint: Endpoint, coord: Coord },

    /// Tuning parameters are unusable.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Errors building a [`DiscreteWorld`](crate::DiscreteWorld).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldError {
    /// The requested bounds hold no cells.
    #[error("grid bounds {0} contain no cells")]
    EmptyBounds(Bounds),

    /// Cell size must be a positive, finite number.
    #[error("invalid resolution: {0} (must be finite and > 0)")]
    InvalidResolution(f64),
}

/// Result type for search operations.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
