//! **voxnav-core** — Core types for 3D occupancy-grid navigation.
//!
//! This crate provides the geometry primitives shared across the *voxnav*
//! workspace: discrete cell coordinates and the half-open boxes grids are
//! laid out over.

pub mod geom;

pub use geom::{Bounds, BoundsIter, Coord};
