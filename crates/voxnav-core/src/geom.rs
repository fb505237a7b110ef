//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! A `Coord` names one cell of a discrete 3D grid. A `Bounds` is the
//! half-open box of cells a grid covers.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 3D integer grid coordinate.
///
/// The derived ordering is lexicographic on `(x, y, z)`, which is the
/// tie-break order used by search frontiers. Component-wise comparison is
/// available through [`all_ge`](Coord::all_ge) and [`all_le`](Coord::all_le).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Whether every component is `>=` the matching component of `other`.
    #[inline]
    pub const fn all_ge(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }

    /// Whether every component is `<=` the matching component of `other`.
    #[inline]
    pub const fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    /// Component-wise absolute value.
    #[inline]
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Number of non-zero components (0 to 3).
    ///
    /// For a unit step this tells axis-aligned (1), planar diagonal (2) and
    /// cubic diagonal (3) moves apart.
    #[inline]
    pub const fn nonzero_axes(self) -> u32 {
        (self.x != 0) as u32 + (self.y != 0) as u32 + (self.z != 0) as u32
    }

    /// Euclidean length of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        (x * x + y * y + z * z).sqrt()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for Coord {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<i32> for Coord {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A half-open box \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    /// Create new bounds from two corners, canonicalised so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Bounds anchored at the origin with the given extent.
    #[inline]
    pub fn with_size(size: Coord) -> Self {
        Self::new(Coord::ZERO, size)
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(self) -> Coord {
        self.max - self.min
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let s = self.size();
        (s.x as usize) * (s.y as usize) * (s.z as usize)
    }

    /// Whether the box has zero volume.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y || self.min.z >= self.max.z
    }

    /// Whether `c` is inside the half-open box.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.all_ge(self.min) && c.x < self.max.x && c.y < self.max.y && c.z < self.max.z
    }

    /// Iterator over every cell, x fastest, then y, then z.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Coord,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.bounds.is_empty() || self.cur.z >= self.bounds.max.z {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.bounds.max.x {
            self.cur.x = self.bounds.min.x;
            self.cur.y += 1;
            if self.cur.y >= self.bounds.max.y {
                self.cur.y = self.bounds.min.y;
                self.cur.z += 1;
            }
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.z >= self.bounds.max.z {
            return (0, Some(0));
        }
        let s = self.bounds.size();
        let (w, h) = (s.x as usize, s.y as usize);
        let in_row = (self.bounds.max.x - self.cur.x) as usize;
        let rows_in_layer = (self.bounds.max.y - self.cur.y - 1) as usize;
        let layers = (self.bounds.max.z - self.cur.z - 1) as usize;
        let total = in_row + rows_in_layer * w + layers * w * h;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn bounds_serializes_as_corners() {
        let b = Bounds::with_size(Coord::new(4, 5, 6));
        let json = serde_json::to_value(b).unwrap();
        assert_eq!(json["max"]["z"], 6);
        let back: Bounds = serde_json::from_value(json).unwrap();
        assert_eq!(back, b);
    }
}
