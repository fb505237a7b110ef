//! Scaled integer distances, heuristics and physical path length.
//!
//! Costs are fixed-point: one cell of axis-aligned travel is
//! [`DIST_SCALE`] units, so accumulating `g` never drifts the way repeated
//! floating-point addition would.

use voxnav_core::Coord;

/// Cost of one axis-aligned step.
pub const DIST_SCALE: u32 = 100;

/// Cost of one planar diagonal step, `DIST_SCALE·√2` truncated.
pub const DIAG_2D: u32 = (DIST_SCALE as f64 * std::f64::consts::SQRT_2) as u32;

/// Cost of one cubic diagonal step, `DIST_SCALE·√3` truncated.
pub const DIAG_3D: u32 = (DIST_SCALE as f64 * 1.732_050_807_568_877_2) as u32;

/// Scaled Euclidean distance between two cells, truncated.
///
/// Agrees with [`step_cost`] for unit steps.
#[inline]
pub fn edge_cost(a: Coord, b: Coord) -> u32 {
    (DIST_SCALE as f64 * (b - a).length()) as u32
}

/// Cost of a unit step, picked by how many axes it moves along.
#[inline]
pub fn step_cost(dir: Coord) -> u32 {
    match dir.nonzero_axes() {
        0 => 0,
        1 => DIST_SCALE,
        2 => DIAG_2D,
        _ => DIAG_3D,
    }
}

/// Manhattan (L1) distance in scaled units.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    let d = (b - a).abs();
    DIST_SCALE * (d.x + d.y + d.z) as u32
}

/// 3D octile distance in scaled units: the cheapest 26-connected walk
/// ignoring obstacles.
#[inline]
pub fn octile(a: Coord, b: Coord) -> u32 {
    let d = (b - a).abs();
    let mut v = [d.x as u32, d.y as u32, d.z as u32];
    v.sort_unstable();
    let [lo, mid, hi] = v;
    DIAG_3D * lo + DIAG_2D * (mid - lo) + DIST_SCALE * (hi - mid)
}

/// Remaining-cost estimate used to order the frontier.
///
/// Once safety cost is folded into `g` none of these bound the true
/// remaining cost, so returned paths are not guaranteed optimal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    #[default]
    Euclidean,
    Octile,
    Manhattan,
    /// Always zero: uniform-cost search.
    Dijkstra,
}

impl Heuristic {
    /// Estimate from `from` to `to` in scaled units.
    #[inline]
    pub fn estimate(self, from: Coord, to: Coord) -> u32 {
        match self {
            Self::Euclidean => edge_cost(from, to),
            Self::Octile => octile(from, to),
            Self::Manhattan => manhattan(from, to),
            Self::Dijkstra => 0,
        }
    }
}

/// Physical length of a polyline of cells.
///
/// Sums the Euclidean distance between consecutive cells and scales by the
/// size of one cell.
pub fn path_length(path: &[Coord], resolution: f64) -> f64 {
    path.windows(2)
        .map(|w| (w[1] - w[0]).length())
        .sum::<f64>()
        * resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_constants() {
        assert_eq!(DIST_SCALE, 100);
        assert_eq!(DIAG_2D, 141);
        assert_eq!(DIAG_3D, 173);
    }

    #[test]
    fn edge_cost_matches_unit_steps() {
        let o = Coord::ZERO;
        assert_eq!(edge_cost(o, Coord::new(0, 0, -1)), DIST_SCALE);
        assert_eq!(edge_cost(o, Coord::new(1, -1, 0)), DIAG_2D);
        assert_eq!(edge_cost(o, Coord::new(-1, 1, 1)), DIAG_3D);
        assert_eq!(edge_cost(o, Coord::new(9, 0, 0)), 900);
        assert_eq!(edge_cost(Coord::new(1, 1, 1), Coord::new(4, 5, 1)), 500);
    }

    #[test]
    fn step_cost_by_axes() {
        assert_eq!(step_cost(Coord::new(1, 0, 0)), 100);
        assert_eq!(step_cost(Coord::new(0, 1, -1)), 141);
        assert_eq!(step_cost(Coord::new(1, 1, 1)), 173);
    }

    #[test]
    fn heuristics() {
        let a = Coord::new(0, 0, 0);
        let b = Coord::new(3, 1, 2);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 600);
        assert_eq!(Heuristic::Octile.estimate(a, b), 173 + 141 + 100);
        assert_eq!(Heuristic::Euclidean.estimate(a, b), 374);
        assert_eq!(Heuristic::Dijkstra.estimate(a, b), 0);
        assert_eq!(Heuristic::default(), Heuristic::Euclidean);
    }

    #[test]
    fn octile_never_exceeds_manhattan() {
        let a = Coord::new(2, -3, 1);
        for b in voxnav_core::Bounds::new(Coord::new(-2, -2, -2), Coord::new(3, 3, 3)) {
            assert!(octile(a, b) <= manhattan(a, b));
        }
    }

    #[test]
    fn path_length_scales_by_resolution() {
        let path = [Coord::new(0, 0, 0), Coord::new(3, 4, 0), Coord::new(3, 4, 2)];
        assert!((path_length(&path, 0.5) - 3.5).abs() < 1e-12);
        assert_eq!(path_length(&path[..1], 0.5), 0.0);
        assert_eq!(path_length(&[], 0.5), 0.0);
    }
}
