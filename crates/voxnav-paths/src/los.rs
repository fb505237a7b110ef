//! Line of sight between grid cells.
//!
//! Visibility is decided on the digital line produced by 3D Bresenham
//! stepping: the dominant axis advances every step and the two minor axes
//! advance when their error terms cross zero.

use voxnav_core::Coord;

use crate::traits::SearchGrid;

#[inline]
fn to_array(c: Coord) -> [i32; 3] {
    [c.x, c.y, c.z]
}

#[inline]
fn from_array(a: [i32; 3]) -> Coord {
    Coord::new(a[0], a[1], a[2])
}

// ---------------------------------------------------------------------------
// Line3
// ---------------------------------------------------------------------------

/// Cells of the 3D Bresenham line from `start` to `end`.
///
/// Yields every cell after `start`, ending with `end`. A line from a cell
/// to itself yields nothing.
#[derive(Clone, Debug)]
pub struct Line3 {
    cur: [i32; 3],
    step: [i32; 3],
    delta: [i32; 3],
    major: usize,
    minors: [usize; 2],
    err: [i32; 2],
    remaining: u32,
}

impl Line3 {
    pub fn new(start: Coord, end: Coord) -> Self {
        let d = to_array(end - start);
        let delta = d.map(i32::abs);
        let step = d.map(i32::signum);
        let major = if delta[0] >= delta[1] && delta[0] >= delta[2] {
            0
        } else if delta[1] >= delta[2] {
            1
        } else {
            2
        };
        let minors = match major {
            0 => [1, 2],
            1 => [0, 2],
            _ => [0, 1],
        };
        let err = minors.map(|m| 2 * delta[m] - delta[major]);
        Self {
            cur: to_array(start),
            step,
            delta,
            major,
            minors,
            err,
            remaining: delta[major] as u32,
        }
    }
}

impl Iterator for Line3 {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.cur[self.major] += self.step[self.major];
        for (err, &m) in self.err.iter_mut().zip(self.minors.iter()) {
            if *err >= 0 {
                self.cur[m] += self.step[m];
                *err -= 2 * self.delta[self.major];
            }
            *err += 2 * self.delta[m];
        }
        Some(from_array(self.cur))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Line3 {}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Whether `a` and `b` see each other within `max_cells` steps.
///
/// The line is always walked from the smaller coordinate to the larger, so
/// the answer does not depend on argument order. Both endpoints and every
/// cell between them must be free and in bounds, and the line may take at
/// most `max_cells` steps. A cell always sees itself.
pub fn line_of_sight<G: SearchGrid + ?Sized>(grid: &G, a: Coord, b: Coord, max_cells: u32) -> bool {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    if grid.is_occupied(start) {
        return false;
    }
    let mut walked = 0u32;
    for cell in Line3::new(start, end) {
        walked += 1;
        if walked > max_cells || grid.is_occupied(cell) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::DiscreteWorld;
    use voxnav_core::Bounds;

    fn open_world() -> DiscreteWorld {
        DiscreteWorld::new(Coord::new(12, 12, 6), 1.0).unwrap()
    }

    #[test]
    fn line_ends_on_target() {
        let cells: Vec<_> = Line3::new(Coord::new(0, 0, 0), Coord::new(3, 1, 0)).collect();
        assert_eq!(
            cells,
            vec![Coord::new(1, 0, 0), Coord::new(2, 1, 0), Coord::new(3, 1, 0)]
        );
        for end in Bounds::new(Coord::new(-4, -4, -4), Coord::new(5, 5, 5)) {
            let line = Line3::new(Coord::new(1, 0, -1), end);
            let steps = line.len();
            let d = (end - Coord::new(1, 0, -1)).abs();
            assert_eq!(steps as i32, d.x.max(d.y).max(d.z));
            if steps > 0 {
                assert_eq!(line.last(), Some(end));
            }
        }
    }

    #[test]
    fn consecutive_cells_are_adjacent() {
        let start = Coord::new(0, 0, 0);
        let mut prev = start;
        for cell in Line3::new(start, Coord::new(7, -3, 5)) {
            let d = (cell - prev).abs();
            assert!(d.x <= 1 && d.y <= 1 && d.z <= 1);
            prev = cell;
        }
    }

    #[test]
    fn same_cell_is_visible() {
        let w = open_world();
        let c = Coord::new(4, 4, 2);
        assert!(line_of_sight(&w, c, c, 0));
        assert_eq!(Line3::new(c, c).count(), 0);
    }

    #[test]
    fn free_line_is_visible() {
        let w = open_world();
        assert!(line_of_sight(&w, Coord::new(0, 0, 0), Coord::new(11, 5, 3), 20));
    }

    #[test]
    fn obstacle_blocks_both_ways() {
        let mut w = open_world();
        w.set_occupied(Coord::new(5, 0, 0), true);
        let a = Coord::new(0, 0, 0);
        let b = Coord::new(10, 0, 0);
        assert!(!line_of_sight(&w, a, b, 20));
        assert!(!line_of_sight(&w, b, a, 20));
        assert!(line_of_sight(&w, a, Coord::new(4, 0, 0), 20));
    }

    #[test]
    fn distance_bound() {
        let w = open_world();
        let a = Coord::new(0, 0, 0);
        let b = Coord::new(9, 0, 0);
        assert!(line_of_sight(&w, a, b, 9));
        assert!(!line_of_sight(&w, a, b, 8));
        assert!(!line_of_sight(&w, Coord::new(0, 0, 0), Coord::new(1, 1, 1), 0));
    }

    #[test]
    fn occupied_endpoint_or_out_of_bounds_blocks() {
        let mut w = open_world();
        w.set_occupied(Coord::new(3, 3, 3), true);
        assert!(!line_of_sight(&w, Coord::new(0, 0, 0), Coord::new(3, 3, 3), 10));
        assert!(!line_of_sight(&w, Coord::new(3, 3, 3), Coord::new(0, 0, 0), 10));
        assert!(!line_of_sight(&w, Coord::new(0, 0, 0), Coord::new(-2, 0, 0), 10));
    }

    #[test]
    fn symmetric_with_scattered_obstacles() {
        let mut w = open_world();
        for (i, c) in w.bounds().iter().enumerate() {
            if i % 7 == 3 {
                w.set_occupied(c, true);
            }
        }
        let cells: Vec<_> = w.bounds().iter().step_by(11).collect();
        for &a in &cells {
            for &b in &cells {
                assert_eq!(
                    line_of_sight(&w, a, b, 30),
                    line_of_sight(&w, b, a, 30),
                    "{a} <-> {b}"
                );
            }
        }
    }
}
