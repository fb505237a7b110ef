use voxnav_core::Coord;

const fn c(x: i32, y: i32, z: i32) -> Coord {
    Coord::new(x, y, z)
}

/// All 26 unit steps: 6 axis-aligned, then 12 planar diagonals, then 8 cubic
/// diagonals. The 6- and 18-connected sets are prefixes of this table.
const DIRS_3D: [Coord; 26] = [
    c(0, 1, 0),
    c(0, -1, 0),
    c(1, 0, 0),
    c(-1, 0, 0),
    c(0, 0, 1),
    c(0, 0, -1),
    c(1, 1, 0),
    c(-1, -1, 0),
    c(1, -1, 0),
    c(-1, 1, 0),
    c(0, 1, 1),
    c(0, -1, -1),
    c(0, 1, -1),
    c(0, -1, 1),
    c(1, 0, 1),
    c(-1, 0, -1),
    c(1, 0, -1),
    c(-1, 0, 1),
    c(1, 1, 1),
    c(-1, -1, -1),
    c(1, 1, -1),
    c(-1, -1, 1),
    c(1, -1, 1),
    c(-1, 1, -1),
    c(-1, 1, 1),
    c(1, -1, -1),
];

/// Planar 8-connectivity: 4 axis-aligned, then 4 diagonals, all at dz = 0.
const DIRS_FLAT: [Coord; 8] = [
    c(0, 1, 0),
    c(0, -1, 0),
    c(1, 0, 0),
    c(-1, 0, 0),
    c(1, 1, 0),
    c(-1, -1, 0),
    c(1, -1, 0),
    c(-1, 1, 0),
];

/// Which cells count as neighbours of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Connectivity {
    /// Face neighbours only.
    Six,
    /// Face and edge neighbours.
    Eighteen,
    /// Face, edge and corner neighbours.
    #[default]
    TwentySix,
    /// 8-connected moves within one z layer.
    Flat8,
}

impl Connectivity {
    /// Unit steps to every neighbour, axis-aligned steps first.
    #[inline]
    pub fn directions(self) -> &'static [Coord] {
        match self {
            Self::Six => &DIRS_3D[..6],
            Self::Eighteen => &DIRS_3D[..18],
            Self::TwentySix => &DIRS_3D,
            Self::Flat8 => &DIRS_FLAT,
        }
    }

    /// Whether moves stay within a single z layer.
    #[inline]
    pub fn is_planar(self) -> bool {
        matches!(self, Self::Flat8)
    }

    /// Neighbour cells of `p`, in direction order. No bounds filtering.
    #[inline]
    pub fn around(self, p: Coord) -> impl Iterator<Item = Coord> {
        self.directions().iter().map(move |&d| p + d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn direction_counts() {
        assert_eq!(Connectivity::Six.directions().len(), 6);
        assert_eq!(Connectivity::Eighteen.directions().len(), 18);
        assert_eq!(Connectivity::TwentySix.directions().len(), 26);
        assert_eq!(Connectivity::Flat8.directions().len(), 8);
    }

    #[test]
    fn directions_are_grouped_by_axes() {
        let dirs = Connectivity::TwentySix.directions();
        let unique: HashSet<_> = dirs.iter().collect();
        assert_eq!(unique.len(), 26);
        for (i, d) in dirs.iter().enumerate() {
            let expected = if i < 6 {
                1
            } else if i < 18 {
                2
            } else {
                3
            };
            assert_eq!(d.nonzero_axes(), expected, "direction {i}: {d}");
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && d.z.abs() <= 1);
        }
    }

    #[test]
    fn flat_stays_in_layer() {
        let dirs = Connectivity::Flat8.directions();
        assert!(dirs.iter().all(|d| d.z == 0));
        assert!(dirs[..4].iter().all(|d| d.nonzero_axes() == 1));
        assert!(dirs[4..].iter().all(|d| d.nonzero_axes() == 2));
        assert!(Connectivity::Flat8.is_planar());
        assert!(!Connectivity::Six.is_planar());
    }

    #[test]
    fn around_offsets_point() {
        let p = Coord::new(5, 5, 5);
        let n: Vec<_> = Connectivity::Six.around(p).collect();
        assert_eq!(n[0], Coord::new(5, 6, 5));
        assert_eq!(n[5], Coord::new(5, 5, 4));
    }
}
