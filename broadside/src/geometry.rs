// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pure coordinate math for ship footprints and weapon patterns.
//!
//! Nothing in here knows about cell contents. Functions return every coordinate a
//! pattern covers, even ones that fall off the board, and leave it to the caller to
//! decide whether that invalidates the whole pattern or only the stray cells.

use crate::board::{Coordinate, Dimensions};

/// Rotation of a ship or weapon pattern, in 90 degree steps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// 0 degrees. Ships run top to bottom, torpedoes sweep a row.
    None,
    /// 90 degrees. Ships run diagonally down and to the right, torpedoes sweep a
    /// column.
    Diag,
    /// 180 degrees. Ships run left to right, torpedoes sweep a row.
    Flip,
    /// 270 degrees. Ships run diagonally down and to the left, torpedoes sweep a
    /// column.
    Antidiag,
}

impl Orientation {
    /// All orientations in rotation order.
    pub const ALL: &'static [Orientation] = &[
        Orientation::None,
        Orientation::Diag,
        Orientation::Flip,
        Orientation::Antidiag,
    ];

    /// The next orientation, 90 degrees further. Wraps from 270 back to 0.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::None => Orientation::Diag,
            Orientation::Diag => Orientation::Flip,
            Orientation::Flip => Orientation::Antidiag,
            Orientation::Antidiag => Orientation::None,
        }
    }

    /// The rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::None => 0,
            Orientation::Diag => 90,
            Orientation::Flip => 180,
            Orientation::Antidiag => 270,
        }
    }

    /// Look up the orientation for an angle in degrees, if it is one of the four
    /// supported rotations.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.degrees() == degrees)
    }

    /// Returns true for the orientations whose line patterns run along a row.
    pub fn is_row_aligned(self) -> bool {
        matches!(self, Orientation::None | Orientation::Flip)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::None
    }
}

/// Enumerate the cells covered by a ship of length `len` centered on `center`.
///
/// The center is the cell at index `len / 2`, so even-length ships extend one cell
/// further before the center than after it.
pub fn ship_cells(center: Coordinate, orientation: Orientation, len: usize) -> Vec<Coordinate> {
    let offset = (len / 2) as i32;
    (0..len as i32)
        .map(|i| match orientation {
            Orientation::None => center.offset(-offset + i, 0),
            Orientation::Diag => center.offset(-offset + i, -offset + i),
            Orientation::Flip => center.offset(0, -offset + i),
            Orientation::Antidiag => center.offset(-offset + i, offset - i),
        })
        .collect()
}

/// Returns true if every cell of the ship lies on the board.
pub fn ship_fits(dim: &Dimensions, center: Coordinate, orientation: Orientation, len: usize) -> bool {
    ship_cells(center, orientation, len)
        .into_iter()
        .all(|coord| dim.contains(coord))
}

/// Cells swept by a torpedo aimed at `aim`: the whole row for row-aligned
/// orientations, the whole column otherwise.
pub fn torpedo_cells(dim: &Dimensions, aim: Coordinate, orientation: Orientation) -> Vec<Coordinate> {
    if orientation.is_row_aligned() {
        (0..dim.cols() as i32)
            .map(|col| Coordinate::new(aim.row, col))
            .collect()
    } else {
        (0..dim.rows() as i32)
            .map(|row| Coordinate::new(row, aim.col))
            .collect()
    }
}

/// Cells struck by a cluster bomb centered on `aim`.
///
/// `None` and `Flip` hit the two diagonals of the surrounding 3x3 block, `Diag` and
/// `Antidiag` hit the center row and column of it. The center appears once.
pub fn cluster_cells(aim: Coordinate, orientation: Orientation) -> Vec<Coordinate> {
    let mut cells = Vec::with_capacity(5);
    for i in -1..=1 {
        let pair = if orientation.is_row_aligned() {
            [aim.offset(i, i), aim.offset(i, -i)]
        } else {
            [aim.offset(0, i), aim.offset(i, 0)]
        };
        for &coord in &pair {
            if !cells.contains(&coord) {
                cells.push(coord);
            }
        }
    }
    cells
}

/// A cluster bomb may only be dropped where both the upper-left and lower-right corners
/// of its 3x3 block are on the board.
pub fn cluster_corners_fit(dim: &Dimensions, aim: Coordinate) -> bool {
    dim.contains(aim.offset(-1, -1)) && dim.contains(aim.offset(1, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(i32, i32)]) -> Vec<Coordinate> {
        pairs.iter().map(|&p| Coordinate::from(p)).collect()
    }

    #[test]
    fn rotation_cycles_through_all_four() {
        let mut o = Orientation::None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(o.degrees());
            o = o.rotated();
        }
        assert_eq!(seen, vec![0, 90, 180, 270]);
        assert_eq!(o, Orientation::None);
        assert_eq!(Orientation::from_degrees(180), Some(Orientation::Flip));
        assert_eq!(Orientation::from_degrees(45), None);
    }

    #[test]
    fn carrier_upright_spans_column() {
        assert_eq!(
            ship_cells(Coordinate::new(4, 4), Orientation::None, 5),
            coords(&[(2, 4), (3, 4), (4, 4), (5, 4), (6, 4)])
        );
    }

    #[test]
    fn patrol_extends_before_center() {
        assert_eq!(
            ship_cells(Coordinate::new(2, 8), Orientation::None, 2),
            coords(&[(1, 8), (2, 8)])
        );
        assert_eq!(
            ship_cells(Coordinate::new(2, 8), Orientation::Flip, 2),
            coords(&[(2, 7), (2, 8)])
        );
    }

    #[test]
    fn diagonal_orientations() {
        assert_eq!(
            ship_cells(Coordinate::new(4, 7), Orientation::Diag, 3),
            coords(&[(3, 6), (4, 7), (5, 8)])
        );
        assert_eq!(
            ship_cells(Coordinate::new(2, 2), Orientation::Antidiag, 4),
            coords(&[(0, 4), (1, 3), (2, 2), (3, 1)])
        );
    }

    #[test]
    fn fit_checks_every_cell() {
        let dim = Dimensions::default();
        assert!(ship_fits(&dim, Coordinate::new(2, 0), Orientation::None, 5));
        assert!(!ship_fits(&dim, Coordinate::new(1, 0), Orientation::None, 5));
        assert!(!ship_fits(&dim, Coordinate::new(5, 0), Orientation::Diag, 3));
        assert!(!ship_fits(&dim, Coordinate::new(5, 9), Orientation::Antidiag, 3));
        assert!(ship_fits(&dim, Coordinate::new(5, 8), Orientation::Antidiag, 3));
    }

    #[test]
    fn torpedo_sweeps_row_or_column() {
        let dim = Dimensions::default();
        let row = torpedo_cells(&dim, Coordinate::new(3, 7), Orientation::None);
        assert_eq!(row.len(), 10);
        assert!(row.iter().all(|c| c.row == 3));
        assert_eq!(row, torpedo_cells(&dim, Coordinate::new(3, 0), Orientation::Flip));

        let col = torpedo_cells(&dim, Coordinate::new(3, 7), Orientation::Antidiag);
        assert_eq!(col.len(), 10);
        assert!(col.iter().all(|c| c.col == 7));
    }

    #[test]
    fn cluster_patterns() {
        let aim = Coordinate::new(5, 5);
        let mut diag = cluster_cells(aim, Orientation::None);
        diag.sort();
        assert_eq!(diag, coords(&[(4, 4), (4, 6), (5, 5), (6, 4), (6, 6)]));

        let mut cross = cluster_cells(aim, Orientation::Diag);
        cross.sort();
        assert_eq!(cross, coords(&[(4, 5), (5, 4), (5, 5), (5, 6), (6, 5)]));
    }

    #[test]
    fn cluster_corner_rule() {
        let dim = Dimensions::default();
        assert!(!cluster_corners_fit(&dim, Coordinate::new(0, 0)));
        assert!(!cluster_corners_fit(&dim, Coordinate::new(9, 5)));
        assert!(cluster_corners_fit(&dim, Coordinate::new(1, 1)));
        assert!(cluster_corners_fit(&dim, Coordinate::new(5, 5)));
    }
}
