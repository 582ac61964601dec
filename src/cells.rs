use smallvec::SmallVec;
use std::convert::From;

use crate::units::Width;

/// A position in grid space: walls and passages alike.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: u32,
    pub y: u32,
}

/// A passage cell addressed in the compact `width * height` space tracked by the disjoint set forest.
///
/// Logical cell `(x, y)` lives at grid cell `(2x + 1, 2y + 1)`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct LogicalCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<GridCoordinate>; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    Wall,
    Passage,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

pub const COMPASS_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                     CompassPrimary::South,
                                                     CompassPrimary::East,
                                                     CompassPrimary::West];

impl GridCoordinate {
    pub fn new(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    /// Both coordinates odd, i.e. a passage at initialisation time.
    #[inline]
    pub fn is_odd_odd(&self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable (negative).
    /// There is no upper bound check, that is the grid's job.
    pub fn offset(&self, direction: CompassPrimary) -> Option<GridCoordinate> {
        let (x, y) = (self.x, self.y);
        match direction {
            CompassPrimary::North => y.checked_sub(1).map(|y| GridCoordinate::new(x, y)),
            CompassPrimary::South => y.checked_add(1).map(|y| GridCoordinate::new(x, y)),
            CompassPrimary::East => x.checked_add(1).map(|x| GridCoordinate::new(x, y)),
            CompassPrimary::West => x.checked_sub(1).map(|x| GridCoordinate::new(x, y)),
        }
    }

    /// The logical cell at this grid position, if this is an odd/odd position.
    pub fn as_logical(&self) -> Option<LogicalCoordinate> {
        if self.is_odd_odd() {
            Some(LogicalCoordinate::new(self.x / 2, self.y / 2))
        } else {
            None
        }
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(x_y_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl LogicalCoordinate {
    pub fn new(x: u32, y: u32) -> LogicalCoordinate {
        LogicalCoordinate { x, y }
    }

    #[inline]
    pub fn as_grid_coordinate(&self) -> GridCoordinate {
        GridCoordinate::new(2 * self.x + 1, 2 * self.y + 1)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, width: Width) -> LogicalCoordinate {
        let Width(w) = width;
        LogicalCoordinate::new((index % w) as u32, (index / w) as u32)
    }

    /// Row major index of this cell, no bounds checking.
    #[inline]
    pub fn row_major_index(&self, width: Width) -> usize {
        let Width(w) = width;
        self.y as usize * w + self.x as usize
    }
}

impl From<(u32, u32)> for LogicalCoordinate {
    fn from(x_y_pair: (u32, u32)) -> LogicalCoordinate {
        LogicalCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}
