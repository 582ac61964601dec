use bit_set::BitSet;
use std::fmt;

use crate::cells::{CellState, CompassPrimary, CoordinateOptionSmallVec, CoordinateSmallVec,
                   GridCoordinate, LogicalCoordinate, COMPASS_DIRECTIONS};
use crate::errors::*;
use crate::grid_dimensions::MazeDimensions;
use crate::grid_iterators::{GridCellIter, GridRowIter};
use crate::units::{ColumnLength, Height, RowLength, Width};


/// The wall and passage lattice of a maze.
///
/// Only passages are stored, one bit per grid cell. Walls are the complement.
#[derive(Clone, PartialEq)]
pub struct Grid {
    dimensions: MazeDimensions,
    passages: BitSet,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallRemovalError {
    InvalidGridCoordinate,
    NotRemovable,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: dimensions: {:?}, passages: {:?}",
               self.dimensions, self.passage_count())
    }
}

impl Grid {
    /// Passages at every odd/odd coordinate, walls everywhere else.
    pub fn new(dimensions: MazeDimensions) -> Grid {
        let mut passages = BitSet::with_capacity(dimensions.grid_size());
        for coord in GridCellIter::new(dimensions).filter(GridCoordinate::is_odd_odd) {
            if let Some(index) = dimensions.grid_coordinate_to_index(coord) {
                passages.insert(index);
            }
        }

        Grid { dimensions, passages }
    }

    pub fn initialize(width: Width, height: Height) -> Result<Grid> {
        MazeDimensions::new(width, height).map(Grid::new)
    }

    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn row_length(&self) -> RowLength {
        self.dimensions.grid_row_length()
    }

    #[inline]
    pub fn column_length(&self) -> ColumnLength {
        self.dimensions.grid_column_length()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.grid_size()
    }

    /// None outside of the grid.
    pub fn cell_state(&self, coord: GridCoordinate) -> Option<CellState> {
        self.dimensions.grid_coordinate_to_index(coord).map(|index| {
            if self.passages.contains(index) {
                CellState::Passage
            } else {
                CellState::Wall
            }
        })
    }

    #[inline]
    pub fn is_passage(&self, coord: GridCoordinate) -> bool {
        self.cell_state(coord) == Some(CellState::Passage)
    }

    #[inline]
    pub fn is_wall(&self, coord: GridCoordinate) -> bool {
        self.cell_state(coord) == Some(CellState::Wall)
    }

    /// Is the grid coordinate on the outermost ring of the grid.
    pub fn is_border(&self, coord: GridCoordinate) -> bool {
        let RowLength(row_len) = self.row_length();
        let ColumnLength(column_len) = self.column_length();
        self.dimensions.is_valid_grid_coordinate(coord) &&
        (coord.x == 0 || coord.y == 0 ||
         coord.x as usize == row_len - 1 || coord.y as usize == column_len - 1)
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        coord.offset(direction)
             .filter(|&neighbour| self.dimensions.is_valid_grid_coordinate(neighbour))
    }

    pub fn neighbours_at_directions(&self,
                                    coord: GridCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    /// Cells to the North, South, East or West of a cell that lie within the grid.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        self.neighbours_at_directions(coord, &COMPASS_DIRECTIONS)
            .into_iter()
            .flatten()
            .collect()
    }

    /// A wall that is not on the border and touches at least one passage.
    pub fn is_wall_removable(&self, coord: GridCoordinate) -> bool {
        self.is_wall(coord) && !self.is_border(coord) &&
        self.neighbours(coord).iter().any(|&neighbour| self.is_passage(neighbour))
    }

    /// Turn a removable wall into a passage. A passage never turns back into a wall.
    pub fn remove_wall(&mut self, coord: GridCoordinate) -> ::std::result::Result<(), WallRemovalError> {
        let index = self.dimensions
            .grid_coordinate_to_index(coord)
            .ok_or(WallRemovalError::InvalidGridCoordinate)?;

        if !self.is_wall_removable(coord) {
            return Err(WallRemovalError::NotRemovable);
        }

        self.passages.insert(index);
        Ok(())
    }

    /// The two logical cells a wall separates.
    ///
    /// An odd x wall sits between the cells above and below it, an even x wall between the cells to
    /// its west and east. None if either side is not a logical cell of this grid.
    pub fn adjacent_logical_pair(&self,
                                 wall: GridCoordinate)
                                 -> Option<(LogicalCoordinate, LogicalCoordinate)> {
        if !self.dimensions.is_valid_grid_coordinate(wall) {
            return None;
        }

        let (before_dir, after_dir) = if wall.x % 2 == 1 {
            (CompassPrimary::North, CompassPrimary::South)
        } else {
            (CompassPrimary::West, CompassPrimary::East)
        };
        let logical_side = |dir| {
            self.neighbour_at_direction(wall, dir)
                .and_then(|side| side.as_logical())
        };

        match (logical_side(before_dir), logical_side(after_dir)) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    #[inline]
    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    #[inline]
    pub fn wall_count(&self) -> usize {
        self.size() - self.passage_count()
    }

    /// Passage cells that started out as walls.
    pub fn carved_walls<'a>(&'a self) -> impl Iterator<Item = GridCoordinate> + 'a {
        self.iter()
            .filter(move |coord| !coord.is_odd_odd() && self.is_passage(*coord))
    }

    /// Pairs of logical cells joined through a carved wall, in row major order of the wall.
    pub fn iter_links<'a>(&'a self)
                          -> impl Iterator<Item = (LogicalCoordinate, LogicalCoordinate)> + 'a {
        self.carved_walls()
            .filter_map(move |wall| self.adjacent_logical_pair(wall))
    }

    #[inline]
    pub fn iter(&self) -> GridCellIter {
        GridCellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> GridRowIter {
        GridRowIter::new(self.dimensions)
    }
}
