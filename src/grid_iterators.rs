use std::fmt;

use crate::cells::GridCoordinate;
use crate::grid_dimensions::MazeDimensions;
use crate::units::{ColumnLength, RowLength};

/// Row major iteration over every grid space coordinate, walls included.
#[derive(Clone)]
pub struct GridCellIter {
    dimensions: MazeDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl GridCellIter {
    pub fn new(dimensions: MazeDimensions) -> GridCellIter {
        GridCellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.grid_size(),
        }
    }
}

impl fmt::Debug for GridCellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "GridCellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for GridCellIter {} // default impl using size_hint()
impl Iterator for GridCellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = self.dimensions.grid_coordinate_from_index(self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iterates the grid one full row of coordinates at a time, north to south.
#[derive(Debug, Clone)]
pub struct GridRowIter {
    current_row: usize,
    row_length: RowLength,
    rows_count: ColumnLength,
}

impl GridRowIter {
    pub fn new(dimensions: MazeDimensions) -> GridRowIter {
        GridRowIter {
            current_row: 0,
            row_length: dimensions.grid_row_length(),
            rows_count: dimensions.grid_column_length(),
        }
    }
}

impl ExactSizeIterator for GridRowIter {}
impl Iterator for GridRowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let ColumnLength(rows) = self.rows_count;
        if self.current_row < rows {
            let y = self.current_row as u32;
            let RowLength(row_len) = self.row_length;
            let row = (0..row_len as u32).map(|x| GridCoordinate::new(x, y)).collect();
            self.current_row += 1;
            Some(row)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows_count.0 - self.current_row;
        (remaining, Some(remaining))
    }
}
