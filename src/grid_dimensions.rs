use error_chain::bail;

use crate::cells::{GridCoordinate, LogicalCoordinate};
use crate::errors::*;
use crate::units::{ColumnLength, EdgesCount, Height, NodesCount, RowLength, Width};

/// Logical size of a maze and the derived `(2w + 1) * (2h + 1)` grid space size.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct MazeDimensions {
    width: Width,
    height: Height,
}

impl MazeDimensions {
    /// Fails with `InvalidDimensions` if either side is zero or the grid space would not fit a `u32`
    /// coordinate or a `usize` cell count.
    pub fn new(width: Width, height: Height) -> Result<MazeDimensions> {
        let (Width(w), Height(h)) = (width, height);
        let invalid = || ErrorKind::InvalidDimensions(w, h);

        if w < 1 || h < 1 {
            bail!(invalid());
        }

        let grid_side = |side: usize| {
            side.checked_mul(2)
                .and_then(|doubled| doubled.checked_add(1))
                .filter(|&grid_len| grid_len <= u32::MAX as usize)
        };
        let grid_w = grid_side(w).ok_or_else(invalid)?;
        let grid_h = grid_side(h).ok_or_else(invalid)?;
        grid_w.checked_mul(grid_h).ok_or_else(invalid)?;

        Ok(MazeDimensions { width, height })
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    /// Number of logical cells, i.e. nodes in the spanning tree.
    #[inline]
    pub fn logical_size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0)
    }

    /// Edges in any spanning tree of the logical cells.
    #[inline]
    pub fn spanning_edges(&self) -> EdgesCount {
        EdgesCount(self.logical_size().0 - 1)
    }

    #[inline]
    pub fn grid_row_length(&self) -> RowLength {
        RowLength(2 * self.width.0 + 1)
    }

    #[inline]
    pub fn grid_column_length(&self) -> ColumnLength {
        ColumnLength(2 * self.height.0 + 1)
    }

    /// Total cells in grid space, walls included.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_row_length().0 * self.grid_column_length().0
    }

    /// Walls lying strictly between two horizontally or vertically adjacent logical cells.
    pub fn interior_walls_count(&self) -> usize {
        let (Width(w), Height(h)) = (self.width, self.height);
        (w - 1) * h + w * (h - 1)
    }

    #[inline]
    pub fn is_valid_grid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.x as usize) < self.grid_row_length().0 &&
        (coord.y as usize) < self.grid_column_length().0
    }

    #[inline]
    pub fn is_valid_logical_coordinate(&self, coord: LogicalCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0..grid_size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_grid_coordinate(coord) {
            Some(coord.y as usize * self.grid_row_length().0 + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn grid_coordinate_from_index(&self, index: usize) -> GridCoordinate {
        let RowLength(row_len) = self.grid_row_length();
        GridCoordinate::new((index % row_len) as u32, (index / row_len) as u32)
    }
}
