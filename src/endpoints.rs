use error_chain::bail;
use rand::Rng;

use crate::cells::LogicalCoordinate;
use crate::errors::*;
use crate::grid_dimensions::MazeDimensions;
use crate::units::{NodesCount, Width};

/// Start and end markers of a finished maze. Presentation metadata only, the grid is never touched.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct StartEndPoints {
    pub start: LogicalCoordinate,
    pub end: LogicalCoordinate,
}

/// Choose two distinct logical cells uniformly at random, redrawing the end cell until it differs
/// from the start.
///
/// Fails with `TooSmallMaze` when there are fewer than 2 cells to choose from.
pub fn select<R: Rng + ?Sized>(dimensions: &MazeDimensions, rng: &mut R) -> Result<StartEndPoints> {
    let NodesCount(cells_count) = dimensions.logical_size();
    if cells_count < 2 {
        bail!(ErrorKind::TooSmallMaze(cells_count));
    }

    let width = dimensions.width();
    let start = random_cell(cells_count, width, rng);
    let mut end = random_cell(cells_count, width, rng);
    while end == start {
        end = random_cell(cells_count, width, rng);
    }

    Ok(StartEndPoints { start, end })
}

fn random_cell<R: Rng + ?Sized>(cells_count: usize, width: Width, rng: &mut R) -> LogicalCoordinate {
    let index = rng.gen_range(0..cells_count);
    LogicalCoordinate::from_row_major_index(index, width)
}
