use crate::cells::GridCoordinate;
use crate::generators::{Maze, WallRemoved};
use crate::grid::Grid;

pub trait GridDisplay {
    /// Render the body of a passage cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from("   ")
    }
}

/// Downstream consumer of maze generation, e.g. a renderer or recorder.
///
/// The generator never depends on what, if anything, an observer does with the notifications.
pub trait MazeObserver {
    /// Called once per carved wall, in carving order, with the grid as it is after the carve.
    fn on_wall_removed(&mut self, _event: &WallRemoved, _grid: &Grid) {}

    /// Called once when the maze is complete.
    fn on_complete(&mut self, _maze: &Maze) {}
}
