// Creates the Error, ErrorKind, ResultExt, and Result types for the library.
// ResultExt adds the `chain_err` trait method.
use error_chain::error_chain;

use crate::cells::GridCoordinate;
use crate::grid::WallRemovalError;

error_chain! {
    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}, each side needs at least 1 cell and must fit the grid coordinate space",
                    width, height)
        }
        TooSmallMaze(cells: usize) {
            description("maze too small for distinct start and end cells")
            display("a maze of {} cell(s) has no two distinct cells to mark as start and end", cells)
        }
        DisconnectedMaze(components: usize) {
            description("wall candidates exhausted before the maze was connected")
            display("internal consistency violation: wall candidates exhausted with {} components left",
                    components)
        }
        InvalidWallCandidate(wall: GridCoordinate, reason: Option<WallRemovalError>) {
            description("a wall candidate does not separate two logical cells")
            display("internal consistency violation: wall candidate {:?} cannot be carved ({:?})",
                    wall, reason)
        }
        GenerationIncomplete {
            description("maze generation has not finished carving")
            display("the maze cannot be finalized before the carving loop has ended")
        }
    }
}
