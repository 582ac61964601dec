use std::fmt;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::endpoints::StartEndPoints;
use crate::generators::Maze;
use crate::grid::Grid;
use crate::grid_traits::GridDisplay;


#[derive(Debug, Copy, Clone)]
pub struct StartEndPointsDisplay {
    start: GridCoordinate,
    end: GridCoordinate,
}
impl StartEndPointsDisplay {
    pub fn new(points: StartEndPoints) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start: points.start.as_grid_coordinate(),
            end: points.end.as_grid_coordinate(),
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.start {
            String::from(" S ")
        } else if coord == self.end {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}


/// Text rendering of a grid with an optional overlay painting the passage cell bodies.
///
/// Odd columns are 3 glyphs wide and even columns 1 glyph wide, so logical cells come out square
/// looking when printed.
pub struct GridView<'a> {
    grid: &'a Grid,
    grid_display: Option<&'a dyn GridDisplay>,
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid, grid_display: Option<&'a dyn GridDisplay>) -> GridView<'a> {
        GridView { grid, grid_display }
    }

    fn render_cell(&self, coord: GridCoordinate) -> String {
        let wide_column = coord.x % 2 == 1;

        if self.grid.is_passage(coord) {
            return match (coord.is_odd_odd(), self.grid_display) {
                (true, Some(displayer)) => displayer.render_cell_body(coord),
                (_, _) if wide_column => String::from("   "),
                _ => String::from(" "),
            };
        }

        match (wide_column, coord.y % 2 == 1) {
            (true, _) => String::from(WALL_LR_3),
            (false, true) => String::from(WALL_UD),
            (false, false) => String::from(self.pillar(coord)),
        }
    }

    /// Junction glyph joining whichever of the surrounding walls are still standing.
    fn pillar(&self, coord: GridCoordinate) -> &'static str {
        let wall_towards = |direction| {
            self.grid
                .neighbour_at_direction(coord, direction)
                .map_or(false, |neighbour| self.grid.is_wall(neighbour))
        };

        match (wall_towards(CompassPrimary::West),
               wall_towards(CompassPrimary::East),
               wall_towards(CompassPrimary::North),
               wall_towards(CompassPrimary::South)) {
            (true, true, true, true) => WALL_LRUD,
            (true, true, true, false) => WALL_LRU,
            (true, true, false, true) => WALL_LRD,
            (true, false, true, true) => WALL_LUD,
            (false, true, true, true) => WALL_RUD,
            (true, true, false, false) => WALL_LR,
            (false, false, true, true) => WALL_UD,
            (false, true, true, false) => WALL_RU,
            (true, false, false, true) => WALL_LD,
            (true, false, true, false) => WALL_LU,
            (false, true, false, true) => WALL_RD,
            (true, false, false, false) => WALL_L,
            (false, true, false, false) => WALL_R,
            (false, false, true, false) => WALL_U,
            (false, false, false, true) => WALL_D,
            (false, false, false, false) => " ",
        }
    }
}

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR_3: &str = "───";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";

impl<'a> fmt::Display for GridView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut output = String::new();
        for row in self.grid.iter_row() {
            for coord in row {
                output.push_str(&self.render_cell(coord));
            }
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&GridView::new(self, None), f)
    }
}

/// Renders the grid with `S` and `E` marking the start and end cells.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let markers = StartEndPointsDisplay::new(self.endpoints());
        fmt::Display::fmt(&GridView::new(self.grid(), Some(&markers)), f)
    }
}
