use rand::Rng;

use crate::cells::GridCoordinate;
use crate::grid::Grid;

/// The walls eligible for testing during generation.
///
/// Built once from a freshly initialised grid and consumed by uniform random sampling. A sampled
/// wall leaves the set whether or not it ends up carved: it always separates the same two logical
/// cells, so once those are joined it can never be useful again.
#[derive(Debug, Clone)]
pub struct WallCandidates {
    walls: Vec<GridCoordinate>,
}

impl WallCandidates {
    pub fn from_grid(grid: &Grid) -> WallCandidates {
        let walls = grid.iter()
            .filter(|&coord| grid.is_wall_removable(coord))
            .collect();
        WallCandidates { walls }
    }

    #[cfg(test)]
    pub(crate) fn from_walls(walls: Vec<GridCoordinate>) -> WallCandidates {
        WallCandidates { walls }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn contains(&self, wall: GridCoordinate) -> bool {
        self.walls.contains(&wall)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCoordinate> {
        self.walls.iter()
    }

    /// Picks a uniformly random remaining wall, swap removing it from the set.
    /// None once the set is exhausted.
    pub fn sample_and_remove<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<GridCoordinate> {
        if self.walls.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.walls.len());
        Some(self.walls.swap_remove(index))
    }
}
