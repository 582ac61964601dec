//! **kruskal_mazes** generates perfect mazes on a wall/passage grid with randomised Kruskal's
//! algorithm over a disjoint set forest.

pub mod analysis;
pub mod candidates;
pub mod cells;
pub mod disjoint_set;
pub mod endpoints;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod grid_traits;
pub mod observers;
pub mod units;
