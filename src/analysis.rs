//! Structural checks over a carved grid's passages, independent of how the maze was generated.

use fnv::{FnvHashMap, FnvHashSet};
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{CompassPrimary, GridCoordinate, LogicalCoordinate};
use crate::grid::Grid;
use crate::units::{EdgesCount, NodesCount};

/// Passage cells as nodes, an edge between each pair of adjacent passage cells.
pub fn passage_graph(grid: &Grid) -> UnGraph<GridCoordinate, ()> {
    let passages = grid.iter().filter(|&coord| grid.is_passage(coord)).collect::<Vec<_>>();

    let mut graph = UnGraph::with_capacity(passages.len(), passages.len());
    let mut node_indices: FnvHashMap<GridCoordinate, NodeIndex> =
        FnvHashMap::with_capacity_and_hasher(passages.len(), Default::default());
    for &coord in &passages {
        node_indices.insert(coord, graph.add_node(coord));
    }

    // Only looking east and south so that each adjacency gets a single edge.
    for &coord in &passages {
        for &dir in &[CompassPrimary::East, CompassPrimary::South] {
            let neighbour = grid.neighbour_at_direction(coord, dir)
                .and_then(|neighbour| node_indices.get(&neighbour));
            if let Some(&neighbour_index) = neighbour {
                graph.add_edge(node_indices[&coord], neighbour_index, ());
            }
        }
    }

    graph
}

/// Passage cell count and adjacent passage pair count.
pub fn passage_graph_size(grid: &Grid) -> (NodesCount, EdgesCount) {
    let graph = passage_graph(grid);
    (NodesCount(graph.node_count()), EdgesCount(graph.edge_count()))
}

/// Is the passage network a single connected, acyclic component.
pub fn is_spanning_tree(grid: &Grid) -> bool {
    let graph = passage_graph(grid);
    graph.node_count() > 0 && connected_components(&graph) == 1 && !is_cyclic_undirected(&graph)
}

/// Every passage cell reachable from `start` by stepping between adjacent passages.
/// Empty if `start` is not a passage.
pub fn reachable_passages(grid: &Grid, start: GridCoordinate) -> FnvHashSet<GridCoordinate> {
    let mut visited = FnvHashSet::default();
    if !grid.is_passage(start) {
        return visited;
    }

    visited.insert(start);
    let mut frontier = vec![start];
    while !frontier.is_empty() {

        let mut new_frontier = vec![];
        for cell_coord in &frontier {
            for &neighbour in grid.neighbours(*cell_coord).iter() {
                if grid.is_passage(neighbour) && visited.insert(neighbour) {
                    new_frontier.push(neighbour);
                }
            }
        }
        frontier = new_frontier;
    }

    visited
}

/// Logical cells with exactly one open side.
pub fn dead_ends(grid: &Grid) -> Vec<LogicalCoordinate> {
    grid.iter()
        .filter_map(|coord| coord.as_logical().map(|logical| (coord, logical)))
        .filter(|&(coord, _)| {
            grid.neighbours(coord)
                .iter()
                .filter(|&&neighbour| grid.is_passage(neighbour))
                .count() == 1
        })
        .map(|(_, logical)| logical)
        .collect()
}
