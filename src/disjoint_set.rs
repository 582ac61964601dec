use crate::cells::LogicalCoordinate;
use crate::grid_dimensions::MazeDimensions;
use crate::units::{Height, NodesCount, Width};

/// Union-find over the logical cells of a maze, with path halving and union by size.
///
/// Wall cells are never tracked. `set_count` is the number of distinct components. It starts at
/// `width * height` and drops by one on each union that joins two different components.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    width: Width,
    height: Height,
    parents: Vec<usize>,
    sizes: Vec<usize>,
    set_count: usize,
}

impl DisjointSetForest {
    pub fn new(dimensions: &MazeDimensions) -> DisjointSetForest {
        let NodesCount(cells_count) = dimensions.logical_size();
        DisjointSetForest {
            width: dimensions.width(),
            height: dimensions.height(),
            parents: (0..cells_count).collect(),
            sizes: vec![1; cells_count],
            set_count: cells_count,
        }
    }

    /// Number of logical cells tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    #[inline]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// The representative cell of the component containing `cell`.
    ///
    /// Panics if `cell` is outside of the forest's `width * height` range.
    pub fn find(&mut self, cell: LogicalCoordinate) -> LogicalCoordinate {
        let index = self.index_of(cell);
        let root = self.find_root(index);
        LogicalCoordinate::from_row_major_index(root, self.width)
    }

    /// Joins the components containing `a` and `b`.
    /// Returns false, changing nothing, when they already share a component.
    ///
    /// Panics if either cell is outside of the forest's range.
    pub fn union(&mut self, a: LogicalCoordinate, b: LogicalCoordinate) -> bool {
        let root_a = self.find_root(self.index_of(a));
        let root_b = self.find_root(self.index_of(b));
        if root_a == root_b {
            return false;
        }

        let (larger, smaller) = if self.sizes[root_a] >= self.sizes[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parents[smaller] = larger;
        self.sizes[larger] += self.sizes[smaller];
        self.set_count -= 1;

        true
    }

    pub fn is_joined(&mut self, a: LogicalCoordinate, b: LogicalCoordinate) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of cells in the component containing `cell`.
    pub fn component_size(&mut self, cell: LogicalCoordinate) -> usize {
        let root = self.find_root(self.index_of(cell));
        self.sizes[root]
    }

    fn index_of(&self, cell: LogicalCoordinate) -> usize {
        let (Width(w), Height(h)) = (self.width, self.height);
        assert!((cell.x as usize) < w && (cell.y as usize) < h,
                "logical cell {:?} is outside of the {}x{} disjoint set forest",
                cell,
                w,
                h);
        cell.row_major_index(self.width)
    }

    // Path halving: every other node on the way up points to its grandparent.
    fn find_root(&mut self, mut index: usize) -> usize {
        while self.parents[index] != index {
            let grandparent = self.parents[self.parents[index]];
            self.parents[index] = grandparent;
            index = grandparent;
        }
        index
    }
}
