use error_chain::bail;
use log::{debug, error, info, trace};
use rand::Rng;

use crate::candidates::WallCandidates;
use crate::cells::{GridCoordinate, LogicalCoordinate};
use crate::disjoint_set::DisjointSetForest;
use crate::endpoints::{self, StartEndPoints};
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_dimensions::MazeDimensions;
use crate::grid_traits::MazeObserver;
use crate::units::{Height, Width};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GenerationState {
    Initializing,
    Generating,
    Finalizing,
    Complete,
}

/// A wall that was carved, joining two previously disconnected logical cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct WallRemoved {
    pub wall: GridCoordinate,
    pub cells: (LogicalCoordinate, LogicalCoordinate),
}

/// A finished perfect maze: the final grid plus its start and end cells.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    endpoints: StartEndPoints,
}

impl Maze {
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn endpoints(&self) -> StartEndPoints {
        self.endpoints
    }

    #[inline]
    pub fn start(&self) -> LogicalCoordinate {
        self.endpoints.start
    }

    #[inline]
    pub fn end(&self) -> LogicalCoordinate {
        self.endpoints.end
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Randomised Kruskal's algorithm.
///
/// Every logical cell starts as its own component. Walls are drawn at random from the candidate
/// set and carved only when they separate two different components, so the passages always form
/// a forest and finish as a spanning tree once a single component remains: exactly
/// `width * height - 1` walls are carved.
///
/// The generator can be driven one carved wall at a time with `next_wall_removal`. Each carve is
/// a checkpoint at which a caller may stop without leaving any invariant half updated.
#[derive(Debug, Clone)]
pub struct KruskalGenerator {
    grid: Grid,
    forest: DisjointSetForest,
    candidates: WallCandidates,
    state: GenerationState,
    wall_removals: usize,
    endpoints: Option<StartEndPoints>,
}

impl KruskalGenerator {
    pub fn new(dimensions: MazeDimensions) -> KruskalGenerator {
        let grid = Grid::new(dimensions);
        let candidates = WallCandidates::from_grid(&grid);
        let mut generator = KruskalGenerator {
            grid,
            forest: DisjointSetForest::new(&dimensions),
            candidates,
            state: GenerationState::Initializing,
            wall_removals: 0,
            endpoints: None,
        };
        info!("kruskal generator {}x{}: {} cells, {} wall candidates",
              dimensions.width().0,
              dimensions.height().0,
              generator.forest.len(),
              generator.candidates.len());

        generator.state = GenerationState::Generating;
        generator
    }

    pub fn with_size(width: Width, height: Height) -> Result<KruskalGenerator> {
        MazeDimensions::new(width, height).map(KruskalGenerator::new)
    }

    #[inline]
    pub fn state(&self) -> GenerationState {
        self.state
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        self.grid.dimensions()
    }

    /// Components left to join.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.forest.set_count()
    }

    /// Walls carved so far.
    #[inline]
    pub fn wall_removals(&self) -> usize {
        self.wall_removals
    }

    #[inline]
    pub fn candidates_remaining(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn endpoints(&self) -> Option<StartEndPoints> {
        self.endpoints
    }

    /// Sample candidates until one is carved, returning the carve.
    ///
    /// Candidates whose cells are already joined are consumed without any change to the grid.
    /// Returns `Ok(None)` once a single component remains (and on every call after the carving
    /// loop ended). Running out of candidates while components remain is an internal consistency
    /// failure, `DisconnectedMaze`.
    pub fn next_wall_removal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<WallRemoved>> {
        if self.state != GenerationState::Generating {
            return Ok(None);
        }

        loop {
            if self.forest.set_count() <= 1 {
                debug!("single component after {} carved walls, {} candidates unused",
                       self.wall_removals,
                       self.candidates.len());
                self.state = GenerationState::Finalizing;
                return Ok(None);
            }

            let wall = match self.candidates.sample_and_remove(rng) {
                Some(wall) => wall,
                None => {
                    error!("wall candidates exhausted with {} components left",
                           self.forest.set_count());
                    bail!(ErrorKind::DisconnectedMaze(self.forest.set_count()));
                }
            };

            let (a, b) = self.grid
                .adjacent_logical_pair(wall)
                .ok_or_else(|| ErrorKind::InvalidWallCandidate(wall, None))?;
            if !self.grid.is_wall_removable(wall) {
                bail!(ErrorKind::InvalidWallCandidate(wall, None));
            }

            if self.forest.union(a, b) {
                self.grid
                    .remove_wall(wall)
                    .map_err(|e| ErrorKind::InvalidWallCandidate(wall, Some(e)))?;
                self.wall_removals += 1;
                debug!("carved wall {:?} joining {:?} and {:?}, {} components left",
                       wall,
                       a,
                       b,
                       self.forest.set_count());

                return Ok(Some(WallRemoved { wall, cells: (a, b) }));
            }

            trace!("wall {:?} discarded, {:?} and {:?} already joined", wall, a, b);
        }
    }

    /// Run the carving loop to the end, notifying the observer of every carved wall.
    pub fn carve<R, O>(&mut self, rng: &mut R, observer: &mut O) -> Result<()>
        where R: Rng + ?Sized,
              O: MazeObserver + ?Sized
    {
        while let Some(event) = self.next_wall_removal(rng)? {
            observer.on_wall_removed(&event, &self.grid);
        }
        Ok(())
    }

    /// Choose the start and end cells of a fully carved maze.
    ///
    /// Fails with `GenerationIncomplete` while still carving, and with `TooSmallMaze` for a single
    /// cell maze.
    pub fn finalize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<StartEndPoints> {
        match self.state {
            GenerationState::Complete => {
                if let Some(points) = self.endpoints {
                    return Ok(points);
                }
            }
            GenerationState::Finalizing => {}
            GenerationState::Initializing | GenerationState::Generating => {
                bail!(ErrorKind::GenerationIncomplete);
            }
        }

        let points = endpoints::select(self.grid.dimensions(), rng)?;
        self.endpoints = Some(points);
        self.state = GenerationState::Complete;
        info!("maze complete: {} walls carved, start {:?}, end {:?}",
              self.wall_removals,
              points.start,
              points.end);

        Ok(points)
    }

    /// The finished maze, available once `finalize` succeeded.
    pub fn into_maze(self) -> Result<Maze> {
        match (self.state, self.endpoints) {
            (GenerationState::Complete, Some(endpoints)) => {
                Ok(Maze {
                    grid: self.grid,
                    endpoints,
                })
            }
            _ => Err(ErrorKind::GenerationIncomplete.into()),
        }
    }

    /// The grid in whatever state generation reached.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Carve, finalize and hand the complete maze to the observer.
    pub fn run<R, O>(mut self, rng: &mut R, observer: &mut O) -> Result<Maze>
        where R: Rng + ?Sized,
              O: MazeObserver + ?Sized
    {
        self.carve(rng, observer)?;
        self.finalize(rng)?;
        let maze = self.into_maze()?;
        observer.on_complete(&maze);
        Ok(maze)
    }
}

/// Generate a perfect maze of the given dimensions with randomised Kruskal's algorithm.
pub fn generate<R, O>(dimensions: MazeDimensions, rng: &mut R, observer: &mut O) -> Result<Maze>
    where R: Rng + ?Sized,
          O: MazeObserver + ?Sized
{
    KruskalGenerator::new(dimensions).run(rng, observer)
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::analysis;
    use crate::observers::{EventRecorder, NullObserver};

    fn dims(w: usize, h: usize) -> MazeDimensions {
        MazeDimensions::new(Width(w), Height(h)).expect("valid dimensions")
    }

    fn generate(w: usize, h: usize, seed: u64) -> (Maze, EventRecorder) {
        let mut recorder = EventRecorder::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = super::generate(dims(w, h), &mut rng, &mut recorder).expect("maze generation failed");
        (maze, recorder)
    }

    #[test]
    fn starts_generating() {
        let generator = KruskalGenerator::new(dims(3, 3));
        assert_eq!(generator.state(), GenerationState::Generating);
        assert_eq!(generator.set_count(), 9);
        assert_eq!(generator.candidates_remaining(), 12);
        assert_eq!(generator.wall_removals(), 0);
        assert_eq!(generator.endpoints(), None);
    }

    #[test]
    fn invalid_size_is_rejected() {
        assert!(KruskalGenerator::with_size(Width(0), Height(4)).is_err());
        assert!(KruskalGenerator::with_size(Width(4), Height(0)).is_err());
    }

    #[test]
    fn two_by_one_scenario() {
        let mut generator = KruskalGenerator::new(dims(2, 1));
        assert_eq!(generator.grid().row_length().0, 5);
        assert_eq!(generator.grid().column_length().0, 3);

        let mut rng = StdRng::seed_from_u64(0);
        let event = generator.next_wall_removal(&mut rng)
            .expect("generation failed")
            .expect("a wall should be carved");
        assert_eq!(event.wall, GridCoordinate::new(2, 1));
        assert_eq!(event.cells, (LogicalCoordinate::new(0, 0), LogicalCoordinate::new(1, 0)));
        assert_eq!(generator.set_count(), 1);

        assert_eq!(generator.next_wall_removal(&mut rng).expect("generation failed"), None);
        assert_eq!(generator.state(), GenerationState::Finalizing);
    }

    #[test]
    fn single_cell_maze() {
        let mut generator = KruskalGenerator::new(dims(1, 1));
        assert_eq!(generator.grid().size(), 9);
        assert_eq!(generator.candidates_remaining(), 0);
        assert_eq!(generator.set_count(), 1);

        let mut rng = StdRng::seed_from_u64(5);
        let mut recorder = EventRecorder::new();
        generator.carve(&mut rng, &mut recorder).expect("carving failed");
        assert!(recorder.events().is_empty());
        assert_eq!(generator.set_count(), 1);
        assert_eq!(generator.state(), GenerationState::Finalizing);

        let err = generator.finalize(&mut rng).unwrap_err();
        match *err.kind() {
            ErrorKind::TooSmallMaze(1) => {}
            ref other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(generator.into_grid().passage_count(), 1);
    }

    #[test]
    fn single_cell_maze_cannot_run() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(super::generate(dims(1, 1), &mut rng, &mut NullObserver).is_err());
    }

    #[test]
    fn finalize_requires_carving_to_finish() {
        let mut generator = KruskalGenerator::new(dims(4, 4));
        let mut rng = StdRng::seed_from_u64(11);
        assert!(generator.finalize(&mut rng).is_err());
        assert!(generator.clone().into_maze().is_err());

        generator.carve(&mut rng, &mut NullObserver).expect("carving failed");
        let points = generator.finalize(&mut rng).expect("finalize failed");
        assert_eq!(generator.state(), GenerationState::Complete);
        assert_eq!(generator.finalize(&mut rng).expect("finalize failed"), points);

        let maze = generator.into_maze().expect("maze is complete");
        assert_eq!(maze.endpoints(), points);
    }

    #[test]
    fn carving_stops_at_any_checkpoint() {
        let mut generator = KruskalGenerator::new(dims(6, 5));
        let mut rng = StdRng::seed_from_u64(21);
        for carved in 1..=10 {
            assert!(generator.next_wall_removal(&mut rng).expect("generation failed").is_some());
            assert_eq!(generator.wall_removals(), carved);
            assert_eq!(generator.set_count(), 30 - carved);
            assert_eq!(generator.grid().passage_count(), 30 + carved);
        }
        assert_eq!(generator.state(), GenerationState::Generating);
        assert!(!analysis::is_spanning_tree(generator.grid()));
    }

    #[test]
    fn exhausted_candidates_are_an_internal_failure() {
        let mut generator = KruskalGenerator::new(dims(2, 2));
        generator.candidates = WallCandidates::from_walls(vec![]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = generator.next_wall_removal(&mut rng).unwrap_err();
        match *err.kind() {
            ErrorKind::DisconnectedMaze(4) => {}
            ref other => panic!("unexpected error {:?}", other),
        }
        assert!(generator.finalize(&mut rng).is_err());
    }

    #[test]
    fn pillar_candidates_are_an_internal_failure() {
        let mut generator = KruskalGenerator::new(dims(2, 2));
        generator.candidates = WallCandidates::from_walls(vec![GridCoordinate::new(2, 2)]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = generator.next_wall_removal(&mut rng).unwrap_err();
        match *err.kind() {
            ErrorKind::InvalidWallCandidate(wall, None) => assert_eq!(wall, GridCoordinate::new(2, 2)),
            ref other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(generator.set_count(), 4);
    }

    #[test]
    fn already_joined_candidates_are_discarded_silently() {
        let west_wall = GridCoordinate::new(2, 1);
        let east_wall = GridCoordinate::new(4, 1);
        let mut discarded = 0;

        for seed in 0..32 {
            let mut generator = KruskalGenerator::new(dims(3, 1));
            generator.forest.union(LogicalCoordinate::new(0, 0), LogicalCoordinate::new(1, 0));
            generator.candidates = WallCandidates::from_walls(vec![west_wall, east_wall]);
            let mut recorder = EventRecorder::new();
            let mut rng = StdRng::seed_from_u64(seed);

            generator.carve(&mut rng, &mut recorder).expect("carving failed");
            assert_eq!(recorder.events().len(), 1);
            assert_eq!(recorder.events()[0].wall, east_wall);
            assert_eq!(generator.wall_removals(), 1);
            assert!(generator.grid().is_wall(west_wall));
            assert!(generator.grid().is_passage(east_wall));
            assert_eq!(generator.state(), GenerationState::Finalizing);

            // The joined wall was drawn first only when nothing is left over.
            if generator.candidates_remaining() == 0 {
                discarded += 1;
            } else {
                assert!(generator.candidates.contains(west_wall));
            }
        }
        assert!(discarded > 0);
    }

    #[test]
    fn complete_maze_events() {
        let (maze, recorder) = generate(12, 7, 1234);
        let events = recorder.events();
        assert_eq!(events.len(), 12 * 7 - 1);
        assert_eq!(recorder.completions(), 1);

        let carved_in_order = events.iter().map(|event| event.wall).collect::<Vec<_>>();
        let mut carved = maze.grid().carved_walls().collect::<Vec<_>>();
        let mut sorted_events = carved_in_order.clone();
        sorted_events.sort();
        carved.sort();
        assert_eq!(sorted_events, carved);

        for event in events {
            assert_eq!(maze.grid().adjacent_logical_pair(event.wall), Some(event.cells));
        }
    }

    #[test]
    fn events_report_the_grid_after_each_carve() {
        let (_, recorder) = generate(5, 5, 8);
        for (index, passages) in recorder.passage_counts().iter().enumerate() {
            assert_eq!(*passages, 25 + index + 1);
        }
    }

    #[test]
    fn endpoints_are_distinct_passages() {
        let (maze, _) = generate(8, 8, 77);
        assert_ne!(maze.start(), maze.end());
        assert!(maze.grid().is_passage(maze.start().as_grid_coordinate()));
        assert!(maze.grid().is_passage(maze.end().as_grid_coordinate()));
    }

    #[test]
    fn same_seed_same_maze() {
        let (maze_a, events_a) = generate(15, 9, 2024);
        let (maze_b, events_b) = generate(15, 9, 2024);
        assert_eq!(events_a.events(), events_b.events());
        assert_eq!(maze_a.endpoints(), maze_b.endpoints());
        assert_eq!(maze_a.grid(), maze_b.grid());
    }

    #[test]
    fn perfect_maze_properties() {
        fn p(w: u8, h: u8, seed: u64) -> TestResult {
            let (w, h) = (w as usize % 20 + 1, h as usize % 20 + 1);
            let cells = w * h;
            if cells < 2 {
                return TestResult::discard();
            }

            let mut generator = KruskalGenerator::new(dims(w, h));
            let mut recorder = EventRecorder::new();
            let mut rng = StdRng::seed_from_u64(seed);
            if generator.carve(&mut rng, &mut recorder).is_err() {
                return TestResult::failed();
            }
            if generator.set_count() != 1 || generator.finalize(&mut rng).is_err() {
                return TestResult::failed();
            }

            let grid = generator.grid();
            let odd_odd_passages = grid.iter()
                .filter(|coord| coord.is_odd_odd() && grid.is_passage(*coord))
                .count();
            let start = LogicalCoordinate::new(0, 0).as_grid_coordinate();

            TestResult::from_bool(recorder.events().len() == cells - 1 &&
                                  odd_odd_passages == cells &&
                                  grid.carved_walls().count() == cells - 1 &&
                                  analysis::reachable_passages(grid, start).len() == 2 * cells - 1 &&
                                  analysis::is_spanning_tree(grid))
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult)
    }
}
