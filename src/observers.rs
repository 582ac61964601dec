use log::{info, Level};

use crate::endpoints::StartEndPoints;
use crate::generators::{Maze, WallRemoved};
use crate::grid::Grid;
use crate::grid_traits::MazeObserver;

/// Ignores everything.
#[derive(Debug, Copy, Clone, Default)]
pub struct NullObserver;

impl MazeObserver for NullObserver {}

/// Keeps every generation notification, in order.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<WallRemoved>,
    passage_counts: Vec<usize>,
    completed: Vec<StartEndPoints>,
}

impl EventRecorder {
    pub fn new() -> EventRecorder {
        EventRecorder::default()
    }

    pub fn events(&self) -> &[WallRemoved] {
        &self.events
    }

    /// Passage count of the grid snapshot seen with each event.
    pub fn passage_counts(&self) -> &[usize] {
        &self.passage_counts
    }

    pub fn completions(&self) -> usize {
        self.completed.len()
    }

    pub fn completed_endpoints(&self) -> Option<StartEndPoints> {
        self.completed.last().cloned()
    }
}

impl MazeObserver for EventRecorder {
    fn on_wall_removed(&mut self, event: &WallRemoved, grid: &Grid) {
        self.events.push(*event);
        self.passage_counts.push(grid.passage_count());
    }

    fn on_complete(&mut self, maze: &Maze) {
        self.completed.push(maze.endpoints());
    }
}

/// Logs each carved wall at the given level and a summary on completion.
#[derive(Debug, Copy, Clone)]
pub struct LoggingObserver {
    level: Level,
    carved: usize,
}

impl LoggingObserver {
    pub fn new(level: Level) -> LoggingObserver {
        LoggingObserver { level, carved: 0 }
    }
}

impl Default for LoggingObserver {
    fn default() -> LoggingObserver {
        LoggingObserver::new(Level::Debug)
    }
}

impl MazeObserver for LoggingObserver {
    fn on_wall_removed(&mut self, event: &WallRemoved, grid: &Grid) {
        self.carved += 1;
        log::log!(self.level,
                  "#{} wall {:?} removed between {:?} and {:?} ({} passages)",
                  self.carved,
                  event.wall,
                  event.cells.0,
                  event.cells.1,
                  grid.passage_count());
    }

    fn on_complete(&mut self, maze: &Maze) {
        info!("maze finished after {} carved walls, start {:?}, end {:?}",
              self.carved,
              maze.start(),
              maze.end());
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generators::generate;
    use crate::grid_dimensions::MazeDimensions;
    use crate::units::{Height, Width};

    #[test]
    fn recorder_sees_every_notification() {
        let dimensions = MazeDimensions::new(Width(4), Height(3)).expect("valid dimensions");
        let mut recorder = EventRecorder::new();
        let maze = generate(dimensions, &mut StdRng::seed_from_u64(3), &mut recorder)
            .expect("maze generation failed");

        assert_eq!(recorder.events().len(), 11);
        assert_eq!(recorder.passage_counts().len(), 11);
        assert_eq!(recorder.passage_counts().last(), Some(&maze.grid().passage_count()));
        assert_eq!(recorder.completions(), 1);
        assert_eq!(recorder.completed_endpoints(), Some(maze.endpoints()));
    }

    #[test]
    fn logging_observer_counts_carves() {
        let dimensions = MazeDimensions::new(Width(3), Height(3)).expect("valid dimensions");
        let mut observer = LoggingObserver::new(Level::Trace);
        generate(dimensions, &mut StdRng::seed_from_u64(3), &mut observer)
            .expect("maze generation failed");
        assert_eq!(observer.carved, 8);
    }
}
