use docopt::Docopt;
use log::{debug, info, warn, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_derive::Deserialize;
use kruskal_mazes::{
    analysis,
    errors as maze_errors,
    generators::KruskalGenerator,
    grid::Grid,
    grid_dimensions::MazeDimensions,
    grid_displays::{GridView, StartEndPointsDisplay},
    grid_traits::{GridDisplay, MazeObserver},
    observers::{LoggingObserver, NullObserver},
    units::{Height, Width},
};
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Kruskal Mazes

Usage:
    maze_driver -h | --help
    maze_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--text-out=<path>] [--save-edges=<path>] [--no-markers] [--trace-removals] [--verbose]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 20].
    --grid-height=<h>      The grid height in a w*h grid [default: 20].
    --seed=<s>             Seed the random number generator to reproduce a maze.
    --text-out=<path>      Output file path for a textual rendering of the maze.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --no-markers           Do not draw the 'S' (start) and 'E' (end) cells.
    --trace-removals       Log every wall removed while carving the maze.
    --verbose              Debug logging when RUST_LOG is not set.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_text_out: String,
    flag_save_edges: String,
    flag_no_markers: bool,
    flag_trace_removals: bool,
    flag_verbose: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::kruskal_mazes::errors::Error, ::kruskal_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Logger(::log::SetLoggerError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    init_logging(args.flag_verbose)?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };
    let dimensions = MazeDimensions::new(Width(width), Height(height))?;

    let mut rng = match args.flag_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut observer: Box<dyn MazeObserver> = if args.flag_trace_removals {
        Box::new(LoggingObserver::new(Level::Info))
    } else {
        Box::new(NullObserver)
    };

    let mut generator = KruskalGenerator::new(dimensions);
    generator.carve(&mut rng, observer.as_mut())?;

    let endpoints = match generator.finalize(&mut rng) {
        Ok(points) => Some(points),
        Err(e) => {
            if let maze_errors::ErrorKind::TooSmallMaze(_) = *e.kind() {
                // Still a valid maze, just nothing to mark.
                warn!("{}", e);
                None
            } else {
                return Err(e.into());
            }
        }
    };

    let maze_grid = if endpoints.is_some() {
        let maze = generator.into_maze()?;
        observer.on_complete(&maze);
        maze.into_grid()
    } else {
        generator.into_grid()
    };

    debug!("spanning tree check: {}", analysis::is_spanning_tree(&maze_grid));
    info!("{} passages, {} dead ends",
          maze_grid.passage_count(),
          analysis::dead_ends(&maze_grid).len());

    let markers = endpoints
        .filter(|_| !args.flag_no_markers)
        .map(StartEndPointsDisplay::new);
    let rendering = format!("{}",
                            GridView::new(&maze_grid,
                                          markers.as_ref().map(|m| m as &dyn GridDisplay)));

    if args.flag_text_out.is_empty() {
        print!("{}", rendering);
    } else {
        write_text_to_file(&rendering, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_save_edges.is_empty() {

        save_maze_graph(&maze_grid, &args.flag_save_edges)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init()?;
    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &Grid, file_path: &str) -> Result<()> {

    let width = maze_grid.dimensions().width();
    let mut graph_data = String::new();
    let vertices_count = maze_grid.dimensions().logical_size().0;
    let edges_count = maze_grid.iter_links().count();
    graph_data.push_str(vertices_count.to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(edges_count.to_string().as_ref());
    graph_data.push('\n');

    for (src, dst) in maze_grid.iter_links() {
        let src_as_1_based_index = src.row_major_index(width) + 1;
        let dst_as_1_based_index = dst.row_major_index(width) + 1;

        graph_data.push_str(src_as_1_based_index.to_string().as_ref());
        graph_data.push(' ');
        graph_data.push_str(dst_as_1_based_index.to_string().as_ref());
        graph_data.push('\n');
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
