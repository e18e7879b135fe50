use std::num::NonZero;

use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;

use monochrome::{Axis, Board, BoardBuilder, Color, Location, SearchOptions, Solver};

/// Solve the bundled color merge puzzle and print the moves.
#[derive(Parser)]
#[command(name = "solver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Abandon any line of play longer than this many moves
    #[arg(long)]
    max_depth: Option<NonZero<usize>>,
    /// Print only the moves, without the board before each one
    #[arg(long)]
    quiet: bool,
}

fn puzzle() -> Result<Board> {
    BoardBuilder::new()
        .add_basic(Color::Purple, Location(1, 1))
        .add_basic(Color::Yellow, Location(2, 1))
        .add_triangle(Color::Green, Location(3, 1))
        .add_basic(Color::Red, Location(4, 1))
        .add_basic(Color::Green, Location(5, 1))
        .add_basic(Color::Yellow, Location(6, 1))
        .add_basic(Color::Red, Location(2, 2))
        .add_diamond(Color::Cyan, Location(3, 2))
        .add_basic(Color::Purple, Location(4, 2))
        .add_basic(Color::Red, Location(1, 3))
        .add_basic(Color::Purple, Location(2, 3))
        .add_triangle(Color::Green, Location(3, 3))
        .add_basic(Color::Red, Location(4, 3))
        .add_line(Color::Red, Location(5, 3), Axis::Horizontal)
        .add_line(Color::Yellow, Location(3, 4), Axis::Vertical)
        .add_basic(Color::Purple, Location(4, 4))
        .add_basic(Color::Red, Location(5, 4))
        .build()
        .map_err(|reasons| anyhow!("invalid puzzle: {:?}", reasons))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let board = puzzle()?;
    println!("{board}");

    let mut options = SearchOptions::default();
    if let Some(max_depth) = cli.max_depth {
        options = options.with_max_depth(max_depth);
    }

    let mut solver = Solver::with_options(options);
    let solution = solver.solve(&board)?;
    info!("{:?}", solver.stats());

    let Some(solution) = solution else {
        println!("No solution");
        return Ok(());
    };

    for (k, step) in solution.steps().enumerate() {
        println!(">>>>>>>>> {} >>>>>>>>> {}", k + 1, step.action);
        if !cli.quiet {
            println!("{}", step.before.render_move(step.action));
        }
    }
    println!("{}", solution.final_board());

    Ok(())
}
