use std::collections::HashSet;
use std::num::NonZero;

use itertools::Itertools;
use log::{debug, info, trace};
use thiserror::Error;

use crate::board::Board;
use crate::moves::{InvalidMove, Move};

/// Reasons a [`Solver`] may fail. Running out of moves is not a failure; see [`Solver::solve`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SolverFailure {
    /// A move turned out to be illegal on the board it was found on. This should never happen.
    #[error("search aborted on an illegal move: {0}")]
    InvalidMove(#[from] InvalidMove),
}

/// Knobs for a [`Solver`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchOptions {
    /// Give up on any line longer than this many moves. Unlimited by default.
    pub max_depth: Option<NonZero<usize>>,
}

impl SearchOptions {
    #[allow(missing_docs)]
    pub fn with_max_depth(mut self, max_depth: NonZero<usize>) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Counters describing the work done by the last call to [`Solver::solve`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Boards whose moves were enumerated.
    pub expanded: usize,
    /// Candidate boards skipped because they already appeared on the current line.
    pub revisits: usize,
    /// The deepest line explored, in moves.
    pub deepest: usize,
}

/// One move of a [`Solution`], together with the boards on either side of it.
#[derive(Clone, Copy, Debug)]
pub struct SolutionStep<'a> {
    #[allow(missing_docs)]
    pub before: &'a Board,
    #[allow(missing_docs)]
    pub action: &'a Move,
    #[allow(missing_docs)]
    pub after: &'a Board,
}

/// A sequence of moves taking an initial board to a solved one.
#[derive(Clone, Debug)]
pub struct Solution {
    initial: Board,
    // each move along with the board it produces
    line: Vec<(Move, Board)>,
}

impl Solution {
    /// The board the solution starts from.
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    /// The solved board the last move produces, or the initial board if it was solved to begin with.
    pub fn final_board(&self) -> &Board {
        self.line.last().map_or(&self.initial, |(_, board)| board)
    }

    /// The moves, in the order they are to be played.
    pub fn moves(&self) -> impl Iterator<Item=&Move> {
        self.line.iter().map(|(action, _)| action)
    }

    /// The number of moves.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Whether the initial board needed no moves at all.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Replay the solution one move at a time.
    pub fn steps(&self) -> impl Iterator<Item=SolutionStep<'_>> {
        std::iter::once(&self.initial)
            .chain(self.line.iter().map(|(_, board)| board))
            .zip(self.line.iter())
            .map(|(before, (action, after))| SolutionStep { before, action, after })
    }
}

/// Depth-first backtracking search for a line of moves which leaves a board a single color.
///
/// From each board, every move is played and the resulting boards are tried in order of increasing [`Entropy`](crate::Entropy),
/// shorter moves first among equals.
/// A line never returns to a board it has already passed through; separate lines may still share boards.
/// The first line found is returned, which need not be the shortest.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    options: SearchOptions,
    stats: SearchStats,
}

impl Solver {
    #[allow(missing_docs)]
    pub fn with_options(options: SearchOptions) -> Self {
        Self { options, stats: SearchStats::default() }
    }

    /// Counters from the most recent [`solve`](Self::solve).
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search for a solution to `board`.
    ///
    /// Returns [`Ok`] with [`None`] when no line of moves (within [`SearchOptions::max_depth`], if set) solves the board,
    /// or [`Err`] with a [`SolverFailure`] if the search had to be abandoned.
    pub fn solve(&mut self, board: &Board) -> Result<Option<Solution>, SolverFailure> {
        self.stats = SearchStats::default();

        match self.search(board, 0, HashSet::new())? {
            Some(mut line) => {
                line.reverse();
                info!("solved in {} move(s) after expanding {} board(s)", line.len(), self.stats.expanded);
                Ok(Some(Solution { initial: board.clone(), line }))
            }
            None => {
                info!("no solution after expanding {} board(s)", self.stats.expanded);
                Ok(None)
            }
        }
    }

    // `visited` holds the boards on the current line; each child gets its own copy.
    // a found line is returned last move first
    fn search(&mut self, board: &Board, depth: usize, mut visited: HashSet<Board>) -> Result<Option<Vec<(Move, Board)>>, SolverFailure> {
        if board.is_solved() {
            return Ok(Some(Vec::new()));
        }

        self.stats.deepest = self.stats.deepest.max(depth);
        if self.options.max_depth.is_some_and(|max| depth >= max.get()) {
            return Ok(None);
        }

        visited.insert(board.clone());
        self.stats.expanded += 1;

        let mut candidates = Vec::new();
        for action in board.moves() {
            let next = board.apply(&action)?;
            if visited.contains(&next) {
                trace!("skipping {}, its board is already on this line", action);
                self.stats.revisits += 1;
                continue;
            }
            candidates.push((next.entropy(), action.canonical_path(), action, next));
        }

        debug!("depth {}: {} candidate(s) from entropy {:?}", depth, candidates.len(), board.entropy());

        let ordered = candidates.into_iter().sorted_by(|a, b| a.0.cmp(&b.0)
            .then(a.2.len().cmp(&b.2.len()))
            .then_with(|| a.1.cmp(&b.1)));

        for (_, _, action, next) in ordered {
            if let Some(mut line) = self.search(&next, depth + 1, visited.clone())? {
                line.push((action, next));
                return Ok(Some(line));
            }
        }

        Ok(None)
    }
}

impl Board {
    /// Solve this board with a default [`Solver`]. See [`Solver::solve`].
    pub fn solve(&self) -> Result<Option<Solution>, SolverFailure> {
        Solver::default().solve(self)
    }
}
