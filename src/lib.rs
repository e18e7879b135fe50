#![warn(missing_docs)]

//! # `monochrome`
//!
//! A solver for color merge puzzles: a board of typed, colored cells must be brought to a single color
//! through a sequence of moves, each of which recolors a chain of cells and sets off effects depending on the cells it touches.
//! Begin by building a board with a [`BoardBuilder`] or [`Board::from_cells`], then call [`solve()`](crate::Board::solve),
//! yielding a [`Solution`] which can be replayed one move at a time.
//!
//! # Rules
//! Cells see one another along rows and columns, skipping over empty cells but not over gaps where no cell was placed.
//! A move starts on some cell, runs through one or more cells of a single other "carrier" color and ends on a cell of the starting color.
//! Every cell in between takes the starting color.
//!
//! Most cells only let a path continue straight on; squares let it turn, and lines only connect along their own axis.
//! Some cells do more when a move recolors them:
//! - turrets recolor everything along the directions they face,
//! - diamonds recolor the region of their own color they sit in,
//! - triangles recolor every other triangle on the board,
//! - areas recolor the ring of cells around them.
//!
//! Cells recolored this way set off their own effects in turn, until nothing new changes.
//!
//! # Internals
//! [`Board::moves`] enumerates every legal path by recursive extension from each cell,
//! [`Board::apply`] plays one in rounds of activation, and the [`Solver`] runs a depth-first search over the resulting boards,
//! trying boards with the fewest colors (and then the smallest product of color counts) first.

pub use board::{Board, Entropy};
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use cell::{Cell, CellKind};
pub use color::Color;
pub use location::{Bounds, Location};
pub use moves::{InvalidMove, Move};
pub use shape::{Axis, Step};
pub use solver::{SearchOptions, SearchStats, Solution, SolutionStep, Solver, SolverFailure};

pub(crate) mod board;
pub(crate) mod location;
pub(crate) mod shape;
pub(crate) mod cell;
pub(crate) mod color;
pub mod builder;
pub(crate) mod moves;
pub(crate) mod discovery;
pub(crate) mod effect;
pub mod solver;
