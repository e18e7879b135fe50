use std::collections::HashSet;

use thiserror::Error;

use crate::board::Board;
use crate::cell::{Cell, CellKind};
use crate::color::Color;
use crate::location::Location;
use crate::shape::{Axis, Step};

/// Reasons a builder may become invalid while building.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BuilderInvalidReason {
    /// Two cells were placed at the same location.
    #[error("more than one cell placed at {0}")]
    DuplicateLocation(Location),
    /// Every cell placed is empty, so there is nothing to solve.
    #[error("the board has no active cells")]
    NoActiveCells,
}

/// Collects cells one at a time and turns them into a [`Board`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder becomes invalid, every further placement is ignored and [`build`](Self::build) reports why.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    cells: Vec<Cell>,
    occupied: HashSet<Location>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl BoardBuilder {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `cell`.
    ///
    /// May cause the builder to enter a [`DuplicateLocation`](BuilderInvalidReason::DuplicateLocation) invalid state if its location is already taken.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_cell(&mut self, cell: Cell) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.occupied.insert(cell.location) {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicateLocation(cell.location));
            return self;
        }

        self.cells.push(cell);
        self
    }

    /// Place a hole. It is never part of a move, but rays pass over it where a gap would stop them.
    pub fn add_empty(&mut self, location: Location) -> &mut Self {
        self.add_cell(Cell::new(CellKind::Empty, Color::Blank, location))
    }

    #[allow(missing_docs)]
    pub fn add_basic(&mut self, color: Color, location: Location) -> &mut Self {
        self.add_cell(Cell::new(CellKind::Basic, color, location))
    }

    #[allow(missing_docs)]
    pub fn add_square(&mut self, color: Color, location: Location) -> &mut Self {
        self.add_cell(Cell::new(CellKind::Square, color, location))
    }

    /// Place a turret firing along every direction in `facings`.
    /// Any appearance of a direction after the first in `facings` is ignored.
    pub fn add_turret(&mut self, color: Color, location: Location, facings: Vec<Step>) -> &mut Self {
        let mut seen = HashSet::with_capacity(facings.len());
        let facings = facings.into_iter().filter(|step| seen.insert(*step)).collect();
        self.add_cell(Cell::new(CellKind::Turret { facings }, color, location))
    }

    #[allow(missing_docs)]
    pub fn add_line(&mut self, color: Color, location: Location, axis: Axis) -> &mut Self {
        self.add_cell(Cell::new(CellKind::Line { axis }, color, location))
    }

    #[allow(missing_docs)]
    pub fn add_diamond(&mut self, color: Color, location: Location) -> &mut Self {
        self.add_cell(Cell::new(CellKind::Diamond, color, location))
    }

    #[allow(missing_docs)]
    pub fn add_triangle(&mut self, color: Color, location: Location) -> &mut Self {
        self.add_cell(Cell::new(CellKind::Triangle, color, location))
    }

    #[allow(missing_docs)]
    pub fn add_area(&mut self, color: Color, location: Location) -> &mut Self {
        self.add_cell(Cell::new(CellKind::Area, color, location))
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&mut self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            match Board::from_cells(self.cells.iter().cloned()) {
                Ok(board) => return Ok(board),
                Err(reason) => self.invalid_reasons.push(reason),
            }
        }

        Err(&self.invalid_reasons)
    }
}
