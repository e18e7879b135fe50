use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::builder::BuilderInvalidReason;
use crate::cell::{Cell, CellKind};
use crate::color::Color;
use crate::location::{Bounds, Coord, Location};
use crate::moves::Move;
use crate::shape::{Axis, Step};

/// How far a board is from a single color: the number of distinct colors among active cells
/// and the product of the number of cells of each color. Lower is closer to solved.
pub type Entropy = (usize, u128);

/// The full state of a puzzle: every placed cell keyed by location, empty cells included.
///
/// Cells are stored sorted by location, so two boards compare and hash equal exactly when they hold the same cells,
/// no matter the order those cells were placed in.
/// A board is never mutated once it has been handed out; moves produce fresh boards through [`apply`](Board::apply).
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder) or [`Board::from_cells`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    pub(crate) cells: BTreeMap<Location, Cell>,
    // spans active cells only and is fixed for the life of the board
    pub(crate) bounds: Bounds,
}

impl Board {
    /// Build a board directly from `cells`.
    ///
    /// Fails with [`DuplicateLocation`](BuilderInvalidReason::DuplicateLocation) if two cells share a location,
    /// or [`NoActiveCells`](BuilderInvalidReason::NoActiveCells) if every cell is empty.
    pub fn from_cells(cells: impl IntoIterator<Item=Cell>) -> Result<Self, BuilderInvalidReason> {
        let mut map = BTreeMap::new();
        for cell in cells {
            let location = cell.location;
            if map.insert(location, cell).is_some() {
                return Err(BuilderInvalidReason::DuplicateLocation(location));
            }
        }

        let bounds = Bounds::spanning(map.values().filter(|c| c.is_active()).map(|c| c.location))
            .ok_or(BuilderInvalidReason::NoActiveCells)?;

        Ok(Self { cells: map, bounds })
    }

    /// The cell at `location`, empty or not.
    pub fn cell(&self, location: Location) -> Option<&Cell> {
        self.cells.get(&location)
    }

    /// The cell at `location` if it takes part in moves.
    pub fn active_cell(&self, location: Location) -> Option<&Cell> {
        self.cells.get(&location).filter(|c| c.is_active())
    }

    /// Every cell on the board in location order, empty cells included.
    pub fn cells(&self) -> impl Iterator<Item=&Cell> {
        self.cells.values()
    }

    /// Every cell taking part in moves, in location order.
    pub fn active_cells(&self) -> impl Iterator<Item=&Cell> {
        self.cells.values().filter(|c| c.is_active())
    }

    #[allow(missing_docs)]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether every active cell shares one color.
    pub fn is_solved(&self) -> bool {
        self.active_cells().map(|c| c.color).all_equal()
    }

    /// See [`Entropy`].
    pub fn entropy(&self) -> Entropy {
        let counts = self.active_cells().map(|c| c.color).counts();
        (counts.len(), counts.values().fold(1u128, |acc, n| acc.saturating_mul(*n as u128)))
    }

    /// Cast a ray from `origin` in direction `step`, returning the locations of the non-empty cells it meets in order.
    ///
    /// With `pass_through`, the ray runs to the edge of the board's [`Bounds`], jumping any gaps.
    /// Otherwise it stops at the first location where no cell was placed at all.
    /// Empty cells never stop a ray and are never returned.
    pub fn raycast(&self, origin: Location, step: Step, pass_through: bool) -> Vec<Location> {
        let mut result = Vec::new();
        let mut location = step.attempt_from(origin);

        while self.bounds.contains(location) {
            match self.cells.get(&location) {
                None if !pass_through => break,
                Some(cell) if cell.is_active() => result.push(location),
                _ => {}
            }
            location = step.attempt_from(location);
        }

        result
    }

    /// The cell seen from `origin` looking in direction `step`, if any.
    ///
    /// This is the first hit of a non-pass-through [`raycast`](Self::raycast).
    /// A line cell is only seen when looked at along its own axis; seen from the side it still ends the ray, but nothing is returned.
    pub fn neighbor_in_direction(&self, origin: Location, step: Step) -> Option<&Cell> {
        let hit = *self.raycast(origin, step, false).first()?;
        let cell = self.cells.get(&hit)?;

        match cell.kind {
            CellKind::Line { axis } if axis != Axis::between(origin, hit) => None,
            _ => Some(cell),
        }
    }

    /// The cells `cell` connects to, given the axis a path arrived on, or [`None`] if the path starts here.
    ///
    /// - [`Square`](CellKind::Square) looks in all four directions regardless of `entry`.
    /// - [`Line`](CellKind::Line) looks along its own axis, and sees nothing if `entry` is some other axis.
    /// - [`Empty`](CellKind::Empty) sees nothing.
    /// - Every other kind looks along `entry`, or in all four directions without one.
    pub fn neighbors(&self, cell: &Cell, entry: Option<Axis>) -> Vec<&Cell> {
        let steps = match (&cell.kind, entry) {
            (CellKind::Empty, _) => vec![],
            (CellKind::Square, _) => Step::VARIANTS.to_vec(),
            (CellKind::Line { axis }, Some(entry)) if entry != *axis => vec![],
            (CellKind::Line { axis }, _) => axis.steps().to_vec(),
            (_, Some(entry)) => entry.steps().to_vec(),
            (_, None) => Step::VARIANTS.to_vec(),
        };

        steps.iter()
            .filter_map(|step| self.neighbor_in_direction(cell.location, *step))
            .collect_vec()
    }

    pub(crate) fn recolor(&mut self, location: Location, color: Color) {
        if let Some(cell) = self.cells.get_mut(&location) {
            cell.color = color;
        }
    }

    /// Lay the board out as a grid spanning its [`Bounds`], one `[glyph, color]` pair per location.
    pub(crate) fn to_array(&self) -> Array2<[char; 2]> {
        Array2::from_shape_fn((self.bounds.height(), self.bounds.width()), |(row, col)| {
            let location = Location(self.bounds.min.0 + col as Coord, self.bounds.min.1 + row as Coord);
            match self.cells.get(&location) {
                Some(cell) => [cell.kind.glyph(), cell.color.display()],
                None => [' ', ' '],
            }
        })
    }

    /// Render the board with `action` drawn over it: `S` on the first cell, `E` on the last, `-` in between.
    pub fn render_move(&self, action: &Move) -> String {
        let mut grid = self.to_array();
        let last = action.len() - 1;

        for (k, location) in action.path().iter().enumerate() {
            let index = ((location.1 - self.bounds.min.1) as usize, (location.0 - self.bounds.min.0) as usize);
            if let Some(pair) = grid.get_mut(index) {
                pair[0] = match k {
                    0 => 'S',
                    k if k == last => 'E',
                    _ => '-',
                };
            }
        }

        Self::print(grid)
    }

    pub(crate) fn print(grid: Array2<[char; 2]>) -> String {
        let mut out = String::with_capacity(grid.nrows() * (grid.ncols() * 3 + 1));

        for row in grid.rows() {
            let line = row.iter().map(|pair| pair.iter().collect::<String>()).join(" ");
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::print(self.to_array()))
    }
}
