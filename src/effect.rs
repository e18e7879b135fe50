use std::collections::{BTreeSet, HashSet, VecDeque};

use itertools::iproduct;
use log::trace;

use crate::board::Board;
use crate::cell::{Cell, CellKind};
use crate::color::Color;
use crate::location::Location;
use crate::moves::{InvalidMove, Move};
use crate::shape::Step;

impl Board {
    /// Play `action`, returning the resulting board. `self` is left untouched.
    ///
    /// The interior of the path is the first activation batch.
    /// Each round, the targets of every cell in the batch are gathered against the board as it stands,
    /// then the batch is painted with the move color and the targets not yet activated form the next batch.
    /// Every round activates at least one new location, so the cascade ends within one round per cell.
    ///
    /// Fails if `action` is not legal here; see [`validate_move`](Self::validate_move).
    pub fn apply(&self, action: &Move) -> Result<Board, InvalidMove> {
        let color = self.validate_move(action)?;
        let mut result = self.clone();

        let mut activated: HashSet<Location> = action.interior().iter().copied().collect();
        let mut batch: BTreeSet<Location> = activated.iter().copied().collect();

        while !batch.is_empty() {
            let targets: BTreeSet<Location> = batch.iter()
                .filter_map(|location| result.cells.get(location))
                .flat_map(|cell| result.targets_of(cell, color))
                .collect();

            for location in &batch {
                result.recolor(*location, color);
            }

            trace!("recolored {} cell(s) to {}, {} target(s) pending", batch.len(), color, targets.len());

            batch = targets.into_iter().filter(|location| activated.insert(*location)).collect();
        }

        Ok(result)
    }

    /// The locations `cell` recolors when it is activated by a move painting `color`, excluding its own.
    pub(crate) fn targets_of(&self, cell: &Cell, color: Color) -> Vec<Location> {
        match &cell.kind {
            CellKind::Turret { facings } => facings.iter()
                .flat_map(|step| self.raycast(cell.location, *step, true))
                .collect(),
            CellKind::Diamond => self.flood_from(cell),
            CellKind::Triangle => self.active_cells()
                .filter(|other| other.kind == CellKind::Triangle)
                .filter(|other| other.location != cell.location && other.color != color)
                .map(|other| other.location)
                .collect(),
            CellKind::Area => iproduct!(-1..=1, -1..=1)
                .filter(|offset| *offset != (0, 0))
                .map(|offset| cell.location.offset_by(offset))
                .filter(|location| self.active_cell(*location).is_some_and(|other| other.color != color))
                .collect(),
            CellKind::Empty | CellKind::Basic | CellKind::Square | CellKind::Line { .. } => Vec::new(),
        }
    }

    /// Every active cell joined to `origin` through orthogonally adjacent cells of its color, `origin` excluded.
    fn flood_from(&self, origin: &Cell) -> Vec<Location> {
        let mut visited = HashSet::from([origin.location]);
        let mut unvisited = VecDeque::from([origin.location]);

        while let Some(current) = unvisited.pop_front() {
            for step in [Step::Up, Step::Down, Step::Left, Step::Right] {
                let next = step.attempt_from(current);
                if self.active_cell(next).is_some_and(|c| c.color == origin.color) && visited.insert(next) {
                    unvisited.push_back(next);
                }
            }
        }

        visited.remove(&origin.location);
        visited.into_iter().collect()
    }
}
