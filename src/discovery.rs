use std::collections::HashSet;

use log::trace;

use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::location::Location;
use crate::moves::Move;
use crate::shape::Axis;

/// State shared by every branch of one path search: the colors a path may use.
struct Seed {
    start_color: Color,
    carrier_color: Color,
}

impl Board {
    /// Find every legal move on this board.
    ///
    /// Each active cell is tried as the start of a path.
    /// Every neighbor of a different color fixes that neighbor's color as the carrier,
    /// and the path is extended through carrier cells until it reaches a cell of the starting color.
    /// A move and its reverse are the same move, so each is only returned once.
    pub fn moves(&self) -> HashSet<Move> {
        let mut moves = HashSet::new();

        for start in self.active_cells() {
            for first in self.neighbors(start, None).into_iter().filter(|n| n.color != start.color) {
                let seed = Seed { start_color: start.color, carrier_color: first.color };
                let visited = HashSet::from([start.location, first.location]);

                self.explore(
                    &seed,
                    first,
                    Axis::between(start.location, first.location),
                    &visited,
                    Move::from_seed(start.location, first.location),
                    &mut moves,
                );
            }
        }

        trace!("found {} moves", moves.len());
        moves
    }

    // `visited` always holds exactly the locations on `path`; each branch extends its own copy
    fn explore(&self, seed: &Seed, frontier: &Cell, entry: Axis, visited: &HashSet<Location>, path: Move, moves: &mut HashSet<Move>) {
        if frontier.color == seed.start_color {
            moves.insert(path);
            return;
        }

        let next = self.neighbors(frontier, Some(entry)).into_iter()
            .filter(|n| !visited.contains(&n.location))
            .filter(|n| n.color == seed.carrier_color || n.color == seed.start_color);

        for neighbor in next {
            let mut branch_visited = visited.clone();
            branch_visited.insert(neighbor.location);

            self.explore(
                seed,
                neighbor,
                Axis::between(frontier.location, neighbor.location),
                &branch_visited,
                path.extend(neighbor.location),
                moves,
            );
        }
    }
}
