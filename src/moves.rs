use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use thiserror::Error;
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::color::Color;
use crate::location::Location;
use crate::shape::Axis;

/// Reasons a [`Move`] may not be played on a given [`Board`].
///
/// Moves produced by [`Board::moves`] are always valid, so any of these is a logic error.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InvalidMove {
    /// A path must contain at least two locations.
    #[error("move path has {len} location(s), at least 2 are required")]
    TooShort {
        /// How many locations the path has.
        len: usize,
    },
    /// A path visited the same location twice.
    #[error("move path visits {0} more than once")]
    RevisitsLocation(Location),
    /// A path ran through a location with no active cell.
    #[error("no active cell at {0}")]
    NotOnBoard(Location),
    /// The first and last cells are painted differently.
    #[error("move starts on {start} but ends on {end}")]
    EndpointColorMismatch {
        /// Color of the first cell.
        start: Color,
        /// Color of the last cell.
        end: Color,
    },
    /// An interior cell does not carry the color of the first interior cell, or carries the move color itself.
    #[error("cell at {location} is {found}, expected carrier color {expected}")]
    CarrierColorMismatch {
        /// The offending interior cell.
        location: Location,
        /// Color of the first interior cell.
        expected: Color,
        /// Color actually found at `location`.
        found: Color,
    },
    /// Two consecutive locations do not see each other along the axis the path is traveling.
    #[error("{to} is not reachable from {from}")]
    NotAdjacent {
        /// The location the step leaves.
        from: Location,
        /// The location it fails to reach.
        to: Location,
    },
}

/// A move: a path of locations which starts and ends on one color and runs through a single other, "carrier", color.
///
/// The direction a path is read in does not matter;
/// a move equals its reverse and both hash the same.
#[derive(Clone, Debug, Eq)]
pub struct Move {
    path: Vec<Location>,
}

impl Move {
    /// Wrap `path`, checking only its shape. Use [`Board::validate_move`] to check it against a board.
    pub fn new(path: Vec<Location>) -> Result<Self, InvalidMove> {
        if path.len() < 2 {
            return Err(InvalidMove::TooShort { len: path.len() });
        }

        let mut seen = HashSet::with_capacity(path.len());
        if let Some(location) = path.iter().find(|location| !seen.insert(**location)) {
            return Err(InvalidMove::RevisitsLocation(*location));
        }

        Ok(Self { path })
    }

    /// Internal constructor for paths already known to be well formed.
    pub(crate) fn from_seed(start: Location, next: Location) -> Self {
        Self { path: vec![start, next] }
    }

    pub(crate) fn extend(&self, location: Location) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(location);
        Self { path }
    }

    #[allow(missing_docs)]
    pub fn path(&self) -> &[Location] {
        &self.path
    }

    /// The number of locations on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`; moves hold at least two locations.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    #[allow(missing_docs)]
    pub fn start(&self) -> Location {
        self.path[0]
    }

    #[allow(missing_docs)]
    pub fn end(&self) -> Location {
        self.path[self.path.len() - 1]
    }

    /// The two ends of the path, without regard to which is first.
    pub fn endpoints(&self) -> UnorderedPair<Location> {
        UnorderedPair(self.start(), self.end())
    }

    /// Every location except the two ends. These are recolored when the move is played.
    pub fn interior(&self) -> &[Location] {
        &self.path[1..self.path.len() - 1]
    }

    /// The path read from whichever end sorts lower, so a move and its reverse share one canonical form.
    pub fn canonical_path(&self) -> Vec<Location> {
        if self.start() > self.end() {
            self.path.iter().rev().copied().collect_vec()
        } else {
            self.path.clone()
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path || self.path.iter().eq(other.path.iter().rev())
    }
}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
        self.canonical_path().hash(state);
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.iter().join(" -> "))
    }
}

impl Board {
    /// Check that `action` is legal on this board, returning the color it paints with.
    ///
    /// Both ends must share a color, every interior cell must share one other color,
    /// and each location must be seen from the previous one along the axis the path arrived on.
    pub fn validate_move(&self, action: &Move) -> Result<Color, InvalidMove> {
        let cells = action.path.iter()
            .map(|location| self.active_cell(*location).ok_or(InvalidMove::NotOnBoard(*location)))
            .collect::<Result<Vec<_>, _>>()?;

        let start = cells[0].color;
        let end = cells[cells.len() - 1].color;
        if start != end {
            return Err(InvalidMove::EndpointColorMismatch { start, end });
        }

        let interior = &cells[1..cells.len() - 1];
        if let Some(first_interior) = interior.first() {
            let expected = first_interior.color;
            for cell in interior {
                if cell.color != expected || cell.color == start {
                    return Err(InvalidMove::CarrierColorMismatch { location: cell.location, expected, found: cell.color });
                }
            }
        }

        let mut entry: Option<Axis> = None;
        for (from, to) in cells.iter().tuple_windows() {
            if !self.neighbors(from, entry).iter().any(|n| n.location == to.location) {
                return Err(InvalidMove::NotAdjacent { from: from.location, to: to.location });
            }
            entry = Some(Axis::between(from.location, to.location));
        }

        Ok(start)
    }
}
