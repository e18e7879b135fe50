use crate::color::Color;
use crate::location::Location;
use crate::shape::{Axis, Step};

/// The behavior of a [`Cell`], along with any parameters that behavior needs.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CellKind {
    /// A hole which occupies its location but never takes part in moves. Rays pass over it.
    #[default]
    Empty,
    /// An ordinary cell; paths pass straight through it along the axis they entered on.
    Basic,
    /// Sees all four directions no matter how a path entered, so paths may turn here.
    Square,
    /// Connects like [`Basic`](Self::Basic); when activated, recolors everything along each facing.
    Turret {
        /// The directions this turret fires along.
        facings: Vec<Step>,
    },
    /// Connects only along `axis`, and only to a path already traveling along it.
    Line {
        /// The only axis this line connects along.
        axis: Axis,
    },
    /// Connects like [`Basic`](Self::Basic); when activated, floods its own color region.
    Diamond,
    /// Connects like [`Basic`](Self::Basic); when activated, recolors every other triangle on the board.
    Triangle,
    /// Connects like [`Basic`](Self::Basic); when activated, recolors the surrounding 3x3 ring.
    Area,
}

impl CellKind {
    /// The character used for this kind in text output.
    pub fn glyph(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::Basic => 'o',
            Self::Square => '#',
            Self::Turret { .. } => '+',
            Self::Line { .. } => '~',
            Self::Diamond => '*',
            Self::Triangle => '^',
            Self::Area => '@',
        }
    }
}

/// A single cell on a board. Two cells are equal when their kind, color and location all match.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cell {
    pub(crate) location: Location,
    pub(crate) color: Color,
    pub(crate) kind: CellKind,
}

impl Cell {
    /// A cell of `kind` painted `color` at `location`.
    pub fn new(kind: CellKind, color: Color, location: Location) -> Self {
        Self { location, color, kind }
    }

    #[allow(missing_docs)]
    pub fn location(&self) -> Location {
        self.location
    }

    #[allow(missing_docs)]
    pub fn color(&self) -> Color {
        self.color
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> &CellKind {
        &self.kind
    }

    /// Whether this cell takes part in moves and coloring, i.e. is not [`CellKind::Empty`].
    pub fn is_active(&self) -> bool {
        self.kind != CellKind::Empty
    }
}
