use strum::VariantArray;

use crate::location::{Coord, Location};

/// One of the four compass directions a ray or a path step can travel in.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// Toward lower `y`.
    Up,
    /// Toward higher `y`.
    Down,
    /// Toward lower `x`.
    Left,
    /// Toward higher `x`.
    Right,
}

impl Step {
    pub(crate) fn delta(&self) -> (Coord, Coord) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    pub fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(self.delta())
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The [`Axis`] this direction travels along.
    pub fn axis(&self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

/// The axis a path is traveling along, or the fixed orientation of a line cell.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Axis {
    /// Up and down.
    Vertical,
    /// Left and right.
    Horizontal,
}

impl Axis {
    /// The two [`Step`]s running along this axis.
    pub fn steps(&self) -> [Step; 2] {
        match self {
            Self::Vertical => [Step::Up, Step::Down],
            Self::Horizontal => [Step::Left, Step::Right],
        }
    }

    /// The axis of travel from `a` to `b`.
    ///
    /// Locations sharing a column are vertical to one another and anything else counts as horizontal;
    /// callers only ever ask about locations that see each other along a row or column.
    pub fn between(a: Location, b: Location) -> Self {
        if a.0 == b.0 {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}
