use std::fmt::{Display, Formatter};

pub(crate) type Coord = i32;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on a board. `x` grows to the right and `y` grows downward.
///
/// Locations may be negative; a board only cares about the box spanned by its active cells.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn offset_by(self, rhs: (Coord, Coord)) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl From<(Coord, Coord)> for Location {
    fn from(value: (Coord, Coord)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// The inclusive bounding box of the active cells of a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Bounds {
    pub(crate) min: Location,
    pub(crate) max: Location,
}

impl Bounds {
    /// Span `locations`, or return [`None`] if there are none.
    pub(crate) fn spanning(locations: impl IntoIterator<Item=Location>) -> Option<Self> {
        locations.into_iter().fold(None, |acc, loc| Some(match acc {
            None => Self { min: loc, max: loc },
            Some(Self { min, max }) => Self {
                min: Location(min.0.min(loc.0), min.1.min(loc.1)),
                max: Location(max.0.max(loc.0), max.1.max(loc.1)),
            },
        }))
    }

    /// The top left corner.
    pub fn min(&self) -> Location {
        self.min
    }

    /// The bottom right corner.
    pub fn max(&self) -> Location {
        self.max
    }

    /// Whether `location` lies inside this box, edges included.
    pub fn contains(&self, location: Location) -> bool {
        (self.min.0..=self.max.0).contains(&location.0) && (self.min.1..=self.max.1).contains(&location.1)
    }

    pub(crate) fn width(&self) -> usize {
        (self.max.0 - self.min.0 + 1) as usize
    }

    pub(crate) fn height(&self) -> usize {
        (self.max.1 - self.min.1 + 1) as usize
    }
}
