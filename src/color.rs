use strum::{Display, VariantArray};

/// The fixed palette a cell may be painted with.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Color {
    /// The blank color, typically carried by empty cells.
    Blank,
    #[allow(missing_docs)]
    Cyan,
    #[allow(missing_docs)]
    Orange,
    #[allow(missing_docs)]
    Yellow,
    #[allow(missing_docs)]
    Red,
    #[allow(missing_docs)]
    Purple,
    #[allow(missing_docs)]
    Green,
}

impl Color {
    /// The single character used for this color in text output.
    pub fn display(&self) -> char {
        match self {
            Self::Blank => '-',
            Self::Cyan => 'C',
            Self::Orange => 'O',
            Self::Yellow => 'Y',
            Self::Red => 'R',
            Self::Purple => 'P',
            Self::Green => 'G',
        }
    }
}
