use crate::bitset::Set;
use crate::board::{Cell, Digit, House};

/// Kind of rectangle a strong link was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RectangleKind {
    /// All four corners are still empty
    Unique,
    /// Two corners were filled while solving
    Avoidable,
}

/// The structure justifying a link that doesn't follow from a single house or cell.
///
/// Patterns only explain links; the chain search never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Pattern {
    /// `n` cells of one house holding `n + 1` digits
    AlmostLockedSet {
        digits: Set<Digit>,
        cells: Set<Cell>,
        house: House,
    },
    /// Four cells in two rows, two columns and two blocks that would allow a second solution
    Rectangle {
        kind: RectangleKind,
        cells: Set<Cell>,
        digits: Set<Digit>,
        extra_digits: Set<Digit>,
    },
    /// Fish with fins, the fins being the base candidates outside every cover line
    Fish {
        digit: Digit,
        base: Set<House>,
        cover: Set<House>,
        fins: Set<Cell>,
    },
}

impl Pattern {
    /// Cells making up the pattern.
    pub fn cells(&self) -> Set<Cell> {
        match *self {
            Pattern::AlmostLockedSet { cells, .. } | Pattern::Rectangle { cells, .. } => cells,
            Pattern::Fish { base, cover, fins, .. } => (base.cells() & cover.cells()) | fins,
        }
    }

    /// Houses to highlight when displaying the pattern.
    pub fn houses(&self) -> Set<House> {
        match *self {
            Pattern::AlmostLockedSet { house, .. } => house.as_set(),
            Pattern::Rectangle { .. } => Set::NONE,
            Pattern::Fish { base, cover, .. } => base | cover,
        }
    }
}
