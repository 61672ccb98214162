use crate::bitset::Set;
use crate::board::Digit;

/// Contains either a digit or all the candidates for an unsolved cell
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Digit that was part of the puzzle
    Given(Digit),
    /// Digit that was entered while solving
    Modifiable(Digit),
    /// Candidates of an empty cell
    Candidates(Set<Digit>),
}

impl CellState {
    /// Returns the digit of a filled cell
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Given(digit) | CellState::Modifiable(digit) => Some(digit),
            CellState::Candidates(_) => None,
        }
    }

    /// Checks whether the cell has no digit entered yet
    pub fn is_empty(self) -> bool {
        matches!(self, CellState::Candidates(_))
    }

    /// The cell's possible digits. A filled cell has exactly its own digit.
    pub fn digits(self) -> Set<Digit> {
        match self {
            CellState::Given(digit) | CellState::Modifiable(digit) => digit.as_set(),
            CellState::Candidates(digits) => digits,
        }
    }
}
