//! Errors returned by the grid constructors and the searches

/// A contradiction was found in the candidate grid.
///
/// Returned by the loop searches when a closed loop leaves no candidate outside of
/// itself that could break it. Such a grid has no solution at all, so no deduction made
/// from it would be meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("the candidate grid has no valid solution")]
pub struct Unsolvable;

/// Error for the textual [`Grid`](crate::Grid) constructors
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// The input does not describe exactly 81 cells
    #[error("expected 81 cells, found {0}")]
    WrongLength(usize),
    /// A character in a line of givens is neither a digit nor an empty marker
    #[error("cell {cell} contains invalid character {ch:?}")]
    InvalidEntry {
        /// Index of the cell, 0..81
        cell: u8,
        /// The offending character
        ch: char,
    },
    /// A pencil mark token could not be interpreted
    #[error("token {index} is not a valid cell: {token:?}")]
    InvalidToken {
        /// Position of the token among the cell tokens
        index: usize,
        /// The token itself
        token: String,
    },
}
