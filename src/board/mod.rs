//! Types for cells, digits and other things on a sudoku board
mod candidate;
mod candidate_set;
mod cell_state;
mod digit;
pub mod positions;

pub use self::{
    candidate::Candidate,
    candidate_set::CandidateSet,
    cell_state::CellState,
    digit::Digit,
    positions::{Band, Block, Cell, Col, House, HouseType, Row, Stack},
};
