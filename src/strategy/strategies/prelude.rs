pub(crate) use crate::bitset::Set;
pub(crate) use crate::board::{Candidate, CandidateSet, Cell, Digit, House};
pub(crate) use crate::errors::Unsolvable;
pub(crate) use crate::strategy::deduction::{Justification, Step, Technique, View};
pub(crate) use crate::Grid;
