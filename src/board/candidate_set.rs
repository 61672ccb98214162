use crate::bitset::Set;
use crate::board::{Candidate, Cell, Digit};
use crate::helper::DigitArray;
use std::fmt;

/// A set of candidates, stored as one set of cells per digit.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateSet([Set<Cell>; 9]);

impl CandidateSet {
    /// The empty set
    pub const NONE: CandidateSet = CandidateSet([Set(0); 9]);

    /// Set holding `digit` in every cell of `cells`.
    pub fn from_cells(cells: Set<Cell>, digit: Digit) -> Self {
        let mut set = Self::NONE;
        set.0[digit.as_index()] = cells;
        set
    }

    /// Set holding every digit of `digits` in `cell`.
    pub fn from_digits(cell: Cell, digits: Set<Digit>) -> Self {
        let mut set = Self::NONE;
        for digit in digits {
            set.0[digit.as_index()] |= cell;
        }
        set
    }

    pub(crate) fn from_digit_array(cells: DigitArray<Set<Cell>>) -> Self {
        CandidateSet(cells.0)
    }

    /// Adds a candidate.
    pub fn insert(&mut self, candidate: Candidate) {
        self.0[candidate.digit.as_index()] |= candidate.cell;
    }

    /// Checks whether a candidate is part of this set.
    pub fn contains(&self, candidate: Candidate) -> bool {
        self.0[candidate.digit.as_index()].contains(candidate.cell)
    }

    /// Number of candidates in the set.
    pub fn len(&self) -> usize {
        self.0.iter().map(|cells| cells.len() as usize).sum()
    }

    /// Checks whether the set holds no candidate.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|cells| cells.is_empty())
    }

    /// Cells in which `digit` is part of the set.
    pub fn digit_cells(&self, digit: Digit) -> Set<Cell> {
        self.0[digit.as_index()]
    }

    /// Cells holding at least one candidate of the set.
    pub fn cells(&self) -> Set<Cell> {
        self.0.iter().fold(Set::<Cell>::NONE, |acc, &cells| acc | cells)
    }

    /// Digits with at least one candidate in the set.
    pub fn digits(&self) -> Set<Digit> {
        Digit::all()
            .filter(|digit| !self.digit_cells(*digit).is_empty())
            .collect()
    }

    /// Returns the only candidate of the set, if it has exactly one.
    pub fn single(&self) -> Option<Candidate> {
        let mut iter = self.iter();
        match (iter.next(), iter.next()) {
            (Some(candidate), None) => Some(candidate),
            _ => None,
        }
    }

    /// Candidates in either set.
    pub fn union(&self, other: &CandidateSet) -> CandidateSet {
        let mut set = *self;
        for (mine, theirs) in set.0.iter_mut().zip(other.0.iter()) {
            *mine |= *theirs;
        }
        set
    }

    /// Candidates in both sets.
    pub fn intersection(&self, other: &CandidateSet) -> CandidateSet {
        let mut set = *self;
        for (mine, theirs) in set.0.iter_mut().zip(other.0.iter()) {
            *mine &= *theirs;
        }
        set
    }

    /// Candidates of `self` that are not in `other`.
    pub fn without(&self, other: &CandidateSet) -> CandidateSet {
        let mut set = *self;
        for (mine, theirs) in set.0.iter_mut().zip(other.0.iter()) {
            mine.remove(*theirs);
        }
        set
    }

    /// Checks whether both sets share a candidate.
    pub fn overlaps(&self, other: &CandidateSet) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .any(|(mine, theirs)| mine.overlaps(*theirs))
    }

    /// Iterates the candidates ordered by digit first, then by cell.
    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        Digit::all().flat_map(move |digit| {
            self.digit_cells(digit)
                .into_iter()
                .map(move |cell| Candidate { cell, digit })
        })
    }
}

impl std::iter::FromIterator<Candidate> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut set = CandidateSet::NONE;
        for candidate in iter {
            set.insert(candidate);
        }
        set
    }
}

impl From<Candidate> for CandidateSet {
    fn from(candidate: Candidate) -> Self {
        CandidateSet::from_cells(candidate.cell.as_set(), candidate.digit)
    }
}

impl fmt::Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|c| (c.cell.get(), c.digit.get())))
            .finish()
    }
}
