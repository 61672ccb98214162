//! Steps found by the strategies and what they prove
use crate::bitset::Set;
use crate::board::{Candidate, CandidateSet, Cell, House};
use crate::chaining::{Chain, Link, Pattern};
use crate::loops::Loop;

/// Whether a candidate is proven true or false
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum ConclusionKind {
    Assignment,
    Elimination,
}

/// A single candidate together with what is known about it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conclusion {
    #[allow(missing_docs)]
    pub candidate: Candidate,
    #[allow(missing_docs)]
    pub kind: ConclusionKind,
}

impl Conclusion {
    /// The candidate is the solution of its cell
    pub fn assignment(candidate: Candidate) -> Self {
        Conclusion {
            candidate,
            kind: ConclusionKind::Assignment,
        }
    }

    /// The candidate can be removed
    pub fn elimination(candidate: Candidate) -> Self {
        Conclusion {
            candidate,
            kind: ConclusionKind::Elimination,
        }
    }
}

/// The named technique a step was found with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[allow(missing_docs)]
pub enum Technique {
    UniqueRectangleType1,
    AvoidableRectangleType1,
    XChain,
    AlternatingInferenceChain,
    GroupedAlternatingInferenceChain,
    DiscontinuousNiceLoop,
    BivalueOddagonType1,
    BivalueOddagonType2,
    BivalueOddagonType3,
    GuardianLoop,
}

impl Technique {
    /// Numeric identifier, grouped by family. Steps of equal length are ordered by it.
    pub fn code(self) -> u16 {
        use self::Technique::*;
        match self {
            UniqueRectangleType1 => 0x0600,
            AvoidableRectangleType1 => 0x0610,
            XChain => 0x0701,
            AlternatingInferenceChain => 0x0702,
            GroupedAlternatingInferenceChain => 0x0703,
            DiscontinuousNiceLoop => 0x0704,
            BivalueOddagonType1 => 0x0801,
            BivalueOddagonType2 => 0x0802,
            BivalueOddagonType3 => 0x0803,
            GuardianLoop => 0x0810,
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        use self::Technique::*;
        match self {
            UniqueRectangleType1 => "Unique Rectangle Type 1",
            AvoidableRectangleType1 => "Avoidable Rectangle Type 1",
            XChain => "X-Chain",
            AlternatingInferenceChain => "Alternating Inference Chain",
            GroupedAlternatingInferenceChain => "Grouped Alternating Inference Chain",
            DiscontinuousNiceLoop => "Discontinuous Nice Loop",
            BivalueOddagonType1 => "Bivalue Oddagon Type 1",
            BivalueOddagonType2 => "Bivalue Oddagon Type 2",
            BivalueOddagonType3 => "Bivalue Oddagon Type 3",
            GuardianLoop => "Guardian",
        }
    }
}

/// The pattern that proves a step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Justification {
    /// An alternating inference chain
    Chain(Chain),
    /// An odd loop of cells
    Loop(Loop),
    /// A unique or avoidable rectangle
    Rectangle(Pattern),
}

/// What to highlight when presenting a step. Only produced here, never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct View {
    /// Cells of the pattern
    pub cells: Set<Cell>,
    /// Candidates the pattern is built from
    pub candidates: CandidateSet,
    /// Houses of the pattern
    pub houses: Set<House>,
    /// Links to draw, in chain order
    pub links: Vec<Link>,
}

/// A single logical step.
///
/// Conclusions are sorted, assignments first. Steps are compared structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    technique: Technique,
    conclusions: Vec<Conclusion>,
    justification: Justification,
    view: View,
}

impl Step {
    pub(crate) fn new(
        technique: Technique,
        assignments: impl IntoIterator<Item = Candidate>,
        eliminations: CandidateSet,
        justification: Justification,
        view: View,
    ) -> Self {
        let mut conclusions: Vec<_> = assignments
            .into_iter()
            .map(Conclusion::assignment)
            .chain(eliminations.iter().map(Conclusion::elimination))
            .collect();
        conclusions.sort_by_key(|conclusion| (conclusion.kind, conclusion.candidate));
        conclusions.dedup();
        Step {
            technique,
            conclusions,
            justification,
            view,
        }
    }

    #[allow(missing_docs)]
    pub fn technique(&self) -> Technique {
        self.technique
    }

    #[allow(missing_docs)]
    pub fn conclusions(&self) -> &[Conclusion] {
        &self.conclusions
    }

    #[allow(missing_docs)]
    pub fn justification(&self) -> &Justification {
        &self.justification
    }

    #[allow(missing_docs)]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Candidates proven true
    pub fn assignments(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.conclusions
            .iter()
            .filter(|conclusion| conclusion.kind == ConclusionKind::Assignment)
            .map(|conclusion| conclusion.candidate)
    }

    /// Candidates proven false
    pub fn eliminations(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.conclusions
            .iter()
            .filter(|conclusion| conclusion.kind == ConclusionKind::Elimination)
            .map(|conclusion| conclusion.candidate)
    }

    /// Number of links of a chain, cells of a loop or corners of a rectangle
    pub fn pattern_len(&self) -> usize {
        match &self.justification {
            Justification::Chain(chain) => chain.len(),
            Justification::Loop(found) => found.len(),
            Justification::Rectangle(pattern) => pattern.cells().len() as usize,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn technique_codes_are_unique() {
        let codes: HashSet<u16> = Technique::iter().map(Technique::code).collect();
        assert_eq!(codes.len(), Technique::iter().count());
    }

    #[test]
    fn conclusions_are_sorted() {
        let eliminations: CandidateSet = [Candidate::new(40, 3), Candidate::new(2, 7)].iter().copied().collect();
        let pattern = Pattern::Rectangle {
            kind: crate::chaining::RectangleKind::Unique,
            cells: [0u8, 1, 27, 28].iter().map(|&c| Cell::new(c)).collect(),
            digits: Set::NONE,
            extra_digits: Set::NONE,
        };
        let step = Step::new(
            Technique::UniqueRectangleType1,
            Some(Candidate::new(80, 1)),
            eliminations,
            Justification::Rectangle(pattern),
            View::default(),
        );
        let kinds: Vec<_> = step.conclusions().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            [ConclusionKind::Assignment, ConclusionKind::Elimination, ConclusionKind::Elimination]
        );
        assert_eq!(step.eliminations().next(), Some(Candidate::new(2, 7)));
        assert_eq!(step.pattern_len(), 4);
    }
}
