use super::deduction::Step;
use std::collections::HashSet;

/// Accumulates the steps of one search.
///
/// Steps without conclusions and steps equal to an earlier one are dropped.
/// In *only first* mode the first accepted step ends the search.
#[derive(Debug, Clone, Default)]
pub struct StepCollector {
    only_first: bool,
    seen: HashSet<Step>,
    steps: Vec<Step>,
}

impl StepCollector {
    /// Collector keeping every step
    pub fn all() -> Self {
        StepCollector::default()
    }

    /// Collector that is done after the first step
    pub fn first() -> Self {
        StepCollector {
            only_first: true,
            ..StepCollector::default()
        }
    }

    /// Adds a step. Returns `true` if the search should stop.
    pub fn push(&mut self, step: Step) -> bool {
        if self.is_done() {
            return true;
        }
        if step.conclusions().is_empty() || self.seen.contains(&step) {
            return false;
        }
        tracing::trace!(technique = step.technique().name(), conclusions = step.conclusions().len(), "step");
        self.seen.insert(step.clone());
        self.steps.push(step);
        self.is_done()
    }

    /// Checks whether no more steps are accepted
    pub fn is_done(&self) -> bool {
        self.only_first && !self.steps.is_empty()
    }

    /// Number of accepted steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the steps ordered by pattern length, then technique.
    /// Steps with equal keys keep the order they were found in.
    pub fn into_steps(self) -> Vec<Step> {
        let mut steps = self.steps;
        steps.sort_by_key(|step| (step.pattern_len(), step.technique().code()));
        steps
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitset::Set;
    use crate::board::{Candidate, CandidateSet, Cell};
    use crate::chaining::{Pattern, RectangleKind};
    use crate::strategy::deduction::{Justification, Technique, View};

    fn step(technique: Technique, corners: &[u8], eliminated: Candidate) -> Step {
        let pattern = Pattern::Rectangle {
            kind: RectangleKind::Unique,
            cells: corners.iter().map(|&c| Cell::new(c)).collect(),
            digits: Set::NONE,
            extra_digits: Set::NONE,
        };
        Step::new(
            technique,
            None,
            CandidateSet::from(eliminated),
            Justification::Rectangle(pattern),
            View::default(),
        )
    }

    #[test]
    fn duplicates_and_empty_steps_are_dropped() {
        let mut collector = StepCollector::all();
        let a = step(Technique::UniqueRectangleType1, &[0, 1, 27, 28], Candidate::new(28, 1));
        assert!(!collector.push(a.clone()));
        assert!(!collector.push(a));
        let empty = Step::new(
            Technique::XChain,
            None,
            CandidateSet::NONE,
            Justification::Rectangle(Pattern::Rectangle {
                kind: RectangleKind::Unique,
                cells: Set::NONE,
                digits: Set::NONE,
                extra_digits: Set::NONE,
            }),
            View::default(),
        );
        assert!(!collector.push(empty));
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn only_first() {
        let mut collector = StepCollector::first();
        assert!(collector.push(step(Technique::UniqueRectangleType1, &[0, 1, 27, 28], Candidate::new(0, 1))));
        assert!(collector.push(step(Technique::UniqueRectangleType1, &[0, 1, 27, 28], Candidate::new(0, 2))));
        assert_eq!(collector.into_steps().len(), 1);
    }

    #[test]
    fn ordered_by_length_then_code() {
        let mut collector = StepCollector::all();
        collector.push(step(Technique::AvoidableRectangleType1, &[0, 1, 27, 28], Candidate::new(0, 1)));
        collector.push(step(Technique::UniqueRectangleType1, &[0, 1, 27], Candidate::new(0, 2)));
        collector.push(step(Technique::UniqueRectangleType1, &[0, 1, 27, 28], Candidate::new(0, 3)));
        let techniques: Vec<_> = collector.into_steps().iter().map(|s| (s.pattern_len(), s.technique())).collect();
        assert_eq!(
            techniques,
            [
                (3, Technique::UniqueRectangleType1),
                (4, Technique::UniqueRectangleType1),
                (4, Technique::AvoidableRectangleType1),
            ]
        );
    }
}
