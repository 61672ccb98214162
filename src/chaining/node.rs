use crate::bitset::Set;
use crate::board::{Candidate, CandidateSet, Cell, Digit, House};

/// What makes a [`Node`] true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// True iff at least one of the node's candidates is true.
    Candidates,
    /// True iff every candidate of the fish's digit in the base lines lies inside
    /// the cover lines. The node's candidates are the fish body.
    FishBody {
        /// Base lines
        base: Set<House>,
        /// Cover lines
        cover: Set<House>,
    },
}

/// A group of candidates that is either on or off as a whole.
///
/// Grouped nodes span several cells sharing a digit inside one house, or several digits
/// of one cell. Nodes stored in a link graph are always on; the chain search flips the polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    candidates: CandidateSet,
    kind: NodeKind,
    polarity: bool,
}

impl Node {
    /// Creates a node that is asserted on. Returns `None` for an empty candidate set.
    pub fn new(candidates: CandidateSet) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        Some(Node {
            candidates,
            kind: NodeKind::Candidates,
            polarity: true,
        })
    }

    /// A node for a single candidate.
    pub fn single(candidate: Candidate) -> Self {
        Node {
            candidates: candidate.into(),
            kind: NodeKind::Candidates,
            polarity: true,
        }
    }

    /// A node for `digit` in each of `cells`.
    pub fn group(cells: Set<Cell>, digit: Digit) -> Option<Self> {
        Self::new(CandidateSet::from_cells(cells, digit))
    }

    pub(crate) fn fish_body(digit: Digit, body: Set<Cell>, base: Set<House>, cover: Set<House>) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Node {
            candidates: CandidateSet::from_cells(body, digit),
            kind: NodeKind::FishBody { base, cover },
            polarity: true,
        })
    }

    /// The same node with the opposite polarity.
    pub fn negated(self) -> Self {
        Node {
            polarity: !self.polarity,
            ..self
        }
    }

    /// The same node with the given polarity.
    pub fn with_polarity(self, polarity: bool) -> Self {
        Node { polarity, ..self }
    }

    #[allow(missing_docs)]
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// `true` if the node is asserted on.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Cells of the node's candidates.
    pub fn cells(&self) -> Set<Cell> {
        self.candidates.cells()
    }

    /// The digit shared by all candidates, if there is only one.
    pub fn digit(&self) -> Option<Digit> {
        self.candidates.digits().unique().ok().flatten()
    }

    /// The only candidate of a plain single-candidate node.
    pub fn as_single(&self) -> Option<Candidate> {
        match self.kind {
            NodeKind::Candidates => self.candidates.single(),
            NodeKind::FishBody { .. } => None,
        }
    }

    /// Grouped nodes are those with more than one candidate or a pattern behind them.
    pub fn is_grouped(&self) -> bool {
        self.as_single().is_none()
    }

    /// Candidates that are false whenever this node is true.
    ///
    /// For plain nodes that is every candidate conflicting with each of the node's candidates.
    /// A fish body says nothing on its own about other candidates and yields none.
    pub(crate) fn conflicts(&self, all: &CandidateSet) -> CandidateSet {
        if let NodeKind::FishBody { .. } = self.kind {
            return CandidateSet::NONE;
        }
        all.iter()
            .filter(|&other| !self.candidates.contains(other))
            .filter(|&other| self.candidates.iter().all(|own| own.conflicts_with(other)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn grouped_node_conflicts() {
        // digit 1 in r1c1 and r1c2
        let node = Node::group(Cell::new(0).as_set() | Cell::new(1), Digit::new(1)).unwrap();
        let all: CandidateSet = [
            Candidate::new(2, 1),  // same row
            Candidate::new(9, 1),  // same block
            Candidate::new(27, 1), // sees only r1c1
            Candidate::new(0, 2),  // same cell as one member only
        ]
        .iter()
        .copied()
        .chain(node.candidates().iter())
        .collect();

        let conflicts = node.conflicts(&all);
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.contains(Candidate::new(2, 1)));
        assert!(conflicts.contains(Candidate::new(9, 1)));
        assert!(node.is_grouped());
        assert_eq!(node.digit(), Some(Digit::new(1)));
    }

    #[test]
    fn empty_nodes_are_rejected() {
        assert_eq!(Node::new(CandidateSet::NONE), None);
        assert_eq!(Node::group(Set::NONE, Digit::new(4)), None);
    }

    #[test]
    fn polarity_flips() {
        let node = Node::single(Candidate::new(40, 5));
        assert!(node.polarity());
        assert!(!node.negated().polarity());
        assert_eq!(node.negated().negated(), node);
        assert_eq!(node.with_polarity(true), node);
    }
}
