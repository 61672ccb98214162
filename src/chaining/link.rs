use super::{Node, Pattern};

/// Strength of a [`Link`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkKind {
    /// The two nodes can't both be false.
    Strong,
    /// The two nodes can't both be true.
    Weak,
}

/// An unordered relation between two nodes.
///
/// The nodes are stored in ascending order so that the same relation found twice compares
/// equal, except for the pattern which only serves as justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    first: Node,
    second: Node,
    kind: LinkKind,
    pattern: Option<Pattern>,
}

impl Link {
    /// Creates a link. Returns `None` for a link of a node to itself.
    pub fn new(a: Node, b: Node, kind: LinkKind, pattern: Option<Pattern>) -> Option<Self> {
        let (a, b) = (a.with_polarity(true), b.with_polarity(true));
        if a == b {
            return None;
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        Some(Link {
            first,
            second,
            kind,
            pattern,
        })
    }

    #[allow(missing_docs)]
    pub fn first(&self) -> Node {
        self.first
    }

    #[allow(missing_docs)]
    pub fn second(&self) -> Node {
        self.second
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    #[allow(missing_docs)]
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// The node at the other end, if `node` is one of the ends.
    pub fn other(&self, node: &Node) -> Option<Node> {
        let node = node.with_polarity(true);
        if node == self.first {
            Some(self.second)
        } else if node == self.second {
            Some(self.first)
        } else {
            None
        }
    }

    /// Identity of the link without its justification.
    pub(crate) fn key(&self) -> (Node, Node, LinkKind) {
        (self.first, self.second, self.kind)
    }
}

/// Output sinks for the chaining rules.
///
/// Degenerate links are dropped on insertion: links of a node to itself and weak links between
/// overlapping nodes, which could both be true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    strong: Vec<Link>,
    weak: Vec<Link>,
}

impl Links {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `a` and `b` can't both be false.
    pub fn add_strong(&mut self, a: Node, b: Node, pattern: Option<Pattern>) {
        if let Some(link) = Link::new(a, b, LinkKind::Strong, pattern) {
            self.strong.push(link);
        }
    }

    /// Records that `a` and `b` can't both be true.
    pub fn add_weak(&mut self, a: Node, b: Node, pattern: Option<Pattern>) {
        if a.candidates().overlaps(b.candidates()) {
            return;
        }
        if let Some(link) = Link::new(a, b, LinkKind::Weak, pattern) {
            self.weak.push(link);
        }
    }

    /// Records a conjugate relation, which is both strong and weak.
    pub fn add_conjugate(&mut self, a: Node, b: Node, pattern: Option<Pattern>) {
        self.add_strong(a, b, pattern);
        self.add_weak(a, b, pattern);
    }

    #[allow(missing_docs)]
    pub fn strong(&self) -> &[Link] {
        &self.strong
    }

    #[allow(missing_docs)]
    pub fn weak(&self) -> &[Link] {
        &self.weak
    }

    /// Total number of links recorded.
    pub fn len(&self) -> usize {
        self.strong.len() + self.weak.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_parts(self) -> (Vec<Link>, Vec<Link>) {
        (self.strong, self.weak)
    }
}
