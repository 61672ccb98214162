use super::{Link, LinkGraph, LinkKind, Node, NodeKind};
use crate::board::{Candidate, CandidateSet};
use crate::Grid;
use std::collections::{HashMap, HashSet};

/// A sequence of nodes with alternating polarity.
///
/// The first node is off and the chain alternates strong links (off to on) and
/// weak links (on to off). It always ends on a node that is on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chain {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl Chain {
    /// Nodes in chain order, with their polarity
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// `links()[i]` connects `nodes()[i]` and `nodes()[i + 1]`
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Kind of the link between node `i` and `i + 1`.
    ///
    /// Links taken from off to on are used as strong links, even if the link also is weak.
    pub fn link_kind(&self, i: usize) -> LinkKind {
        if self.nodes[i].polarity() {
            LinkKind::Weak
        } else {
            LinkKind::Strong
        }
    }

    /// Checks whether any node is more than a single candidate.
    pub fn is_grouped(&self) -> bool {
        self.nodes.iter().any(Node::is_grouped)
    }

    /// Checks whether all nodes share one digit.
    pub fn is_single_digit(&self) -> bool {
        let first = self.nodes[0].digit();
        first.is_some() && self.nodes.iter().all(|node| node.digit() == first)
    }
}

/// What a chain proves
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChainResult {
    pub chain: Chain,
    pub eliminations: CandidateSet,
    pub assignment: Option<Candidate>,
}

// bfs bookkeeping, one entry per (node, polarity) reached
struct Visit {
    node: Node,
    parent: Option<(usize, Link)>,
}

// breadth first search from one start node, advanced one level at a time
struct Search {
    visits: Vec<Visit>,
    visited: HashSet<Node>,
    frontier: Vec<usize>,
}

impl Search {
    fn new(start: Node) -> Self {
        let start = start.with_polarity(false);
        let mut visited = HashSet::new();
        visited.insert(start);
        Search {
            visits: vec![Visit { node: start, parent: None }],
            visited,
            frontier: vec![0],
        }
    }

    // Extends every chain of the frontier by one link. `n_nodes` is the length of the new chains.
    fn advance(
        &mut self,
        graph: &LinkGraph,
        all: &CandidateSet,
        n_nodes: usize,
        conflicts: &mut HashMap<Node, CandidateSet>,
        results: &mut Vec<ChainResult>,
    ) {
        let frontier = std::mem::take(&mut self.frontier);
        for idx in frontier {
            let node = self.visits[idx].node;
            let polarity = node.polarity();
            let next: Vec<(Node, Link)> = if polarity {
                graph.weak_links(&node).map(|(other, link)| (other, *link)).collect()
            } else {
                graph.strong_links(&node).map(|(other, link)| (other, *link)).collect()
            };

            for (other, link) in next {
                let other = other.with_polarity(!polarity);
                if !self.visited.insert(other) {
                    continue;
                }
                self.visits.push(Visit {
                    node: other,
                    parent: Some((idx, link)),
                });
                let new_idx = self.visits.len() - 1;
                self.frontier.push(new_idx);

                // at least 3 links, ending on
                if other.polarity() && n_nodes >= 4 && other.kind() == NodeKind::Candidates {
                    if let Some(result) = conclude(all, &self.visits, new_idx, conflicts) {
                        tracing::trace!(links = result.chain.len(), "found chain");
                        results.push(result);
                    }
                }
            }
        }
    }
}

/// Searches alternating inference chains from every plain node of the graph.
///
/// A chain from `start` (off) to `end` (on) proves that one of the two is true.
/// Candidates conflicting with both are eliminated. A chain returning to its own start
/// proves the start true.
///
/// All starts are searched together, one chain length at a time, so `on_chain` receives
/// shorter chains first. A set of conclusions is reported only for the first chain proving it.
/// The search stops as soon as `on_chain` returns `true`.
pub(crate) fn find_chains(
    grid: &Grid,
    graph: &LinkGraph,
    max_nodes: usize,
    mut on_chain: impl FnMut(ChainResult) -> bool,
) {
    let all = grid.candidate_set();
    let mut conflicts: HashMap<Node, CandidateSet> = HashMap::new();
    let mut seen = HashSet::new();
    let mut searches: Vec<Search> = graph
        .nodes()
        .filter(|node| node.kind() == NodeKind::Candidates)
        .map(Search::new)
        .collect();

    let mut reported = 0;
    for n_nodes in 2..=max_nodes {
        let mut results = vec![];
        for search in &mut searches {
            search.advance(graph, &all, n_nodes, &mut conflicts, &mut results);
        }
        searches.retain(|search| !search.frontier.is_empty());

        results.sort_by(|a, b| a.chain.cmp(&b.chain));
        for result in results {
            if !seen.insert((result.eliminations, result.assignment)) {
                continue;
            }
            reported += 1;
            if on_chain(result) {
                tracing::debug!(chains = reported, "chain search stopped early");
                return;
            }
        }
        if searches.is_empty() {
            break;
        }
    }
    tracing::debug!(chains = reported, "chain search finished");
}

fn conclude(
    all: &CandidateSet,
    visits: &[Visit],
    end_idx: usize,
    conflicts: &mut HashMap<Node, CandidateSet>,
) -> Option<ChainResult> {
    let mut nodes = vec![visits[end_idx].node];
    let mut links = vec![];
    let mut idx = end_idx;
    while let Some((parent, link)) = visits[idx].parent {
        nodes.push(visits[parent].node);
        links.push(link);
        idx = parent;
    }
    nodes.reverse();
    links.reverse();

    let start = nodes[0];
    let end = nodes[nodes.len() - 1];

    let (eliminations, assignment) = if start.candidates() == end.candidates() {
        // start off implies start on
        (CandidateSet::NONE, Some(start.as_single()?))
    } else {
        let mut conflicts_of = |node: Node| {
            *conflicts
                .entry(node.with_polarity(true))
                .or_insert_with(|| node.conflicts(all))
        };
        let eliminations = conflicts_of(start)
            .intersection(&conflicts_of(end))
            .without(start.candidates())
            .without(end.candidates());
        if eliminations.is_empty() {
            return None;
        }
        (eliminations, None)
    };

    Some(ChainResult {
        chain: Chain { nodes, links },
        eliminations,
        assignment,
    })
}
