use super::{ChainingRule, Link, LinkKind, LinkOption, Links, Node};
use crate::Grid;
use std::collections::BTreeMap;

/// All strong and weak links found in one grid, indexed by node.
///
/// Built once per grid and read-only afterwards. Nodes are kept in ascending order so
/// every traversal of the graph is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraph {
    links: Vec<Link>,
    strong: BTreeMap<Node, Vec<usize>>,
    weak: BTreeMap<Node, Vec<usize>>,
}

impl LinkGraph {
    /// Runs every rule of `rules` over `grid` and merges their links.
    ///
    /// The same link found more than once is kept only once. Of several patterns justifying it,
    /// the smallest one is kept, so the result doesn't depend on the order of `rules`.
    pub fn build(grid: &Grid, rules: &[ChainingRule], option: LinkOption) -> Self {
        let mut links = Links::new();
        for &rule in rules {
            rule.collect_links(grid, option, &mut links);
        }
        let graph = LinkGraph::from_links(links);
        tracing::debug!(
            nodes = graph.node_count(),
            strong = graph.strong_count(),
            weak = graph.weak_count(),
            "built link graph"
        );
        graph
    }

    /// Builds the graph out of already collected links.
    pub fn from_links(links: Links) -> Self {
        let (strong, weak) = links.into_parts();
        let mut all: Vec<Link> = strong.into_iter().chain(weak).collect();
        all.sort();
        all.dedup_by_key(|link| link.key());

        let mut graph = LinkGraph {
            links: all,
            strong: BTreeMap::new(),
            weak: BTreeMap::new(),
        };
        for (idx, link) in graph.links.iter().enumerate() {
            let map = match link.kind() {
                LinkKind::Strong => &mut graph.strong,
                LinkKind::Weak => &mut graph.weak,
            };
            map.entry(link.first()).or_insert_with(Vec::new).push(idx);
            map.entry(link.second()).or_insert_with(Vec::new).push(idx);
        }
        graph
    }

    /// Every link, sorted.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Nodes taking part in at least one link, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        let mut nodes: Vec<Node> = self.strong.keys().chain(self.weak.keys()).copied().collect();
        nodes.sort();
        nodes.dedup();
        nodes.into_iter()
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    #[allow(missing_docs)]
    pub fn strong_count(&self) -> usize {
        self.links.iter().filter(|link| link.kind() == LinkKind::Strong).count()
    }

    #[allow(missing_docs)]
    pub fn weak_count(&self) -> usize {
        self.links.len() - self.strong_count()
    }

    /// Nodes strongly linked to `node`, along with the link.
    pub fn strong_links<'a>(&'a self, node: &Node) -> impl Iterator<Item = (Node, &'a Link)> + 'a {
        self.neighbors(&self.strong, node)
    }

    /// Nodes weakly linked to `node`, along with the link.
    pub fn weak_links<'a>(&'a self, node: &Node) -> impl Iterator<Item = (Node, &'a Link)> + 'a {
        self.neighbors(&self.weak, node)
    }

    fn neighbors<'a>(
        &'a self,
        map: &'a BTreeMap<Node, Vec<usize>>,
        node: &Node,
    ) -> impl Iterator<Item = (Node, &'a Link)> + 'a {
        let node = node.with_polarity(true);
        map.get(&node)
            .map(|idxs| &idxs[..])
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&idx| {
                let link = &self.links[idx];
                link.other(&node).map(|other| (other, link))
            })
    }
}
