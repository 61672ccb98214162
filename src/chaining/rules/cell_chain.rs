use crate::board::Candidate;
use crate::chaining::{Links, Node};
use crate::Grid;

pub(super) fn collect_cell_chain_links(grid: &Grid, links: &mut Links) {
    for cell in grid.empty_cells() {
        let digits = grid.candidates(cell);
        let nodes: Vec<Node> = digits
            .into_iter()
            .map(|digit| Node::single(Candidate { cell, digit }))
            .collect();

        if grid.bivalue_cells().contains(cell) {
            links.add_conjugate(nodes[0], nodes[1], None);
            continue;
        }

        for (i, &first) in nodes.iter().enumerate() {
            for &second in &nodes[i + 1..] {
                links.add_weak(first, second, None);
            }
        }
    }
}
