use crate::board::{Candidate, Digit, House};
use crate::chaining::{Links, Node};
use crate::Grid;

// Conjugate pairs are recorded as strong and weak links,
// houses with more candidates only yield weak links.
pub(super) fn collect_digit_chain_links(grid: &Grid, links: &mut Links) {
    for digit in Digit::all() {
        for house in House::all() {
            let cells = grid.house_digit_cells(house, digit);
            let nodes: Vec<Node> = cells
                .into_iter()
                .map(|cell| Node::single(Candidate { cell, digit }))
                .collect();

            if nodes.len() == 2 {
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
}
