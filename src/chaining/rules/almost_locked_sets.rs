use super::LinkOption;
use crate::bitset::{Iter as SetIter, Set};
use crate::board::{Candidate, Cell, Digit, House};
use crate::chaining::{Links, Node, Pattern};
use crate::Grid;

/// `n` cells of one house holding `n + 1` digits together
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct AlmostLockedSet {
    pub cells: Set<Cell>,
    pub digits: Set<Digit>,
    pub house: House,
}

impl AlmostLockedSet {
    fn pattern(&self) -> Pattern {
        Pattern::AlmostLockedSet {
            digits: self.digits,
            cells: self.cells,
            house: self.house,
        }
    }
}

pub(super) fn collect_almost_locked_set_links(grid: &Grid, option: LinkOption, links: &mut Links) {
    for als in find_almost_locked_sets(grid) {
        let pattern = Some(als.pattern());
        let digit_cells = |digit: Digit| als.cells & grid.digit_cells(digit);

        // at most one digit is missing from the set
        // so of any two digits, one must be placed in it
        let digits: Vec<Digit> = als.digits.into_iter().collect();
        for (i, &first) in digits.iter().enumerate() {
            for &second in &digits[i + 1..] {
                if let (Some(a), Some(b)) = (
                    Node::group(digit_cells(first), first),
                    Node::group(digit_cells(second), second),
                ) {
                    links.add_strong(a, b, pattern);
                }
            }
        }

        for &digit in &digits {
            let own_cells = digit_cells(digit);
            let node = match Node::group(own_cells, digit) {
                Some(node) => node,
                None => continue,
            };
            let targets = grid.digit_cells(digit) & own_cells.common_peers() & !als.cells;
            for cell in targets {
                links.add_weak(node, Node::single(Candidate { cell, digit }), pattern);
            }
            for house in House::all() {
                let group = targets & house.cells();
                if group.len() < 2 || !option.admits(group) {
                    continue;
                }
                if let Some(group) = Node::group(group, digit) {
                    links.add_weak(node, group, pattern);
                }
            }
        }
    }
}

/// All almost locked sets of at least 2 cells that don't contain a locked set
/// one cell smaller. Cells with a single candidate are never part of one.
pub(crate) fn find_almost_locked_sets(grid: &Grid) -> Vec<AlmostLockedSet> {
    let mut sets = vec![];
    for house in House::all() {
        let cells = house.cells() & grid.empty_cells();
        walk_combinations(grid, house, cells.into_iter(), Set::NONE, Set::NONE, &mut sets);
    }
    sets
}

fn walk_combinations(
    grid: &Grid,
    house: House,
    mut cells: SetIter<Cell>,
    cell_set: Set<Cell>,
    digits: Set<Digit>,
    sets: &mut Vec<AlmostLockedSet>,
) {
    while let Some(cell) = cells.next() {
        let candidates = grid.candidates(cell);
        if candidates.len() <= 1 {
            continue;
        }
        let new_cell_set = cell_set | cell;
        let new_digits = digits | candidates;

        if new_cell_set.len() >= 2 && new_digits.len() == new_cell_set.len() + 1 && !is_reducible(grid, new_cell_set) {
            sets.push(AlmostLockedSet {
                cells: new_cell_set,
                digits: new_digits,
                house,
            });
        }

        walk_combinations(grid, house, cells.clone(), new_cell_set, new_digits, sets);
    }
}

// A locked set one cell smaller inside the ALS leaves just a single cell
// for the remaining 2 digits, that's a bivalue cell plus a naked subset
fn is_reducible(grid: &Grid, cells: Set<Cell>) -> bool {
    cells.into_iter().any(|left_out| {
        let rest = cells.without(left_out.as_set());
        let digits = rest
            .into_iter()
            .fold(Set::<Digit>::NONE, |digits, cell| digits | grid.candidates(cell));
        digits.len() == rest.len()
    })
}
