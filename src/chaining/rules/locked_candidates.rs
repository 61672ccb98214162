use super::LinkOption;
use crate::bitset::Set;
use crate::board::{Candidate, Cell, Digit, House};
use crate::chaining::{Links, Node};
use crate::Grid;

pub(super) fn collect_locked_candidate_links(grid: &Grid, option: LinkOption, links: &mut Links) {
    for house in House::all() {
        for digit in Digit::all() {
            let cells = grid.house_digit_cells(house, digit);
            if cells.len() < 2 {
                continue;
            }

            let segments = segments(house, cells);
            for (i, &first) in segments.iter().enumerate() {
                for &second in &segments[i + 1..] {
                    if first.overlaps(second) || (first.len() == 1 && second.len() == 1) {
                        continue;
                    }
                    if !option.admits(first) || !option.admits(second) {
                        continue;
                    }
                    let (a, b) = match (Node::group(first, digit), Node::group(second, digit)) {
                        (Some(a), Some(b)) => (a, b),
                        _ => continue,
                    };
                    if is_grouped_strong_link(cells, first, second) {
                        links.add_conjugate(a, b, None);
                    } else {
                        links.add_weak(a, b, None);
                    }
                }

                if first.len() < 2 || !option.admits(first) {
                    continue;
                }
                let group = match Node::group(first, digit) {
                    Some(group) => group,
                    None => continue,
                };
                for cell in cells.without(first) {
                    let single = Node::single(Candidate { cell, digit });
                    if first | cell == cells {
                        links.add_conjugate(group, single, None);
                    } else {
                        links.add_weak(group, single, None);
                    }
                }
            }
        }
    }
}

/// Parts of `cells` that are confined to the intersection of `house` with a crossing house.
fn segments(house: House, cells: Set<Cell>) -> Vec<Set<Cell>> {
    let mut segments: Vec<Set<Cell>> = house
        .crossing_houses()
        .into_iter()
        .map(|crossing| cells & crossing.cells())
        .filter(|segment| !segment.is_empty())
        .collect();
    segments.sort();
    segments.dedup();
    segments
}

/// Two disjoint parts make up all candidates of a digit in a house, so one of them must hold it.
pub(crate) fn is_grouped_strong_link(house_cells: Set<Cell>, first: Set<Cell>, second: Set<Cell>) -> bool {
    !first.overlaps(second) && first | second == house_cells && (first.len() > 1 || second.len() > 1)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::CellState;
    use crate::chaining::LinkKind;

    fn grid_with_digit_1_in(cells: &[u8]) -> Grid {
        let mut states = [CellState::Given(Digit::new(9)); 81];
        for &cell in cells {
            states[cell as usize] = CellState::Candidates(Digit::new(1).as_set() | Digit::new(2));
        }
        Grid::from_cell_states(states)
    }

    fn set(cells: &[u8]) -> Set<Cell> {
        cells.iter().map(|&c| Cell::new(c)).collect()
    }

    #[test]
    fn two_segments_in_a_row_are_strongly_linked() {
        // row 1: two cells in block 1, one in block 3
        let grid = grid_with_digit_1_in(&[0, 1, 7]);
        let mut links = Links::new();
        collect_locked_candidate_links(&grid, LinkOption::Intersection, &mut links);

        let grouped = links
            .strong()
            .iter()
            .filter(|link| link.first().digit() == Some(Digit::new(1)))
            .find(|link| link.first().is_grouped() || link.second().is_grouped())
            .copied();
        let link = grouped.expect("grouped strong link");
        assert_eq!(link.first().cells() | link.second().cells(), set(&[0, 1, 7]));
        assert_eq!(link.kind(), LinkKind::Strong);
    }

    #[test]
    fn three_segments_only_yield_weak_links() {
        let grid = grid_with_digit_1_in(&[0, 1, 4, 7]);
        let mut links = Links::new();
        collect_locked_candidate_links(&grid, LinkOption::Intersection, &mut links);

        let row_1 = House::new(0).cells();
        assert!(!links
            .strong()
            .iter()
            .filter(|link| link.first().digit() == Some(Digit::new(1)))
            .any(|link| row_1.contains(link.first().cells() | link.second().cells())));
        assert!(links
            .weak()
            .iter()
            .any(|link| link.first().cells() | link.second().cells() == set(&[0, 1, 4])));
    }

    #[test]
    fn grouped_strong_link_predicate() {
        let all = set(&[0, 1, 7]);
        assert!(is_grouped_strong_link(all, set(&[0, 1]), set(&[7])));
        assert!(!is_grouped_strong_link(all, set(&[0]), set(&[7])));
        assert!(!is_grouped_strong_link(all, set(&[0, 1]), set(&[1, 7])));
    }
}
