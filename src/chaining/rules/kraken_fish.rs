use super::LinkOption;
use crate::bitset::{Iter as SetIter, Set};
use crate::board::{Candidate, Cell, Digit, House};
use crate::chaining::{Links, Node, Pattern};
use crate::Grid;

pub(super) fn collect_kraken_fish_links(grid: &Grid, option: LinkOption, links: &mut Links) {
    for digit in Digit::all() {
        let digit_cells = grid.digit_cells(digit);
        for &(base_kind, cover_kind) in &[(House::ALL_ROWS, House::ALL_COLS), (House::ALL_COLS, House::ALL_ROWS)] {
            let eligible = |kind: Set<House>| {
                kind.into_iter()
                    .filter(|house| (house.cells() & digit_cells).len() >= 2)
                    .fold(Set::<House>::NONE, |acc, house| acc | house)
            };
            let base_lines = eligible(base_kind);
            let cover_lines = eligible(cover_kind);

            for size in 2..=max_size(option) {
                for base in combinations(base_lines, size) {
                    let base_cells = base.cells() & digit_cells;
                    // covers that don't touch the base are of no use
                    let touching = cover_lines
                        .into_iter()
                        .filter(|line| line.cells().overlaps(base_cells))
                        .fold(Set::<House>::NONE, |acc, line| acc | line);
                    for cover in combinations(touching, size) {
                        if let Some(fish) = KrakenFish::new(digit, digit_cells, base, cover, option) {
                            fish.add_links(option, links);
                        }
                    }
                }
            }
        }
    }
}

// larger fish and fins in several blocks only with unrestricted links
fn max_size(option: LinkOption) -> u8 {
    match option {
        LinkOption::All => 4,
        LinkOption::Intersection | LinkOption::House => 2,
    }
}

struct KrakenFish {
    digit: Digit,
    base: Set<House>,
    cover: Set<House>,
    body: Set<Cell>,
    fins: Set<Cell>,
    // candidates in the cover lines that the fish would eliminate
    targets: Set<Cell>,
}

impl KrakenFish {
    fn new(
        digit: Digit,
        digit_cells: Set<Cell>,
        base: Set<House>,
        cover: Set<House>,
        option: LinkOption,
    ) -> Option<Self> {
        let base_cells = base.cells() & digit_cells;
        let cover_cells = cover.cells() & digit_cells;
        let body = base_cells & cover_cells;
        let fins = base_cells.without(cover_cells);
        let mut targets = cover_cells.without(base.cells());
        if option != LinkOption::All {
            if fins.blocks().len() != 1 {
                return None;
            }
            // only what a finned fish eliminates
            targets &= fins.common_peers();
        }

        if fins.is_empty() || targets.is_empty() || body.blocks().len() < 2 {
            return None;
        }
        // every line must be able to hold its digit inside the body
        let all_touch_body = base.into_iter().chain(cover).all(|line| line.cells().overlaps(body));
        if !all_touch_body {
            return None;
        }

        Some(KrakenFish {
            digit,
            base,
            cover,
            body,
            fins,
            targets,
        })
    }

    fn pattern(&self) -> Pattern {
        Pattern::Fish {
            digit: self.digit,
            base: self.base,
            cover: self.cover,
            fins: self.fins,
        }
    }

    fn add_links(&self, option: LinkOption, links: &mut Links) {
        let digit = self.digit;
        let pattern = Some(self.pattern());
        let (body, fins) = match (
            Node::fish_body(digit, self.body, self.base, self.cover),
            Node::group(self.fins, digit),
        ) {
            (Some(body), Some(fins)) => (body, fins),
            _ => return,
        };

        // either no fin is true and the fish holds, or a fin is true
        links.add_strong(body, fins, pattern);

        for cell in self.targets {
            links.add_weak(body, Node::single(Candidate { cell, digit }), pattern);
        }
        for line in self.cover {
            let group = self.targets & line.cells();
            if group.len() < 2 || !option.admits(group) {
                continue;
            }
            if let Some(group) = Node::group(group, digit) {
                links.add_weak(body, group, pattern);
            }
        }
    }
}

fn combinations(houses: Set<House>, size: u8) -> Vec<Set<House>> {
    let mut found = vec![];
    walk_combinations(houses.into_iter(), Set::NONE, size, &mut found);
    found
}

fn walk_combinations(mut houses: SetIter<House>, chosen: Set<House>, size: u8, found: &mut Vec<Set<House>>) {
    if chosen.len() == size {
        found.push(chosen);
        return;
    }
    while let Some(house) = houses.next() {
        walk_combinations(houses.clone(), chosen | house, size, found);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::CellState;
    use crate::chaining::{Link, LinkKind, NodeKind};

    #[test]
    fn combination_count() {
        assert_eq!(combinations(House::ALL_ROWS, 2).len(), 36);
        assert_eq!(combinations(House::ALL_COLS, 4).len(), 126);
        assert!(combinations(House::ALL_ROWS, 3).iter().all(|lines| lines.len() == 3));
    }

    fn grid_with_digit_1_in(cells: &[usize]) -> Grid {
        let mut states = [CellState::Given(Digit::new(9)); 81];
        let one_two = Digit::new(1).as_set() | Digit::new(2);
        for &cell in cells {
            states[cell] = CellState::Candidates(one_two);
        }
        Grid::from_cell_states(states)
    }

    fn fish_links(links: &Links, fins: Set<Cell>) -> Vec<Link> {
        links
            .strong()
            .iter()
            .filter(|link| matches!(link.pattern(), Some(Pattern::Fish { fins: f, .. }) if *f == fins))
            .copied()
            .collect()
    }

    fn has_weak_fish_link(links: &Links, target: Node) -> bool {
        links.weak().iter().any(|link| {
            link.kind() == LinkKind::Weak
                && matches!(link.pattern(), Some(Pattern::Fish { .. }))
                && (link.first() == target || link.second() == target)
        })
    }

    #[test]
    fn finned_x_wing_links() {
        // x-wing on digit 1 in rows 1 and 5, columns 1 and 5, fin in r1c3
        // and a target in r2c1 that sees the fin
        let grid = grid_with_digit_1_in(&[0, 4, 2, 36, 40, 9]);
        let mut links = Links::new();
        collect_kraken_fish_links(&grid, LinkOption::Intersection, &mut links);

        let fish_links = fish_links(&links, Cell::new(2).as_set());
        assert!(!fish_links.is_empty());
        for link in &fish_links {
            let body = [link.first(), link.second()]
                .iter()
                .copied()
                .find(|node| matches!(node.kind(), NodeKind::FishBody { .. }));
            assert!(body.is_some());
        }
        assert!(has_weak_fish_link(&links, Node::single(Candidate::new(9, 1))));
    }

    #[test]
    fn far_fins_need_unrestricted_links() {
        // fin in r1c8, the only target r8c1 doesn't see it
        let grid = grid_with_digit_1_in(&[0, 4, 7, 36, 40, 63]);
        let target = Node::single(Candidate::new(63, 1));
        let fins = Cell::new(7).as_set();

        let mut links = Links::new();
        collect_kraken_fish_links(&grid, LinkOption::Intersection, &mut links);
        assert!(fish_links(&links, fins).is_empty());
        assert!(!has_weak_fish_link(&links, target));

        let mut links = Links::new();
        collect_kraken_fish_links(&grid, LinkOption::All, &mut links);
        assert!(!fish_links(&links, fins).is_empty());
        assert!(has_weak_fish_link(&links, target));
    }

    #[test]
    fn larger_fish_need_unrestricted_links() {
        assert_eq!(max_size(LinkOption::Intersection), 2);
        assert_eq!(max_size(LinkOption::House), 2);
        assert_eq!(max_size(LinkOption::All), 4);
    }
}
