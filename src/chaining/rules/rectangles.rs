use crate::bitset::Set;
use crate::board::{Candidate, CandidateSet, Cell, CellState, Digit};
use crate::chaining::{Links, Node, Pattern, RectangleKind};
use crate::Grid;

/// Four cells that could swap two digits without affecting any house,
/// together with the candidates that prevent the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Rectangle {
    pub kind: RectangleKind,
    /// r1c1, r1c2, r2c1, r2c2
    pub corners: [Cell; 4],
    /// The two digits of the deadly pattern
    pub digits: Set<Digit>,
    /// Candidates of the empty corners that would complete the deadly pattern
    pub deadly: CandidateSet,
    /// Candidates of the empty corners outside the deadly pattern. At least one of them is true.
    pub extras: CandidateSet,
}

impl Rectangle {
    pub fn cells(&self) -> Set<Cell> {
        self.corners.iter().copied().collect()
    }

    pub fn pattern(&self) -> Pattern {
        Pattern::Rectangle {
            kind: self.kind,
            cells: self.cells(),
            digits: self.digits,
            extra_digits: self.extras.digits(),
        }
    }

    /// Extra candidates of one cell
    pub fn cell_extras(&self, cell: Cell) -> CandidateSet {
        self.extras.intersection(&CandidateSet::from_digits(cell, Set::ALL))
    }
}

/// Iterates over every rectangle that spans exactly two blocks.
///
/// Either both rows lie in one band or both columns lie in one stack, but not both at once,
/// which would put all four corners into one block.
pub(crate) fn rectangle_corners() -> impl Iterator<Item = [Cell; 4]> {
    let pairs = || (0..9u8).flat_map(|a| (a + 1..9).map(move |b| (a, b)));
    pairs().flat_map(move |(r1, r2)| {
        pairs().filter_map(move |(c1, c2)| {
            let same_band = r1 / 3 == r2 / 3;
            let same_stack = c1 / 3 == c2 / 3;
            if same_band == same_stack {
                return None;
            }
            Some([
                Cell::new(r1 * 9 + c1),
                Cell::new(r1 * 9 + c2),
                Cell::new(r2 * 9 + c1),
                Cell::new(r2 * 9 + c2),
            ])
        })
    })
}

pub(crate) fn find_rectangles(grid: &Grid) -> Vec<Rectangle> {
    let mut rectangles = vec![];
    for corners in rectangle_corners() {
        let states = [
            grid.cell_state(corners[0]),
            grid.cell_state(corners[1]),
            grid.cell_state(corners[2]),
            grid.cell_state(corners[3]),
        ];
        if states.iter().all(|state| state.is_empty()) {
            find_unique_rectangles(grid, corners, &mut rectangles);
        } else {
            find_avoidable_rectangle(grid, corners, states, &mut rectangles);
        }
    }
    rectangles
}

fn find_unique_rectangles(grid: &Grid, corners: [Cell; 4], rectangles: &mut Vec<Rectangle>) {
    let cells: Set<Cell> = corners.iter().copied().collect();
    let candidates = |cell: Cell| grid.candidates(cell);
    let union = corners.iter().fold(Set::<Digit>::NONE, |acc, &cell| acc | candidates(cell));

    // a digit can take part in the pattern only if it can occupy a diagonal
    let is_valid = |digit: Digit| {
        let digit_cells = cells & grid.digit_cells(digit);
        digit_cells.rows().len() == 2 && digit_cells.cols().len() == 2
    };

    let digits: Vec<Digit> = union.into_iter().filter(|&digit| is_valid(digit)).collect();
    for (i, &a) in digits.iter().enumerate() {
        for &b in &digits[i + 1..] {
            let pair = a.as_set() | b;
            if !corners.iter().all(|&cell| candidates(cell).overlaps(pair)) {
                continue;
            }

            let mut deadly = CandidateSet::NONE;
            let mut extras = CandidateSet::NONE;
            for &cell in &corners {
                let cell_digits = candidates(cell);
                deadly = deadly.union(&CandidateSet::from_digits(cell, cell_digits & pair));
                extras = extras.union(&CandidateSet::from_digits(cell, cell_digits.without(pair)));
            }
            if extras.is_empty() {
                continue;
            }

            rectangles.push(Rectangle {
                kind: RectangleKind::Unique,
                corners,
                digits: pair,
                deadly,
                extras,
            });
        }
    }
}

fn find_avoidable_rectangle(
    grid: &Grid,
    corners: [Cell; 4],
    states: [CellState; 4],
    rectangles: &mut Vec<Rectangle>,
) {
    let mut filled = vec![];
    let mut empty = vec![];
    for (i, state) in states.iter().enumerate() {
        match *state {
            CellState::Modifiable(digit) => filled.push((i, digit)),
            CellState::Candidates(_) => empty.push(i),
            CellState::Given(_) => return,
        }
    }
    if filled.len() != 2 {
        return;
    }
    let ((i1, d1), (i2, d2)) = (filled[0], filled[1]);
    // diagonal corners add up to 3, filled corners must share a row or column
    if i1 + i2 == 3 || d1 == d2 {
        return;
    }

    // every empty corner would take the digit of its diagonal partner
    let required = |i: usize| if 3 - i == i1 { d1 } else { d2 };
    let mut deadly = CandidateSet::NONE;
    let mut extras = CandidateSet::NONE;
    for &i in &empty {
        let cell = corners[i];
        let digit = required(i);
        let cell_digits = grid.candidates(cell);
        if !cell_digits.contains(digit) {
            return;
        }
        deadly.insert(Candidate { cell, digit });
        extras = extras.union(&CandidateSet::from_digits(cell, cell_digits.without(digit.as_set())));
    }
    if extras.is_empty() {
        return;
    }

    rectangles.push(Rectangle {
        kind: RectangleKind::Avoidable,
        corners,
        digits: d1.as_set() | d2,
        deadly,
        extras,
    });
}

pub(super) fn collect_rectangle_links(grid: &Grid, links: &mut Links) {
    for rectangle in find_rectangles(grid) {
        let pattern = Some(rectangle.pattern());
        let extra_digits = rectangle.extras.digits();
        let extra_cells = rectangle.extras.cells();

        match extra_digits.len() {
            1 => {
                let cells = rectangle.extras.cells();
                if let (Some(digit), 2) = (extra_digits.first(), cells.len()) {
                    let mut nodes = cells.into_iter().map(|cell| Node::single(Candidate { cell, digit }));
                    if let (Some(a), Some(b)) = (nodes.next(), nodes.next()) {
                        links.add_strong(a, b, pattern);
                    }
                }
                continue;
            }
            2 => {
                let groups: Vec<_> = extra_digits
                    .into_iter()
                    .map(|digit| (rectangle.extras.digit_cells(digit), digit))
                    .filter(|&(cells, _)| !cells.common_houses().is_empty())
                    .filter_map(|(cells, digit)| Node::group(cells, digit))
                    .collect();
                if let [a, b] = groups[..] {
                    links.add_strong(a, b, pattern);
                }
            }
            _ => {}
        }

        if extra_cells.len() == 2 {
            let nodes: Vec<_> = extra_cells
                .into_iter()
                .filter_map(|cell| Node::new(rectangle.cell_extras(cell)))
                .collect();
            if let [a, b] = nodes[..] {
                links.add_strong(a, b, pattern);
            }
        }
    }
}
