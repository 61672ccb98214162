//! Read-only snapshot of a candidate grid
use crate::bitset::Set;
use crate::board::{Candidate, CandidateSet, Cell, CellState, Digit, House};
use crate::errors::ParseError;
use crate::helper::{CellArray, DigitArray};
use std::fmt;

/// Snapshot of a partially solved sudoku: entered digits and the remaining candidates of
/// every empty cell.
///
/// The grid is indexed both ways, by cell and by digit, and is never modified by the searches
/// of this crate. Filled cells have no candidates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    states: CellArray<CellState>,
    cell_digits: CellArray<Set<Digit>>,
    digit_cells: DigitArray<Set<Cell>>,
    empty_cells: Set<Cell>,
    bivalue_cells: Set<Cell>,
}

impl Grid {
    /// Builds the grid from the state of each cell, in row-major order.
    pub fn from_cell_states(states: [CellState; 81]) -> Self {
        let mut cell_digits = CellArray([Set::NONE; 81]);
        let mut digit_cells = DigitArray([Set::NONE; 9]);
        let mut empty_cells = Set::NONE;
        let mut bivalue_cells = Set::NONE;

        for (cell, state) in Cell::all().zip(states.iter()) {
            if let CellState::Candidates(digits) = *state {
                empty_cells |= cell;
                if digits.len() == 2 {
                    bivalue_cells |= cell;
                }
                cell_digits[cell] = digits;
                for digit in digits {
                    digit_cells[digit] |= cell;
                }
            }
        }

        Grid {
            states: CellArray(states),
            cell_digits,
            digit_cells,
            empty_cells,
            bivalue_cells,
        }
    }

    /// Reads a line of 81 givens. Empty cells are marked by `.`, `0` or `_`.
    /// The candidates of the empty cells are all digits not entered in any of their peers.
    ///
    /// Anything after the 81st cell that is separated by whitespace is ignored as a comment.
    pub fn from_str_line(line: &str) -> Result<Self, ParseError> {
        let grid = line.split_whitespace().next().unwrap_or("");
        let n_chars = grid.chars().count();
        if n_chars != 81 {
            return Err(ParseError::WrongLength(n_chars));
        }

        let mut digits = [None; 81];
        for (cell, ch) in grid.chars().enumerate() {
            digits[cell] = match ch {
                '.' | '0' | '_' => None,
                _ => match Digit::from_char(ch) {
                    Some(digit) => Some(digit),
                    None => return Err(ParseError::InvalidEntry { cell: cell as u8, ch }),
                },
            };
        }

        let mut states = [CellState::Candidates(Set::ALL); 81];
        for cell in Cell::all() {
            states[cell.as_index()] = match digits[cell.as_index()] {
                Some(digit) => CellState::Given(digit),
                None => {
                    let entered: Set<Digit> = cell
                        .peers()
                        .into_iter()
                        .filter_map(|peer| digits[peer.as_index()])
                        .collect();
                    CellState::Candidates(!entered)
                }
            };
        }
        Ok(Grid::from_cell_states(states))
    }

    /// Reads a grid of pencil marks, as produced by the `Display` impl.
    ///
    /// Cells are separated by whitespace and read in row-major order. A single digit is a given,
    /// `+` followed by a digit is a digit entered while solving and several digits are the
    /// candidates of an empty cell. An empty cell can also be written as `_` followed by its
    /// candidates, which is how a cell with one or no candidates is printed. Tokens made up
    /// of frame characters only (`│ ─ ┼ | - +` and the like) are skipped.
    pub fn from_candidates_str(s: &str) -> Result<Self, ParseError> {
        let mut states = Vec::with_capacity(81);
        for (index, token) in s.split_whitespace().filter(|token| !is_frame(token)).enumerate() {
            let invalid = || ParseError::InvalidToken {
                index,
                token: token.to_owned(),
            };
            let parse_digits = |digit_chars: &str| -> Result<Set<Digit>, ParseError> {
                let mut digits = Set::NONE;
                for ch in digit_chars.chars() {
                    let digit = Digit::from_char(ch).ok_or_else(invalid)?;
                    if digits.contains(digit) {
                        return Err(invalid());
                    }
                    digits |= digit;
                }
                Ok(digits)
            };
            let state = if let Some(rest) = token.strip_prefix('_') {
                CellState::Candidates(parse_digits(rest)?)
            } else if let Some(rest) = token.strip_prefix('+') {
                let mut chars = rest.chars();
                match (chars.next().and_then(Digit::from_char), chars.next()) {
                    (Some(digit), None) => CellState::Modifiable(digit),
                    _ => return Err(invalid()),
                }
            } else {
                let digits = parse_digits(token)?;
                match digits.unique() {
                    Ok(Some(digit)) => CellState::Given(digit),
                    _ => CellState::Candidates(digits),
                }
            };
            states.push(state);
        }

        if states.len() != 81 {
            return Err(ParseError::WrongLength(states.len()));
        }
        let mut array = [CellState::Candidates(Set::NONE); 81];
        array.copy_from_slice(&states);
        Ok(Grid::from_cell_states(array))
    }

    /// Returns the state of every cell in row-major order.
    pub fn cell_states(&self) -> [CellState; 81] {
        self.states.0
    }

    /// Returns the state of a cell.
    pub fn cell_state(&self, cell: Cell) -> CellState {
        self.states[cell]
    }

    /// Candidates of a cell. Empty for filled cells.
    #[inline]
    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.cell_digits[cell]
    }

    /// Empty cells in which `digit` is a candidate.
    #[inline]
    pub fn digit_cells(&self, digit: Digit) -> Set<Cell> {
        self.digit_cells[digit]
    }

    /// Cells of `house` in which `digit` is a candidate.
    #[inline]
    pub fn house_digit_cells(&self, house: House, digit: Digit) -> Set<Cell> {
        self.digit_cells[digit] & house.cells()
    }

    /// Checks whether a candidate is still possible.
    pub fn has_candidate(&self, candidate: Candidate) -> bool {
        self.digit_cells[candidate.digit].contains(candidate.cell)
    }

    /// Cells without an entered digit.
    #[inline]
    pub fn empty_cells(&self) -> Set<Cell> {
        self.empty_cells
    }

    /// Empty cells with exactly two candidates.
    #[inline]
    pub fn bivalue_cells(&self) -> Set<Cell> {
        self.bivalue_cells
    }

    /// Cells filled with a digit while solving, as opposed to givens.
    pub fn modifiable_cells(&self) -> Set<Cell> {
        Cell::all()
            .filter(|&cell| matches!(self.states[cell], CellState::Modifiable(_)))
            .collect()
    }

    /// All remaining candidates.
    pub fn candidate_set(&self) -> CandidateSet {
        CandidateSet::from_digit_array(self.digit_cells)
    }
}

fn is_frame(token: &str) -> bool {
    token.chars().all(|ch| {
        matches!(ch, '|' | '-' | '+' | '=' | '*' | '.') || ('\u{2500}'..='\u{257F}').contains(&ch)
    })
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match *self {
            CellState::Given(digit) => digit.get().to_string(),
            CellState::Modifiable(digit) => format!("+{}", digit.get()),
            CellState::Candidates(digits) => {
                let text: String = digits.into_iter().map(|d| d.get().to_string()).collect();
                // a lone digit would read back as a given
                match digits.len() {
                    0 | 1 => format!("_{}", text),
                    _ => text,
                }
            }
        };
        f.pad(&text)
    }
}

/* Example output
┌────────────────┬────────────────┬────────────────┐
│ 1    2    3    │ 4    5    6    │ 7    8    9    │
│ 45   +7   456  │ 12   38   _    │ 123  _4   56   │
...
└────────────────┴────────────────┴────────────────┘
*/
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = |state: CellState| state.to_string().chars().count();
        let mut column_widths = [1; 9];
        for cell in Cell::all() {
            let col = cell.col().as_index();
            column_widths[col] = column_widths[col].max(width(self.states[cell]));
        }

        let stack_width = |stack: usize| {
            column_widths[stack * 3..stack * 3 + 3].iter().sum::<usize>() + 6 // spaces in between cells and walls
        };

        let print_horizontal_delimiter = |f: &mut fmt::Formatter, left: char, middle: char, right: &str| {
            write!(
                f,
                "{left}{0:─<1$}{middle}{0:─<2$}{middle}{0:─<3$}{right}",
                "",
                stack_width(0),
                stack_width(1),
                stack_width(2),
                left = left,
                middle = middle,
                right = right,
            )
        };

        let print_band = |f: &mut fmt::Formatter, band: usize| {
            for row in band * 3..band * 3 + 3 {
                write!(f, "│")?;
                for stack in 0..3 {
                    for col in stack * 3..stack * 3 + 3 {
                        let state = self.states.0[row * 9 + col];
                        write!(f, " {:width$} ", state, width = column_widths[col])?;
                    }
                    write!(f, "│")?;
                }
                writeln!(f)?;
            }
            Ok(())
        };

        print_horizontal_delimiter(f, '┌', '┬', "┐\n")?;
        print_band(f, 0)?;
        print_horizontal_delimiter(f, '├', '┼', "┤\n")?;
        print_band(f, 1)?;
        print_horizontal_delimiter(f, '├', '┼', "┤\n")?;
        print_band(f, 2)?;
        print_horizontal_delimiter(f, '└', '┴', "┘")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const LINE: &str = "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

    #[test]
    fn line_candidates_exclude_peers() {
        let grid = Grid::from_str_line(LINE).unwrap();
        assert_eq!(grid.cell_state(Cell::new(0)), CellState::Given(Digit::new(4)));
        let candidates = grid.candidates(Cell::new(1));
        assert!(!candidates.contains(Digit::new(4)));
        assert!(!candidates.contains(Digit::new(8)));
        assert!(!candidates.contains(Digit::new(3)));
        assert!(candidates.contains(Digit::new(1)));
        assert!(grid.candidates(Cell::new(0)).is_empty());
    }

    #[test]
    fn line_errors() {
        assert_eq!(Grid::from_str_line("123"), Err(ParseError::WrongLength(3)));
        let mut bad = LINE.to_string();
        bad.replace_range(5..6, "x");
        assert_eq!(
            Grid::from_str_line(&bad),
            Err(ParseError::InvalidEntry { cell: 5, ch: 'x' })
        );
    }

    #[test]
    fn display_roundtrip() {
        let mut states = Grid::from_str_line(LINE).unwrap().cell_states();
        states[1] = CellState::Modifiable(Digit::new(9));
        states[2] = CellState::Candidates(Set::NONE);
        states[3] = CellState::Candidates(Digit::new(5).as_set());
        let grid = Grid::from_cell_states(states);
        let printed = grid.to_string();
        assert_eq!(Grid::from_candidates_str(&printed), Ok(grid));
    }

    #[test]
    fn single_candidate_is_not_a_given() {
        assert_eq!(CellState::Candidates(Digit::new(5).as_set()).to_string(), "_5");
        assert_eq!(CellState::Candidates(Set::NONE).to_string(), "_");
        assert_eq!(CellState::Given(Digit::new(5)).to_string(), "5");

        let mut tokens = vec!["9"; 81];
        tokens[0] = "_5";
        tokens[1] = "_";
        tokens[2] = "_45";
        let grid = Grid::from_candidates_str(&tokens.join(" ")).unwrap();
        assert_eq!(grid.cell_state(Cell::new(0)), CellState::Candidates(Digit::new(5).as_set()));
        assert_eq!(grid.cell_state(Cell::new(1)), CellState::Candidates(Set::NONE));
        assert_eq!(grid.candidates(Cell::new(2)), Digit::new(4).as_set() | Digit::new(5));
        assert_eq!(grid.cell_state(Cell::new(3)), CellState::Given(Digit::new(9)));
        assert!(grid.empty_cells().contains(Cell::new(0)));
    }

    #[test]
    fn candidates_str_errors() {
        assert_eq!(Grid::from_candidates_str("12 34"), Err(ParseError::WrongLength(2)));
        assert_eq!(
            Grid::from_candidates_str("12 3x4"),
            Err(ParseError::InvalidToken {
                index: 1,
                token: "3x4".to_string()
            })
        );
        assert_eq!(
            Grid::from_candidates_str("_5x"),
            Err(ParseError::InvalidToken {
                index: 0,
                token: "_5x".to_string()
            })
        );
        assert_eq!(
            Grid::from_candidates_str("+12"),
            Err(ParseError::InvalidToken {
                index: 0,
                token: "+12".to_string()
            })
        );
    }

    #[test]
    fn bivalue_cells_are_indexed() {
        let mut states = [CellState::Given(Digit::new(1)); 81];
        states[10] = CellState::Candidates(Digit::new(2).as_set() | Digit::new(3));
        states[20] = CellState::Candidates(Digit::new(2).as_set() | Digit::new(3) | Digit::new(4));
        let grid = Grid::from_cell_states(states);
        assert_eq!(grid.bivalue_cells(), Cell::new(10).as_set());
        assert_eq!(grid.empty_cells(), Cell::new(10).as_set() | Cell::new(20));
        assert_eq!(grid.digit_cells(Digit::new(2)), grid.empty_cells());
        assert_eq!(grid.candidate_set().len(), 5);
    }
}
