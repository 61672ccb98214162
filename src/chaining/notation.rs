use super::{Chain, LinkKind, Node};
use crate::bitset::Set;
use crate::board::{Cell, Digit};

/// How cells are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStyle {
    /// `r1c2`, groups as `r1c23`
    RxCy,
    /// `A2`, rows lettered `A` to `J` without `I`, groups as `A23`
    K9,
}

/// Whether digits are written before or after the cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigitPlacement {
    #[allow(missing_docs)]
    BeforeCells,
    #[allow(missing_docs)]
    AfterCells,
}

/// Brackets around the digits of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Brackets {
    Round,
    Square,
    Curly,
    None,
}

impl Brackets {
    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Brackets::Round => ("(", ")"),
            Brackets::Square => ("[", "]"),
            Brackets::Curly => ("{", "}"),
            Brackets::None => ("", ""),
        }
    }
}

/// Writes chains as text. There is no parser for the output.
///
/// ```
/// use sudoku_chaining::chaining::ChainNotation;
/// let eureka = ChainNotation::eureka();
/// let standard = ChainNotation::standard();
/// # let _ = (eureka, standard);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainNotation {
    strong: String,
    weak: String,
    spaced: bool,
    cell_style: CellStyle,
    digit_placement: DigitPlacement,
    brackets: Brackets,
}

impl Default for ChainNotation {
    fn default() -> Self {
        ChainNotation::standard()
    }
}

impl ChainNotation {
    /// `r1c2(1) == r3c2(1) -- r3c2(2)`
    pub fn standard() -> Self {
        ChainNotation {
            strong: "==".to_string(),
            weak: "--".to_string(),
            spaced: true,
            cell_style: CellStyle::RxCy,
            digit_placement: DigitPlacement::AfterCells,
            brackets: Brackets::Round,
        }
    }

    /// `(1)r1c2=(1)r3c2-(2)r3c2`
    pub fn eureka() -> Self {
        ChainNotation {
            strong: "=".to_string(),
            weak: "-".to_string(),
            spaced: false,
            cell_style: CellStyle::RxCy,
            digit_placement: DigitPlacement::BeforeCells,
            brackets: Brackets::Round,
        }
    }

    /// Sets the tokens written for strong and weak links.
    pub fn with_connectors(mut self, strong: &str, weak: &str) -> Self {
        self.strong = strong.to_string();
        self.weak = weak.to_string();
        self
    }

    /// Sets whether connectors are surrounded by spaces.
    pub fn with_spacing(mut self, spaced: bool) -> Self {
        self.spaced = spaced;
        self
    }

    #[allow(missing_docs)]
    pub fn with_cell_style(mut self, cell_style: CellStyle) -> Self {
        self.cell_style = cell_style;
        self
    }

    #[allow(missing_docs)]
    pub fn with_digit_placement(mut self, digit_placement: DigitPlacement) -> Self {
        self.digit_placement = digit_placement;
        self
    }

    #[allow(missing_docs)]
    pub fn with_brackets(mut self, brackets: Brackets) -> Self {
        self.brackets = brackets;
        self
    }

    /// Writes a whole chain. Each link is written as the role it plays in the chain.
    pub fn format_chain(&self, chain: &Chain) -> String {
        let nodes: Vec<Node> = chain.nodes().to_vec();
        let kinds: Vec<LinkKind> = (0..chain.len()).map(|i| chain.link_kind(i)).collect();
        self.format_nodes(&nodes, &kinds)
    }

    /// Writes nodes joined by the given link kinds. `kinds` must have one element less than `nodes`.
    pub fn format_nodes(&self, nodes: &[Node], kinds: &[LinkKind]) -> String {
        let mut out = String::new();
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                let connector = match kinds.get(i - 1) {
                    Some(LinkKind::Strong) => &self.strong,
                    _ => &self.weak,
                };
                if self.spaced {
                    out.push_str(&format!(" {} ", connector));
                } else {
                    out.push_str(connector);
                }
            }
            out.push_str(&self.format_node(node));
        }
        out
    }

    /// Writes one node.
    ///
    /// Candidates sharing a digit are written as one group of cells. Groups are joined by `|`.
    pub fn format_node(&self, node: &Node) -> String {
        let candidates = node.candidates();
        let (open, close) = self.brackets.pair();

        // one cell holding several digits
        if let Ok(Some(cell)) = candidates.cells().unique() {
            return self.place(&format!("{}{}{}", open, digit_string(candidates.digits()), close), &self.cells(cell.as_set()));
        }

        let groups: Vec<String> = candidates
            .digits()
            .into_iter()
            .map(|digit| {
                self.place(
                    &format!("{}{}{}", open, digit.get(), close),
                    &self.cells(candidates.digit_cells(digit)),
                )
            })
            .collect();
        groups.join("|")
    }

    fn place(&self, digits: &str, cells: &str) -> String {
        match self.digit_placement {
            DigitPlacement::BeforeCells => format!("{}{}", digits, cells),
            DigitPlacement::AfterCells => format!("{}{}", cells, digits),
        }
    }

    fn cells(&self, cells: Set<Cell>) -> String {
        let rows: Vec<u8> = (0..9).filter(|&r| cells.into_iter().any(|c| c.row().get() == r)).collect();
        let cols: Vec<u8> = (0..9).filter(|&c| cells.into_iter().any(|cell| cell.col().get() == c)).collect();

        // the cells are exactly all combinations of their rows and columns
        if rows.len() * cols.len() == cells.len() as usize {
            return self.rows_cols(&rows, &cols);
        }
        cells
            .into_iter()
            .map(|cell| self.rows_cols(&[cell.row().get()], &[cell.col().get()]))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn rows_cols(&self, rows: &[u8], cols: &[u8]) -> String {
        let cols: String = cols.iter().map(|c| char::from(b'1' + c)).collect();
        match self.cell_style {
            CellStyle::RxCy => {
                let rows: String = rows.iter().map(|r| char::from(b'1' + r)).collect();
                format!("r{}c{}", rows, cols)
            }
            CellStyle::K9 => {
                let rows: String = rows.iter().map(|&r| K9_ROWS[r as usize]).collect();
                format!("{}{}", rows, cols)
            }
        }
    }
}

const K9_ROWS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J'];

fn digit_string(digits: Set<Digit>) -> String {
    digits.into_iter().map(|d| char::from(b'0' + d.get())).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Candidate, CandidateSet};

    fn three_nodes() -> Vec<Node> {
        vec![
            Node::single(Candidate::new(1, 1)).negated(),
            Node::single(Candidate::new(19, 1)),
            Node::single(Candidate::new(19, 2)).negated(),
        ]
    }

    #[test]
    fn eureka() {
        let kinds = [LinkKind::Strong, LinkKind::Weak];
        let text = ChainNotation::eureka().format_nodes(&three_nodes(), &kinds);
        assert_eq!(text, "(1)r1c2=(1)r3c2-(2)r3c2");
    }

    #[test]
    fn standard() {
        let kinds = [LinkKind::Strong, LinkKind::Weak];
        let text = ChainNotation::standard().format_nodes(&three_nodes(), &kinds);
        assert_eq!(text, "r1c2(1) == r3c2(1) -- r3c2(2)");
    }

    #[test]
    fn grouped_cells_are_compacted() {
        let group = Node::group(Cell::new(0).as_set() | Cell::new(1) | Cell::new(2), Digit::new(4)).unwrap();
        assert_eq!(ChainNotation::eureka().format_node(&group), "(4)r1c123");
        let k9 = ChainNotation::eureka().with_cell_style(CellStyle::K9);
        assert_eq!(k9.format_node(&group), "(4)A123");

        let column = Node::group(Cell::new(8).as_set() | Cell::new(17), Digit::new(4)).unwrap();
        assert_eq!(k9.format_node(&column), "(4)AB9");

        let scattered = Node::group(Cell::new(0).as_set() | Cell::new(10), Digit::new(4)).unwrap();
        assert_eq!(ChainNotation::standard().format_node(&scattered), "r1c1,r2c2(4)");
    }

    #[test]
    fn cell_with_several_digits() {
        let digits = Digit::new(3).as_set() | Digit::new(5);
        let node = Node::new(CandidateSet::from_digits(Cell::new(80), digits)).unwrap();
        let notation = ChainNotation::standard()
            .with_brackets(Brackets::Square)
            .with_connectors("=>", "->");
        assert_eq!(notation.format_node(&node), "r9c9[35]");
    }
}
