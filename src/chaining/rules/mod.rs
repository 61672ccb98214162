//! Chaining rules
//!
//! Each rule scans a grid for one kind of relation between candidates and writes what it
//! finds into a [`Links`] sink. Rules never fail: a rule that finds nothing leaves the sink as is.
use crate::bitset::Set;
use crate::board::Cell;
use crate::chaining::Links;
use crate::Grid;

mod almost_locked_sets;
mod cell_chain;
mod digit_chain;
mod kraken_fish;
mod locked_candidates;
mod rectangles;

pub(crate) use self::rectangles::{find_rectangles, Rectangle};

/// Bound on the size of grouped nodes at the far end of weak links.
///
/// This only controls how many links are produced. Single candidates are always admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkOption {
    /// Up to 3 cells inside the intersection of a block and a line
    Intersection,
    /// Any set of cells inside one house
    House,
    /// No restriction
    All,
}

impl Default for LinkOption {
    fn default() -> Self {
        LinkOption::Intersection
    }
}

impl LinkOption {
    /// Checks whether a group of cells may be used as a grouped weak link end.
    pub fn admits(self, cells: Set<Cell>) -> bool {
        if cells.len() <= 1 {
            return true;
        }
        match self {
            LinkOption::Intersection => {
                let houses = cells.common_houses();
                cells.len() <= 3 && houses.overlaps(crate::board::House::ALL_BLOCKS) && houses.len() >= 2
            }
            LinkOption::House => !cells.common_houses().is_empty(),
            LinkOption::All => true,
        }
    }
}

/// A source of strong and weak links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainingRule {
    /// Same digit within a house
    DigitChain,
    /// Different digits within a cell
    CellChain,
    /// Groups of a digit confined to the intersection of a house with another house
    LockedCandidates,
    /// `n` cells holding `n + 1` digits
    AlmostLockedSets,
    /// Unique and avoidable rectangles
    Rectangles,
    /// Fish with fins
    KrakenFish,
}

impl ChainingRule {
    /// Every rule, in the order they are run by default
    pub const ALL: &'static [ChainingRule] = &[
        ChainingRule::DigitChain,
        ChainingRule::CellChain,
        ChainingRule::LockedCandidates,
        ChainingRule::AlmostLockedSets,
        ChainingRule::Rectangles,
        ChainingRule::KrakenFish,
    ];

    /// Writes all links this rule finds in `grid` into `links`.
    pub fn collect_links(self, grid: &Grid, option: LinkOption, links: &mut Links) {
        use self::ChainingRule::*;
        let before = links.len();
        match self {
            DigitChain => digit_chain::collect_digit_chain_links(grid, links),
            CellChain => cell_chain::collect_cell_chain_links(grid, links),
            LockedCandidates => locked_candidates::collect_locked_candidate_links(grid, option, links),
            AlmostLockedSets => almost_locked_sets::collect_almost_locked_set_links(grid, option, links),
            Rectangles => rectangles::collect_rectangle_links(grid, links),
            KrakenFish => kraken_fish::collect_kraken_fish_links(grid, option, links),
        }
        tracing::trace!(rule = ?self, new_links = links.len() - before, "collected links");
    }
}
