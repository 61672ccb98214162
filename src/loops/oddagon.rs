use super::{find_loops, Loop, LoopRule};
use crate::bitset::{Iter as SetIter, Set};
use crate::board::{CandidateSet, Cell, Digit, House};
use crate::errors::Unsolvable;
use crate::Grid;

/// How the extra candidates of an oddagon are exploited
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum OddagonKind {
    /// A single cell has extra candidates, so it can't hold either loop digit
    Type1,
    /// All extra candidates are the same digit
    Type2,
    /// The extra cells share a house and act as one cell of a naked subset
    Type3 { subset: Set<Cell>, house: House },
}

/// An odd loop of cells holding the same two digits that can only be broken by extra candidates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct OddagonLoop {
    pub kind: OddagonKind,
    pub digits: Set<Digit>,
    pub found: Loop,
    pub extra_cells: Set<Cell>,
    pub eliminations: CandidateSet,
}

struct BivalueOddagon<'a, F> {
    grid: &'a Grid,
    digits: Set<Digit>,
    universe: Set<Cell>,
    // cells of the universe holding more than the two digits
    extra_universe: Set<Cell>,
    on_loop: &'a mut F,
    done: bool,
}

impl<F: FnMut(OddagonLoop) -> bool> LoopRule for BivalueOddagon<'_, F> {
    type Acc = ();

    fn universe(&self) -> Set<Cell> {
        self.universe
    }

    fn initial(&self) {}

    fn cross(&self, _: (), _: House, loop_cells: Set<Cell>) -> Option<()> {
        // every type needs a single extra cell or extra cells that are seen together
        let extra_cells = loop_cells & self.extra_universe;
        if extra_cells.len() >= 2 && extra_cells.common_peers().is_empty() {
            return None;
        }
        Some(())
    }

    fn close(&mut self, found: &Loop, _: ()) -> Result<bool, Unsolvable> {
        let grid = self.grid;
        let digits = self.digits;
        let extra_cells: Set<Cell> = found
            .cells()
            .iter()
            .copied()
            .filter(|&cell| grid.candidates(cell) != digits)
            .collect();

        // every cell is bivalue, the two digits can't alternate around an odd loop
        if extra_cells.is_empty() {
            tracing::debug!(cells = ?found.cells(), "bivalue oddagon without extra candidates");
            return Err(Unsolvable);
        }

        let on_loop = &mut *self.on_loop;
        let mut done = self.done;
        let mut accepted = false;
        let mut push = |kind, eliminations: CandidateSet| {
            if done || eliminations.is_empty() {
                return;
            }
            accepted = true;
            done = on_loop(OddagonLoop {
                kind,
                digits,
                found: found.clone(),
                extra_cells,
                eliminations,
            });
        };

        if let Ok(Some(cell)) = extra_cells.unique() {
            push(OddagonKind::Type1, CandidateSet::from_digits(cell, digits));
        }

        let extra_digits = extra_cells
            .into_iter()
            .fold(Set::<Digit>::NONE, |acc, cell| acc | grid.candidates(cell))
            .without(digits);
        if let Ok(Some(digit)) = extra_digits.unique() {
            let targets = grid.digit_cells(digit) & extra_cells.common_peers();
            push(OddagonKind::Type2, CandidateSet::from_cells(targets, digit));
        }

        if extra_cells.len() >= 2 {
            for house in extra_cells.common_houses() {
                let others: Set<Cell> = (house.cells() & grid.empty_cells())
                    .without(found.cell_set())
                    .into_iter()
                    .filter(|&cell| grid.candidates(cell).len() >= 2)
                    .collect();
                for (subset, subset_digits) in naked_subsets(grid, others, extra_digits) {
                    let targets = house.cells().without(subset | extra_cells);
                    let eliminations = subset_digits
                        .into_iter()
                        .map(|digit| CandidateSet::from_cells(targets & grid.digit_cells(digit), digit))
                        .fold(CandidateSet::NONE, |acc, set| acc.union(&set));
                    push(OddagonKind::Type3 { subset, house }, eliminations);
                }
            }
        }

        self.done = done;
        Ok(accepted)
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

/// Groups of `k` cells out of `cells` that hold `k + 1` digits together with `extra_digits`.
/// The extra cells then fill the last digit of the subset.
fn naked_subsets(grid: &Grid, cells: Set<Cell>, extra_digits: Set<Digit>) -> Vec<(Set<Cell>, Set<Digit>)> {
    let mut found = vec![];
    walk_combinations(grid, cells.into_iter(), Set::NONE, extra_digits, &mut found);
    found
}

fn walk_combinations(
    grid: &Grid,
    mut cells: SetIter<Cell>,
    chosen: Set<Cell>,
    digits: Set<Digit>,
    found: &mut Vec<(Set<Cell>, Set<Digit>)>,
) {
    while let Some(cell) = cells.next() {
        let new_chosen = chosen | cell;
        let new_digits = digits | grid.candidates(cell);
        if new_digits.len() > 5 {
            continue;
        }
        if new_digits.len() == new_chosen.len() + 1 {
            found.push((new_chosen, new_digits));
        }
        if new_chosen.len() == 4 {
            continue;
        }
        walk_combinations(grid, cells.clone(), new_chosen, new_digits, found);
    }
}

/// Searches every pair of digits for odd loops through cells holding both and passes every
/// usable loop to `on_loop`. Stops as soon as `on_loop` returns `true`.
pub(crate) fn find_bivalue_oddagons(
    grid: &Grid,
    max_len: usize,
    mut on_loop: impl FnMut(OddagonLoop) -> bool,
) -> Result<(), Unsolvable> {
    for first in Digit::all() {
        for second in Digit::all().filter(|&digit| digit > first) {
            let universe = grid.digit_cells(first) & grid.digit_cells(second);
            if universe.len() < 5 {
                continue;
            }
            let digits = first.as_set() | second;
            let extra_universe = universe
                .into_iter()
                .filter(|&cell| grid.candidates(cell) != digits)
                .collect();
            let mut rule = BivalueOddagon {
                grid,
                digits,
                universe,
                extra_universe,
                on_loop: &mut on_loop,
                done: false,
            };
            find_loops(&mut rule, max_len)?;
            if rule.done {
                tracing::debug!(digits = ?digits, "bivalue oddagon search stopped early");
                return Ok(());
            }
        }
    }
    Ok(())
}
