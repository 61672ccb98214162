use super::{find_loops, Loop, LoopRule};
use crate::bitset::Set;
use crate::board::{Candidate, CandidateSet, Cell, Digit, House};
use crate::errors::Unsolvable;
use crate::Grid;

/// An odd loop for a single digit together with the candidates outside of it
/// that keep it from being a contradiction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct GuardianLoop {
    pub digit: Digit,
    pub found: Loop,
    pub guardians: Set<Cell>,
    pub eliminations: CandidateSet,
    pub assignment: Option<Candidate>,
}

// Walks through the cells of one digit. The accumulator collects the candidates of
// every crossed house that are not on the loop.
struct Guardian<'a, F> {
    grid: &'a Grid,
    digit: Digit,
    on_loop: &'a mut F,
    done: bool,
}

impl<F: FnMut(GuardianLoop) -> bool> LoopRule for Guardian<'_, F> {
    type Acc = Set<Cell>;

    fn universe(&self) -> Set<Cell> {
        self.grid.digit_cells(self.digit)
    }

    fn initial(&self) -> Set<Cell> {
        Set::NONE
    }

    fn cross(&self, guardians: Set<Cell>, house: House, loop_cells: Set<Cell>) -> Option<Set<Cell>> {
        let digit_cells = self.grid.digit_cells(self.digit);
        let guardians = guardians | (digit_cells & house.cells()).without(loop_cells);
        // guardians only grow, once nothing sees all of them nothing ever will
        if guardians.len() >= 2 && (guardians.common_peers() & digit_cells).is_empty() {
            return None;
        }
        Some(guardians)
    }

    fn close(&mut self, found: &Loop, guardians: Set<Cell>) -> Result<bool, Unsolvable> {
        let digit = self.digit;
        // the digit can't fill every crossed house of an odd loop on its own
        if guardians.is_empty() {
            tracing::debug!(cells = ?found.cells(), digit = digit.get(), "guardian loop without guardians");
            return Err(Unsolvable);
        }

        let targets = self.grid.digit_cells(digit) & guardians.common_peers();
        let eliminations = CandidateSet::from_cells(targets, digit);
        let assignment = match guardians.unique() {
            Ok(Some(cell)) => Some(Candidate { cell, digit }),
            _ => None,
        };
        if eliminations.is_empty() && assignment.is_none() {
            return Ok(false);
        }

        self.done = (self.on_loop)(GuardianLoop {
            digit,
            found: found.clone(),
            guardians,
            eliminations,
            assignment,
        });
        Ok(true)
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

/// Searches every digit for odd loops that need a guardian and passes them to `on_loop`
/// as they are found. Stops as soon as `on_loop` returns `true`.
pub(crate) fn find_guardians(
    grid: &Grid,
    max_len: usize,
    mut on_loop: impl FnMut(GuardianLoop) -> bool,
) -> Result<(), Unsolvable> {
    for digit in Digit::all() {
        if grid.digit_cells(digit).len() < 5 {
            continue;
        }
        let mut rule = Guardian {
            grid,
            digit,
            on_loop: &mut on_loop,
            done: false,
        };
        find_loops(&mut rule, max_len)?;
        if rule.done {
            tracing::debug!(digit = digit.get(), "guardian search stopped early");
            break;
        }
    }
    Ok(())
}
