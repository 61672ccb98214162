//! Search for odd loops of cells
//!
//! A loop is a closed walk through cells where consecutive cells share a house and every house
//! contains at most two cells of the loop. Depending on the cells it may use, an odd loop is a
//! contradiction that must be broken by some candidate outside of it. The walk is shared by all
//! kinds of loops, a [`LoopRule`] decides which cells can be used and what a closed loop proves.
use crate::bitset::Set;
use crate::board::{Cell, House};
use crate::errors::Unsolvable;
use std::collections::HashSet;

mod guardian;
mod oddagon;

pub(crate) use self::guardian::{find_guardians, GuardianLoop};
pub(crate) use self::oddagon::{find_bivalue_oddagons, OddagonKind, OddagonLoop};

/// A closed sequence of cells.
///
/// Stored rotated so that the smallest cell comes first and directed so that its
/// second cell is smaller than its last one. The same cycle always compares equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loop {
    cells: Vec<Cell>,
    // houses[i] joins cells[i] and cells[i + 1], the last one closes the loop
    houses: Vec<House>,
}

impl Loop {
    pub(crate) fn new(mut cells: Vec<Cell>, mut houses: Vec<House>) -> Self {
        debug_assert_eq!(cells.len(), houses.len());
        let n = cells.len();
        if let Some(min_pos) = (0..n).min_by_key(|&i| cells[i]) {
            cells.rotate_left(min_pos);
            houses.rotate_left(min_pos);
        }
        if n > 2 && cells[n - 1] < cells[1] {
            cells[1..].reverse();
            houses.reverse();
        }
        Loop { cells, houses }
    }

    /// Cells in loop order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// `houses()[i]` joins `cells()[i]` and the next cell
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    #[allow(missing_docs)]
    pub fn cell_set(&self) -> Set<Cell> {
        self.cells.iter().copied().collect()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks the loop invariants: odd length of at least 5, no cell twice, every consecutive
    /// pair joined by a house and at most 2 cells in any house.
    pub fn is_valid(&self) -> bool {
        let n = self.cells.len();
        if n < 5 || n % 2 == 0 || self.cell_set().len() as usize != n || self.houses.len() != n {
            return false;
        }
        let joined = (0..n).all(|i| {
            let house = self.houses[i].cells();
            house.contains(self.cells[i]) && house.contains(self.cells[(i + 1) % n])
        });
        let cell_set = self.cell_set();
        joined && House::all().all(|house| (house.cells() & cell_set).len() <= 2)
    }
}

/// Decides which cells a loop may use and what a closed loop proves.
pub(crate) trait LoopRule {
    /// Value carried along the walk
    type Acc: Copy;

    /// Cells that may be part of a loop
    fn universe(&self) -> Set<Cell>;

    fn initial(&self) -> Self::Acc;

    /// Called when the loop passes through `house`. `loop_cells` already contains the cell
    /// entered. Returning `None` abandons the branch.
    fn cross(&self, acc: Self::Acc, house: House, loop_cells: Set<Cell>) -> Option<Self::Acc>;

    /// Called with every closed loop. Returns whether the loop is accepted.
    fn close(&mut self, found: &Loop, acc: Self::Acc) -> Result<bool, Unsolvable>;

    /// Checks whether the search should stop. Asked after every accepted loop.
    fn is_done(&self) -> bool {
        false
    }
}

/// Runs a depth first search for odd loops of at most `max_len` cells.
///
/// Each loop is walked only from its smallest cell and every set of cells is accepted at most once.
/// Returns early once the rule is done.
pub(crate) fn find_loops<R: LoopRule>(rule: &mut R, max_len: usize) -> Result<(), Unsolvable> {
    let full = rule.universe();
    let mut seen = HashSet::new();
    for start in full {
        let universe: Set<Cell> = full.into_iter().filter(|&cell| cell >= start).collect();
        if universe.len() < 5 {
            break;
        }
        let initial = rule.initial();
        let mut walk = Walk {
            rule: &mut *rule,
            start,
            universe,
            max_len,
            cells: vec![start],
            houses: vec![],
            loop_set: start.as_set(),
            seen: &mut seen,
        };
        walk.step(start, Set::NONE, initial)?;
        if rule.is_done() {
            break;
        }
    }
    Ok(())
}

struct Walk<'a, R: LoopRule> {
    rule: &'a mut R,
    start: Cell,
    universe: Set<Cell>,
    max_len: usize,
    cells: Vec<Cell>,
    houses: Vec<House>,
    loop_set: Set<Cell>,
    seen: &'a mut HashSet<Set<Cell>>,
}

impl<'a, R: LoopRule> Walk<'a, R> {
    fn step(&mut self, last: Cell, used_houses: Set<House>, acc: R::Acc) -> Result<(), Unsolvable> {
        let houses = last.houses();
        let mut closed = false;
        unroll! {
            for i in 0..3 {
                if !closed {
                    closed = self.visit_house(houses[i], last, used_houses, acc)?;
                }
            }
        }
        Ok(())
    }

    // returns true if a loop was closed or the rule is done, which ends the branch
    fn visit_house(
        &mut self,
        house: House,
        last: Cell,
        used_houses: Set<House>,
        acc: R::Acc,
    ) -> Result<bool, Unsolvable> {
        if used_houses.contains(house) {
            return Ok(false);
        }
        let in_house = self.universe & house.cells();
        let on_loop = self.loop_set & house.cells();
        if in_house.len() < 2 || on_loop.len() > 2 {
            return Ok(false);
        }

        for next in in_house {
            if next == self.start {
                if self.try_close(house, last, on_loop, acc)? {
                    return Ok(true);
                }
                continue;
            }

            if self.loop_set.contains(next) || self.cells.len() >= self.max_len || on_loop.len() != 1 {
                continue;
            }
            // every other house of the new cell must have room left
            let loop_set = self.loop_set;
            let crowded = next
                .houses()
                .iter()
                .any(|&other| other != house && (loop_set & other.cells()).len() >= 2);
            if crowded {
                continue;
            }

            let new_loop_set = self.loop_set | next;
            let acc = match self.rule.cross(acc, house, new_loop_set) {
                Some(acc) => acc,
                None => continue,
            };

            self.cells.push(next);
            self.houses.push(house);
            self.loop_set = new_loop_set;
            let result = self.step(next, used_houses | house, acc);
            self.cells.pop();
            self.houses.pop();
            self.loop_set.remove(next.as_set());
            result?;
            if self.rule.is_done() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn try_close(&mut self, house: House, last: Cell, on_loop: Set<Cell>, acc: R::Acc) -> Result<bool, Unsolvable> {
        let n = self.cells.len();
        let closes = n >= 5 && n % 2 == 1 && last != self.start && on_loop == last.as_set() | self.start;
        if !closes || self.seen.contains(&self.loop_set) {
            return Ok(false);
        }
        let acc = match self.rule.cross(acc, house, self.loop_set) {
            Some(acc) => acc,
            None => return Ok(false),
        };

        let mut houses = self.houses.clone();
        houses.push(house);
        let found = Loop::new(self.cells.clone(), houses);
        tracing::trace!(cells = ?found.cells(), "closed loop");
        if self.rule.close(&found, acc)? {
            self.seen.insert(self.loop_set);
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // accepts every loop in a fixed universe
    struct AllLoops {
        universe: Set<Cell>,
        found: Vec<Loop>,
    }

    impl LoopRule for AllLoops {
        type Acc = ();

        fn universe(&self) -> Set<Cell> {
            self.universe
        }

        fn initial(&self) {}

        fn cross(&self, _: (), _: House, _: Set<Cell>) -> Option<()> {
            Some(())
        }

        fn close(&mut self, found: &Loop, _: ()) -> Result<bool, Unsolvable> {
            self.found.push(found.clone());
            Ok(true)
        }
    }

    fn cells(cells: &[u8]) -> Set<Cell> {
        cells.iter().map(|&c| Cell::new(c)).collect()
    }

    #[test]
    fn canonical_form() {
        let c = |n| Cell::new(n);
        let h = |n| House::new(n);
        let a = Loop::new(vec![c(40), c(4), c(0), c(36), c(37)], vec![h(13), h(0), h(9), h(4), h(22)]);
        assert_eq!(a.cells(), &[c(0), c(4), c(40), c(37), c(36)]);
        assert_eq!(a.houses(), &[h(0), h(13), h(22), h(4), h(9)]);
        let b = Loop::new(vec![c(0), c(36), c(37), c(40), c(4)], vec![h(9), h(4), h(22), h(13), h(0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn five_cell_loop() {
        // r1c1, r1c5, r5c5, r4c6, r4c1 joined by row 1, column 5, block 5, row 4, column 1
        let universe = cells(&[0, 4, 40, 32, 27]);
        let mut rule = AllLoops { universe, found: vec![] };
        find_loops(&mut rule, 13).unwrap();
        assert_eq!(rule.found.len(), 1);
        let found = &rule.found[0];
        assert!(found.is_valid());
        assert_eq!(found.cell_set(), universe);
    }

    #[test]
    fn even_loops_are_ignored() {
        // x-wing shape: r1c1, r1c5, r5c5, r5c1
        let mut rule = AllLoops {
            universe: cells(&[0, 4, 40, 36]),
            found: vec![],
        };
        find_loops(&mut rule, 13).unwrap();
        assert!(rule.found.is_empty());
    }

    // the five cell loop above and two seven cell loops through r1c1, r1c5 and r5c5
    const THREE_LOOPS: [u8; 9] = [0, 4, 40, 32, 27, 43, 35, 80, 72];

    #[test]
    fn found_loops_are_valid() {
        let universe = cells(&THREE_LOOPS);
        let mut rule = AllLoops { universe, found: vec![] };
        find_loops(&mut rule, 9).unwrap();
        assert_eq!(rule.found.len(), 3);
        for found in &rule.found {
            assert!(found.is_valid(), "{:?}", found);
            assert!(found.len() <= 9);
        }
        let distinct: HashSet<_> = rule.found.iter().map(Loop::cell_set).collect();
        assert_eq!(distinct.len(), rule.found.len());
    }

    #[test]
    fn max_len_bounds_the_loops() {
        let mut rule = AllLoops {
            universe: cells(&THREE_LOOPS),
            found: vec![],
        };
        find_loops(&mut rule, 5).unwrap();
        assert_eq!(rule.found.len(), 1);
        assert_eq!(rule.found[0].len(), 5);
    }

    // stops as soon as `limit` loops were accepted
    struct FirstLoops {
        universe: Set<Cell>,
        limit: usize,
        found: Vec<Loop>,
    }

    impl LoopRule for FirstLoops {
        type Acc = ();

        fn universe(&self) -> Set<Cell> {
            self.universe
        }

        fn initial(&self) {}

        fn cross(&self, _: (), _: House, _: Set<Cell>) -> Option<()> {
            Some(())
        }

        fn close(&mut self, found: &Loop, _: ()) -> Result<bool, Unsolvable> {
            assert!(!self.is_done(), "search continued after it was done");
            self.found.push(found.clone());
            Ok(true)
        }

        fn is_done(&self) -> bool {
            self.found.len() >= self.limit
        }
    }

    #[test]
    fn search_stops_when_rule_is_done() {
        for limit in 1..=3 {
            let mut rule = FirstLoops {
                universe: cells(&THREE_LOOPS),
                limit,
                found: vec![],
            };
            find_loops(&mut rule, 13).unwrap();
            assert_eq!(rule.found.len(), limit);
        }
    }
}
