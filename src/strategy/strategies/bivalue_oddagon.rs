use super::prelude::*;
use crate::loops::{find_bivalue_oddagons, OddagonKind, OddagonLoop};

fn technique(kind: OddagonKind) -> Technique {
    match kind {
        OddagonKind::Type1 => Technique::BivalueOddagonType1,
        OddagonKind::Type2 => Technique::BivalueOddagonType2,
        OddagonKind::Type3 { .. } => Technique::BivalueOddagonType3,
    }
}

fn view(oddagon: &OddagonLoop) -> View {
    let cells = oddagon.found.cell_set();
    let candidates = oddagon
        .digits
        .into_iter()
        .map(|digit| CandidateSet::from_cells(cells, digit))
        .fold(CandidateSet::NONE, |acc, set| acc.union(&set));
    let mut houses: Set<House> = oddagon.found.houses().iter().fold(Set::<House>::NONE, |acc, &house| acc | house);
    let mut cells = cells;
    if let OddagonKind::Type3 { subset, house } = oddagon.kind {
        houses |= house;
        cells |= subset;
    }
    View {
        cells,
        candidates,
        houses,
        links: vec![],
    }
}

/// Reports the oddagons of every digit pair. A loop without extra candidates makes the grid unsolvable.
pub(crate) fn find_bivalue_oddagon_steps(
    grid: &Grid,
    max_len: usize,
    mut on_oddagon: impl FnMut(Step) -> bool,
) -> Result<(), Unsolvable> {
    find_bivalue_oddagons(grid, max_len, |oddagon| {
        let step = Step::new(
            technique(oddagon.kind),
            None,
            oddagon.eliminations,
            Justification::Loop(oddagon.found.clone()),
            view(&oddagon),
        );
        on_oddagon(step)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::CellState;

    #[test]
    fn type_2_step() {
        let mut states = [CellState::Given(Digit::new(9)); 81];
        let one_two = Digit::new(1).as_set() | Digit::new(2);
        for &cell in &[0usize, 43, 35, 80, 72] {
            states[cell] = CellState::Candidates(one_two);
        }
        for &cell in &[4usize, 40] {
            states[cell] = CellState::Candidates(one_two | Digit::new(3));
        }
        states[67] = CellState::Candidates(Digit::new(3).as_set() | Digit::new(5));
        let grid = Grid::from_cell_states(states);

        let mut steps = vec![];
        find_bivalue_oddagon_steps(&grid, 13, |step| {
            steps.push(step);
            false
        })
        .unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].technique(), Technique::BivalueOddagonType2);
        assert_eq!(steps[0].eliminations().collect::<Vec<_>>(), [Candidate::new(67, 3)]);
        assert_eq!(steps[0].pattern_len(), 7);
        assert_eq!(steps[0].view().candidates.len(), 14);
    }
}
