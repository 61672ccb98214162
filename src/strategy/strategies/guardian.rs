use super::prelude::*;
use crate::loops::{find_guardians, GuardianLoop};

fn view(guardian: &GuardianLoop) -> View {
    let cells = guardian.found.cell_set();
    View {
        cells,
        candidates: CandidateSet::from_cells(cells | guardian.guardians, guardian.digit),
        houses: guardian.found.houses().iter().fold(Set::<House>::NONE, |acc, &house| acc | house),
        links: vec![],
    }
}

/// Reports the guardians of odd single digit loops. A loop without guardians makes the grid unsolvable.
pub(crate) fn find_guardian_steps(
    grid: &Grid,
    max_len: usize,
    mut on_guardian: impl FnMut(Step) -> bool,
) -> Result<(), Unsolvable> {
    find_guardians(grid, max_len, |guardian| {
        let step = Step::new(
            Technique::GuardianLoop,
            guardian.assignment,
            guardian.eliminations,
            Justification::Loop(guardian.found.clone()),
            view(&guardian),
        );
        on_guardian(step)
    })
}
