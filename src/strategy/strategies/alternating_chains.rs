use super::prelude::*;
use crate::chaining::{find_chains, Chain, ChainResult, LinkGraph};

fn technique(result: &ChainResult) -> Technique {
    let chain = &result.chain;
    let uses_pattern = chain.links().iter().any(|link| link.pattern().is_some());
    if result.assignment.is_some() {
        Technique::DiscontinuousNiceLoop
    } else if chain.is_grouped() || uses_pattern {
        Technique::GroupedAlternatingInferenceChain
    } else if chain.is_single_digit() {
        Technique::XChain
    } else {
        Technique::AlternatingInferenceChain
    }
}

fn view(chain: &Chain) -> View {
    let candidates = chain
        .nodes()
        .iter()
        .fold(CandidateSet::NONE, |acc, node| acc.union(node.candidates()));
    let houses = chain
        .links()
        .iter()
        .filter_map(|link| link.pattern())
        .fold(Set::<House>::NONE, |acc, pattern| acc | pattern.houses());
    View {
        cells: candidates.cells(),
        candidates,
        houses,
        links: chain.links().to_vec(),
    }
}

/// Reports a step for every conclusion an alternating inference chain of at most `max_nodes` nodes proves.
pub(crate) fn find_alternating_chains(
    grid: &Grid,
    graph: &LinkGraph,
    max_nodes: usize,
    mut on_chain: impl FnMut(Step) -> bool,
) -> Result<(), Unsolvable> {
    find_chains(grid, graph, max_nodes, |result| {
        let step = Step::new(
            technique(&result),
            result.assignment,
            result.eliminations,
            Justification::Chain(result.chain.clone()),
            view(&result.chain),
        );
        on_chain(step)
    });
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::CellState;
    use crate::chaining::{ChainingRule, LinkOption};

    #[test]
    fn x_chain() {
        // digit 1 in r1c1, r7c1, r7c5, r2c5 and r2c2
        let mut states = [CellState::Given(Digit::new(9)); 81];
        for &cell in &[0usize, 54, 58, 13, 10] {
            states[cell] = CellState::Candidates(Digit::new(1).as_set() | Digit::new(2));
        }
        let grid = Grid::from_cell_states(states);
        let graph = LinkGraph::build(&grid, &[ChainingRule::DigitChain], LinkOption::Intersection);

        let mut steps = vec![];
        find_alternating_chains(&grid, &graph, 8, |step| {
            steps.push(step);
            false
        })
        .unwrap();

        let step = steps
            .iter()
            .find(|step| step.eliminations().any(|c| c == Candidate::new(10, 1)))
            .expect("x-chain eliminating r2c2");
        assert_eq!(step.technique(), Technique::XChain);
        assert!(step.view().cells.contains(Cell::new(0)));
        match step.justification() {
            Justification::Chain(chain) => assert_eq!(chain.len(), step.view().links.len()),
            other => panic!("unexpected justification {:?}", other),
        }
    }
}
