use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sudoku_chaining::chaining::{ChainingRule, LinkGraph, LinkKind, LinkOption, Node, NodeKind};
use sudoku_chaining::strategy::{ConclusionKind, Justification, SolverConfig, Strategy, StrategySolver};
use std::time::{Duration, Instant};
use sudoku_chaining::{Cell, CellState, Digit, Grid, House, Set};

const SUDOKUS: &str = include_str!("../sudokus/Lines/chaining_sudokus.txt");

fn read_grids(sudokus_str: &str) -> Vec<Grid> {
    sudokus_str
        .lines()
        .map(|line| Grid::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err)))
        .collect()
}

///////////////////////////////////////////////////////////////////////////////////////////////
//                           Backtracking solver, only for checking
///////////////////////////////////////////////////////////////////////////////////////////////

fn fits(cells: &[u8; 81], cell: usize, digit: u8) -> bool {
    let (row, col) = (cell / 9, cell % 9);
    let (block_row, block_col) = (row / 3 * 3, col / 3 * 3);
    (0..9).all(|i| {
        cells[row * 9 + i] != digit
            && cells[i * 9 + col] != digit
            && cells[(block_row + i / 3) * 9 + block_col + i % 3] != digit
    })
}

fn backtrack(cells: &mut [u8; 81]) -> bool {
    // cell with the fewest options first
    let mut best: Option<(usize, Vec<u8>)> = None;
    for cell in (0..81).filter(|&cell| cells[cell] == 0) {
        let options: Vec<u8> = (1..=9).filter(|&digit| fits(cells, cell, digit)).collect();
        if best.as_ref().map_or(true, |(_, best)| options.len() < best.len()) {
            best = Some((cell, options));
        }
    }
    let (cell, options) = match best {
        Some(best) => best,
        None => return true,
    };
    for digit in options {
        cells[cell] = digit;
        if backtrack(cells) {
            return true;
        }
    }
    cells[cell] = 0;
    false
}

fn solve(grid: &Grid) -> [u8; 81] {
    let mut cells = [0; 81];
    for (cell, state) in grid.cell_states().iter().enumerate() {
        if let Some(digit) = state.digit() {
            cells[cell] = digit.get();
        }
    }
    assert!(backtrack(&mut cells), "unsolvable test sudoku");
    cells
}

// Fills a random share of the empty cells with their solution and recomputes the candidates.
fn midgame(grid: &Grid, solution: &[u8; 81], rng: &mut StdRng) -> Grid {
    let mut states = grid.cell_states();
    for cell in 0..81 {
        if states[cell].is_empty() && rng.gen_bool(0.45) {
            states[cell] = CellState::Modifiable(Digit::new(solution[cell]));
        }
    }
    let entered = states;
    for cell in Cell::all() {
        if entered[cell.as_index()].is_empty() {
            let blocked: Set<Digit> = cell
                .peers()
                .into_iter()
                .filter_map(|peer| entered[peer.as_index()].digit())
                .collect();
            states[cell.as_index()] = CellState::Candidates(!blocked);
        }
    }
    Grid::from_cell_states(states)
}

fn is_true(node: &Node, solution: &[u8; 81]) -> bool {
    let holds = |cell: Cell, digit: Digit| solution[cell.as_index()] == digit.get();
    match node.kind() {
        NodeKind::Candidates => node.candidates().iter().any(|c| holds(c.cell, c.digit)),
        NodeKind::FishBody { base, cover } => {
            let digit = node.digit().expect("fish of one digit");
            base.cells()
                .into_iter()
                .filter(|&cell| holds(cell, digit))
                .all(|cell| cover.cells().contains(cell))
        }
    }
}

fn check_steps(grid: &Grid, solution: &[u8; 81], config: SolverConfig, strategies: &[Strategy]) -> usize {
    let max_loop_length = config.max_loop_length();
    let mut solver = StrategySolver::from_grid(grid.clone()).with_config(config);
    let steps = solver
        .find_all(strategies)
        .unwrap_or_else(|err| panic!("{} in\n{}", err, grid));
    for step in &steps {
        for conclusion in step.conclusions() {
            let candidate = conclusion.candidate;
            let is_solution = solution[candidate.cell.as_index()] == candidate.digit.get();
            match conclusion.kind {
                ConclusionKind::Assignment => assert!(is_solution, "{:?} wrongly assigns {:?}", step, candidate),
                ConclusionKind::Elimination => assert!(!is_solution, "{:?} wrongly eliminates {:?}", step, candidate),
            }
            assert!(grid.has_candidate(candidate));
        }
        if let Justification::Loop(found) = step.justification() {
            assert!(found.is_valid(), "{:?}", found);
            assert!(found.len() <= max_loop_length);
        }
    }
    steps.len()
}

///////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn links_agree_with_solution() {
    let mut rng = StdRng::seed_from_u64(7);
    for grid in read_grids(SUDOKUS) {
        let solution = solve(&grid);
        let grid = midgame(&grid, &solution, &mut rng);
        let graph = LinkGraph::build(&grid, ChainingRule::ALL, LinkOption::Intersection);
        for link in graph.links() {
            let (a, b) = (is_true(&link.first(), &solution), is_true(&link.second(), &solution));
            match link.kind() {
                LinkKind::Strong => assert!(a || b, "both ends of {:?} are false", link),
                LinkKind::Weak => assert!(!(a && b), "both ends of {:?} are true", link),
            }
        }
    }
}

#[test]
fn chain_conclusions_agree_with_solution() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = SolverConfig::default()
        .with_rules(&[ChainingRule::DigitChain, ChainingRule::CellChain, ChainingRule::LockedCandidates])
        .with_max_chain_length(10);
    let mut found = 0;
    for grid in read_grids(SUDOKUS) {
        let solution = solve(&grid);
        let grid = midgame(&grid, &solution, &mut rng);
        found += check_steps(&grid, &solution, config.clone(), &[Strategy::AlternatingInferenceChains]);
    }
    assert!(found > 0);
}

#[test]
fn pattern_chain_conclusions_agree_with_solution() {
    let mut rng = StdRng::seed_from_u64(13);
    let config = SolverConfig::default().with_max_chain_length(8);
    for grid in read_grids(SUDOKUS) {
        let solution = solve(&grid);
        for _ in 0..2 {
            let grid = midgame(&grid, &solution, &mut rng);
            check_steps(&grid, &solution, config.clone(), &[Strategy::AlternatingInferenceChains]);
        }
    }
}

#[test]
fn loop_and_rectangle_conclusions_agree_with_solution() {
    let mut rng = StdRng::seed_from_u64(17);
    let config = SolverConfig::default().with_max_loop_length(9);
    let strategies = [
        Strategy::UniqueRectangles,
        Strategy::AvoidableRectangles,
        Strategy::BivalueOddagon,
        Strategy::Guardian,
    ];
    for grid in read_grids(SUDOKUS) {
        let solution = solve(&grid);
        for _ in 0..3 {
            let grid = midgame(&grid, &solution, &mut rng);
            check_steps(&grid, &solution, config.clone(), &strategies);
        }
    }
}

#[test]
fn digit_chain_strong_links_are_conjugate_pairs() {
    for grid in read_grids(SUDOKUS) {
        let graph = LinkGraph::build(&grid, &[ChainingRule::DigitChain], LinkOption::Intersection);
        for link in graph.links().iter().filter(|link| link.kind() == LinkKind::Strong) {
            let digit = link.first().digit().expect("single digit");
            let cells = link.first().cells() | link.second().cells();
            let is_pair = House::all().any(|house| grid.house_digit_cells(house, digit) == cells);
            assert!(is_pair, "{:?}", link);
        }
    }
}

#[test]
fn graph_does_not_depend_on_rule_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let grids = read_grids(SUDOKUS);
    let grid = &grids[3];
    let expected = LinkGraph::build(grid, ChainingRule::ALL, LinkOption::Intersection);
    for _ in 0..4 {
        let mut rules = ChainingRule::ALL.to_vec();
        rules.shuffle(&mut rng);
        let graph = LinkGraph::build(grid, &rules, LinkOption::Intersection);
        assert_eq!(graph.links(), expected.links(), "{:?}", rules);
    }
}

#[test]
fn searches_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(5);
    let grids = read_grids(SUDOKUS);
    let solution = solve(&grids[0]);
    let grid = midgame(&grids[0], &solution, &mut rng);
    let config = SolverConfig::default().with_max_loop_length(9).with_max_chain_length(8);
    let run = || {
        StrategySolver::from_grid(grid.clone())
            .with_config(config.clone())
            .find_all(Strategy::ALL)
    };
    assert_eq!(run(), run());
}

#[test]
fn find_first_returns_a_listed_step() {
    let grids = read_grids(SUDOKUS);
    let config = SolverConfig::default().with_max_chain_length(8).with_max_loop_length(9);
    let mut solver = StrategySolver::from_grid(grids[3].clone()).with_config(config);
    let strategies = [Strategy::AlternatingInferenceChains];
    let first = solver.find_first(&strategies).unwrap().expect("a chain");
    let all = solver.find_all(&strategies).unwrap();
    assert!(all.contains(&first));
}

#[test]
fn parse_candidate_grid() {
    let mut rng = StdRng::seed_from_u64(19);
    let mut single_candidates = 0;
    for grid in read_grids(SUDOKUS) {
        let solution = solve(&grid);
        for grid in vec![grid.clone(), midgame(&grid, &solution, &mut rng)] {
            single_candidates += grid
                .empty_cells()
                .into_iter()
                .filter(|&cell| grid.candidates(cell).len() == 1)
                .count();
            let printed = grid.to_string();
            assert_eq!(Grid::from_candidates_str(&printed), Ok(grid));
        }
    }
    assert!(single_candidates > 0);
}

// Runs on the unaltered puzzles with everything enabled and the default limits.

#[test]
fn default_link_graph_stays_small() {
    for grid in read_grids(SUDOKUS) {
        let start = Instant::now();
        let graph = LinkGraph::build(&grid, ChainingRule::ALL, SolverConfig::default().link_option());
        assert!(graph.links().len() < 60_000, "{} links", graph.links().len());
        assert!(graph.node_count() < 6_000, "{} nodes", graph.node_count());
        assert!(start.elapsed() < Duration::from_secs(30), "{:?}", start.elapsed());
    }
}

#[test]
fn default_config_finds_first_step() {
    let grids = read_grids(SUDOKUS);
    let start = Instant::now();
    let mut solver = StrategySolver::from_grid(grids[0].clone());
    let first = solver.find_first(Strategy::ALL).unwrap();
    assert!(start.elapsed() < Duration::from_secs(60), "{:?}", start.elapsed());
    if let Some(step) = first {
        let solution = solve(&grids[0]);
        for conclusion in step.conclusions() {
            let is_solution = solution[conclusion.candidate.cell.as_index()] == conclusion.candidate.digit.get();
            assert_eq!(is_solution, conclusion.kind == ConclusionKind::Assignment, "{:?}", step);
        }
    }
}

#[test]
fn default_config_conclusions_agree_with_solution() {
    for grid in read_grids(SUDOKUS).into_iter().take(2) {
        let solution = solve(&grid);
        let start = Instant::now();
        check_steps(&grid, &solution, SolverConfig::default(), Strategy::ALL);
        assert!(start.elapsed() < Duration::from_secs(300), "{:?}", start.elapsed());
    }
}

#[test]
#[should_panic]
fn wrong_length() {
    Grid::from_str_line("...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1..").unwrap();
}
