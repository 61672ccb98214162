use super::strategies::{alternating_chains, bivalue_oddagon, guardian, rectangles};
use super::{SolverConfig, Step, StepCollector, Strategy};
use crate::chaining::{LinkGraph, RectangleKind};
use crate::errors::Unsolvable;
use crate::Grid;

/// The `StrategySolver` searches one candidate grid for steps.
///
/// It is built from a single [`Grid`] which it never modifies. The link graph the chain
/// search needs is built on first use and kept for later searches.
///
/// ```
/// use sudoku_chaining::Grid;
/// use sudoku_chaining::strategy::{StrategySolver, Strategy};
///
/// let grid = Grid::from_str_line(
///     "9..24.....5.69.231.2..5..9..9.7..32...29356.7.7...29...69.2..7351..79.622.7.86..9",
/// ).unwrap();
/// let mut solver = StrategySolver::from_grid(grid);
/// let steps = solver.find_all(&[Strategy::AlternatingInferenceChains]).unwrap();
/// for step in &steps {
///     println!("{}: {:?}", step.technique().name(), step.conclusions());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StrategySolver {
    grid: Grid,
    config: SolverConfig,
    graph: Option<LinkGraph>,
}

impl StrategySolver {
    /// Solver with the default configuration
    pub fn from_grid(grid: Grid) -> StrategySolver {
        StrategySolver {
            grid,
            config: SolverConfig::default(),
            graph: None,
        }
    }

    /// Replaces the configuration
    pub fn with_config(mut self, config: SolverConfig) -> StrategySolver {
        if config.rules() != self.config.rules() || config.link_option() != self.config.link_option() {
            self.graph = None;
        }
        self.config = config;
        self
    }

    #[allow(missing_docs)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the link graph of the grid, building it if necessary.
    pub fn link_graph(&mut self) -> &LinkGraph {
        let StrategySolver { grid, config, graph } = self;
        graph.get_or_insert_with(|| LinkGraph::build(grid, config.rules(), config.link_option()))
    }

    /// Runs every strategy and returns all distinct steps, ordered by pattern length and technique.
    ///
    /// Returns `Err(Unsolvable)` if a loop proves that the grid has no solution.
    pub fn find_all(&mut self, strategies: &[Strategy]) -> Result<Vec<Step>, Unsolvable> {
        let mut collector = StepCollector::all();
        self.collect(strategies, &mut collector)?;
        tracing::debug!(steps = collector.len(), "found steps");
        Ok(collector.into_steps())
    }

    /// Tries the strategies in order and returns the first step found.
    pub fn find_first(&mut self, strategies: &[Strategy]) -> Result<Option<Step>, Unsolvable> {
        for &strategy in strategies {
            let mut collector = StepCollector::first();
            strategy.deduce(self, &mut collector)?;
            if let Some(step) = collector.into_steps().into_iter().next() {
                tracing::debug!(?strategy, technique = step.technique().name(), "found first step");
                return Ok(Some(step));
            }
        }
        Ok(None)
    }

    /// Runs the strategies into a caller supplied collector. Stops as soon as the collector is done.
    pub fn collect(&mut self, strategies: &[Strategy], collector: &mut StepCollector) -> Result<(), Unsolvable> {
        for &strategy in strategies {
            if collector.is_done() {
                break;
            }
            let before = collector.len();
            strategy.deduce(self, collector)?;
            tracing::debug!(?strategy, steps = collector.len() - before, "strategy finished");
        }
        Ok(())
    }

    pub(crate) fn find_unique_rectangles(&mut self, collector: &mut StepCollector) -> Result<(), Unsolvable> {
        rectangles::find_rectangles_type_1(&self.grid, RectangleKind::Unique, |step| collector.push(step))
    }

    pub(crate) fn find_avoidable_rectangles(&mut self, collector: &mut StepCollector) -> Result<(), Unsolvable> {
        rectangles::find_rectangles_type_1(&self.grid, RectangleKind::Avoidable, |step| collector.push(step))
    }

    pub(crate) fn find_alternating_chains(&mut self, collector: &mut StepCollector) -> Result<(), Unsolvable> {
        let StrategySolver { grid, config, graph } = self;
        let graph = graph.get_or_insert_with(|| LinkGraph::build(grid, config.rules(), config.link_option()));
        alternating_chains::find_alternating_chains(grid, graph, config.max_chain_length(), |step| {
            collector.push(step)
        })
    }

    pub(crate) fn find_bivalue_oddagons(&mut self, collector: &mut StepCollector) -> Result<(), Unsolvable> {
        let max_len = self.config.max_loop_length();
        bivalue_oddagon::find_bivalue_oddagon_steps(&self.grid, max_len, |step| collector.push(step))
    }

    pub(crate) fn find_guardians(&mut self, collector: &mut StepCollector) -> Result<(), Unsolvable> {
        let max_len = self.config.max_loop_length();
        guardian::find_guardian_steps(&self.grid, max_len, |step| collector.push(step))
    }
}
