use crate::chaining::{ChainingRule, LinkOption};

/// Settings for the chain and loop searches.
///
/// ```
/// use sudoku_chaining::chaining::{ChainingRule, LinkOption};
/// use sudoku_chaining::strategy::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_rules(&[ChainingRule::DigitChain, ChainingRule::CellChain])
///     .with_link_option(LinkOption::House)
///     .with_max_chain_length(10);
/// assert_eq!(config.max_loop_length(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    rules: Vec<ChainingRule>,
    link_option: LinkOption,
    max_chain_length: usize,
    max_loop_length: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            rules: ChainingRule::ALL.to_vec(),
            link_option: LinkOption::default(),
            max_chain_length: 16,
            max_loop_length: 13,
        }
    }
}

impl SolverConfig {
    /// Chaining rules used to build the link graph
    pub fn with_rules(mut self, rules: &[ChainingRule]) -> Self {
        self.rules = rules.to_vec();
        self
    }

    /// Bound on grouped weak link ends
    pub fn with_link_option(mut self, link_option: LinkOption) -> Self {
        self.link_option = link_option;
        self
    }

    /// Maximum number of nodes in a chain
    pub fn with_max_chain_length(mut self, max_chain_length: usize) -> Self {
        self.max_chain_length = max_chain_length;
        self
    }

    /// Maximum number of cells in a loop
    pub fn with_max_loop_length(mut self, max_loop_length: usize) -> Self {
        self.max_loop_length = max_loop_length;
        self
    }

    #[allow(missing_docs)]
    pub fn rules(&self) -> &[ChainingRule] {
        &self.rules
    }

    #[allow(missing_docs)]
    pub fn link_option(&self) -> LinkOption {
        self.link_option
    }

    #[allow(missing_docs)]
    pub fn max_chain_length(&self) -> usize {
        self.max_chain_length
    }

    #[allow(missing_docs)]
    pub fn max_loop_length(&self) -> usize {
        self.max_loop_length
    }
}
