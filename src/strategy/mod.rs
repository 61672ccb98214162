//! This module contains the [`StrategySolver`] that searches a candidate grid for chains and
//! loops, the [`Strategy`] enum to choose what to search for and the [`Step`]s it finds.
//!
//! The solver never changes the grid. Applying the conclusions of a step and searching again
//! is up to the caller.

mod collector;
mod config;
pub mod deduction;
mod solver;
mod strategies;

pub use self::collector::StepCollector;
pub use self::config::SolverConfig;
pub use self::deduction::{Conclusion, ConclusionKind, Justification, Step, Technique, View};
pub use self::solver::StrategySolver;
pub use self::strategies::Strategy;
