#![warn(missing_docs)]
#![cfg_attr(feature = "cargo-clippy", allow(inline_always, match_bool, wrong_self_convention))]
//! Chain and loop deductions for sudoku candidate grids
//!
//! ## Overview
//!
//! This library looks for the logical steps a human solver would take once the simple
//! techniques are exhausted. A set of chaining rules turns a [`Grid`] of candidates into a
//! graph of strong and weak links, on which alternating inference chains are searched.
//! A separate depth first search finds odd loops of cells for the Guardian and
//! Bivalue Oddagon techniques.
//!
//! The grid is only read. Every search returns [`Step`](strategy::Step)s describing what can be
//! eliminated or assigned and why; applying them is left to the caller.
//!
//! ## Example
//!
//! ```
//! use sudoku_chaining::Grid;
//! use sudoku_chaining::chaining::ChainNotation;
//! use sudoku_chaining::strategy::{Justification, Strategy, StrategySolver};
//!
//! let grid = Grid::from_str_line(
//!     "9..24.....5.69.231.2..5..9..9.7..32...29356.7.7...29...69.2..7351..79.622.7.86..9",
//! ).unwrap();
//!
//! let mut solver = StrategySolver::from_grid(grid);
//! match solver.find_first(Strategy::ALL) {
//!     Ok(Some(step)) => {
//!         println!("{}", step.technique().name());
//!         if let Justification::Chain(chain) = step.justification() {
//!             println!("{}", ChainNotation::eureka().format_chain(chain));
//!         }
//!     }
//!     Ok(None) => println!("nothing found"),
//!     Err(unsolvable) => println!("{}", unsolvable),
//! }
//! ```
#[macro_use]
extern crate crunchy;

mod helper;
pub mod bitset;
pub mod board;
pub mod chaining;
mod consts;
mod errors;
mod grid;
pub mod loops;
pub mod strategy;

pub use crate::bitset::Set;
pub use crate::board::{Candidate, CandidateSet, Cell, CellState, Digit, House};
pub use crate::errors::{ParseError, Unsolvable};
pub use crate::grid::Grid;
