//! Strong and weak links between groups of candidates, and the chains built out of them
//!
//! A set of [`ChainingRule`]s scans a [`Grid`](crate::Grid) for relations between
//! [`Node`]s. The [`LinkGraph`] merges what the rules find and the chain search walks it.
mod chain;
mod graph;
mod link;
mod node;
mod notation;
mod pattern;
pub(crate) mod rules;

pub(crate) use self::chain::{find_chains, ChainResult};
pub use self::{
    chain::Chain,
    graph::LinkGraph,
    link::{Link, LinkKind, Links},
    node::{Node, NodeKind},
    notation::{Brackets, CellStyle, ChainNotation, DigitPlacement},
    pattern::{Pattern, RectangleKind},
    rules::{ChainingRule, LinkOption},
};
