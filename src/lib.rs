//! Decides whether a 3-edge-connected cubic graph's Frank number equals 2
//! (spec §1): the smallest number of strongly connected orientations whose
//! deletable edges together cover every edge of the graph.

pub mod bitset;
pub mod cli;
pub mod deletable;
pub mod driver;
pub mod error;
pub mod exact;
pub mod graph6;
pub mod heuristic;
pub mod model;
pub mod scc;
