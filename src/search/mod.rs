//! Shortest-path search module
//!
//! Breadth-first search over the co-starring relation, with canonical
//! neighbor ordering for deterministic results.

pub mod bfs;
pub mod neighbors;

pub use bfs::{shortest_path, PathResult};
pub use neighbors::{costars, Hop};
