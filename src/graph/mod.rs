//! Bipartite people/movies graph
//!
//! Implements the record layer of the engine:
//! - People and movies as immutable-after-load entities
//! - Co-starring adjacency carried by matched membership sets
//! - In-memory storage with hash-based O(1) lookup

pub mod movie;
pub mod person;
pub mod store;
pub mod types;

// Re-export main types
pub use movie::Movie;
pub use person::Person;
pub use store::{GraphError, GraphResult, RecordStore};
pub use types::{MovieId, PersonId};
