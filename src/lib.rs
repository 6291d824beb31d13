//! Degrees of Separation
//!
//! Shortest-path search over a bipartite people/movies graph: two people
//! are linked when they starred in the same movie, and the "degrees of
//! separation" between them is the number of co-starring links on a
//! shortest path.
//!
//! The crate is split the way the data flows:
//! - [`graph`]: people, movies, and the in-memory [`RecordStore`] holding
//!   the co-starring adjacency. Populated once, read-only afterwards.
//! - [`index`]: the case-insensitive [`NameIndex`] derived from the store.
//!   Ambiguous names return a candidate set; picking one is the caller's
//!   job (the CLI prompts, the library never blocks on input).
//! - [`search`]: canonical-ordered neighbor expansion and the BFS engine.
//! - [`loader`]: best-effort CSV ingestion of the three-file dataset layout.
//!
//! # Example
//!
//! ```rust
//! use degrees::graph::{Movie, Person, RecordStore};
//! use degrees::search::{shortest_path, PathResult};
//!
//! let mut store = RecordStore::new();
//! store.add_person(Person::new("p1", "Alice", None)).unwrap();
//! store.add_person(Person::new("p2", "Bob", None)).unwrap();
//! store.add_movie(Movie::new("m1", "First Feature", Some(1999))).unwrap();
//! store.add_star(&"p1".into(), &"m1".into()).unwrap();
//! store.add_star(&"p2".into(), &"m1".into()).unwrap();
//!
//! let result = shortest_path(&store, &"p1".into(), &"p2".into());
//! assert_eq!(result.degrees(), Some(1));
//! ```

#![warn(clippy::all)]

pub mod graph;
pub mod index;
pub mod loader;
pub mod search;

// Re-export main types for convenience
pub use graph::{GraphError, GraphResult, Movie, MovieId, Person, PersonId, RecordStore};
pub use index::NameIndex;
pub use loader::{load_directory, LoadError, LoadResult};
pub use search::{costars, shortest_path, Hop, PathResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
