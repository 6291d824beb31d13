//! Name indexing module
//!
//! Provides the case-insensitive name-to-person lookup derived from the
//! record store.

pub mod name_index;

pub use name_index::NameIndex;
