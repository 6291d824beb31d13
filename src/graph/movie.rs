//! Movie entity for the filmography graph

use super::types::{MovieId, PersonId};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A movie in the filmography graph
///
/// Like [`Person`](super::person::Person), a movie is immutable after load;
/// its star set only grows through `RecordStore::add_star`, which updates
/// both sides of the co-starring relation together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier for this movie
    pub id: MovieId,

    /// Title (not unique)
    pub title: String,

    /// Release year, when the dataset records one
    pub year: Option<u16>,

    /// People who starred in this movie
    stars: FxHashSet<PersonId>,
}

impl Movie {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, year: Option<u16>) -> Self {
        Movie {
            id: id.into(),
            title: title.into(),
            year,
            stars: FxHashSet::default(),
        }
    }

    /// People who starred in this movie
    pub fn stars(&self) -> &FxHashSet<PersonId> {
        &self.stars
    }

    pub fn starred(&self, person: &PersonId) -> bool {
        self.stars.contains(person)
    }

    pub(crate) fn add_star(&mut self, person: PersonId) {
        self.stars.insert(person);
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}
