//! Person entity for the filmography graph

use super::types::{MovieId, PersonId};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A person in the filmography graph
///
/// Created once during load and never mutated afterwards. The `movies`
/// membership set is maintained exclusively by
/// [`RecordStore::add_star`](super::store::RecordStore::add_star) so that
/// person-side and movie-side membership always change as a matched pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for this person
    pub id: PersonId,

    /// Display name (not unique; see the name index for lookup)
    pub name: String,

    /// Birth year, when the dataset records one
    pub birth: Option<u16>,

    /// Movies this person appeared in
    movies: FxHashSet<MovieId>,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, birth: Option<u16>) -> Self {
        Person {
            id: id.into(),
            name: name.into(),
            birth,
            movies: FxHashSet::default(),
        }
    }

    /// Movies this person appeared in
    pub fn movies(&self) -> &FxHashSet<MovieId> {
        &self.movies
    }

    pub fn appeared_in(&self, movie: &MovieId) -> bool {
        self.movies.contains(movie)
    }

    pub(crate) fn add_movie(&mut self, movie: MovieId) {
        self.movies.insert(movie);
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_person() {
        let person = Person::new("102", "Kevin Bacon", Some(1958));
        assert_eq!(person.id, PersonId::new("102"));
        assert_eq!(person.name, "Kevin Bacon");
        assert_eq!(person.birth, Some(1958));
        assert!(person.movies().is_empty());
    }

    #[test]
    fn test_person_without_birth_year() {
        let person = Person::new("710", "Unknown Actor", None);
        assert_eq!(person.birth, None);
    }

    #[test]
    fn test_person_equality_by_id() {
        let a = Person::new("102", "Kevin Bacon", Some(1958));
        let b = Person::new("102", "Kevin Bacon (I)", None);
        let c = Person::new("129", "Tom Cruise", Some(1962));

        assert_eq!(a, b); // Same id
        assert_ne!(a, c);
    }
}
