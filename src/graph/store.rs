//! In-memory record storage for people, movies, and co-starring links

use super::movie::Movie;
use super::person::Person;
use super::types::{MovieId, PersonId};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors that can occur while populating the record store
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("person {0} already exists")]
    DuplicatePerson(PersonId),

    #[error("movie {0} already exists")]
    DuplicateMovie(MovieId),

    #[error("co-starring link references unknown person {0}")]
    UnknownPerson(PersonId),

    #[error("co-starring link references unknown movie {0}")]
    UnknownMovie(MovieId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory record store
///
/// Uses hash maps for O(1) lookup:
/// - people: PersonId -> Person (with its movie membership set)
/// - movies: MovieId -> Movie (with its star membership set)
///
/// The bipartite adjacency is carried by the two membership sets. They are
/// updated only through [`RecordStore::add_star`], which inserts both sides
/// as a matched pair or neither, so no one-sided link can ever exist.
///
/// The store is populated once by a loader and read-only afterwards; the
/// search layer only ever takes `&RecordStore`.
#[derive(Debug, Default)]
pub struct RecordStore {
    people: FxHashMap<PersonId, Person>,
    movies: FxHashMap<MovieId, Movie>,
}

impl RecordStore {
    /// Create a new empty record store
    pub fn new() -> Self {
        RecordStore {
            people: FxHashMap::default(),
            movies: FxHashMap::default(),
        }
    }

    /// Insert a person record
    pub fn add_person(&mut self, person: Person) -> GraphResult<()> {
        if self.people.contains_key(&person.id) {
            return Err(GraphError::DuplicatePerson(person.id));
        }
        self.people.insert(person.id.clone(), person);
        Ok(())
    }

    /// Insert a movie record
    pub fn add_movie(&mut self, movie: Movie) -> GraphResult<()> {
        if self.movies.contains_key(&movie.id) {
            return Err(GraphError::DuplicateMovie(movie.id));
        }
        self.movies.insert(movie.id.clone(), movie);
        Ok(())
    }

    /// Record that a person starred in a movie
    ///
    /// Both membership sets are updated together, or neither: a link naming
    /// an unknown person or movie is rejected before any mutation, so the
    /// loader can skip bad rows without corrupting the adjacency.
    pub fn add_star(&mut self, person_id: &PersonId, movie_id: &MovieId) -> GraphResult<()> {
        if !self.people.contains_key(person_id) {
            return Err(GraphError::UnknownPerson(person_id.clone()));
        }
        if !self.movies.contains_key(movie_id) {
            return Err(GraphError::UnknownMovie(movie_id.clone()));
        }

        if let Some(person) = self.people.get_mut(person_id) {
            person.add_movie(movie_id.clone());
        }
        if let Some(movie) = self.movies.get_mut(movie_id) {
            movie.add_star(person_id.clone());
        }
        Ok(())
    }

    /// Look up a person by id
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    /// Look up a movie by id
    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    pub fn contains_movie(&self, id: &MovieId) -> bool {
        self.movies.contains_key(id)
    }

    /// Iterate over all people, in no particular order
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Iterate over all movies, in no particular order
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_pair() -> RecordStore {
        let mut store = RecordStore::new();
        store
            .add_person(Person::new("p1", "Alice", Some(1970)))
            .unwrap();
        store
            .add_person(Person::new("p2", "Bob", Some(1965)))
            .unwrap();
        store
            .add_movie(Movie::new("m1", "First Feature", Some(1999)))
            .unwrap();
        store
    }

    #[test]
    fn test_add_and_lookup() {
        let store = store_with_pair();
        assert_eq!(store.person_count(), 2);
        assert_eq!(store.movie_count(), 1);
        assert_eq!(store.person(&"p1".into()).unwrap().name, "Alice");
        assert_eq!(store.movie(&"m1".into()).unwrap().title, "First Feature");
        assert!(store.person(&"missing".into()).is_none());
    }

    #[test]
    fn test_duplicate_person_rejected() {
        let mut store = store_with_pair();
        let err = store
            .add_person(Person::new("p1", "Alice Again", None))
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicatePerson("p1".into()));
        // Original record untouched
        assert_eq!(store.person(&"p1".into()).unwrap().name, "Alice");
    }

    #[test]
    fn test_duplicate_movie_rejected() {
        let mut store = store_with_pair();
        let err = store
            .add_movie(Movie::new("m1", "Other Title", None))
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicateMovie("m1".into()));
    }

    #[test]
    fn test_add_star_updates_both_sides() {
        let mut store = store_with_pair();
        store.add_star(&"p1".into(), &"m1".into()).unwrap();

        assert!(store.person(&"p1".into()).unwrap().appeared_in(&"m1".into()));
        assert!(store.movie(&"m1".into()).unwrap().starred(&"p1".into()));
    }

    #[test]
    fn test_add_star_unknown_person() {
        let mut store = store_with_pair();
        let err = store.add_star(&"p9".into(), &"m1".into()).unwrap_err();
        assert_eq!(err, GraphError::UnknownPerson("p9".into()));
        // Movie side must not have been touched
        assert!(store.movie(&"m1".into()).unwrap().stars().is_empty());
    }

    #[test]
    fn test_add_star_unknown_movie() {
        let mut store = store_with_pair();
        let err = store.add_star(&"p1".into(), &"m9".into()).unwrap_err();
        assert_eq!(err, GraphError::UnknownMovie("m9".into()));
        assert!(store.person(&"p1".into()).unwrap().movies().is_empty());
    }

    #[test]
    fn test_add_star_idempotent() {
        let mut store = store_with_pair();
        store.add_star(&"p1".into(), &"m1".into()).unwrap();
        store.add_star(&"p1".into(), &"m1".into()).unwrap();
        assert_eq!(store.person(&"p1".into()).unwrap().movies().len(), 1);
        assert_eq!(store.movie(&"m1".into()).unwrap().stars().len(), 1);
    }
}
