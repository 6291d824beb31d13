//! Co-star neighbor expansion

use crate::graph::{MovieId, PersonId, RecordStore};

/// One hop in a co-starring path: the movie shared with the previous person,
/// and the person reached through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hop {
    pub movie: MovieId,
    pub person: PersonId,
}

impl Hop {
    pub fn new(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        Hop {
            movie: movie.into(),
            person: person.into(),
        }
    }
}

/// Every (movie, co-star) pair one hop away from a person
///
/// Union over each movie the person appeared in of every star other than
/// the person themself. The result is sorted by (movie id, person id): the
/// underlying sets have no defined order, and canonical ordering makes
/// search results deterministic when several shortest paths exist.
///
/// Precondition: `person_id` exists in the store. Unknown ids are a caller
/// bug; in release builds they expand to no neighbors.
pub fn costars(store: &RecordStore, person_id: &PersonId) -> Vec<Hop> {
    debug_assert!(
        store.contains_person(person_id),
        "costars() called with unknown person id {person_id}"
    );

    let mut hops = Vec::new();
    let Some(person) = store.person(person_id) else {
        return hops;
    };

    for movie_id in person.movies() {
        let Some(movie) = store.movie(movie_id) else {
            continue;
        };
        for star_id in movie.stars() {
            if star_id != person_id {
                hops.push(Hop {
                    movie: movie_id.clone(),
                    person: star_id.clone(),
                });
            }
        }
    }

    hops.sort();
    hops
}
