//! Breadth-first shortest-path search over the co-starring graph

use super::neighbors::{costars, Hop};
use crate::graph::{MovieId, PersonId, RecordStore};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use tracing::debug;

/// Outcome of a shortest-path search
///
/// `Found(hops)` and `NotConnected` are both expected results, not faults.
/// An empty hop sequence means source and target are the same person;
/// callers that need to tell "zero degrees" from "no path" match on the
/// variant, never on sequence emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// A minimum-length sequence of (movie, person) hops from source to
    /// target, excluding the source itself
    Found(Vec<Hop>),
    /// Source and target lie in different connected components
    NotConnected,
}

impl PathResult {
    /// Degrees of separation (hop count), or `None` when not connected
    pub fn degrees(&self) -> Option<usize> {
        match self {
            PathResult::Found(hops) => Some(hops.len()),
            PathResult::NotConnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }
}

/// Find a shortest co-starring path between two people
///
/// Unit-weight BFS: the frontier is a FIFO queue, a person is marked
/// discovered when first reached (not when expanded), and each discovered
/// person records the (movie, predecessor) edge it was reached through.
/// FIFO order means people are expanded in non-decreasing distance from the
/// source, so the first time the target is dequeued its recorded predecessor
/// chain is a minimum-length path; walking it back to the source and
/// reversing yields the result.
///
/// Neighbor expansion is canonically ordered (see
/// [`costars`](super::neighbors::costars)), so among equal-length paths the
/// same one is returned on every call.
///
/// Precondition: both ids exist in the store; unknown ids are a caller
/// contract violation (debug-asserted), not a recoverable error.
pub fn shortest_path(store: &RecordStore, source: &PersonId, target: &PersonId) -> PathResult {
    debug_assert!(
        store.contains_person(source),
        "shortest_path() called with unknown source id {source}"
    );
    debug_assert!(
        store.contains_person(target),
        "shortest_path() called with unknown target id {target}"
    );
    debug!(%source, %target, "starting shortest-path search");

    let mut frontier: VecDeque<PersonId> = VecDeque::new();
    let mut discovered: FxHashSet<PersonId> = FxHashSet::default();
    // person -> (movie, predecessor) edge it was first reached through
    let mut came_from: FxHashMap<PersonId, (MovieId, PersonId)> = FxHashMap::default();

    frontier.push_back(source.clone());
    discovered.insert(source.clone());

    let mut expanded = 0usize;
    while let Some(person_id) = frontier.pop_front() {
        if person_id == *target {
            let hops = backtrack(&came_from, source, target);
            debug!(degrees = hops.len(), expanded, "path found");
            return PathResult::Found(hops);
        }

        expanded += 1;
        for hop in costars(store, &person_id) {
            if discovered.insert(hop.person.clone()) {
                came_from.insert(hop.person.clone(), (hop.movie, person_id.clone()));
                frontier.push_back(hop.person);
            }
        }
    }

    debug!(expanded, "frontier exhausted, not connected");
    PathResult::NotConnected
}

/// Walk the predecessor map from target back to source, then reverse
fn backtrack(
    came_from: &FxHashMap<PersonId, (MovieId, PersonId)>,
    source: &PersonId,
    target: &PersonId,
) -> Vec<Hop> {
    let mut hops = Vec::new();
    let mut current = target.clone();
    while &current != source {
        let Some((movie, predecessor)) = came_from.get(&current) else {
            // Unreachable for any target dequeued from the frontier: every
            // discovered person other than the source has an entry.
            break;
        };
        hops.push(Hop {
            movie: movie.clone(),
            person: current,
        });
        current = predecessor.clone();
    }
    hops.reverse();
    hops
}
