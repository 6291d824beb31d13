//! Case-insensitive name lookup

use crate::graph::{PersonId, RecordStore};
use rustc_hash::FxHashMap;

/// Index from normalized display name to matching person ids
///
/// A pure derived view over a [`RecordStore`]: it is built once after load
/// and only ever used for lookup, never as a source of identity. Several
/// people may share a name, so an entry holds a candidate list; picking one
/// candidate is the caller's problem (an interactive front end prompts, a
/// batch caller may bail out).
#[derive(Debug, Default)]
pub struct NameIndex {
    entries: FxHashMap<String, Vec<PersonId>>,
}

impl NameIndex {
    /// Build the index from every person in the store
    pub fn build(store: &RecordStore) -> Self {
        let mut entries: FxHashMap<String, Vec<PersonId>> = FxHashMap::default();
        for person in store.people() {
            entries
                .entry(normalize(&person.name))
                .or_default()
                .push(person.id.clone());
        }
        // Canonical candidate order, so ambiguity is presented (and tested)
        // deterministically
        for candidates in entries.values_mut() {
            candidates.sort();
        }
        NameIndex { entries }
    }

    /// Resolve a name to its candidate person ids
    ///
    /// Case-insensitive exact match only. An empty slice means the name is
    /// unknown; more than one entry means the name is ambiguous.
    pub fn resolve(&self, name: &str) -> &[PersonId] {
        self.entries
            .get(&normalize(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct normalized names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}
