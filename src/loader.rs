//! Best-effort CSV ingestion for filmography datasets
//!
//! Reads the three-file layout used by the IMDb-derived datasets:
//! `people.csv` (id,name,birth), `movies.csv` (id,title,year) and
//! `stars.csv` (person_id,movie_id). Loading is best-effort: a missing or
//! unreadable file fails the load, but a single bad row never does. Rows
//! that fail to parse, duplicate an id, or reference an unknown id are
//! skipped and counted.

use crate::graph::{Movie, Person, RecordStore};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a dataset load
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Load a dataset directory into a fresh record store
///
/// People and movies are loaded before co-starring links, so every link
/// either finds both endpoints or is dropped. The returned store is
/// complete and consistent; callers treat it as read-only from here on.
pub fn load_directory(dir: impl AsRef<Path>) -> LoadResult<RecordStore> {
    let dir = dir.as_ref();
    let mut store = RecordStore::new();
    let mut skipped = 0usize;

    for row in read_rows::<PersonRow>(&dir.join("people.csv"))? {
        let Some(row) = row else {
            skipped += 1;
            continue;
        };
        let person = Person::new(row.id, row.name, parse_year(&row.birth));
        if let Err(e) = store.add_person(person) {
            warn!(error = %e, "skipping person row");
            skipped += 1;
        }
    }

    for row in read_rows::<MovieRow>(&dir.join("movies.csv"))? {
        let Some(row) = row else {
            skipped += 1;
            continue;
        };
        let movie = Movie::new(row.id, row.title, parse_year(&row.year));
        if let Err(e) = store.add_movie(movie) {
            warn!(error = %e, "skipping movie row");
            skipped += 1;
        }
    }

    let mut links = 0usize;
    for row in read_rows::<StarRow>(&dir.join("stars.csv"))? {
        let Some(row) = row else {
            skipped += 1;
            continue;
        };
        match store.add_star(&row.person_id.into(), &row.movie_id.into()) {
            Ok(()) => links += 1,
            Err(e) => {
                warn!(error = %e, "skipping star row");
                skipped += 1;
            }
        }
    }

    info!(
        people = store.person_count(),
        movies = store.movie_count(),
        links,
        skipped,
        "dataset loaded"
    );
    Ok(store)
}

/// Read one CSV file, yielding `None` for rows that fail to deserialize
fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> LoadResult<Vec<Option<T>>> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<T>() {
        match record {
            Ok(row) => rows.push(Some(row)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping malformed row");
                rows.push(None);
            }
        }
    }
    Ok(rows)
}

/// Lenient year parse: blank or non-numeric fields become `None`
fn parse_year(field: &str) -> Option<u16> {
    field.trim().parse().ok()
}
