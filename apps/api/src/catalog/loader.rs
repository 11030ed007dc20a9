//! Catalog file resolution and loading.
//!
//! The catalog is re-read on every request; there is no cache and no
//! write path. A row that cannot be decoded at all is skipped with a
//! warning, so one malformed line never fails a whole request.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::models::BookRecord;

/// Locations probed after the configured path, in order.
const FALLBACK_PATHS: [&str; 3] = [
    "dataset/books_full_data.csv",
    "books_full_data.csv",
    "../dataset/books_full_data.csv",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no catalog file found (searched {0:?})")]
    Unavailable(Vec<PathBuf>),
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("catalog load task failed: {0}")]
    Task(String),
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    search_paths: Vec<PathBuf>,
}

impl CatalogStore {
    /// Probes the given path first, then the known fallback locations.
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        let mut search_paths = vec![primary.into()];
        for fallback in FALLBACK_PATHS {
            let path = PathBuf::from(fallback);
            if !search_paths.contains(&path) {
                search_paths.push(path);
            }
        }
        CatalogStore { search_paths }
    }

    /// First existing candidate path, or `Unavailable` naming everything
    /// that was searched.
    pub fn resolve_path(&self) -> Result<PathBuf, CatalogError> {
        self.search_paths
            .iter()
            .find(|path| path.is_file())
            .cloned()
            .ok_or_else(|| CatalogError::Unavailable(self.search_paths.clone()))
    }

    /// Reads the full catalog. The parse runs on the blocking pool; tens
    /// of thousands of rows must not stall the reactor.
    pub async fn load(&self) -> Result<Vec<BookRecord>, CatalogError> {
        let path = self.resolve_path()?;
        tokio::task::spawn_blocking(move || read_books(&path))
            .await
            .map_err(|err| CatalogError::Task(err.to_string()))?
    }
}

pub fn read_books(path: &Path) -> Result<Vec<BookRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut books = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize::<BookRecord>() {
        match row {
            Ok(book) => books.push(book),
            Err(err) => {
                skipped += 1;
                debug!(%err, "skipping undecodable catalog row");
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, path = %path.display(), "dropped undecodable catalog rows");
    }
    debug!(rows = books.len(), path = %path.display(), "catalog loaded");
    Ok(books)
}
