use std::fmt;
use std::fs;
use std::path::Path;

use vocab_core::model::{Catalog, EntryDraft, EntryValidationError};

/// Errors emitted while loading a catalog file.
#[derive(Debug)]
pub enum CatalogLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Entry {
        index: usize,
        source: EntryValidationError,
    },
}

impl fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogLoadError::Io(err) => write!(f, "cannot read catalog file: {err}"),
            CatalogLoadError::Json(err) => write!(f, "catalog file is not valid JSON: {err}"),
            CatalogLoadError::Entry { index, source } => {
                write!(f, "catalog entry {index} is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogLoadError::Io(err) => Some(err),
            CatalogLoadError::Json(err) => Some(err),
            CatalogLoadError::Entry { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for CatalogLoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogLoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Load a catalog from a JSON array of entry drafts:
/// `[{ "source_text": …, "target_text": …, "audio_ref"?: … }, …]`.
///
/// Every draft is validated; the first invalid one fails the load with its
/// position in the array. An empty array is accepted.
pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let raw = fs::read_to_string(path)?;
    let drafts: Vec<EntryDraft> = serde_json::from_str(&raw)?;

    let mut entries = Vec::with_capacity(drafts.len());
    for (index, draft) in drafts.into_iter().enumerate() {
        let entry = draft
            .validate()
            .map_err(|source| CatalogLoadError::Entry { index, source })?;
        entries.push(entry);
    }
    Ok(Catalog::new(entries))
}
