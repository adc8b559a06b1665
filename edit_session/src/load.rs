//! Initial document loading
//!
//! The engine loads a document from a path once at session start and never
//! writes back. A missing or unreadable file is a normal outcome: it yields
//! an empty document, with the cause carried alongside so hosts can surface
//! it instead of silently showing an empty screen.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Why the initial document could not be read
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Failed to read document: {0}")]
    Io(#[from] io::Error),
}

/// Result of loading the initial document.
///
/// Always usable: on failure `bytes` is empty and `error` records the cause.
#[derive(Debug)]
pub struct LoadedDocument {
    /// Initial document content (empty when loading failed)
    pub bytes: Vec<u8>,
    /// The failure that produced an empty document, if any
    pub error: Option<LoadError>,
}

impl LoadedDocument {
    /// Returns true if the document was actually read from the path
    pub fn loaded(&self) -> bool {
        self.error.is_none()
    }
}

/// Reads the whole file at `path` as the initial document.
///
/// Never fails: missing or unreadable files degrade to an empty document
/// with the error recorded in the returned value.
pub fn load_document(path: impl AsRef<Path>) -> LoadedDocument {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => LoadedDocument { bytes, error: None },
        Err(err) if err.kind() == io::ErrorKind::NotFound => LoadedDocument {
            bytes: Vec::new(),
            error: Some(LoadError::NotFound(path.display().to_string())),
        },
        Err(err) => LoadedDocument {
            bytes: Vec::new(),
            error: Some(LoadError::Io(err)),
        },
    }
}
