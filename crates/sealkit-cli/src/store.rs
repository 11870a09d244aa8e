//! Blob storage behind the CLI.
//!
//! Commands read and write opaque byte blobs at plan-resolved paths.
//! The trait keeps commands testable without touching a real
//! filesystem; [`FileStore`] is the only production implementation.

use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

/// Storage access errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested blob does not exist.
    ///
    /// Distinct from an empty blob, which reads as zero bytes.
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// Any other I/O failure.
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Byte and text blob access at named locations.
pub trait BlobStore {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StoreError>;
    fn write_bytes(&self, path: &Path, data: &[u8]) -> Result<(), StoreError>;

    fn read_text(&self, path: &Path) -> Result<String, StoreError>;
    fn write_text(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        self.write_bytes(path, text.as_bytes())
    }
}

/// Filesystem-backed blob store.
///
/// Writes create missing parent directories.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    fn classify(path: &Path, source: std::io::Error) -> StoreError {
        let path = path.display().to_string();
        if source.kind() == ErrorKind::NotFound {
            StoreError::NotFound { path }
        } else {
            StoreError::Io { path, source }
        }
    }

    fn ensure_parent(path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| Self::classify(parent, e))?;
            }
        }
        Ok(())
    }
}

impl BlobStore for FileStore {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        std::fs::read(path).map_err(|e| Self::classify(path, e))
    }

    fn write_bytes(&self, path: &Path, data: &[u8]) -> Result<(), StoreError> {
        Self::ensure_parent(path)?;
        std::fs::write(path, data).map_err(|e| Self::classify(path, e))
    }

    fn read_text(&self, path: &Path) -> Result<String, StoreError> {
        std::fs::read_to_string(path).map_err(|e| Self::classify(path, e))
    }
}
