//! Document decoding seam.
//!
//! Turning raw interface-builder files into a [`Document`] is the job of an
//! external decoder. [`DocumentDecoder`] is the boundary the linter talks to;
//! [`SnapshotDecoder`] reads view trees that a decoder has already produced
//! and serialized as JSON (`Main.storyboard.json`, `Cell.xib.json`).

use crate::document::{Document, DocumentKind, StoryboardDocument, XibDocument};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while decoding a document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// IO error reading the document.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Document path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Malformed snapshot.
    #[error("Invalid view tree in {path}: {source}")]
    Json {
        /// Document path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// File name matches neither `.xib` nor `.storyboard`.
    #[error("Unsupported document type: {0}")]
    UnknownKind(PathBuf),
}

/// Produces decoded documents from files.
pub trait DocumentDecoder: Send + Sync {
    /// File name suffixes this decoder understands.
    fn extensions(&self) -> &[&'static str];

    /// Decodes the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid document.
    fn decode(&self, path: &Path) -> Result<Document, DecodeError>;

    /// Whether `path` is handled by this decoder.
    fn accepts(&self, path: &Path) -> bool {
        let name = path.to_string_lossy();
        self.extensions().iter().any(|ext| name.ends_with(ext))
    }
}

/// Reads JSON view-tree snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotDecoder;

impl SnapshotDecoder {
    /// Creates the decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decodes a snapshot from a string.
    ///
    /// `path` is only used to pick the document kind and as the reported path.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind is unknown or the JSON is malformed.
    pub fn decode_str(&self, path: &Path, content: &str) -> Result<Document, DecodeError> {
        let kind = DocumentKind::from_path(path)
            .ok_or_else(|| DecodeError::UnknownKind(path.to_path_buf()))?;
        let json_err = |source| DecodeError::Json {
            path: path.to_path_buf(),
            source,
        };
        let path_string = path.to_string_lossy().into_owned();

        match kind {
            DocumentKind::Xib => {
                let mut doc: XibDocument = serde_json::from_str(content).map_err(json_err)?;
                doc.path = path_string;
                Ok(Document::Xib(doc))
            }
            DocumentKind::Storyboard => {
                let mut doc: StoryboardDocument =
                    serde_json::from_str(content).map_err(json_err)?;
                doc.path = path_string;
                Ok(Document::Storyboard(doc))
            }
        }
    }
}

impl DocumentDecoder for SnapshotDecoder {
    fn extensions(&self) -> &[&'static str] {
        &[".xib.json", ".storyboard.json"]
    }

    fn decode(&self, path: &Path) -> Result<Document, DecodeError> {
        let content = std::fs::read_to_string(path).map_err(|e| DecodeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.decode_str(path, &content)
    }
}
