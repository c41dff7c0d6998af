//! Document sources
//!
//! A source is read exactly once, when a session starts. The built-in static
//! source carries the sample documents the widget ships with; the JSON source
//! reads the same record shape from disk.

use crate::models::{DocumentNode, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading documents from a source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read documents from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse documents: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid document set: {0}")]
    Invalid(#[from] ValidationError),
}

/// Supplies the initial ordered sequence of documents
pub trait DocumentSource {
    fn load(&self) -> Result<Vec<DocumentNode>, SourceError>;
}

/// Built-in sample documents
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDocumentSource;

impl DocumentSource for StaticDocumentSource {
    fn load(&self) -> Result<Vec<DocumentNode>, SourceError> {
        Ok(vec![
            DocumentNode::directory("1", "Document 1"),
            DocumentNode::file("2", "Document 2").with_parent("1"),
            DocumentNode::file("3", "Document 3").with_parent("1"),
            DocumentNode::directory("4", "Document 4"),
            DocumentNode::directory(
                "5",
                "Document 5 rajshe khar das Document 5 rajshe khar dasDocument 5 rajshe khar das",
            )
            .with_parent("4"),
        ])
    }
}

/// Documents stored as a JSON array of node records
#[derive(Debug, Clone)]
pub struct JsonDocumentSource {
    path: PathBuf,
}

impl JsonDocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse a JSON array of node records
    pub fn parse(json: &str) -> Result<Vec<DocumentNode>, SourceError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl DocumentSource for JsonDocumentSource {
    fn load(&self) -> Result<Vec<DocumentNode>, SourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::parse(&contents)
    }
}
