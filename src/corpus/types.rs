//! Corpus Data Types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A single searchable record.
///
/// Documents are never mutated after the corpus is built. The `id` is opaque
/// to the search engine and only has to be unique within one corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Failures raised while building a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus is not a valid JSON array of documents: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("duplicate document id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}
