use super::types::{CorpusError, Document};

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

const BUILTIN_CORPUS: &str = include_str!("../../data/corpus.json");

/// Immutable, ordered snapshot of the documents a node can search.
///
/// Cloning is cheap (one `Arc` bump), so every request can hold its own
/// handle without any locking. Document order is preserved exactly as loaded
/// and is the tie-break order used by ranking.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Arc<[Document]>,
}

impl Corpus {
    /// Validates and wraps an in-memory list of documents.
    ///
    /// # Errors
    /// * `CorpusError::EmptyId` if a document has a blank id.
    /// * `CorpusError::DuplicateId` if two documents share an id.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, CorpusError> {
        validate(&documents)?;
        Ok(Self {
            documents: documents.into(),
        })
    }

    /// Parses a JSON array of `{id, title, body}` objects.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let documents: Vec<Document> = serde_json::from_str(json)?;
        Self::from_documents(documents)
    }

    /// Reads a corpus from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// The data set compiled into the binary.
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::from_json(BUILTIN_CORPUS)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn validate(documents: &[Document]) -> Result<(), CorpusError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(documents.len());

    for (position, document) in documents.iter().enumerate() {
        if document.id.trim().is_empty() {
            return Err(CorpusError::EmptyId { position });
        }
        if let Some(&first) = seen.get(document.id.as_str()) {
            return Err(CorpusError::DuplicateId {
                id: document.id.clone(),
                first,
                second: position,
            });
        }
        seen.insert(document.id.as_str(), position);
    }

    Ok(())
}
