//! Corpus Module Tests
//!
//! ## Test Scopes
//! - **Construction**: Order preservation and id validation.
//! - **Loading**: JSON parsing, file loading and the built-in data set.

#[cfg(test)]
mod tests {
    use crate::corpus::{Corpus, CorpusError, Document};
    use std::io::Write;

    fn doc(id: &str) -> Document {
        Document::new(id, format!("Title {}", id), format!("Body {}", id))
    }

    // ============================================================
    // CONSTRUCTION TESTS
    // ============================================================

    #[test]
    fn test_from_documents_preserves_order() {
        let corpus = Corpus::from_documents(vec![doc("c"), doc("a"), doc("b")]).unwrap();

        let order: Vec<&str> = corpus.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
        assert_eq!(corpus.len(), 3);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn test_from_documents_rejects_duplicate_ids() {
        let err = Corpus::from_documents(vec![doc("a"), doc("b"), doc("a")]).unwrap_err();

        match err {
            CorpusError::DuplicateId { id, first, second } => {
                assert_eq!(id, "a");
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_from_documents_rejects_blank_ids() {
        let err = Corpus::from_documents(vec![doc("a"), doc("  ")]).unwrap_err();

        assert!(matches!(err, CorpusError::EmptyId { position: 1 }));
    }

    #[test]
    fn test_empty_corpus_is_allowed() {
        let corpus = Corpus::from_documents(Vec::new()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_clones_share_documents() {
        let corpus = Corpus::from_documents(vec![doc("a")]).unwrap();
        let clone = corpus.clone();

        assert!(std::ptr::eq(corpus.documents(), clone.documents()));
    }

    // ============================================================
    // LOADING TESTS
    // ============================================================

    #[test]
    fn test_from_json() {
        let corpus = Corpus::from_json(
            r#"[{"id": "x", "title": "Hello", "body": "World"}]"#,
        )
        .unwrap();

        assert_eq!(corpus.documents()[0], Document::new("x", "Hello", "World"));
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let err = Corpus::from_json(r#"[{"id": "x", "title": "Hello"}]"#).unwrap_err();
        assert!(matches!(err, CorpusError::Parse(_)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"[{{"id": "1", "title": "One", "body": "first"}}, {{"id": "2", "title": "Two", "body": "second"}}]"#
        )
        .unwrap();

        let corpus = Corpus::from_path(file.path()).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.documents()[1].id, "2");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::from_path(dir.path().join("nope.json")).unwrap_err();

        assert!(matches!(err, CorpusError::Io { .. }));
    }

    #[test]
    fn test_builtin_corpus_loads() {
        let corpus = Corpus::builtin().expect("built-in corpus must be valid");

        assert!(!corpus.is_empty());
        assert!(corpus
            .documents()
            .iter()
            .all(|d| !d.title.is_empty() && !d.body.is_empty()));
    }
}
