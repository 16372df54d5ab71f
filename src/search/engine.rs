use super::text::{make_snippet, normalize};
use super::types::{SUMMARY_SEPARATOR, ScoredDocument, SearchError, SearchOutcome, SearchResult};
use crate::corpus::Document;

/// Weight added when the query occurs in the title.
pub const TITLE_WEIGHT: u32 = 2;
/// Weight added when the query occurs in the body.
pub const BODY_WEIGHT: u32 = 1;
/// Number of hits kept after ranking.
pub const TOP_K: usize = 3;

/// Runs a query against the documents and returns the ranked, truncated,
/// snippet-annotated outcome.
///
/// Pure: the documents are only read, and nothing outlives the call except
/// the returned outcome.
///
/// # Errors
/// * `SearchError::EmptyQuery` if the query is empty after trimming. No
///   document is scored in that case.
pub fn search(query: &str, documents: &[Document]) -> Result<SearchOutcome, SearchError> {
    let query = normalize(query);
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let mut ranked = rank(&query, documents);
    ranked.truncate(TOP_K);

    if ranked.is_empty() {
        return Ok(SearchOutcome::NoMatches);
    }

    let results: Vec<SearchResult> = ranked
        .iter()
        .map(|hit| SearchResult {
            id: hit.document.id.clone(),
            title: hit.document.title.clone(),
            snippet: make_snippet(&hit.document.body),
        })
        .collect();
    let sources = results.iter().map(|result| result.id.clone()).collect();
    let summary = results
        .iter()
        .map(|result| result.title.as_str())
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR);

    Ok(SearchOutcome::Matches {
        results,
        sources,
        summary,
    })
}

/// Scores every document, drops the ones that did not match and orders the
/// rest by score descending, then by corpus position. Not truncated.
///
/// `query` must already be normalized.
pub fn rank<'a>(query: &str, documents: &'a [Document]) -> Vec<ScoredDocument<'a>> {
    let mut scored: Vec<ScoredDocument<'a>> = documents
        .iter()
        .enumerate()
        .map(|(position, document)| ScoredDocument {
            document,
            score: score_document(query, document),
            position,
        })
        .filter(|hit| hit.score > 0)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.position.cmp(&b.position)));
    scored
}

/// Relevance of one document: `TITLE_WEIGHT` for a title hit plus
/// `BODY_WEIGHT` for a body hit, so always in `0..=3`.
///
/// `query` must already be normalized; the fields are normalized here on
/// throwaway copies.
pub fn score_document(query: &str, document: &Document) -> u32 {
    let mut score = 0;
    if normalize(&document.title).contains(query) {
        score += TITLE_WEIGHT;
    }
    if normalize(&document.body).contains(query) {
        score += BODY_WEIGHT;
    }
    score
}
