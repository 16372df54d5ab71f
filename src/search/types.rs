//! Search Data Types
//!
//! Domain types produced by the scorer, plus the request/response DTOs
//! exchanged with HTTP clients.

use crate::corpus::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Informational marker carried by a successful search with no hits.
pub const NO_MATCHES_MESSAGE: &str = "No matches found.";

/// Delimiter placed between titles in the summary line.
pub const SUMMARY_SEPARATOR: &str = " • ";

/// The only way a search can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query was empty or contained only whitespace.
    #[error("Please provide a non-empty search term.")]
    EmptyQuery,
}

/// A document paired with its relevance for one query.
///
/// Lives only for the duration of a single `search` call. `position` is the
/// document's index in the corpus and breaks ties between equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    pub score: u32,
    pub position: usize,
}

/// One ranked hit as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub snippet: String,
}

/// Successful outcome of a search.
///
/// `sources` and `summary` are derived from the same ranked hits as
/// `results`, so all three always describe the same documents in the same
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NoMatches,
    Matches {
        results: Vec<SearchResult>,
        sources: Vec<String>,
        summary: String,
    },
}

impl SearchOutcome {
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::NoMatches => &[],
            SearchOutcome::Matches { results, .. } => results,
        }
    }

    pub fn sources(&self) -> &[String] {
        match self {
            SearchOutcome::NoMatches => &[],
            SearchOutcome::Matches { sources, .. } => sources,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            SearchOutcome::NoMatches => None,
            SearchOutcome::Matches { summary, .. } => Some(summary),
        }
    }

    /// The informational marker, present only when nothing matched.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::NoMatches => Some(NO_MATCHES_MESSAGE),
            SearchOutcome::Matches { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::NoMatches)
    }
}

// --- Data Transfer Objects ---

/// Body of `POST /api/search`.
///
/// A missing `query` field deserializes to `None` and is treated as an empty
/// query. A `query` of any type other than string is rejected during parsing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Body of a successful `POST /api/search` response.
///
/// With hits: `{results, sources, summary}`. Without hits:
/// `{results: [], message}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::NoMatches => SearchResponse {
                results: Vec::new(),
                sources: None,
                summary: None,
                message: Some(NO_MATCHES_MESSAGE.to_string()),
            },
            SearchOutcome::Matches {
                results,
                sources,
                summary,
            } => SearchResponse {
                results,
                sources: Some(sources),
                summary: Some(summary),
                message: None,
            },
        }
    }
}
