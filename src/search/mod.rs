//! Search Service Module
//!
//! The relevance scoring and ranking engine, plus its HTTP entry point.
//!
//! ## Overview
//! A query is trimmed and case-folded, then matched as a plain substring
//! against the case-folded title and body of every document. Title hits
//! weigh 2, body hits weigh 1. Documents that miss both fields are dropped,
//! the rest are ranked by score with ties kept in corpus order, and the top
//! three are returned with a short snippet of their body.
//!
//! ## Submodules
//! - **`engine`**: Scoring, ranking, truncation and result assembly.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`text`**: Normalization and snippet helpers.
//! - **`types`**: Domain outcome types and Data Transfer Objects (DTOs).

pub mod engine;
pub mod handlers;
pub mod text;
pub mod types;

pub use engine::search;
pub use types::{SearchError, SearchOutcome, SearchResult};
