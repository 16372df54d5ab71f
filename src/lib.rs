//! Mini Search Library
//!
//! A minimal full-text lookup node: a fixed in-memory corpus, a substring
//! relevance scorer and a JSON-over-HTTP front door. The binary (`main.rs`)
//! only parses configuration, loads the corpus and serves the router.
//!
//! ## Modules
//! - **`api`**: Axum router assembly, shared state and HTTP error mapping.
//! - **`config`**: Command-line and environment configuration.
//! - **`corpus`**: The immutable document collection and its loaders.
//! - **`search`**: Normalization, scoring, ranking and snippet generation.

pub mod api;
pub mod config;
pub mod corpus;
pub mod search;
