//! Corpus Module
//!
//! Owns the fixed collection of searchable documents.
//!
//! ## Overview
//! The corpus is loaded exactly once when the node starts, either from the
//! built-in data set compiled into the binary or from a JSON file supplied on
//! the command line. After construction it is immutable: handlers share it as
//! a cheap `Arc` snapshot and the scorer only ever reads from it.
//!
//! ## Submodules
//! - **`store`**: The `Corpus` snapshot and its constructors.
//! - **`types`**: The `Document` record and loading errors.

pub mod store;
pub mod types;

pub use store::Corpus;
pub use types::{CorpusError, Document};

#[cfg(test)]
mod tests;
