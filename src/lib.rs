//! Relevance-ranking and token-budgeted code map engine.
//!
//! `codemap-core` takes an in-memory snapshot of extracted code symbols,
//! ranks the files they live in with a PageRank-style reference graph,
//! weighs each symbol with composable heuristics, and renders the densest
//! textual digest that fits a caller-specified token budget. A parallel,
//! non-graph ranker orders project assets against a free-text query for a
//! downstream context serializer.
//!
//! All operations are deterministic — identical input snapshots always
//! produce identical output, byte-for-byte. The engine never touches
//! storage or I/O; scanning, asset indexing, and persistence belong to
//! external collaborators.

pub mod assets;
pub mod digest;
pub mod graph;
pub mod service;
pub mod types;
pub mod weighting;
