pub mod pagerank;
pub mod reference_graph;

pub use pagerank::{pagerank, PagerankConfig};
pub use reference_graph::ReferenceGraph;
