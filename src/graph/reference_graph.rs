//! Directed file graph built from definition/usage relationships.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use petgraph::graph::{DiGraph, NodeIndex};

use super::pagerank::{pagerank, PagerankConfig};

/// Accumulates which files define and which files reference each identifier,
/// then ranks files by PageRank over the induced reference graph.
///
/// A file whose symbols are referenced from many other files is more central
/// to the project than raw reference counts alone would suggest; the graph
/// captures that independent of frequency.
///
/// All internal maps are ordered so rank computation is deterministic for a
/// given set of insertions, regardless of insertion order.
#[derive(Debug, Default)]
pub struct ReferenceGraph {
    defines: BTreeMap<String, BTreeSet<String>>,
    references: BTreeMap<String, BTreeMap<String, usize>>,
    files: BTreeSet<String>,
}

impl ReferenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `defining_file` holds the definition of `identifier`.
    /// The file is registered as a graph node even if the identifier is
    /// never referenced.
    pub fn add_definition(&mut self, identifier: &str, defining_file: &str) {
        self.defines
            .entry(identifier.to_string())
            .or_default()
            .insert(defining_file.to_string());
        self.files.insert(defining_file.to_string());
    }

    /// Record one use of `identifier` from `referencing_file`.
    pub fn add_reference(&mut self, identifier: &str, referencing_file: &str) {
        *self
            .references
            .entry(identifier.to_string())
            .or_default()
            .entry(referencing_file.to_string())
            .or_insert(0) += 1;
        self.files.insert(referencing_file.to_string());
    }

    /// Files recorded as defining `identifier`, if any.
    pub fn definers(&self, identifier: &str) -> Option<&BTreeSet<String>> {
        self.defines.get(identifier)
    }

    /// Per-file reference counts recorded for `identifier`, if any.
    pub fn referencers(&self, identifier: &str) -> Option<&BTreeMap<String, usize>> {
        self.references.get(identifier)
    }

    /// Build the reference graph and compute an importance score per file.
    ///
    /// For every identifier present in both maps, one directed edge is added
    /// from each referencing file to each defining file; repeated identifier
    /// pairs between the same two files collapse into a single edge. Scores
    /// are standard PageRank: in [0, 1], summing to 1 over all registered
    /// files. An empty graph produces an empty map — callers treat missing
    /// lookups as 0.0.
    pub fn compute_ranks(&self) -> BTreeMap<String, f64> {
        let mut graph: DiGraph<(), ()> = DiGraph::new();
        let mut node_of: BTreeMap<&str, NodeIndex> = BTreeMap::new();

        for file in &self.files {
            let idx = graph.add_node(());
            node_of.insert(file.as_str(), idx);
        }

        for (identifier, definers) in &self.defines {
            let Some(referencers) = self.references.get(identifier) else {
                continue;
            };

            for referencer in referencers.keys() {
                for definer in definers {
                    let from = node_of[referencer.as_str()];
                    let to = node_of[definer.as_str()];
                    // Collapses duplicate edges between the same file pair.
                    graph.update_edge(from, to, ());
                }
            }
        }

        tracing::debug!(
            files = graph.node_count(),
            edges = graph.edge_count(),
            "computing file ranks"
        );

        let ranks = pagerank(&graph, PagerankConfig::default());

        node_of
            .into_iter()
            .map(|(file, idx)| (file.to_string(), ranks[idx.index()]))
            .collect()
    }
}
