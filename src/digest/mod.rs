//! Code map building: snapshot transfer, scoring, and budget-fitted
//! rendering.

pub mod budget;
pub mod render;

use std::collections::HashMap;

use crate::graph::ReferenceGraph;
use crate::types::{ProjectScanData, ScoredSymbol};
use crate::weighting::WeightingPolicy;

pub use budget::{fit_to_budget, ApproxTokenEstimator, TokenEstimator};
pub use render::build_map_content;

/// Builds the symbol digest for one snapshot under a token budget.
pub struct CodeMapBuilder<E> {
    max_map_tokens: usize,
    policy: WeightingPolicy,
    estimator: E,
}

impl Default for CodeMapBuilder<ApproxTokenEstimator> {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl CodeMapBuilder<ApproxTokenEstimator> {
    pub fn new(max_map_tokens: usize) -> Self {
        Self {
            max_map_tokens,
            policy: WeightingPolicy::default(),
            estimator: ApproxTokenEstimator,
        }
    }
}

impl<E> CodeMapBuilder<E>
where
    E: TokenEstimator,
{
    pub fn with_parts(max_map_tokens: usize, policy: WeightingPolicy, estimator: E) -> Self {
        Self {
            max_map_tokens,
            policy,
            estimator,
        }
    }

    /// Full pipeline: graph build → rank → score → sort → budget fit.
    ///
    /// Total over any well-formed snapshot; an empty snapshot or an
    /// unsatisfiable budget yields the empty string.
    pub fn build(&self, scan: &ProjectScanData) -> String {
        let scored = self.score_symbols(scan);
        fit_to_budget(&scored, self.max_map_tokens, &self.estimator)
    }

    /// Transfer the snapshot into a reference graph, resolving duplicate
    /// definitions along the way.
    ///
    /// Snapshot iteration order is the map's key order, so resolution is
    /// deterministic: the first occurrence of an identity key registers as
    /// its definition, and later occurrences fold into references unless
    /// their base weight is strictly higher.
    pub fn build_reference_graph(&self, scan: &ProjectScanData) -> ReferenceGraph {
        let mut graph = ReferenceGraph::new();
        let mut seen_definitions: HashMap<String, f64> = HashMap::new();

        for (relative_path, symbols) in &scan.file_symbols {
            let namespace_mul = self.policy.namespace_multiplier(relative_path);

            for symbol in symbols {
                let key = self.policy.definition_key(symbol);
                let weight = self.policy.base_weight(symbol, namespace_mul);

                if let Some(&existing) = seen_definitions.get(&key) {
                    if weight <= existing {
                        graph.add_reference(&symbol.name, relative_path);
                        continue;
                    }
                }

                seen_definitions.insert(key, weight);
                graph.add_definition(&symbol.name, relative_path);
            }
        }

        graph
    }

    /// Score every symbol in the snapshot and return them sorted by final
    /// score, descending. Ties keep snapshot iteration order (stable sort).
    ///
    /// `score = file_rank × sqrt(reference_count)`; the square root keeps
    /// ubiquitous short identifiers from dominating on frequency alone.
    pub fn score_symbols<'a>(&self, scan: &'a ProjectScanData) -> Vec<ScoredSymbol<'a>> {
        let graph = self.build_reference_graph(scan);
        let file_ranks = graph.compute_ranks();

        let mut scored: Vec<ScoredSymbol<'a>> = scan
            .file_symbols
            .values()
            .flatten()
            .map(|symbol| {
                let file_rank = file_ranks
                    .get(symbol.relative_path.as_str())
                    .copied()
                    .unwrap_or(0.0);
                let references = scan
                    .reference_count
                    .get(symbol.name.as_str())
                    .copied()
                    .unwrap_or(0);

                ScoredSymbol {
                    symbol,
                    rank: file_rank * (references as f64).sqrt(),
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.rank
                .partial_cmp(&a.rank)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
    }
}
