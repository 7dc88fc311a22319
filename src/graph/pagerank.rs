//! PageRank power iteration over a directed file-reference graph.
//!
//! Standard formulation, no personalization: a node's score is the
//! probability of a random surfer landing on it, with dangling mass
//! redistributed uniformly so scores always sum to 1 over all nodes.

use petgraph::graph::DiGraph;
use petgraph::Direction;

/// Iteration parameters. The defaults are the conventional ones and every
/// caller in this crate uses them; they are a struct so tests can tighten
/// or loosen convergence.
#[derive(Debug, Clone, Copy)]
pub struct PagerankConfig {
    pub damping: f64,
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for PagerankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 1e-8,
            max_iterations: 100,
        }
    }
}

/// Compute PageRank scores for every node of `graph`.
///
/// Returns one score per node, indexed by `NodeIndex::index()`. Scores sum
/// to 1.0; an isolated node still receives the `(1-d)/N` teleport baseline
/// plus its share of dangling mass. An empty graph yields an empty vector.
pub fn pagerank<N, E>(graph: &DiGraph<N, E>, config: PagerankConfig) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let damping = config.damping;
    let teleport = (1.0 - damping) / n as f64;

    // Out-degrees are loop-invariant.
    let out_degree: Vec<usize> = graph
        .node_indices()
        .map(|v| graph.neighbors_directed(v, Direction::Outgoing).count())
        .collect();

    let init = 1.0 / n as f64;
    let mut ranks = vec![init; n];
    let mut next = vec![0.0; n];
    let mut iterations = 0;

    for _ in 0..config.max_iterations {
        iterations += 1;

        let dangling_sum: f64 = graph
            .node_indices()
            .filter(|v| out_degree[v.index()] == 0)
            .map(|v| ranks[v.index()])
            .sum();

        for v in graph.node_indices() {
            let mut incoming = 0.0;
            for u in graph.neighbors_directed(v, Direction::Incoming) {
                let deg = out_degree[u.index()];
                if deg > 0 {
                    incoming += ranks[u.index()] / deg as f64;
                }
            }

            next[v.index()] =
                teleport + damping * incoming + damping * dangling_sum / n as f64;
        }

        let max_change = ranks
            .iter()
            .zip(&next)
            .map(|(old, new)| (new - old).abs())
            .fold(0.0_f64, f64::max);

        std::mem::swap(&mut ranks, &mut next);

        if max_change < config.epsilon {
            break;
        }
    }

    tracing::debug!(nodes = n, iterations, "pagerank converged");

    ranks
}
