//! Token estimation and budget-fitting search.

use crate::types::ScoredSymbol;

use super::render::build_map_content;

/// Relative error below which a candidate render is accepted outright,
/// even when it exceeds the budget. Favouring a slightly over-full digest
/// over an under-full one is intentional policy.
const ACCEPTABLE_ERROR: f64 = 0.15;

pub trait TokenEstimator {
    fn estimate(&self, content: &str) -> usize;
}

/// Approximate GPT-style tokenization:
/// tokens(content) := ceil(len(content) / 4)
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTokenEstimator;

impl TokenEstimator for ApproxTokenEstimator {
    fn estimate(&self, content: &str) -> usize {
        if content.is_empty() {
            0
        } else {
            (content.len() + 3) / 4
        }
    }
}

/// Binary-search the globally sorted symbol list for the prefix whose
/// render best fills `max_tokens`.
///
/// Tracks the largest feasible render not exceeding the budget, and stops
/// early on any candidate whose relative error is under 15% — including
/// candidates slightly over budget. Bounds crossing terminates the search
/// in O(log N) renders; when nothing fits, the result is the empty string.
pub fn fit_to_budget<E: TokenEstimator>(
    symbols: &[ScoredSymbol<'_>],
    max_tokens: usize,
    estimator: &E,
) -> String {
    if max_tokens == 0 {
        return String::new();
    }

    let mut lower = 0usize;
    let mut upper = symbols.len();
    let mut best: Option<String> = None;
    let mut best_tokens = 0usize;

    while lower <= upper {
        let middle = (lower + upper) / 2;
        let content = build_map_content(&symbols[..middle]);
        let tokens = estimator.estimate(&content);

        let pct_error = (tokens as f64 - max_tokens as f64).abs() / max_tokens as f64;

        if (tokens <= max_tokens && tokens > best_tokens) || pct_error < ACCEPTABLE_ERROR {
            best = Some(content);
            best_tokens = tokens;

            if pct_error < ACCEPTABLE_ERROR {
                break;
            }
        }

        if tokens < max_tokens {
            lower = middle + 1;
        } else if middle == 0 {
            // an empty render is never over a nonzero budget
            break;
        } else {
            upper = middle - 1;
        }
    }

    best.unwrap_or_default()
}
