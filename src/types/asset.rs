use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assets::keywords::STOP_WORDS;

fn default_relevancy() -> f64 {
    1.0
}

/// A project asset as recorded by the external asset index.
///
/// `relevancy_score` is recomputed per query; this core reads the node and
/// returns a rescored copy, it never mutates the index's data in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetNode {
    pub name: String,
    pub path: String,
    /// Category label, e.g. `"Texture2D"` or `"AudioClip"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub last_modified: DateTime<Utc>,
    pub added: DateTime<Utc>,
    #[serde(default = "default_relevancy")]
    pub relevancy_score: f64,
}

/// A normalized free-text query.
/// Normalization rules:
/// - Lowercase
/// - Split on whitespace and common punctuation
/// - Stop words dropped
#[derive(Debug, Clone)]
pub struct AssetQuery {
    pub raw: String,
    pub terms: Vec<String>,
}

impl AssetQuery {
    const SEPARATORS: [char; 9] = [' ', ',', '.', '!', '?', ';', ':', '-', '_'];

    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let terms = raw
            .to_lowercase()
            .split(|c: char| Self::SEPARATORS.contains(&c) || c.is_whitespace())
            .filter(|t| !t.is_empty() && !STOP_WORDS.contains(t))
            .map(|t| t.to_string())
            .collect();

        Self { raw, terms }
    }
}

/// Per-component score breakdown for one asset against one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetScoreDetails {
    pub type_keyword: f64,
    pub name: f64,
    pub recency: f64,
}

/// A ranked asset returned to the downstream context serializer.
/// Fully self-contained and serializable; `asset.relevancy_score` carries
/// the recomputed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAsset {
    pub asset: AssetNode,
    pub why: AssetScoreDetails,
}
