//! Relevance ranking for project assets against a free-text query.
//!
//! Structurally parallel to the symbol pipeline but graph-free: each asset
//! is scored independently from its category keywords, its name, and how
//! recently it was touched, then the whole list is sorted once.

pub mod keywords;

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::types::{AssetNode, AssetQuery, AssetScoreDetails, RankedAsset};

use keywords::keywords_for;

/// Days after which a timestamp stops contributing any recency score.
const RECENCY_WINDOW_DAYS: f64 = 7.0;

pub trait AssetScorer: Sync {
    fn score(&self, asset: &AssetNode, query: &AssetQuery, now: DateTime<Utc>)
        -> AssetScoreDetails;

    /// Every asset starts from 1.0 so the components only ever rescale
    /// upward; an asset matching nothing still ranks by its baseline.
    fn score_value(&self, details: &AssetScoreDetails) -> f64 {
        1.0 + details.type_keyword + details.recency + details.name
    }
}

/// v0 scorer: category keyword match, name containment, cosine-smoothed
/// recency decay.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRecencyScorer;

impl KeywordRecencyScorer {
    /// 1.0 when any query term appears in the keyword set curated for the
    /// asset's category; unknown categories score 0.0 without error.
    fn type_keyword_score(kind: &str, query: &AssetQuery) -> f64 {
        let Some(keywords) = keywords_for(kind) else {
            return 0.0;
        };

        if query.terms.iter().any(|t| keywords.contains(&t.as_str())) {
            1.0
        } else {
            0.0
        }
    }

    /// 0.5 when a query term occurs inside the asset name, plus 0.25 when
    /// the whole name occurs inside a query term. Both hold only for an
    /// exact name match, capping the component at 0.75.
    fn name_score(name: &str, query: &AssetQuery) -> f64 {
        let lower_name = name.to_lowercase();

        let term_in_name = query.terms.iter().any(|t| lower_name.contains(t.as_str()));
        let name_in_term = query.terms.iter().any(|t| t.contains(&lower_name));

        let mut score = 0.0;
        if term_in_name {
            score += 0.5;
        }
        if name_in_term {
            score += 0.25;
        }
        score
    }

    /// Smooth decay from 1.0 at age 0 to 0.0 at the window edge, and 0.0
    /// beyond it; summed over both timestamps (max 2.0).
    fn recency_score(asset: &AssetNode, now: DateTime<Utc>) -> f64 {
        Self::decay(age_in_days(asset.last_modified, now))
            + Self::decay(age_in_days(asset.added, now))
    }

    fn decay(age_days: f64) -> f64 {
        if age_days > RECENCY_WINDOW_DAYS {
            return 0.0;
        }
        let raw = age_days / RECENCY_WINDOW_DAYS;
        0.5 * (raw * std::f64::consts::PI).cos() + 0.5
    }
}

fn age_in_days(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - timestamp).num_seconds() as f64;
    // A timestamp in the future reads as age 0, never negative.
    seconds.max(0.0) / 86_400.0
}

impl AssetScorer for KeywordRecencyScorer {
    fn score(
        &self,
        asset: &AssetNode,
        query: &AssetQuery,
        now: DateTime<Utc>,
    ) -> AssetScoreDetails {
        AssetScoreDetails {
            type_keyword: Self::type_keyword_score(&asset.kind, query),
            name: Self::name_score(&asset.name, query),
            recency: Self::recency_score(asset, now),
        }
    }
}

/// Scores and sorts a list of assets for one query.
pub struct AssetRelevanceRanker<S> {
    scorer: S,
}

impl Default for AssetRelevanceRanker<KeywordRecencyScorer> {
    fn default() -> Self {
        Self {
            scorer: KeywordRecencyScorer,
        }
    }
}

impl<S> AssetRelevanceRanker<S>
where
    S: AssetScorer,
{
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Rank `assets` against `query`, descending by total score.
    ///
    /// Per-asset scoring shares no mutable state and runs in parallel; the
    /// stable sort afterwards is the synchronization point, so equal scores
    /// keep their input order. Empty input yields an empty list.
    pub fn rank(
        &self,
        assets: &[AssetNode],
        query: &AssetQuery,
        now: DateTime<Utc>,
    ) -> Vec<RankedAsset> {
        let mut ranked: Vec<RankedAsset> = assets
            .par_iter()
            .map(|asset| {
                let why = self.scorer.score(asset, query, now);
                let mut asset = asset.clone();
                asset.relevancy_score = self.scorer.score_value(&why);
                RankedAsset { asset, why }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.asset
                .relevancy_score
                .partial_cmp(&a.asset.relevancy_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
    }
}
