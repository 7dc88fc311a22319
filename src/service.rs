//! Service objects wrapping the CPU-bound build pipelines.
//!
//! Both services are constructed explicitly and passed by reference —
//! there are no process-wide singletons. Builds run on the blocking thread
//! pool so callers on a latency-sensitive executor are never stalled, and
//! an in-flight guard keeps overlapping requests from racing on a second
//! build: the overlapping caller gets the last completed result instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::task;

use crate::assets::AssetRelevanceRanker;
use crate::digest::{ApproxTokenEstimator, CodeMapBuilder};
use crate::types::{AssetNode, AssetQuery, ProjectScanData, RankedAsset, SnapshotVersion};
use crate::weighting::WeightingPolicy;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("build task failed: {0}")]
    Task(#[from] task::JoinError),
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
struct BuiltMap {
    version: SnapshotVersion,
    digest: String,
}

/// Builds symbol digests from project snapshots.
pub struct CodeMapService {
    max_map_tokens: usize,
    policy: WeightingPolicy,
    building: AtomicBool,
    last_built: Arc<Mutex<Option<BuiltMap>>>,
}

impl Default for CodeMapService {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl CodeMapService {
    pub fn new(max_map_tokens: usize) -> Self {
        Self::with_policy(max_map_tokens, WeightingPolicy::default())
    }

    pub fn with_policy(max_map_tokens: usize, policy: WeightingPolicy) -> Self {
        Self {
            max_map_tokens,
            policy,
            building: AtomicBool::new(false),
            last_built: Arc::new(Mutex::new(None)),
        }
    }

    /// Build the digest for `scan`, off the caller's executor.
    ///
    /// A request that overlaps an in-flight build returns the last
    /// completed digest (empty when none exists yet). Rebuilding an
    /// unchanged snapshot returns the cached digest without recomputing.
    /// The digest is newline-normalized: no carriage returns.
    pub async fn build_map(&self, scan: ProjectScanData) -> Result<String, BuildError> {
        if self.building.swap(true, Ordering::SeqCst) {
            return Ok(self.last_digest());
        }

        let builder = CodeMapBuilder::with_parts(
            self.max_map_tokens,
            self.policy.clone(),
            ApproxTokenEstimator,
        );
        let last_built = Arc::clone(&self.last_built);

        let result = task::spawn_blocking(move || -> Result<String, BuildError> {
            let started = Instant::now();
            let version = scan.fingerprint()?;

            if let Some(built) = last_built.lock().as_ref() {
                if built.version == version {
                    tracing::debug!("snapshot unchanged, reusing digest");
                    return Ok(built.digest.clone());
                }
            }

            let digest = builder.build(&scan).replace('\r', "");

            tracing::info!(
                files = scan.file_symbols.len(),
                symbols = scan.symbol_count(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "code map built"
            );

            *last_built.lock() = Some(BuiltMap {
                version,
                digest: digest.clone(),
            });

            Ok(digest)
        })
        .await;

        self.building.store(false, Ordering::SeqCst);

        result?
    }

    fn last_digest(&self) -> String {
        self.last_built
            .lock()
            .as_ref()
            .map(|built| built.digest.clone())
            .unwrap_or_default()
    }
}

/// Ranks project assets against free-text queries.
#[derive(Default)]
pub struct AssetContextService {
    ranking: AtomicBool,
    last_ranked: Arc<Mutex<Vec<RankedAsset>>>,
}

impl AssetContextService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score and sort `assets` for `prompt`, off the caller's executor.
    ///
    /// A request that overlaps an in-flight ranking returns the last
    /// completed list (empty when none exists yet).
    pub async fn rank_assets(
        &self,
        assets: Vec<AssetNode>,
        prompt: &str,
    ) -> Result<Vec<RankedAsset>, BuildError> {
        if self.ranking.swap(true, Ordering::SeqCst) {
            return Ok(self.last_ranked.lock().clone());
        }

        let query = AssetQuery::new(prompt);
        let now = Utc::now();
        let last_ranked = Arc::clone(&self.last_ranked);

        let result = task::spawn_blocking(move || {
            let started = Instant::now();
            let ranker = AssetRelevanceRanker::default();
            let ranked = ranker.rank(&assets, &query, now);

            tracing::info!(
                assets = ranked.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "asset context ranked"
            );

            *last_ranked.lock() = ranked.clone();
            ranked
        })
        .await;

        self.ranking.store(false, Ordering::SeqCst);

        Ok(result?)
    }
}
