use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use codemap_core::service::{AssetContextService, CodeMapService};
use codemap_core::types::{AssetNode, ProjectScanData, SymbolDefinition, SymbolKind};

fn make_scan(class_name: &str) -> ProjectScanData {
    let mut file_symbols = BTreeMap::new();
    file_symbols.insert(
        "world.cs".to_string(),
        vec![SymbolDefinition {
            name: class_name.to_string(),
            kind: SymbolKind::Class,
            line: 1,
            parameters: Vec::new(),
            return_type: String::new(),
            visibility: "public".to_string(),
            file_path: "/project/world.cs".to_string(),
            relative_path: "world.cs".to_string(),
        }],
    );

    let mut reference_count = BTreeMap::new();
    reference_count.insert(class_name.to_string(), 2);

    ProjectScanData {
        file_symbols,
        reference_count,
    }
}

#[tokio::test]
async fn build_map_delivers_digest_asynchronously() {
    let service = CodeMapService::new(1024);
    let digest = service.build_map(make_scan("World")).await.unwrap();

    assert!(digest.contains("world.cs:"));
    assert!(digest.contains("World"));
    assert!(!digest.contains('\r'));
}

#[tokio::test]
async fn unchanged_snapshot_reuses_cached_digest() {
    let service = CodeMapService::new(1024);

    let first = service.build_map(make_scan("World")).await.unwrap();
    let second = service.build_map(make_scan("World")).await.unwrap();
    assert_eq!(first, second);

    let changed = service.build_map(make_scan("Universe")).await.unwrap();
    assert_ne!(first, changed);
}

#[tokio::test]
async fn overlapping_builds_do_not_race() {
    let service = Arc::new(CodeMapService::new(1024));

    let (a, b) = tokio::join!(
        service.build_map(make_scan("World")),
        service.build_map(make_scan("World")),
    );

    let a = a.unwrap();
    let b = b.unwrap();
    let expected = service.build_map(make_scan("World")).await.unwrap();

    // The overlapped request either reuses the last completed result
    // (empty before any build finishes) or the build itself; neither call
    // may fail or interleave partial state.
    for digest in [&a, &b] {
        assert!(
            digest.is_empty() || *digest == expected,
            "unexpected digest: {digest:?}"
        );
    }
    assert!(a == expected || b == expected);
}

#[tokio::test]
async fn empty_snapshot_yields_empty_digest() {
    let service = CodeMapService::default();
    let digest = service.build_map(ProjectScanData::default()).await.unwrap();
    assert_eq!(digest, "");
}

#[tokio::test]
async fn asset_ranking_sorts_descending() {
    let now = Utc::now();
    let old = now - Duration::days(30);

    let assets = vec![
        AssetNode {
            name: "ambient_hum".to_string(),
            path: "Assets/ambient_hum.wav".to_string(),
            kind: "Unknown".to_string(),
            last_modified: old,
            added: old,
            relevancy_score: 1.0,
        },
        AssetNode {
            name: "explosion".to_string(),
            path: "Assets/explosion.wav".to_string(),
            kind: "AudioClip".to_string(),
            last_modified: old,
            added: old,
            relevancy_score: 1.0,
        },
    ];

    let service = AssetContextService::new();
    let ranked = service
        .rank_assets(assets, "play the explosion sound")
        .await
        .unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].asset.name, "explosion");
    assert!(
        ranked[0].asset.relevancy_score > ranked[1].asset.relevancy_score
    );
    let scores: Vec<f64> = ranked.iter().map(|r| r.asset.relevancy_score).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|x, y| y.partial_cmp(x).unwrap());
    assert_eq!(scores, sorted);
}
