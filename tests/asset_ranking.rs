use chrono::{Duration, TimeZone, Utc};
use codemap_core::assets::{AssetRelevanceRanker, AssetScorer, KeywordRecencyScorer};
use codemap_core::types::{AssetNode, AssetQuery};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

fn make_asset(name: &str, kind: &str, age_days: i64) -> AssetNode {
    let stamp = fixed_now() - Duration::days(age_days);
    AssetNode {
        name: name.to_string(),
        path: format!("Assets/{name}"),
        kind: kind.to_string(),
        last_modified: stamp,
        added: stamp,
        relevancy_score: 1.0,
    }
}

#[test]
fn query_tokenization_drops_stop_words_and_punctuation() {
    let query = AssetQuery::new("Play the fire-ball_sprite.png, for a Boss!");
    assert_eq!(
        query.terms,
        vec!["play", "fire", "ball", "sprite", "png", "boss"]
    );
}

#[test]
fn keyword_match_outranks_otherwise_identical_asset() {
    let matched = make_asset("zzz", "AudioClip", 30);
    let unmatched = make_asset("zzz", "Unknown", 30);

    let ranker = AssetRelevanceRanker::default();
    let query = AssetQuery::new("play the sound effect");
    let ranked = ranker.rank(&[unmatched, matched], &query, fixed_now());

    assert_eq!(ranked[0].asset.kind, "AudioClip");
    assert!(ranked[0].asset.relevancy_score > ranked[1].asset.relevancy_score);
    assert_eq!(ranked[0].why.type_keyword, 1.0);
    assert_eq!(ranked[1].why.type_keyword, 0.0);
}

#[test]
fn unknown_category_scores_baseline_without_error() {
    let asset = make_asset("thing", "NoSuchCategory", 30);
    let ranker = AssetRelevanceRanker::default();
    let ranked = ranker.rank(&[asset], &AssetQuery::new("thing unrelated"), fixed_now());

    // name matches ("thing" is a token and the full name), nothing else
    assert_eq!(ranked[0].why.type_keyword, 0.0);
    assert_eq!(ranked[0].why.name, 0.75);
    assert_eq!(ranked[0].asset.relevancy_score, 1.75);
}

#[test]
fn name_component_is_asymmetric() {
    let scorer = KeywordRecencyScorer;
    let query = AssetQuery::new("explosion");

    // token inside the name, but the name is not inside the token
    let partial = make_asset("explosion.png", "Unknown", 30);
    let details = scorer.score(&partial, &query, fixed_now());
    assert_eq!(details.name, 0.5);

    // exact match: both containment checks hold
    let exact = make_asset("explosion", "Unknown", 30);
    let details = scorer.score(&exact, &query, fixed_now());
    assert_eq!(details.name, 0.75);

    // no overlap at all
    let neither = make_asset("skybox", "Unknown", 30);
    let details = scorer.score(&neither, &query, fixed_now());
    assert_eq!(details.name, 0.0);
}

#[test]
fn recency_decays_smoothly_and_cuts_off_at_the_window() {
    let scorer = KeywordRecencyScorer;
    let query = AssetQuery::new("anything");

    let fresh = scorer.score(&make_asset("a", "Unknown", 0), &query, fixed_now());
    assert!((fresh.recency - 2.0).abs() < 1e-9, "age 0 scores 1.0 per timestamp");

    let halfway = scorer.score(&make_asset("a", "Unknown", 3), &query, fixed_now());
    assert!(halfway.recency > 0.0 && halfway.recency < 2.0);

    let edge = scorer.score(&make_asset("a", "Unknown", 7), &query, fixed_now());
    assert!(edge.recency.abs() < 1e-9, "age 7 scores exactly 0");

    let stale = scorer.score(&make_asset("a", "Unknown", 8), &query, fixed_now());
    assert_eq!(stale.recency, 0.0, "past the window stays 0, never negative");
}

#[test]
fn recent_assets_rank_above_stale_ones() {
    let recent = make_asset("noise_a", "Unknown", 1);
    let stale = make_asset("noise_b", "Unknown", 20);

    let ranker = AssetRelevanceRanker::default();
    let ranked = ranker.rank(&[stale, recent], &AssetQuery::new("unrelated"), fixed_now());

    assert_eq!(ranked[0].asset.name, "noise_a");
}

#[test]
fn equal_scores_keep_input_order() {
    let assets = vec![
        make_asset("first", "Unknown", 30),
        make_asset("second", "Unknown", 30),
        make_asset("third", "Unknown", 30),
    ];

    let ranker = AssetRelevanceRanker::default();
    let ranked = ranker.rank(&assets, &AssetQuery::new("no match here"), fixed_now());

    let names: Vec<&str> = ranked.iter().map(|r| r.asset.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    for entry in &ranked {
        assert_eq!(entry.asset.relevancy_score, 1.0);
    }
}

#[test]
fn empty_asset_list_yields_empty_ranking() {
    let ranker = AssetRelevanceRanker::default();
    let ranked = ranker.rank(&[], &AssetQuery::new("anything"), fixed_now());
    assert!(ranked.is_empty());
}

#[test]
fn stop_word_only_query_matches_nothing() {
    let query = AssetQuery::new("the and of with for");
    assert!(query.terms.is_empty());

    let scorer = KeywordRecencyScorer;
    let details = scorer.score(&make_asset("boss", "AudioClip", 30), &query, fixed_now());
    assert_eq!(details.type_keyword, 0.0);
    assert_eq!(details.name, 0.0);
}
