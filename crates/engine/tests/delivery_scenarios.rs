//! End-to-end evaluator scenarios over the demo data set: spotify
//! (Country-Include US/Canada), duolingo (OS-Include Android/iOS +
//! Country-Exclude US), subwaysurfer (OS-Include Android + App-Include
//! com.gametion.ludokinggame).

use std::sync::Arc;
use targeting_core::types::DeliveryRequest;
use targeting_core::TargetingError;
use targeting_engine::Evaluator;
use targeting_store::MemoryStore;

fn demo_evaluator() -> (Evaluator, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_demo_data());
    (Evaluator::new(store.clone()), store)
}

fn matched_ids(matched: &[targeting_core::types::MatchedCampaign]) -> Vec<&str> {
    let mut ids: Vec<&str> = matched.iter().map(|m| m.cid.as_str()).collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
async fn android_us_request_matches_spotify_only() {
    let (evaluator, _) = demo_evaluator();

    let matched = evaluator
        .matching_campaigns(&DeliveryRequest::new("com.example.app", "Android", "US"))
        .await
        .unwrap();

    // duolingo excludes US; subwaysurfer wants a specific app id.
    assert_eq!(matched_ids(&matched), vec!["spotify"]);
    assert_eq!(matched[0].img, "https://somelink");
    assert_eq!(matched[0].cta, "Download");
}

#[tokio::test]
async fn ios_ca_request_matches_duolingo_only() {
    let (evaluator, _) = demo_evaluator();

    let matched = evaluator
        .matching_campaigns(&DeliveryRequest::new("com.example.app", "iOS", "CA"))
        .await
        .unwrap();

    // "CA" is not the stored token "Canada", so spotify's Country-Include
    // does not pass: values are opaque, there is no ISO-code aliasing.
    // duolingo passes (OS included, country not excluded).
    assert_eq!(matched_ids(&matched), vec!["duolingo"]);
}

#[tokio::test]
async fn ios_canada_request_matches_spotify_and_duolingo() {
    let (evaluator, _) = demo_evaluator();

    let matched = evaluator
        .matching_campaigns(&DeliveryRequest::new("com.example.app", "iOS", "canada"))
        .await
        .unwrap();

    assert_eq!(matched_ids(&matched), vec!["duolingo", "spotify"]);
}

#[tokio::test]
async fn ludo_king_on_android_matches_all_three() {
    let (evaluator, _) = demo_evaluator();

    let matched = evaluator
        .matching_campaigns(&DeliveryRequest::new(
            "com.gametion.ludokinggame",
            "Android",
            "Canada",
        ))
        .await
        .unwrap();

    assert_eq!(matched_ids(&matched), vec!["duolingo", "spotify", "subwaysurfer"]);
}

#[tokio::test]
async fn missing_app_fails_validation_without_store_access() {
    let (evaluator, store) = demo_evaluator();

    let err = evaluator
        .matching_campaigns(&DeliveryRequest::new("", "Android", "US"))
        .await
        .unwrap_err();

    assert!(matches!(err, TargetingError::InvalidRequest("app")));
    assert_eq!(store.fetch_count(), 0);
}
