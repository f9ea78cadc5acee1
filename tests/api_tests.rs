//! HTTP API Test Suite
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot` and checks
//! the status codes, bodies, and statistics the service reports.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use mutant_finder::web::server::{create_router, AppState};
use mutant_finder::RecordStore;

const MUTANT: &str = r#"{"dna":["ATGCGA","CAGTGC","TTATGT","AGAAGG","CCCCTA","TCACTG"]}"#;
const HUMAN: &str = r#"{"dna":["ACTA","TGAC","GACT","CTGA"]}"#;

fn app() -> Router {
    create_router(Arc::new(AppState::new(RecordStore::in_memory())))
}

async fn post_mutant(app: &Router, body: impl Into<String>) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/mutant")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_mutant_returns_ok() {
    let app = app();
    let (status, body) = post_mutant(&app, MUTANT).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_human_returns_forbidden() {
    let app = app();
    let (status, body) = post_mutant(&app, HUMAN).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.is_empty());

    let (status, _) = post_mutant(&app, r#"{"dna":["AC","TG"]}"#).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_dna_returns_message() {
    let app = app();

    let cases = [
        (r#"{"dna":null}"#, "DNA sequence can not be null"),
        (r#"{"dna":[]}"#, "DNA sequence can not be empty"),
        (
            r#"{"dna":["A","TG"]}"#,
            "DNA chain must have the same lenght of nitrogenous bases.",
        ),
        (
            r#"{"dna":["ATGC","CAGC","TTA","CTGA"]}"#,
            "DNA must contain nitrogenous bases with same length.",
        ),
        (
            r#"{"dna":["ATGC","CABC","TTAT","CTGA"]}"#,
            "Nitrogenous bases should be composed by A, T, C, G bases only.",
        ),
    ];

    for (body, message) in cases {
        let (status, text) = post_mutant(&app, body).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{body}");
        assert_eq!(text, message, "{body}");
    }
}

#[tokio::test]
async fn test_key_is_case_insensitive() {
    let app = app();
    let (status, _) = post_mutant(
        &app,
        r#"{"Dna":["ATGCGA","CAGTGC","TTATGT","AGAAGG","CCCCTA","TCACTG"]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_requests_are_bad_requests() {
    let app = app();

    for body in [
        "not json",
        "[]",
        r#"{"rna":["ACGT"]}"#,
        r#"{"dna":"ACGT"}"#,
        r#"{"dna":[1,2,3]}"#,
    ] {
        let (status, text) = post_mutant(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["error_type"], "invalid_request");
        assert!(json["details"].is_null());
    }
}

#[tokio::test]
async fn test_stats_empty_store_has_no_content() {
    let app = app();
    let (status, body) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_stats_counts_recorded_results() {
    let app = app();

    post_mutant(&app, MUTANT).await;
    post_mutant(&app, HUMAN).await;
    post_mutant(&app, r#"{"dna":["AC","TG"]}"#).await;

    let (status, body) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count_mutant_dna"], 1);
    assert_eq!(json["count_human_dna"], 3);
    assert_eq!(json["ratio"], 3.0);
}

#[tokio::test]
async fn test_resubmission_is_counted_once() {
    let app = app();

    post_mutant(&app, MUTANT).await;
    post_mutant(&app, MUTANT).await;
    // Same bases in lower case share the fingerprint
    post_mutant(
        &app,
        r#"{"dna":["atgcga","cagtgc","ttatgt","agaagg","ccccta","tcactg"]}"#,
    )
    .await;

    let (_, body) = get(&app, "/stats").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count_mutant_dna"], 1);
    assert_eq!(json["count_human_dna"], 1);
    assert_eq!(json["ratio"], 1.0);
}

#[tokio::test]
async fn test_rejected_dna_is_not_recorded() {
    let app = app();

    post_mutant(&app, r#"{"dna":["ATGC","CABC","TTAT","CTGA"]}"#).await;
    post_mutant(&app, "not json").await;

    let (status, _) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_only_humans_gives_zero_ratio() {
    let app = app();
    post_mutant(&app, HUMAN).await;

    let (status, body) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count_mutant_dna"], 0);
    assert_eq!(json["count_human_dna"], 1);
    assert_eq!(json["ratio"], 0.0);
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_wrong_method_and_unknown_route() {
    let app = app();

    let (status, _) = get(&app, "/mutant").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = get(&app, "/mutants").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_persistent_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");

    {
        let app = create_router(Arc::new(AppState::new(RecordStore::open(&path).unwrap())));
        post_mutant(&app, MUTANT).await;
        post_mutant(&app, HUMAN).await;
    }

    let app = create_router(Arc::new(AppState::new(RecordStore::open(&path).unwrap())));
    let (status, body) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count_mutant_dna"], 1);
    assert_eq!(json["count_human_dna"], 2);
}

#[tokio::test]
async fn test_failed_save_is_not_counted() {
    let dir = tempfile::tempdir().unwrap();
    let store_dir = dir.path().join("store");
    std::fs::create_dir(&store_dir).unwrap();
    let app = create_router(Arc::new(AppState::new(
        RecordStore::open(&store_dir.join("records.json")).unwrap(),
    )));
    std::fs::remove_dir_all(&store_dir).unwrap();

    let (status, body) = post_mutant(&app, MUTANT).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error_type"], "store_failed");
    assert!(json["details"].is_null());

    let (status, _) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_stats_alongside_file_writes() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_router(Arc::new(AppState::new(
        RecordStore::open(&dir.path().join("records.json")).unwrap(),
    )));

    let writer = {
        let app = app.clone();
        tokio::spawn(async move {
            for row in ["ACTA", "CCTA", "GCTA", "TCTA"] {
                let body = format!(r#"{{"dna":["{row}","TGAC","GACT","CTGA"]}}"#);
                assert_eq!(post_mutant(&app, body).await.0, StatusCode::FORBIDDEN);
            }
        })
    };
    for _ in 0..20 {
        let (status, _) = get(&app, "/stats").await;
        assert!(status == StatusCode::OK || status == StatusCode::NO_CONTENT);
    }
    writer.await.unwrap();

    let (status, body) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count_human_dna"], 4);
}

#[tokio::test]
async fn test_concurrent_submissions() {
    let app = app();

    let mut handles = Vec::new();
    for i in 0..20 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            // Distinct humans: vary the first row's bases
            let first = ["ACTA", "CCTA", "GCTA", "TCTA"][i % 4];
            let second = ["TGAC", "AGAC", "CGAC", "GGAC", "TTAC"][i % 5];
            let body = format!(r#"{{"dna":["{first}","{second}","GACT","CTGA"]}}"#);
            post_mutant(&app, body).await
        }));
    }
    for handle in handles {
        let (status, _) = handle.await.unwrap();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    let (_, body) = get(&app, "/stats").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count_human_dna"], 20);
}
