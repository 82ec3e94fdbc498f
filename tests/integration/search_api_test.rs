// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, TestApp};
use axum::http::StatusCode;
use serde_json::Value;

struct Seeded {
    learning: Value,
    cooking: Value,
    production: Value,
}

/// 三篇文章：两篇标题含 rust，一篇只在正文中提到 rust
async fn seed(app: &TestApp) -> Seeded {
    let learning = app
        .publish("Learning Rust", "Ownership and borrowing explained step by step.")
        .await;
    let cooking = app
        .publish(
            "Cooking pasta",
            "A rust-colored tomato sauce, simmered slowly for hours until it turns thick and sweet.",
        )
        .await;
    let production = app
        .publish("RUST in production", "Lessons from running rust services.")
        .await;

    Seeded {
        learning,
        cooking,
        production,
    }
}

async fn search(app: &TestApp, term: &str, limit: Option<&str>) -> axum_test::TestResponse {
    let mut request = app.server.get("/v1/search").add_query_param("term", term);
    if let Some(limit) = limit {
        request = request.add_query_param("limit", limit);
    }
    request.await
}

fn result_ids(response: &Value) -> Vec<Value> {
    response["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].clone())
        .collect()
}

#[tokio::test]
async fn title_matches_come_before_content_matches() {
    let app = create_test_app().await;
    let seeded = seed(&app).await;

    let response = search(&app, "rust", Some("5")).await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["term"], "rust");
    assert_eq!(
        result_ids(&body),
        vec![
            seeded.production["id"].clone(),
            seeded.learning["id"].clone(),
            seeded.cooking["id"].clone(),
        ]
    );
}

#[tokio::test]
async fn limit_truncates_results() {
    let app = create_test_app().await;
    let seeded = seed(&app).await;

    let body = search(&app, "rust", Some("1")).await.json::<Value>();

    assert_eq!(result_ids(&body), vec![seeded.production["id"].clone()]);
}

#[tokio::test]
async fn default_limit_applies_when_absent() {
    let app = create_test_app().await;
    for i in 0..7 {
        app.publish(&format!("Rust note {}", i), "Short notes about the language.")
            .await;
    }

    let body = search(&app, "rust", None).await.json::<Value>();

    assert_eq!(body["results"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn long_content_is_excerpted() {
    let app = create_test_app().await;
    let seeded = seed(&app).await;

    let body = search(&app, "tomato", None).await.json::<Value>();
    let results = body["results"].as_array().unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], seeded.cooking["id"]);
    let excerpt = results[0]["excerpt"].as_str().unwrap();
    assert!(excerpt.ends_with("..."));
    assert_eq!(excerpt.chars().count(), 63);
}

#[tokio::test]
async fn no_matches_is_empty_success() {
    let app = create_test_app().await;
    seed(&app).await;

    let response = search(&app, "haskell", None).await;
    response.assert_status_ok();
    assert!(response.json::<Value>()["results"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn wildcards_are_matched_literally() {
    let app = create_test_app().await;
    app.publish("Progress at 100%", "Everything is finished now.").await;
    app.publish("Progress at 1000", "Counting upwards steadily.").await;

    let body = search(&app, "100%", None).await.json::<Value>();

    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["results"][0]["title"], "Progress at 100%");
}

#[tokio::test]
async fn invalid_limits_are_rejected() {
    let app = create_test_app().await;
    seed(&app).await;

    for limit in ["0", "-3", "51"] {
        let response = search(&app, "rust", Some(limit)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["error"].is_string());
    }
}

#[tokio::test]
async fn short_term_is_rejected() {
    let app = create_test_app().await;

    search(&app, "r", None)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    search(&app, "   ", None)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
