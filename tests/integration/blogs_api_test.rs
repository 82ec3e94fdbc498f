// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn create_and_fetch_blog() {
    let app = create_test_app().await;

    let created = app
        .publish("First post", "Hello from the first post body.")
        .await;
    assert_eq!(created["title"], "First post");
    assert_eq!(created["author_id"], app.user.id.to_string());

    let id = created["id"].as_str().unwrap();
    let fetched = app.server.get(&format!("/v1/blogs/{}", id)).await;
    fetched.assert_status_ok();

    let fetched = fetched.json::<Value>();
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["content"], "Hello from the first post body.");
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = create_test_app().await;

    let older = app.publish("Older post", "Written before the other one.").await;
    let newer = app.publish("Newer post", "Written after the other one.").await;

    let response = app.server.get("/v1/blogs").await;
    response.assert_status_ok();

    let blogs = response.json::<Vec<Value>>();
    let ids: Vec<&Value> = blogs.iter().map(|b| &b["id"]).collect();
    assert_eq!(ids, vec![&newer["id"], &older["id"]]);
}

#[tokio::test]
async fn missing_blog_is_not_found() {
    let app = create_test_app().await;

    let response = app
        .server
        .get(&format!("/v1/blogs/{}", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_blog_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/blogs")
        .authorization_bearer(&app.token)
        .json(&json!({ "title": "Hi", "content": "Too short title here." }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());

    let listed = app.server.get("/v1/blogs").await.json::<Vec<Value>>();
    assert!(listed.is_empty());
}
