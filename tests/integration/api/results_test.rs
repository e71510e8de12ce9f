// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::create_test_app;
use axum::http::StatusCode;
use scan_results::infrastructure::database::entities::scan_result;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::{json, Value};

// === GET /results ===

#[tokio::test]
async fn test_list_results_empty() {
    let app = create_test_app().await;

    let response = app.server.get("/results").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_results_shows_all_resources() {
    let app = create_test_app().await;
    app.seed("repo").await;

    let response = app.server.get("/results").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["repositoryName"], "repo");
    assert_eq!(body[0]["status"], "pending");
}

// === POST /results ===

#[tokio::test]
async fn test_create_result_returns_resource() {
    let app = create_test_app().await;
    let repo_name = "my repo to scan";

    let response = app
        .server
        .post("/results")
        .json(&json!({ "repoName": repo_name }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["repositoryName"], repo_name);
    assert_eq!(body["status"], "pending");
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn test_create_result_stores_in_db() {
    let app = create_test_app().await;
    let repo_name = "my repo to scan";

    app.server
        .post("/results")
        .json(&json!({ "repoName": repo_name }))
        .await;

    let stored = scan_result::Entity::find()
        .filter(scan_result::Column::RepositoryName.eq(repo_name))
        .one(app.db_pool.as_ref())
        .await
        .unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn test_create_result_rejects_non_string_name() {
    let app = create_test_app().await;

    for repo_name in [json!({ "not": "a string" }), json!(42), json!(["repo"])] {
        let response = app
            .server
            .post("/results")
            .json(&json!({ "repoName": repo_name }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("must be a string"));
    }

    let count = scan_result::Entity::find()
        .all(app.db_pool.as_ref())
        .await
        .unwrap()
        .len();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_result_rejects_blank_name() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/results")
        .json(&json!({ "repoName": "      " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_result_rejects_legacy_field_name() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/results")
        .json(&json!({ "scanName": "      " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .server
        .post("/results")
        .json(&json!({ "scanName": "repo" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_result_cleans_markup() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/results")
        .json(&json!({ "repoName": "  <script> I am a very bad boy</script>    " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["repositoryName"], "I am a very bad boy");
}

#[tokio::test]
async fn test_create_result_rejects_markup_only_name() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/results")
        .json(&json!({ "repoName": "<b></b>" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_result_rejects_malformed_body() {
    let app = create_test_app().await;

    let response = app.server.post("/results").text("repoName=repo").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_created_result_is_listed_and_shown() {
    let app = create_test_app().await;

    let created: Value = app
        .server
        .post("/results")
        .json(&json!({ "repoName": " <em>repo</em> " }))
        .await
        .json();

    let listed: Vec<Value> = app.server.get("/results").await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["repositoryName"], "repo");

    let id = created["id"].as_i64().unwrap();
    let shown: Value = app.server.get(&format!("/results/{}", id)).await.json();
    assert_eq!(shown["id"], created["id"]);
    assert_eq!(shown["repositoryName"], "repo");
    assert_eq!(shown["status"], created["status"]);
}

// === GET /results/{id} ===

#[tokio::test]
async fn test_show_result_returns_detail() {
    let app = create_test_app().await;
    let result = app.seed("repo").await;

    let response = app.server.get(&format!("/results/{}", result.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], result.id);
    assert_eq!(body["repositoryName"], result.repository_name);
    assert_eq!(body["status"], result.status.to_string());
}

#[tokio::test]
async fn test_show_result_not_found() {
    let app = create_test_app().await;
    app.seed("repo").await;

    let response = app.server.get("/results/2").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_show_result_rejects_non_integer_id() {
    let app = create_test_app().await;

    let response = app.server.get("/results/abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
