//! HTTP-level integration tests for the users endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, delete, get, post_json, put_json};

#[sqlx::test(migrations = "../db/migrations")]
async fn create_user_returns_201_with_zero_karma(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"username": "alice", "about": "rustacean"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;

    assert_eq!(body["username"], "alice");
    assert_eq!(body["about"], "rustacean");
    assert_eq!(body["karma"], 0);
    assert!(body["createdAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"username": "alice"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"username": "alice"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_user_rejects_empty_username(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"username": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_user_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool.clone()), "/api/v1/users/nobody").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "User not found");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_users_returns_all(pool: PgPool) {
    for username in ["alice", "bob"] {
        let response = post_json(
            build_test_app(pool.clone()),
            "/api/v1/users",
            json!({"username": username}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(build_test_app(pool.clone()), "/api/v1/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_users_by_date_requires_both_bounds(pool: PgPool) {
    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/users/date?endDate=2024-01-01",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Start date and end date are required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_users_by_date_filters_by_window(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"username": "alice"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/users/date?startDate=2000-01-01&endDate=2100-01-01",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["username"], "alice");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_user_changes_about_only(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"username": "alice", "about": "old"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = put_json(
        build_test_app(pool.clone()),
        "/api/v1/users/alice",
        json!({"about": "new"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["about"], "new");
    assert_eq!(body["karma"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_user_returns_404(pool: PgPool) {
    let response = put_json(
        build_test_app(pool.clone()),
        "/api/v1/users/nobody",
        json!({"about": "x"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "User not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_user_then_get_returns_404(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"username": "alice"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete(build_test_app(pool.clone()), "/api/v1/users/alice").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool.clone()), "/api/v1/users/alice").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_user_leaves_authored_content(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"username": "alice"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/items",
        json!({"author": "alice", "title": "Survivor"}),
    )
    .await;
    let item_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = delete(build_test_app(pool.clone()), "/api/v1/users/alice").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/items/{item_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
