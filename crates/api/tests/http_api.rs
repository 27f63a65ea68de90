//! HTTP-level integration tests for the pet API surface.
//!
//! Exercises the full router, so identity extraction, status codes,
//! and the JSON error envelope are all covered end to end.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, get, get_as, send_json_as};
use sqlx::PgPool;

use petkeeper_core::types::DbId;

const OWNER: DbId = 7;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a pet for `OWNER` through the API and return the response JSON.
async fn create_pet(app: axum::Router) -> serde_json::Value {
    let body = serde_json::json!({
        "name": "Rex",
        "color": "brown",
        "personality": "playful",
    });
    let response = send_json_as(app, OWNER, "POST", "/api/v1/pets", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Look up a seeded catalog item id by name.
async fn item_id(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar("SELECT id FROM pet_items WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health & identity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn health_reports_database_up(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "up");
}

#[sqlx::test(migrations = "../../migrations")]
async fn missing_identity_header_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/pets/me").await;
    assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn malformed_identity_header_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = axum::http::Request::builder()
        .uri("/api/v1/pets/me")
        .header("x-user-id", "not-a-number")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

// ---------------------------------------------------------------------------
// Pet lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_then_fetch_pet(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = create_pet(app.clone()).await;
    assert_eq!(created["data"]["name"], "Rex");
    assert_eq!(created["data"]["level"], 1);
    assert_eq!(created["data"]["experience"], 0);
    assert_eq!(created["data"]["experience_to_next_level"], 100);
    assert_eq!(created["data"]["stats"]["hunger"]["current"], 100);

    let response = get_as(app, OWNER, "/api/v1/pets/me").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Rex");
    assert_eq!(json["data"]["color"], "brown");
}

#[sqlx::test(migrations = "../../migrations")]
async fn second_pet_for_same_owner_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_pet(app.clone()).await;

    let body = serde_json::json!({
        "name": "Fido",
        "color": "black",
        "personality": "lazy",
    });
    let response = send_json_as(app, OWNER, "POST", "/api/v1/pets", body).await;
    assert_error(response, StatusCode::CONFLICT, "DUPLICATE_PET").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn fetch_before_create_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_as(app, OWNER, "/api/v1/pets/me").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn oversized_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "x".repeat(51),
        "color": "brown",
        "personality": "playful",
    });
    let response = send_json_as(app, OWNER, "POST", "/api/v1/pets", body).await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn change_color_updates_projection(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_pet(app.clone()).await;

    let body = serde_json::json!({ "color": "blue" });
    let response = send_json_as(app, OWNER, "PUT", "/api/v1/pets/me/color", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["color"], "blue");
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn item_catalog_is_public_and_seeded(pool: PgPool) {
    let app = common::build_test_app(pool);

    // No identity header: the catalog is global reference data.
    let response = get(app, "/api/v1/pets/items").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 9);
    assert!(items.iter().any(|i| i["name"] == "Kibble"));
    assert!(items.iter().any(|i| i["item_kind"] == "cleaning"));
}

// ---------------------------------------------------------------------------
// Care actions over HTTP
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn feed_succeeds_then_hits_cooldown(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    create_pet(app.clone()).await;
    let kibble = item_id(&pool, "Kibble").await;

    let body = serde_json::json!({ "item_id": kibble });
    let response = send_json_as(app.clone(), OWNER, "POST", "/api/v1/pets/me/feed", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["action"], "feed");
    assert!(json["data"]["points_earned"].as_i64().unwrap() > 0);

    let response = send_json_as(app, OWNER, "POST", "/api/v1/pets/me/feed", body).await;
    let json = assert_error(response, StatusCode::TOO_MANY_REQUESTS, "COOLDOWN_ACTIVE").await;
    assert!(json["retry_after_secs"].as_i64().unwrap() > 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn feeding_a_toy_is_a_type_mismatch(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    create_pet(app.clone()).await;
    let ball = item_id(&pool, "Squeaky Ball").await;

    let body = serde_json::json!({ "item_id": ball });
    let response = send_json_as(app, OWNER, "POST", "/api/v1/pets/me/feed", body).await;
    assert_error(response, StatusCode::BAD_REQUEST, "ITEM_TYPE_MISMATCH").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn rest_requires_no_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_pet(app.clone()).await;

    let response = send_json_as(app, OWNER, "POST", "/api/v1/pets/me/rest", serde_json::json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["action"], "rest");
    assert_eq!(json["data"]["experience_gained"], 10);
}

// ---------------------------------------------------------------------------
// History, achievements, statistics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn history_pages_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    create_pet(app.clone()).await;
    let kibble = item_id(&pool, "Kibble").await;

    let body = serde_json::json!({ "item_id": kibble });
    send_json_as(app.clone(), OWNER, "POST", "/api/v1/pets/me/feed", body).await;
    send_json_as(app.clone(), OWNER, "POST", "/api/v1/pets/me/rest", serde_json::json!({})).await;

    let response = get_as(app.clone(), OWNER, "/api/v1/pets/me/history?page=1&page_size=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["entries"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["entries"][0]["action"], "rest");

    let response = get_as(app, OWNER, "/api/v1/pets/me/history?page=2&page_size=1").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["entries"][0]["action"], "feed");
}

#[sqlx::test(migrations = "../../migrations")]
async fn history_page_beyond_the_end_is_empty_not_an_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_pet(app.clone()).await;
    send_json_as(app.clone(), OWNER, "POST", "/api/v1/pets/me/rest", serde_json::json!({})).await;

    let uri = format!("/api/v1/pets/me/history?page={}&page_size=100", i64::MAX);
    let response = get_as(app, OWNER, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert!(json["data"]["entries"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn achievements_seed_locked_then_unlock(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_pet(app.clone()).await;

    let response = get_as(app.clone(), OWNER, "/api/v1/pets/me/achievements").await;
    let json = body_json(response).await;
    let records = json["data"].as_array().unwrap().clone();
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|a| a["is_unlocked"] == false));

    send_json_as(app.clone(), OWNER, "POST", "/api/v1/pets/me/rest", serde_json::json!({})).await;

    let response = get_as(app, OWNER, "/api/v1/pets/me/achievements").await;
    let json = body_json(response).await;
    let unlocked: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|a| a["is_unlocked"] == true)
        .collect();
    assert_eq!(unlocked.len(), 1);
    assert_eq!(unlocked[0]["name"], "First Steps");
}

#[sqlx::test(migrations = "../../migrations")]
async fn statistics_aggregate_care_history(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    create_pet(app.clone()).await;
    let kibble = item_id(&pool, "Kibble").await;

    let body = serde_json::json!({ "item_id": kibble });
    send_json_as(app.clone(), OWNER, "POST", "/api/v1/pets/me/feed", body).await;
    send_json_as(app.clone(), OWNER, "POST", "/api/v1/pets/me/rest", serde_json::json!({})).await;

    let response = get_as(app, OWNER, "/api/v1/pets/me/statistics").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_actions"], 2);
    assert_eq!(json["data"]["unlocked_achievements"], 1);
    assert!(json["data"]["total_points_earned"].as_i64().unwrap() > 0);
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn manual_decay_pass_reports_a_summary(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_pet(app.clone()).await;

    let response = send_json_as(app, OWNER, "POST", "/api/v1/admin/decay/run", serde_json::json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["processed"], 1);
    // A freshly created pet has nothing to decay yet.
    assert_eq!(json["data"]["decayed"], 0);
    assert_eq!(json["data"]["failed"], 0);
}
