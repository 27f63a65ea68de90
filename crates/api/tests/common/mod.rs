use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use petkeeper_api::config::ServerConfig;
use petkeeper_api::router::build_app_router;
use petkeeper_api::state::AppState;
use petkeeper_api::wallet::{WalletClient, WalletError};
use petkeeper_core::types::DbId;

/// Wallet stub that accepts every credit. HTTP tests exercise the
/// router, not the reward bridge; the engine tests cover wallet
/// failure handling.
struct AcceptingWallet;

#[async_trait]
impl WalletClient for AcceptingWallet {
    async fn credit(&self, _owner_id: DbId, _points: i64) -> Result<(), WalletError> {
        Ok(())
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        wallet_base_url: "http://localhost:9090".to_string(),
        wallet_timeout_secs: 5,
        decay_concurrency: 4,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// Reuses the production [`build_app_router`] so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) the binary serves.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        wallet: Arc::new(AcceptingWallet),
    };
    build_app_router(state, &config)
}

/// Send an unauthenticated GET request.
#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a GET request with the gateway identity header.
#[allow(dead_code)]
pub async fn get_as(app: Router, owner_id: DbId, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("x-user-id", owner_id.to_string())
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a JSON request with the gateway identity header.
#[allow(dead_code)]
pub async fn send_json_as(
    app: Router,
    owner_id: DbId,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("x-user-id", owner_id.to_string())
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the response is an error with the given status and `code` field.
#[allow(dead_code)]
pub async fn assert_error(response: Response, status: StatusCode, code: &str) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    json
}
