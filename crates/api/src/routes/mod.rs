pub mod admin;
pub mod health;
pub mod pets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pets                          create (POST)
/// /pets/items                    item catalog (GET)
/// /pets/me                       pet projection (GET)
/// /pets/me/feed                  care action (POST)
/// /pets/me/play                  care action (POST)
/// /pets/me/clean                 care action (POST)
/// /pets/me/rest                  care action (POST)
/// /pets/me/color                 change color (PUT)
/// /pets/me/history               paginated care log (GET)
/// /pets/me/achievements          achievement records (GET)
/// /pets/me/statistics            care aggregates (GET)
///
/// /admin/decay/run               trigger decay pass (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pets", pets::router())
        .nest("/admin", admin::router())
}
