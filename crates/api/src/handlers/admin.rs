//! Administrative endpoints.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use petkeeper_worker::decay;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/admin/decay/run
///
/// Trigger one decay pass over the whole pet population. Safe to
/// re-trigger: decay is computed from wall-clock-relative timestamps,
/// so a second pass in the same hour applies no extra penalty.
pub async fn run_decay(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let summary =
        decay::run_decay_pass(&state.pool, Utc::now(), state.config.decay_concurrency).await?;

    Ok(Json(serde_json::json!({ "data": summary })))
}
