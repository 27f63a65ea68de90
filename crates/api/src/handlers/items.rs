//! Handler for the care item catalog.

use axum::extract::State;
use axum::Json;

use petkeeper_db::repositories::ItemRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/pets/items
///
/// All active catalog items. The catalog is global reference data, so
/// no caller identity is required.
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let items = ItemRepo::list_active(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": items })))
}
