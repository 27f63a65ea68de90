//! Handler for the paginated care history listing.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use petkeeper_core::error::CoreError;
use petkeeper_db::repositories::{CareLogRepo, PetRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Default page size for history listing.
const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size for history listing.
const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters for `GET /pets/me/history` (`?page=&page_size=`).
///
/// Pages are 1-based; out-of-range values are clamped.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// GET /api/v1/pets/me/history
///
/// The pet's care log, newest first.
pub async fn get_history(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let pet = PetRepo::find_by_owner(&state.pool, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Pet",
            id: auth.user_id,
        })?;

    let page = params.page.unwrap_or(1).max(1);
    let page_size = params
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    // Saturate rather than overflow on absurd page numbers; an offset
    // past the last row just yields an empty page.
    let offset = (page - 1).saturating_mul(page_size);

    let entries = CareLogRepo::list_for_pet(&state.pool, pet.id, page_size, offset).await?;
    let total = CareLogRepo::count_for_pet_pool(&state.pool, pet.id).await?;

    Ok(Json(serde_json::json!({
        "data": {
            "entries": entries,
            "page": page,
            "page_size": page_size,
            "total": total,
        }
    })))
}
