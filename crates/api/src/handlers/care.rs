//! Handlers for the four care actions.
//!
//! Each endpoint delegates to [`crate::engine::care::perform_care`],
//! which owns the transaction and cooldown discipline.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use petkeeper_core::care::CareAction;
use petkeeper_core::types::DbId;

use crate::engine::care::perform_care;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Body for the item-consuming actions (feed, play, clean).
#[derive(Debug, Deserialize)]
pub struct ItemAction {
    pub item_id: DbId,
}

/// POST /api/v1/pets/me/feed
pub async fn feed(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ItemAction>,
) -> AppResult<Json<serde_json::Value>> {
    item_action(state, auth, CareAction::Feed, input.item_id).await
}

/// POST /api/v1/pets/me/play
pub async fn play(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ItemAction>,
) -> AppResult<Json<serde_json::Value>> {
    item_action(state, auth, CareAction::Play, input.item_id).await
}

/// POST /api/v1/pets/me/clean
pub async fn clean(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ItemAction>,
) -> AppResult<Json<serde_json::Value>> {
    item_action(state, auth, CareAction::Clean, input.item_id).await
}

/// POST /api/v1/pets/me/rest
///
/// Rest consumes no item; its effect is fixed by the engine.
pub async fn rest(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let outcome = perform_care(
        &state.pool,
        &state.wallet,
        auth.user_id,
        CareAction::Rest,
        None,
        Utc::now(),
    )
    .await?;

    Ok(Json(serde_json::json!({ "data": outcome })))
}

async fn item_action(
    state: AppState,
    auth: AuthUser,
    action: CareAction,
    item_id: DbId,
) -> AppResult<Json<serde_json::Value>> {
    let outcome = perform_care(
        &state.pool,
        &state.wallet,
        auth.user_id,
        action,
        Some(item_id),
        Utc::now(),
    )
    .await?;

    Ok(Json(serde_json::json!({ "data": outcome })))
}
