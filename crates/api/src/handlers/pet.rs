//! Handlers for the pet resource: lifecycle, cosmetics, achievements,
//! and statistics.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use petkeeper_db::models::pet::CreatePet;
use petkeeper_db::repositories::{AchievementRepo, CareLogRepo, PetRepo};

use crate::engine::pets;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use petkeeper_core::error::CoreError;

/// POST /api/v1/pets
///
/// Create the caller's pet. Fails with 409 if they already have one.
pub async fn create_pet(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePet>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let pet = pets::create_pet(&state.pool, auth.user_id, &input, Utc::now()).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": pet })),
    ))
}

/// GET /api/v1/pets/me
///
/// The caller's pet projection.
pub async fn get_pet(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let pet = pets::get_pet(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({ "data": pet })))
}

/// Body for `PUT /pets/me/color`.
#[derive(Debug, Deserialize)]
pub struct ChangeColor {
    pub color: String,
}

/// PUT /api/v1/pets/me/color
///
/// Overwrite the pet's color. No cooldown, no stat effect.
pub async fn change_color(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChangeColor>,
) -> AppResult<Json<serde_json::Value>> {
    let pet = pets::change_color(&state.pool, auth.user_id, &input.color).await?;

    Ok(Json(serde_json::json!({ "data": pet })))
}

/// GET /api/v1/pets/me/achievements
///
/// All achievement records for the caller's pet, locked and unlocked.
pub async fn get_achievements(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let pet = require_pet(&state, auth.user_id).await?;
    let achievements = AchievementRepo::list_for_pet(&state.pool, pet.id).await?;

    Ok(Json(serde_json::json!({ "data": achievements })))
}

/// GET /api/v1/pets/me/statistics
///
/// Aggregates over the pet's care history plus its progression state.
pub async fn get_statistics(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let pet = require_pet(&state, auth.user_id).await?;

    let by_action = CareLogRepo::stats_by_action(&state.pool, pet.id).await?;
    let total_actions: i64 = by_action.iter().map(|s| s.count).sum();
    let total_experience: i64 = by_action.iter().map(|s| s.experience_gained).sum();
    let total_points: i64 = by_action.iter().map(|s| s.points_earned).sum();
    let unlocked = AchievementRepo::count_unlocked(&state.pool, pet.id).await?;

    Ok(Json(serde_json::json!({
        "data": {
            "level": pet.level,
            "experience": pet.experience,
            "total_actions": total_actions,
            "total_experience_gained": total_experience,
            "total_points_earned": total_points,
            "unlocked_achievements": unlocked,
            "by_action": by_action,
        }
    })))
}

/// Resolve the caller's pet row or 404.
async fn require_pet(
    state: &AppState,
    owner_id: i64,
) -> AppResult<petkeeper_db::models::pet::Pet> {
    Ok(PetRepo::find_by_owner(&state.pool, owner_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Pet",
            id: owner_id,
        })?)
}
