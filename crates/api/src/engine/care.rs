//! The care action processor.
//!
//! One entry point, [`perform_care`], implements the full contract for
//! Feed/Play/Clean/Rest: cooldown gate, item compatibility, clamped
//! stat deltas, leveling, log append, wallet credit, and achievement
//! evaluation — all inside a single transaction holding the pet's row
//! lock. If the wallet credit fails the whole unit rolls back, so a
//! pet can never level up without its points being credited.

use std::sync::Arc;

use serde::Serialize;
use sqlx::PgPool;

use petkeeper_core::achievements::{self, UnlockContext};
use petkeeper_core::care::{self, CareAction, REST_EFFECT};
use petkeeper_core::error::CoreError;
use petkeeper_core::items::ItemEffect;
use petkeeper_core::leveling::apply_experience;
use petkeeper_core::rewards::points_earned;
use petkeeper_core::stats::StatDeltas;
use petkeeper_core::types::{DbId, Timestamp};
use petkeeper_db::models::care_log::NewCareLog;
use petkeeper_db::repositories::{AchievementRepo, CareLogRepo, ItemRepo, PetRepo};

use crate::error::{AppError, AppResult};
use crate::wallet::WalletClient;

use super::PetView;

/// Outcome of one successful care action, returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CareOutcome {
    pub pet: PetView,
    pub action: CareAction,
    /// Effective stat deltas after clamping.
    pub applied: StatDeltas,
    pub experience_gained: i64,
    pub leveled_up: bool,
    pub levels_gained: i32,
    pub points_earned: i64,
    /// Achievement names newly unlocked by this action.
    pub unlocked_achievements: Vec<String>,
}

/// Perform one care action for the owner's pet.
///
/// `item_id` is required for Feed/Play/Clean and ignored for Rest.
pub async fn perform_care(
    pool: &PgPool,
    wallet: &Arc<dyn WalletClient>,
    owner_id: DbId,
    action: CareAction,
    item_id: Option<DbId>,
    now: Timestamp,
) -> AppResult<CareOutcome> {
    // Resolve the effect vector before touching the pet row: catalog
    // lookups are read-only and item validation failures must not
    // hold the row lock.
    let (effect, description) = resolve_effect(pool, action, item_id).await?;

    let mut tx = pool.begin().await?;

    let pet = PetRepo::find_by_owner_for_update(&mut *tx, owner_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Pet",
            id: owner_id,
        })?;

    // No cooldown runs for an action never performed on this pet.
    let last = match action {
        CareAction::Feed => pet.last_fed,
        CareAction::Play => pet.last_played,
        CareAction::Clean => pet.last_cleaned,
        CareAction::Rest => pet.last_rested,
    };
    if let Some(last) = last {
        care::check_cooldown(action, last, now)?;
    }

    // Apply deltas (each independently clamped) and resolve level-ups.
    let mut stats = pet.stats();
    let applied = stats.apply(&effect.deltas);
    let progress = apply_experience(pet.level, pet.experience, effect.experience);
    let points = points_earned(action, effect.experience);

    let updated = PetRepo::apply_care(
        &mut *tx,
        pet.id,
        &stats,
        progress.level,
        progress.experience,
        action,
        now,
    )
    .await?;

    CareLogRepo::insert(
        &mut *tx,
        &NewCareLog {
            pet_id: pet.id,
            owner_id,
            action: action.as_str(),
            description: &description,
            deltas: applied,
            experience_gained: effect.experience,
            points_earned: points,
            created_at: now,
        },
    )
    .await?;

    // Evaluate achievements against the post-action aggregate state.
    let total_actions = CareLogRepo::count_for_pet(&mut *tx, pet.id).await?;
    let ctx = UnlockContext {
        level: progress.level,
        total_actions,
    };
    let mut unlocked = Vec::new();
    for name in AchievementRepo::locked_names(&mut *tx, pet.id).await? {
        if achievements::is_satisfied(&name, &ctx)
            && AchievementRepo::unlock(&mut *tx, pet.id, &name, now).await?
        {
            tracing::info!(pet_id = pet.id, achievement = %name, "Achievement unlocked");
            unlocked.push(name);
        }
    }

    // Credit the wallet while the transaction is still open: a failure
    // here drops the transaction and rolls back the stat, log, and
    // achievement writes.
    wallet
        .credit(owner_id, points)
        .await
        .map_err(|e| CoreError::RewardCreditFailed(e.to_string()))?;

    tx.commit().await?;

    tracing::info!(
        owner_id,
        pet_id = pet.id,
        action = %action,
        experience_gained = effect.experience,
        points_earned = points,
        leveled_up = progress.leveled_up(),
        "Care action applied"
    );

    Ok(CareOutcome {
        pet: PetView::from(updated),
        action,
        applied,
        experience_gained: effect.experience,
        leveled_up: progress.leveled_up(),
        levels_gained: progress.levels_gained,
        points_earned: points,
        unlocked_achievements: unlocked,
    })
}

/// Resolve the effect vector and log description for an action.
///
/// Feed/Play/Clean consume a catalog item of the matching kind; Rest
/// uses the engine's fixed effect.
async fn resolve_effect(
    pool: &PgPool,
    action: CareAction,
    item_id: Option<DbId>,
) -> AppResult<(ItemEffect, String)> {
    let Some(expected) = action.expected_item_kind() else {
        return Ok((REST_EFFECT, "Took a well-earned rest".to_string()));
    };

    let item_id = item_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "{action} requires an item_id"
        )))
    })?;

    let item = ItemRepo::find_active(pool, item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "PetItem",
            id: item_id,
        })?;

    let actual = item
        .kind()
        .map_err(|e| AppError::Core(CoreError::Internal(e)))?;
    if actual != expected {
        return Err(AppError::Core(CoreError::TypeMismatch {
            action,
            expected,
            actual,
        }));
    }

    let description = format!("Used {}", item.name);
    Ok((item.effect(), description))
}
