//! Pet lifecycle: creation (with achievement seeding) and cosmetic
//! updates.

use sqlx::PgPool;

use petkeeper_core::error::CoreError;
use petkeeper_core::types::{DbId, Timestamp};
use petkeeper_db::models::pet::CreatePet;
use petkeeper_db::repositories::{AchievementRepo, PetRepo};

use crate::error::{AppError, AppResult};

use super::PetView;

/// Bounds for free-text pet fields.
const MAX_NAME_LEN: usize = 50;
const MAX_COLOR_LEN: usize = 30;
const MAX_PERSONALITY_LEN: usize = 30;

fn validate_text(field: &'static str, value: &str, max_len: usize) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.len() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Create the owner's pet: one per owner, seeded with the full
/// achievement catalog, all stats 100/100, level 1, experience 0.
pub async fn create_pet(
    pool: &PgPool,
    owner_id: DbId,
    input: &CreatePet,
    now: Timestamp,
) -> AppResult<PetView> {
    validate_text("name", &input.name, MAX_NAME_LEN)?;
    validate_text("color", &input.color, MAX_COLOR_LEN)?;
    validate_text("personality", &input.personality, MAX_PERSONALITY_LEN)?;

    if PetRepo::find_by_owner(pool, owner_id).await?.is_some() {
        return Err(AppError::Core(CoreError::DuplicatePet { owner_id }));
    }

    // Insert and seed in one transaction; the uq_pets_owner_id
    // constraint still backstops a create/create race.
    let mut tx = pool.begin().await?;
    let pet = PetRepo::create(&mut *tx, owner_id, input, now).await?;
    AchievementRepo::seed(&mut *tx, pet.id).await?;
    tx.commit().await?;

    tracing::info!(owner_id, pet_id = pet.id, name = %pet.name, "Pet created");
    Ok(PetView::from(pet))
}

/// Fetch the owner's pet projection.
pub async fn get_pet(pool: &PgPool, owner_id: DbId) -> AppResult<PetView> {
    let pet = PetRepo::find_by_owner(pool, owner_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Pet",
            id: owner_id,
        })?;
    Ok(PetView::from(pet))
}

/// Overwrite the pet's color. No cooldown, no stat effect, no log row.
pub async fn change_color(pool: &PgPool, owner_id: DbId, color: &str) -> AppResult<PetView> {
    validate_text("color", color, MAX_COLOR_LEN)?;

    let pet = PetRepo::update_color(pool, owner_id, color.trim())
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Pet",
            id: owner_id,
        })?;
    Ok(PetView::from(pet))
}
