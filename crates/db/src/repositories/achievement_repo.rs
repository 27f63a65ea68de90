//! Repository for the `pet_achievements` table.

use sqlx::{PgConnection, PgPool};

use petkeeper_core::achievements;
use petkeeper_core::types::{DbId, Timestamp};

use crate::models::achievement::PetAchievement;

/// Column list for `pet_achievements` queries.
const COLUMNS: &str =
    "id, pet_id, name, description, category, points, is_unlocked, unlocked_at";

/// Seed, list, and unlock per-pet achievement records.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Seed a freshly created pet with the full static catalog, all locked.
    pub async fn seed(conn: &mut PgConnection, pet_id: DbId) -> Result<(), sqlx::Error> {
        for def in achievements::CATALOG {
            sqlx::query(
                "INSERT INTO pet_achievements (pet_id, name, description, category, points) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(pet_id)
            .bind(def.name)
            .bind(def.description)
            .bind(def.category)
            .bind(def.points)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// List all achievement records for a pet, locked and unlocked.
    pub async fn list_for_pet(
        pool: &PgPool,
        pet_id: DbId,
    ) -> Result<Vec<PetAchievement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pet_achievements WHERE pet_id = $1 ORDER BY id");
        sqlx::query_as::<_, PetAchievement>(&query)
            .bind(pet_id)
            .fetch_all(pool)
            .await
    }

    /// Names of still-locked achievements for a pet, read under the
    /// care-action transaction.
    pub async fn locked_names(
        conn: &mut PgConnection,
        pet_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT name FROM pet_achievements \
             WHERE pet_id = $1 AND is_unlocked = false \
             ORDER BY id",
        )
        .bind(pet_id)
        .fetch_all(conn)
        .await
    }

    /// Unlock one achievement, stamping `unlocked_at` exactly once.
    ///
    /// The `is_unlocked = false` guard makes the transition monotonic
    /// and idempotent: a second unlock attempt affects zero rows.
    pub async fn unlock(
        conn: &mut PgConnection,
        pet_id: DbId,
        name: &str,
        now: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE pet_achievements \
             SET is_unlocked = true, unlocked_at = $3 \
             WHERE pet_id = $1 AND name = $2 AND is_unlocked = false",
        )
        .bind(pet_id)
        .bind(name)
        .bind(now)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of unlocked achievements for a pet.
    pub async fn count_unlocked(pool: &PgPool, pet_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pet_achievements WHERE pet_id = $1 AND is_unlocked = true",
        )
        .bind(pet_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
