//! Repository for the append-only `pet_care_logs` table.

use sqlx::{PgConnection, PgPool};

use petkeeper_core::types::DbId;

use crate::models::care_log::{ActionStats, CareLog, NewCareLog};

/// Column list for `pet_care_logs` queries.
const COLUMNS: &str = "id, pet_id, owner_id, action, description, \
     health_delta, hunger_delta, energy_delta, happiness_delta, cleanliness_delta, \
     experience_gained, points_earned, created_at";

/// Append and read the care action audit trail. Rows are never
/// updated or deleted.
pub struct CareLogRepo;

impl CareLogRepo {
    /// Append one log row, returning the generated id.
    pub async fn insert(conn: &mut PgConnection, log: &NewCareLog<'_>) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO pet_care_logs \
                 (pet_id, owner_id, action, description, \
                  health_delta, hunger_delta, energy_delta, happiness_delta, cleanliness_delta, \
                  experience_gained, points_earned, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING id",
        )
        .bind(log.pet_id)
        .bind(log.owner_id)
        .bind(log.action)
        .bind(log.description)
        .bind(log.deltas.health)
        .bind(log.deltas.hunger)
        .bind(log.deltas.energy)
        .bind(log.deltas.happiness)
        .bind(log.deltas.cleanliness)
        .bind(log.experience_gained)
        .bind(log.points_earned)
        .bind(log.created_at)
        .fetch_one(conn)
        .await
    }

    /// List log rows for a pet, newest first.
    pub async fn list_for_pet(
        pool: &PgPool,
        pet_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CareLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pet_care_logs \
             WHERE pet_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, CareLog>(&query)
            .bind(pet_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Lifetime count of log rows for a pet (the Care Master counter).
    ///
    /// Takes the transaction connection so the achievement evaluator
    /// sees the row appended by the current action.
    pub async fn count_for_pet(conn: &mut PgConnection, pet_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM pet_care_logs WHERE pet_id = $1")
                .bind(pet_id)
                .fetch_one(conn)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// Pool-based variant of [`Self::count_for_pet`] for read-only paths.
    pub async fn count_for_pet_pool(pool: &PgPool, pet_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM pet_care_logs WHERE pet_id = $1")
                .bind(pet_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// Per-action aggregates (count, experience, points) for a pet.
    pub async fn stats_by_action(
        pool: &PgPool,
        pet_id: DbId,
    ) -> Result<Vec<ActionStats>, sqlx::Error> {
        sqlx::query_as::<_, ActionStats>(
            "SELECT action, \
                    COUNT(*) AS count, \
                    COALESCE(SUM(experience_gained), 0)::BIGINT AS experience_gained, \
                    COALESCE(SUM(points_earned), 0)::BIGINT AS points_earned \
             FROM pet_care_logs \
             WHERE pet_id = $1 \
             GROUP BY action \
             ORDER BY action",
        )
        .bind(pet_id)
        .fetch_all(pool)
        .await
    }
}
