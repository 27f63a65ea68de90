//! Repository for the `pets` table.
//!
//! Mutating functions take `&mut PgConnection` so the engine can run
//! them inside a transaction holding the pet's row lock; read paths
//! take the pool directly.

use sqlx::{PgConnection, PgPool};

use petkeeper_core::care::CareAction;
use petkeeper_core::stats::StatBlock;
use petkeeper_core::types::{DbId, Timestamp};

use crate::models::pet::{CreatePet, Pet};

/// Column list for `pets` queries.
const COLUMNS: &str = "id, owner_id, name, color, personality, level, experience, \
     health, health_max, hunger, hunger_max, energy, energy_max, \
     happiness, happiness_max, cleanliness, cleanliness_max, \
     last_fed, last_played, last_cleaned, last_rested, created_at, updated_at";

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a pet for `owner_id` with default stats. The `last_*`
    /// timestamps start NULL: no cooldown is running on a fresh pet.
    ///
    /// The `uq_pets_owner_id` constraint rejects a second pet for the
    /// same owner; the engine checks first to surface a domain error.
    pub async fn create(
        conn: &mut PgConnection,
        owner_id: DbId,
        input: &CreatePet,
        now: Timestamp,
    ) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets (owner_id, name, color, personality, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.color)
            .bind(&input.personality)
            .bind(now)
            .fetch_one(conn)
            .await
    }

    /// Fetch the pet owned by `owner_id`.
    pub async fn find_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE owner_id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the pet owned by `owner_id`, taking its row lock.
    ///
    /// Serializes concurrent care actions and decay passes on the same
    /// pet for the lifetime of the surrounding transaction.
    pub async fn find_by_owner_for_update(
        conn: &mut PgConnection,
        owner_id: DbId,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE owner_id = $1 FOR UPDATE");
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .fetch_optional(conn)
            .await
    }

    /// Fetch a pet by id, taking its row lock (decay pass).
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        pet_id: DbId,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Pet>(&query)
            .bind(pet_id)
            .fetch_optional(conn)
            .await
    }

    /// List every pet id, for the decay pass.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM pets ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Persist the outcome of a care action: new stats, progression,
    /// and the action's `last_*` timestamp.
    pub async fn apply_care(
        conn: &mut PgConnection,
        pet_id: DbId,
        stats: &StatBlock,
        level: i32,
        experience: i64,
        action: CareAction,
        now: Timestamp,
    ) -> Result<Pet, sqlx::Error> {
        let last_column = match action {
            CareAction::Feed => "last_fed",
            CareAction::Play => "last_played",
            CareAction::Clean => "last_cleaned",
            CareAction::Rest => "last_rested",
        };
        let query = format!(
            "UPDATE pets SET \
                 health = $2, hunger = $3, energy = $4, happiness = $5, cleanliness = $6, \
                 level = $7, experience = $8, {last_column} = $9, updated_at = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(pet_id)
            .bind(stats.health.current)
            .bind(stats.hunger.current)
            .bind(stats.energy.current)
            .bind(stats.happiness.current)
            .bind(stats.cleanliness.current)
            .bind(level)
            .bind(experience)
            .bind(now)
            .fetch_one(conn)
            .await
    }

    /// Persist decayed stats. Decay touches no `last_*` timestamp and
    /// no progression counter.
    pub async fn apply_decay(
        conn: &mut PgConnection,
        pet_id: DbId,
        stats: &StatBlock,
        now: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE pets SET \
                 health = $2, hunger = $3, energy = $4, happiness = $5, cleanliness = $6, \
                 updated_at = $7 \
             WHERE id = $1",
        )
        .bind(pet_id)
        .bind(stats.health.current)
        .bind(stats.hunger.current)
        .bind(stats.energy.current)
        .bind(stats.happiness.current)
        .bind(stats.cleanliness.current)
        .bind(now)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Overwrite the pet's color. No cooldown, no stat effect.
    pub async fn update_color(
        pool: &PgPool,
        owner_id: DbId,
        color: &str,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET color = $2, updated_at = NOW() \
             WHERE owner_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .bind(color)
            .fetch_optional(pool)
            .await
    }
}
