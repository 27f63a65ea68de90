//! Care log entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use petkeeper_core::stats::StatDeltas;
use petkeeper_core::types::{DbId, Timestamp};

/// A row from the append-only `pet_care_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CareLog {
    pub id: DbId,
    pub pet_id: DbId,
    pub owner_id: DbId,
    pub action: String,
    pub description: String,
    pub health_delta: i32,
    pub hunger_delta: i32,
    pub energy_delta: i32,
    pub happiness_delta: i32,
    pub cleanliness_delta: i32,
    pub experience_gained: i64,
    pub points_earned: i64,
    pub created_at: Timestamp,
}

/// Values for one new log row. `created_at` is supplied by the caller
/// so the row carries the same clock reading as the stat mutation.
#[derive(Debug, Clone)]
pub struct NewCareLog<'a> {
    pub pet_id: DbId,
    pub owner_id: DbId,
    pub action: &'static str,
    pub description: &'a str,
    pub deltas: StatDeltas,
    pub experience_gained: i64,
    pub points_earned: i64,
    pub created_at: Timestamp,
}

/// Per-action aggregate used by the statistics endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActionStats {
    pub action: String,
    pub count: i64,
    pub experience_gained: i64,
    pub points_earned: i64,
}
