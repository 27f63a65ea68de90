//! Achievement entity model.

use serde::Serialize;
use sqlx::FromRow;

use petkeeper_core::types::{DbId, Timestamp};

/// A row from the `pet_achievements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PetAchievement {
    pub id: DbId,
    pub pet_id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub points: i64,
    pub is_unlocked: bool,
    pub unlocked_at: Option<Timestamp>,
}
