//! Pet entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use petkeeper_core::decay::CareTimestamps;
use petkeeper_core::stats::{Stat, StatBlock};
use petkeeper_core::types::{DbId, Timestamp};

/// A row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub color: String,
    pub personality: String,

    pub level: i32,
    pub experience: i64,

    pub health: i32,
    pub health_max: i32,
    pub hunger: i32,
    pub hunger_max: i32,
    pub energy: i32,
    pub energy_max: i32,
    pub happiness: i32,
    pub happiness_max: i32,
    pub cleanliness: i32,
    pub cleanliness_max: i32,

    pub last_fed: Option<Timestamp>,
    pub last_played: Option<Timestamp>,
    pub last_cleaned: Option<Timestamp>,
    pub last_rested: Option<Timestamp>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Pet {
    /// View the stat columns as a domain [`StatBlock`].
    pub fn stats(&self) -> StatBlock {
        StatBlock {
            health: Stat {
                current: self.health,
                max: self.health_max,
            },
            hunger: Stat {
                current: self.hunger,
                max: self.hunger_max,
            },
            energy: Stat {
                current: self.energy,
                max: self.energy_max,
            },
            happiness: Stat {
                current: self.happiness,
                max: self.happiness_max,
            },
            cleanliness: Stat {
                current: self.cleanliness,
                max: self.cleanliness_max,
            },
        }
    }

    /// The `last_*` timestamps the decay rules read.
    ///
    /// An action never performed anchors at `created_at`: a neglected
    /// newborn pet starts decaying from birth, not from epoch.
    pub fn care_timestamps(&self) -> CareTimestamps {
        CareTimestamps {
            last_fed: self.last_fed.unwrap_or(self.created_at),
            last_played: self.last_played.unwrap_or(self.created_at),
            last_cleaned: self.last_cleaned.unwrap_or(self.created_at),
            last_rested: self.last_rested.unwrap_or(self.created_at),
        }
    }
}

/// DTO for creating a pet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePet {
    pub name: String,
    pub color: String,
    pub personality: String,
}
