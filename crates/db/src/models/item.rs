//! Care item catalog entity model.

use serde::Serialize;
use sqlx::FromRow;

use petkeeper_core::items::{ItemEffect, ItemKind};
use petkeeper_core::stats::StatDeltas;
use petkeeper_core::types::DbId;

/// A row from the `pet_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PetItem {
    pub id: DbId,
    pub name: String,
    pub item_kind: String,
    pub health_delta: i32,
    pub hunger_delta: i32,
    pub energy_delta: i32,
    pub happiness_delta: i32,
    pub cleanliness_delta: i32,
    pub experience_delta: i32,
    pub is_active: bool,
}

impl PetItem {
    /// Parse the stored kind string into the domain enum.
    ///
    /// The column carries a CHECK constraint, so a parse failure means
    /// schema drift rather than bad user input.
    pub fn kind(&self) -> Result<ItemKind, String> {
        self.item_kind.parse()
    }

    /// The item's full effect vector.
    pub fn effect(&self) -> ItemEffect {
        ItemEffect {
            deltas: StatDeltas {
                health: self.health_delta,
                hunger: self.hunger_delta,
                energy: self.energy_delta,
                happiness: self.happiness_delta,
                cleanliness: self.cleanliness_delta,
            },
            experience: self.experience_delta as i64,
        }
    }
}
