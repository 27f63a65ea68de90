//! The care & progression engine: orchestrates repositories, pure core
//! logic, and the wallet collaborator.
//!
//! Handlers stay thin; every state mutation goes through a function in
//! this module so the transaction and row-lock discipline lives in one
//! place.

pub mod care;
pub mod pets;

use serde::Serialize;

use petkeeper_core::leveling::experience_to_next_level;
use petkeeper_core::stats::StatBlock;
use petkeeper_core::types::{DbId, Timestamp};
use petkeeper_db::models::pet::Pet;

/// Client-facing pet projection: stat pairs, progression, and the
/// derived experience-to-next-level threshold.
#[derive(Debug, Clone, Serialize)]
pub struct PetView {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub personality: String,
    pub level: i32,
    pub experience: i64,
    pub experience_to_next_level: i64,
    pub stats: StatBlock,
    pub last_fed: Option<Timestamp>,
    pub last_played: Option<Timestamp>,
    pub last_cleaned: Option<Timestamp>,
    pub last_rested: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<Pet> for PetView {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id,
            experience_to_next_level: experience_to_next_level(pet.level),
            stats: pet.stats(),
            name: pet.name,
            color: pet.color,
            personality: pet.personality,
            level: pet.level,
            experience: pet.experience,
            last_fed: pet.last_fed,
            last_played: pet.last_played,
            last_cleaned: pet.last_cleaned,
            last_rested: pet.last_rested,
            created_at: pet.created_at,
        }
    }
}
