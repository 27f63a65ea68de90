//! Repository for the `pet_items` catalog table.

use sqlx::PgPool;

use petkeeper_core::types::DbId;

use crate::models::item::PetItem;

/// Column list for `pet_items` queries.
const COLUMNS: &str = "id, name, item_kind, health_delta, hunger_delta, energy_delta, \
     happiness_delta, cleanliness_delta, experience_delta, is_active";

/// Read-only lookups over the care item catalog.
pub struct ItemRepo;

impl ItemRepo {
    /// Fetch an item by id. Inactive items are treated as missing.
    pub async fn find_active(pool: &PgPool, item_id: DbId) -> Result<Option<PetItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pet_items WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, PetItem>(&query)
            .bind(item_id)
            .fetch_optional(pool)
            .await
    }

    /// List all usable items, grouped by kind for stable display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<PetItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pet_items WHERE is_active = true ORDER BY item_kind, id"
        );
        sqlx::query_as::<_, PetItem>(&query).fetch_all(pool).await
    }
}
