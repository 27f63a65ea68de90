//! One decay pass over the full pet population.
//!
//! Pets are processed as independent units: each gets its own short
//! transaction holding its row lock, failures are counted and logged
//! without aborting the batch, and the batch runs with a bounded
//! concurrency limit rather than one giant transaction.

use futures::stream::{self, StreamExt};
use serde::Serialize;
use sqlx::PgPool;

use petkeeper_core::decay::compute_decay;
use petkeeper_core::types::{DbId, Timestamp};
use petkeeper_db::repositories::PetRepo;

/// Default number of pets decayed concurrently.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Summary of one decay pass.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DecaySummary {
    /// Pets examined.
    pub processed: u64,
    /// Pets whose stats actually changed.
    pub decayed: u64,
    /// Pets that failed (logged, retried on the next pass).
    pub failed: u64,
}

/// What happened to one pet during the pass.
enum PetOutcome {
    Unchanged,
    Decayed,
    Failed,
}

/// Run one decay pass over every pet.
///
/// `now` is the single clock reading for the whole pass, so two pets
/// processed seconds apart see the same elapsed hours. Fails only when
/// the candidate listing itself fails; per-pet failures are counted in
/// the summary instead.
pub async fn run_decay_pass(
    pool: &PgPool,
    now: Timestamp,
    concurrency: usize,
) -> Result<DecaySummary, sqlx::Error> {
    let pet_ids = PetRepo::list_ids(pool).await.inspect_err(|e| {
        tracing::error!(error = %e, "Decay pass: failed to list pets");
    })?;

    let outcomes: Vec<PetOutcome> = stream::iter(pet_ids)
        .map(|pet_id| async move {
            match decay_pet(pool, pet_id, now).await {
                Ok(changed) => {
                    if changed {
                        PetOutcome::Decayed
                    } else {
                        PetOutcome::Unchanged
                    }
                }
                Err(e) => {
                    tracing::error!(pet_id, error = %e, "Decay pass: pet failed");
                    PetOutcome::Failed
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut summary = DecaySummary::default();
    for outcome in outcomes {
        summary.processed += 1;
        match outcome {
            PetOutcome::Decayed => summary.decayed += 1,
            PetOutcome::Failed => summary.failed += 1,
            PetOutcome::Unchanged => {}
        }
    }

    tracing::info!(
        processed = summary.processed,
        decayed = summary.decayed,
        failed = summary.failed,
        "Decay pass complete"
    );
    Ok(summary)
}

/// Decay a single pet inside its own transaction.
///
/// Takes the pet's row lock so a concurrent care action cannot
/// interleave stat writes. Returns `true` if any stat changed. Decay
/// writes no care-log rows and credits no rewards.
async fn decay_pet(pool: &PgPool, pet_id: DbId, now: Timestamp) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(pet) = PetRepo::find_by_id_for_update(&mut *tx, pet_id).await? else {
        // Deleted between listing and locking; nothing to do.
        return Ok(false);
    };

    let mut stats = pet.stats();
    let deltas = compute_decay(&stats, &pet.care_timestamps(), now);
    if deltas.is_zero() {
        return Ok(false);
    }

    let applied = stats.apply(&deltas);
    if applied.is_zero() {
        // Everything already pinned at a bound.
        return Ok(false);
    }

    PetRepo::apply_decay(&mut *tx, pet_id, &stats, now).await?;
    tx.commit().await?;

    tracing::debug!(
        pet_id,
        hunger = applied.hunger,
        happiness = applied.happiness,
        cleanliness = applied.cleanliness,
        energy = applied.energy,
        health = applied.health,
        "Pet decayed"
    );
    Ok(true)
}
