use crate::care::CareAction;
use crate::items::ItemKind;
use crate::types::DbId;

/// Domain error taxonomy shared by the engine, persistence, and API layers.
///
/// The first four variants are terminal validation failures: when one is
/// returned, no state has been mutated. `RewardCreditFailed` is returned
/// after the care-action transaction has been rolled back.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{action} requires a {expected} item, got {actual}")]
    TypeMismatch {
        action: CareAction,
        expected: ItemKind,
        actual: ItemKind,
    },

    #[error("{action} is on cooldown for another {retry_after_secs}s")]
    TooSoon {
        action: CareAction,
        retry_after_secs: i64,
    },

    #[error("Owner {owner_id} already has a pet")]
    DuplicatePet { owner_id: DbId },

    #[error("Reward credit failed: {0}")]
    RewardCreditFailed(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
