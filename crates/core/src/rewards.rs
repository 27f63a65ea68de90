//! Point reward formula for care actions.
//!
//! The engine only *computes* the amount; crediting is the wallet
//! collaborator's job, invoked once per successful action.

use crate::care::CareAction;

/// Experience-to-points divisor (integer division).
pub const EXPERIENCE_PER_POINT: i64 = 10;

impl CareAction {
    /// Flat point reward for performing this action at all.
    pub fn base_points(self) -> i64 {
        match self {
            Self::Feed => 5,
            Self::Play => 8,
            Self::Clean => 6,
            Self::Rest => 4,
        }
    }
}

/// Points earned by one action: `base + experience_gained / 10`.
pub fn points_earned(action: CareAction, experience_gained: i64) -> i64 {
    action.base_points() + experience_gained / EXPERIENCE_PER_POINT
}
