//! Time-driven stat decay rules.
//!
//! Decay is a pure function of the pet's `last_*` timestamps and the
//! current clock: thresholds are wall-clock-relative, not counter
//! based, so recomputing a pass from the same timestamps is idempotent.

use crate::stats::{StatBlock, StatDeltas};
use crate::types::Timestamp;

/// One decay dimension: grace period plus per-hour rate past it.
#[derive(Debug, Clone, Copy)]
pub struct DecayRule {
    pub threshold_hours: i64,
    pub rate_per_hour: i32,
}

/// Hunger decays against `last_fed`.
pub const HUNGER_DECAY: DecayRule = DecayRule {
    threshold_hours: 6,
    rate_per_hour: 5,
};

/// Happiness decays against `last_played`.
pub const HAPPINESS_DECAY: DecayRule = DecayRule {
    threshold_hours: 8,
    rate_per_hour: 3,
};

/// Cleanliness decays against `last_cleaned`.
pub const CLEANLINESS_DECAY: DecayRule = DecayRule {
    threshold_hours: 12,
    rate_per_hour: 4,
};

/// Energy decays against `last_rested`.
pub const ENERGY_DECAY: DecayRule = DecayRule {
    threshold_hours: 10,
    rate_per_hour: 6,
};

/// A stat below this value drags health down during a decay pass.
pub const LOW_STAT_THRESHOLD: i32 = 20;

/// Health penalty per pass when hunger is low.
pub const LOW_HUNGER_HEALTH_PENALTY: i32 = 2;
/// Health penalty per pass for each other low stat.
pub const LOW_STAT_HEALTH_PENALTY: i32 = 1;

/// The `last_*` timestamps decay reads.
#[derive(Debug, Clone, Copy)]
pub struct CareTimestamps {
    pub last_fed: Timestamp,
    pub last_played: Timestamp,
    pub last_cleaned: Timestamp,
    pub last_rested: Timestamp,
}

impl DecayRule {
    /// Stat reduction for `elapsed_hours` since the relevant action:
    /// `rate * (elapsed - threshold)`, zero inside the grace period.
    pub fn amount(&self, elapsed_hours: i64) -> i32 {
        let over = elapsed_hours - self.threshold_hours;
        if over <= 0 {
            return 0;
        }
        // Stat range is 0..=max, so saturate rather than overflow on
        // pathological elapsed values.
        i32::try_from(over)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.rate_per_hour)
    }
}

/// Whole elapsed hours between `since` and `now`, floored at zero.
pub fn elapsed_hours(since: Timestamp, now: Timestamp) -> i64 {
    (now - since).num_hours().max(0)
}

/// Compute the decay delta vector for one pet.
///
/// The four primary dimensions decay independently. The secondary
/// health penalty is evaluated against the stats *after* primary decay
/// (additive, once per pass, never raises health). The returned deltas
/// still go through the stat clamp when applied; `stats` is not
/// mutated here.
pub fn compute_decay(stats: &StatBlock, last: &CareTimestamps, now: Timestamp) -> StatDeltas {
    let mut deltas = StatDeltas {
        hunger: -HUNGER_DECAY.amount(elapsed_hours(last.last_fed, now)),
        happiness: -HAPPINESS_DECAY.amount(elapsed_hours(last.last_played, now)),
        cleanliness: -CLEANLINESS_DECAY.amount(elapsed_hours(last.last_cleaned, now)),
        energy: -ENERGY_DECAY.amount(elapsed_hours(last.last_rested, now)),
        health: 0,
    };

    let mut decayed = *stats;
    decayed.apply(&deltas);

    let mut health_penalty = 0;
    if decayed.hunger.current < LOW_STAT_THRESHOLD {
        health_penalty += LOW_HUNGER_HEALTH_PENALTY;
    }
    if decayed.happiness.current < LOW_STAT_THRESHOLD {
        health_penalty += LOW_STAT_HEALTH_PENALTY;
    }
    if decayed.cleanliness.current < LOW_STAT_THRESHOLD {
        health_penalty += LOW_STAT_HEALTH_PENALTY;
    }
    if decayed.energy.current < LOW_STAT_THRESHOLD {
        health_penalty += LOW_STAT_HEALTH_PENALTY;
    }
    deltas.health = -health_penalty;

    deltas
}
