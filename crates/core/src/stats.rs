//! The five bounded pet resources and the clamp rule.
//!
//! Every mutation, whether from a care action or from decay, goes
//! through [`Stat::apply_delta`] so `0 <= current <= max` holds at all
//! times. Nothing in the engine writes a stat directly.

use serde::{Deserialize, Serialize};

/// Default cap and starting value for every stat on a freshly created pet.
pub const STAT_DEFAULT_MAX: i32 = 100;

// ---------------------------------------------------------------------------
// Single stat
// ---------------------------------------------------------------------------

/// One bounded resource: a current value and its cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub current: i32,
    pub max: i32,
}

impl Stat {
    /// A stat at its cap.
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Apply a signed delta, clamping the result to `[0, max]`.
    ///
    /// Returns the *effective* delta after clamping, which may be
    /// smaller in magnitude than the requested one (zero when already
    /// at the relevant bound).
    pub fn apply_delta(&mut self, delta: i32) -> i32 {
        let before = self.current;
        self.current = (before.saturating_add(delta)).clamp(0, self.max);
        self.current - before
    }
}

// ---------------------------------------------------------------------------
// Delta vector
// ---------------------------------------------------------------------------

/// A signed delta for each of the five stats.
///
/// Used both for item effect vectors and for the applied-delta record
/// written to the care log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDeltas {
    pub health: i32,
    pub hunger: i32,
    pub energy: i32,
    pub happiness: i32,
    pub cleanliness: i32,
}

impl StatDeltas {
    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Full stat block
// ---------------------------------------------------------------------------

/// The five stat pairs of one pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: Stat,
    pub hunger: Stat,
    pub energy: Stat,
    pub happiness: Stat,
    pub cleanliness: Stat,
}

impl StatBlock {
    /// A new pet's stats: everything at 100/100.
    pub fn new_pet() -> Self {
        Self {
            health: Stat::full(STAT_DEFAULT_MAX),
            hunger: Stat::full(STAT_DEFAULT_MAX),
            energy: Stat::full(STAT_DEFAULT_MAX),
            happiness: Stat::full(STAT_DEFAULT_MAX),
            cleanliness: Stat::full(STAT_DEFAULT_MAX),
        }
    }

    /// Apply a delta vector, each component independently clamped.
    ///
    /// Returns the effective deltas actually applied.
    pub fn apply(&mut self, deltas: &StatDeltas) -> StatDeltas {
        StatDeltas {
            health: self.health.apply_delta(deltas.health),
            hunger: self.hunger.apply_delta(deltas.hunger),
            energy: self.energy.apply_delta(deltas.energy),
            happiness: self.happiness.apply_delta(deltas.happiness),
            cleanliness: self.cleanliness.apply_delta(deltas.cleanliness),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_within_bounds_applies_fully() {
        let mut stat = Stat { current: 50, max: 100 };
        assert_eq!(stat.apply_delta(30), 30);
        assert_eq!(stat.current, 80);
    }

    #[test]
    fn positive_delta_clamps_at_max() {
        let mut stat = Stat { current: 90, max: 100 };
        assert_eq!(stat.apply_delta(30), 10);
        assert_eq!(stat.current, 100);
    }

    #[test]
    fn positive_delta_at_max_is_noop() {
        let mut stat = Stat::full(100);
        assert_eq!(stat.apply_delta(50), 0);
        assert_eq!(stat.current, 100);
    }

    #[test]
    fn negative_delta_clamps_at_zero() {
        let mut stat = Stat { current: 5, max: 100 };
        assert_eq!(stat.apply_delta(-20), -5);
        assert_eq!(stat.current, 0);
    }

    #[test]
    fn block_applies_each_component_independently() {
        let mut stats = StatBlock::new_pet();
        stats.hunger.current = 40;
        stats.energy.current = 10;

        let applied = stats.apply(&StatDeltas {
            health: 10,     // at max, clamps to 0
            hunger: 30,     // fits
            energy: -25,    // clamps to -10
            happiness: 0,
            cleanliness: -5,
        });

        assert_eq!(applied.health, 0);
        assert_eq!(applied.hunger, 30);
        assert_eq!(applied.energy, -10);
        assert_eq!(applied.cleanliness, -5);
        assert_eq!(stats.hunger.current, 70);
        assert_eq!(stats.energy.current, 0);
        assert_eq!(stats.cleanliness.current, 95);
    }

    #[test]
    fn bounds_hold_after_extreme_deltas() {
        let mut stats = StatBlock::new_pet();
        stats.apply(&StatDeltas {
            health: i32::MAX,
            hunger: i32::MIN,
            energy: -1000,
            happiness: 1000,
            cleanliness: 0,
        });
        for stat in [
            stats.health,
            stats.hunger,
            stats.energy,
            stats.happiness,
            stats.cleanliness,
        ] {
            assert!(stat.current >= 0 && stat.current <= stat.max);
        }
    }
}
