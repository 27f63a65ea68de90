//! The leveling engine: a strictly increasing threshold curve and the
//! carry-over loop that converts accumulated experience into levels.

/// Experience required to advance from `level` to `level + 1`.
///
/// `level * 100 + (level - 1) * 50` — strictly increasing, and at
/// least 100 for level >= 1, so the level-up loop always terminates.
pub fn experience_to_next_level(level: i32) -> i64 {
    let level = level as i64;
    level * 100 + (level - 1) * 50
}

/// Result of resolving an experience gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: i32,
    pub experience: i64,
    /// Number of thresholds crossed by this gain (0 when no level-up).
    pub levels_gained: i32,
}

impl LevelProgress {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Add `gained` experience and resolve level-ups.
///
/// Supports multiple level-ups from a single gain: each crossing
/// subtracts the threshold and recomputes it for the new level. The
/// post-loop invariant is `experience < experience_to_next_level(level)`.
pub fn apply_experience(level: i32, experience: i64, gained: i64) -> LevelProgress {
    let mut level = level;
    let mut experience = experience + gained;
    let mut levels_gained = 0;

    while experience >= experience_to_next_level(level) {
        experience -= experience_to_next_level(level);
        level += 1;
        levels_gained += 1;
    }

    LevelProgress {
        level,
        experience,
        levels_gained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_curve_values() {
        assert_eq!(experience_to_next_level(1), 100);
        assert_eq!(experience_to_next_level(2), 250);
        assert_eq!(experience_to_next_level(3), 400);
        assert_eq!(experience_to_next_level(10), 1450);
    }

    #[test]
    fn threshold_is_strictly_increasing() {
        for level in 1..100 {
            assert!(experience_to_next_level(level + 1) > experience_to_next_level(level));
        }
    }

    #[test]
    fn small_gain_does_not_level() {
        let progress = apply_experience(1, 0, 30);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.experience, 30);
        assert!(!progress.leveled_up());
    }

    #[test]
    fn gain_of_250_at_level_one_stops_at_level_two() {
        // 250 >= 100 -> level 2, exp 150; 150 < 250 -> stop.
        let progress = apply_experience(1, 0, 250);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.experience, 150);
        assert_eq!(progress.levels_gained, 1);
    }

    #[test]
    fn gain_exactly_at_threshold_levels_with_zero_remainder() {
        let progress = apply_experience(1, 0, 100);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.experience, 0);
        assert_eq!(progress.levels_gained, 1);
    }

    #[test]
    fn large_gain_produces_multiple_level_ups() {
        // Thresholds from level 1: 100, 250, 400. A gain of 750 crosses all
        // three with nothing left over.
        let progress = apply_experience(1, 0, 750);
        assert_eq!(progress.level, 4);
        assert_eq!(progress.experience, 0);
        assert_eq!(progress.levels_gained, 3);
    }

    #[test]
    fn carry_over_respects_existing_experience() {
        let progress = apply_experience(2, 200, 100);
        // 300 >= 250 -> level 3, exp 50; 50 < 400 -> stop.
        assert_eq!(progress.level, 3);
        assert_eq!(progress.experience, 50);
    }

    #[test]
    fn post_loop_invariant_holds() {
        for gained in [0_i64, 1, 99, 100, 349, 350, 1000, 100_000] {
            let progress = apply_experience(1, 0, gained);
            assert!(
                progress.experience < experience_to_next_level(progress.level),
                "gain {gained}: exp {} not below threshold {}",
                progress.experience,
                experience_to_next_level(progress.level),
            );
        }
    }
}
