//! The static achievement catalog and unlock predicates.
//!
//! Achievements are configuration, not code paths: the care-action
//! engine seeds every pet with the full catalog at creation and then
//! only evaluates predicates. Adding a new achievement means adding a
//! row here (and its predicate arm), nothing else.

/// One entry in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub points: i64,
}

pub const FIRST_STEPS: AchievementDef = AchievementDef {
    name: "First Steps",
    description: "Perform your first care action",
    category: "milestone",
    points: 10,
};

pub const LEVEL_5: AchievementDef = AchievementDef {
    name: "Level 5",
    description: "Reach level 5",
    category: "progression",
    points: 25,
};

pub const LEVEL_10: AchievementDef = AchievementDef {
    name: "Level 10",
    description: "Reach level 10",
    category: "progression",
    points: 50,
};

pub const CARE_MASTER: AchievementDef = AchievementDef {
    name: "Care Master",
    description: "Perform 100 care actions",
    category: "dedication",
    points: 100,
};

/// Every pet is seeded with exactly these records at creation.
pub const CATALOG: &[AchievementDef] = &[FIRST_STEPS, LEVEL_5, LEVEL_10, CARE_MASTER];

/// Lifetime care-action count required for Care Master.
pub const CARE_MASTER_ACTION_COUNT: i64 = 100;

/// Aggregate pet state the unlock predicates read.
#[derive(Debug, Clone, Copy)]
pub struct UnlockContext {
    pub level: i32,
    /// Lifetime count of care-log rows for the pet.
    pub total_actions: i64,
}

/// Whether the achievement named `name` is satisfied by `ctx`.
///
/// Unknown names are never satisfied; idempotence (not re-unlocking)
/// is the persistence layer's concern.
pub fn is_satisfied(name: &str, ctx: &UnlockContext) -> bool {
    match name {
        n if n == FIRST_STEPS.name => ctx.total_actions >= 1,
        n if n == LEVEL_5.name => ctx.level >= 5,
        n if n == LEVEL_10.name => ctx.level >= 10,
        n if n == CARE_MASTER.name => ctx.total_actions >= CARE_MASTER_ACTION_COUNT,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_seed_achievements() {
        assert_eq!(CATALOG.len(), 4);
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn first_steps_needs_one_action() {
        let ctx = UnlockContext {
            level: 1,
            total_actions: 0,
        };
        assert!(!is_satisfied("First Steps", &ctx));
        let ctx = UnlockContext {
            level: 1,
            total_actions: 1,
        };
        assert!(is_satisfied("First Steps", &ctx));
    }

    #[test]
    fn level_milestones_use_current_level() {
        let ctx = UnlockContext {
            level: 5,
            total_actions: 3,
        };
        assert!(is_satisfied("Level 5", &ctx));
        assert!(!is_satisfied("Level 10", &ctx));

        let ctx = UnlockContext {
            level: 12,
            total_actions: 3,
        };
        assert!(is_satisfied("Level 10", &ctx));
    }

    #[test]
    fn care_master_is_a_lifetime_counter() {
        let ctx = UnlockContext {
            level: 1,
            total_actions: 99,
        };
        assert!(!is_satisfied("Care Master", &ctx));
        let ctx = UnlockContext {
            level: 1,
            total_actions: 100,
        };
        assert!(is_satisfied("Care Master", &ctx));
    }

    #[test]
    fn unknown_achievement_is_never_satisfied() {
        let ctx = UnlockContext {
            level: 100,
            total_actions: 10_000,
        };
        assert!(!is_satisfied("Speedrunner", &ctx));
    }

    #[test]
    fn evaluating_twice_gives_the_same_answer() {
        let ctx = UnlockContext {
            level: 5,
            total_actions: 1,
        };
        assert_eq!(is_satisfied("Level 5", &ctx), is_satisfied("Level 5", &ctx));
    }
}
