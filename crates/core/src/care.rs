//! Care action taxonomy and the cooldown gate.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::items::{ItemEffect, ItemKind};
use crate::stats::StatDeltas;
use crate::types::Timestamp;

/// Fixed effect of Rest. Rest has no catalog item; its deltas are part
/// of the engine itself.
pub const REST_EFFECT: ItemEffect = ItemEffect {
    deltas: StatDeltas {
        health: 20,
        hunger: 0,
        energy: 50,
        happiness: 10,
        cleanliness: 0,
    },
    experience: 10,
};

/// A user-triggered, cooldown-gated care action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareAction {
    Feed,
    Play,
    Clean,
    Rest,
}

impl CareAction {
    /// Minimum wall-clock interval between two instances of this action.
    pub fn cooldown(self) -> Duration {
        match self {
            Self::Feed => Duration::hours(1),
            Self::Play => Duration::hours(2),
            Self::Clean => Duration::hours(3),
            Self::Rest => Duration::hours(4),
        }
    }

    /// The item kind this action consumes. Rest takes no item.
    pub fn expected_item_kind(self) -> Option<ItemKind> {
        match self {
            Self::Feed => Some(ItemKind::Food),
            Self::Play => Some(ItemKind::Toy),
            Self::Clean => Some(ItemKind::Cleaning),
            Self::Rest => None,
        }
    }

    /// Storage representation, matching the `pet_care_logs.action` CHECK.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Clean => "clean",
            Self::Rest => "rest",
        }
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CareAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feed" => Ok(Self::Feed),
            "play" => Ok(Self::Play),
            "clean" => Ok(Self::Clean),
            "rest" => Ok(Self::Rest),
            other => Err(format!("unknown care action: {other}")),
        }
    }
}

/// Enforce the cooldown gate for `action`.
///
/// `last` is the pet's `last_<action>` timestamp. Fails with
/// [`CoreError::TooSoon`] (carrying the remaining wait in seconds)
/// when the window has not yet elapsed.
pub fn check_cooldown(
    action: CareAction,
    last: Timestamp,
    now: Timestamp,
) -> Result<(), CoreError> {
    let elapsed = now - last;
    let cooldown = action.cooldown();
    if elapsed < cooldown {
        return Err(CoreError::TooSoon {
            action,
            retry_after_secs: (cooldown - elapsed).num_seconds(),
        });
    }
    Ok(())
}

/// Validate that `actual` is the item kind `action` consumes.
///
/// Only meaningful for Feed/Play/Clean; Rest never reaches this check.
pub fn check_item_kind(action: CareAction, actual: ItemKind) -> Result<(), CoreError> {
    match action.expected_item_kind() {
        Some(expected) if expected == actual => Ok(()),
        Some(expected) => Err(CoreError::TypeMismatch {
            action,
            expected,
            actual,
        }),
        None => Ok(()),
    }
}
