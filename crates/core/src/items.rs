//! Care item taxonomy.
//!
//! The catalog itself is reference data in the `pet_items` table; this
//! module owns the kind enum and the effect vector an item carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::stats::StatDeltas;

/// The kind of a care item. Rest is an action without an item, so it
/// has no kind here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Food,
    Toy,
    Cleaning,
}

impl ItemKind {
    /// Storage representation, matching the `pet_items.item_kind` CHECK.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Toy => "toy",
            Self::Cleaning => "cleaning",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(Self::Food),
            "toy" => Ok(Self::Toy),
            "cleaning" => Ok(Self::Cleaning),
            other => Err(format!("unknown item kind: {other}")),
        }
    }
}

/// An item's full effect: the stat delta vector plus experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEffect {
    pub deltas: StatDeltas,
    pub experience: i64,
}
