//! Pure domain logic for the virtual pet care & progression engine.
//!
//! No I/O lives here: every time-dependent function takes `now` as a
//! parameter so callers (and tests) control the clock. Persistence and
//! transport live in `petkeeper-db` and `petkeeper-api`.

pub mod achievements;
pub mod care;
pub mod decay;
pub mod error;
pub mod items;
pub mod leveling;
pub mod rewards;
pub mod stats;
pub mod types;
