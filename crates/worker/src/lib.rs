//! Decay scheduler: the periodic batch process that ages every pet's
//! stats based on elapsed wall-clock time.
//!
//! The library exposes a single [`decay::run_decay_pass`] so both the
//! worker binary (on a timer) and the API's administrative trigger run
//! the exact same pass.

pub mod decay;
