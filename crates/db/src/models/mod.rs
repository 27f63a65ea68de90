pub mod achievement;
pub mod care_log;
pub mod item;
pub mod pet;
