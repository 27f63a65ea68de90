pub mod admin;
pub mod care;
pub mod history;
pub mod items;
pub mod pet;
