//! Route handlers organized by resource

pub mod categories;
pub mod contractors;
pub mod events;
pub mod guests;
pub mod health;
