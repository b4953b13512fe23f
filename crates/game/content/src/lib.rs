//! Built-in game content.
//!
//! This crate houses the stock enemy, item, tile, and shop-offering
//! definitions, each expressed through the behaviour traits in
//! `corridor-core`. Content is consumed by runtime oracles and never appears
//! in game state; adding a new enemy or offering means registering another
//! definition here (or in a downstream crate) without touching dispatch
//! code.
mod enemies;
mod items;
mod offerings;
mod tiles;

pub use enemies::{BatPattern, SlimePattern, WizardPattern, builtin_enemies};
pub use items::{builtin_items, HEALTH_POTION, THROWING_DAGGER};
pub use offerings::builtin_offerings;
pub use tiles::builtin_tiles;
