//! Content entries invoked by actors during their turn.
//!
//! Entries are plain data. Their effects are applied by the battle through
//! the actors' public mutation API (`heal`, `take_damage`, `apply_aura`).

pub mod abilities;
pub mod items;

pub use abilities::{Ability, AbilityEffect, Spell};
pub use items::{Item, ItemTargeting, Weapon};
