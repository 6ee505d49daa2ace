//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! Randomness (the crit roll) is drawn by the caller and passed in, so every
//! function here is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `compute_damage`: The damage formula for one damage type
//! - `damage_for_type`: Formula inputs gathered from effective stats and tags
//! - `resolve_attack`: Both damage types, crit multiplier, rounding
//! - `round_damage`: Ties-to-even conversion to whole hit points

pub mod attack;
pub mod damage;

pub use attack::{
    AttackProfile, AttackResult, AttackTags, DamageLine, damage_for_type, resolve_attack,
};
pub use damage::{compute_damage, round_damage};
