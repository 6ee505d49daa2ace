//! Data-driven battle content and its loaders.
//!
//! This crate holds the enemy roster, the starting character, the skill grid
//! and the battle rules as RON/TOML data, plus loaders that turn them into
//! `battle-core` types:
//! - Enemy archetypes, with brood spawns referenced by name (RON)
//! - Starting character sheet, pray pool and inventory (RON)
//! - Skill grid (RON)
//! - Battle configuration (TOML)
//!
//! The files under `data/` are also compiled in and available through
//! [`ContentSet::builtin`].

pub mod character;
pub mod error;
pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use character::CharacterSpec;
pub use error::{ContentError, ContentResult};
pub use roster::{BehaviorSpec, EnemySpec, Roster};

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterLoader, ConfigLoader, ContentFactory, ContentSet, GridLoader, LoadResult,
    RosterLoader,
};
