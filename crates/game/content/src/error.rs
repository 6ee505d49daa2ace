//! Errors raised while validating content definitions.

use battle_core::DamageType;

/// Content that parsed fine but does not describe a playable battle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("unknown enemy archetype '{0}'")]
    UnknownArchetype(String),

    #[error("enemy archetype '{0}' is defined more than once")]
    DuplicateArchetype(String),

    #[error("spawn chain starting at '{0}' loops back on itself")]
    SpawnCycle(String),

    #[error("'{name}' has non-positive {damage_type} resistance")]
    NonPositiveResistance {
        name: String,
        damage_type: DamageType,
    },
}

pub type ContentResult<T> = Result<T, ContentError>;
