//! Deterministic battle rules shared by the runtime and clients.
//!
//! `battle-core` defines the stat key space, the aura ledger, the damage
//! formula, actors, catalog entries, the progression grid and the battle
//! scheduler. It performs no I/O: choices, randomness and narration are
//! injected through [`DecisionSource`], [`RngOracle`] and [`Reporter`].
pub mod actor;
pub mod aura;
pub mod battle;
pub mod catalog;
pub mod combat;
pub mod config;
pub mod decision;
pub mod error;
pub mod progression;
pub mod report;
pub mod rng;
pub mod stats;

pub use actor::{
    Actor, ActorKind, Behavior, DamageOutcome, EnemyArchetype, EnemyState, HitPoints, LifeState,
    PlayerState, Reaction, ResourceMeter,
};
pub use aura::{Aura, AuraLedger, EffectMap};
pub use battle::{ActorId, Battle, BattleContext, BattleStatus, PlayerAction};
pub use catalog::{Ability, AbilityEffect, Item, ItemTargeting, Spell, Weapon};
pub use combat::{
    AttackProfile, AttackResult, AttackTags, DamageLine, compute_damage, damage_for_type,
    resolve_attack, round_damage,
};
pub use config::{ActionCosts, BattleConfig};
pub use decision::{ChoiceKind, DecisionError, DecisionSource, FirstOption, ScriptedChoices};
pub use error::{BattleError, BattleResult, ErrorSeverity, GameError};
pub use progression::{
    CellEffect, CharacterBuilder, CharacterSheet, GridCell, PrayTemplate, ProgressionStat,
    choose_cells, default_pray_pool,
};
pub use report::{ActorSummary, BattleEvent, EventLog, Reporter};
pub use rng::{FixedRng, RngOracle, SeededRng};
pub use stats::{
    Aggregation, DamageType, EffectKey, EffectKind, EffectiveStats, StatKey, StatKind, StatLine,
    StatTable,
};
