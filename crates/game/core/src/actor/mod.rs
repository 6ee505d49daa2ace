//! Battle participants.
//!
//! An [`Actor`] owns everything that changes during a fight: hit points,
//! auras, and the variant-specific state in [`ActorKind`]. Policy (what an
//! actor does on its turn) lives in the battle scheduler, which matches on
//! the kind.

pub mod enemy;
pub mod player;
pub mod vitals;

pub use enemy::{Behavior, EnemyArchetype, EnemyState, Reaction};
pub use player::PlayerState;
pub use vitals::{DamageOutcome, HitPoints, LifeState, ResourceMeter};

use crate::aura::{Aura, AuraLedger};
use crate::combat::{AttackProfile, AttackTags, DamageLine};
use crate::stats::{DamageType, EffectiveStats, StatTable};

/// Variant-specific state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player(PlayerState),
    Enemy(EnemyState),
}

/// A participant in a battle.
///
/// # Invariants
///
/// - `hp` never exceeds its maximum and never goes below zero.
/// - Death is one-way (see [`HitPoints`]).
/// - Auras are owned here and nowhere else.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub name: String,
    pub speed: i32,
    hp: HitPoints,
    pub stats: StatTable,
    pub auras: AuraLedger,
    pub kind: ActorKind,
}

impl Actor {
    /// Unarmed players hit for 1 physical, channelling physical only.
    pub const UNARMED_DAMAGE: DamageLine = DamageLine::new(1.0, 0.0);
    pub const UNARMED_TAGS: AttackTags = AttackTags::PHYSICAL;

    pub fn player(
        name: impl Into<String>,
        max_hp: u32,
        speed: i32,
        stats: StatTable,
        state: PlayerState,
    ) -> Self {
        Self {
            name: name.into(),
            speed,
            hp: HitPoints::full(max_hp),
            stats,
            auras: AuraLedger::new(),
            kind: ActorKind::Player(state),
        }
    }

    /// Fresh instance of `archetype` at full hp under `name`.
    pub fn enemy(name: impl Into<String>, archetype: EnemyArchetype) -> Self {
        Self {
            name: name.into(),
            speed: archetype.speed,
            hp: HitPoints::full(archetype.max_hp),
            stats: archetype.stats,
            auras: AuraLedger::new(),
            kind: ActorKind::Enemy(EnemyState { archetype }),
        }
    }

    pub fn from_archetype(archetype: EnemyArchetype) -> Self {
        Self::enemy(archetype.name.clone(), archetype)
    }

    pub const fn hp(&self) -> u32 {
        self.hp.current()
    }

    pub const fn max_hp(&self) -> u32 {
        self.hp.maximum()
    }

    pub const fn is_alive(&self) -> bool {
        self.hp.is_alive()
    }

    pub const fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player(_))
    }

    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        self.hp.take_damage(amount)
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.heal(amount)
    }

    /// Damage that halves current hp, rounding the remainder down.
    /// Kills an actor at 1 hp.
    pub const fn halving_damage(&self) -> u32 {
        let current = self.hp();
        current - current / 2
    }

    pub fn apply_aura(&mut self, aura: Aura) {
        self.auras.push(aura);
    }

    /// End-of-turn aura decay. Returns expired auras in insertion order.
    pub fn decrement_auras(&mut self) -> Vec<Aura> {
        self.auras.decrement()
    }

    pub fn effective(&self) -> EffectiveStats<'_> {
        EffectiveStats::new(&self.stats, &self.auras)
    }

    /// Base damage for one type: weapon, unarmed default, or archetype table.
    pub fn base_damage(&self, damage_type: DamageType) -> f64 {
        self.attack_profile().base_damage.get(damage_type)
    }

    pub fn attack_tags(&self) -> AttackTags {
        self.attack_profile().tags
    }

    pub fn attack_profile(&self) -> AttackProfile {
        match &self.kind {
            ActorKind::Player(player) => match &player.equipped {
                Some(weapon) => AttackProfile {
                    base_damage: weapon.base_damage,
                    tags: weapon.tags,
                },
                None => AttackProfile {
                    base_damage: Self::UNARMED_DAMAGE,
                    tags: Self::UNARMED_TAGS,
                },
            },
            ActorKind::Enemy(enemy) => AttackProfile {
                base_damage: enemy.archetype.base_damage,
                tags: enemy.archetype.attack_tags,
            },
        }
    }

    pub fn interaction(&self) -> Option<Reaction> {
        match &self.kind {
            ActorKind::Enemy(enemy) => enemy.archetype.interaction,
            ActorKind::Player(_) => None,
        }
    }

    pub fn is_interactable(&self) -> bool {
        self.interaction().is_some()
    }

    pub fn counter_damage(&self) -> Option<u32> {
        match &self.kind {
            ActorKind::Enemy(enemy) => enemy.archetype.behavior.counter_damage(),
            ActorKind::Player(_) => None,
        }
    }

    pub const fn as_player(&self) -> Option<&PlayerState> {
        match &self.kind {
            ActorKind::Player(player) => Some(player),
            ActorKind::Enemy(_) => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerState> {
        match &mut self.kind {
            ActorKind::Player(player) => Some(player),
            ActorKind::Enemy(_) => None,
        }
    }

    pub const fn as_enemy(&self) -> Option<&EnemyState> {
        match &self.kind {
            ActorKind::Enemy(enemy) => Some(enemy),
            ActorKind::Player(_) => None,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aura::EffectMap;
    use crate::catalog::Weapon;
    use crate::stats::{EffectKind, StatKind};

    fn hero() -> Actor {
        Actor::player("Anzacel", 10, 10, StatTable::default(), PlayerState::new(10))
    }

    #[test]
    fn unarmed_then_weapon_profile() {
        let mut actor = hero();
        assert_eq!(actor.base_damage(DamageType::Physical), 1.0);
        assert_eq!(actor.base_damage(DamageType::Special), 0.0);
        assert_eq!(actor.attack_tags(), AttackTags::PHYSICAL);

        if let Some(player) = actor.as_player_mut() {
            player.equip(Weapon::focus("Magic wand", 2.0));
        }
        assert_eq!(actor.base_damage(DamageType::Special), 2.0);
        assert_eq!(actor.attack_tags(), AttackTags::SPECIAL);
    }

    #[test]
    fn enemy_uses_archetype_table() {
        let bug = Actor::from_archetype(EnemyArchetype::lil_bug());
        assert_eq!(bug.name, "lil bug");
        assert_eq!(bug.hp(), 5);
        assert_eq!(bug.speed, 8);
        assert!(bug.is_interactable());
        assert_eq!(bug.base_damage(DamageType::Physical), 1.0);
        assert!(bug.counter_damage().is_none());
        assert!(!hero().is_interactable());
    }

    #[test]
    fn halving_rounds_down_and_spares_the_brood() {
        let mut roach = Actor::from_archetype(EnemyArchetype::papa_roach());
        roach.take_damage(9);
        assert_eq!(roach.halving_damage(), 6);
        roach.take_damage(roach.halving_damage());
        assert_eq!(roach.hp(), 5);

        roach.take_damage(3);
        let outcome = roach.take_damage(roach.halving_damage());
        assert_eq!(roach.hp(), 1);
        assert!(!outcome.died);
        assert_eq!(roach.halving_damage(), 1);
    }

    #[test]
    fn auras_decay_through_the_actor() {
        let mut actor = hero();
        let effects = EffectMap::new().with(DamageType::Physical, EffectKind::Strength, 2.0);
        actor.apply_aura(Aura::new("Berserk", effects, 1));
        assert_eq!(actor.effective().strength(DamageType::Physical), 2.0);

        let expired = actor.decrement_auras();
        assert_eq!(expired.len(), 1);
        assert_eq!(
            actor.effective().stat(DamageType::Physical, StatKind::Strength),
            1.0
        );
    }
}
