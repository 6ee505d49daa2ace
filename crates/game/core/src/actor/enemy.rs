//! Enemy archetypes and the policies they follow.

use crate::combat::{AttackTags, DamageLine};
use crate::stats::StatTable;

/// Turn policy of an enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    /// Attack a uniformly random living player.
    Aggressive,

    /// While `hp >= hp_threshold`, pick uniformly between spawning `spawn`
    /// (and halving own hp) and attacking. Below the threshold, always attack.
    Brood {
        spawn: Box<EnemyArchetype>,
        hp_threshold: u32,
        joins_round: bool,
    },

    /// Attacks like `Aggressive`. When hit and still alive, deals `damage`
    /// straight back to the attacker.
    Retaliate { damage: u32 },
}

impl Behavior {
    pub const BROOD_HP_THRESHOLD: u32 = 2;

    pub const fn counter_damage(&self) -> Option<u32> {
        match self {
            Self::Retaliate { damage } => Some(*damage),
            _ => None,
        }
    }
}

/// What an interactable enemy does to whoever pokes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reaction {
    /// Interactor takes fixed damage.
    Bite { damage: u32 },
    /// Narrated, nothing else.
    Shrug,
}

/// Template every enemy instance is built from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyArchetype {
    pub name: String,
    pub max_hp: u32,
    pub speed: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatTable,
    pub base_damage: DamageLine,
    pub attack_tags: AttackTags,
    pub behavior: Behavior,
    /// `Some` marks the enemy as interactable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interaction: Option<Reaction>,
}

impl EnemyArchetype {
    /// Aggressive enemy with default stats, 1/1 base damage on both tags.
    pub fn new(name: impl Into<String>, max_hp: u32, speed: i32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            speed,
            stats: StatTable::default(),
            base_damage: DamageLine::new(1.0, 1.0),
            attack_tags: AttackTags::PHYSICAL | AttackTags::SPECIAL,
            behavior: Behavior::Aggressive,
            interaction: None,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: StatTable) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_attack(mut self, base_damage: DamageLine, tags: AttackTags) -> Self {
        self.base_damage = base_damage;
        self.attack_tags = tags;
        self
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, reaction: Reaction) -> Self {
        self.interaction = Some(reaction);
        self
    }

    /// The lil bug: weak, interactable, bites.
    pub fn lil_bug() -> Self {
        Self::new("lil bug", 5, 8)
            .with_attack(DamageLine::new(1.0, 0.0), AttackTags::PHYSICAL | AttackTags::SPECIAL)
            .with_interaction(Reaction::Bite { damage: 1 })
    }

    /// Broods lil bugs while healthy.
    pub fn papa_roach() -> Self {
        Self::new("Papa Roach", 20, 5)
            .with_attack(DamageLine::new(1.0, 0.0), AttackTags::PHYSICAL | AttackTags::SPECIAL)
            .with_behavior(Behavior::Brood {
                spawn: Box::new(Self::lil_bug()),
                hp_threshold: Behavior::BROOD_HP_THRESHOLD,
                joins_round: false,
            })
    }

    /// Bites back whenever it is hit.
    pub fn horn_dog() -> Self {
        Self::new("Horn Dog", 10, 7).with_behavior(Behavior::Retaliate { damage: 1 })
    }
}

/// Per-instance enemy data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    pub archetype: EnemyArchetype,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_archetypes() {
        let roach = EnemyArchetype::papa_roach();
        match &roach.behavior {
            Behavior::Brood {
                spawn,
                hp_threshold,
                ..
            } => {
                assert_eq!(spawn.name, "lil bug");
                assert_eq!(*hp_threshold, 2);
            }
            other => panic!("unexpected behavior {other:?}"),
        }
        assert!(roach.interaction.is_none());
        assert_eq!(EnemyArchetype::lil_bug().interaction, Some(Reaction::Bite { damage: 1 }));
        assert_eq!(EnemyArchetype::horn_dog().behavior.counter_damage(), Some(1));
        assert_eq!(Behavior::Aggressive.counter_damage(), None);
    }
}
