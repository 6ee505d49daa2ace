//! Enemy roster: archetype definitions that refer to each other by name.

use battle_core::{
    AttackTags, Behavior, DamageLine, DamageType, EnemyArchetype, Reaction, StatTable,
};
use strum::IntoEnumIterator;

use crate::error::{ContentError, ContentResult};

/// Enemy policy as written in content. `Brood` names its spawn instead of
/// embedding it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorSpec {
    #[default]
    Aggressive,
    Brood {
        spawn: String,
        #[cfg_attr(feature = "serde", serde(default = "default_hp_threshold"))]
        hp_threshold: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        joins_round: bool,
    },
    Retaliate {
        damage: u32,
    },
}

#[cfg(feature = "serde")]
const fn default_hp_threshold() -> u32 {
    Behavior::BROOD_HP_THRESHOLD
}

#[cfg(feature = "serde")]
const fn default_base_damage() -> DamageLine {
    DamageLine::new(1.0, 1.0)
}

#[cfg(feature = "serde")]
fn default_attack_tags() -> AttackTags {
    AttackTags::PHYSICAL | AttackTags::SPECIAL
}

/// One enemy entry in `enemies.ron`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpec {
    pub name: String,
    pub max_hp: u32,
    pub speed: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatTable,
    #[cfg_attr(feature = "serde", serde(default = "default_base_damage"))]
    pub base_damage: DamageLine,
    #[cfg_attr(feature = "serde", serde(default = "default_attack_tags"))]
    pub attack_tags: AttackTags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior: BehaviorSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interaction: Option<Reaction>,
}

impl EnemySpec {
    pub fn new(name: impl Into<String>, max_hp: u32, speed: i32) -> Self {
        let base = EnemyArchetype::new(name, max_hp, speed);
        Self {
            name: base.name,
            max_hp,
            speed,
            stats: base.stats,
            base_damage: base.base_damage,
            attack_tags: base.attack_tags,
            behavior: BehaviorSpec::Aggressive,
            interaction: None,
        }
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: BehaviorSpec) -> Self {
        self.behavior = behavior;
        self
    }

    fn check_resistance(&self) -> ContentResult<()> {
        for damage_type in DamageType::iter() {
            if self.stats.line(damage_type).resistance <= 0.0 {
                return Err(ContentError::NonPositiveResistance {
                    name: self.name.clone(),
                    damage_type,
                });
            }
        }
        Ok(())
    }
}

/// Validated set of enemy archetypes with spawn references resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    archetypes: Vec<EnemyArchetype>,
}

impl Roster {
    /// Resolves every entry, following `Brood` spawn names.
    ///
    /// Fails on duplicate names, unknown spawn targets, spawn cycles and
    /// non-positive resistances.
    pub fn from_specs(specs: Vec<EnemySpec>) -> ContentResult<Self> {
        for (index, spec) in specs.iter().enumerate() {
            if specs[..index].iter().any(|other| same_name(&other.name, &spec.name)) {
                return Err(ContentError::DuplicateArchetype(spec.name.clone()));
            }
            spec.check_resistance()?;
        }

        let archetypes = specs
            .iter()
            .map(|spec| resolve(&specs, spec, &mut Vec::new()))
            .collect::<ContentResult<Vec<_>>>()?;
        tracing::debug!(count = archetypes.len(), "enemy roster resolved");
        Ok(Self { archetypes })
    }

    /// Looks an archetype up by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> ContentResult<EnemyArchetype> {
        self.archetypes
            .iter()
            .find(|archetype| same_name(&archetype.name, name))
            .cloned()
            .ok_or_else(|| ContentError::UnknownArchetype(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.archetypes.iter().map(|archetype| archetype.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

fn resolve<'s>(
    specs: &'s [EnemySpec],
    spec: &'s EnemySpec,
    chain: &mut Vec<&'s str>,
) -> ContentResult<EnemyArchetype> {
    if chain.iter().any(|name| same_name(name, &spec.name)) {
        return Err(ContentError::SpawnCycle(
            chain.first().copied().unwrap_or(spec.name.as_str()).to_owned(),
        ));
    }
    chain.push(&spec.name);

    let behavior = match &spec.behavior {
        BehaviorSpec::Aggressive => Behavior::Aggressive,
        BehaviorSpec::Retaliate { damage } => Behavior::Retaliate { damage: *damage },
        BehaviorSpec::Brood {
            spawn,
            hp_threshold,
            joins_round,
        } => {
            let target = specs
                .iter()
                .find(|candidate| same_name(&candidate.name, spawn))
                .ok_or_else(|| ContentError::UnknownArchetype(spawn.clone()))?;
            Behavior::Brood {
                spawn: Box::new(resolve(specs, target, chain)?),
                hp_threshold: *hp_threshold,
                joins_round: *joins_round,
            }
        }
    };
    chain.pop();

    let mut archetype = EnemyArchetype::new(spec.name.clone(), spec.max_hp, spec.speed)
        .with_stats(spec.stats)
        .with_attack(spec.base_damage, spec.attack_tags)
        .with_behavior(behavior);
    archetype.interaction = spec.interaction;
    Ok(archetype)
}
