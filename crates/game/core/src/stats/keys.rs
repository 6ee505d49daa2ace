//! Closed key space for stats and aura effects.
//!
//! Base stat tables are keyed by `(DamageType, StatKind)`. Auras may modify a
//! wider set of `(DamageType, EffectKind)` keys. Every effect kind has exactly
//! one [`Aggregation`] rule, fixed here and never configurable per aura.

use strum::{Display, EnumIter, EnumString};

/// Damage channel. Every attack resolves both types independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageType {
    Physical,
    Special,
}

/// Stats stored in an actor's base table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    /// Flat base damage added when the attack channels this type.
    Power,
    /// Offensive multiplier.
    Strength,
    /// Defensive divisor. Content must keep this strictly positive.
    Resistance,
    /// Flat reduction subtracted from raw damage.
    Armor,
}

impl StatKind {
    /// Rule used to fold aura contributions into this stat.
    pub const fn aggregation(self) -> Aggregation {
        EffectKind::from_stat(self).aggregation()
    }
}

/// Quantities an aura can modify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    DamageBonus,
    DamageMultiplier,
    ReceivedDamageMultiplier,
    Power,
    Strength,
    Resistance,
    Armor,
}

impl EffectKind {
    pub const fn from_stat(stat: StatKind) -> Self {
        match stat {
            StatKind::Power => Self::Power,
            StatKind::Strength => Self::Strength,
            StatKind::Resistance => Self::Resistance,
            StatKind::Armor => Self::Armor,
        }
    }

    /// Additive: Power, Armor, DamageBonus.
    /// Multiplicative: Strength, Resistance, DamageMultiplier, ReceivedDamageMultiplier.
    pub const fn aggregation(self) -> Aggregation {
        match self {
            Self::Power | Self::Armor | Self::DamageBonus => Aggregation::Add,
            Self::Strength
            | Self::Resistance
            | Self::DamageMultiplier
            | Self::ReceivedDamageMultiplier => Aggregation::Mult,
        }
    }
}

impl From<StatKind> for EffectKind {
    fn from(stat: StatKind) -> Self {
        Self::from_stat(stat)
    }
}

/// How several contributions to the same key combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Aggregation {
    /// Summed, seeded with 0.
    Add,
    /// Multiplied, seeded with 1.
    Mult,
}

impl Aggregation {
    /// Identity element; also the value of an absent key.
    pub const fn neutral(self) -> f64 {
        match self {
            Self::Add => 0.0,
            Self::Mult => 1.0,
        }
    }

    pub fn combine(self, acc: f64, value: f64) -> f64 {
        match self {
            Self::Add => acc + value,
            Self::Mult => acc * value,
        }
    }
}

/// Key into a base stat table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatKey {
    pub damage_type: DamageType,
    pub stat: StatKind,
}

impl StatKey {
    pub const fn new(damage_type: DamageType, stat: StatKind) -> Self {
        Self { damage_type, stat }
    }
}

/// Key into an aura's effect map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectKey {
    pub damage_type: DamageType,
    pub effect: EffectKind,
}

impl EffectKey {
    pub const fn new(damage_type: DamageType, effect: EffectKind) -> Self {
        Self {
            damage_type,
            effect,
        }
    }

    pub const fn aggregation(&self) -> Aggregation {
        self.effect.aggregation()
    }
}

impl From<StatKey> for EffectKey {
    fn from(key: StatKey) -> Self {
        Self::new(key.damage_type, key.stat.into())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn stat_aggregation_split_is_fixed() {
        assert_eq!(StatKind::Power.aggregation(), Aggregation::Add);
        assert_eq!(StatKind::Armor.aggregation(), Aggregation::Add);
        assert_eq!(StatKind::Strength.aggregation(), Aggregation::Mult);
        assert_eq!(StatKind::Resistance.aggregation(), Aggregation::Mult);
        assert_eq!(EffectKind::DamageBonus.aggregation(), Aggregation::Add);
        assert_eq!(EffectKind::DamageMultiplier.aggregation(), Aggregation::Mult);
        assert_eq!(
            EffectKind::ReceivedDamageMultiplier.aggregation(),
            Aggregation::Mult
        );
    }

    #[test]
    fn neutral_elements_are_identities() {
        for aggregation in [Aggregation::Add, Aggregation::Mult] {
            let neutral = aggregation.neutral();
            assert_eq!(aggregation.combine(neutral, 3.5), 3.5);
        }
    }

    #[test]
    fn damage_types_parse_from_snake_case() {
        assert_eq!("physical".parse::<DamageType>(), Ok(DamageType::Physical));
        assert_eq!(DamageType::Special.to_string(), "special");
        assert_eq!(DamageType::iter().count(), 2);
    }
}
