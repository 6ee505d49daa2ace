//! Effective stat resolution.
//!
//! Combines a base [`StatTable`] with the contributions of an [`AuraLedger`]:
//!
//! ```text
//! Power(dt)                    = base[dt, Power]      + auraAdd(dt, Power)
//! Strength(dt)                 = base[dt, Strength]   * auraMult(dt, Strength)
//! Resistance(dt)               = base[dt, Resistance] * auraMult(dt, Resistance)
//! Armor(dt)                    = base[dt, Armor]      + auraAdd(dt, Armor)
//! DamageBonus(dt)              = auraAdd(dt, DamageBonus)
//! DamageMultiplier(dt)         = auraMult(dt, DamageMultiplier)
//! ReceivedDamageMultiplier(dt) = auraMult(dt, ReceivedDamageMultiplier)
//! ```

use super::keys::{DamageType, EffectKey, EffectKind, StatKey, StatKind};
use super::table::StatTable;
use crate::aura::AuraLedger;

/// Read-only view over an actor's base stats and auras.
#[derive(Clone, Copy, Debug)]
pub struct EffectiveStats<'a> {
    base: &'a StatTable,
    auras: &'a AuraLedger,
}

impl<'a> EffectiveStats<'a> {
    pub fn new(base: &'a StatTable, auras: &'a AuraLedger) -> Self {
        Self { base, auras }
    }

    /// Effective value of any aura-modifiable quantity.
    pub fn effect(&self, damage_type: DamageType, effect: EffectKind) -> f64 {
        let key = EffectKey::new(damage_type, effect);
        let from_auras = self.auras.aggregate(key);

        let base = match effect {
            EffectKind::Power => StatKind::Power,
            EffectKind::Strength => StatKind::Strength,
            EffectKind::Resistance => StatKind::Resistance,
            EffectKind::Armor => StatKind::Armor,
            // No base component.
            EffectKind::DamageBonus
            | EffectKind::DamageMultiplier
            | EffectKind::ReceivedDamageMultiplier => return from_auras,
        };

        let base = self.base.get(StatKey::new(damage_type, base));
        effect.aggregation().combine(base, from_auras)
    }

    pub fn stat(&self, damage_type: DamageType, stat: StatKind) -> f64 {
        self.effect(damage_type, stat.into())
    }

    pub fn power(&self, damage_type: DamageType) -> f64 {
        self.effect(damage_type, EffectKind::Power)
    }

    pub fn strength(&self, damage_type: DamageType) -> f64 {
        self.effect(damage_type, EffectKind::Strength)
    }

    pub fn resistance(&self, damage_type: DamageType) -> f64 {
        self.effect(damage_type, EffectKind::Resistance)
    }

    pub fn armor(&self, damage_type: DamageType) -> f64 {
        self.effect(damage_type, EffectKind::Armor)
    }

    pub fn damage_bonus(&self, damage_type: DamageType) -> f64 {
        self.effect(damage_type, EffectKind::DamageBonus)
    }

    pub fn damage_multiplier(&self, damage_type: DamageType) -> f64 {
        self.effect(damage_type, EffectKind::DamageMultiplier)
    }

    pub fn received_damage_multiplier(&self, damage_type: DamageType) -> f64 {
        self.effect(damage_type, EffectKind::ReceivedDamageMultiplier)
    }

    /// Snapshot of the attacking side of the formula for one damage type.
    pub fn offense(&self, damage_type: DamageType) -> OffenseSnapshot {
        OffenseSnapshot {
            power: self.power(damage_type),
            strength: self.strength(damage_type),
            damage_bonus: self.damage_bonus(damage_type),
            damage_multiplier: self.damage_multiplier(damage_type),
        }
    }

    /// Snapshot of the defending side of the formula for one damage type.
    pub fn defense(&self, damage_type: DamageType) -> DefenseSnapshot {
        DefenseSnapshot {
            resistance: self.resistance(damage_type),
            armor: self.armor(damage_type),
            received_damage_multiplier: self.received_damage_multiplier(damage_type),
        }
    }
}

/// Attacker quantities for one damage type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffenseSnapshot {
    pub power: f64,
    pub strength: f64,
    pub damage_bonus: f64,
    pub damage_multiplier: f64,
}

/// Defender quantities for one damage type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefenseSnapshot {
    pub resistance: f64,
    pub armor: f64,
    pub received_damage_multiplier: f64,
}
