//! Timed, keyed stat modifiers attached to actors.
//!
//! # Turn-based Duration
//!
//! An aura's `duration` counts the remaining turns of the actor that owns it.
//! [`AuraLedger::decrement`] runs once at the end of every owner turn and
//! removes the auras that reach zero in the same pass.

use std::collections::BTreeMap;

use crate::stats::{Aggregation, DamageType, EffectKey, EffectKind};

/// Mapping from effect key to value.
///
/// Absent keys resolve to the neutral element of the key's aggregation rule
/// (0 for additive kinds, 1 for multiplicative kinds).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EffectMap {
    entries: BTreeMap<EffectKey, f64>,
}

impl EffectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, damage_type: DamageType, effect: EffectKind, value: f64) -> Self {
        self.insert(EffectKey::new(damage_type, effect), value);
        self
    }

    pub fn insert(&mut self, key: EffectKey, value: f64) {
        self.entries.insert(key, value);
    }

    /// Raw lookup; `None` when this map does not mention `key`.
    pub fn get(&self, key: &EffectKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Lookup falling back to the neutral element of `aggregation`.
    pub fn value_or_neutral(&self, key: &EffectKey, aggregation: Aggregation) -> f64 {
        self.get(key).unwrap_or(aggregation.neutral())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EffectKey, &f64)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(EffectKey, f64)> for EffectMap {
    fn from_iter<I: IntoIterator<Item = (EffectKey, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A named set of modifiers with a remaining duration in owner turns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aura {
    pub name: String,
    pub effects: EffectMap,
    pub duration: u32,
}

impl Aura {
    pub fn new(name: impl Into<String>, effects: EffectMap, duration: u32) -> Self {
        debug_assert!(duration > 0, "aura duration must be positive");
        Self {
            name: name.into(),
            effects,
            duration,
        }
    }
}

impl std::fmt::Display for Aura {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.duration)
    }
}

/// Ordered auras owned by a single actor.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AuraLedger {
    auras: Vec<Aura>,
}

impl AuraLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an aura; insertion order is preserved.
    pub fn push(&mut self, aura: Aura) {
        self.auras.push(aura);
    }

    /// Folds every aura's contribution to `key` with the given rule.
    pub fn effect(&self, key: EffectKey, aggregation: Aggregation) -> f64 {
        self.auras
            .iter()
            .filter_map(|aura| aura.effects.get(&key))
            .fold(aggregation.neutral(), |acc, value| {
                aggregation.combine(acc, value)
            })
    }

    /// Folds contributions to `key` with the rule fixed for its effect kind.
    pub fn aggregate(&self, key: EffectKey) -> f64 {
        self.effect(key, key.aggregation())
    }

    /// Ticks every aura down by one turn.
    ///
    /// Returns the auras that expired, in insertion order.
    pub fn decrement(&mut self) -> Vec<Aura> {
        let mut expired = Vec::new();
        let mut retained = Vec::with_capacity(self.auras.len());

        for mut aura in self.auras.drain(..) {
            aura.duration = aura.duration.saturating_sub(1);
            if aura.duration > 0 {
                retained.push(aura);
            } else {
                expired.push(aura);
            }
        }

        self.auras = retained;
        expired
    }

    /// Sum of remaining durations across all auras.
    pub fn total_remaining(&self) -> u32 {
        self.auras.iter().map(|aura| aura.duration).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aura> {
        self.auras.iter()
    }

    pub fn len(&self) -> usize {
        self.auras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.auras.is_empty()
    }
}

impl FromIterator<Aura> for AuraLedger {
    fn from_iter<I: IntoIterator<Item = Aura>>(iter: I) -> Self {
        Self {
            auras: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(value: f64, duration: u32) -> Aura {
        Aura::new(
            format!("Might {value}"),
            EffectMap::new().with(DamageType::Physical, EffectKind::Strength, value),
            duration,
        )
    }

    fn armor(value: f64, duration: u32) -> Aura {
        Aura::new(
            format!("Plating {value}"),
            EffectMap::new().with(DamageType::Physical, EffectKind::Armor, value),
            duration,
        )
    }

    #[test]
    fn empty_ledger_yields_neutral_elements() {
        let ledger = AuraLedger::new();
        let key = EffectKey::new(DamageType::Special, EffectKind::DamageMultiplier);
        assert_eq!(ledger.effect(key, Aggregation::Mult), 1.0);
        assert_eq!(ledger.effect(key, Aggregation::Add), 0.0);
    }

    #[test]
    fn aggregation_ignores_auras_without_the_key() {
        let ledger: AuraLedger = [strength(2.0, 1), armor(3.0, 1), strength(1.5, 2)]
            .into_iter()
            .collect();

        let strength_key = EffectKey::new(DamageType::Physical, EffectKind::Strength);
        let armor_key = EffectKey::new(DamageType::Physical, EffectKind::Armor);
        assert_eq!(ledger.aggregate(strength_key), 3.0);
        assert_eq!(ledger.aggregate(armor_key), 3.0);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let auras = [strength(2.0, 1), armor(3.0, 2), strength(0.5, 3), armor(-1.0, 1)];
        let keys = [
            EffectKey::new(DamageType::Physical, EffectKind::Strength),
            EffectKey::new(DamageType::Physical, EffectKind::Armor),
            EffectKey::new(DamageType::Special, EffectKind::Armor),
        ];

        let forward: AuraLedger = auras.iter().cloned().collect();
        let reversed: AuraLedger = auras.iter().rev().cloned().collect();
        let rotated: AuraLedger = auras[2..].iter().chain(&auras[..2]).cloned().collect();

        for key in keys {
            assert_eq!(forward.aggregate(key), reversed.aggregate(key));
            assert_eq!(forward.aggregate(key), rotated.aggregate(key));
        }
    }

    #[test]
    fn decrement_expires_in_insertion_order() {
        let mut ledger: AuraLedger = [strength(2.0, 1), armor(1.0, 3), armor(2.0, 1)]
            .into_iter()
            .collect();

        let expired = ledger.decrement();

        let names: Vec<_> = expired.iter().map(|aura| aura.name.as_str()).collect();
        assert_eq!(names, ["Might 2", "Plating 2"]);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.iter().next().map(|aura| aura.duration), Some(2));
    }

    #[test]
    fn decrement_strictly_shrinks_total_duration() {
        let mut ledger: AuraLedger = [strength(2.0, 2), armor(1.0, 4)].into_iter().collect();

        let mut previous = ledger.total_remaining();
        while !ledger.is_empty() {
            ledger.decrement();
            let current = ledger.total_remaining();
            assert!(current < previous);
            previous = current;
        }
        assert_eq!(previous, 0);
    }
}
