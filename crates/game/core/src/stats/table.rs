//! Base stat tables.
//!
//! A [`StatTable`] always holds a value for every `(DamageType, StatKind)`
//! pair, so lookups cannot miss.

use super::keys::{DamageType, StatKey, StatKind};

/// The four base stats of one damage type.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatLine {
    pub power: f64,
    pub strength: f64,
    pub resistance: f64,
    pub armor: f64,
}

impl StatLine {
    pub const fn new(power: f64, strength: f64, resistance: f64, armor: f64) -> Self {
        Self {
            power,
            strength,
            resistance,
            armor,
        }
    }

    pub const fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Power => self.power,
            StatKind::Strength => self.strength,
            StatKind::Resistance => self.resistance,
            StatKind::Armor => self.armor,
        }
    }

    pub fn get_mut(&mut self, stat: StatKind) -> &mut f64 {
        match stat {
            StatKind::Power => &mut self.power,
            StatKind::Strength => &mut self.strength,
            StatKind::Resistance => &mut self.resistance,
            StatKind::Armor => &mut self.armor,
        }
    }
}

impl Default for StatLine {
    /// Power 0, strength 1, resistance 1, armor 0.
    fn default() -> Self {
        Self::new(0.0, 1.0, 1.0, 0.0)
    }
}

/// Base stats for both damage types.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatTable {
    pub physical: StatLine,
    pub special: StatLine,
}

impl StatTable {
    pub const fn new(physical: StatLine, special: StatLine) -> Self {
        Self { physical, special }
    }

    pub const fn line(&self, damage_type: DamageType) -> &StatLine {
        match damage_type {
            DamageType::Physical => &self.physical,
            DamageType::Special => &self.special,
        }
    }

    pub fn line_mut(&mut self, damage_type: DamageType) -> &mut StatLine {
        match damage_type {
            DamageType::Physical => &mut self.physical,
            DamageType::Special => &mut self.special,
        }
    }

    pub const fn get(&self, key: StatKey) -> f64 {
        self.line(key.damage_type).get(key.stat)
    }

    pub fn set(&mut self, key: StatKey, value: f64) {
        *self.line_mut(key.damage_type).get_mut(key.stat) = value;
    }

    /// Builder-style setter.
    pub fn with(mut self, damage_type: DamageType, stat: StatKind, value: f64) -> Self {
        self.set(StatKey::new(damage_type, stat), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_positive_resistance() {
        let table = StatTable::default();
        for damage_type in [DamageType::Physical, DamageType::Special] {
            assert_eq!(table.get(StatKey::new(damage_type, StatKind::Resistance)), 1.0);
            assert_eq!(table.get(StatKey::new(damage_type, StatKind::Power)), 0.0);
        }
    }

    #[test]
    fn set_only_touches_one_cell() {
        let table = StatTable::default().with(DamageType::Special, StatKind::Armor, 4.0);
        assert_eq!(table.special.armor, 4.0);
        assert_eq!(table.physical.armor, 0.0);
    }
}
