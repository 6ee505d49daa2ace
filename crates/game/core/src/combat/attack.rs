//! Attack resolution across both damage types.

use bitflags::bitflags;

use super::damage::{compute_damage, round_damage};
use crate::config::BattleConfig;
use crate::stats::{DamageType, EffectiveStats};

bitflags! {
    /// Damage types an attack channels.
    ///
    /// The attacker's Power for a type is added to the base damage only when
    /// the attack carries that type's tag. Untagged types still resolve.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct AttackTags: u8 {
        const PHYSICAL = 1 << 0;
        const SPECIAL = 1 << 1;
    }
}

impl AttackTags {
    pub const fn of(damage_type: DamageType) -> Self {
        match damage_type {
            DamageType::Physical => Self::PHYSICAL,
            DamageType::Special => Self::SPECIAL,
        }
    }

    pub const fn channels(self, damage_type: DamageType) -> bool {
        self.contains(Self::of(damage_type))
    }
}

/// Base damage per damage type, before stats apply.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageLine {
    pub physical: f64,
    pub special: f64,
}

impl DamageLine {
    pub const fn new(physical: f64, special: f64) -> Self {
        Self { physical, special }
    }

    pub const fn get(&self, damage_type: DamageType) -> f64 {
        match damage_type {
            DamageType::Physical => self.physical,
            DamageType::Special => self.special,
        }
    }
}

/// What an attacker brings to a hit: base damage and the types it channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackProfile {
    pub base_damage: DamageLine,
    pub tags: AttackTags,
}

/// Outcome of one attack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackResult {
    /// Unrounded damage per type, before the crit multiplier.
    pub physical: f64,
    pub special: f64,
    pub critical: bool,
    /// Rounded total applied to the target.
    pub damage: u32,
}

/// Damage of one type from `attacker` against `defender`.
///
/// Power joins the base damage only when `tags` channel `damage_type`.
pub fn damage_for_type(
    attacker: &EffectiveStats<'_>,
    defender: &EffectiveStats<'_>,
    base_damage: f64,
    damage_type: DamageType,
    tags: AttackTags,
) -> f64 {
    let offense = attacker.offense(damage_type);
    let defense = defender.defense(damage_type);

    let mut power = base_damage;
    if tags.channels(damage_type) {
        power += offense.power;
    }

    compute_damage(
        power,
        offense.strength,
        defense.resistance,
        offense.damage_bonus,
        defense.armor,
        offense.damage_multiplier,
        defense.received_damage_multiplier,
    )
}

/// Resolve a complete attack: both damage types, crit, rounding.
///
/// The crit roll is supplied by the caller and applies once to the combined
/// physical + special total.
pub fn resolve_attack(
    attacker: &EffectiveStats<'_>,
    profile: &AttackProfile,
    defender: &EffectiveStats<'_>,
    critical: bool,
    config: &BattleConfig,
) -> AttackResult {
    let physical = damage_for_type(
        attacker,
        defender,
        profile.base_damage.physical,
        DamageType::Physical,
        profile.tags,
    );
    let special = damage_for_type(
        attacker,
        defender,
        profile.base_damage.special,
        DamageType::Special,
        profile.tags,
    );

    let multiplier = if critical { config.crit_multiplier } else { 1.0 };
    let damage = round_damage((physical + special) * multiplier);

    tracing::trace!(physical, special, critical, damage, "attack resolved");

    AttackResult {
        physical,
        special,
        critical,
        damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aura::AuraLedger;
    use crate::stats::{StatKind, StatTable};

    fn attacker_table() -> StatTable {
        StatTable::default()
            .with(DamageType::Physical, StatKind::Power, 1.0)
            .with(DamageType::Physical, StatKind::Strength, 2.0)
            .with(DamageType::Special, StatKind::Power, 0.5)
            .with(DamageType::Special, StatKind::Strength, 2.0)
    }

    #[test]
    fn power_is_gated_by_tags() {
        let attacker = attacker_table();
        let defender = StatTable::default();
        let auras = AuraLedger::new();
        let a = EffectiveStats::new(&attacker, &auras);
        let d = EffectiveStats::new(&defender, &auras);

        let tagged = damage_for_type(&a, &d, 2.0, DamageType::Physical, AttackTags::PHYSICAL);
        let untagged = damage_for_type(&a, &d, 2.0, DamageType::Physical, AttackTags::SPECIAL);

        assert_eq!(tagged, 6.0);
        assert_eq!(untagged, 4.0);
    }

    #[test]
    fn crit_doubles_combined_total_before_rounding() {
        let attacker = attacker_table();
        let defender = StatTable::default();
        let auras = AuraLedger::new();
        let a = EffectiveStats::new(&attacker, &auras);
        let d = EffectiveStats::new(&defender, &auras);
        let profile = AttackProfile {
            base_damage: DamageLine::new(0.0, 0.25),
            tags: AttackTags::SPECIAL,
        };
        let config = BattleConfig::default();

        // special = (0.25 + 0.5) * 2 = 1.5, physical = 0
        let normal = resolve_attack(&a, &profile, &d, false, &config);
        let critical = resolve_attack(&a, &profile, &d, true, &config);

        assert_eq!(normal.special, 1.5);
        assert_eq!(normal.damage, 2);
        assert_eq!(critical.damage, 3);
        assert!(critical.critical);
    }

    #[test]
    fn tags_report_channels() {
        let both = AttackTags::PHYSICAL | AttackTags::SPECIAL;
        assert!(both.channels(DamageType::Physical));
        assert!(both.channels(DamageType::Special));
        assert!(!AttackTags::empty().channels(DamageType::Physical));
    }
}
