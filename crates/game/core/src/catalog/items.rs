//! Items and weapons carried in a player's inventory.

use crate::aura::Aura;
use crate::combat::{AttackTags, DamageLine};

/// Equippable weapon: base damage per type and the types it channels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub base_damage: DamageLine,
    pub tags: AttackTags,
}

impl Weapon {
    pub fn new(name: impl Into<String>, base_damage: DamageLine, tags: AttackTags) -> Self {
        Self {
            name: name.into(),
            base_damage,
            tags,
        }
    }

    /// Deterministic physical weapon.
    pub fn blade(name: impl Into<String>, power: f64) -> Self {
        Self::new(name, DamageLine::new(power, 0.0), AttackTags::PHYSICAL)
    }

    /// Deterministic special weapon.
    pub fn focus(name: impl Into<String>, power: f64) -> Self {
        Self::new(name, DamageLine::new(0.0, power), AttackTags::SPECIAL)
    }
}

/// Who an item may be used on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemTargeting {
    /// Any living player, the user included.
    LivingPlayers,
    /// The user only.
    User,
}

/// Inventory entry.
///
/// # Design: Closed Kind Enum
///
/// Each variant carries its own data; the battle resolves targeting and
/// effects by matching on the variant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    /// Restores hit points to one player. Consumed on use.
    Potion { name: String, heal: u32 },

    /// Grants an aura to the user. Consumed on use.
    AuraPotion { name: String, aura: Aura },

    /// Equipped on use; stays in the inventory.
    Weapon(Weapon),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Self::Potion { name, .. } | Self::AuraPotion { name, .. } => name,
            Self::Weapon(weapon) => &weapon.name,
        }
    }

    pub const fn targeting(&self) -> ItemTargeting {
        match self {
            Self::Potion { .. } => ItemTargeting::LivingPlayers,
            Self::AuraPotion { .. } | Self::Weapon(_) => ItemTargeting::User,
        }
    }

    /// Whether using the item removes it from the inventory.
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Weapon(_))
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aura::EffectMap;

    #[test]
    fn weapons_are_kept_and_potions_consumed() {
        let sword = Item::Weapon(Weapon::blade("Sword", 2.0));
        let potion = Item::Potion {
            name: "Potion".into(),
            heal: 5,
        };
        let tonic = Item::AuraPotion {
            name: "Tonic".into(),
            aura: Aura::new("Tonic", EffectMap::new(), 1),
        };

        assert!(!sword.is_consumed());
        assert!(potion.is_consumed());
        assert!(tonic.is_consumed());
        assert_eq!(sword.targeting(), ItemTargeting::User);
        assert_eq!(potion.targeting(), ItemTargeting::LivingPlayers);
        assert_eq!(sword.to_string(), "Sword");
    }

    #[test]
    fn blade_and_focus_channel_their_own_type() {
        let blade = Weapon::blade("Sword", 2.0);
        let focus = Weapon::focus("Magic wand", 2.0);
        assert_eq!(blade.base_damage, DamageLine::new(2.0, 0.0));
        assert_eq!(blade.tags, AttackTags::PHYSICAL);
        assert_eq!(focus.base_damage, DamageLine::new(0.0, 2.0));
        assert_eq!(focus.tags, AttackTags::SPECIAL);
    }
}
