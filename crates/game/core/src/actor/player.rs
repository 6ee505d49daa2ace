//! Player-only state: mana, inventory, abilities, equipment.

use super::vitals::ResourceMeter;
use crate::catalog::{Ability, Item, Weapon};

/// What a player owns beyond the shared actor fields.
///
/// Inventory order is display order; removal takes the entry at the chosen
/// index.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub mana: ResourceMeter,
    pub inventory: Vec<Item>,
    pub abilities: Vec<Ability>,
    pub equipped: Option<Weapon>,
}

impl PlayerState {
    pub fn new(max_mana: u32) -> Self {
        Self {
            mana: ResourceMeter::full(max_mana),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_inventory(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.inventory.extend(items);
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    #[must_use]
    pub fn with_equipped(mut self, weapon: Weapon) -> Self {
        self.equipped = Some(weapon);
        self
    }

    /// Indices of abilities whose AP and mana costs both fit.
    pub fn affordable_abilities(&self, action_points: u32) -> Vec<usize> {
        self.abilities
            .iter()
            .enumerate()
            .filter(|(_, ability)| ability.is_affordable(action_points, self.mana.current()))
            .map(|(index, _)| index)
            .collect()
    }

    /// Replaces the equipped weapon, returning the previous one.
    pub fn equip(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.equipped.replace(weapon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affordable_abilities_respect_mana() {
        let state = PlayerState::new(2)
            .with_ability(Ability::heal(1, 1, 1))
            .with_ability(Ability::heal(2, 1, 5))
            .with_ability(Ability::heal(3, 3, 0));

        assert_eq!(state.affordable_abilities(1), vec![0]);
        assert_eq!(state.affordable_abilities(3), vec![0, 2]);
    }

    #[test]
    fn equip_replaces_previous_weapon() {
        let mut state = PlayerState::new(0).with_equipped(Weapon::blade("Sword", 2.0));
        let previous = state.equip(Weapon::focus("Magic wand", 2.0));
        assert_eq!(previous.map(|w| w.name), Some("Sword".to_string()));
        assert_eq!(state.equipped.map(|w| w.name), Some("Magic wand".to_string()));
    }
}
