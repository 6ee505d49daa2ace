//! Character creation from chosen grid cells.

use super::grid::{CellEffect, GridCell, ProgressionStat};
use crate::actor::{Actor, PlayerState};
use crate::catalog::{Ability, Item, Spell};
use crate::stats::StatTable;

/// Numeric character stats before they are frozen into an [`Actor`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterSheet {
    pub max_hp: f64,
    pub max_mana: f64,
    pub speed: f64,
    pub stats: StatTable,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            max_hp: 10.0,
            max_mana: 10.0,
            speed: 10.0,
            stats: StatTable::default(),
        }
    }
}

impl CharacterSheet {
    fn slot(&mut self, stat: ProgressionStat) -> &mut f64 {
        match stat {
            ProgressionStat::MaxHp => &mut self.max_hp,
            ProgressionStat::MaxMana => &mut self.max_mana,
            ProgressionStat::Speed => &mut self.speed,
            ProgressionStat::Combat(key) => self.stats.line_mut(key.damage_type).get_mut(key.stat),
        }
    }

    pub const fn get(&self, stat: ProgressionStat) -> f64 {
        match stat {
            ProgressionStat::MaxHp => self.max_hp,
            ProgressionStat::MaxMana => self.max_mana,
            ProgressionStat::Speed => self.speed,
            ProgressionStat::Combat(key) => self.stats.get(key),
        }
    }

    pub fn add(&mut self, stat: ProgressionStat, amount: f64) {
        *self.slot(stat) += amount;
    }

    pub fn multiply(&mut self, stat: ProgressionStat, factor: f64) {
        *self.slot(stat) *= factor;
    }
}

fn whole(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Pray ability parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrayTemplate {
    pub spells: Vec<Spell>,
    pub choices: usize,
    pub ap_cost: u32,
    pub mana_cost: u32,
}

impl Default for PrayTemplate {
    fn default() -> Self {
        Self {
            spells: default_pray_pool(),
            choices: Ability::DEFAULT_PRAY_CHOICES,
            ap_cost: 1,
            mana_cost: 2,
        }
    }
}

/// Spells every Pray draws from before any grid cell adds more.
pub fn default_pray_pool() -> Vec<Spell> {
    use crate::aura::{Aura, EffectMap};
    use crate::stats::{DamageType, EffectKind};

    vec![
        Spell::Heal { amount: 2 },
        Spell::AreaFlames { power: 1.0 },
        Spell::Bless {
            aura: Aura::new(
                "Blessing",
                EffectMap::new()
                    .with(DamageType::Physical, EffectKind::DamageMultiplier, 1.5)
                    .with(DamageType::Special, EffectKind::DamageMultiplier, 1.5),
                2,
            ),
        },
    ]
}

/// Builds a player from default stats plus chosen grid cells.
#[derive(Clone, Debug)]
pub struct CharacterBuilder {
    name: String,
    sheet: CharacterSheet,
    pray: PrayTemplate,
    inventory: Vec<Item>,
}

impl CharacterBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sheet: CharacterSheet::default(),
            pray: PrayTemplate::default(),
            inventory: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: CharacterSheet) -> Self {
        self.sheet = sheet;
        self
    }

    #[must_use]
    pub fn with_pray(mut self, pray: PrayTemplate) -> Self {
        self.pray = pray;
        self
    }

    #[must_use]
    pub fn with_inventory(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.inventory.extend(items);
        self
    }

    /// Applies one cell: additions first, then multiplications.
    pub fn apply(&mut self, cell: &GridCell) {
        match &cell.effect {
            CellEffect::None => {}
            CellEffect::AddStats(changes) => {
                for &(stat, amount) in changes {
                    self.sheet.add(stat, amount);
                }
            }
            CellEffect::MultiplyStats(changes) => {
                for &(stat, factor) in changes {
                    self.sheet.multiply(stat, factor);
                }
            }
            CellEffect::AddPraySpells(spells) => self.pray.spells.extend(spells.iter().cloned()),
            CellEffect::IncreasePrayOptions(amount) => self.pray.choices += amount,
        }
    }

    #[must_use]
    pub fn with_cells<'g>(mut self, cells: impl IntoIterator<Item = &'g GridCell>) -> Self {
        for cell in cells {
            self.apply(cell);
        }
        self
    }

    pub const fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    pub const fn pray(&self) -> &PrayTemplate {
        &self.pray
    }

    pub fn build(self) -> Actor {
        let Self {
            name,
            sheet,
            pray,
            inventory,
        } = self;
        let ability = Ability::pray(pray.spells, pray.choices, pray.ap_cost, pray.mana_cost);
        let state = PlayerState::new(whole(sheet.max_mana))
            .with_inventory(inventory)
            .with_ability(ability);
        Actor::player(
            name,
            whole(sheet.max_hp),
            sheet.speed.round() as i32,
            sheet.stats,
            state,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AbilityEffect;
    use crate::decision::ScriptedChoices;
    use crate::progression::choose_cells;
    use crate::stats::{DamageType, StatKind};

    #[test]
    fn default_character() {
        let actor = CharacterBuilder::new("Anzacel").build();
        assert_eq!(actor.max_hp(), 10);
        assert_eq!(actor.speed, 10);
        assert_eq!(actor.as_player().unwrap().mana.maximum(), 10);
        assert_eq!(actor.stats, StatTable::default());
    }

    #[test]
    fn cells_shape_stats_and_pray() {
        let grid = GridCell::default_grid();
        let mut script = ScriptedChoices::new([
            "Max HP +2",
            "Physical Strength *2",
            "Physical Resistance *2",
            "Max Mana +2",
            "Heal 1-2",
            "Pray Options +1",
        ]);
        let cells = choose_cells(&grid, 6, &mut script).unwrap();
        let actor = CharacterBuilder::new("Anzacel").with_cells(cells).build();

        assert_eq!(actor.max_hp(), 12);
        assert_eq!(actor.as_player().unwrap().mana.maximum(), 12);
        assert_eq!(actor.stats.physical.strength, 2.0);
        assert_eq!(actor.stats.physical.resistance, 2.0);

        let pray = &actor.as_player().unwrap().abilities[0];
        match &pray.effect {
            AbilityEffect::Pray { spells, choices } => {
                assert_eq!(spells.len(), default_pray_pool().len() + 2);
                assert_eq!(*choices, 4);
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn sheet_applies_in_order() {
        let power = ProgressionStat::combat(DamageType::Physical, StatKind::Power);
        let mut sheet = CharacterSheet::default();
        sheet.add(power, 1.0);
        sheet.multiply(power, 3.0);
        sheet.add(ProgressionStat::Speed, 2.0);
        assert_eq!(sheet.get(power), 3.0);
        assert_eq!(sheet.get(ProgressionStat::Speed), 12.0);
    }
}
