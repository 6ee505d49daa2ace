//! Starting character definition.

use battle_core::{Actor, CharacterBuilder, CharacterSheet, GridCell, Item, PrayTemplate};

/// The character a run starts with, before any grid cell is applied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sheet: CharacterSheet,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pray: PrayTemplate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<Item>,
}

impl CharacterSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sheet: CharacterSheet::default(),
            pray: PrayTemplate::default(),
            inventory: Vec::new(),
        }
    }

    pub fn builder(&self) -> CharacterBuilder {
        CharacterBuilder::new(self.name.clone())
            .with_sheet(self.sheet)
            .with_pray(self.pray.clone())
            .with_inventory(self.inventory.iter().cloned())
    }

    /// Builds the player with `cells` applied on top of the sheet.
    pub fn build_with<'g>(&self, cells: impl IntoIterator<Item = &'g GridCell>) -> Actor {
        self.builder().with_cells(cells).build()
    }
}
