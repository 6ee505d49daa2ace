//! Character progression: the skill grid and character creation.

pub mod character;
pub mod grid;

pub use character::{CharacterBuilder, CharacterSheet, PrayTemplate, default_pray_pool};
pub use grid::{CellEffect, GridCell, ProgressionStat, StatChanges, choose_cells};
