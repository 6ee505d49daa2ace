//! Skill grid: a tree of cells unlocked one point at a time.

use crate::catalog::Spell;
use crate::decision::{ChoiceKind, DecisionSource};
use crate::error::{BattleError, BattleResult};
use crate::stats::{DamageType, StatKey, StatKind};

/// Anything a grid cell can change on a fresh character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionStat {
    MaxHp,
    MaxMana,
    Speed,
    Combat(StatKey),
}

impl ProgressionStat {
    pub const fn combat(damage_type: DamageType, stat: StatKind) -> Self {
        Self::Combat(StatKey::new(damage_type, stat))
    }
}

/// Ordered list of `(stat, amount)` changes.
pub type StatChanges = Vec<(ProgressionStat, f64)>;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellEffect {
    /// Root and purely structural cells.
    #[default]
    None,
    AddStats(StatChanges),
    MultiplyStats(StatChanges),
    AddPraySpells(Vec<Spell>),
    IncreasePrayOptions(usize),
}

/// One node of the grid. Its children unlock once it is picked.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: CellEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<GridCell>,
}

impl GridCell {
    pub fn new(name: impl Into<String>, effect: CellEffect) -> Self {
        Self {
            name: name.into(),
            effect,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = GridCell>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of cells in this subtree, root included.
    pub fn cell_count(&self) -> usize {
        1 + self.children.iter().map(GridCell::cell_count).sum::<usize>()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The stock grid: a health branch and a mana branch.
    pub fn default_grid() -> Self {
        let add = |name: &str, stat, amount| {
            GridCell::new(name, CellEffect::AddStats(vec![(stat, amount)]))
        };
        let mul = |name: &str, stat, amount| {
            GridCell::new(name, CellEffect::MultiplyStats(vec![(stat, amount)]))
        };
        let more_options = || GridCell::new("Pray Options +1", CellEffect::IncreasePrayOptions(1));

        let health = add("Max HP +2", ProgressionStat::MaxHp, 2.0).with_children([
            add(
                "Physical Power +1",
                ProgressionStat::combat(DamageType::Physical, StatKind::Power),
                1.0,
            )
            .with_children([add("Speed +2", ProgressionStat::Speed, 2.0)]),
            mul(
                "Physical Strength *2",
                ProgressionStat::combat(DamageType::Physical, StatKind::Strength),
                2.0,
            )
            .with_children([mul(
                "Physical Resistance *2",
                ProgressionStat::combat(DamageType::Physical, StatKind::Resistance),
                2.0,
            )]),
        ]);

        let mana = add("Max Mana +2", ProgressionStat::MaxMana, 2.0).with_children([
            GridCell::new(
                "Heal 1-2",
                CellEffect::AddPraySpells(vec![
                    Spell::Heal { amount: 1 },
                    Spell::Heal { amount: 2 },
                ]),
            )
            .with_children([more_options()]),
            GridCell::new(
                "Area Flames 1-2",
                CellEffect::AddPraySpells(vec![
                    Spell::AreaFlames { power: 1.0 },
                    Spell::AreaFlames { power: 2.0 },
                ]),
            )
            .with_children([more_options()]),
        ]);

        GridCell::new("Root", CellEffect::None).with_children([health, mana])
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Walks the grid from `root`, spending one point per pick.
///
/// Options start as the root's children. A pick leaves the options and
/// unlocks its own children. The walk stops when points or options run out.
pub fn choose_cells<'g>(
    root: &'g GridCell,
    points: usize,
    decisions: &mut dyn DecisionSource,
) -> BattleResult<Vec<&'g GridCell>> {
    let mut options: Vec<&GridCell> = root.children.iter().collect();
    let mut chosen = Vec::with_capacity(points);

    while chosen.len() < points && !options.is_empty() {
        let labels: Vec<String> = options.iter().map(|cell| cell.name.clone()).collect();
        let index = decisions.choose(ChoiceKind::GridCell, &labels)?;
        if index >= options.len() {
            return Err(BattleError::ChoiceOutOfRange {
                kind: ChoiceKind::GridCell,
                index,
                len: options.len(),
            });
        }
        let cell = options.remove(index);
        tracing::trace!(
            cell = %cell.name,
            remaining = points - chosen.len() - 1,
            "grid cell chosen"
        );
        options.extend(cell.children.iter());
        chosen.push(cell);
    }
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{FirstOption, ScriptedChoices};

    #[test]
    fn default_grid_shape() {
        let grid = GridCell::default_grid();
        assert_eq!(grid.cell_count(), 11);
        assert_eq!(grid.children.len(), 2);
        assert!(grid.children[0].children[0].children[0].is_leaf());
    }

    #[test]
    fn picks_unlock_children() {
        let grid = GridCell::default_grid();
        let mut script =
            ScriptedChoices::new(["Max Mana +2", "Area Flames 1-2", "Pray Options +1"]);
        let chosen = choose_cells(&grid, 3, &mut script).unwrap();

        let names: Vec<&str> = chosen.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Max Mana +2", "Area Flames 1-2", "Pray Options +1"]);
    }

    #[test]
    fn walk_stops_when_options_run_out() {
        let grid = GridCell::new("Root", CellEffect::None)
            .with_children([GridCell::new("Only", CellEffect::IncreasePrayOptions(1))]);
        let chosen = choose_cells(&grid, 5, &mut FirstOption).unwrap();
        assert_eq!(chosen.len(), 1);
    }

    #[test]
    fn first_option_walk_is_breadth_ordered() {
        let grid = GridCell::default_grid();
        let chosen = choose_cells(&grid, 5, &mut FirstOption).unwrap();
        let names: Vec<&str> = chosen.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Max HP +2",
                "Max Mana +2",
                "Physical Power +1",
                "Physical Strength *2",
                "Heal 1-2",
            ]
        );
    }
}
