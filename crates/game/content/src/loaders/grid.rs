//! Skill grid loader.

use std::path::Path;

use battle_core::{CellEffect, GridCell, ProgressionStat, StatKind};

use crate::loaders::{LoadResult, read_file};

/// Loader for the skill grid from RON files.
pub struct GridLoader;

impl GridLoader {
    /// Load the grid root from a RON file.
    ///
    /// RON format: a single `GridCell` whose children nest recursively.
    pub fn load(path: &Path) -> LoadResult<GridCell> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GridCell> {
        let root: GridCell = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill grid RON: {}", e))?;
        if root.is_leaf() {
            anyhow::bail!("Skill grid '{}' has no cells to pick", root.name);
        }
        check_resistance_factors(&root)?;
        Ok(root)
    }
}

/// Resistance divides damage, so a multiplier must keep it positive.
fn check_resistance_factors(cell: &GridCell) -> LoadResult<()> {
    if let CellEffect::MultiplyStats(changes) = &cell.effect {
        for &(stat, factor) in changes {
            let scales_resistance = matches!(
                stat,
                ProgressionStat::Combat(key) if key.stat == StatKind::Resistance
            );
            if scales_resistance && factor <= 0.0 {
                anyhow::bail!(
                    "Grid cell '{}' multiplies resistance by non-positive factor {}",
                    cell.name,
                    factor
                );
            }
        }
    }
    cell.children.iter().try_for_each(check_resistance_factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_cells() {
        let root = GridLoader::parse(
            r#"(name: "Root", children: [
                (name: "Fast", effect: AddStats([(Speed, 2.0)]), children: [
                    (name: "More", effect: IncreasePrayOptions(1)),
                ]),
            ])"#,
        )
        .unwrap();

        assert_eq!(root.cell_count(), 3);
        assert_eq!(root.effect, CellEffect::None);
        assert_eq!(
            root.children[0].effect,
            CellEffect::AddStats(vec![(ProgressionStat::Speed, 2.0)])
        );
    }

    #[test]
    fn zero_resistance_multiplier_is_rejected() {
        let text = r#"(name: "Root", children: [
            (name: "Safe", children: [
                (
                    name: "Glass",
                    effect: MultiplyStats([
                        (Combat((damage_type: Special, stat: Resistance)), 0.0),
                    ]),
                ),
            ]),
        ])"#;
        let err = GridLoader::parse(text).unwrap_err();
        assert!(err.to_string().contains("Glass"));
    }

    #[test]
    fn positive_resistance_multiplier_is_kept() {
        let root = GridLoader::parse(
            r#"(name: "Root", children: [
                (name: "Tough", effect: MultiplyStats([
                    (Combat((damage_type: Physical, stat: Resistance)), 1.5),
                ])),
            ])"#,
        )
        .unwrap();

        assert_eq!(
            root.children[0].effect,
            CellEffect::MultiplyStats(vec![(
                ProgressionStat::combat(battle_core::DamageType::Physical, StatKind::Resistance),
                1.5
            )])
        );
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(GridLoader::parse(r#"(name: "Root")"#).is_err());
    }
}
