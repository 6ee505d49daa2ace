//! Enemy roster loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::{EnemySpec, Roster};

/// Loader for enemy archetypes from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and resolve the roster from a RON file.
    ///
    /// RON format: `Vec<EnemySpec>`
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let specs: Vec<EnemySpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        Roster::from_specs(specs).map_err(|e| anyhow::anyhow!("Invalid enemy roster: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{AttackTags, Behavior, Reaction};

    #[test]
    fn parses_minimal_entries() {
        let roster = RosterLoader::parse(
            r#"[
                (name: "bug", max_hp: 5, speed: 8, interaction: Some(Bite(damage: 1))),
                (name: "nest", max_hp: 9, speed: 1, behavior: Brood(spawn: "bug")),
            ]"#,
        )
        .unwrap();

        let bug = roster.get("bug").unwrap();
        assert_eq!(bug.interaction, Some(Reaction::Bite { damage: 1 }));
        assert_eq!(bug.attack_tags, AttackTags::PHYSICAL | AttackTags::SPECIAL);

        match roster.get("nest").unwrap().behavior {
            Behavior::Brood {
                hp_threshold,
                joins_round,
                ..
            } => {
                assert_eq!(hp_threshold, Behavior::BROOD_HP_THRESHOLD);
                assert!(!joins_round);
            }
            other => panic!("unexpected behavior {other:?}"),
        }
    }

    #[test]
    fn unresolvable_roster_fails() {
        let err = RosterLoader::parse(
            r#"[(name: "nest", max_hp: 9, speed: 1, behavior: Brood(spawn: "egg"))]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("egg"));
    }
}
