//! Content factory for loading a full content set from data files.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, GridCell};

use crate::character::CharacterSpec;
use crate::loaders::{CharacterLoader, ConfigLoader, GridLoader, LoadResult, RosterLoader};
use crate::roster::Roster;

const BUILTIN_CONFIG: &str = include_str!("../../data/config.toml");
const BUILTIN_ENEMIES: &str = include_str!("../../data/enemies.ron");
const BUILTIN_CHARACTER: &str = include_str!("../../data/character.ron");
const BUILTIN_GRID: &str = include_str!("../../data/grid.ron");

/// Everything a run needs besides the player's choices.
#[derive(Clone, Debug)]
pub struct ContentSet {
    pub config: BattleConfig,
    pub roster: Roster,
    pub character: CharacterSpec,
    pub grid: GridCell,
}

impl ContentSet {
    /// The content shipped in this crate's `data/` directory, compiled in.
    pub fn builtin() -> LoadResult<Self> {
        Ok(Self {
            config: ConfigLoader::parse(BUILTIN_CONFIG)?,
            roster: RosterLoader::parse(BUILTIN_ENEMIES)?,
            character: CharacterLoader::parse(BUILTIN_CHARACTER)?,
            grid: GridLoader::parse(BUILTIN_GRID)?,
        })
    }
}

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.ron
/// ├── character.ron
/// └── grid.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle rules from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load enemy archetypes from `enemies.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load the starting character from `character.ron`.
    pub fn load_character(&self) -> LoadResult<CharacterSpec> {
        CharacterLoader::load(&self.data_dir.join("character.ron"))
    }

    /// Load the skill grid from `grid.ron`.
    pub fn load_grid(&self) -> LoadResult<GridCell> {
        GridLoader::load(&self.data_dir.join("grid.ron"))
    }

    pub fn load_all(&self) -> LoadResult<ContentSet> {
        let content = ContentSet {
            config: self.load_config()?,
            roster: self.load_roster()?,
            character: self.load_character()?,
            grid: self.load_grid()?,
        };
        tracing::info!(
            data_dir = %self.data_dir.display(),
            enemies = content.roster.len(),
            grid_cells = content.grid.cell_count(),
            "content loaded"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{Behavior, EnemyArchetype, Item};

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn builtin_content_matches_presets() {
        let content = ContentSet::builtin().unwrap();

        assert_eq!(content.config, BattleConfig::default());
        assert_eq!(content.roster.get("lil bug").unwrap(), EnemyArchetype::lil_bug());
        assert_eq!(content.roster.get("Papa Roach").unwrap(), EnemyArchetype::papa_roach());
        assert_eq!(content.roster.get("Horn Dog").unwrap(), EnemyArchetype::horn_dog());
        assert!(matches!(
            content.roster.get("papa roach").unwrap().behavior,
            Behavior::Brood { .. }
        ));

        assert_eq!(content.character.name, "Anzacel");
        let names: Vec<&str> = content.character.inventory.iter().map(Item::name).collect();
        assert_eq!(names, vec!["Berserker Potion", "Potion", "Sword", "Magic wand"]);
        assert_eq!(content.grid, GridCell::default_grid());
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), BUILTIN_CONFIG).unwrap();
        std::fs::write(dir.path().join("enemies.ron"), BUILTIN_ENEMIES).unwrap();
        std::fs::write(dir.path().join("character.ron"), BUILTIN_CHARACTER).unwrap();
        std::fs::write(dir.path().join("grid.ron"), BUILTIN_GRID).unwrap();

        let factory = ContentFactory::new(dir.path());
        let content = factory.load_all().unwrap();
        assert_eq!(content.roster.len(), 3);
        assert_eq!(content.character.sheet.max_hp, 10.0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_config().unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
