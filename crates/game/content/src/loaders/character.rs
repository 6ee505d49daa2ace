//! Starting character loader.

use std::path::Path;

use crate::character::CharacterSpec;
use crate::loaders::{LoadResult, read_file};

/// Loader for the starting character from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    pub fn load(path: &Path) -> LoadResult<CharacterSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CharacterSpec> {
        let spec: CharacterSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character RON: {}", e))?;

        let stats = &spec.sheet.stats;
        if stats.physical.resistance <= 0.0 || stats.special.resistance <= 0.0 {
            anyhow::bail!("Character '{}' needs positive resistances", spec.name);
        }
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::PrayTemplate;

    #[test]
    fn name_only_character_uses_defaults() {
        let spec = CharacterLoader::parse(r#"(name: "Nobody")"#).unwrap();
        assert_eq!(spec.name, "Nobody");
        assert_eq!(spec.pray, PrayTemplate::default());
        assert!(spec.inventory.is_empty());
    }

    #[test]
    fn meters_clamp_when_read_from_data() {
        let mut mana: battle_core::ResourceMeter =
            ron::from_str("(current: 12, maximum: 10)").unwrap();
        assert_eq!(mana.current(), 10);
        assert_eq!(mana.restore(1), 0);
    }

    #[test]
    fn rejects_zero_resistance() {
        let text = r#"(name: "Glass", sheet: (stats: (physical: (resistance: 0.0))))"#;
        assert!(CharacterLoader::parse(text).is_err());
    }
}
