//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text. Missing keys keep their defaults.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(0.0..=1.0).contains(&config.crit_probability) {
            anyhow::bail!(
                "crit_probability must lie in [0, 1], got {}",
                config.crit_probability
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config =
            ConfigLoader::parse("crit_probability = 0.0\n[action_costs]\nattack = 2\n").unwrap();
        assert_eq!(config.crit_probability, 0.0);
        assert_eq!(config.action_costs.attack, 2);
        assert_eq!(config.max_action_points, BattleConfig::default().max_action_points);
    }

    #[test]
    fn rejects_bad_probability() {
        assert!(ConfigLoader::parse("crit_probability = 1.5").is_err());
        assert!(ConfigLoader::parse("max_action_points = \"three\"").is_err());
    }
}
