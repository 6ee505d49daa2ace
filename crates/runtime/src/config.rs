//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Encounter progression of the boss crawl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    /// One boss per battle, alternating.
    #[default]
    Easy,
    /// Bosses accumulate as the score grows.
    Hard,
}

/// What the runtime plays when started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RunMode {
    /// Consecutive battles until the player loses.
    #[default]
    Crawl,
    /// A single fight against Papa Roach and Horn Dog.
    Demo,
}

/// Configuration required to start a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
    pub mode: RunMode,
    /// Skill points spent on the grid before the crawl starts.
    pub grid_points: usize,
    /// Content directory. `None` uses the built-in content.
    pub data_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: Difficulty::default(),
            mode: RunMode::default(),
            grid_points: Self::DEFAULT_GRID_POINTS,
            data_dir: None,
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_GRID_POINTS: usize = 5;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATHED_SEED` - RNG seed (default: entropy)
    /// - `BATHED_DIFFICULTY` - `easy` or `hard` (default: easy)
    /// - `BATHED_MODE` - `crawl` or `demo` (default: crawl)
    /// - `BATHED_GRID_POINTS` - Skill points for character creation (default: 5)
    /// - `BATHED_DATA_DIR` - Content directory (default: built-in content)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    ///
    /// Unparseable values are ignored and keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.seed = read_var(&lookup, "BATHED_SEED");

        if let Some(difficulty) = read_var(&lookup, "BATHED_DIFFICULTY") {
            config.difficulty = difficulty;
        }

        if let Some(mode) = read_var(&lookup, "BATHED_MODE") {
            config.mode = mode;
        }

        if let Some(points) = read_var(&lookup, "BATHED_GRID_POINTS") {
            config.grid_points = points;
        }

        config.data_dir = lookup("BATHED_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        config
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_grid_points(mut self, points: usize) -> Self {
        self.grid_points = points;
        self
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(key, value = %value, "ignoring unparseable environment variable");
            None
        }
    }
}
