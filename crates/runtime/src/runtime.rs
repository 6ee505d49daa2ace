//! High-level runtime orchestrator.
//!
//! The runtime owns the loaded content and the run configuration, and turns
//! them into battles driven by a caller-supplied [`DecisionSource`] and
//! [`Reporter`].

use battle_content::{ContentFactory, ContentSet};
use battle_core::{
    Actor, Battle, BattleContext, BattleStatus, DecisionSource, Reporter, SeededRng, choose_cells,
};

use crate::config::{RunMode, RuntimeConfig};
use crate::crawl::{Crawl, CrawlOutcome, HORN_DOG, PAPA_ROACH};
use crate::error::Result;
use crate::reporter::TracingReporter;

/// What a finished run produced.
#[derive(Clone, Debug)]
pub enum RunOutcome {
    Demo(BattleStatus),
    Crawl(CrawlOutcome),
}

/// Main runtime that plays demo fights and boss crawls.
pub struct Runtime {
    config: RuntimeConfig,
    content: ContentSet,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentSet {
        &self.content
    }

    /// Fresh RNG for one run, seeded from the config when a seed is set.
    pub fn rng(&self) -> SeededRng {
        self.config
            .seed
            .map_or_else(SeededRng::from_entropy, SeededRng::new)
    }

    /// Spends the configured grid points and builds the starting character.
    pub fn create_character(&self, decisions: &mut dyn DecisionSource) -> Result<Actor> {
        let cells = choose_cells(&self.content.grid, self.config.grid_points, decisions)?;
        tracing::info!(
            cells = ?cells.iter().map(|cell| cell.name.as_str()).collect::<Vec<_>>(),
            "character created"
        );
        Ok(self.content.character.build_with(cells))
    }

    /// The stock character against Papa Roach and Horn Dog.
    pub fn demo_battle(&self) -> Result<Battle> {
        let player = self.content.character.builder().build();
        let enemies = [PAPA_ROACH, HORN_DOG]
            .into_iter()
            .map(|name| self.content.roster.get(name).map(Actor::from_archetype))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Battle::with_actors(
            self.content.config.clone(),
            [player],
            enemies,
        ))
    }

    pub fn run_demo(
        &self,
        decisions: &mut dyn DecisionSource,
        reporter: &mut dyn Reporter,
    ) -> Result<BattleStatus> {
        let mut battle = self.demo_battle()?;
        let mut rng = self.rng();
        let mut reporter = TracingReporter::new(reporter);
        let mut ctx = BattleContext::new(decisions, &mut rng, &mut reporter);

        tracing::info!(seed = ?self.config.seed, "demo battle started");
        ctx.report(battle.overview());
        Ok(battle.run(&mut ctx)?)
    }

    pub fn run_crawl(
        &self,
        decisions: &mut dyn DecisionSource,
        reporter: &mut dyn Reporter,
    ) -> Result<CrawlOutcome> {
        self.crawl_with(decisions, reporter, None)
    }

    fn crawl_with(
        &self,
        decisions: &mut dyn DecisionSource,
        reporter: &mut dyn Reporter,
        battle_limit: Option<u32>,
    ) -> Result<CrawlOutcome> {
        let player = self.create_character(&mut *decisions)?;
        let mut crawl = Crawl::new(
            self.content.config.clone(),
            self.content.roster.clone(),
            self.config.difficulty,
            player,
        );
        if let Some(limit) = battle_limit {
            crawl = crawl.with_battle_limit(limit);
        }

        let mut rng = self.rng();
        let mut reporter = TracingReporter::new(reporter);
        let mut ctx = BattleContext::new(decisions, &mut rng, &mut reporter);

        tracing::info!(
            seed = ?self.config.seed,
            difficulty = %self.config.difficulty,
            "crawl started"
        );
        crawl.run(&mut ctx)
    }

    /// Crawl that stops after `limit` battles at the latest.
    pub fn run_crawl_limited(
        &self,
        decisions: &mut dyn DecisionSource,
        reporter: &mut dyn Reporter,
        limit: u32,
    ) -> Result<CrawlOutcome> {
        self.crawl_with(decisions, reporter, Some(limit))
    }

    /// Plays whatever the configured mode asks for.
    pub fn run(
        &self,
        decisions: &mut dyn DecisionSource,
        reporter: &mut dyn Reporter,
    ) -> Result<RunOutcome> {
        match self.config.mode {
            RunMode::Demo => self.run_demo(decisions, reporter).map(RunOutcome::Demo),
            RunMode::Crawl => self.run_crawl(decisions, reporter).map(RunOutcome::Crawl),
        }
    }
}

/// Builder for [`Runtime`]. Without explicit content it loads
/// `config.data_dir`, or the built-in content when no directory is set.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<ContentSet>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide content directly instead of loading it
    pub fn content(mut self, content: ContentSet) -> Self {
        self.content = Some(content);
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let content = match (self.content, &self.config.data_dir) {
            (Some(content), _) => content,
            (None, Some(dir)) => ContentFactory::new(dir).load_all()?,
            (None, None) => ContentSet::builtin()?,
        };
        Ok(Runtime {
            config: self.config,
            content,
        })
    }
}
