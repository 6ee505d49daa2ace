//! Boss crawl: consecutive battles with one persistent player.

use battle_content::Roster;
use battle_core::{Actor, Battle, BattleConfig, BattleContext, BattleStatus};

use crate::config::Difficulty;
use crate::error::{Result, RuntimeError};

pub const LIL_BUG: &str = "lil bug";
pub const PAPA_ROACH: &str = "Papa Roach";
pub const HORN_DOG: &str = "Horn Dog";

/// Decides which enemies the next battle holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterPlan {
    difficulty: Difficulty,
    papa_roaches: u32,
    horn_dogs: u32,
}

impl EncounterPlan {
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            papa_roaches: 0,
            horn_dogs: 0,
        }
    }

    /// Enemy names for the battle fought with `score` wins so far.
    ///
    /// Call once per battle with increasing scores; `hard` keeps a running
    /// tally. Score 0 and an empty tally both mean a single lil bug.
    pub fn next(&mut self, score: u32) -> Vec<&'static str> {
        if score == 0 {
            return vec![LIL_BUG];
        }
        match self.difficulty {
            Difficulty::Easy if score % 2 == 1 => vec![PAPA_ROACH],
            Difficulty::Easy => vec![HORN_DOG],
            Difficulty::Hard => {
                if score % 3 == 2 {
                    self.papa_roaches = self.papa_roaches.saturating_sub(1);
                    self.horn_dogs += 1;
                } else {
                    self.papa_roaches += 1;
                }
                let mut names = Vec::new();
                names.extend(std::iter::repeat_n(PAPA_ROACH, self.papa_roaches as usize));
                names.extend(std::iter::repeat_n(HORN_DOG, self.horn_dogs as usize));
                if names.is_empty() {
                    names.push(LIL_BUG);
                }
                names
            }
        }
    }
}

/// Result of a finished crawl.
#[derive(Clone, Debug)]
pub struct CrawlOutcome {
    pub score: u32,
    pub battles: u32,
    pub last_status: BattleStatus,
    pub player: Actor,
}

/// Runs battles until the player loses or the battle limit is reached.
pub struct Crawl {
    config: BattleConfig,
    roster: Roster,
    plan: EncounterPlan,
    player: Actor,
    battle_limit: Option<u32>,
}

impl Crawl {
    pub fn new(
        config: BattleConfig,
        roster: Roster,
        difficulty: Difficulty,
        player: Actor,
    ) -> Self {
        Self {
            config,
            roster,
            plan: EncounterPlan::new(difficulty),
            player,
            battle_limit: None,
        }
    }

    /// Stops after `limit` battles even if the player keeps winning.
    #[must_use]
    pub fn with_battle_limit(mut self, limit: u32) -> Self {
        self.battle_limit = Some(limit);
        self
    }

    fn encounter(&mut self, player: Actor, score: u32) -> Result<Battle> {
        let enemies = self
            .plan
            .next(score)
            .into_iter()
            .map(|name| self.roster.get(name).map(Actor::from_archetype))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::debug!(
            score,
            enemies = ?enemies.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            "next encounter"
        );
        Ok(Battle::with_actors(self.config.clone(), [player], enemies))
    }

    pub fn run(mut self, ctx: &mut BattleContext<'_>) -> Result<CrawlOutcome> {
        let mut player = self.player.clone();
        let mut score = 0;
        let mut battles = 0;

        let last_status = loop {
            let mut battle = self.encounter(player, score)?;
            let status = battle.run(ctx)?;
            player = battle
                .into_players()
                .into_iter()
                .next()
                .ok_or(RuntimeError::MissingPlayer)?;
            battles += 1;

            if status != BattleStatus::PlayersWon {
                break status;
            }
            score += 1;
            tracing::info!(score, hp = player.hp(), "battle won");

            if self.battle_limit.is_some_and(|limit| battles >= limit) {
                break status;
            }
        };

        tracing::info!(score, battles, "crawl finished");
        Ok(CrawlOutcome {
            score,
            battles,
            last_status,
            player,
        })
    }
}
