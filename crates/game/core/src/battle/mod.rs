//! Battle scheduler.
//!
//! [`Battle`] owns every actor for the lifetime of the fight and drives the
//! round loop: sort initiative, pop the head, let it act, remove the dead,
//! check for a winner. Outside collaborators (decisions, randomness,
//! narration) are borrowed per call through [`BattleContext`].
//!
//! Actors are addressed by [`ActorId`], an index into the roster. The roster
//! only grows, so ids stay valid after an actor dies and is dropped from the
//! side lists and the initiative order.

mod combat;
mod enemy_turn;
pub mod initiative;
mod player_turn;

pub use player_turn::PlayerAction;

use std::collections::{HashMap, VecDeque};

use crate::actor::{Actor, EnemyArchetype};
use crate::config::BattleConfig;
use crate::decision::{ChoiceKind, DecisionSource};
use crate::error::{BattleError, BattleResult};
use crate::report::{ActorSummary, BattleEvent, Reporter};
use crate::rng::RngOracle;

/// Index of an actor in the battle roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub usize);

impl ActorId {
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BattleStatus {
    Running,
    PlayersWon,
    PlayersLost,
}

impl BattleStatus {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Collaborators a battle needs while it runs.
pub struct BattleContext<'a> {
    pub decisions: &'a mut dyn DecisionSource,
    pub rng: &'a mut dyn RngOracle,
    pub reporter: &'a mut dyn Reporter,
}

impl<'a> BattleContext<'a> {
    pub fn new(
        decisions: &'a mut dyn DecisionSource,
        rng: &'a mut dyn RngOracle,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            decisions,
            rng,
            reporter,
        }
    }

    pub fn report(&mut self, event: BattleEvent) {
        self.reporter.report(&event);
    }

    /// Asks the decision source and validates the answer.
    pub fn choose(&mut self, kind: ChoiceKind, options: &[String]) -> BattleResult<usize> {
        if options.is_empty() {
            return Err(BattleError::NoOptions(kind));
        }
        let index = self.decisions.choose(kind, options)?;
        if index >= options.len() {
            return Err(BattleError::ChoiceOutOfRange {
                kind,
                index,
                len: options.len(),
            });
        }
        Ok(index)
    }
}

/// One fight between a party of players and a group of enemies.
#[derive(Clone, Debug)]
pub struct Battle {
    config: BattleConfig,
    roster: Vec<Actor>,
    players: Vec<ActorId>,
    enemies: Vec<ActorId>,
    initiative: VecDeque<ActorId>,
    round: u32,
    name_counters: HashMap<String, u32>,
}

impl Battle {
    pub fn new(config: BattleConfig) -> Self {
        Self {
            config,
            roster: Vec::new(),
            players: Vec::new(),
            enemies: Vec::new(),
            initiative: VecDeque::new(),
            round: 0,
            name_counters: HashMap::new(),
        }
    }

    /// Convenience constructor for a ready-made line-up.
    pub fn with_actors(
        config: BattleConfig,
        players: impl IntoIterator<Item = Actor>,
        enemies: impl IntoIterator<Item = Actor>,
    ) -> Self {
        let mut battle = Self::new(config);
        for player in players {
            battle.add_player(player);
        }
        for enemy in enemies {
            battle.add_enemy(enemy);
        }
        battle
    }

    pub const fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub const fn round(&self) -> u32 {
        self.round
    }

    pub fn add_player(&mut self, mut actor: Actor) -> ActorId {
        actor.name = self.unique_name(&actor.name, false);
        let id = self.push(actor);
        self.players.push(id);
        id
    }

    pub fn add_enemy(&mut self, mut actor: Actor) -> ActorId {
        actor.name = self.unique_name(&actor.name, false);
        let id = self.push(actor);
        self.enemies.push(id);
        id
    }

    /// Adds a freshly built enemy mid-battle, named `<name> <n>`.
    ///
    /// With `joins_round` the spawn is sorted into the remaining initiative
    /// order of the current round; otherwise it first acts next round.
    pub fn spawn_enemy(&mut self, archetype: EnemyArchetype, joins_round: bool) -> ActorId {
        let name = self.unique_name(&archetype.name, true);
        let id = self.add_enemy(Actor::enemy(name, archetype));
        if joins_round {
            self.initiative.push_back(id);
            initiative::sort(&self.roster, self.initiative.make_contiguous());
        }
        id
    }

    fn push(&mut self, actor: Actor) -> ActorId {
        let id = ActorId(self.roster.len());
        self.roster.push(actor);
        id
    }

    fn is_name_taken(&self, name: &str) -> bool {
        self.roster.iter().any(|actor| actor.name == name)
    }

    fn unique_name(&mut self, base: &str, always_number: bool) -> String {
        if !always_number && !self.is_name_taken(base) {
            return base.to_string();
        }
        let mut n = self.name_counters.get(base).copied().unwrap_or(0);
        let name = loop {
            n += 1;
            let candidate = format!("{base} {n}");
            if !self.is_name_taken(&candidate) {
                break candidate;
            }
        };
        self.name_counters.insert(base.to_string(), n);
        name
    }

    pub fn actor(&self, id: ActorId) -> BattleResult<&Actor> {
        self.roster
            .get(id.index())
            .ok_or(BattleError::UnknownActor(id))
    }

    pub fn actor_mut(&mut self, id: ActorId) -> BattleResult<&mut Actor> {
        self.roster
            .get_mut(id.index())
            .ok_or(BattleError::UnknownActor(id))
    }

    /// Every actor ever added, dead ones included.
    pub fn roster(&self) -> &[Actor] {
        &self.roster
    }

    pub fn players(&self) -> &[ActorId] {
        &self.players
    }

    pub fn enemies(&self) -> &[ActorId] {
        &self.enemies
    }

    pub fn living_players(&self) -> Vec<ActorId> {
        self.living(&self.players)
    }

    pub fn living_enemies(&self) -> Vec<ActorId> {
        self.living(&self.enemies)
    }

    fn living(&self, ids: &[ActorId]) -> Vec<ActorId> {
        ids.iter()
            .copied()
            .filter(|id| self.roster.get(id.index()).is_some_and(Actor::is_alive))
            .collect()
    }

    pub fn initiative_names(&self) -> Vec<&str> {
        self.initiative
            .iter()
            .filter_map(|id| self.roster.get(id.index()))
            .map(|actor| actor.name.as_str())
            .collect()
    }

    /// A side with no living actor loses. Players are checked first.
    pub fn status(&self) -> BattleStatus {
        if self.living_players().is_empty() {
            BattleStatus::PlayersLost
        } else if self.living_enemies().is_empty() {
            BattleStatus::PlayersWon
        } else {
            BattleStatus::Running
        }
    }

    /// Drops dead actors from both sides and from the pending initiative.
    pub fn remove_dead_actors(&mut self) {
        let roster = &self.roster;
        let alive = |id: &ActorId| roster.get(id.index()).is_some_and(Actor::is_alive);
        self.players.retain(alive);
        self.enemies.retain(alive);
        self.initiative.retain(alive);
    }

    /// Starts a new round: bumps the counter and re-sorts every living
    /// actor into the initiative order.
    pub fn begin_round(&mut self) {
        self.round += 1;
        let mut order: Vec<ActorId> = self
            .players
            .iter()
            .chain(self.enemies.iter())
            .copied()
            .filter(|id| self.roster[id.index()].is_alive())
            .collect();
        initiative::sort(&self.roster, &mut order);
        self.initiative = order.into();
    }

    /// Plays one full round, stopping early once a side is eliminated.
    pub fn run_round(&mut self, ctx: &mut BattleContext<'_>) -> BattleResult<BattleStatus> {
        self.begin_round();
        ctx.report(BattleEvent::RoundStarted { round: self.round });
        tracing::trace!(round = self.round, order = ?self.initiative_names(), "round started");

        while let Some(id) = self.initiative.pop_front() {
            self.take_turn(id, ctx)?;
            self.remove_dead_actors();
            if self.status().is_over() {
                break;
            }
        }
        Ok(self.status())
    }

    /// Runs rounds until one side wins, then reports the outcome.
    pub fn run(&mut self, ctx: &mut BattleContext<'_>) -> BattleResult<BattleStatus> {
        let mut status = self.status();
        while !status.is_over() {
            status = self.run_round(ctx)?;
        }
        match status {
            BattleStatus::PlayersWon => ctx.report(BattleEvent::BattleWon),
            BattleStatus::PlayersLost => ctx.report(BattleEvent::BattleLost),
            BattleStatus::Running => {}
        }
        tracing::debug!(%status, rounds = self.round, "battle finished");
        Ok(status)
    }

    /// Lets one actor act, then decays its auras.
    ///
    /// Handing a turn to a dead actor is a scheduler bug and is rejected.
    pub fn take_turn(&mut self, id: ActorId, ctx: &mut BattleContext<'_>) -> BattleResult<()> {
        let actor = self.actor(id)?;
        if !actor.is_alive() {
            return Err(BattleError::DeadActorTurn {
                actor: actor.name.clone(),
            });
        }
        let name = actor.name.clone();
        let is_player = actor.is_player();

        ctx.report(BattleEvent::TurnStarted {
            actor: name.clone(),
        });
        tracing::trace!(actor = %name, round = self.round, "turn started");

        if is_player {
            player_turn::run(self, id, ctx)?;
        } else {
            enemy_turn::run(self, id, ctx)?;
        }

        for aura in self.actor_mut(id)?.decrement_auras() {
            ctx.report(BattleEvent::AuraExpired {
                actor: name.clone(),
                aura: aura.name,
            });
        }
        Ok(())
    }

    /// Snapshot of both sides, as shown by `look`.
    pub fn overview(&self) -> BattleEvent {
        let summarize = |ids: &[ActorId]| {
            ids.iter()
                .filter_map(|id| self.roster.get(id.index()))
                .map(|actor| ActorSummary {
                    name: actor.name.clone(),
                    hp: actor.hp(),
                    max_hp: actor.max_hp(),
                })
                .collect()
        };
        BattleEvent::Overview {
            players: summarize(&self.players),
            enemies: summarize(&self.enemies),
        }
    }

    /// Hands back every player actor, dead or alive, in the order added.
    pub fn into_players(self) -> Vec<Actor> {
        self.roster
            .into_iter()
            .filter(Actor::is_player)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::PlayerState;
    use crate::decision::FirstOption;
    use crate::report::EventLog;
    use crate::rng::FixedRng;
    use crate::stats::StatTable;

    fn hero(hp: u32) -> Actor {
        Actor::player("Anzacel", hp, 10, StatTable::default(), PlayerState::new(10))
    }

    #[test]
    fn spawn_names_are_unique_and_numbered() {
        let mut battle = Battle::with_actors(
            BattleConfig::default(),
            [hero(10)],
            [Actor::from_archetype(EnemyArchetype::lil_bug())],
        );
        let first = battle.spawn_enemy(EnemyArchetype::lil_bug(), false);
        let second = battle.spawn_enemy(EnemyArchetype::lil_bug(), false);
        let dupe = battle.add_enemy(Actor::from_archetype(EnemyArchetype::lil_bug()));

        assert_eq!(battle.actor(first).map(|a| a.name.as_str()), Ok("lil bug 1"));
        assert_eq!(battle.actor(second).map(|a| a.name.as_str()), Ok("lil bug 2"));
        assert_eq!(battle.actor(dupe).map(|a| a.name.as_str()), Ok("lil bug 3"));
    }

    #[test]
    fn spawn_joining_the_round_is_sorted_in() {
        let mut battle = Battle::with_actors(
            BattleConfig::default(),
            [hero(10)],
            [Actor::from_archetype(EnemyArchetype::papa_roach())],
        );
        battle.begin_round();
        assert_eq!(battle.initiative_names(), vec!["Anzacel", "Papa Roach"]);

        battle.spawn_enemy(EnemyArchetype::lil_bug(), true);
        assert_eq!(
            battle.initiative_names(),
            vec!["Anzacel", "lil bug 1", "Papa Roach"]
        );

        battle.spawn_enemy(EnemyArchetype::lil_bug(), false);
        assert_eq!(battle.initiative_names().len(), 3);
        assert_eq!(battle.enemies().len(), 3);
    }

    #[test]
    fn status_prefers_loss_when_both_sides_are_empty() {
        let battle = Battle::new(BattleConfig::default());
        assert_eq!(battle.status(), BattleStatus::PlayersLost);

        let mut battle = Battle::with_actors(BattleConfig::default(), [hero(10)], []);
        assert_eq!(battle.status(), BattleStatus::PlayersWon);
        battle.add_enemy(Actor::from_archetype(EnemyArchetype::lil_bug()));
        assert_eq!(battle.status(), BattleStatus::Running);
    }

    #[test]
    fn dead_actor_cannot_take_a_turn() {
        let mut battle = Battle::with_actors(
            BattleConfig::default(),
            [hero(10)],
            [Actor::from_archetype(EnemyArchetype::lil_bug())],
        );
        let bug = battle.enemies()[0];
        if let Ok(actor) = battle.actor_mut(bug) {
            actor.take_damage(99);
        }

        let mut decisions = FirstOption;
        let mut rng = FixedRng::default();
        let mut log = EventLog::new();
        let mut ctx = BattleContext::new(&mut decisions, &mut rng, &mut log);

        let err = battle.take_turn(bug, &mut ctx).unwrap_err();
        assert!(matches!(err, BattleError::DeadActorTurn { .. }));

        battle.remove_dead_actors();
        assert!(battle.enemies().is_empty());
        assert!(battle.living_enemies().is_empty());
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        struct TooFar;
        impl DecisionSource for TooFar {
            fn choose(
                &mut self,
                _kind: ChoiceKind,
                options: &[String],
            ) -> Result<usize, crate::decision::DecisionError> {
                Ok(options.len())
            }
        }

        let mut decisions = TooFar;
        let mut rng = FixedRng::default();
        let mut log = EventLog::new();
        let mut ctx = BattleContext::new(&mut decisions, &mut rng, &mut log);
        let options = vec!["only".to_string()];

        assert_eq!(
            ctx.choose(ChoiceKind::Action, &options),
            Err(BattleError::ChoiceOutOfRange {
                kind: ChoiceKind::Action,
                index: 1,
                len: 1,
            })
        );
        assert_eq!(
            ctx.choose(ChoiceKind::Action, &[]),
            Err(BattleError::NoOptions(ChoiceKind::Action))
        );
    }
}
