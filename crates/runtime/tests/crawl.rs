use battle_content::ContentSet;
use battle_core::{
    Actor, BattleContext, BattleEvent, BattleStatus, DamageType, EventLog, FixedRng, PlayerState,
    ScriptedChoices, StatKind, StatTable,
};
use battle_runtime::{Crawl, Difficulty, RunMode, RunOutcome, Runtime, RuntimeConfig};

fn content() -> ContentSet {
    ContentSet::builtin().unwrap()
}

fn champion() -> Actor {
    let stats = StatTable::default().with(DamageType::Physical, StatKind::Power, 100.0);
    Actor::player("Champion", 1000, 10, stats, PlayerState::new(0))
}

fn attack_everything() -> ScriptedChoices {
    ScriptedChoices::default().with_fallback("attack")
}

#[test]
fn champion_clears_easy_encounters_until_the_limit() {
    let content = content();
    let crawl = Crawl::new(
        content.config.without_crits(),
        content.roster,
        Difficulty::Easy,
        champion(),
    )
    .with_battle_limit(4);

    let mut decisions = attack_everything();
    let mut rng = FixedRng::default();
    let mut log = EventLog::new();
    let outcome = {
        let mut ctx = BattleContext::new(&mut decisions, &mut rng, &mut log);
        crawl.run(&mut ctx).unwrap()
    };

    assert_eq!(outcome.score, 4);
    assert_eq!(outcome.battles, 4);
    assert_eq!(outcome.last_status, BattleStatus::PlayersWon);
    assert_eq!(outcome.player.hp(), 1000);
    assert_eq!(log.count(|e| *e == BattleEvent::BattleWon), 4);

    let killed: Vec<&str> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            BattleEvent::Died { actor } => Some(actor.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(killed, vec!["lil bug", "Papa Roach", "Horn Dog", "Papa Roach"]);
}

#[test]
fn crawl_ends_on_first_loss() {
    let content = content();
    let weakling = Actor::player("Weakling", 1, 1, StatTable::default(), PlayerState::new(0));
    let crawl = Crawl::new(content.config, content.roster, Difficulty::Hard, weakling);

    let mut decisions = attack_everything();
    let mut rng = FixedRng::default();
    let mut log = EventLog::new();
    let outcome = {
        let mut ctx = BattleContext::new(&mut decisions, &mut rng, &mut log);
        crawl.run(&mut ctx).unwrap()
    };

    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.battles, 1);
    assert_eq!(outcome.last_status, BattleStatus::PlayersLost);
    assert!(!outcome.player.is_alive());
    assert_eq!(log.events().last(), Some(&BattleEvent::BattleLost));
}

#[test]
fn player_damage_carries_between_battles() {
    let content = content();
    let mut tough = champion();
    tough.take_damage(990);
    let crawl = Crawl::new(
        content.config.without_crits(),
        content.roster,
        Difficulty::Easy,
        tough,
    )
    .with_battle_limit(2);

    let mut decisions = attack_everything();
    let mut rng = FixedRng::default();
    let mut log = EventLog::new();
    let outcome = {
        let mut ctx = BattleContext::new(&mut decisions, &mut rng, &mut log);
        crawl.run(&mut ctx).unwrap()
    };

    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.player.hp(), 10);
}

#[test]
fn seeded_runs_repeat_exactly() {
    let config = RuntimeConfig::default()
        .with_seed(7)
        .with_difficulty(Difficulty::Hard)
        .with_grid_points(3);
    let runtime = Runtime::builder().config(config).build().unwrap();

    let play = || {
        let mut decisions = attack_everything();
        let mut log = EventLog::new();
        let outcome = runtime
            .run_crawl_limited(&mut decisions, &mut log, 3)
            .unwrap();
        (outcome.score, outcome.battles, log.into_events())
    };

    let (score, battles, events) = play();
    assert!(battles <= 3);
    assert!(score <= battles);
    assert_eq!(play(), (score, battles, events));
}

#[test]
fn demo_mode_runs_one_battle() {
    let config = RuntimeConfig::default().with_seed(3).with_mode(RunMode::Demo);
    let runtime = Runtime::builder().config(config).build().unwrap();

    let mut decisions = attack_everything();
    let mut log = EventLog::new();
    let outcome = runtime.run(&mut decisions, &mut log).unwrap();

    let RunOutcome::Demo(status) = outcome else {
        panic!("expected a demo outcome, got {outcome:?}");
    };
    assert!(status.is_over());
    assert!(matches!(log.events().first(), Some(BattleEvent::Overview { .. })));
    let last = log.events().last().cloned();
    assert!(matches!(last, Some(BattleEvent::BattleWon | BattleEvent::BattleLost)));
}
