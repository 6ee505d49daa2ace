//! Narration events and the sink they are reported to.
//!
//! Reporting is observational only. Nothing a [`Reporter`] does can feed
//! back into the battle.

/// Name and hp of one actor, as shown by a `look`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorSummary {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
}

impl std::fmt::Display for ActorSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}/{}", self.name, self.hp, self.max_hp)
    }
}

/// Everything that happens during a battle, in the order it happens.
#[derive(Clone, Debug, PartialEq)]
pub enum BattleEvent {
    RoundStarted {
        round: u32,
    },
    TurnStarted {
        actor: String,
    },
    Attacked {
        attacker: String,
        target: String,
    },
    CriticalHit,
    DamageTaken {
        actor: String,
        amount: u32,
        remaining: u32,
    },
    Healed {
        actor: String,
        amount: u32,
        remaining: u32,
    },
    Died {
        actor: String,
    },
    AuraApplied {
        actor: String,
        aura: String,
    },
    AuraExpired {
        actor: String,
        aura: String,
    },
    Spawned {
        spawner: String,
        spawned: String,
    },
    Equipped {
        actor: String,
        weapon: String,
    },
    ItemUsed {
        user: String,
        item: String,
        target: String,
    },
    AbilityUsed {
        user: String,
        ability: String,
    },
    SpellCast {
        caster: String,
        spell: String,
    },
    Counterattack {
        responder: String,
        target: String,
        damage: u32,
    },
    Interaction {
        actor: String,
        target: String,
        outcome: String,
    },
    Overview {
        players: Vec<ActorSummary>,
        enemies: Vec<ActorSummary>,
    },
    NoValidTargets {
        item: String,
    },
    BattleWon,
    BattleLost,
}

fn join(summaries: &[ActorSummary]) -> String {
    summaries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundStarted { round } => write!(f, "=== round {round} ==="),
            Self::TurnStarted { actor } => write!(f, "{actor}'s turn"),
            Self::Attacked { attacker, target } => write!(f, "{attacker} attacked {target}."),
            Self::CriticalHit => f.write_str("Critical hit!"),
            Self::DamageTaken {
                actor,
                amount,
                remaining,
            } => write!(
                f,
                "{actor} took {amount} damage. {actor} has {remaining} hp remaining."
            ),
            Self::Healed {
                actor,
                amount,
                remaining,
            } => write!(
                f,
                "{actor} healed {amount}. {actor} has {remaining} hp remaining."
            ),
            Self::Died { actor } => write!(f, "{actor} died"),
            Self::AuraApplied { actor, aura } => write!(f, "{actor} gained {aura}"),
            Self::AuraExpired { aura, .. } => write!(f, "{aura} wore off"),
            Self::Spawned { spawner, spawned } => write!(f, "{spawner} spawned {spawned}"),
            Self::Equipped { actor, weapon } => write!(f, "{actor} equipped {weapon}"),
            Self::ItemUsed { user, item, target } => {
                if user == target {
                    write!(f, "{user} used {item}")
                } else {
                    write!(f, "{user} used {item} on {target}")
                }
            }
            Self::AbilityUsed { user, ability } => write!(f, "{user} used {ability}"),
            Self::SpellCast { caster, spell } => write!(f, "{caster} cast {spell}"),
            Self::Counterattack {
                responder,
                target,
                damage,
            } => write!(f, "{responder} struck back at {target} for {damage} damage."),
            Self::Interaction { outcome, .. } => f.write_str(outcome),
            Self::Overview { players, enemies } => {
                write!(f, "players: [{}] enemies: [{}]", join(players), join(enemies))
            }
            Self::NoValidTargets { item } => write!(f, "No valid targets for {item}"),
            Self::BattleWon => f.write_str("All enemies dead. You win."),
            Self::BattleLost => f.write_str("All players dead. You lose."),
        }
    }
}

/// Line-oriented narration sink.
pub trait Reporter {
    fn report(&mut self, event: &BattleEvent);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: &BattleEvent) {
        (**self).report(event);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, event: &BattleEvent) {
        (**self).report(event);
    }
}

/// Records events in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<BattleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&BattleEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl Reporter for EventLog {
    fn report(&mut self, event: &BattleEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_lines() {
        let mut log = EventLog::new();
        log.report(&BattleEvent::Attacked {
            attacker: "Anzacel".into(),
            target: "lil bug".into(),
        });
        log.report(&BattleEvent::DamageTaken {
            actor: "lil bug".into(),
            amount: 3,
            remaining: 2,
        });
        log.report(&BattleEvent::AuraExpired {
            actor: "Anzacel".into(),
            aura: "Berserk".into(),
        });

        assert_eq!(
            log.lines(),
            vec![
                "Anzacel attacked lil bug.",
                "lil bug took 3 damage. lil bug has 2 hp remaining.",
                "Berserk wore off",
            ]
        );
        assert_eq!(log.count(|e| matches!(e, BattleEvent::DamageTaken { .. })), 1);
    }

    #[test]
    fn overview_lists_both_sides() {
        let event = BattleEvent::Overview {
            players: vec![ActorSummary {
                name: "Anzacel".into(),
                hp: 7,
                max_hp: 10,
            }],
            enemies: vec![],
        };
        assert_eq!(event.to_string(), "players: [Anzacel 7/10] enemies: []");
    }
}
