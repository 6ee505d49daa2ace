//! Enemy policies. Every random pick goes through the injected oracle.

use super::{ActorId, Battle, BattleContext};
use crate::actor::Behavior;
use crate::error::{BattleError, BattleResult};
use crate::report::BattleEvent;

impl Battle {
    /// Attacks a uniformly random living player, if any.
    fn attack_random_player(
        &mut self,
        id: ActorId,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<()> {
        let targets = self.living_players();
        if targets.is_empty() {
            return Ok(());
        }
        let target = targets[ctx.rng.pick(targets.len())];
        self.attack(id, target, ctx)?;
        Ok(())
    }
}

pub(super) fn run(
    battle: &mut Battle,
    id: ActorId,
    ctx: &mut BattleContext<'_>,
) -> BattleResult<()> {
    let actor = battle.actor(id)?;
    let behavior = actor
        .as_enemy()
        .map(|enemy| enemy.archetype.behavior.clone())
        .ok_or(BattleError::UnknownActor(id))?;
    let hp = actor.hp();

    match behavior {
        Behavior::Aggressive | Behavior::Retaliate { .. } => {
            battle.attack_random_player(id, ctx)
        }
        Behavior::Brood {
            spawn,
            hp_threshold,
            joins_round,
        } => {
            let spawns = hp >= hp_threshold && ctx.rng.pick(2) == 0;
            if !spawns {
                return battle.attack_random_player(id, ctx);
            }

            let spawned = battle.spawn_enemy(*spawn, joins_round);
            let spawner = battle.actor(id)?.name.clone();
            ctx.report(BattleEvent::Spawned {
                spawner: spawner.clone(),
                spawned: battle.actor(spawned)?.name.clone(),
            });

            tracing::trace!(%spawner, "brood halves itself");

            let halving = battle.actor(id)?.halving_damage();
            battle.apply_damage(id, halving, ctx)?;
            Ok(())
        }
    }
}
