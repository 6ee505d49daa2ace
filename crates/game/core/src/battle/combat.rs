//! Mutations shared by player and enemy turns.

use super::{ActorId, Battle, BattleContext};
use crate::actor::{DamageOutcome, Reaction};
use crate::aura::Aura;
use crate::combat::{AttackResult, AttackTags, damage_for_type, resolve_attack, round_damage};
use crate::error::BattleResult;
use crate::report::BattleEvent;
use crate::stats::DamageType;

impl Battle {
    /// Full attack: one crit roll, damage to `target`, then the target's
    /// reaction. The reaction itself never triggers further reactions.
    pub fn attack(
        &mut self,
        attacker: ActorId,
        target: ActorId,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<AttackResult> {
        let critical = ctx.rng.chance(self.config.crit_probability);

        let (attacker_name, target_name, result) = {
            let a = self.actor(attacker)?;
            let t = self.actor(target)?;
            let result = resolve_attack(
                &a.effective(),
                &a.attack_profile(),
                &t.effective(),
                critical,
                &self.config,
            );
            (a.name.clone(), t.name.clone(), result)
        };

        ctx.report(BattleEvent::Attacked {
            attacker: attacker_name,
            target: target_name,
        });
        if result.critical {
            ctx.report(BattleEvent::CriticalHit);
        }
        self.apply_damage(target, result.damage, ctx)?;
        self.respond_to_attack(target, attacker, ctx)?;
        Ok(result)
    }

    /// Retaliation hook. Only a living responder strikes back, and its
    /// damage bypasses the formula.
    fn respond_to_attack(
        &mut self,
        responder: ActorId,
        attacker: ActorId,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<()> {
        let actor = self.actor(responder)?;
        if !actor.is_alive() {
            return Ok(());
        }
        let Some(damage) = actor.counter_damage() else {
            return Ok(());
        };
        let responder_name = actor.name.clone();
        let target_name = self.actor(attacker)?.name.clone();

        ctx.report(BattleEvent::Counterattack {
            responder: responder_name,
            target: target_name,
            damage,
        });
        self.apply_damage(attacker, damage, ctx)?;
        Ok(())
    }

    /// Applies already-computed damage and narrates the hp change and any
    /// death.
    pub fn apply_damage(
        &mut self,
        id: ActorId,
        amount: u32,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<DamageOutcome> {
        let actor = self.actor_mut(id)?;
        let outcome = actor.take_damage(amount);
        let name = actor.name.clone();

        ctx.report(BattleEvent::DamageTaken {
            actor: name.clone(),
            amount,
            remaining: outcome.remaining,
        });
        if outcome.died {
            tracing::debug!(actor = %name, "actor died");
            ctx.report(BattleEvent::Died { actor: name });
        }
        Ok(outcome)
    }

    /// Heals a living actor. Healing the dead does nothing.
    pub fn apply_heal(
        &mut self,
        id: ActorId,
        amount: u32,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<u32> {
        let actor = self.actor_mut(id)?;
        if !actor.is_alive() {
            tracing::trace!(actor = %actor.name, "heal ignored on dead actor");
            return Ok(0);
        }
        let healed = actor.heal(amount);
        ctx.report(BattleEvent::Healed {
            actor: actor.name.clone(),
            amount: healed,
            remaining: actor.hp(),
        });
        Ok(healed)
    }

    pub fn apply_aura(
        &mut self,
        id: ActorId,
        aura: Aura,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<()> {
        let actor = self.actor_mut(id)?;
        ctx.report(BattleEvent::AuraApplied {
            actor: actor.name.clone(),
            aura: aura.to_string(),
        });
        actor.apply_aura(aura);
        Ok(())
    }

    /// Special damage against every living enemy. Never critical, never
    /// provokes retaliation.
    pub fn area_flames(
        &mut self,
        caster: ActorId,
        power: f64,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<()> {
        for target in self.living_enemies() {
            let damage = {
                let c = self.actor(caster)?;
                let t = self.actor(target)?;
                round_damage(damage_for_type(
                    &c.effective(),
                    &t.effective(),
                    power,
                    DamageType::Special,
                    AttackTags::SPECIAL,
                ))
            };
            self.apply_damage(target, damage, ctx)?;
        }
        Ok(())
    }

    /// `actor` pokes `target`; interactable enemies react.
    pub fn interact(
        &mut self,
        actor: ActorId,
        target: ActorId,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<()> {
        let actor_name = self.actor(actor)?.name.clone();
        let target_actor = self.actor(target)?;
        let target_name = target_actor.name.clone();

        match target_actor.interaction() {
            Some(Reaction::Bite { damage }) => {
                ctx.report(BattleEvent::Interaction {
                    actor: actor_name.clone(),
                    target: target_name.clone(),
                    outcome: format!("{target_name} bit {actor_name}'s finger."),
                });
                self.apply_damage(actor, damage, ctx)?;
            }
            Some(Reaction::Shrug) | None => {
                ctx.report(BattleEvent::Interaction {
                    actor: actor_name.clone(),
                    target: target_name.clone(),
                    outcome: format!("{target_name} ignored {actor_name}."),
                });
            }
        }
        Ok(())
    }
}
