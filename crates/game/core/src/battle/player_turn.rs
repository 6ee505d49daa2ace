//! Menu-driven player turn bounded by action points.

use super::{ActorId, Battle, BattleContext};
use crate::catalog::{AbilityEffect, Item, ItemTargeting, Spell};
use crate::config::ActionCosts;
use crate::decision::ChoiceKind;
use crate::error::{BattleError, BattleResult};
use crate::report::BattleEvent;

/// Entries of the player action menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum PlayerAction {
    #[strum(serialize = "attack")]
    Attack,
    #[strum(serialize = "ability")]
    Ability,
    #[strum(serialize = "item")]
    Item,
    #[strum(serialize = "interact")]
    Interact,
    #[strum(serialize = "end turn")]
    EndTurn,
    #[strum(serialize = "look")]
    Look,
}

impl PlayerAction {
    /// Fixed AP cost. Abilities carry their own and report `None`.
    pub const fn cost(self, costs: &ActionCosts) -> Option<u32> {
        match self {
            Self::Attack => Some(costs.attack),
            Self::Ability => None,
            Self::Item => Some(costs.use_item),
            Self::Interact => Some(costs.interact),
            Self::EndTurn => Some(costs.end_turn),
            Self::Look => Some(costs.look),
        }
    }

    pub fn label(self, costs: &ActionCosts) -> String {
        match self.cost(costs) {
            Some(cost) => format!("{self} ({cost} AP)"),
            None => self.to_string(),
        }
    }
}

impl Battle {
    /// Actions the player can take right now: affordable, and with at least
    /// one valid choice behind them.
    pub fn available_actions(
        &self,
        id: ActorId,
        action_points: u32,
    ) -> BattleResult<Vec<PlayerAction>> {
        use strum::IntoEnumIterator;

        let actor = self.actor(id)?;
        let player = actor.as_player().ok_or(BattleError::UnknownActor(id))?;
        let costs = &self.config.action_costs;
        let enemies = self.living_enemies();

        let actions = PlayerAction::iter()
            .filter(|action| match action.cost(costs) {
                Some(cost) => cost <= action_points,
                None => true,
            })
            .filter(|action| match action {
                PlayerAction::Attack => !enemies.is_empty(),
                PlayerAction::Ability => !player.affordable_abilities(action_points).is_empty(),
                PlayerAction::Item => !player.inventory.is_empty(),
                PlayerAction::Interact => enemies
                    .iter()
                    .any(|e| self.roster[e.index()].is_interactable()),
                PlayerAction::EndTurn | PlayerAction::Look => true,
            })
            .collect();
        Ok(actions)
    }

    fn choose_actor(
        &self,
        kind: ChoiceKind,
        candidates: &[ActorId],
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<ActorId> {
        let labels: Vec<String> = candidates
            .iter()
            .map(|id| self.actor(*id).map(|a| a.name.clone()))
            .collect::<BattleResult<_>>()?;
        let index = ctx.choose(kind, &labels)?;
        Ok(candidates[index])
    }

    fn use_item(
        &mut self,
        user: ActorId,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<bool> {
        let labels: Vec<String> = self
            .actor(user)?
            .as_player()
            .map(|p| p.inventory.iter().map(ToString::to_string).collect())
            .unwrap_or_default();
        let slot = ctx.choose(ChoiceKind::Item, &labels)?;

        let item = self
            .actor(user)?
            .as_player()
            .and_then(|p| p.inventory.get(slot))
            .cloned()
            .ok_or(BattleError::UnknownActor(user))?;

        let targets = match item.targeting() {
            ItemTargeting::LivingPlayers => self.living_players(),
            ItemTargeting::User if self.actor(user)?.is_alive() => vec![user],
            ItemTargeting::User => Vec::new(),
        };
        if targets.is_empty() {
            ctx.report(BattleEvent::NoValidTargets {
                item: item.to_string(),
            });
            return Ok(false);
        }
        let target = self.choose_actor(ChoiceKind::ItemTarget, &targets, ctx)?;

        ctx.report(BattleEvent::ItemUsed {
            user: self.actor(user)?.name.clone(),
            item: item.to_string(),
            target: self.actor(target)?.name.clone(),
        });

        if item.is_consumed() {
            if let Some(player) = self.actor_mut(user)?.as_player_mut() {
                player.inventory.remove(slot);
            }
        }

        match item {
            Item::Potion { heal, .. } => {
                self.apply_heal(target, heal, ctx)?;
            }
            Item::AuraPotion { aura, .. } => {
                self.apply_aura(target, aura, ctx)?;
            }
            Item::Weapon(weapon) => {
                let actor = self.actor_mut(target)?;
                let actor_name = actor.name.clone();
                let weapon_name = weapon.name.clone();
                if let Some(player) = actor.as_player_mut() {
                    player.equip(weapon);
                }
                ctx.report(BattleEvent::Equipped {
                    actor: actor_name,
                    weapon: weapon_name,
                });
            }
        }
        Ok(true)
    }

    /// Picks an affordable ability, pays for it, and applies its effect.
    /// Returns the AP spent.
    fn use_ability(
        &mut self,
        user: ActorId,
        action_points: u32,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<u32> {
        let player = self
            .actor(user)?
            .as_player()
            .ok_or(BattleError::UnknownActor(user))?;
        let affordable = player.affordable_abilities(action_points);
        let labels: Vec<String> = affordable
            .iter()
            .map(|&i| player.abilities[i].to_string())
            .collect();
        let index = ctx.choose(ChoiceKind::Ability, &labels)?;
        let ability = player.abilities[affordable[index]].clone();

        let actor = self.actor_mut(user)?;
        let user_name = actor.name.clone();
        if let Some(player) = actor.as_player_mut() {
            player.mana.drain(ability.mana_cost);
        }
        ctx.report(BattleEvent::AbilityUsed {
            user: user_name,
            ability: ability.name.clone(),
        });

        match ability.effect {
            AbilityEffect::Cast(spell) => self.cast_spell(user, spell, ctx)?,
            AbilityEffect::Pray { spells, choices } => {
                let drawn = ctx.rng.sample_indices(spells.len(), choices.min(spells.len()));
                if !drawn.is_empty() {
                    let labels: Vec<String> =
                        drawn.iter().map(|&i| spells[i].to_string()).collect();
                    let pick = ctx.choose(ChoiceKind::Spell, &labels)?;
                    self.cast_spell(user, spells[drawn[pick]].clone(), ctx)?;
                }
            }
        }
        Ok(ability.ap_cost)
    }

    fn cast_spell(
        &mut self,
        caster: ActorId,
        spell: Spell,
        ctx: &mut BattleContext<'_>,
    ) -> BattleResult<()> {
        ctx.report(BattleEvent::SpellCast {
            caster: self.actor(caster)?.name.clone(),
            spell: spell.to_string(),
        });
        match spell {
            Spell::Heal { amount } => {
                self.apply_heal(caster, amount, ctx)?;
            }
            Spell::AreaFlames { power } => self.area_flames(caster, power, ctx)?,
            Spell::Bless { aura } => self.apply_aura(caster, aura, ctx)?,
        }
        Ok(())
    }
}

/// Action loop for one player turn. Ends when AP runs out, the player dies,
/// or no living enemy is left.
pub(super) fn run(
    battle: &mut Battle,
    id: ActorId,
    ctx: &mut BattleContext<'_>,
) -> BattleResult<()> {
    let costs = battle.config.action_costs;
    let mut action_points = battle.config.max_action_points;

    while action_points > 0 {
        if !battle.actor(id)?.is_alive() || battle.living_enemies().is_empty() {
            break;
        }

        let actions = battle.available_actions(id, action_points)?;
        let labels: Vec<String> = actions.iter().map(|a| a.label(&costs)).collect();
        let action = actions[ctx.choose(ChoiceKind::Action, &labels)?];
        tracing::trace!(%action, action_points, "player action");

        match action {
            PlayerAction::Attack => {
                action_points -= costs.attack;
                let enemies = battle.living_enemies();
                let target = battle.choose_actor(ChoiceKind::AttackTarget, &enemies, ctx)?;
                battle.attack(id, target, ctx)?;
            }
            PlayerAction::Ability => {
                action_points -= battle.use_ability(id, action_points, ctx)?;
            }
            PlayerAction::Item => {
                action_points -= costs.use_item;
                if !battle.use_item(id, ctx)? {
                    action_points += costs.use_item;
                }
            }
            PlayerAction::Interact => {
                action_points -= costs.interact;
                let targets: Vec<ActorId> = battle
                    .living_enemies()
                    .into_iter()
                    .filter(|e| battle.roster[e.index()].is_interactable())
                    .collect();
                let target = battle.choose_actor(ChoiceKind::InteractTarget, &targets, ctx)?;
                battle.interact(id, target, ctx)?;
            }
            PlayerAction::EndTurn => action_points = 0,
            PlayerAction::Look => ctx.report(battle.overview()),
        }
    }
    Ok(())
}
