//! Abilities and the spells they cast.

use crate::aura::Aura;

/// A single castable effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spell {
    /// Heals the caster.
    Heal { amount: u32 },

    /// Special damage against every living enemy, run through the damage
    /// formula with `power` as base damage. Never critical.
    AreaFlames { power: f64 },

    /// Grants an aura to the caster.
    Bless { aura: Aura },
}

impl std::fmt::Display for Spell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heal { amount } => write!(f, "Heal {amount}"),
            Self::AreaFlames { power } => write!(f, "Area Flames {power}"),
            Self::Bless { aura } => write!(f, "Bless: {}", aura.name),
        }
    }
}

/// What happens when an ability is used.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityEffect {
    /// Casts one fixed spell.
    Cast(Spell),

    /// Draws up to `choices` distinct spells from the pool at random and
    /// casts the one the caster picks.
    Pray { spells: Vec<Spell>, choices: usize },
}

/// Player ability with AP and mana costs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    pub ap_cost: u32,
    pub mana_cost: u32,
    pub effect: AbilityEffect,
}

impl Ability {
    pub const DEFAULT_PRAY_CHOICES: usize = 3;

    pub fn new(
        name: impl Into<String>,
        ap_cost: u32,
        mana_cost: u32,
        effect: AbilityEffect,
    ) -> Self {
        Self {
            name: name.into(),
            ap_cost,
            mana_cost,
            effect,
        }
    }

    pub fn heal(amount: u32, ap_cost: u32, mana_cost: u32) -> Self {
        Self::new(
            "Heal",
            ap_cost,
            mana_cost,
            AbilityEffect::Cast(Spell::Heal { amount }),
        )
    }

    pub fn pray(spells: Vec<Spell>, choices: usize, ap_cost: u32, mana_cost: u32) -> Self {
        Self::new(
            "Pray",
            ap_cost,
            mana_cost,
            AbilityEffect::Pray { spells, choices },
        )
    }

    /// Both the AP and the mana cost fit.
    pub const fn is_affordable(&self, action_points: u32, mana: u32) -> bool {
        self.ap_cost <= action_points && self.mana_cost <= mana
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} AP, {} mana)",
            self.name, self.ap_cost, self.mana_cost
        )
    }
}
