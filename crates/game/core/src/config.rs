/// Battle rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Action points a player receives at the start of each turn.
    pub max_action_points: u32,
    /// Fixed AP cost of each menu action. Abilities carry their own cost.
    pub action_costs: ActionCosts,
    /// Probability that a single attack is critical.
    pub crit_probability: f64,
    /// Multiplier applied to the combined damage of a critical attack.
    pub crit_multiplier: f64,
}

impl BattleConfig {
    pub const DEFAULT_MAX_ACTION_POINTS: u32 = 3;
    pub const DEFAULT_CRIT_PROBABILITY: f64 = 1.0 / 8.0;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 2.0;

    pub fn new() -> Self {
        Self {
            max_action_points: Self::DEFAULT_MAX_ACTION_POINTS,
            action_costs: ActionCosts::default(),
            crit_probability: Self::DEFAULT_CRIT_PROBABILITY,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
        }
    }

    /// Same rules with critical hits disabled.
    pub fn without_crits(mut self) -> Self {
        self.crit_probability = 0.0;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// AP cost per player menu action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionCosts {
    pub attack: u32,
    pub use_item: u32,
    pub interact: u32,
    pub end_turn: u32,
    pub look: u32,
}

impl Default for ActionCosts {
    fn default() -> Self {
        Self {
            attack: 3,
            use_item: 1,
            interact: 3,
            end_turn: 0,
            look: 0,
        }
    }
}
