//! Hit points, mana, and the one-way life transition.

/// Bounded resource pool (current never exceeds maximum).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "MeterRepr", into = "MeterRepr"))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

/// Wire form of [`ResourceMeter`]; clamped on the way in.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct MeterRepr {
    current: u32,
    maximum: u32,
}

#[cfg(feature = "serde")]
impl From<MeterRepr> for ResourceMeter {
    fn from(repr: MeterRepr) -> Self {
        Self::new(repr.current, repr.maximum)
    }
}

#[cfg(feature = "serde")]
impl From<ResourceMeter> for MeterRepr {
    fn from(meter: ResourceMeter) -> Self {
        Self {
            current: meter.current,
            maximum: meter.maximum,
        }
    }
}

impl ResourceMeter {
    pub const fn new(current: u32, maximum: u32) -> Self {
        let current = if current > maximum { maximum } else { current };
        Self { current, maximum }
    }

    pub const fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Removes up to `amount`, saturating at zero. Returns what was removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Adds up to `amount`, saturating at the maximum. Returns what was added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.maximum.saturating_sub(self.current));
        self.current += added;
        added
    }

    pub const fn is_empty(&self) -> bool {
        self.current == 0
    }
}

impl std::fmt::Display for ResourceMeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifeState {
    Alive,
    /// Terminal. Healing never leaves this state.
    Dead,
}

/// Result of a single `take_damage` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageOutcome {
    pub dealt: u32,
    pub remaining: u32,
    /// True only on the call that moved the actor from alive to dead.
    pub died: bool,
}

/// Hit points plus the life state they drive.
///
/// # Invariants
///
/// - `meter.current <= meter.maximum`
/// - Once `life == Dead` it stays `Dead`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    meter: ResourceMeter,
    life: LifeState,
}

impl HitPoints {
    pub const fn full(maximum: u32) -> Self {
        Self {
            meter: ResourceMeter::full(maximum),
            life: if maximum == 0 {
                LifeState::Dead
            } else {
                LifeState::Alive
            },
        }
    }

    pub const fn current(&self) -> u32 {
        self.meter.current
    }

    pub const fn maximum(&self) -> u32 {
        self.meter.maximum
    }

    pub const fn life(&self) -> LifeState {
        self.life
    }

    pub const fn is_alive(&self) -> bool {
        matches!(self.life, LifeState::Alive)
    }

    /// Clamps at zero and fires the death transition at most once.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        let dealt = self.meter.drain(amount);
        let died = self.is_alive() && self.meter.is_empty();
        if died {
            self.life = LifeState::Dead;
        }
        DamageOutcome {
            dealt,
            remaining: self.meter.current,
            died,
        }
    }

    /// No-op on the dead. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        self.meter.restore(amount)
    }
}

impl std::fmt::Display for HitPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.meter.fmt(f)
    }
}
