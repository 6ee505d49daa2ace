//! Stat system.
//!
//! ```text
//! [ Base StatTable ]  +  [ AuraLedger ]
//!           ↓                  ↓
//!        [ EffectiveStats (resolver) ]
//!                   ↓
//!      [ Offense / Defense snapshots ]
//! ```
//!
//! The additive/multiplicative split per key lives in [`keys`] and is a fixed
//! property of the key space.

pub mod keys;
pub mod resolver;
pub mod table;

pub use keys::{Aggregation, DamageType, EffectKey, EffectKind, StatKey, StatKind};
pub use resolver::{DefenseSnapshot, EffectiveStats, OffenseSnapshot};
pub use table::{StatLine, StatTable};
