//! Common error infrastructure for battle-core.
//!
//! Bad menu input never reaches this module: decision sources re-prompt.
//! What surfaces here is either a closed decision source or a broken
//! scheduler invariant.

use crate::battle::ActorId;
use crate::decision::{ChoiceKind, DecisionError};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Can retry with the same or another input.
    Recoverable,

    /// Invalid input, should not retry without changes.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// Battle cannot continue.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for the variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl GameError for DecisionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Closed | Self::Io(_) => ErrorSeverity::Fatal,
            Self::Exhausted(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Closed => "DECISION_CLOSED",
            Self::Exhausted(_) => "DECISION_EXHAUSTED",
            Self::Io(_) => "DECISION_IO",
        }
    }
}

/// Errors raised while running a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// The scheduler handed a turn to an actor that is already dead.
    #[error("{actor} is dead and cannot take a turn")]
    DeadActorTurn { actor: String },

    #[error("no actor with id {0:?}")]
    UnknownActor(ActorId),

    /// A decision source returned an index outside the offered options.
    #[error("choice {index} out of range for {kind} ({len} options)")]
    ChoiceOutOfRange {
        kind: ChoiceKind,
        index: usize,
        len: usize,
    },

    /// A prompt was about to be shown with nothing to pick.
    #[error("no options to offer for {0}")]
    NoOptions(ChoiceKind),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DeadActorTurn { .. }
            | Self::UnknownActor(_)
            | Self::ChoiceOutOfRange { .. }
            | Self::NoOptions(_) => ErrorSeverity::Internal,
            Self::Decision(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DeadActorTurn { .. } => "BATTLE_DEAD_ACTOR_TURN",
            Self::UnknownActor(_) => "BATTLE_UNKNOWN_ACTOR",
            Self::ChoiceOutOfRange { .. } => "BATTLE_CHOICE_OUT_OF_RANGE",
            Self::NoOptions(_) => "BATTLE_NO_OPTIONS",
            Self::Decision(err) => err.error_code(),
        }
    }
}

pub type BattleResult<T> = Result<T, BattleError>;
