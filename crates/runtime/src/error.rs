use battle_core::{BattleError, ErrorSeverity, GameError};
use battle_content::ContentError;

/// Runtime errors
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// A battle rejected a turn or a decision
    #[error(transparent)]
    Battle(#[from] BattleError),

    /// Content referenced by the run is missing or invalid
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Content files could not be read or parsed
    #[error(transparent)]
    Load(#[from] anyhow::Error),

    /// A finished battle handed back no player
    #[error("battle ended without a player to carry over")]
    MissingPlayer,
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Battle(err) => err.severity(),
            Self::Content(_) | Self::Load(_) => ErrorSeverity::Fatal,
            Self::MissingPlayer => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Battle(err) => err.error_code(),
            Self::Content(_) => "RUNTIME_CONTENT",
            Self::Load(_) => "RUNTIME_LOAD",
            Self::MissingPlayer => "RUNTIME_MISSING_PLAYER",
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
