//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The dice notation does not match `[count]d<sides>[(+|-)modifier]`.
    #[error("invalid dice notation: '{0}'")]
    Parse(String),

    /// Too few or too many dice were requested.
    #[error("dice count must be between {min} and {max}, got {count}")]
    InvalidCount {
        /// The requested number of dice.
        count: u32,
        /// Smallest accepted count.
        min: u32,
        /// Largest accepted count.
        max: u32,
    },

    /// The die has too few or too many faces.
    #[error("dice sides must be between {min} and {max}, got {sides}")]
    InvalidSides {
        /// The requested face count.
        sides: u32,
        /// Smallest accepted face count.
        min: u32,
        /// Largest accepted face count.
        max: u32,
    },

    /// A World of Darkness pool is empty or oversized.
    #[error("dice pool must be between 1 and {max}, got {pool}")]
    InvalidPool {
        /// The requested pool size.
        pool: u32,
        /// Largest accepted pool.
        max: u32,
    },

    /// A difficulty lies outside its accepted range.
    #[error("difficulty must be between {min} and {max}, got {difficulty}")]
    InvalidDifficulty {
        /// The requested difficulty.
        difficulty: u32,
        /// Smallest accepted difficulty.
        min: u32,
        /// Largest accepted difficulty.
        max: u32,
    },

    /// An NPC tier name was not recognised.
    #[error("unknown NPC tier: {0} (expected minion, toughened, or nemesis)")]
    UnknownTier(String),

    /// A range band name was not recognised.
    #[error("unknown range: {0} (expected close, medium, long, or extreme)")]
    UnknownRange(String),

    /// A cover name was not recognised.
    #[error("unknown cover: {0} (expected none, light, heavy, or total)")]
    UnknownCover(String),

    /// More momentum was spent than the pool holds.
    #[error("not enough momentum: {available} available, {requested} requested")]
    InsufficientMomentum {
        /// Momentum currently in the pool.
        available: u32,
        /// Momentum the caller tried to spend.
        requested: u32,
    },

    /// A character sheet could not be decoded.
    #[error("invalid character sheet: {0}")]
    InvalidSheet(#[from] serde_json::Error),
}

/// Broad category of a [`MechError`], used by callers to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input text could not be understood at all.
    Parse,
    /// Input was well-formed but out of range.
    Validation,
    /// The operation conflicts with the current value of a pool or sheet.
    State,
}

impl MechError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) | Self::InvalidSheet(_) => ErrorKind::Parse,
            Self::InvalidCount { .. }
            | Self::InvalidSides { .. }
            | Self::InvalidPool { .. }
            | Self::InvalidDifficulty { .. }
            | Self::UnknownTier(_)
            | Self::UnknownRange(_)
            | Self::UnknownCover(_) => ErrorKind::Validation,
            Self::InsufficientMomentum { .. } => ErrorKind::State,
        }
    }
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_input() {
        let err = MechError::Parse("3x6".to_string());
        assert_eq!(err.to_string(), "invalid dice notation: '3x6'");
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn bounds_errors_are_validation() {
        let err = MechError::InvalidCount {
            count: 101,
            min: 1,
            max: 100,
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.to_string(),
            "dice count must be between 1 and 100, got 101"
        );
    }

    #[test]
    fn momentum_error_is_state() {
        let err = MechError::InsufficientMomentum {
            available: 1,
            requested: 3,
        };
        assert_eq!(err.kind(), ErrorKind::State);
    }
}
