//! Error types for the game engine.

/// Errors raised while constructing players or a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A negative number of players was requested.
    #[error("number of players cannot be negative (got {0})")]
    NegativePlayerCount(i64),

    /// A negative number of dice per player was requested.
    #[error("number of dice cannot be negative (got {0})")]
    NegativeDiceCount(i64),

    /// More players were requested than a roster can hold.
    #[error("number of players cannot exceed {max} (got {0})", max = crate::player::MAX_PLAYERS)]
    TooManyPlayers(i64),

    /// More dice per player were requested than a hand can hold.
    #[error("number of dice cannot exceed {max} (got {0})", max = crate::player::MAX_DICE)]
    TooManyDice(i64),

    /// A game was requested with an empty roster.
    #[error("a game needs at least one player")]
    NoPlayers,
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
