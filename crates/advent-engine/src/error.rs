//! Error types for the game engine.

use advent_core::CoreError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that abort a game.
///
/// Anything the player can cause is answered with a message instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An internal consistency check failed.
    #[error("fatal error {0}, terminating game")]
    Invariant(u16),

    /// Forced moves kept chaining without reaching a resting location.
    #[error("forced moves did not settle")]
    ForcedMoveLoop,

    /// World model or save-file error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
