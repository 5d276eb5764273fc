//! Error types for the engine and the game client

use crate::board::Pos;

/// A move received from outside the engine that cannot be applied.
///
/// These are reported and skipped; the game carries on.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Move code outside the 11..=55 encoding (both digits 1..=5)
    #[error("move code {0} outside board range")]
    OutOfRange(u32),

    /// Move targets a cell that already holds a stone
    #[error("move {0} targets an occupied cell")]
    Occupied(Pos),
}

/// Unrecoverable engine errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// `choose_move` called on a board without empty cells
    #[error("no valid moves available")]
    NoLegalMoves,
}

/// Errors raised by the game client
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Server sent something that is not an integer message
    #[error("malformed server message: {0:?}")]
    Malformed(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Socket I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
