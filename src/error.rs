//! Structural errors.
//!
//! These report caller misuse (bad coordinates, malformed saved state). An
//! illegal move is not an error: it comes back as a rejected `MoveResult`.

/// Errors raised when the engine is asked to do something structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: i32, col: i32, size: usize },

    #[error("flat state of length {len} is not a non-empty square board")]
    InvalidStateSize { len: usize },

    #[error("no standard layout exists for a {size}x{size} board")]
    InvalidBoardSize { size: usize },

    #[error("the player to move must be white or black")]
    InvalidPlayer,

    #[error("unknown tile code {code}")]
    InvalidTileCode { code: u8 },

    #[error("unknown player code {code}")]
    InvalidPlayerCode { code: u8 },

    #[error("snapshot rejected: {0}")]
    Snapshot(String),
}

/// Result type alias for structural operations.
pub type GameResult<T> = Result<T, GameError>;
