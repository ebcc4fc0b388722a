use std::fmt;

use serde::Serialize;

use crate::error::{GameError, GameResult};

/// A board coordinate, zero-based and row-major.
///
/// Coordinates are signed so that probes off the edge (including negative
/// ones) can be represented and rejected by `Board::has_position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the square `(d_row, d_col)` away from this one.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Returns the square halfway between `self` and `other`.
    /// Only meaningful for two squares an even distance apart on a diagonal.
    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            row: self.row + (other.row - self.row) / 2,
            col: self.col + (other.col - self.col) / 2,
        }
    }
}

/// Contents of one board cell.
///
/// The discriminants are the stable codes used for flat board exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Empty = 0,
    BlackMan = 1,
    WhiteMan = 2,
    BlackKing = 3,
    WhiteKing = 4,
}

impl Tile {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> GameResult<Self> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::BlackMan),
            2 => Ok(Self::WhiteMan),
            3 => Ok(Self::BlackKing),
            4 => Ok(Self::WhiteKing),
            _ => Err(GameError::InvalidTileCode { code }),
        }
    }

    /// Side owning the piece, `Player::None` for an empty cell.
    pub fn owner(self) -> Player {
        match self {
            Self::Empty => Player::None,
            Self::BlackMan | Self::BlackKing => Player::Black,
            Self::WhiteMan | Self::WhiteKing => Player::White,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    pub fn is_king(self) -> bool {
        matches!(self, Self::BlackKing | Self::WhiteKing)
    }

    /// The king a man turns into. Kings and empty cells are returned unchanged.
    pub fn promoted(self) -> Self {
        match self {
            Self::BlackMan => Self::BlackKing,
            Self::WhiteMan => Self::WhiteKing,
            other => other,
        }
    }
}

/// A side of the game. `None` means "no owner" or "no winner yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum Player {
    #[default]
    None = 0,
    Black = 1,
    White = 2,
}

impl Player {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> GameResult<Self> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Black),
            2 => Ok(Self::White),
            _ => Err(GameError::InvalidPlayerCode { code }),
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
            Self::None => Self::None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::White => "white",
            Self::Black => "black",
            Self::None => "nobody",
        };
        f.write_str(name)
    }
}

/// Report produced by every call to `GameState::process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResult {
    /// Squares of the opponent pieces removed by the move, in capture order.
    pub taken_pawns: Vec<Position>,
    /// Contract:
    /// - `Player::None` while both sides still have pieces.
    /// - The mover when this move removed the opponent's last piece.
    pub winner: Player,
    /// `true` when the moved man was promoted to a king.
    pub is_queen: bool,
    pub is_correct: bool,
    /// Why the move was rejected. Empty for accepted moves.
    pub message: String,
}

impl MoveResult {
    pub(crate) fn accepted(taken_pawns: Vec<Position>) -> Self {
        Self {
            taken_pawns,
            winner: Player::None,
            is_queen: false,
            is_correct: true,
            message: String::new(),
        }
    }

    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Self {
            taken_pawns: Vec::new(),
            winner: Player::None,
            is_queen: false,
            is_correct: false,
            message: message.into(),
        }
    }
}
