use serde::Deserialize;

use crate::types::{Player, Position};

/// Which way White travels on the physical board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// White starts on the last rows and advances toward row 0.
    #[default]
    WhiteUp,
    /// Inverted board: White starts on rows 0.. and advances toward row N-1.
    WhiteDown,
}

/// A move seen from the mover's side of the board.
///
/// `rows > 0` always means "toward the mover's far rank", whichever side is
/// moving and however the board is oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub rows: i32,
    pub cols: i32,
}

impl Orientation {
    /// Physical row step of one forward move for `player`.
    /// `Player::None` has no direction and gets 0.
    pub fn forward(self, player: Player) -> i32 {
        match (self, player) {
            (_, Player::None) => 0,
            (Self::WhiteUp, Player::White) | (Self::WhiteDown, Player::Black) => -1,
            (Self::WhiteUp, Player::Black) | (Self::WhiteDown, Player::White) => 1,
        }
    }

    pub fn relative_displacement(self, player: Player, from: Position, to: Position) -> Displacement {
        let sign = self.forward(player);
        Displacement {
            rows: (to.row - from.row) * sign,
            cols: (to.col - from.col) * sign,
        }
    }

    /// Row on which `player`'s men are promoted.
    pub fn promotion_row(self, player: Player, size: usize) -> Option<i32> {
        match self.forward(player) {
            -1 => Some(0),
            1 => Some(size as i32 - 1),
            _ => None,
        }
    }

    pub fn is_promotion_square(self, player: Player, to: Position, size: usize) -> bool {
        self.promotion_row(player, size) == Some(to.row)
    }

    /// Side whose pieces start on the low-numbered rows.
    pub fn top_player(self) -> Player {
        match self {
            Self::WhiteUp => Player::Black,
            Self::WhiteDown => Player::White,
        }
    }
}

/// True for a single diagonal step toward the far rank.
/// With `sideways` the zero-row variant (column ±1, same row) is accepted as well.
pub fn is_single_forward_step(displacement: Displacement, sideways: bool) -> bool {
    let row_ok = displacement.rows == 1 || (sideways && displacement.rows == 0);
    row_ok && displacement.cols.abs() == 1
}
