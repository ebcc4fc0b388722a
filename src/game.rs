use crate::board::Board;
use crate::capture::{CaptureSearch, has_further_capture};
use crate::error::{GameError, GameResult};
use crate::orientation::is_single_forward_step;
use crate::rules::Rules;
use crate::types::{MoveResult, Player, Position, Tile};

const CHAIN_MUST_GO_ON: &str =
    "Illegal move. The capture chain must go on while another capture is available.";

/// One game session: the board, the side to move and the rule variant.
///
/// The engine is single-writer. `process` either commits a legal move in
/// full or leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Player,
    rules: Rules,
}

impl GameState {
    /// Standard 8×8 start, White to move.
    pub fn new(rules: Rules) -> Self {
        Self {
            board: Board::oriented(rules.orientation),
            current: Player::White,
            rules,
        }
    }

    /// Standard start on a `size`×`size` board (even, at least 4), White to move.
    pub fn with_size(size: usize, rules: Rules) -> GameResult<Self> {
        Ok(Self {
            board: Board::standard(size, rules.orientation)?,
            current: Player::White,
            rules,
        })
    }

    /// Resumes a saved position from a flat row-major tile list.
    pub fn from_tiles(tiles: &[Tile], current: Player, rules: Rules) -> GameResult<Self> {
        if current == Player::None {
            return Err(GameError::InvalidPlayer);
        }
        let board = Board::from_tiles(tiles)?;
        tracing::debug!(
            size = board.size(),
            white = board.white_count(),
            black = board.black_count(),
            ?current,
            "game restored from flat state"
        );
        Ok(Self {
            board,
            current,
            rules,
        })
    }

    /// Back to the standard start at the current board size, White to move.
    pub fn reset(&mut self) {
        let orientation = self.rules.orientation;
        self.board = Board::standard(self.board.size(), orientation).unwrap_or_else(|err| {
            tracing::warn!(%err, "resetting to the default board size");
            Board::oriented(orientation)
        });
        self.current = Player::White;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn get(&self, pos: Position) -> GameResult<Tile> {
        self.board.get(pos)
    }

    pub fn has_position(&self, pos: Position) -> bool {
        self.board.has_position(pos)
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn opponent(&self) -> Player {
        self.current.opponent()
    }

    pub fn white_pawns_amount(&self) -> u32 {
        self.board.white_count()
    }

    pub fn black_pawns_amount(&self) -> u32 {
        self.board.black_count()
    }

    /// Validates and, when legal, plays the move `from` → `to`.
    ///
    /// Returns `Err` only when either square is off the board. Every rule
    /// violation comes back as `Ok` with `is_correct == false`.
    pub fn process(&mut self, from: Position, to: Position) -> GameResult<MoveResult> {
        let piece = self.board.get(from)?;
        self.board.get(to)?;

        let verdict = if piece.is_empty() {
            MoveResult::rejected("Incorrect move. No piece is selected.")
        } else if piece.owner() != self.current {
            MoveResult::rejected(format!("Illegal move. It is {}'s turn.", self.current))
        } else if !self.board.is_free(to) {
            MoveResult::rejected("Illegal move. The destination square is occupied.")
        } else if piece.is_king() {
            let as_man = self.check_man(from, to);
            if as_man.is_correct || as_man.message == CHAIN_MUST_GO_ON {
                as_man
            } else {
                self.check_king(from, to)
            }
        } else {
            self.check_man(from, to)
        };

        if !verdict.is_correct {
            tracing::debug!(?from, ?to, reason = %verdict.message, "move rejected");
            return Ok(verdict);
        }
        Ok(self.commit(from, to, verdict))
    }

    /// Single forward step, or a jump chain ending on `to`.
    fn check_man(&self, from: Position, to: Position) -> MoveResult {
        let displacement = self
            .rules
            .orientation
            .relative_displacement(self.current, from, to);
        if is_single_forward_step(displacement, self.rules.sideways_step) {
            return MoveResult::accepted(Vec::new());
        }

        let taken = CaptureSearch::new(&self.board, self.current, self.rules.capture_choice)
            .captures(from, to);
        if taken.is_empty() {
            return MoveResult::rejected(
                "Illegal move. The piece can neither step nor capture its way to that square.",
            );
        }
        if self.rules.mandatory_continuation
            && has_further_capture(&self.board, self.current, from, to, &taken)
        {
            return MoveResult::rejected(CHAIN_MUST_GO_ON);
        }
        MoveResult::accepted(taken)
    }

    /// Long diagonal move. Only the square right before `to` may hold a piece,
    /// and it must be an opponent's, which is then captured.
    fn check_king(&self, from: Position, to: Position) -> MoveResult {
        let (d_row, d_col) = (to.row - from.row, to.col - from.col);
        if d_row == 0 || d_row.abs() != d_col.abs() {
            return MoveResult::rejected(
                "Illegal move. A king moves along a diagonal or like a man.",
            );
        }

        let (step_row, step_col) = (d_row.signum(), d_col.signum());
        let behind = to.offset(-step_row, -step_col);
        if behind == from {
            return MoveResult::accepted(Vec::new());
        }

        let jumped = self.board.owner(behind);
        if jumped == self.current {
            return MoveResult::rejected(
                "Illegal move. A king cannot jump over its own pieces.",
            );
        }

        let mut square = behind.offset(-step_row, -step_col);
        while square != from {
            if !self.board.is_free(square) {
                return MoveResult::rejected(
                    "Illegal move. A king may only take the piece right before its landing square; the rest of the diagonal must be empty.",
                );
            }
            square = square.offset(-step_row, -step_col);
        }

        if jumped != self.opponent() {
            return MoveResult::accepted(Vec::new());
        }
        let taken = vec![behind];
        if self.rules.mandatory_continuation
            && has_further_capture(&self.board, self.current, from, to, &taken)
        {
            return MoveResult::rejected(CHAIN_MUST_GO_ON);
        }
        MoveResult::accepted(taken)
    }

    fn commit(&mut self, from: Position, to: Position, mut result: MoveResult) -> MoveResult {
        for &square in &result.taken_pawns {
            self.board.capture(square);
        }

        for side in [Player::White, Player::Black] {
            if self.board.count(side) == 0 {
                result.winner = side.opponent();
                break;
            }
        }

        self.board.relocate(from, to);

        if self
            .rules
            .orientation
            .is_promotion_square(self.current, to, self.board.size())
        {
            result.is_queen = self.board.promote(to);
        }

        tracing::debug!(
            player = ?self.current,
            ?from,
            ?to,
            captures = result.taken_pawns.len(),
            promoted = result.is_queen,
            winner = ?result.winner,
            "move played"
        );
        self.current = self.current.opponent();
        result
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
