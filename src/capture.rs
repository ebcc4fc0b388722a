//! Multi-capture path search.
//!
//! A man (or a king using the man rule) may jump over an adjacent opponent
//! piece in any of the four diagonal directions, and may chain such jumps in
//! one move. Given the origin and the square the player wants to end on, the
//! search explores every jump chain depth-first and keeps the one selected by
//! the configured `CaptureChoice`.

use crate::board::{Board, DIAGONALS};
use crate::rules::CaptureChoice;
use crate::types::{Player, Position};

/// One hop: the opponent piece jumped over and the square landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub over: Position,
    pub landing: Position,
}

/// Hops available from `square`: every diagonal neighbour holding an opponent
/// of `mover`, paired with the square right behind it. The landing square is
/// neither bounds- nor emptiness-checked here.
pub fn jumps(board: &Board, mover: Player, square: Position) -> Vec<Jump> {
    DIAGONALS
        .iter()
        .filter_map(|&(dr, dc)| {
            let over = square.offset(dr, dc);
            let owner = board.owner(over);
            (owner != Player::None && owner != mover).then(|| Jump {
                over,
                landing: over.offset(dr, dc),
            })
        })
        .collect()
}

/// Candidate landing squares of single jumps from `square`.
pub fn closest_opponent_landings(board: &Board, mover: Player, square: Position) -> Vec<Position> {
    jumps(board, mover, square)
        .into_iter()
        .map(|jump| jump.landing)
        .collect()
}

/// Opponent squares jumped along a path of landing squares.
/// The path starts at the origin; consecutive squares are one hop apart.
pub fn captured_squares(path: &[Position]) -> Vec<Position> {
    path.windows(2).map(|w| w[0].midpoint(w[1])).collect()
}

/// Whether the piece that travelled from `origin` and now stands on `square`
/// could jump again, ignoring pieces already taken in this chain.
pub fn has_further_capture(
    board: &Board,
    mover: Player,
    origin: Position,
    square: Position,
    taken: &[Position],
) -> bool {
    jumps(board, mover, square).into_iter().any(|jump| {
        !taken.contains(&jump.over) && (jump.landing == origin || board.is_free(jump.landing))
    })
}

/// Depth-first search over jump chains ending on one target square.
pub struct CaptureSearch<'a> {
    board: &'a Board,
    mover: Player,
    choice: CaptureChoice,
    target: Position,
    path: Vec<Position>,
    best: Option<Vec<Position>>,
}

impl<'a> CaptureSearch<'a> {
    pub fn new(board: &'a Board, mover: Player, choice: CaptureChoice) -> Self {
        Self {
            board,
            mover,
            choice,
            target: Position::new(0, 0),
            path: Vec::new(),
            best: None,
        }
    }

    /// Returns the opponent squares captured by the selected chain from `from`
    /// to `to`, in jump order. An empty list means no chain reaches `to`.
    pub fn captures(&mut self, from: Position, to: Position) -> Vec<Position> {
        self.target = to;
        self.path.clear();
        self.path.push(from);
        self.best = None;

        self.explore(from);

        let taken = self
            .best
            .take()
            .map(|path| captured_squares(&path))
            .unwrap_or_default();
        tracing::trace!(?from, ?to, captures = taken.len(), "capture search finished");
        taken
    }

    fn explore(&mut self, square: Position) {
        for jump in jumps(self.board, self.mover, square) {
            if self.settled() {
                return;
            }
            if self.already_taken(jump.over) {
                continue;
            }

            // A chain ends exactly on the requested square, never beyond it.
            if jump.landing == self.target {
                self.path.push(jump.landing);
                self.record();
                self.path.pop();
                continue;
            }

            if !self.board.is_free(jump.landing) || self.path.contains(&jump.landing) {
                continue;
            }

            self.path.push(jump.landing);
            self.explore(jump.landing);
            self.path.pop();
        }
    }

    fn already_taken(&self, over: Position) -> bool {
        self.path.windows(2).any(|w| w[0].midpoint(w[1]) == over)
    }

    fn record(&mut self) {
        let better = match (&self.best, self.choice) {
            (None, _) => true,
            (Some(best), CaptureChoice::Longest) => self.path.len() > best.len(),
            (Some(_), CaptureChoice::FirstFound) => false,
        };
        if better {
            self.best = Some(self.path.clone());
        }
    }

    fn settled(&self) -> bool {
        self.choice == CaptureChoice::FirstFound && self.best.is_some()
    }
}
