use crate::error::{GameError, GameResult};
use crate::orientation::Orientation;
use crate::types::{Player, Position, Tile};

pub const DEFAULT_SIZE: usize = 8;
pub(crate) const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Square N×N draughts board with incrementally tracked piece counts.
///
/// Invariant: `white_count`/`black_count` always equal the number of
/// white/black tiles stored in `cells`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
    white_count: u32,
    black_count: u32,
}

impl Board {
    /// Creates the standard 8×8 starting position with White advancing toward row 0.
    pub fn new() -> Self {
        Self::oriented(Orientation::WhiteUp)
    }

    /// Creates the standard 8×8 starting position for the given orientation.
    pub fn oriented(orientation: Orientation) -> Self {
        Self::layout(DEFAULT_SIZE, orientation)
    }

    /// Creates the standard starting position for an even board size of at least 4.
    ///
    /// Each side fills the dark squares (`row + col` odd) of its first
    /// `size / 2 - 1` rows.
    pub fn standard(size: usize, orientation: Orientation) -> GameResult<Self> {
        if size < 4 || size % 2 != 0 {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self::layout(size, orientation))
    }

    /// Rebuilds a board from a flat row-major tile sequence.
    /// Piece counts are recomputed from the tiles.
    pub fn from_tiles(tiles: &[Tile]) -> GameResult<Self> {
        let size = tiles.len().isqrt();
        if size == 0 || size * size != tiles.len() {
            return Err(GameError::InvalidStateSize { len: tiles.len() });
        }

        let mut board = Self {
            size,
            cells: tiles.to_vec(),
            white_count: 0,
            black_count: 0,
        };
        board.recount();
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The single bounds check every other lookup goes through.
    pub fn has_position(&self, pos: Position) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
    }

    pub fn get(&self, pos: Position) -> GameResult<Tile> {
        self.index(pos)
            .map(|idx| self.cells[idx])
            .ok_or(GameError::OutOfRange {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
    }

    /// Owner of the piece on `pos`; `Player::None` for empty or off-board squares.
    pub fn owner(&self, pos: Position) -> Player {
        self.index(pos)
            .map_or(Player::None, |idx| self.cells[idx].owner())
    }

    /// True iff `pos` is on the board and empty.
    pub fn is_free(&self, pos: Position) -> bool {
        self.index(pos)
            .is_some_and(|idx| self.cells[idx].is_empty())
    }

    /// Removes whatever stands on `pos` and keeps the counts in step.
    /// Off-board squares are ignored.
    pub fn capture(&mut self, pos: Position) {
        let Some(idx) = self.index(pos) else {
            return;
        };
        match self.cells[idx].owner() {
            Player::White => self.white_count -= 1,
            Player::Black => self.black_count -= 1,
            Player::None => {}
        }
        self.cells[idx] = Tile::Empty;
    }

    /// Moves the tile on `from` to `to`, leaving `from` empty.
    /// Both squares must be on the board and `to` must be empty.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) {
        if let (Some(src), Some(dst)) = (self.index(from), self.index(to)) {
            self.cells[dst] = self.cells[src];
            self.cells[src] = Tile::Empty;
        }
    }

    /// Turns the man on `pos` into a king. Returns whether anything changed.
    pub(crate) fn promote(&mut self, pos: Position) -> bool {
        let Some(idx) = self.index(pos) else {
            return false;
        };
        let tile = self.cells[idx];
        let promoted = tile.promoted();
        self.cells[idx] = promoted;
        promoted != tile
    }

    pub fn count(&self, player: Player) -> u32 {
        match player {
            Player::White => self.white_count,
            Player::Black => self.black_count,
            Player::None => 0,
        }
    }

    pub fn white_count(&self) -> u32 {
        self.white_count
    }

    pub fn black_count(&self) -> u32 {
        self.black_count
    }

    /// Row-major view of every cell.
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.has_position(pos)
            .then(|| pos.row as usize * self.size + pos.col as usize)
    }

    fn layout(size: usize, orientation: Orientation) -> Self {
        let rows = size / 2 - 1;
        let top = orientation.top_player();
        let man = |player: Player| match player {
            Player::White => Tile::WhiteMan,
            _ => Tile::BlackMan,
        };

        let mut cells = vec![Tile::Empty; size * size];
        for (idx, cell) in cells.iter_mut().enumerate() {
            let (row, col) = (idx / size, idx % size);
            if (row + col) % 2 == 0 {
                continue;
            }
            if row < rows {
                *cell = man(top);
            } else if row >= size - rows {
                *cell = man(top.opponent());
            }
        }

        let mut board = Self {
            size,
            cells,
            white_count: 0,
            black_count: 0,
        };
        board.recount();
        board
    }

    fn recount(&mut self) {
        let (mut white, mut black) = (0, 0);
        for tile in &self.cells {
            match tile.owner() {
                Player::White => white += 1,
                Player::Black => black += 1,
                Player::None => {}
            }
        }
        self.white_count = white;
        self.black_count = black;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn initial_board_has_twelve_men_per_side() {
        let board = Board::new();

        assert_eq!(board.white_count(), 12);
        assert_eq!(board.black_count(), 12);
        assert_eq!(board.get(pos(0, 1)).unwrap(), Tile::BlackMan);
        assert_eq!(board.get(pos(0, 0)).unwrap(), Tile::Empty);
        assert_eq!(board.get(pos(5, 0)).unwrap(), Tile::WhiteMan);
        assert_eq!(board.get(pos(7, 6)).unwrap(), Tile::WhiteMan);
        assert!(board.tiles()[3 * 8..5 * 8].iter().all(|t| t.is_empty()));
    }

    #[test]
    fn ten_by_ten_layout_has_twenty_men_per_side() {
        let board = Board::standard(10, Orientation::WhiteDown).unwrap();

        assert_eq!(board.white_count(), 20);
        assert_eq!(board.black_count(), 20);
        assert_eq!(board.get(pos(0, 1)).unwrap(), Tile::WhiteMan);
        assert_eq!(board.get(pos(9, 0)).unwrap(), Tile::BlackMan);
    }

    #[test]
    fn odd_or_tiny_sizes_have_no_standard_layout() {
        assert_eq!(
            Board::standard(7, Orientation::WhiteUp).unwrap_err(),
            GameError::InvalidBoardSize { size: 7 }
        );
        assert!(Board::standard(2, Orientation::WhiteUp).is_err());
    }

    #[test]
    fn has_position_accepts_exactly_the_board() {
        let board = Board::new();

        assert!(board.has_position(pos(0, 0)));
        assert!(board.has_position(pos(7, 7)));
        assert!(!board.has_position(pos(8, 0)));
        assert!(!board.has_position(pos(0, 8)));
        assert!(!board.has_position(pos(-1, 3)));
        assert!(!board.has_position(pos(3, -1)));
        assert_eq!(
            board.get(pos(-1, 0)).unwrap_err(),
            GameError::OutOfRange { row: -1, col: 0, size: 8 }
        );
    }

    #[test]
    fn from_tiles_recounts_and_rejects_non_square_input() {
        let mut tiles = vec![Tile::Empty; 16];
        tiles[1] = Tile::BlackKing;
        tiles[14] = Tile::WhiteMan;
        tiles[12] = Tile::WhiteKing;
        let board = Board::from_tiles(&tiles).unwrap();

        assert_eq!(board.size(), 4);
        assert_eq!(board.white_count(), 2);
        assert_eq!(board.black_count(), 1);
        assert_eq!(board.tiles(), tiles.as_slice());

        assert_eq!(
            Board::from_tiles(&[Tile::Empty; 15]).unwrap_err(),
            GameError::InvalidStateSize { len: 15 }
        );
        assert!(Board::from_tiles(&[]).is_err());
    }

    #[test]
    fn capture_relocate_and_promote_keep_counts_in_step() {
        let mut board = Board::new();

        board.capture(pos(2, 1));
        assert_eq!(board.black_count(), 11);
        assert!(board.is_free(pos(2, 1)));

        board.capture(pos(3, 0));
        assert_eq!(board.black_count(), 11);

        board.relocate(pos(5, 0), pos(4, 1));
        assert!(board.is_free(pos(5, 0)));
        assert_eq!(board.owner(pos(4, 1)), Player::White);
        assert_eq!(board.white_count(), 12);

        assert!(board.promote(pos(4, 1)));
        assert_eq!(board.get(pos(4, 1)).unwrap(), Tile::WhiteKing);
        assert!(!board.promote(pos(4, 1)));
    }
}
