//! Byte snapshot of a saved position.
//!
//! Layout (little endian):
//! `magic "DRGT" | version u32 | size u32 | player code u32 | crc32 u32 | size*size tile codes`.
//! The checksum covers the tile payload only.

use crate::error::{GameError, GameResult};
use crate::game::GameState;
use crate::rules::Rules;
use crate::types::{Player, Tile};

const MAGIC: &[u8; 4] = b"DRGT";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 20;

pub fn encode(game: &GameState) -> Vec<u8> {
    let board = game.board();
    let payload: Vec<u8> = board.tiles().iter().map(|tile| tile.code()).collect();

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&(board.size() as u32).to_le_bytes());
    out.extend_from_slice(&u32::from(game.current_player().code()).to_le_bytes());
    out.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
    out.extend_from_slice(&payload);
    out
}

/// Rebuilds a game from `encode` output. Piece counts are recomputed from the tiles.
pub fn decode(data: &[u8], rules: Rules) -> GameResult<GameState> {
    if data.len() < HEADER_SIZE {
        return Err(GameError::Snapshot(format!(
            "data too short: expected at least {HEADER_SIZE} bytes, got {}",
            data.len()
        )));
    }
    if &data[0..4] != MAGIC {
        return Err(GameError::Snapshot("invalid magic (expected DRGT)".to_string()));
    }

    let version = read_u32_le(data, 4)?;
    if version != VERSION {
        return Err(GameError::Snapshot(format!(
            "unsupported version: expected {VERSION}, got {version}"
        )));
    }

    let size = read_u32_le(data, 8)? as usize;
    let player_code = read_u32_le(data, 12)?;
    let expected_crc = read_u32_le(data, 16)?;
    let payload = &data[HEADER_SIZE..];

    let expected_len = size
        .checked_mul(size)
        .ok_or_else(|| GameError::Snapshot("board size overflow".to_string()))?;
    if payload.len() != expected_len {
        return Err(GameError::Snapshot(format!(
            "payload holds {} tiles, a {size}x{size} board needs {expected_len}",
            payload.len()
        )));
    }

    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(GameError::Snapshot(format!(
            "CRC32 mismatch: expected {expected_crc:#010x}, got {actual_crc:#010x}"
        )));
    }

    let player_code = u8::try_from(player_code)
        .map_err(|_| GameError::Snapshot(format!("player code {player_code} out of range")))?;
    let current = Player::from_code(player_code)?;
    let tiles = payload
        .iter()
        .map(|&code| Tile::from_code(code))
        .collect::<GameResult<Vec<_>>>()?;

    GameState::from_tiles(&tiles, current, rules)
}

fn read_u32_le(data: &[u8], offset: usize) -> GameResult<u32> {
    let bytes = data
        .get(offset..offset + 4)
        .ok_or_else(|| GameError::Snapshot(format!("unexpected EOF at byte {offset}")))?;
    let mut chunk = [0u8; 4];
    chunk.copy_from_slice(bytes);
    Ok(u32::from_le_bytes(chunk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn restores_a_game_in_progress() {
        let mut game = GameState::default();
        game.process(Position::new(5, 0), Position::new(4, 1)).unwrap();

        let bytes = encode(&game);
        assert_eq!(bytes.len(), HEADER_SIZE + 64);
        assert_eq!(decode(&bytes, Rules::default()).unwrap(), game);
    }

    #[test]
    fn corrupted_payload_fails_the_checksum() {
        let mut bytes = encode(&GameState::default());
        bytes[HEADER_SIZE] = Tile::WhiteKing.code();

        let err = decode(&bytes, Rules::default()).unwrap_err();
        assert!(err.to_string().contains("CRC32 mismatch"));
    }

    #[test]
    fn header_problems_are_reported() {
        let bytes = encode(&GameState::default());

        assert!(decode(&bytes[..10], Rules::default()).is_err());
        assert!(decode(&bytes[..HEADER_SIZE + 63], Rules::default()).is_err());

        let mut wrong_magic = bytes.clone();
        wrong_magic[0] = b'X';
        assert!(decode(&wrong_magic, Rules::default())
            .unwrap_err()
            .to_string()
            .contains("magic"));

        let mut wrong_version = bytes;
        wrong_version[4] = 9;
        assert!(decode(&wrong_version, Rules::default())
            .unwrap_err()
            .to_string()
            .contains("version"));
    }

    #[test]
    fn invalid_codes_are_rejected_after_the_checksum() {
        let mut bytes = encode(&GameState::default());
        bytes[HEADER_SIZE] = 9;
        let crc = crc32fast::hash(&bytes[HEADER_SIZE..]);
        bytes[16..20].copy_from_slice(&crc.to_le_bytes());

        assert_eq!(
            decode(&bytes, Rules::default()).unwrap_err(),
            GameError::InvalidTileCode { code: 9 }
        );

        let mut bytes = encode(&GameState::default());
        bytes[12] = 0;
        assert_eq!(
            decode(&bytes, Rules::default()).unwrap_err(),
            GameError::InvalidPlayer
        );
    }
}
