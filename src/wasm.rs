//! JavaScript bindings.
//!
//! Each `DraughtsGame` owns its own `GameState`; hosts create, reset or
//! replace it explicitly. Tiles and players cross the boundary as their
//! numeric codes, move results as plain objects.

use wasm_bindgen::prelude::*;

use crate::board::DEFAULT_SIZE;
use crate::game::GameState;
use crate::rules::Rules;
use crate::snapshot;
use crate::types::{Player, Position, Tile};

#[wasm_bindgen]
pub struct DraughtsGame {
    state: GameState,
}

#[wasm_bindgen]
impl DraughtsGame {
    /// Standard 8×8 game. `config` is an optional rules object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<DraughtsGame, JsError> {
        Self::with_size(DEFAULT_SIZE, config)
    }

    #[wasm_bindgen(js_name = withSize)]
    pub fn with_size(size: usize, config: JsValue) -> Result<DraughtsGame, JsError> {
        let state = GameState::with_size(size, rules_from(config)?)?;
        Ok(Self { state })
    }

    /// Resumes from flat row-major tile codes and the code of the side to move.
    #[wasm_bindgen(js_name = fromState)]
    pub fn from_state(tiles: Vec<u8>, player: u8, config: JsValue) -> Result<DraughtsGame, JsError> {
        let tiles = tiles
            .into_iter()
            .map(Tile::from_code)
            .collect::<Result<Vec<_>, _>>()?;
        let state = GameState::from_tiles(&tiles, Player::from_code(player)?, rules_from(config)?)?;
        Ok(Self { state })
    }

    pub fn process(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<JsValue, JsError> {
        let result = self.state.process(
            Position::new(from_row, from_col),
            Position::new(to_row, to_col),
        )?;
        Ok(serde_wasm_bindgen::to_value(&result)?)
    }

    /// Tile code on the square, `undefined` when off the board.
    pub fn get(&self, row: i32, col: i32) -> Option<u8> {
        self.state.get(Position::new(row, col)).ok().map(Tile::code)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.state.current_player().code()
    }

    #[wasm_bindgen(js_name = whitePawnsAmount)]
    pub fn white_pawns_amount(&self) -> u32 {
        self.state.white_pawns_amount()
    }

    #[wasm_bindgen(js_name = blackPawnsAmount)]
    pub fn black_pawns_amount(&self) -> u32 {
        self.state.black_pawns_amount()
    }

    pub fn size(&self) -> usize {
        self.state.board().size()
    }

    /// Flat row-major tile codes.
    pub fn board(&self) -> Vec<u8> {
        self.state.board().tiles().iter().map(|tile| tile.code()).collect()
    }

    #[wasm_bindgen(js_name = exportState)]
    pub fn export_state(&self) -> Vec<u8> {
        snapshot::encode(&self.state)
    }

    /// Replaces the whole game with a snapshot, keeping the current rules.
    #[wasm_bindgen(js_name = importState)]
    pub fn import_state(&mut self, bytes: &[u8]) -> Result<(), JsError> {
        self.state = snapshot::decode(bytes, self.state.rules())?;
        Ok(())
    }
}

fn rules_from(config: JsValue) -> Result<Rules, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(Rules::default());
    }
    Ok(serde_wasm_bindgen::from_value(config)?)
}
