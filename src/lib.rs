use wasm_bindgen::prelude::*;

pub mod board;
pub mod capture;
pub mod error;
pub mod game;
pub mod orientation;
pub mod rules;
pub mod snapshot;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::{GameError, GameResult};
pub use game::GameState;
pub use orientation::Orientation;
pub use rules::{CaptureChoice, Rules};
pub use types::{MoveResult, Player, Position, Tile};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
