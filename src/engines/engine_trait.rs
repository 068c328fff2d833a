//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Drop state carried between searches, such as cached results.
    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
