use crate::errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_shared::{
    file_distance, offset_square, push_unless_own_piece, rank_distance,
};
use crate::moves::chess_move::ChessMove;

pub const KING_OFFSETS: [i8; 8] = [-1, 1, -8, 8, -7, 7, -9, 9];

/// Single-step king moves. Castling is not generated.
pub fn generate_king_moves(
    game_state: &GameState,
    start: Square,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    for offset in KING_OFFSETS {
        let Some(target) = offset_square(start, offset) else {
            continue;
        };
        if file_distance(start, target) > 1 || rank_distance(start, target) > 1 {
            continue;
        }

        push_unless_own_piece(game_state, start, target, out)?;
    }

    Ok(())
}
