use crate::errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_shared::{
    file_distance, offset_square, push_unless_own_piece, rank_distance,
};
use crate::moves::chess_move::ChessMove;

pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub fn generate_knight_moves(
    game_state: &GameState,
    start: Square,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    for offset in KNIGHT_OFFSETS {
        let Some(target) = offset_square(start, offset) else {
            continue;
        };

        // Reject wraparound across the a/h files.
        let (df, dr) = (file_distance(start, target), rank_distance(start, target));
        if !((df == 1 && dr == 2) || (df == 2 && dr == 1)) {
            continue;
        }

        push_unless_own_piece(game_state, start, target, out)?;
    }

    Ok(())
}
