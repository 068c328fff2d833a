use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;

/// Single history record for `apply_move` / `revert_last_move`.
///
/// `mv` is fully populated by `apply_move` (moved piece, captured piece,
/// mover) so that the board squares can be restored from it alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
