//! MVV-LVA (most valuable victim, least valuable attacker) move ordering.

use std::cmp::Reverse;

use crate::game_state::chess_types::{piece_kind, Piece};
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::piece_value;

#[inline]
fn value_of(piece: Piece) -> i32 {
    piece_kind(piece).map(piece_value).unwrap_or(0)
}

/// `10 * victim - attacker`; quiet moves score `-attacker`.
#[inline]
pub fn mvv_lva_score(mv: &ChessMove) -> i32 {
    10 * value_of(mv.captured_piece) - value_of(mv.moved_piece)
}

/// Stable descending sort, so equal scores keep generation order.
pub fn order_by_mvv_lva(moves: &mut [ChessMove]) {
    moves.sort_by_key(|mv| Reverse(mvv_lva_score(mv)));
}
