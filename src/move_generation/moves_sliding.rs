//! Ray-walking generation for bishops, rooks and queens.
//!
//! Rays run over the flat 0..64 index, so every step is checked against the
//! previous square's file to stop a ray from wrapping onto the next rank.

use crate::errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_shared::{file_distance, offset_square, push_unless_own_piece};
use crate::moves::chess_move::ChessMove;

pub const ROOK_DIRECTIONS: [i8; 4] = [-8, -1, 1, 8];
pub const BISHOP_DIRECTIONS: [i8; 4] = [-9, -7, 7, 9];
pub const QUEEN_DIRECTIONS: [i8; 8] = [-8, -1, 1, 8, -9, -7, 7, 9];

pub fn directions_for(kind: PieceKind) -> &'static [i8] {
    match kind {
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

pub fn generate_sliding_moves(
    game_state: &GameState,
    start: Square,
    kind: PieceKind,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    for &direction in directions_for(kind) {
        let mut current = start;

        while let Some(target) = offset_square(current, direction) {
            if crosses_edge(current, target, direction) {
                break;
            }
            if !push_unless_own_piece(game_state, start, target, out)? {
                break;
            }
            current = target;
        }
    }

    Ok(())
}

#[inline]
fn crosses_edge(from: Square, to: Square, direction: i8) -> bool {
    match direction.abs() {
        8 => false,
        _ => file_distance(from, to) != 1,
    }
}
