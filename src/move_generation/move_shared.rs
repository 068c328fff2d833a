//! Helpers shared by the per-piece generators.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;

/// Color of the piece on `square`, `None` when the cell is empty.
#[inline]
pub fn occupant_color(game_state: &GameState, square: Square) -> ChessResult<Option<Color>> {
    let piece = game_state.squares[usize::from(square)];
    if piece == NO_PIECE {
        return Ok(None);
    }
    decode_piece(piece)
        .map(|(color, _)| Some(color))
        .ok_or(ChessErrors::UnrepresentablePiece {
            code: piece,
            square,
        })
}

/// Step from `square` by a flat offset, `None` when it leaves `0..64`.
#[inline]
pub fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let target = i16::from(square) + i16::from(offset);
    (0..64).contains(&target).then_some(target as Square)
}

#[inline]
pub fn file_distance(a: Square, b: Square) -> u8 {
    file_of(a).abs_diff(file_of(b))
}

#[inline]
pub fn rank_distance(a: Square, b: Square) -> u8 {
    rank_of(a).abs_diff(rank_of(b))
}

/// Push a move onto `out` unless `target` holds a piece of the mover's color.
///
/// Returns whether `target` was empty, which sliding rays use to keep walking.
pub fn push_unless_own_piece(
    game_state: &GameState,
    start: Square,
    target: Square,
    out: &mut Vec<ChessMove>,
) -> ChessResult<bool> {
    let side = game_state.side_to_move;
    let moved = game_state.squares[usize::from(start)];

    match occupant_color(game_state, target)? {
        None => {
            out.push(ChessMove::new(start, target)?.with_pieces(side, moved, NO_PIECE));
            Ok(true)
        }
        Some(color) if color != side => {
            let captured = game_state.squares[usize::from(target)];
            out.push(ChessMove::new(start, target)?.with_pieces(side, moved, captured));
            Ok(false)
        }
        Some(_) => Ok(false),
    }
}
