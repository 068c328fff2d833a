//! In-place move application and reversal.
//!
//! `apply_move` fills the history record from the board itself (moved piece,
//! captured piece, mover, en-passant and double-push flags), so that
//! `revert_last_move` can restore every field it touched from that record and
//! the saved rights/clocks alone.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};
use crate::moves::chess_move::ChessMove;

/// Apply a pseudo-legal move. Legality is not checked.
///
/// Fails only when the move's squares lie off the board.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) -> ChessResult<()> {
    let mut record = ChessMove::new(mv.start, mv.target)?;
    let start = usize::from(mv.start);
    let target = usize::from(mv.target);

    let side = game_state.side_to_move;
    let moved = game_state.squares[start];
    let is_pawn = piece_kind(moved) == Some(PieceKind::Pawn);

    record.is_en_passant = is_pawn && is_en_passant_capture(game_state, mv.start, mv.target);
    record.is_double_pawn_push = is_pawn && mv.start.abs_diff(mv.target) == 16;
    record.side_to_move = side;
    record.moved_piece = moved;
    record.captured_piece = game_state.squares[usize::from(record.capture_square())];

    let placed = if is_pawn && reaches_promotion_rank(side, mv.target) {
        let kind = match piece_kind(mv.promotion_piece) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook)) => kind,
            _ => PieceKind::Queen,
        };
        record.promotion_piece = encode_piece(side, kind);
        record.promotion_piece
    } else {
        moved
    };

    game_state.undo_stack.push(UndoState {
        mv: record,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    });

    game_state.squares[usize::from(record.capture_square())] = NO_PIECE;
    game_state.squares[start] = NO_PIECE;
    game_state.squares[target] = placed;

    update_castling_rights(game_state, side, mv.start, mv.target, moved);

    game_state.en_passant_square = if record.is_double_pawn_push {
        Some((mv.start + mv.target) / 2)
    } else {
        None
    };

    if is_pawn || record.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if side == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = side.opposite();

    Ok(())
}

/// Undo the most recent `apply_move`, returning the populated move record.
pub fn revert_last_move(game_state: &mut GameState) -> ChessResult<ChessMove> {
    let undo = game_state
        .undo_stack
        .pop()
        .ok_or(ChessErrors::NoMoveToRevert)?;
    let mv = undo.mv;

    game_state.squares[usize::from(mv.target)] = NO_PIECE;
    game_state.squares[usize::from(mv.capture_square())] = mv.captured_piece;
    game_state.squares[usize::from(mv.start)] = mv.moved_piece;

    game_state.side_to_move = mv.side_to_move;
    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;

    Ok(mv)
}

/// A diagonal pawn step onto the empty en-passant target square.
fn is_en_passant_capture(game_state: &GameState, start: Square, target: Square) -> bool {
    let capture_rank = match game_state.side_to_move {
        Color::Light => 5,
        Color::Dark => 2,
    };
    game_state.en_passant_square == Some(target)
        && rank_of(target) == capture_rank
        && file_of(start) != file_of(target)
        && game_state.squares[usize::from(target)] == NO_PIECE
}

#[inline]
fn reaches_promotion_rank(side: Color, target: Square) -> bool {
    match side {
        Color::Light => rank_of(target) == LIGHT_PROMOTION_RANK,
        Color::Dark => rank_of(target) == DARK_PROMOTION_RANK,
    }
}

fn update_castling_rights(
    game_state: &mut GameState,
    moving_color: Color,
    from: Square,
    to: Square,
    moved_piece: Piece,
) {
    match piece_kind(moved_piece) {
        Some(PieceKind::King) => {
            game_state.castling_rights &= match moving_color {
                Color::Light => !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE),
                Color::Dark => !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE),
            };
        }
        Some(PieceKind::Rook) => clear_rook_right(game_state, from),
        _ => {}
    }

    // Capturing a rook on its home square also removes the right.
    clear_rook_right(game_state, to);
}

fn clear_rook_right(game_state: &mut GameState, square: Square) {
    match square {
        LIGHT_QUEENSIDE_ROOK => game_state.castling_rights &= !CASTLE_LIGHT_QUEENSIDE,
        LIGHT_KINGSIDE_ROOK => game_state.castling_rights &= !CASTLE_LIGHT_KINGSIDE,
        DARK_QUEENSIDE_ROOK => game_state.castling_rights &= !CASTLE_DARK_QUEENSIDE,
        DARK_KINGSIDE_ROOK => game_state.castling_rights &= !CASTLE_DARK_KINGSIDE,
        _ => {}
    }
}
