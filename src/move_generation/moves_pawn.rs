//! Pawn pushes, captures, promotions and en passant.
//!
//! Promotions are emitted as queen promotions only, so a start/target pair
//! maps to exactly one generated move.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::{
    DARK_PAWN_HOME_RANK, DARK_PROMOTION_RANK, LIGHT_PAWN_HOME_RANK, LIGHT_PROMOTION_RANK,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_shared::{file_distance, occupant_color, offset_square};
use crate::moves::chess_move::ChessMove;

pub fn generate_pawn_moves(
    game_state: &GameState,
    start: Square,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    let side = game_state.side_to_move;
    let pawn = game_state.squares[usize::from(start)];
    let (direction, home_rank) = match side {
        Color::Light => (8i8, LIGHT_PAWN_HOME_RANK),
        Color::Dark => (-8i8, DARK_PAWN_HOME_RANK),
    };

    // Pushes.
    if let Some(one_step) = offset_square(start, direction) {
        if occupant_color(game_state, one_step)?.is_none() {
            out.push(pawn_move(side, start, one_step, pawn, NO_PIECE)?);

            if rank_of(start) == home_rank {
                if let Some(two_step) = offset_square(one_step, direction) {
                    if occupant_color(game_state, two_step)?.is_none() {
                        out.push(
                            ChessMove::new(start, two_step)?
                                .with_pieces(side, pawn, NO_PIECE)
                                .with_double_pawn_push(),
                        );
                    }
                }
            }
        }
    }

    // Captures and en passant.
    for offset in [direction - 1, direction + 1] {
        let Some(target) = offset_square(start, offset) else {
            continue;
        };
        if file_distance(start, target) != 1 {
            continue;
        }

        match occupant_color(game_state, target)? {
            Some(color) if color != side => {
                let captured = game_state.squares[usize::from(target)];
                out.push(pawn_move(side, start, target, pawn, captured)?);
            }
            Some(_) => {}
            None => {
                if let Some(mv) = en_passant_move(game_state, start, target)? {
                    out.push(mv);
                }
            }
        }
    }

    Ok(())
}

/// En passant is available only onto the current en-passant target, and only
/// while the passed pawn still stands beside the capturing pawn.
fn en_passant_move(
    game_state: &GameState,
    start: Square,
    target: Square,
) -> ChessResult<Option<ChessMove>> {
    if game_state.en_passant_square != Some(target) {
        return Ok(None);
    }

    let side = game_state.side_to_move;
    let pawn = game_state.squares[usize::from(start)];
    let candidate = ChessMove::new(start, target)?
        .with_pieces(side, pawn, NO_PIECE)
        .with_en_passant();

    let passed_square = (rank_of(start) * 8) + file_of(target);
    let passed_pawn = encode_piece(side.opposite(), PieceKind::Pawn);
    if candidate.capture_square() != passed_square
        || game_state.squares[usize::from(passed_square)] != passed_pawn
    {
        return Ok(None);
    }

    Ok(Some(candidate.with_pieces(side, pawn, passed_pawn)))
}

fn pawn_move(
    side: Color,
    start: Square,
    target: Square,
    pawn: Piece,
    captured: Piece,
) -> ChessResult<ChessMove> {
    let mv = ChessMove::new(start, target)?.with_pieces(side, pawn, captured);
    let promotion_rank = match side {
        Color::Light => LIGHT_PROMOTION_RANK,
        Color::Dark => DARK_PROMOTION_RANK,
    };

    if rank_of(target) == promotion_rank {
        return Ok(mv.with_promotion(encode_piece(side, PieceKind::Queen)));
    }
    Ok(mv)
}
