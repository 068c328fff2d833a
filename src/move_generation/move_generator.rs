//! Pseudo-legal move generation entry points.
//!
//! Moves are produced for the side to move in ascending start-square order,
//! then in each piece generator's fixed offset/direction order. Moves that
//! leave the mover's own king attacked are not filtered out.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::moves_king::generate_king_moves;
use crate::move_generation::moves_knight::generate_knight_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_sliding::generate_sliding_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::move_ordering::order_by_mvv_lva;

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &GameState) -> ChessResult<Vec<ChessMove>>;

    /// Capturing subset of `generate_moves`, best MVV-LVA score first.
    fn generate_capture_moves(&self, game_state: &GameState) -> ChessResult<Vec<ChessMove>> {
        let mut captures: Vec<ChessMove> = self
            .generate_moves(game_state)?
            .into_iter()
            .filter(|mv| mv.is_capture())
            .collect();
        order_by_mvv_lva(&mut captures);
        Ok(captures)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> ChessResult<Vec<ChessMove>> {
        let mut out = Vec::with_capacity(64);
        generate_pseudo_legal_moves(game_state, &mut out)?;
        Ok(out)
    }
}

pub fn generate_pseudo_legal_moves(
    game_state: &GameState,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    let side = game_state.side_to_move;

    for (index, &piece) in game_state.squares.iter().enumerate() {
        if piece == NO_PIECE {
            continue;
        }

        let start = index as Square;
        let (color, kind) = decode_piece(piece).ok_or(ChessErrors::UnrepresentablePiece {
            code: piece,
            square: start,
        })?;
        if color != side {
            continue;
        }

        match kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, start, out)?,
            PieceKind::Knight => generate_knight_moves(game_state, start, out)?,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                generate_sliding_moves(game_state, start, kind, out)?
            }
            PieceKind::King => generate_king_moves(game_state, start, out)?,
        }
    }

    Ok(())
}
