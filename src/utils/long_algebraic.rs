//! Long-algebraic (`e2e4`, `e7e8q`) conversions for moves.
//!
//! Text is resolved against the generator's output using the move identity
//! `(start, target)`, so any promotion suffix only needs to be well-formed.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &ChessMove) -> ChessResult<String> {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.start)?);
    out.push_str(&square_to_algebraic(mv.target)?);

    if mv.is_promotion() {
        let suffix = match piece_kind(mv.promotion_piece) {
            Some(PieceKind::Knight) => 'n',
            Some(PieceKind::Bishop) => 'b',
            Some(PieceKind::Rook) => 'r',
            Some(PieceKind::Queen) => 'q',
            _ => {
                return Err(ChessErrors::UnrepresentablePiece {
                    code: mv.promotion_piece,
                    square: mv.target,
                })
            }
        };
        out.push(suffix);
    }

    Ok(out)
}

/// Resolve `text` to one of the pseudo-legal moves of `game_state`.
pub fn long_algebraic_to_move<G: MoveGenerator>(
    text: &str,
    game_state: &GameState,
    generator: &G,
) -> ChessResult<ChessMove> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    if let Some(suffix) = text[4..].chars().next() {
        if !matches!(suffix, 'n' | 'b' | 'r' | 'q') {
            return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
        }
    }

    let wanted = ChessMove::new(algebraic_to_square(&text[0..2])?, algebraic_to_square(&text[2..4])?)?;

    generator
        .generate_moves(game_state)?
        .into_iter()
        .find(|mv| *mv == wanted)
        .ok_or_else(|| ChessErrors::InvalidAlgebraic(text.to_owned()))
}
