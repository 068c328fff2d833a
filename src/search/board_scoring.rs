//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Scores are always white-positive, whichever side is to move.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Static score, positive favoring white.
    ///
    /// Fails when a board cell holds an unrepresentable piece code.
    fn score(&self, game_state: &GameState) -> ChessResult<i32>;
}

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Decode every occupied cell, failing on the first malformed code.
fn for_each_piece(
    game_state: &GameState,
    mut visit: impl FnMut(Square, Color, PieceKind),
) -> ChessResult<()> {
    for (square, &code) in game_state.squares.iter().enumerate() {
        if code == NO_PIECE {
            continue;
        }
        let square = square as Square;
        let (color, kind) =
            decode_piece(code).ok_or(ChessErrors::UnrepresentablePiece { code, square })?;
        visit(square, color, kind);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> ChessResult<i32> {
        let mut score = 0i32;
        for_each_piece(game_state, |_, color, kind| {
            score += color.perspective() * piece_value(kind);
        })?;
        Ok(score)
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MIDDLE_GAME_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_ENDGAME_TABLE: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

/// Side-with-at-most-this-many-pieces threshold for the king endgame table.
const ENDGAME_PIECE_LIMIT: usize = 4;

/// Material plus piece-square bonuses.
///
/// Tables are indexed by square for white and by the rank-mirrored square for
/// black. Once both sides are down to `ENDGAME_PIECE_LIMIT` pieces or fewer,
/// kings switch to the centralising endgame table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    #[inline]
    fn positional_bonus(kind: PieceKind, index: usize, endgame: bool) -> i32 {
        let table = match kind {
            PieceKind::Pawn => &PAWN_TABLE,
            PieceKind::Knight => &KNIGHT_TABLE,
            PieceKind::Bishop => &BISHOP_TABLE,
            PieceKind::Rook => &ROOK_TABLE,
            PieceKind::Queen => &QUEEN_TABLE,
            PieceKind::King if endgame => &KING_ENDGAME_TABLE,
            PieceKind::King => &KING_MIDDLE_GAME_TABLE,
        };
        table[index]
    }

    #[inline]
    fn mirror(square: Square) -> usize {
        usize::from((7 - rank_of(square)) * 8 + file_of(square))
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> ChessResult<i32> {
        let mut counts = [0usize; 2];
        for_each_piece(game_state, |_, color, _| counts[color.index()] += 1)?;
        let endgame = counts.iter().all(|&count| count <= ENDGAME_PIECE_LIMIT);

        let mut score = 0i32;
        for_each_piece(game_state, |square, color, kind| {
            let index = match color {
                Color::Light => usize::from(square),
                Color::Dark => Self::mirror(square),
            };
            let value = piece_value(kind) + Self::positional_bonus(kind, index, endgame);
            score += color.perspective() * value;
        })?;
        Ok(score)
    }
}
