//! Move value type shared by generation, application and search.
//!
//! A `ChessMove` carries everything needed to undo itself once applied. Two
//! moves compare equal when they share the same start and target squares;
//! piece metadata and promotion choice do not take part in identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SQUARES;
use crate::game_state::chess_types::{Color, Piece, Square, NO_PIECE};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub start: Square,
    pub target: Square,
    pub moved_piece: Piece,
    pub captured_piece: Piece,
    pub promotion_piece: Piece,
    pub side_to_move: Color,
    pub is_double_pawn_push: bool,
    pub is_en_passant: bool,
}

impl ChessMove {
    /// Build a bare move between two squares.
    ///
    /// Piece metadata is left empty; `apply_move` fills it from the board.
    pub fn new(start: Square, target: Square) -> ChessResult<Self> {
        for square in [start, target] {
            if usize::from(square) >= BOARD_SQUARES {
                return Err(ChessErrors::SquareOutOfRange(square));
            }
        }

        Ok(Self {
            start,
            target,
            moved_piece: NO_PIECE,
            captured_piece: NO_PIECE,
            promotion_piece: NO_PIECE,
            side_to_move: Color::Light,
            is_double_pawn_push: false,
            is_en_passant: false,
        })
    }

    #[inline]
    pub fn with_pieces(mut self, side_to_move: Color, moved: Piece, captured: Piece) -> Self {
        self.side_to_move = side_to_move;
        self.moved_piece = moved;
        self.captured_piece = captured;
        self
    }

    #[inline]
    pub fn with_promotion(mut self, promotion: Piece) -> Self {
        self.promotion_piece = promotion;
        self
    }

    #[inline]
    pub fn with_double_pawn_push(mut self) -> Self {
        self.is_double_pawn_push = true;
        self
    }

    #[inline]
    pub fn with_en_passant(mut self) -> Self {
        self.is_en_passant = true;
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece != NO_PIECE
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion_piece != NO_PIECE
    }

    /// Square of the piece removed by this move, if any.
    ///
    /// Differs from `target` only for en passant, where the passed pawn sits
    /// one rank behind the target square.
    #[inline]
    pub fn capture_square(&self) -> Square {
        if !self.is_en_passant {
            return self.target;
        }
        match self.side_to_move {
            Color::Light => self.target - 8,
            Color::Dark => self.target + 8,
        }
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.target == other.target
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.target.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = square_to_algebraic(self.start).map_err(|_| fmt::Error)?;
        let target = square_to_algebraic(self.target).map_err(|_| fmt::Error)?;
        write!(f, "{start}{target}")
    }
}
