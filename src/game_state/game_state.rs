//! Mutable board state with reversible move application.
//!
//! `GameState` stores a 64-cell mailbox of packed piece codes, turn/state
//! flags, clocks, and the undo stack used by the in-place
//! `apply_move` / `revert_last_move` workflow that the search relies on.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{BOARD_SQUARES, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Mailbox representation (0 == a1, 63 == h8) ---
    pub squares: [Piece; BOARD_SQUARES],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // --- Apply/revert stack ---
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [NO_PIECE; BOARD_SQUARES],

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).unwrap_or_default()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece code on `square`, or `NO_PIECE` when empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> ChessResult<Piece> {
        self.squares
            .get(usize::from(square))
            .copied()
            .ok_or(ChessErrors::SquareOutOfRange(square))
    }

    /// Occupied squares holding `color` pieces, in ascending square order.
    pub fn piece_squares(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        let color_code = color.code();
        self.squares
            .iter()
            .enumerate()
            .filter(move |&(_, &piece)| piece != NO_PIECE && piece & COLOR_MASK == color_code)
            .map(|(square, _)| square as Square)
    }

    /// Number of applied moves that have not been reverted.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.undo_stack.last().map(|undo| &undo.mv)
    }

    /// Apply a pseudo-legal move in place. See [`move_apply::apply_move`].
    #[inline]
    pub fn apply_move(&mut self, mv: ChessMove) -> ChessResult<()> {
        move_apply::apply_move(self, mv)
    }

    #[inline]
    pub fn revert_last_move(&mut self) -> ChessResult<ChessMove> {
        move_apply::revert_last_move(self)
    }
}
