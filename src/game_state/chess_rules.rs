//! Canonical chess-rule constants.
//!
//! Static literals shared by position setup, move generation and notation.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const BOARD_SQUARES: usize = 64;

/// Rank (0-based) pawns start on and may double-push from.
pub const LIGHT_PAWN_HOME_RANK: u8 = 1;
pub const DARK_PAWN_HOME_RANK: u8 = 6;

pub const LIGHT_PROMOTION_RANK: u8 = 7;
pub const DARK_PROMOTION_RANK: u8 = 0;

// Rook home squares, used for castling-right bookkeeping.
pub const LIGHT_QUEENSIDE_ROOK: Square = 0;
pub const LIGHT_KINGSIDE_ROOK: Square = 7;
pub const DARK_QUEENSIDE_ROOK: Square = 56;
pub const DARK_KINGSIDE_ROOK: Square = 63;
