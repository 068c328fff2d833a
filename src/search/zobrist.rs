//! Zobrist hashing for transposition-cache lookups.
//!
//! A key table holds one random 64-bit constant per `(piece, square)` pair and
//! one for "dark to move". The hash is the XOR of the constants for every
//! occupied square plus the side constant, so it depends only on occupancy and
//! side to move. Castling rights, the en-passant target and the clocks are
//! deliberately not part of the key.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;

pub const DEFAULT_ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    piece_square: [[u64; 12]; 64],
    side_to_move: u64,
}

static SHARED_KEYS: OnceLock<ZobristKeys> = OnceLock::new();

impl ZobristKeys {
    /// Build a key table from a fixed seed. Equal seeds give equal tables.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut piece_square = [[0u64; 12]; 64];
        for square in &mut piece_square {
            for key in square {
                *key = rng.random::<u64>();
            }
        }
        let side_to_move = rng.random::<u64>();

        Self {
            piece_square,
            side_to_move,
        }
    }

    /// Process-wide table built once from `DEFAULT_ZOBRIST_SEED`.
    pub fn shared() -> &'static ZobristKeys {
        SHARED_KEYS.get_or_init(|| Self::from_seed(DEFAULT_ZOBRIST_SEED))
    }

    #[inline]
    pub fn side_to_move_key(&self) -> u64 {
        self.side_to_move
    }

    /// Key for a piece code on `square`.
    #[inline]
    pub fn piece_square_key(&self, piece: Piece, square: Square) -> ChessResult<u64> {
        let (color, kind) = decode_piece(piece)
            .ok_or(ChessErrors::UnrepresentablePiece { code: piece, square })?;
        let slot = kind.index() + 6 * color.index();
        self.piece_square
            .get(usize::from(square))
            .map(|keys| keys[slot])
            .ok_or(ChessErrors::SquareOutOfRange(square))
    }

    /// Full hash of the position.
    pub fn hash(&self, game_state: &GameState) -> ChessResult<u64> {
        let mut key = 0u64;
        for (square, &piece) in game_state.squares.iter().enumerate() {
            if piece != NO_PIECE {
                key ^= self.piece_square_key(piece, square as Square)?;
            }
        }
        if game_state.side_to_move == Color::Dark {
            key ^= self.side_to_move;
        }
        Ok(key)
    }

    /// Hash after applying `mv` to a position hashing to `hash`.
    ///
    /// `mv` must be the populated record produced by `apply_move`
    /// (see `GameState::last_move`), since it relies on the moved, captured
    /// and promotion pieces.
    pub fn hash_after_move(&self, hash: u64, mv: &ChessMove) -> ChessResult<u64> {
        let mut key = hash ^ self.side_to_move;
        key ^= self.piece_square_key(mv.moved_piece, mv.start)?;
        if mv.is_capture() {
            key ^= self.piece_square_key(mv.captured_piece, mv.capture_square())?;
        }
        let placed = if mv.is_promotion() {
            mv.promotion_piece
        } else {
            mv.moved_piece
        };
        key ^= self.piece_square_key(placed, mv.target)?;
        Ok(key)
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::from_seed(DEFAULT_ZOBRIST_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::ZobristKeys;
    use crate::errors::ErrorKind;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

    #[test]
    fn starting_position_hash_is_deterministic() {
        let keys = ZobristKeys::from_seed(11);
        let a = keys.hash(&GameState::new_game()).expect("hashes");
        let b = ZobristKeys::from_seed(11)
            .hash(&GameState::new_game())
            .expect("hashes");
        assert_eq!(a, b);
        assert_ne!(a, ZobristKeys::from_seed(12).hash(&GameState::new_game()).expect("hashes"));
    }

    #[test]
    fn side_to_move_changes_hash() {
        let keys = ZobristKeys::shared();
        let w = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let b = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let hw = keys.hash(&w).expect("hashes");
        let hb = keys.hash(&b).expect("hashes");
        assert_eq!(hw ^ hb, keys.side_to_move_key());
    }

    #[test]
    fn castling_en_passant_and_clocks_do_not_change_hash() {
        let keys = ZobristKeys::shared();
        let plain = GameState::from_fen("4k3/8/8/8/8/8/4P3/R3K2R w - - 0 1").expect("FEN should parse");
        let decorated =
            GameState::from_fen("4k3/8/8/8/8/8/4P3/R3K2R w KQ e3 17 42").expect("FEN should parse");
        assert_eq!(
            keys.hash(&plain).expect("hashes"),
            keys.hash(&decorated).expect("hashes")
        );
    }

    #[test]
    fn incremental_hash_matches_recompute() {
        let keys = ZobristKeys::from_seed(3);
        let mut game = GameState::from_fen("r3k3/1P6/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should parse");
        let before = keys.hash(&game).expect("hashes");
        for mv in PseudoLegalMoveGenerator.generate_moves(&game).expect("generates") {
            game.apply_move(mv).expect("applies");
            let record = *game.last_move().expect("history has a move");
            let incremental = keys.hash_after_move(before, &record).expect("hashes");
            assert_eq!(incremental, keys.hash(&game).expect("hashes"), "move {mv}");
            game.revert_last_move().expect("reverts");
        }
    }

    #[test]
    fn malformed_cell_is_reported() {
        let mut game = GameState::new_game();
        game.squares[30] = DARK | LIGHT | 1;
        let err = ZobristKeys::shared().hash(&game).expect_err("both color bits set");
        assert_eq!(err.kind(), ErrorKind::UnrepresentablePiece);
    }
}
