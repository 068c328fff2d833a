//! Errors used throughout the search core.
//!
//! `ChessErrors` is the single error type returned by position mutation,
//! notation parsing, move generation, hashing and evaluation. Each variant
//! belongs to one coarse [`ErrorKind`] so callers can branch on the failure
//! class without matching every variant.
//!
//! Conditions that are part of normal search control flow (no moves at a node,
//! cache misses, hash collisions) are never reported through this type.

use crate::game_state::chess_types::{Piece, Square};

/// Coarse failure class of a [`ChessErrors`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed position-interchange text.
    ParseError,
    /// A value outside its valid domain was supplied by the caller.
    InvalidArgument,
    /// An operation was requested in a state that cannot support it.
    InvalidState,
    /// A board cell holds a code that is not one of the twelve piece codes.
    UnrepresentablePiece,
}

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// An unexpected character was found while parsing FEN text.
    #[error("invalid character '{0}' in FEN")]
    InvalidFenToken(char),

    /// FEN text does not have the expected six-field structure.
    #[error("malformed FEN: {0}")]
    InvalidFenForm(String),

    /// Coordinate or move text such as `e4` / `e2e4` could not be resolved.
    #[error("invalid algebraic text: {0}")]
    InvalidAlgebraic(String),

    /// A square index outside `0..64`.
    #[error("square index {0} is outside the board")]
    SquareOutOfRange(u8),

    /// `revert_last_move` was called with an empty history.
    #[error("no applied move to revert")]
    NoMoveToRevert,

    /// A cell code that does not decode to a color and one of the six kinds.
    #[error("unrepresentable piece code {code:#04x} on square {square}")]
    UnrepresentablePiece { code: Piece, square: Square },
}

impl ChessErrors {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChessErrors::InvalidFenToken(_)
            | ChessErrors::InvalidFenForm(_)
            | ChessErrors::InvalidAlgebraic(_) => ErrorKind::ParseError,
            ChessErrors::SquareOutOfRange(_) => ErrorKind::InvalidArgument,
            ChessErrors::NoMoveToRevert => ErrorKind::InvalidState,
            ChessErrors::UnrepresentablePiece { .. } => ErrorKind::UnrepresentablePiece,
        }
    }
}

pub type ChessResult<T> = Result<T, ChessErrors>;
