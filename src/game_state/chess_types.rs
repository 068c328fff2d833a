//! Core value types for the mailbox board representation.
//!
//! A board cell holds a packed piece code: the low three bits carry the piece
//! kind (`1..=6`) and bits 3/4 carry the color (`8` light, `16` dark). Kind
//! and color are recovered with independent masks, `0` is an empty cell.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    #[inline]
    pub const fn code(self) -> Piece {
        match self {
            Color::Light => LIGHT,
            Color::Dark => DARK,
        }
    }

    /// Sign that converts a light-positive score into this side's perspective.
    #[inline]
    pub const fn perspective(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn code(self) -> Piece {
        self.index() as Piece + 1
    }

    #[inline]
    pub const fn from_code(code: Piece) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Packed piece code stored in a board cell (`0` means empty).
pub type Piece = u8;

/// Board square index (`0..=63`, `0 == a1`, `63 == h8`).
pub type Square = u8;

pub const NO_PIECE: Piece = 0;
pub const KIND_MASK: Piece = 0b0_0111;
pub const COLOR_MASK: Piece = 0b1_1000;
pub const LIGHT: Piece = 0b0_1000;
pub const DARK: Piece = 0b1_0000;

#[inline]
pub const fn encode_piece(color: Color, kind: PieceKind) -> Piece {
    color.code() | kind.code()
}

#[inline]
pub const fn piece_kind(piece: Piece) -> Option<PieceKind> {
    PieceKind::from_code(piece & KIND_MASK)
}

#[inline]
pub const fn piece_color(piece: Piece) -> Option<Color> {
    match piece & COLOR_MASK {
        LIGHT => Some(Color::Light),
        DARK => Some(Color::Dark),
        _ => None,
    }
}

/// Decode a cell into `(color, kind)`; `None` for empty or malformed codes.
#[inline]
pub const fn decode_piece(piece: Piece) -> Option<(Color, PieceKind)> {
    if piece & !(KIND_MASK | COLOR_MASK) != 0 {
        return None;
    }
    match (piece_color(piece), piece_kind(piece)) {
        (Some(color), Some(kind)) => Some((color, kind)),
        _ => None,
    }
}

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub type CastlingRights = u8;

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}
