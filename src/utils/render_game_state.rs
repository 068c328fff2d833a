//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the mailbox for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
/// Malformed cell codes render as `?`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let piece = game_state.squares[usize::from(rank * 8 + file)];
            out.push(piece_to_unicode(piece));

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    if piece == NO_PIECE {
        return '·';
    }
    match decode_piece(piece) {
        Some((Color::Light, PieceKind::Pawn)) => '♙',
        Some((Color::Light, PieceKind::Knight)) => '♘',
        Some((Color::Light, PieceKind::Bishop)) => '♗',
        Some((Color::Light, PieceKind::Rook)) => '♖',
        Some((Color::Light, PieceKind::Queen)) => '♕',
        Some((Color::Light, PieceKind::King)) => '♔',
        Some((Color::Dark, PieceKind::Pawn)) => '♟',
        Some((Color::Dark, PieceKind::Knight)) => '♞',
        Some((Color::Dark, PieceKind::Bishop)) => '♝',
        Some((Color::Dark, PieceKind::Rook)) => '♜',
        Some((Color::Dark, PieceKind::Queen)) => '♛',
        Some((Color::Dark, PieceKind::King)) => '♚',
        None => '?',
    }
}
