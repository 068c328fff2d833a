//! FEN-to-GameState parser.
//!
//! Builds a fully-populated board state from a Forsyth-Edwards Notation
//! string, including the mailbox, rights, en-passant target and clocks.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = next_field(&mut parts, "board layout")?;
    let side_part = next_field(&mut parts, "side-to-move")?;
    let castling_part = next_field(&mut parts, "castling rights")?;
    let en_passant_part = next_field(&mut parts, "en-passant square")?;
    let halfmove_part = next_field(&mut parts, "halfmove clock")?;
    let fullmove_part = next_field(&mut parts, "fullmove number")?;

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFenForm(
            "FEN has extra trailing fields".to_owned(),
        ));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenForm(format!("invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenForm(format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(game_state)
}

fn next_field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> ChessResult<&'a str> {
    parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenForm(format!("missing {name} in FEN")))
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenForm(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += empty_count as usize;
                if file > 8 {
                    return Err(ChessErrors::InvalidFenForm(
                        "board rank has too many files".to_owned(),
                    ));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;

            if file >= 8 {
                return Err(ChessErrors::InvalidFenForm(
                    "board rank has too many files".to_owned(),
                ));
            }

            game_state.squares[board_rank * 8 + file] = piece;
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenForm(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFenForm(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(ChessErrors::InvalidFenToken(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| ChessErrors::InvalidFenForm(format!("invalid en-passant square: {en_passant_part}")))
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(encode_piece(color, kind))
}
