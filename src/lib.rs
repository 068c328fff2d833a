//! Crate root module declarations for the Plum Minimax search core.
//!
//! This file exposes the position model, pseudo-legal move generation, the
//! alpha-beta search with its transposition cache, engine wrappers, and the
//! notation helpers so binaries, tests, and benches can import stable paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_ordering;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod move_shared;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_sliding;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
