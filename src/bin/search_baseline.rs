//! Fixed-depth search runner for quick manual checks.
//!
//! Usage:
//! `cargo run --release --bin search_baseline`
//! `cargo run --release --bin search_baseline -- --depth 5 --qdepth 2`
//! `cargo run --release --bin search_baseline -- --fen "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1"`
//!
//! Set `RUST_LOG=plum_minimax=debug` to see per-search summaries.

use tracing_subscriber::EnvFilter;

use plum_minimax::errors::ChessResult;
use plum_minimax::game_state::game_state::GameState;
use plum_minimax::move_generation::move_generator::PseudoLegalMoveGenerator;
use plum_minimax::search::board_scoring::PieceSquareScorer;
use plum_minimax::search::minimax::{minimax_search_with_tt, SearchConfig};
use plum_minimax::search::transposition_table::TranspositionTable;
use plum_minimax::search::zobrist::ZobristKeys;
use plum_minimax::utils::render_game_state::render_game_state;

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    arg_value(flag)
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(default)
}

fn run_case(name: &str, fen: &str, config: SearchConfig, keys: &ZobristKeys) -> ChessResult<()> {
    let mut game = GameState::from_fen(fen)?;
    let mut tt = TranspositionTable::with_capacity(config.tt_capacity);
    let result = minimax_search_with_tt(
        &mut game,
        &PseudoLegalMoveGenerator,
        &PieceSquareScorer,
        keys,
        config,
        &mut tt,
    )?;

    let best = result
        .best_move
        .map_or_else(|| "none".to_owned(), |mv| mv.to_string());
    let stats = tt.stats();
    println!(
        "{name}: depth={} nodes={} qnodes={} tt_hits={} tt_len={} evictions={} elapsed_ms={} best_score={} best_move={best}",
        result.reached_depth,
        result.nodes,
        result.quiescence_nodes,
        result.tt_hits,
        tt.len(),
        stats.evictions,
        result.elapsed_ms,
        result.best_score,
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SearchConfig {
        max_depth: parse_arg_u8("--depth", 4),
        quiescence_max_ply: parse_arg_u8("--qdepth", 4),
        ..SearchConfig::default()
    };
    let keys = ZobristKeys::default();

    if let Some(fen) = arg_value("--fen") {
        let game = GameState::from_fen(&fen)?;
        println!("{}", render_game_state(&game));
        run_case("custom", &fen, config, &keys)?;
        return Ok(());
    }

    let suite = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        (
            "classical_mid",
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        ),
        ("end_kpk", "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1"),
    ];
    println!(
        "baseline run: depth={} qdepth={}",
        config.max_depth, config.quiescence_max_ply
    );
    for (name, fen) in suite {
        run_case(name, fen, config, &keys)?;
    }
    Ok(())
}
