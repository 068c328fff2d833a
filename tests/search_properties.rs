use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use plum_minimax::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_minimax::game_state::chess_types::*;
use plum_minimax::game_state::game_state::GameState;
use plum_minimax::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use plum_minimax::moves::chess_move::ChessMove;
use plum_minimax::search::board_scoring::{BoardScorer, MaterialScorer, PieceSquareScorer};
use plum_minimax::search::minimax::{choose_move, minimax_search_with_tt, SearchConfig};
use plum_minimax::search::transposition_table::TranspositionTable;
use plum_minimax::search::zobrist::ZobristKeys;
use plum_minimax::utils::long_algebraic::long_algebraic_to_move;

const WALK_FENS: &[&str] = &[
    STARTING_POSITION_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
];

const SEARCH_FENS: &[&str] = &[
    STARTING_POSITION_FEN,
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "4k3/8/8/2p5/3p4/8/8/3QK3 w - - 0 1",
    "6k1/5ppp/8/8/8/8/r4PPP/1R4K1 b - - 0 1",
];

fn play(game: &mut GameState, lan: &str) {
    let mv = long_algebraic_to_move(lan, game, &PseudoLegalMoveGenerator)
        .expect("move text should resolve");
    game.apply_move(mv).expect("move should apply");
}

fn exhaustive_score<S: BoardScorer>(game: &mut GameState, scorer: &S, depth: u8) -> i32 {
    let moves = PseudoLegalMoveGenerator
        .generate_moves(game)
        .expect("generation should succeed");
    if depth == 0 || moves.is_empty() {
        return scorer.score(game).expect("scoring should succeed");
    }

    let maximizing = game.side_to_move == Color::Light;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        game.apply_move(mv).expect("move should apply");
        let score = exhaustive_score(game, scorer, depth - 1);
        game.revert_last_move().expect("move should revert");
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

fn exhaustive_choice<S: BoardScorer>(
    game: &mut GameState,
    scorer: &S,
    depth: u8,
) -> Option<ChessMove> {
    let maximizing = game.side_to_move == Color::Light;
    let mut best: Option<(ChessMove, i32)> = None;
    for mv in PseudoLegalMoveGenerator
        .generate_moves(game)
        .expect("generation should succeed")
    {
        game.apply_move(mv).expect("move should apply");
        let score = exhaustive_score(game, scorer, depth - 1);
        game.revert_last_move().expect("move should revert");

        let improves = match best {
            None => true,
            Some((_, current)) if maximizing => score > current,
            Some((_, current)) => score < current,
        };
        if improves {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

fn pruned_choice<S: BoardScorer>(
    game: &mut GameState,
    scorer: &S,
    depth: u8,
    tt: &mut TranspositionTable,
) -> Option<ChessMove> {
    let config = SearchConfig {
        max_depth: depth,
        quiescence_max_ply: 0,
        futility_pruning: false,
        ..SearchConfig::default()
    };
    minimax_search_with_tt(
        game,
        &PseudoLegalMoveGenerator,
        scorer,
        &ZobristKeys::from_seed(21),
        config,
        tt,
    )
    .expect("search should run")
    .best_move
}

#[test]
fn random_walks_revert_exactly() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let keys = ZobristKeys::from_seed(77);

    for fen in WALK_FENS {
        let start = GameState::from_fen(fen).expect("FEN should parse");
        let mut game = start.clone();

        for _ in 0..60 {
            let moves = PseudoLegalMoveGenerator
                .generate_moves(&game)
                .expect("generation should succeed");
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };

            let before = game.clone();
            let hash_before = keys.hash(&game).expect("hashes");
            game.apply_move(mv).expect("move should apply");
            let record = *game.last_move().expect("history has a move");
            assert_eq!(
                keys.hash_after_move(hash_before, &record).expect("hashes"),
                keys.hash(&game).expect("hashes"),
                "incremental hash mismatch after {mv} from {}",
                before.get_fen()
            );

            game.revert_last_move().expect("move should revert");
            assert_eq!(game, before, "revert of {mv} changed the position");
            game.apply_move(mv).expect("move should apply");
        }

        while game.history_len() > 0 {
            game.revert_last_move().expect("move should revert");
        }
        assert_eq!(game, start);
    }
}

#[test]
fn move_generation_is_deterministic() {
    for fen in WALK_FENS {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let first = PseudoLegalMoveGenerator
            .generate_moves(&game)
            .expect("generation should succeed");
        let second = PseudoLegalMoveGenerator
            .generate_moves(&game)
            .expect("generation should succeed");
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }
}

#[test]
fn transposed_positions_hash_equal_despite_en_passant_field() {
    let keys = ZobristKeys::shared();

    let mut a = GameState::new_game();
    for lan in ["e2e4", "g8f6", "g1f3"] {
        play(&mut a, lan);
    }
    let mut b = GameState::new_game();
    for lan in ["g1f3", "g8f6", "e2e4"] {
        play(&mut b, lan);
    }

    assert_eq!(a.squares, b.squares);
    assert_ne!(a.get_fen(), b.get_fen());
    assert_eq!(
        keys.hash(&a).expect("hashes"),
        keys.hash(&b).expect("hashes")
    );
}

#[test]
fn pruning_does_not_change_the_chosen_move() {
    for fen in SEARCH_FENS {
        for depth in 1..=3 {
            let game = GameState::from_fen(fen).expect("FEN should parse");

            let mut scratch = game.clone();
            let expected = exhaustive_choice(&mut scratch, &PieceSquareScorer, depth);
            let got = pruned_choice(
                &mut scratch,
                &PieceSquareScorer,
                depth,
                &mut TranspositionTable::disabled(),
            );
            assert_eq!(got, expected, "{fen} depth {depth}");

            let expected = exhaustive_choice(&mut scratch, &MaterialScorer, depth);
            let got = pruned_choice(
                &mut scratch,
                &MaterialScorer,
                depth,
                &mut TranspositionTable::disabled(),
            );
            assert_eq!(got, expected, "{fen} depth {depth} (material)");
            assert_eq!(scratch, game);
        }
    }
}

#[test]
fn cache_does_not_change_the_chosen_move() {
    for fen in SEARCH_FENS {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let mut shared_tt = TranspositionTable::with_capacity(1 << 16);

        let uncached = pruned_choice(
            &mut game,
            &PieceSquareScorer,
            3,
            &mut TranspositionTable::disabled(),
        );
        let first = pruned_choice(&mut game, &PieceSquareScorer, 3, &mut shared_tt);
        let hits_after_first = shared_tt.stats().hits;
        let second = pruned_choice(&mut game, &PieceSquareScorer, 3, &mut shared_tt);

        assert_eq!(first, uncached, "{fen}");
        assert_eq!(second, uncached, "{fen} (warm cache)");
        assert!(shared_tt.stats().hits > hits_after_first);
    }
}

#[test]
fn start_position_round_trips_through_fen() {
    let game = GameState::from_fen(STARTING_POSITION_FEN).expect("FEN should parse");
    assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
}

#[test]
fn start_position_has_twenty_moves() {
    let moves = PseudoLegalMoveGenerator
        .generate_moves(&GameState::new_game())
        .expect("generation should succeed");
    assert_eq!(moves.len(), 20);
    let pawn_moves = moves
        .iter()
        .filter(|mv| piece_kind(mv.moved_piece) == Some(PieceKind::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);
    assert_eq!(moves.iter().filter(|mv| mv.is_double_pawn_push).count(), 8);
}

#[test]
fn double_push_then_en_passant_capture() {
    let mut game =
        GameState::from_fen("4k3/8/8/8/5p2/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
    let start = game.clone();

    let pawn_moves: Vec<_> = PseudoLegalMoveGenerator
        .generate_moves(&game)
        .expect("generation should succeed")
        .into_iter()
        .filter(|mv| mv.start == 12)
        .collect();
    assert_eq!(pawn_moves.len(), 2);
    let double = pawn_moves
        .iter()
        .find(|mv| mv.target == 28)
        .expect("double push should be generated");
    assert!(double.is_double_pawn_push);
    assert!(pawn_moves.iter().any(|mv| mv.target == 20 && !mv.is_double_pawn_push));

    game.apply_move(*double).expect("move should apply");
    let en_passant = PseudoLegalMoveGenerator
        .generate_moves(&game)
        .expect("generation should succeed")
        .into_iter()
        .find(|mv| mv.start == 29 && mv.target == 20)
        .expect("en passant should be generated");
    assert!(en_passant.is_en_passant);
    assert!(en_passant.is_capture());

    game.apply_move(en_passant).expect("move should apply");
    assert_eq!(game.squares[28], NO_PIECE);
    assert_eq!(game.squares[20], encode_piece(Color::Dark, PieceKind::Pawn));
    assert_eq!(game.piece_squares(Color::Light).count(), 1);

    game.revert_last_move().expect("move should revert");
    game.revert_last_move().expect("move should revert");
    assert_eq!(game, start);
}

#[test]
fn side_with_no_moves_yields_no_move() {
    let mut game =
        GameState::from_fen("4k3/8/8/8/8/p7/P7/8 w - - 0 1").expect("FEN should parse");
    assert_eq!(choose_move(&mut game, 4).expect("search should run"), None);
}

#[test]
fn choose_move_keeps_the_position_intact() {
    let mut game = GameState::new_game();
    let before = game.clone();
    let mv = choose_move(&mut game, 2)
        .expect("search should run")
        .expect("start position has moves");
    assert_eq!(game, before);
    assert!(PseudoLegalMoveGenerator
        .generate_moves(&game)
        .expect("generation should succeed")
        .contains(&mv));
}
