//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Interior nodes score positions from white's point of view: white maximizes,
//! black minimizes. At the horizon the search drops into a ply-limited capture
//! search written in negamax form, so it works from the side to move's point
//! of view and is entered with the window flipped for black.
//!
//! Every node probes and fills the transposition cache. Depth-one nodes skip
//! quiet moves whose static score plus a margin cannot reach the window.

use std::time::Instant;

use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use crate::moves::chess_move::ChessMove;
use crate::moves::move_ordering::order_by_mvv_lva;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::transposition_table::{Bound, TTEntry, TranspositionTable};
use crate::search::zobrist::ZobristKeys;

/// Window bound wider than any reachable evaluation.
pub const INF: i32 = 1_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies searched before quiescence. Zero is treated as one.
    pub max_depth: u8,
    /// Capture plies explored past the horizon.
    pub quiescence_max_ply: u8,
    pub futility_margin: i32,
    pub futility_pruning: bool,
    /// Entry budget for caches the search creates itself.
    pub tt_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            quiescence_max_ply: 4,
            futility_margin: 100,
            futility_pruning: true,
            tt_capacity: 1_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    /// White-positive score of the chosen line.
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub quiescence_nodes: u64,
    /// Nodes answered straight from the cache.
    pub tt_hits: u64,
    pub elapsed_ms: u64,
}

/// Outcome of exploring one child at a full-width node.
enum ChildScore {
    Searched(i32),
    /// Futility estimate for a skipped quiet move.
    Pruned(i32),
}

struct Searcher<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    keys: &'a ZobristKeys,
    config: SearchConfig,
    tt: &'a mut TranspositionTable,
    nodes: u64,
    quiescence_nodes: u64,
    tt_hits: u64,
}

impl<'a, G: MoveGenerator, S: BoardScorer> Searcher<'a, G, S> {
    fn new(
        generator: &'a G,
        scorer: &'a S,
        keys: &'a ZobristKeys,
        config: SearchConfig,
        tt: &'a mut TranspositionTable,
    ) -> Self {
        Self {
            generator,
            scorer,
            keys,
            config,
            tt,
            nodes: 0,
            quiescence_nodes: 0,
            tt_hits: 0,
        }
    }

    fn root(&mut self, game_state: &mut GameState, depth: u8) -> ChessResult<(Option<ChessMove>, i32)> {
        self.nodes += 1;
        let moves = self.generator.generate_moves(game_state)?;
        if moves.is_empty() {
            return Ok((None, self.scorer.score(game_state)?));
        }

        let maximizing = game_state.side_to_move == Color::Light;
        let mut alpha = -INF;
        let mut beta = INF;
        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for mv in moves {
            game_state.apply_move(mv)?;
            let outcome = self.minimax(game_state, depth - 1, alpha, beta, !maximizing);
            game_state.revert_last_move()?;
            let score = outcome?;

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if best_move.is_none() || improves {
                best_score = score;
                best_move = Some(mv);
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        Ok((best_move, best_score))
    }

    fn minimax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> ChessResult<i32> {
        self.nodes += 1;

        let key = self.keys.hash(game_state)?;
        if let Some(entry) = self.tt.lookup(key) {
            if entry.depth >= depth {
                let usable = match entry.bound {
                    Bound::Exact => true,
                    Bound::Upper => entry.score <= alpha,
                    Bound::Lower => entry.score >= beta,
                };
                if usable {
                    self.tt_hits += 1;
                    return Ok(entry.score);
                }
            }
        }

        if depth == 0 {
            return if maximizing {
                self.quiescence(game_state, alpha, beta, 0)
            } else {
                Ok(-self.quiescence(game_state, -beta, -alpha, 0)?)
            };
        }

        let mut moves = self.generator.generate_moves(game_state)?;
        if moves.is_empty() {
            return self.scorer.score(game_state);
        }
        if maximizing {
            order_by_mvv_lva(&mut moves);
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in moves {
            game_state.apply_move(mv)?;
            let outcome = self.explore_child(game_state, depth, alpha, beta, maximizing);
            game_state.revert_last_move()?;

            match outcome? {
                ChildScore::Pruned(estimate) => {
                    best = if maximizing {
                        best.max(estimate)
                    } else {
                        best.min(estimate)
                    };
                }
                ChildScore::Searched(score) if maximizing => {
                    if score > best {
                        best = score;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(score);
                }
                ChildScore::Searched(score) => {
                    if score < best {
                        best = score;
                        best_move = Some(mv);
                    }
                    beta = beta.min(score);
                }
            }

            if beta <= alpha {
                break;
            }
        }

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta_orig {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(
            key,
            TTEntry {
                depth,
                score: best,
                bound,
                best_move,
            },
        );

        Ok(best)
    }

    /// Score the position reached by the move just applied.
    fn explore_child(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> ChessResult<ChildScore> {
        let quiet = game_state.last_move().is_some_and(|record| !record.is_capture());
        if depth == 1 && self.config.futility_pruning && quiet {
            let eval = self.scorer.score(game_state)?;
            let margin = self.config.futility_margin;
            if maximizing && eval + margin < alpha {
                return Ok(ChildScore::Pruned(eval + margin));
            }
            if !maximizing && eval - margin > beta {
                return Ok(ChildScore::Pruned(eval - margin));
            }
        }

        let score = self.minimax(game_state, depth - 1, alpha, beta, !maximizing)?;
        Ok(ChildScore::Searched(score))
    }

    /// Fail-hard capture search from the side to move's point of view.
    fn quiescence(
        &mut self,
        game_state: &mut GameState,
        mut alpha: i32,
        beta: i32,
        ply: u8,
    ) -> ChessResult<i32> {
        self.quiescence_nodes += 1;

        let stand_pat = self.scorer.score(game_state)? * game_state.side_to_move.perspective();
        if stand_pat >= beta {
            return Ok(beta);
        }
        alpha = alpha.max(stand_pat);
        if ply >= self.config.quiescence_max_ply {
            return Ok(alpha);
        }

        for mv in self.generator.generate_capture_moves(game_state)? {
            game_state.apply_move(mv)?;
            let outcome = self.quiescence(game_state, -beta, -alpha, ply + 1);
            game_state.revert_last_move()?;
            let score = -outcome?;

            if score >= beta {
                return Ok(beta);
            }
            alpha = alpha.max(score);
        }

        Ok(alpha)
    }
}

/// Search `game_state` to `config.max_depth` using a caller-owned cache.
///
/// The position is restored before returning, including on error. The cache
/// keeps its entries so later searches can reuse them.
pub fn minimax_search_with_tt<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    keys: &ZobristKeys,
    config: SearchConfig,
    tt: &mut TranspositionTable,
) -> ChessResult<SearchResult> {
    let started = Instant::now();
    let depth = config.max_depth.max(1);

    let mut searcher = Searcher::new(generator, scorer, keys, config, tt);
    let (best_move, best_score) = searcher.root(game_state, depth)?;

    let result = SearchResult {
        best_move,
        best_score,
        reached_depth: depth,
        nodes: searcher.nodes,
        quiescence_nodes: searcher.quiescence_nodes,
        tt_hits: searcher.tt_hits,
        elapsed_ms: started.elapsed().as_millis() as u64,
    };

    debug!(
        depth = result.reached_depth,
        nodes = result.nodes,
        qnodes = result.quiescence_nodes,
        tt_hits = result.tt_hits,
        score = result.best_score,
        elapsed_ms = result.elapsed_ms,
        best_move = %result.best_move.map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
        "minimax search finished"
    );

    Ok(result)
}

/// Search with a fresh cache of `config.tt_capacity` entries and the shared keys.
pub fn minimax_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    let mut tt = TranspositionTable::with_capacity(config.tt_capacity);
    minimax_search_with_tt(
        game_state,
        generator,
        scorer,
        ZobristKeys::shared(),
        config,
        &mut tt,
    )
}

/// Best move for the side to move, or `None` when it has no moves.
pub fn choose_move(game_state: &mut GameState, max_depth: u8) -> ChessResult<Option<ChessMove>> {
    let config = SearchConfig {
        max_depth,
        ..SearchConfig::default()
    };
    let result = minimax_search(game_state, &PseudoLegalMoveGenerator, &PieceSquareScorer, config)?;
    Ok(result.best_move)
}

#[cfg(test)]
mod tests {
    use super::{choose_move, minimax_search, SearchConfig, Searcher, INF};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
    use crate::moves::chess_move::ChessMove;
    use crate::search::board_scoring::MaterialScorer;
    use crate::search::transposition_table::TranspositionTable;
    use crate::search::zobrist::ZobristKeys;

    fn config(max_depth: u8) -> SearchConfig {
        SearchConfig {
            max_depth,
            tt_capacity: 4096,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn side_without_moves_gets_no_move() {
        let mut lone =
            GameState::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(choose_move(&mut lone, 3).expect("search should run"), None);

        let mut blocked =
            GameState::from_fen("4k3/8/8/8/8/p7/P7/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(choose_move(&mut blocked, 2).expect("search should run"), None);
    }

    #[test]
    fn search_prefers_winning_capture_in_simple_position() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1").expect("FEN should parse");
        let result = minimax_search(&mut game, &PseudoLegalMoveGenerator, &MaterialScorer, config(1))
            .expect("search should run");

        let best = result.best_move.expect("best move should exist");
        assert_eq!(best.target, 12);
        assert_eq!(result.best_score, 900);
    }

    #[test]
    fn quiescence_sees_the_recapture() {
        // Qxd4 is answered by cxd4.
        let mut game =
            GameState::from_fen("4k3/8/8/2p5/3p4/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let result = minimax_search(&mut game, &PseudoLegalMoveGenerator, &MaterialScorer, config(1))
            .expect("search should run");

        let best = result.best_move.expect("best move should exist");
        assert_ne!(best, ChessMove::new(3, 27).expect("valid squares"));
        assert!(result.quiescence_nodes > 0);
    }

    #[test]
    fn dark_side_minimizes() {
        let mut game =
            GameState::from_fen("4k3/8/q7/8/8/8/4Q3/7K b - - 0 1").expect("FEN should parse");
        let result = minimax_search(&mut game, &PseudoLegalMoveGenerator, &MaterialScorer, config(1))
            .expect("search should run");

        let best = result.best_move.expect("best move should exist");
        assert_eq!(best, ChessMove::new(40, 12).expect("valid squares"));
        assert_eq!(result.best_score, -900);
    }

    #[test]
    fn zero_depth_is_clamped_and_position_restored() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let result = minimax_search(&mut game, &PseudoLegalMoveGenerator, &MaterialScorer, config(0))
            .expect("search should run");

        assert_eq!(result.reached_depth, 1);
        assert!(result.best_move.is_some());
        assert_eq!(game, before);
    }

    #[test]
    fn futility_skips_hopeless_quiet_moves_at_depth_one() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1").expect("FEN should parse");
        let keys = ZobristKeys::from_seed(5);

        let run = |futility_pruning: bool| {
            let mut game = game.clone();
            let mut tt = TranspositionTable::disabled();
            let cfg = SearchConfig {
                futility_pruning,
                ..config(1)
            };
            let mut searcher =
                Searcher::new(&PseudoLegalMoveGenerator, &MaterialScorer, &keys, cfg, &mut tt);
            let score = searcher
                .minimax(&mut game, 1, -INF, INF, true)
                .expect("search should run");
            (score, searcher.nodes)
        };

        let (pruned_score, pruned_nodes) = run(true);
        let (full_score, full_nodes) = run(false);
        assert_eq!(pruned_score, 900);
        assert_eq!(full_score, 900);
        assert!(pruned_nodes < full_nodes);
    }

    #[test]
    fn cache_answers_repeat_searches() {
        let keys = ZobristKeys::from_seed(9);
        let mut tt = TranspositionTable::with_capacity(1 << 14);
        let mut game =
            GameState::from_fen("4k3/8/8/3r4/8/8/3R4/3QK3 w - - 0 1").expect("FEN should parse");
        let cfg = SearchConfig {
            futility_pruning: false,
            ..config(3)
        };

        let first = super::minimax_search_with_tt(
            &mut game,
            &PseudoLegalMoveGenerator,
            &MaterialScorer,
            &keys,
            cfg,
            &mut tt,
        )
        .expect("search should run");
        let second = super::minimax_search_with_tt(
            &mut game,
            &PseudoLegalMoveGenerator,
            &MaterialScorer,
            &keys,
            cfg,
            &mut tt,
        )
        .expect("search should run");

        assert_eq!(first.best_move, second.best_move);
        assert!(second.tt_hits > 0);
        assert!(second.nodes < first.nodes);
    }
}
