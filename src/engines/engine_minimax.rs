use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::minimax::{minimax_search_with_tt, SearchConfig};
use crate::search::transposition_table::TranspositionTable;
use crate::search::zobrist::ZobristKeys;

/// Minimax engine that keeps its transposition cache across moves.
pub struct MinimaxEngine<S: BoardScorer = PieceSquareScorer> {
    move_generator: PseudoLegalMoveGenerator,
    scorer: S,
    keys: ZobristKeys,
    config: SearchConfig,
    tt: TranspositionTable,
}

impl MinimaxEngine<PieceSquareScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, PieceSquareScorer)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            move_generator: PseudoLegalMoveGenerator,
            scorer,
            keys: ZobristKeys::default(),
            config,
            tt: TranspositionTable::with_capacity(config.tt_capacity),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }
}

impl Default for MinimaxEngine<PieceSquareScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Plum Minimax"
    }

    fn new_game(&mut self) {
        self.tt.clear();
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth),
            ..self.config
        };

        let mut scratch = game_state.clone();
        let result = minimax_search_with_tt(
            &mut scratch,
            &self.move_generator,
            &self.scorer,
            &self.keys,
            config,
            &mut self.tt,
        )?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {} qnodes {} tthits {} time {}",
            result.reached_depth,
            result.best_score,
            result.nodes,
            result.quiescence_nodes,
            result.tt_hits,
            result.elapsed_ms
        ));
        out.best_move = result.best_move;
        Ok(out)
    }
}
