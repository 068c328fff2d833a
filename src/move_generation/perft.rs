//! Pseudo-legal perft: leaf counting over the move generator with in-place
//! apply/revert. Moves that leave a king in check are counted too.

use std::ops::AddAssign;

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub promotions: u64,
    pub double_pawn_pushes: u64,
}

impl AddAssign for PerftCounts {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.en_passant += other.en_passant;
        self.promotions += other.promotions;
        self.double_pawn_pushes += other.double_pawn_pushes;
    }
}

/// Count leaves `depth` plies below `game_state`, tallying the last move's kind.
///
/// Depth zero counts the position itself. The position is restored on return.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    for mv in generator.generate_moves(game_state)? {
        if depth == 1 {
            counts.nodes += 1;
            counts.captures += u64::from(mv.is_capture());
            counts.en_passant += u64::from(mv.is_en_passant);
            counts.promotions += u64::from(mv.is_promotion());
            counts.double_pawn_pushes += u64::from(mv.is_double_pawn_push);
            continue;
        }

        game_state.apply_move(mv)?;
        let child = perft(generator, game_state, depth - 1);
        game_state.revert_last_move()?;
        counts += child?;
    }

    Ok(counts)
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> ChessResult<Vec<(String, u64)>> {
    let mut out = Vec::new();
    for mv in generator.generate_moves(game_state)? {
        game_state.apply_move(mv)?;
        let child = perft(generator, game_state, depth.saturating_sub(1));
        game_state.revert_last_move()?;
        out.push((mv.to_string(), child?.nodes));
    }
    Ok(out)
}
