//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for
//! diagnostics, harness testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, PawnMove};
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        color: Color,
    ) -> Result<Option<PawnMove>, String> {
        let legal_moves = generate_legal_moves(board, color);
        if legal_moves.is_empty() {
            return Ok(None);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        Ok(Some(*picked))
    }
}
