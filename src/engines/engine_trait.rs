//! Engine abstraction for non-interactive players.
//!
//! Lets the terminal front-end and the match harness drive any automated
//! player behind a single trait interface.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, PawnMove};

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick a move for `color`, or `Ok(None)` when no legal move exists.
    fn choose_move(
        &mut self,
        board: &BoardState,
        color: Color,
    ) -> Result<Option<PawnMove>, String>;
}
