use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::game_state::game_over::{evaluate, Outcome};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Count leaf nodes of the legal-move tree to the given depth.
///
/// Finished positions (win or stalemate) are leaves regardless of remaining
/// depth; the game stops there, so the tree does too.
pub fn perft(board: &BoardState, to_move: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if evaluate(board) != Outcome::Ongoing {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in generate_legal_moves(board, to_move) {
        let mut next = board.clone();
        apply_move(&mut next, mv);
        nodes += perft(&next, to_move.opposite(), depth - 1);
    }

    nodes
}
