use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{PawnMove, Position, Square};

/// Apply a move that has just been confirmed legal by `check_move`.
///
/// Contract: callers validate first; this function does not re-validate,
/// and a from-square without a pawn is a programming error that panics.
pub fn apply_move(board: &mut BoardState, mv: PawnMove) {
    let moved = board.square_at(mv.from);
    let color = moved
        .color()
        .expect("apply_move requires a pawn on the from-square");
    let dir = color.direction();

    // En-passant capture: the pawn being taken sits one row behind the
    // landing square, in the mover's direction of travel.
    if board.en_passant_target() == Some(mv.to) {
        let captured_row = (mv.to.row as i8 - dir) as u8;
        board.set_square(Position::new(mv.to.col, captured_row), Square::Empty);
    }

    board.set_square(mv.to, moved);
    board.set_square(mv.from, Square::Empty);

    // A two-square advance leaves its skipped square capturable for exactly
    // one reply; every other move closes the window.
    let marker = if mv.from.row.abs_diff(mv.to.row) == 2 {
        Some(Position::new(mv.to.col, (mv.from.row + mv.to.row) / 2))
    } else {
        None
    };
    board.set_en_passant_target(marker);
}
