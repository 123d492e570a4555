//! Move legality checks.
//!
//! `check_move` is a pure predicate over the board: it never mutates state,
//! and calling it repeatedly with the same inputs yields the same verdict
//! and reason. Rejections are user-input errors, reported and recovered at
//! the input boundary; they are never fatal.

use thiserror::Error;

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, PawnMove, Position, Square};

/// Why a move (or move string) was rejected.
///
/// Display strings are the exact diagnostics shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Input does not match `[a-h][1-8][a-h][1-8]`.
    #[error("Invalid Input")]
    MalformedNotation(String),

    /// The from-square is empty or holds the opponent's pawn.
    #[error("No {color} pawn at {from}")]
    NoPawnAtSource { color: Color, from: Position },

    /// Neither a legal forward advance nor a legal diagonal capture for the
    /// mover's direction.
    #[error("Invalid Input")]
    IllegalShape,
}

/// Decide whether `mv` is legal for `mover` on the current board.
///
/// Checks run in order and short-circuit on the first applicable failure:
/// source occupancy, then same-file advances, then diagonal captures
/// (including en passant against the current marker). The two move families
/// are mutually exclusive by column delta, so the first matching rule
/// decides.
pub fn check_move(board: &BoardState, mv: PawnMove, mover: Color) -> Result<(), MoveError> {
    if board.square_at(mv.from) != Square::pawn_of(mover) {
        return Err(MoveError::NoPawnAtSource {
            color: mover,
            from: mv.from,
        });
    }

    let dir = mover.direction();
    let single = mv.from.offset(0, dir);

    if mv.from.col == mv.to.col {
        if single == Some(mv.to) && board.square_at(mv.to) == Square::Empty {
            return Ok(());
        }

        if mv.from.row == mover.start_row() && mv.from.offset(0, 2 * dir) == Some(mv.to) {
            let Some(skipped) = single else {
                return Err(MoveError::IllegalShape);
            };
            if board.square_at(skipped) == Square::Empty
                && board.square_at(mv.to) == Square::Empty
            {
                return Ok(());
            }
        }

        return Err(MoveError::IllegalShape);
    }

    if mv.from.col.abs_diff(mv.to.col) == 1 && single.map(|pos| pos.row) == Some(mv.to.row) {
        let target = board.square_at(mv.to);
        if target == Square::pawn_of(mover.opposite()) {
            return Ok(());
        }
        // The marker names the one square a diagonal move may enter empty.
        if target == Square::Empty && board.en_passant_target() == Some(mv.to) {
            return Ok(());
        }
    }

    Err(MoveError::IllegalShape)
}

#[inline]
pub fn is_legal(board: &BoardState, mv: PawnMove, mover: Color) -> bool {
    check_move(board, mv, mover).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{check_move, is_legal, MoveError};
    use crate::game_state::board_state::BoardState;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::utils::algebraic::parse_move;

    fn mv(notation: &str) -> crate::game_state::chess_types::PawnMove {
        parse_move(notation).expect("test notation should parse")
    }

    #[test]
    fn single_and_double_advances_from_the_start_position() {
        let board = BoardState::new_game();

        assert!(is_legal(&board, mv("e2e3"), Color::White));
        assert!(is_legal(&board, mv("e2e4"), Color::White));
        assert!(is_legal(&board, mv("d7d6"), Color::Black));
        assert!(is_legal(&board, mv("d7d5"), Color::Black));
    }

    #[test]
    fn double_advance_requires_the_start_row_and_a_clear_path() {
        let board = BoardState::from_layout("8/8/8/8/4p3/8/4P3/8").expect("layout should parse");

        // Blocked two ahead.
        assert_eq!(
            check_move(&board, mv("e2e4"), Color::White),
            Err(MoveError::IllegalShape)
        );

        // Not on the start row anymore.
        let advanced =
            BoardState::from_layout("8/8/8/8/8/4P3/8/8").expect("layout should parse");
        assert_eq!(
            check_move(&advanced, mv("e3e5"), Color::White),
            Err(MoveError::IllegalShape)
        );

        // Blocked on the skipped square.
        let blocked =
            BoardState::from_layout("8/8/8/8/8/4p3/4P3/8").expect("layout should parse");
        assert_eq!(
            check_move(&blocked, mv("e2e4"), Color::White),
            Err(MoveError::IllegalShape)
        );
    }

    #[test]
    fn rejects_moves_without_a_matching_pawn_at_the_source() {
        let board = BoardState::new_game();

        let from_empty = check_move(&board, mv("e4e5"), Color::White);
        assert!(matches!(from_empty, Err(MoveError::NoPawnAtSource { .. })));

        let opponent_pawn = check_move(&board, mv("d7d6"), Color::White);
        assert!(matches!(opponent_pawn, Err(MoveError::NoPawnAtSource { .. })));
        assert_eq!(
            opponent_pawn.expect_err("should be rejected").to_string(),
            "No white pawn at d7"
        );
    }

    #[test]
    fn rejects_backward_and_sideways_movement_regardless_of_occupancy() {
        let board = BoardState::from_layout("8/8/8/8/4P3/8/8/8").expect("layout should parse");

        assert_eq!(
            check_move(&board, mv("e4e3"), Color::White),
            Err(MoveError::IllegalShape)
        );
        assert_eq!(
            check_move(&board, mv("e4d4"), Color::White),
            Err(MoveError::IllegalShape)
        );
        assert_eq!(
            check_move(&board, mv("e4g5"), Color::White),
            Err(MoveError::IllegalShape)
        );
    }

    #[test]
    fn diagonal_moves_require_an_enemy_pawn_or_the_marker() {
        let board = BoardState::from_layout("8/8/8/8/3p4/4P3/8/8").expect("layout should parse");

        assert!(is_legal(&board, mv("e3d4"), Color::White));
        assert_eq!(
            check_move(&board, mv("e3f4"), Color::White),
            Err(MoveError::IllegalShape)
        );
    }

    #[test]
    fn en_passant_window_opens_and_closes() {
        // White pawn on e5, Black pawns on d7 and h7.
        let mut board =
            BoardState::from_layout("8/3p3p/8/4P3/8/8/8/8").expect("layout should parse");

        apply_move(&mut board, mv("d7d5"));
        assert!(is_legal(&board, mv("e5d6"), Color::White));

        // An unrelated move clears the marker; the same capture is illegal.
        let mut stale = board.clone();
        apply_move(&mut stale, mv("h7h6"));
        assert_eq!(
            check_move(&stale, mv("e5d6"), Color::White),
            Err(MoveError::IllegalShape)
        );
    }

    #[test]
    fn rejection_is_idempotent() {
        let board = BoardState::new_game();
        let first = check_move(&board, mv("e2d3"), Color::White);
        let second = check_move(&board, mv("e2d3"), Color::White);

        assert_eq!(first, second);
        assert_eq!(
            first.expect_err("should be rejected").to_string(),
            second.expect_err("should be rejected").to_string()
        );
    }
}
