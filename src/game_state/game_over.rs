//! Terminal-state detection.
//!
//! Called once after every applied move. Evaluation order matters when
//! conditions coincide: White's win checks run first, then Black's, then
//! the stalemate scan, so a pawn reaching the far rank wins even when it
//! was also the opponent's last capture target.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Position, Square};

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    WhiteWins,
    BlackWins,
    Stalemate,
}

impl Outcome {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// First match wins: goal-row arrival or opponent extinction for White,
/// the same for Black, then stalemate when either color is out of moves.
///
/// The either-color stalemate framing reproduces the variant's rule as
/// shipped; see DESIGN.md for the ambiguity note.
pub fn evaluate(board: &BoardState) -> Outcome {
    if reached_goal_row(board, Color::White) || board.count_pawns(Color::Black) == 0 {
        return Outcome::WhiteWins;
    }
    if reached_goal_row(board, Color::Black) || board.count_pawns(Color::White) == 0 {
        return Outcome::BlackWins;
    }
    if !has_any_move(board, Color::White) || !has_any_move(board, Color::Black) {
        return Outcome::Stalemate;
    }
    Outcome::Ongoing
}

fn reached_goal_row(board: &BoardState, color: Color) -> bool {
    let row = color.goal_row();
    (0..8).any(|col| board.square_at(Position::new(col, row)) == Square::pawn_of(color))
}

/// Whether any pawn of `color` has a forward step onto an empty square or a
/// diagonal capture of an adjacent enemy pawn. Off-grid squares count as
/// unavailable. En passant is deliberately not consulted here.
pub fn has_any_move(board: &BoardState, color: Color) -> bool {
    let dir = color.direction();
    let enemy = Square::pawn_of(color.opposite());

    for row in 0..8u8 {
        for col in 0..8u8 {
            let pos = Position::new(col, row);
            if board.square_at(pos) != Square::pawn_of(color) {
                continue;
            }

            if let Some(forward) = pos.offset(0, dir) {
                if board.square_at(forward) == Square::Empty {
                    return true;
                }
            }
            for d_col in [-1i8, 1] {
                if let Some(diagonal) = pos.offset(d_col, dir) {
                    if board.square_at(diagonal) == enemy {
                        return true;
                    }
                }
            }
        }
    }

    false
}
