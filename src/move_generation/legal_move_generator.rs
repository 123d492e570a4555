use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, PawnMove, Position, Square};

/// Enumerate every legal move for `color`, including en-passant captures
/// against the current marker. Agrees with `check_move` by construction;
/// the tests cross-check the two.
pub fn generate_legal_moves(board: &BoardState, color: Color) -> Vec<PawnMove> {
    let mut out = Vec::new();
    let dir = color.direction();
    let enemy = Square::pawn_of(color.opposite());

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Position::new(col, row);
            if board.square_at(from) != Square::pawn_of(color) {
                continue;
            }

            if let Some(to) = from.offset(0, dir) {
                if board.square_at(to) == Square::Empty {
                    out.push(PawnMove { from, to });

                    if from.row == color.start_row() {
                        if let Some(two) = from.offset(0, 2 * dir) {
                            if board.square_at(two) == Square::Empty {
                                out.push(PawnMove { from, to: two });
                            }
                        }
                    }
                }
            }

            // captures and en-passant
            for d_col in [-1i8, 1] {
                let Some(to) = from.offset(d_col, dir) else {
                    continue;
                };
                let target = board.square_at(to);
                if target == enemy
                    || (target == Square::Empty && board.en_passant_target() == Some(to))
                {
                    out.push(PawnMove { from, to });
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_legal_moves;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::chess_types::{Color, PawnMove};
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_checks::check_move;
    use crate::utils::algebraic::parse_move;

    fn mv(notation: &str) -> PawnMove {
        parse_move(notation).expect("test notation should parse")
    }

    #[test]
    fn start_position_has_sixteen_moves_per_side() {
        let board = BoardState::new_game();

        assert_eq!(generate_legal_moves(&board, Color::White).len(), 16);
        assert_eq!(generate_legal_moves(&board, Color::Black).len(), 16);
    }

    #[test]
    fn every_generated_move_passes_validation() {
        let mut board = BoardState::new_game();
        apply_move(&mut board, mv("e2e4"));
        apply_move(&mut board, mv("d7d5"));

        for color in [Color::White, Color::Black] {
            for generated in generate_legal_moves(&board, color) {
                check_move(&board, generated, color)
                    .expect("generated move should validate");
            }
        }
    }

    #[test]
    fn en_passant_capture_is_generated_while_the_marker_stands() {
        let mut board =
            BoardState::from_layout("8/3p4/8/4P3/8/8/8/8").expect("layout should parse");
        apply_move(&mut board, mv("d7d5"));

        let moves = generate_legal_moves(&board, Color::White);
        assert!(moves.contains(&mv("e5d6")));

        // Once the window closes only the plain advance remains.
        apply_move(&mut board, mv("e5e6"));
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(generate_legal_moves(&board, Color::White), vec![mv("e6e7")]);
    }

    #[test]
    fn blocked_pawns_generate_nothing() {
        let board =
            BoardState::from_layout("8/8/8/4p3/4P3/8/8/8").expect("layout should parse");

        assert!(generate_legal_moves(&board, Color::White).is_empty());
        assert!(generate_legal_moves(&board, Color::Black).is_empty());
    }
}
