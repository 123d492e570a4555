//! Move-notation conversions.
//!
//! Converts four-character coordinate notation (for example `e2e4`) into a
//! typed `PawnMove` at the input boundary. Anything that does not match
//! `[a-h][1-8][a-h][1-8]` is rejected here, before the validator is ever
//! reached; raw strings never travel past this module.

use crate::game_state::chess_types::{PawnMove, Position};
use crate::move_generation::legal_move_checks::MoveError;

/// Parse move notation into a `(from, to)` pair.
///
/// Files map 'a'..'h' to columns 0..7; ranks map '1'..'8' to rows via
/// `row = 8 - rank`.
#[inline]
pub fn parse_move(notation: &str) -> Result<PawnMove, MoveError> {
    let bytes = notation.as_bytes();
    if bytes.len() != 4 {
        return Err(MoveError::MalformedNotation(notation.to_owned()));
    }

    let from = parse_square(bytes[0], bytes[1]);
    let to = parse_square(bytes[2], bytes[3]);

    match (from, to) {
        (Some(from), Some(to)) => Ok(PawnMove { from, to }),
        _ => Err(MoveError::MalformedNotation(notation.to_owned())),
    }
}

#[inline]
fn parse_square(file: u8, rank: u8) -> Option<Position> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Position::new(file - b'a', b'8' - rank))
}

#[cfg(test)]
mod tests {
    use super::parse_move;
    use crate::game_state::chess_types::Position;
    use crate::move_generation::legal_move_checks::MoveError;

    #[test]
    fn parses_notation_into_board_coordinates() {
        let mv = parse_move("e2e4").expect("e2e4 should parse");
        assert_eq!(mv.from, Position::new(4, 6));
        assert_eq!(mv.to, Position::new(4, 4));
        assert_eq!(mv.to_string(), "e2e4");

        let corners = parse_move("a1h8").expect("a1h8 should parse");
        assert_eq!(corners.from, Position::new(0, 7));
        assert_eq!(corners.to, Position::new(7, 0));
    }

    #[test]
    fn rejects_malformed_notation() {
        for input in ["", "e2", "e2e", "e2e45", "i2e4", "e0e4", "e2x4", "exit"] {
            let err = parse_move(input).expect_err("should be rejected");
            assert!(matches!(err, MoveError::MalformedNotation(_)));
            assert_eq!(err.to_string(), "Invalid Input");
        }
    }
}
