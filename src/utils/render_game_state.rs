//! Terminal board renderer.
//!
//! Builds the human-readable table view of the grid: separator rules
//! between ranks, row labels 8 down to 1, and a column-letter footer. A
//! pure read over the board, used after every applied move.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Position;

const SEP_LINE: &str = "  +---+---+---+---+---+---+---+---+";
const COL_INDEX_LINE: &str = "    a   b   c   d   e   f   g   h";

pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();

    out.push_str(SEP_LINE);
    out.push('\n');

    for row in 0..8u8 {
        out.push(char::from(b'8' - row));
        out.push_str(" | ");

        for col in 0..8u8 {
            out.push(board.square_at(Position::new(col, row)).glyph());
            out.push_str(if col < 7 { " | " } else { " |" });
        }

        out.push('\n');
        out.push_str(SEP_LINE);
        out.push('\n');
    }

    out.push_str(COL_INDEX_LINE);
    out
}
