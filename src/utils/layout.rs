//! Board-layout parsing and generation.
//!
//! Layout strings use the piece-placement convention of FEN restricted to
//! pawns: eight '/'-separated ranks listed from rank 8 down to rank 1, with
//! `P` for a White pawn, `p` for a Black pawn, and digit runs for empty
//! squares. Used by tests, tools, and benches to build positions directly.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Position, Square};

pub fn parse_layout(layout: &str) -> Result<BoardState, String> {
    let ranks: Vec<&str> = layout.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = BoardState::empty();

    // Ranks are listed 8 down to 1, which matches rows 0..8 directly.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err("Board rank has too many files".to_owned());
                }
                continue;
            }

            let square = match ch {
                'P' => Square::WhitePawn,
                'p' => Square::BlackPawn,
                _ => return Err(format!("Invalid piece character '{ch}' in board layout")),
            };

            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            board.set_square(Position::new(col, row as u8), square);
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

pub fn generate_layout(board: &BoardState) -> String {
    let mut ranks = Vec::<String>::with_capacity(8);

    for row in 0..8u8 {
        let mut rank = String::new();
        let mut empty_run = 0u8;

        for col in 0..8u8 {
            let glyph = match board.square_at(Position::new(col, row)) {
                Square::Empty => {
                    empty_run += 1;
                    continue;
                }
                Square::WhitePawn => 'P',
                Square::BlackPawn => 'p',
            };

            if empty_run > 0 {
                rank.push(char::from(b'0' + empty_run));
                empty_run = 0;
            }
            rank.push(glyph);
        }

        if empty_run > 0 {
            rank.push(char::from(b'0' + empty_run));
        }

        ranks.push(rank);
    }

    ranks.join("/")
}
