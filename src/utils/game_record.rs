//! Game transcript writer.
//!
//! Serializes a finished (or abandoned) game into a bracketed-header plus
//! movetext record, the interchange shape used by mainstream chess tooling,
//! with the date stamped from the local clock.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::game_over::Outcome;

/// Result token for the record's `Result` header and movetext terminator.
pub fn result_token(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::WhiteWins => "1-0",
        Outcome::BlackWins => "0-1",
        Outcome::Stalemate => "1/2-1/2",
        Outcome::Ongoing => "*",
    }
}

pub fn write_game_record(
    white_name: &str,
    black_name: &str,
    moves: &[String],
    outcome: Outcome,
) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Pawns-Only Chess".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), white_name.to_owned());
    headers.insert("Black".to_owned(), black_name.to_owned());
    headers.insert("Result".to_owned(), result_token(outcome).to_owned());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_header_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(moves.len() / 2 + 2);
    for (index, pair) in moves.chunks(2).enumerate() {
        movetext_parts.push(format!("{}.", index + 1));
        for notation in pair {
            movetext_parts.push(notation.clone());
        }
    }
    movetext_parts.push(result_token(outcome).to_owned());

    out.push_str(&movetext_parts.join(" "));
    out.push('\n');
    out
}

fn escape_header_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{result_token, write_game_record};
    use crate::game_state::game_over::Outcome;

    #[test]
    fn result_tokens_cover_every_outcome() {
        assert_eq!(result_token(Outcome::WhiteWins), "1-0");
        assert_eq!(result_token(Outcome::BlackWins), "0-1");
        assert_eq!(result_token(Outcome::Stalemate), "1/2-1/2");
        assert_eq!(result_token(Outcome::Ongoing), "*");
    }

    #[test]
    fn record_contains_headers_and_numbered_movetext() {
        let moves = vec![
            "e2e4".to_owned(),
            "d7d5".to_owned(),
            "e4d5".to_owned(),
        ];
        let record = write_game_record("Alice", "Bob", &moves, Outcome::WhiteWins);

        assert!(record.contains("[Event \"Pawns-Only Chess\"]"));
        assert!(record.contains("[White \"Alice\"]"));
        assert!(record.contains("[Black \"Bob\"]"));
        assert!(record.contains("[Result \"1-0\"]"));
        assert!(record.contains("[Date \""));
        assert!(record.ends_with("1. e2e4 d7d5 2. e4d5 1-0\n"));
    }

    #[test]
    fn header_values_are_escaped() {
        let record = write_game_record("Ann \"The Rook\"", "Bob", &[], Outcome::Ongoing);

        assert!(record.contains("[White \"Ann \\\"The Rook\\\"\"]"));
        assert!(record.ends_with("*\n"));
    }
}
