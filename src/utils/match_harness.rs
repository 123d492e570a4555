//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without terminal
//! I/O, enforcing the same validate-apply-evaluate sequence as interactive
//! play. An engine returning an illegal move is a harness error, not a
//! forfeit.

use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::game_state::game_over::{evaluate, Outcome};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::check_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    Stalemate,
    /// The ply cap was reached before the game finished.
    Unfinished,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub final_board: BoardState,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

pub fn play_match(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    config: MatchConfig,
) -> Result<MatchReport, String> {
    let mut board = BoardState::new_game();
    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut mover = Color::White;

    for _ in 0..config.max_plies {
        if let Some(settled) = settled_outcome(evaluate(&board)) {
            return Ok(MatchReport {
                outcome: settled,
                final_board: board,
                played_moves,
                white_move_count,
                black_move_count,
            });
        }

        let engine: &mut dyn Engine = if mover == Color::White {
            engine_white.as_mut()
        } else {
            engine_black.as_mut()
        };

        let chosen = engine
            .choose_move(&board, mover)?
            .ok_or_else(|| format!("{} returned no move in an ongoing game", engine.name()))?;
        check_move(&board, chosen, mover)
            .map_err(|err| format!("{} returned illegal move {chosen}: {err}", engine.name()))?;

        played_moves.push(chosen.to_string());
        apply_move(&mut board, chosen);

        match mover {
            Color::White => white_move_count += 1,
            Color::Black => black_move_count += 1,
        }
        mover = mover.opposite();
    }

    Ok(MatchReport {
        outcome: MatchOutcome::Unfinished,
        final_board: board,
        played_moves,
        white_move_count,
        black_move_count,
    })
}

fn settled_outcome(outcome: Outcome) -> Option<MatchOutcome> {
    match outcome {
        Outcome::WhiteWins => Some(MatchOutcome::WhiteWin),
        Outcome::BlackWins => Some(MatchOutcome::BlackWin),
        Outcome::Stalemate => Some(MatchOutcome::Stalemate),
        Outcome::Ongoing => None,
    }
}
