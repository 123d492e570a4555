//! Interactive terminal front-end and turn loop.
//!
//! Prompts for player names, alternates the acting color, routes each
//! entered move through parse, validate, apply, and evaluate, and re-prompts
//! the same player on any rejection. The board, marker, and turn are
//! untouched by a rejected move. The core never sees a raw string; parsing
//! happens here at the boundary.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::game_state::game_over::{evaluate, Outcome};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::check_move;
use crate::utils::algebraic::parse_move;
use crate::utils::game_record::write_game_record;
use crate::utils::render_game_state::render_board;

pub const GAME_TITLE: &str = "Pawns-Only Chess";

/// Command-line options for the binary.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// Seat the random engine as the second player.
    pub vs_random: bool,
    /// Write a game record to this path when the session ends.
    pub record_path: Option<PathBuf>,
}

impl CliOptions {
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--vs-random" => options.vs_random = true,
                "--record" => {
                    let path = args
                        .next()
                        .ok_or("--record requires a file path".to_owned())?;
                    options.record_path = Some(PathBuf::from(path));
                }
                other => return Err(format!("unknown argument '{other}'")),
            }
        }

        Ok(options)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Finished,
}

/// One game between two named players, driven a line of input at a time.
pub struct GameSession {
    board: BoardState,
    white_name: String,
    black_name: String,
    white_to_move: bool,
    outcome: Outcome,
    move_history: Vec<String>,
}

impl GameSession {
    pub fn new(white_name: String, black_name: String) -> Self {
        Self {
            board: BoardState::new_game(),
            white_name,
            black_name,
            white_to_move: true,
            outcome: Outcome::Ongoing,
            move_history: Vec::new(),
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn white_name(&self) -> &str {
        &self.white_name
    }

    pub fn black_name(&self) -> &str {
        &self.black_name
    }

    pub fn is_white_turn(&self) -> bool {
        self.white_to_move
    }

    pub fn active_name(&self) -> &str {
        if self.white_to_move {
            &self.white_name
        } else {
            &self.black_name
        }
    }

    pub fn active_color(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    /// Handle one line of move input for the active player.
    ///
    /// A rejected move prints its diagnostic and leaves the session
    /// unchanged; the caller re-prompts the same player. An accepted move
    /// prints the board, then the outcome messages if the game just ended.
    pub fn handle_move_input(
        &mut self,
        line: &str,
        out: &mut impl Write,
    ) -> io::Result<SessionStatus> {
        let mover = self.active_color();
        let mv = match parse_move(line.trim())
            .and_then(|mv| check_move(&self.board, mv, mover).map(|()| mv))
        {
            Ok(mv) => mv,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(SessionStatus::InProgress);
            }
        };

        apply_move(&mut self.board, mv);
        self.move_history.push(mv.to_string());
        writeln!(out, "{}", render_board(&self.board))?;

        self.outcome = evaluate(&self.board);
        if let Some(message) = outcome_message(self.outcome) {
            writeln!(out, "{message}")?;
            writeln!(out, "Bye!")?;
            return Ok(SessionStatus::Finished);
        }

        self.white_to_move = !self.white_to_move;
        Ok(SessionStatus::InProgress)
    }
}

fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::WhiteWins => Some("White Wins!"),
        Outcome::BlackWins => Some("Black Wins!"),
        Outcome::Stalemate => Some("Stalemate!"),
        Outcome::Ongoing => None,
    }
}

/// Run a full game over stdin/stdout.
pub fn run_stdio_loop(options: CliOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    writeln!(stdout, "{GAME_TITLE}")?;

    writeln!(stdout, "First Player's name:")?;
    let Some(white_name) = read_name(&mut lines)? else {
        return Ok(());
    };

    let mut black_engine: Option<Box<dyn Engine>> = None;
    let black_name = if options.vs_random {
        let engine = RandomEngine::new();
        let name = engine.name().to_owned();
        black_engine = Some(Box::new(engine));
        name
    } else {
        writeln!(stdout, "Second Player's name:")?;
        match read_name(&mut lines)? {
            Some(name) => name,
            None => return Ok(()),
        }
    };

    let mut session = GameSession::new(white_name, black_name);
    writeln!(stdout, "{}", render_board(session.board()))?;

    loop {
        writeln!(stdout, "{}'s turn:", session.active_name())?;
        stdout.flush()?;

        let input = if let (false, Some(engine)) =
            (session.is_white_turn(), black_engine.as_deref_mut())
        {
            let chosen = engine
                .choose_move(session.board(), Color::Black)
                .map_err(io::Error::other)?;
            let Some(mv) = chosen else {
                writeln!(stdout, "Bye!")?;
                break;
            };
            let notation = mv.to_string();
            writeln!(stdout, "{notation}")?;
            notation
        } else {
            match lines.next() {
                Some(line) => line?,
                None => break,
            }
        };

        if input.trim().eq_ignore_ascii_case("exit") {
            writeln!(stdout, "Bye!")?;
            break;
        }

        if session.handle_move_input(&input, &mut stdout)? == SessionStatus::Finished {
            break;
        }
    }

    if let Some(path) = &options.record_path {
        let record = write_game_record(
            session.white_name(),
            session.black_name(),
            session.move_history(),
            session.outcome(),
        );
        std::fs::write(path, record)?;
    }

    Ok(())
}

fn read_name(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_owned())),
        None => Ok(None),
    }
}
