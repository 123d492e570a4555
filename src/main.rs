use std::process::ExitCode;

use pawns_only_chess::cli::game_loop::{run_stdio_loop, CliOptions};

// Use 'cargo run -- --vs-random' to play against the random engine, and
// '--record <path>' to save a transcript of the finished game.
fn main() -> ExitCode {
    let options = match CliOptions::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    match run_stdio_loop(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
