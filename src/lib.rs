//! Crate root module declarations for the pawns-only chess game.
//!
//! This file exposes all top-level subsystems (game state, move validation
//! and application, engines, the terminal front-end, and utility helpers) so
//! binaries, tests, and benches can import stable module paths.

pub mod game_state {
    pub mod board_state;
    pub mod chess_types;
    pub mod game_over;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod cli {
    pub mod game_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_record;
    pub mod layout;
    pub mod match_harness;
    pub mod render_game_state;
}
