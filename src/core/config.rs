//! Command-line configuration.
//!
//! Replaces the usual pair of hard-coded "is this side human" booleans with
//! start-up options, so human-vs-human, human-vs-engine, and engine-vs-engine
//! sessions are all reachable without recompiling.

use clap::{Parser, ValueEnum};

/// Who drives a side's moves.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    /// Moves are built from pointer clicks.
    Human,
    /// Moves come from the background search worker.
    Engine,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "clickchess", about = "Click-to-move chess with an optional engine opponent")]
pub struct Cli {
    /// Who controls the white pieces.
    #[arg(long, value_enum, default_value = "human")]
    pub white: Controller,

    /// Who controls the black pieces.
    #[arg(long, value_enum, default_value = "engine")]
    pub black: Controller,

    /// Engine search depth in plies.
    #[arg(long, default_value_t = chess_core::search::DEFAULT_DEPTH)]
    pub depth: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_setup() {
        let cli = Cli::parse_from(["clickchess"]);
        assert_eq!(cli.white, Controller::Human);
        assert_eq!(cli.black, Controller::Engine);
        assert_eq!(cli.depth, chess_core::search::DEFAULT_DEPTH);
    }

    #[test]
    fn sides_are_configurable() {
        let cli = Cli::parse_from(["clickchess", "--white", "engine", "--black", "human", "--depth", "2"]);
        assert_eq!(cli.white, Controller::Engine);
        assert_eq!(cli.black, Controller::Human);
        assert_eq!(cli.depth, 2);
    }
}
