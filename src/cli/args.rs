//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Haunted wasteland navigator: count the steps from AAA to ZZZ
#[derive(Parser, Debug)]
#[command(name = "wasteland")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Local config file (default: ./wasteland.toml if present)
    #[arg(short, long, global = true, env = "WASTELAND_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count steps for one input file
    Solve {
        /// Puzzle input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Start label (overrides config)
        #[arg(long)]
        start: Option<String>,
        /// Terminal label (overrides config)
        #[arg(long)]
        terminal: Option<String>,
        /// Give up after this many steps
        #[arg(long)]
        max_steps: Option<u64>,
    },

    /// Check all configured fixtures against their expected answers
    ///
    /// Only the two worked examples ship in data/. The full puzzle input
    /// (data/data.txt for the default "Part 1" fixture) is user-supplied;
    /// without it verify stops there with a missing-input error.
    Verify {
        /// Directory fixtures are resolved against (overrides config)
        #[arg(long, value_hint = ValueHint::DirPath)]
        data_dir: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show config file locations
    Path,
}
