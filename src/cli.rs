//! Command-line interface for rewind_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with time travel through the move history
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML stylesheet (colors and square size)
    #[arg(short, long)]
    pub style: Option<PathBuf>,

    /// File that receives log output (the terminal is busy with the UI)
    #[arg(long, default_value = "rewind_tictactoe.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rewind_tictactoe"]);
        assert_eq!(cli.style, None);
        assert_eq!(cli.log_file, PathBuf::from("rewind_tictactoe.log"));
    }

    #[test]
    fn test_style_flag() {
        let cli = Cli::parse_from(["rewind_tictactoe", "--style", "dark.toml"]);
        assert_eq!(cli.style, Some(PathBuf::from("dark.toml")));
    }
}
