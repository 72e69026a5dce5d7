//! CLI argument parsing with clap.

use clap::Parser;

/// Render a stylized apple to `apples/apple.png`.
#[derive(Parser, Debug)]
#[command(name = "apple-draw", version, about)]
pub struct Cli {
    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
