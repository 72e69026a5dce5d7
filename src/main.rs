//! apple-draw - render a stylized apple to `apples/apple.png`.

mod apple;
mod canvas;
mod cli;
mod error;
mod output;

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::error::DrawError;
use crate::output::{ensure_output_dir, output_path, save_png, OUTPUT_DIR};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DrawError> {
    let dir = Path::new(OUTPUT_DIR);
    ensure_output_dir(dir)?;
    if cli.verbose {
        eprintln!("Output directory: {}", dir.display());
    }

    let canvas = apple::render(cli.verbose);

    let path = output_path(dir);
    save_png(&canvas, &path)?;
    println!("Apple image saved to {}", path.display());

    Ok(())
}
