//! squish - recursively minify JavaScript, CSS and HTML assets.

mod cli;
mod config;
mod ignore;
mod logger;
mod minify;
mod output;
mod paths;
mod process;
mod report;
mod walk;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    cli::run(&cli)
}
