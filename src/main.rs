//! CLI entry point for splitting images into visual cryptography shares

use clap::Parser;
use visualshare::io::cli::Cli;

fn main() -> visualshare::Result<()> {
    Cli::parse().run()
}
