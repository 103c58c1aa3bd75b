// src/bin/cli.rs
use t20_insights::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
