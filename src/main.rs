use anyhow::Context;
use clap::Parser;

use icongen::{generate_icons, GeneratorConfig};

/// Generate the web app icon set and favicon from public/icon-base.svg.
///
/// Renders every manifest size plus the favicon into public/ and writes
/// the matching manifest icon entries. Takes no arguments: sizes, names
/// and directories are fixed.
#[derive(Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _cli = Cli::parse();

    let config = GeneratorConfig::default();
    let summary = generate_icons(&config).context("icon generation aborted")?;

    // Partial failure is tolerated per item but still reflected in the
    // exit status.
    if !summary.complete() {
        std::process::exit(1);
    }
    Ok(())
}
