use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Close unterminated zone polygons in a board save file
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board file to fix in place
    #[arg(value_name = "PCBFILE")]
    pcbfile: PathBuf,

    /// Print the fixed text instead of rewriting the file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    teardrops::init_logging();
    let cli = Cli::parse();

    let content = std::fs::read_to_string(&cli.pcbfile)
        .with_context(|| format!("Failed to read board file: {:?}", cli.pcbfile))?;

    let fix = teardrops::fix_zone_polygons(&content);

    if cli.dry_run {
        print!("{}", fix.text);
    } else if fix.text != content {
        std::fs::write(&cli.pcbfile, &fix.text)
            .with_context(|| format!("Failed to write board file: {:?}", cli.pcbfile))?;
    }

    tracing::info!("{} zone polygons closed in {}", fix.inserted, cli.pcbfile.display());
    Ok(())
}
