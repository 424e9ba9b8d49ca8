//! Scene Cataloguer CLI
//!
//! Catalogs scene-style media containers into MediaInfo sidecars and restores their names.

use clap::Parser;
use scene_cataloguer::cli::{args::Cli, commands::catalog};
use scene_cataloguer::models::config::{self, Config};
use scene_cataloguer::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config(cli.config.as_deref());

    // Run preflight checks unless skipped
    if !cli.skip_preflight {
        run_preflight_checks(&config)?;
    }

    let report = catalog::catalog(&cli.directory, cli.mode(), config).await?;
    if let Some(reason) = report.halted {
        anyhow::bail!("Batch stopped: {}", reason);
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("scene_cataloguer=debug")
    } else {
        EnvFilter::new("scene_cataloguer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config);
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        return Err(scene_cataloguer::Error::MediaInfoNotFound.into());
    }

    Ok(())
}
