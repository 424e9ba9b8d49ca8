//! Catalog command implementation.
//!
//! Runs the cataloguer over a directory and prints the per-file results.

use crate::core::cataloguer::{BatchReport, CatalogMode, CatalogOptions, Cataloguer, FileStatus};
use crate::models::config::Config;
use crate::services::mediainfo::MediaInfoCli;
use crate::Result;
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

/// Catalog (or reverse) every container in `directory`.
pub async fn catalog(directory: &Path, mode: CatalogMode, config: Config) -> Result<BatchReport> {
    match mode {
        CatalogMode::Forward { .. } => println!("{}", "[CATALOG] Cataloguing media...".bold().cyan()),
        CatalogMode::Reverse => println!("{}", "[REVERSE] Restoring media names...".bold().cyan()),
    }
    println!("  {} {}", "Directory:".bold(), directory.display());
    println!();

    let prober = MediaInfoCli::new(
        config.mediainfo.executable.clone(),
        Duration::from_secs(config.mediainfo.timeout_secs),
    );
    let cataloguer = Cataloguer::new(directory, CatalogOptions { mode, config }, prober)?;
    let report = cataloguer.run().await?;

    print_report(&report);
    Ok(report)
}

/// Print the per-file results and summary.
pub fn print_report(report: &BatchReport) {
    println!();
    for file in &report.files {
        let filename = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        match &file.status {
            FileStatus::Cataloged { new_name } | FileStatus::Reverted { new_name } => {
                println!("  {} {} -> {}", "[OK]".green(), filename, new_name);
            }
            FileStatus::Skipped => println!("  {} {}", "[SKIP]".yellow(), filename),
            FileStatus::Failed { reason } => {
                println!("  {} {} - {}", "[FAIL]".red(), filename, reason);
            }
        }
    }
    println!();

    println!("{}", "[Summary]".bold().green());
    println!("  {} {}", "Processed:".bold(), report.succeeded());
    println!("  {} {}", "Skipped:".bold(), report.skipped());
    println!("  {} {}", "Failed:".bold(), report.failed());

    if let Some(ref reason) = report.halted {
        println!();
        println!("{} {}", "[STOPPED]".bold().red(), reason);
    }
}
