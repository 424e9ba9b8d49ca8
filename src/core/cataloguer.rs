//! Catalog workflow.
//!
//! Forward mode: for every container without a sidecar, decode the encoded
//! name, probe the file, write the `.mnfo` sidecar, rename the container to
//! its base name and optionally write the `.md5` manifest.
//!
//! Reverse mode: for every container with a sidecar, rebuild the encoded
//! name from the sidecar, rename the container back and delete the sidecar
//! and manifest.

use crate::core::{parser, scanner};
use crate::generators::checksum::{self, MD5_EXTENSION};
use crate::generators::mnfo::{self, MNFO_EXTENSION};
use crate::models::config::Config;
use crate::models::container::{with_extension, ContainerName};
use crate::services::mediainfo::MediaProber;
use crate::utils::fs::{ensure_directory, name_without_extension, rename_file};
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// What a run does to the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMode {
    /// Catalog new containers; `hash_manifest` is false in info-only runs.
    Forward { hash_manifest: bool },
    /// Restore encoded names of cataloged containers.
    Reverse,
}

/// Immutable options of a run.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    pub mode: CatalogMode,
    pub config: Config,
}

/// Final state of one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Cataloged { new_name: String },
    Reverted { new_name: String },
    Skipped,
    Failed { reason: String },
}

/// Outcome for one container.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    /// Set when a fatal error stopped the batch early.
    pub halted: Option<String>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.files
            .iter()
            .filter(|f| {
                matches!(
                    f.status,
                    FileStatus::Cataloged { .. } | FileStatus::Reverted { .. }
                )
            })
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Skipped)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Failed { .. }))
            .count()
    }
}

/// Catalogs the containers of one directory.
pub struct Cataloguer<P: MediaProber> {
    directory: PathBuf,
    options: CatalogOptions,
    prober: P,
}

impl<P: MediaProber> Cataloguer<P> {
    /// Create a cataloguer for an existing directory.
    pub fn new(directory: &Path, options: CatalogOptions, prober: P) -> Result<Self> {
        ensure_directory(directory)?;
        Ok(Self {
            directory: directory.to_path_buf(),
            options,
            prober,
        })
    }

    /// Process every container of the directory, one at a time, in name order.
    pub async fn run(&self) -> Result<BatchReport> {
        let scan = scanner::scan_directory(&self.directory)?;
        let mut report = BatchReport::default();

        let pb = ProgressBar::new(scan.containers.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        for container in &scan.containers {
            let filename = container
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            pb.set_message(filename.clone());
            pb.inc(1);

            let cataloged = scanner::is_cataloged(container, &scan.sidecars);
            let result = match self.options.mode {
                CatalogMode::Forward { .. } if cataloged => Ok(FileStatus::Skipped),
                CatalogMode::Reverse if !cataloged => Ok(FileStatus::Skipped),
                CatalogMode::Forward { hash_manifest } => self
                    .catalog_file(container, hash_manifest)
                    .await
                    .map(|new_name| FileStatus::Cataloged { new_name }),
                CatalogMode::Reverse => self
                    .reverse_file(container)
                    .map(|new_name| FileStatus::Reverted { new_name }),
            };

            let status = match result {
                Ok(status) => status,
                Err(e) => {
                    tracing::error!("{} processed with errors: {}", filename, e);
                    let fatal = e.is_fatal(self.options.config.batch.stop_on_rename_failure);
                    report.files.push(FileReport {
                        path: container.clone(),
                        status: FileStatus::Failed {
                            reason: e.to_string(),
                        },
                    });
                    if fatal {
                        report.halted = Some(e.to_string());
                        pb.abandon_with_message("Stopped");
                        return Ok(report);
                    }
                    continue;
                }
            };

            match &status {
                FileStatus::Skipped => tracing::info!("Skipped > {}", filename),
                _ => tracing::info!("{} processed successfully", filename),
            }
            report.files.push(FileReport {
                path: container.clone(),
                status,
            });
        }

        pb.finish_with_message("Done!");
        Ok(report)
    }

    /// Catalog one container; returns the name it was renamed to.
    pub async fn catalog_file(&self, container: &Path, hash_manifest: bool) -> Result<String> {
        let naming = &self.options.config.naming;
        let file_name = container
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        tracing::info!("Processing {}...", file_name);

        let name = ContainerName::parse(&file_name, naming)?;
        tracing::debug!("{} encoded fields in {}", name.arity(), file_name);
        let release = parser::parse(&name.base);
        tracing::debug!("Release info: {:?}", release);
        if let Some(source) = release.source.as_ref().filter(|s| !s.is_known()) {
            tracing::warn!("Unrecognized video source: {}", source);
        }

        let dir = container.parent().unwrap_or(self.directory.as_path());
        let sidecar = dir.join(with_extension(&name.base, Some(MNFO_EXTENSION)));
        if sidecar.exists() {
            return Err(crate::Error::other(format!(
                "{} already exists",
                sidecar.display()
            )));
        }

        let report = self.prober.probe(container).await?;
        let content = mnfo::generate_mnfo(&release, &name, &report);
        tracing::debug!("Media Info description:\n{}", content);
        fs::write(&sidecar, &content)?;

        let target = dir.join(name.file_name());
        if let Err(e) = rename_file(container, &target) {
            // the container keeps its encoded name, so its sidecar must go too
            if let Err(cleanup) = fs::remove_file(&sidecar) {
                tracing::warn!("Could not remove {}: {}", sidecar.display(), cleanup);
            }
            return Err(e);
        }
        tracing::info!("\"{}\" has been renamed to \"{}\"", file_name, name.file_name());

        if hash_manifest {
            let manifest = dir.join(with_extension(&name.base, Some(MD5_EXTENSION)));
            checksum::write_manifest(&[&target, &sidecar], &manifest)?;
        }

        Ok(name.file_name())
    }

    /// Rebuild the encoded name of a cataloged container; returns the new name.
    pub fn reverse_file(&self, container: &Path) -> Result<String> {
        let base = name_without_extension(container);
        let extension = container
            .extension()
            .map(|e| e.to_string_lossy().to_string());
        let dir = container.parent().unwrap_or(self.directory.as_path());
        let sidecar = dir.join(with_extension(&base, Some(MNFO_EXTENSION)));

        let content = match fs::read(&sidecar) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(crate::Error::SidecarMissing(sidecar.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let record = mnfo::parse_mnfo(&content, &sidecar.display().to_string())?;
        let new_name = record.container_file_name(
            &base,
            extension.as_deref(),
            self.options.config.naming.symmetric_escaping,
        );
        tracing::info!("Rebuild name: {}", new_name);

        rename_file(container, &dir.join(&new_name))?;

        let manifest = dir.join(with_extension(&base, Some(MD5_EXTENSION)));
        if manifest.exists() {
            remove_artifact(&manifest)?;
        } else {
            tracing::info!("MD5 hash file not found: {}", manifest.display());
        }
        remove_artifact(&sidecar)?;

        Ok(new_name)
    }
}

fn remove_artifact(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| crate::Error::ArtifactDeletion {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    tracing::info!("{} successfully deleted", path.display());
    Ok(())
}
