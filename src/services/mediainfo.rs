//! MediaInfo service for producing the textual media report.

use crate::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Produces the line-oriented `Label : value` report of a media file.
#[async_trait]
pub trait MediaProber: Send + Sync {
    /// Probe a file and return its report lines, in order.
    async fn probe(&self, path: &Path) -> Result<Vec<String>>;
}

/// Runs the MediaInfo command line tool.
#[derive(Debug, Clone)]
pub struct MediaInfoCli {
    executable: PathBuf,
    timeout: Duration,
}

impl MediaInfoCli {
    /// Create a prober for the given executable and per-file timeout.
    pub fn new(executable: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            executable: executable.into(),
            timeout,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

#[async_trait]
impl MediaProber for MediaInfoCli {
    async fn probe(&self, path: &Path) -> Result<Vec<String>> {
        tracing::debug!("Running {} on {}", self.executable.display(), path.display());

        let output = Command::new(&self.executable)
            .arg(path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        // output() drains stdout and stderr while waiting, so large reports cannot block the child
        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| crate::Error::ProbeTimeout {
                path: path.display().to_string(),
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => crate::Error::MediaInfoNotFound,
                _ => crate::Error::ProbeFailed(format!(
                    "could not run {}: {}",
                    self.executable.display(),
                    e
                )),
            })?;

        if !output.status.success() {
            return Err(crate::Error::ProbeFailed(format!(
                "{} exited with {} for {}",
                self.executable.display(),
                output.status,
                path.display()
            )));
        }

        Ok(report_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Split raw report text into lines without terminators.
pub fn report_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Check if the executable resolves on PATH (or as a path).
pub fn is_installed(executable: &Path) -> bool {
    which::which(executable).is_ok()
}

/// Get the MediaInfo version line.
pub fn get_version(executable: &Path) -> Result<String> {
    let output = std::process::Command::new(executable)
        .arg("--Version")
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .last()
        .unwrap_or("unknown");

    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines_strip_crlf() {
        let lines = report_lines("General\r\nUnique ID : 1\r\nFormat : Matroska\n");
        assert_eq!(lines, vec!["General", "Unique ID : 1", "Format : Matroska"]);
    }

    #[test]
    fn test_missing_executable() {
        assert!(!is_installed(Path::new("definitely-not-a-mediainfo-binary")));
    }

    #[tokio::test]
    async fn test_probe_missing_executable_is_not_found() {
        let prober = MediaInfoCli::new("definitely-not-a-mediainfo-binary", Duration::from_secs(5));
        let result = prober.probe(Path::new("movie.mkv")).await;
        assert!(matches!(result, Err(crate::Error::MediaInfoNotFound)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_probe_times_out() {
        // sleep takes the probed "path" as its duration
        let prober = MediaInfoCli::new("sleep", Duration::from_secs(1));
        let result = prober.probe(Path::new("5")).await;
        assert!(matches!(
            result,
            Err(crate::Error::ProbeTimeout { seconds: 1, .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_probe_non_zero_exit_fails() {
        let prober = MediaInfoCli::new("false", Duration::from_secs(5));
        let result = prober.probe(Path::new("movie.mkv")).await;
        match result {
            Err(crate::Error::ProbeFailed(reason)) => assert!(reason.contains("exited with")),
            other => panic!("Expected ProbeFailed, got {:?}", other),
        }
    }
}
