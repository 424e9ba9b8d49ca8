//! Configuration model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MediaInfo configuration.
    pub mediainfo: MediaInfoConfig,
    /// Container naming rules.
    pub naming: NamingConfig,
    /// Batch behaviour.
    pub batch: BatchConfig,
}

/// MediaInfo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaInfoConfig {
    /// Executable name or path.
    pub executable: PathBuf,
    /// Per-file timeout in seconds.
    pub timeout_secs: u64,
}

/// Container naming rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Translate `;` to `:` in original titles (colons are illegal on some file systems).
    pub semicolon_to_colon: bool,
    /// Re-encode `_` as `--` when rebuilding names in reverse mode.
    pub symmetric_escaping: bool,
    /// Short source web aliases and the domains they stand for.
    pub source_web_aliases: BTreeMap<String, String>,
}

/// Batch behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Stop the whole batch when a container cannot be renamed.
    pub stop_on_rename_failure: bool,
}

impl Default for MediaInfoConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("mediainfo"),
            timeout_secs: 120,
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        let source_web_aliases = [
            ("v", "www.vagos.es"),
            ("tpb", "thepiratebay.se"),
            ("phd", "publichd.eu"),
        ]
        .into_iter()
        .map(|(alias, domain)| (alias.to_string(), domain.to_string()))
        .collect();

        Self {
            semicolon_to_colon: true,
            symmetric_escaping: false,
            source_web_aliases,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            stop_on_rename_failure: true,
        }
    }
}

impl NamingConfig {
    /// Expand a source web alias; unknown values pass through.
    pub fn resolve_source_web(&self, alias: &str) -> String {
        self.source_web_aliases
            .get(alias)
            .cloned()
            .unwrap_or_else(|| alias.to_string())
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scene_cataloguer")
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> crate::Result<Config> {
    toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
}

/// Load configuration from an explicit file or the default location.
///
/// Falls back to defaults when the file is missing or invalid.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dirs_config_path().join("config.toml"));

    if config_path.exists() {
        match std::fs::read_to_string(&config_path)
            .map_err(crate::Error::from)
            .and_then(|content| parse_config(&content))
        {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mediainfo.executable, PathBuf::from("mediainfo"));
        assert_eq!(config.mediainfo.timeout_secs, 120);
        assert!(config.naming.semicolon_to_colon);
        assert!(!config.naming.symmetric_escaping);
        assert!(config.batch.stop_on_rename_failure);
    }

    #[test]
    fn test_resolve_source_web() {
        let naming = NamingConfig::default();
        assert_eq!(naming.resolve_source_web("tpb"), "thepiratebay.se");
        assert_eq!(naming.resolve_source_web("v"), "www.vagos.es");
        assert_eq!(naming.resolve_source_web("phd"), "publichd.eu");
        assert_eq!(naming.resolve_source_web("example.org"), "example.org");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = parse_config(
            r#"
            [mediainfo]
            timeout_secs = 30

            [naming.source_web_aliases]
            rb = "rarbg.to"
            "#,
        )
        .unwrap();

        assert_eq!(config.mediainfo.timeout_secs, 30);
        assert_eq!(config.mediainfo.executable, PathBuf::from("mediainfo"));
        assert_eq!(config.naming.resolve_source_web("rb"), "rarbg.to");
        assert!(config.naming.semicolon_to_colon);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(parse_config("[mediainfo\n").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = load_config(Some(Path::new("/nonexistent/config.toml")));
        assert_eq!(config.mediainfo.timeout_secs, 120);
    }
}
