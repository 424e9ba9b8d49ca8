//! Command line argument definitions.

use crate::core::cataloguer::CatalogMode;
use clap::Parser;
use std::path::PathBuf;

/// Scene Cataloguer - Catalog scene releases into MediaInfo sidecars
#[derive(Parser, Debug)]
#[command(name = "scene-cataloguer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long)]
    pub skip_preflight: bool,

    /// Configuration file (default: <config dir>/scene_cataloguer/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generate only the media info file, without MD5 hash (faster)
    #[arg(short = 'i', long = "info", conflicts_with = "reverse")]
    pub info_only: bool,

    /// Rebuild the original media file name from the media info file,
    /// deleting the media info file and the MD5 hash file
    #[arg(short, long)]
    pub reverse: bool,

    /// Directory containing the media containers
    #[arg(value_name = "MOVIES_DIR")]
    pub directory: PathBuf,
}

impl Cli {
    /// Run mode selected by the flags.
    pub fn mode(&self) -> CatalogMode {
        if self.reverse {
            CatalogMode::Reverse
        } else {
            CatalogMode::Forward {
                hash_manifest: !self.info_only,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_writes_manifest() {
        let cli = Cli::try_parse_from(["scene-cataloguer", "/movies"]).unwrap();
        assert_eq!(cli.mode(), CatalogMode::Forward { hash_manifest: true });
        assert_eq!(cli.directory, PathBuf::from("/movies"));
    }

    #[test]
    fn test_info_only_mode() {
        let cli = Cli::try_parse_from(["scene-cataloguer", "-i", "/movies"]).unwrap();
        assert_eq!(cli.mode(), CatalogMode::Forward { hash_manifest: false });
    }

    #[test]
    fn test_reverse_mode() {
        let cli = Cli::try_parse_from(["scene-cataloguer", "--reverse", "/movies"]).unwrap();
        assert_eq!(cli.mode(), CatalogMode::Reverse);
    }

    #[test]
    fn test_info_and_reverse_conflict() {
        assert!(Cli::try_parse_from(["scene-cataloguer", "-i", "-r", "/movies"]).is_err());
    }

    #[test]
    fn test_directory_required() {
        assert!(Cli::try_parse_from(["scene-cataloguer", "-i"]).is_err());
    }
}
