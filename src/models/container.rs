//! Encoded container file names.
//!
//! A container name carries up to six underscore-separated fields:
//!
//! ```text
//! <name>[_<sourceWeb>[_<uploader>[_<originalTitle>[_<sourceType>[_<ripper>]]]]].<ext>
//! ```
//!
//! Inside a field `--` stands for a literal underscore.

use super::config::NamingConfig;
use crate::utils::{fs::split_extension, text::split_fields};

/// Field delimiter of encoded container names.
pub const FIELD_DELIMITER: char = '_';

/// Escaped form of the delimiter inside a field.
pub const ESCAPED_DELIMITER: &str = "--";

/// Maximum number of fields an encoded name may carry.
pub const MAX_FIELDS: usize = 6;

/// Original-title placeholder meaning "same as the base name".
const SAME_AS_BASE: &str = "=";

/// Decoded container file name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerName {
    /// Base name the container is renamed to.
    pub base: String,
    pub extension: Option<String>,
    /// Source web, with aliases expanded.
    pub source_web: Option<String>,
    pub uploader: Option<String>,
    pub original_title: Option<String>,
    pub source_type: Option<String>,
    pub ripper: Option<String>,
}

impl ContainerName {
    /// Decode a container file name.
    ///
    /// Fails with `InvalidFilenameStructure` when the name has more than six
    /// fields or an empty base name.
    pub fn parse(file_name: &str, naming: &NamingConfig) -> crate::Result<Self> {
        let (stem, extension) = split_extension(file_name);
        let tokens = split_fields(stem, FIELD_DELIMITER);

        // an empty base would rename the container to a bare `.ext` dot-file
        if tokens.first().map_or(true, |base| base.is_empty()) || tokens.len() > MAX_FIELDS {
            return Err(crate::Error::InvalidFilenameStructure {
                name: file_name.to_string(),
                tokens: tokens.len(),
            });
        }

        let base = tokens[0].to_string();
        let field = |idx: usize| tokens.get(idx).map(|t| t.replace(ESCAPED_DELIMITER, "_"));

        let original_title = field(3).map(|title| {
            let title = if title == SAME_AS_BASE { base.clone() } else { title };
            if naming.semicolon_to_colon {
                title.replace(';', ":")
            } else {
                title
            }
        });

        Ok(Self {
            source_web: field(1).map(|alias| naming.resolve_source_web(&alias)),
            uploader: field(2),
            original_title,
            source_type: tokens.get(4).map(|t| t.to_string()),
            ripper: tokens.get(5).map(|t| t.to_string()),
            extension: extension.map(str::to_string),
            base,
        })
    }

    /// Number of encoded fields present.
    pub fn arity(&self) -> usize {
        [
            self.source_web.is_some(),
            self.uploader.is_some(),
            self.original_title.is_some(),
            self.source_type.is_some(),
            self.ripper.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
            + 1
    }

    /// File name the container is renamed to: `<base>.<ext>`.
    pub fn file_name(&self) -> String {
        with_extension(&self.base, self.extension.as_deref())
    }

    /// Original title shown in the sidecar; the base name when none was encoded.
    pub fn display_original_title(&self) -> String {
        self.original_title
            .clone()
            .unwrap_or_else(|| self.base.replace(';', ":"))
    }

    /// Whether the base name follows the `Show - [1x05] - Title` convention.
    pub fn has_legacy_episode_marker(&self) -> bool {
        self.base.contains(" - [")
    }
}

/// Append an optional extension to a stem.
pub fn with_extension(stem: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    }
}
