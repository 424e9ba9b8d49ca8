//! Media info sidecar (`.mnfo`) generator and reader.
//!
//! A sidecar starts with a release block, followed by the MediaInfo report:
//!
//! ```text
//! 0  Release
//! 1  Source Web      : ...
//! 2  Source Type     : ...
//! 3  Ripper          : ...
//! 4  Uploader        : ...
//! 5
//! 6  General
//! 7  Complete name   : /Movies/<name>.<ext>
//! 8  Original title  : ...
//! ```
//!
//! The "Unique ID" report line is dropped and "Complete name" is rewritten,
//! so lines 0..=8 are at fixed positions and the reader addresses them by index.

use crate::models::container::{with_extension, ContainerName, ESCAPED_DELIMITER, FIELD_DELIMITER};
use crate::models::release::ReleaseInfo;
use std::fmt;

/// Sidecar file extension.
pub const MNFO_EXTENSION: &str = "mnfo";

/// Line terminator of sidecar files.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Number of leading lines the reader needs.
pub const SIGNIFICANT_LINES: usize = 9;

/// MediaInfo pads labels to this width before the `:` separator.
const LABEL_WIDTH: usize = 41;

const HEADER: &str = "Release";
const UNKNOWN_VALUE: &str = "Unknown";
const UNIQUE_ID_LABEL: &str = "Unique ID";
const COMPLETE_NAME_LABEL: &str = "Complete name";

/// A labelled line of the sidecar read back in reverse mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidecarField {
    SourceWeb,
    SourceType,
    Ripper,
    Uploader,
    OriginalTitle,
}

impl SidecarField {
    pub fn label(self) -> &'static str {
        match self {
            SidecarField::SourceWeb => "Source Web",
            SidecarField::SourceType => "Source Type",
            SidecarField::Ripper => "Ripper",
            SidecarField::Uploader => "Uploader",
            SidecarField::OriginalTitle => "Original title",
        }
    }

    /// Fixed line index of the field.
    pub fn line_index(self) -> usize {
        match self {
            SidecarField::SourceWeb => 1,
            SidecarField::SourceType => 2,
            SidecarField::Ripper => 3,
            SidecarField::Uploader => 4,
            SidecarField::OriginalTitle => 8,
        }
    }
}

impl fmt::Display for SidecarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog section a release is filed under.
pub fn catalog_section(release: &ReleaseInfo, name: &ContainerName) -> &'static str {
    if release.is_tv_episode() || name.has_legacy_episode_marker() {
        "/TV Series/"
    } else {
        "/Movies/"
    }
}

fn labelled(label: &str, value: &str) -> String {
    format!("{:<width$}: {}", label, value, width = LABEL_WIDTH)
}

/// Generate sidecar content for a container and its MediaInfo report.
pub fn generate_mnfo(release: &ReleaseInfo, name: &ContainerName, report: &[String]) -> String {
    let or_unknown = |value: &Option<String>| value.clone().unwrap_or_else(|| UNKNOWN_VALUE.to_string());

    let mut lines = vec![
        HEADER.to_string(),
        labelled(SidecarField::SourceWeb.label(), &or_unknown(&name.source_web)),
        labelled(SidecarField::SourceType.label(), &or_unknown(&name.source_type)),
        labelled(SidecarField::Ripper.label(), &or_unknown(&name.ripper)),
        labelled(SidecarField::Uploader.label(), &or_unknown(&name.uploader)),
        String::new(),
    ];

    for line in report {
        if line.starts_with(UNIQUE_ID_LABEL) {
            continue;
        } else if line.starts_with(COMPLETE_NAME_LABEL) {
            let complete_name = format!("{}{}", catalog_section(release, name), name.file_name());
            lines.push(labelled(COMPLETE_NAME_LABEL, &complete_name));
            lines.push(labelled(
                SidecarField::OriginalTitle.label(),
                &name.display_original_title(),
            ));
        } else {
            lines.push(line.clone());
        }
    }

    lines.join(LINE_TERMINATOR)
}

/// Release fields recovered from a sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnfoRecord {
    pub source_web: String,
    pub source_type: String,
    pub ripper: String,
    pub uploader: String,
    pub original_title: String,
}

fn field_value(lines: &[&str], field: SidecarField) -> crate::Result<String> {
    let line = lines[field.line_index()];
    if !line.starts_with(field.label()) {
        return Err(crate::Error::InvalidSidecarField(field));
    }
    let colon = line
        .find(':')
        .ok_or(crate::Error::InvalidSidecarField(field))?;
    let value = &line[colon + 1..];
    Ok(value.strip_prefix(' ').unwrap_or(value).to_string())
}

/// Read the release fields of a sidecar.
///
/// `path` only labels the error when the content is too short.
pub fn parse_mnfo(content: &str, path: &str) -> crate::Result<MnfoRecord> {
    let lines: Vec<&str> = content.lines().take(SIGNIFICANT_LINES).collect();
    if lines.len() != SIGNIFICANT_LINES {
        return Err(crate::Error::SidecarTooShort {
            path: path.to_string(),
            lines: lines.len(),
        });
    }

    Ok(MnfoRecord {
        source_web: field_value(&lines, SidecarField::SourceWeb)?,
        source_type: field_value(&lines, SidecarField::SourceType)?,
        ripper: field_value(&lines, SidecarField::Ripper)?,
        uploader: field_value(&lines, SidecarField::Uploader)?,
        original_title: field_value(&lines, SidecarField::OriginalTitle)?,
    })
}

impl MnfoRecord {
    /// Rebuild the encoded container name.
    ///
    /// Colons in the original title always go back to `;`. With
    /// `symmetric` set, underscores inside fields are re-encoded as `--` too.
    pub fn container_file_name(&self, base: &str, extension: Option<&str>, symmetric: bool) -> String {
        let encode = |value: &str| {
            if symmetric {
                value.replace(FIELD_DELIMITER, ESCAPED_DELIMITER)
            } else {
                value.to_string()
            }
        };

        let fields = [
            base.to_string(),
            encode(&self.source_web),
            encode(&self.uploader),
            encode(&self.original_title).replace(':', ";"),
            self.source_type.clone(),
            self.ripper.clone(),
        ];

        with_extension(&fields.join(FIELD_DELIMITER.to_string().as_str()), extension)
    }
}
