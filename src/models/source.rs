//! Video source normalization.

use std::fmt;

/// Canonical acquisition source of a release.
///
/// Unrecognized aliases are kept verbatim in [`VideoSource::Unknown`] so the
/// original text can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VideoSource {
    BluRay,
    BdRip,
    BrRip,
    BdRemux,
    HdDvd,
    WebDl,
    HdItunes,
    Hdtv,
    HdtvRip,
    Dvdr,
    DvdRip,
    Unknown(String),
}

impl VideoSource {
    /// Normalize a free-text alias (case-insensitive).
    pub fn parse(alias: &str) -> Self {
        match alias.trim().to_lowercase().as_str() {
            "bluray" | "blu-ray" | "bd" => VideoSource::BluRay,
            "bdrip" => VideoSource::BdRip,
            "brrip" => VideoSource::BrRip,
            "bdremux" | "bd-remux" => VideoSource::BdRemux,
            "hddvd" | "hd-dvd" | "hd dvd" => VideoSource::HdDvd,
            "web-dl" | "webdl" => VideoSource::WebDl,
            "hditunes" => VideoSource::HdItunes,
            "hdtv" => VideoSource::Hdtv,
            "hdtvrip" => VideoSource::HdtvRip,
            "dvdr" | "dvd-r" => VideoSource::Dvdr,
            "dvdrip" => VideoSource::DvdRip,
            _ => VideoSource::Unknown(alias.to_string()),
        }
    }

    /// Whether the alias matched one of the canonical sources.
    pub fn is_known(&self) -> bool {
        !matches!(self, VideoSource::Unknown(_))
    }

    /// Display name; pass-through text for unknown sources.
    pub fn as_str(&self) -> &str {
        match self {
            VideoSource::BluRay => "Blu-ray",
            VideoSource::BdRip => "BDRip",
            VideoSource::BrRip => "BRRip",
            VideoSource::BdRemux => "BDRemux",
            VideoSource::HdDvd => "HD DVD",
            VideoSource::WebDl => "WEB-DL",
            VideoSource::HdItunes => "HDiTunes",
            VideoSource::Hdtv => "HDTV",
            VideoSource::HdtvRip => "HDTVRip",
            VideoSource::Dvdr => "DVDR",
            VideoSource::DvdRip => "DVDRip",
            VideoSource::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for VideoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
