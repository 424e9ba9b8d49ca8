//! Release information extracted from scene file names.

use super::source::VideoSource;

/// Season/episode data of a TV release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub season: u32,
    pub episode: u32,
    pub episode_title: Option<String>,
}

/// What kind of release a name describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseKind {
    /// Nothing could be recognized beyond the raw name.
    Unknown,
    Movie { year: Option<u16> },
    TvEpisode(Episode),
}

/// Parsed release information.
///
/// Built once by the parser and never mutated afterwards. The title is the
/// display form; escape sequences are resolved at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub kind: ReleaseKind,
    pub title: String,
    pub quality: Option<String>,
    pub source: Option<VideoSource>,
    pub codec_description: Option<String>,
    pub scene_group: Option<String>,
}

impl ReleaseInfo {
    /// A title-only release for names no grammar recognized.
    pub fn unknown(title: impl Into<String>) -> Self {
        Self::with_kind(ReleaseKind::Unknown, title)
    }

    pub fn movie(title: impl Into<String>, year: Option<u16>) -> Self {
        Self::with_kind(ReleaseKind::Movie { year }, title)
    }

    pub fn tv_episode(title: impl Into<String>, season: u32, episode: u32) -> Self {
        Self::with_kind(
            ReleaseKind::TvEpisode(Episode {
                season,
                episode,
                episode_title: None,
            }),
            title,
        )
    }

    fn with_kind(kind: ReleaseKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            quality: None,
            source: None,
            codec_description: None,
            scene_group: None,
        }
    }

    pub fn is_tv_episode(&self) -> bool {
        matches!(self.kind, ReleaseKind::TvEpisode(_))
    }

    pub fn year(&self) -> Option<u16> {
        match self.kind {
            ReleaseKind::Movie { year } => year,
            _ => None,
        }
    }

    pub fn episode(&self) -> Option<&Episode> {
        match &self.kind {
            ReleaseKind::TvEpisode(episode) => Some(episode),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_release() {
        let info = ReleaseInfo::unknown("whatever");
        assert_eq!(info.kind, ReleaseKind::Unknown);
        assert_eq!(info.title, "whatever");
        assert!(info.year().is_none());
        assert!(info.episode().is_none());
        assert!(!info.is_tv_episode());
    }

    #[test]
    fn test_tv_episode_accessors() {
        let info = ReleaseInfo::tv_episode("Show", 2, 5);
        assert!(info.is_tv_episode());
        let episode = info.episode().unwrap();
        assert_eq!((episode.season, episode.episode), (2, 5));
        assert!(episode.episode_title.is_none());
    }

    #[test]
    fn test_movie_year() {
        assert_eq!(ReleaseInfo::movie("Heat", Some(1995)).year(), Some(1995));
        assert_eq!(ReleaseInfo::movie("Heat", None).year(), None);
    }
}
