//! Scene release name parser.
//!
//! Decides whether a name describes a TV episode or a movie, then runs an
//! ordered list of grammar strategies; the first one that matches wins:
//!
//! - TV: scene TV grammar, then a bare `SxxEyy` / `NxM` marker scan
//! - Movie: scene movie grammar
//!
//! Names no strategy recognizes degrade to a title-only release.

use crate::models::release::{Episode, ReleaseInfo, ReleaseKind};
use crate::models::source::VideoSource;
use crate::utils::text::{split_fields, unescape_title};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Season/episode marker: `S01E02` (any case) or `1x02`.
const EPISODE_MARKER: &str =
    r"(?:[sS](?P<season>\d+)[eE](?P<episode>\d+))|(?:(?P<season2>\d+)x(?P<episode2>\d+))";

const CODEC: &str =
    r"mkv|avc|h\.?264|x264|xvid|divx|dxva|dts|dts-hd(?:\.ma)?|dd5\.1|ac3|aac|aac2\.0";

const TV_SOURCE: &str = r"blu-?ray|b[dr]rip|bdremux|hddvd|web-dl|hditunes|hdtv|dvdr(?:ip)?";

const MOVIE_SOURCE: &str =
    r"blu-?ray|b[dr]rip|bdremux|hddvd|web-dl|hditunes|hdtv(?:rip)?|dvdr(?:ip)?";

static EPISODE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EPISODE_MARKER).expect("episode marker pattern"));

static EPISODE_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{})$", EPISODE_MARKER)).expect("episode field pattern")
});

static SCENE_TV_RE: LazyLock<Regex> = LazyLock::new(|| {
    let codecs = format!(r"(?:(?:{c})\.)*(?:{c})", c = CODEC);
    Regex::new(&format!(
        r"(?i)^(?P<title>(?:[^.]+\.)*(?:[^.]+))\.s(?P<season>\d\d)e(?P<episode>\d\d)\.(?:(?P<episodetitle>.+?)\.)??(?:(?P<quality>720p?|1080p?)\.)?(?:(?P<source>{src})\.)?(?P<codecs>{codecs})-(?P<scenegroup>\w+)$",
        src = TV_SOURCE,
        codecs = codecs,
    ))
    .expect("scene TV pattern")
});

static SCENE_MOVIE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let codecs = format!(r"(?:(?:{c})\.)*(?:{c})", c = CODEC);
    Regex::new(&format!(
        r"(?i)^(?P<title>.+?)\.(?:(?P<year>(?:19|20)\d\d)\.)?(?:(?P<extratag>limited|remastered|proper)\.)?(?:(?P<source>{src})\.)?(?P<quality>720p?|1080p?)\.(?:(?P<source2>{src})\.)?(?P<codecs>{codecs})(?:-(?P<scenegroup>\w+)|\.multisubs)$",
        src = MOVIE_SOURCE,
        codecs = codecs,
    ))
    .expect("scene movie pattern")
});

/// A grammar strategy: recognize a whole name or decline.
type Strategy = fn(&str) -> Option<ReleaseInfo>;

const TV_STRATEGIES: &[Strategy] = &[parse_scene_tv, parse_basic_episode];

const MOVIE_STRATEGIES: &[Strategy] = &[parse_scene_movie];

/// Split a bare name (no extension) into its informational fields.
///
/// Dot-separated when that yields more than three fields, space-separated otherwise.
pub fn info_fields(name: &str) -> Vec<&str> {
    let fields = split_fields(name, '.');
    if fields.len() > 3 {
        tracing::debug!("Dot-separated name: {}", name);
        fields
    } else {
        tracing::debug!("Name is not dot-separated: {}", name);
        split_fields(name, ' ')
    }
}

/// Whether any single field of the name is a season/episode marker.
pub fn is_tv_episode_name(name: &str) -> bool {
    info_fields(name)
        .iter()
        .any(|field| EPISODE_FIELD_RE.is_match(field))
}

/// Parse a bare name (no extension) into release information.
pub fn parse(name: &str) -> ReleaseInfo {
    let strategies = if is_tv_episode_name(name) {
        tracing::debug!("Parsing \"{}\" as TV series", name);
        TV_STRATEGIES
    } else {
        tracing::debug!("Parsing \"{}\" as movie", name);
        MOVIE_STRATEGIES
    };

    strategies
        .iter()
        .find_map(|strategy| strategy(name))
        .unwrap_or_else(|| ReleaseInfo::unknown(name))
}

/// Non-empty capture as an owned string.
fn capture(caps: &Captures<'_>, group: &str) -> Option<String> {
    caps.name(group)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn capture_number(caps: &Captures<'_>, group: &str) -> Option<u32> {
    caps.name(group).and_then(|m| m.as_str().parse().ok())
}

/// Scene TV grammar: `Title.S01E02[.Episode.Title][.720p][.Source].Codecs-GROUP`.
pub fn parse_scene_tv(name: &str) -> Option<ReleaseInfo> {
    let caps = SCENE_TV_RE.captures(name)?;

    let episode = Episode {
        season: capture_number(&caps, "season")?,
        episode: capture_number(&caps, "episode")?,
        episode_title: capture(&caps, "episodetitle").map(|t| unescape_title(&t)),
    };
    if episode.episode_title.is_none() {
        tracing::debug!("Episode title field not present in: {}", name);
    }

    Some(ReleaseInfo {
        kind: ReleaseKind::TvEpisode(episode),
        title: unescape_title(caps.name("title")?.as_str()),
        quality: capture(&caps, "quality"),
        source: capture(&caps, "source").map(|s| VideoSource::parse(&s)),
        codec_description: capture(&caps, "codecs"),
        scene_group: capture(&caps, "scenegroup"),
    })
}

/// Fallback for TV names: everything before the first episode marker is the title.
pub fn parse_basic_episode(name: &str) -> Option<ReleaseInfo> {
    let caps = EPISODE_MARKER_RE.captures(name)?;
    let marker = caps.get(0)?;

    let season = capture_number(&caps, "season").or_else(|| capture_number(&caps, "season2"))?;
    let episode =
        capture_number(&caps, "episode").or_else(|| capture_number(&caps, "episode2"))?;

    // drop the separator run before the marker: "Friends - 3x12" titles as "Friends"
    let prefix = name[..marker.start()].trim_end_matches(['.', ' ', '-', '_']);
    Some(ReleaseInfo::tv_episode(unescape_title(prefix), season, episode))
}

/// Scene movie grammar:
/// `Title[.Year][.Tag][.Source].Quality[.Source].Codecs(-GROUP|.multisubs)`.
pub fn parse_scene_movie(name: &str) -> Option<ReleaseInfo> {
    let caps = SCENE_MOVIE_RE.captures(name)?;

    let year = caps.name("year").and_then(|m| m.as_str().parse().ok());
    if year.is_none() {
        tracing::debug!("No year info in: {}", name);
    }
    if let Some(tag) = caps.name("extratag") {
        tracing::debug!("Release tag {} ignored", tag.as_str());
    }

    let source = capture(&caps, "source")
        .or_else(|| capture(&caps, "source2"))
        .map(|s| VideoSource::parse(&s));

    Some(ReleaseInfo {
        kind: ReleaseKind::Movie { year },
        title: unescape_title(caps.name("title")?.as_str()),
        quality: capture(&caps, "quality"),
        source,
        codec_description: capture(&caps, "codecs"),
        scene_group: capture(&caps, "scenegroup"),
    })
}
