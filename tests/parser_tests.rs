//! Integration tests for the release name parser.
//!
//! Tests cover:
//! - Scene TV and movie grammars
//! - TV/movie classification over every field count
//! - Title escaping round trips

use scene_cataloguer::core::parser::{info_fields, is_tv_episode_name, parse};
use scene_cataloguer::models::release::{ReleaseInfo, ReleaseKind};
use scene_cataloguer::models::source::VideoSource;
use scene_cataloguer::utils::text::{escape_title, unescape_title};

// ========== GRAMMAR TESTS ==========

#[test]
fn test_scene_movie_example() {
    let info = parse("The.Matrix.1999.BluRay.720p.x264.AC3-GROUP");

    assert_eq!(info.kind, ReleaseKind::Movie { year: Some(1999) });
    assert_eq!(info.title, "The Matrix");
    assert_eq!(info.source, Some(VideoSource::BluRay));
    assert_eq!(info.quality.as_deref(), Some("720p"));
    assert_eq!(info.codec_description.as_deref(), Some("x264.AC3"));
    assert_eq!(info.scene_group.as_deref(), Some("GROUP"));
}

#[test]
fn test_scene_tv_example() {
    let info = parse("Show.Name.S02E05.Episode.Title.1080p.WEB-DL.x264-GROUP");

    let episode = info.episode().expect("TV episode");
    assert_eq!(info.title, "Show Name");
    assert_eq!(episode.season, 2);
    assert_eq!(episode.episode, 5);
    assert_eq!(episode.episode_title.as_deref(), Some("Episode Title"));
    assert_eq!(info.quality.as_deref(), Some("1080p"));
    assert_eq!(info.source, Some(VideoSource::WebDl));
    assert_eq!(info.codec_description.as_deref(), Some("x264"));
    assert_eq!(info.scene_group.as_deref(), Some("GROUP"));
}

#[test]
fn test_scene_tv_dts_hd_codecs() {
    let info = parse("Show.S01E01.Pilot.1080p.BluRay.DTS-HD.MA.x264-GRP");

    assert_eq!(info.title, "Show");
    assert_eq!(info.codec_description.as_deref(), Some("DTS-HD.MA.x264"));
    assert_eq!(info.source, Some(VideoSource::BluRay));
}

#[test]
fn test_movie_year_matches_literal() {
    for year in [1900u16, 1955, 1999, 2000, 2024, 2099] {
        let name = format!("Some.Film.{}.720p.x264-GRP", year);
        let info = parse(&name);
        assert_eq!(info.year(), Some(year), "{}", name);
        assert_eq!(info.title, "Some Film");
    }
}

#[test]
fn test_year_out_of_range_stays_in_title() {
    let info = parse("Blade.Runner.2199.720p.x264-GRP");
    assert_eq!(info.year(), None);
    assert_eq!(info.title, "Blade Runner 2199");
}

#[test]
fn test_tv_name_falls_back_to_basic_marker() {
    let info = parse("Friends - 3x12 - The One With All The Jealousy");

    let episode = info.episode().expect("TV episode");
    assert_eq!(info.title, "Friends");
    assert_eq!((episode.season, episode.episode), (3, 12));
    assert!(info.codec_description.is_none());
}

#[test]
fn test_unrecognized_names_degrade() {
    for name in ["home video", "Heat", "Heat.1995.DVD"] {
        assert_eq!(parse(name), ReleaseInfo::unknown(name));
    }
}

// ========== CLASSIFIER TESTS ==========

#[test]
fn test_classifier_over_field_counts() {
    let fillers = ["Show", "Name", "Extra", "Words", "Here", "More"];

    for count in 1..=6 {
        for marker_pos in 0..count {
            let mut fields: Vec<&str> = fillers[..count].to_vec();
            fields[marker_pos] = "S01E02";
            let dotted = fields.join(".");
            let spaced = fields.join(" ");

            // dotted names with 3 or fewer fields are re-split on spaces
            assert_eq!(is_tv_episode_name(&dotted), count > 3 || count == 1, "{}", dotted);
            assert!(is_tv_episode_name(&spaced), "{}", spaced);
        }

        let plain = fillers[..count].join(".");
        assert!(!is_tv_episode_name(&plain), "{}", plain);
        assert!(!is_tv_episode_name(&fillers[..count].join(" ")));
    }
}

#[test]
fn test_classifier_alternate_marker() {
    assert!(is_tv_episode_name("Lost 2x07 The Other 48 Days"));
    assert!(!is_tv_episode_name("Lost 2X07"));
}

#[test]
fn test_info_fields_choice() {
    assert_eq!(info_fields("A.B.C.D").len(), 4);
    assert_eq!(info_fields("A.B C.D"), vec!["A.B", "C.D"]);
}

// ========== ESCAPING TESTS ==========

#[test]
fn test_scene_title_round_trip() {
    let titles = [
        "Mission: Impossible",
        "Who's Afraid?",
        "Dr. Strangelove",
        "Stars * <Shine>",
    ];

    for title in titles {
        let name = format!("{}.S01E01.720p.x264-GRP", escape_title(title));
        let info = parse(&name);
        assert!(info.is_tv_episode(), "{}", name);
        assert_eq!(info.title, title);
        assert_eq!(unescape_title(&escape_title(&info.title)), title);
    }
}
