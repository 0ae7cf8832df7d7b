//! Trailer selection over a movie's video listing.
//!
//! Candidates are restricted to keyed YouTube videos, then checked bucket by bucket:
//! Chinese-language trailers, any trailer, teasers, and finally anything that
//! is not a clip or featurette. The first video of the first non-empty bucket
//! wins.

use crate::models::TmdbVideo;

pub const VIDEO_SITE: &str = "YouTube";
const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

const CHINESE_LANGUAGES: [&str; 3] = ["zh", "zh-TW", "zh-CN"];
const EXCLUDED_FALLBACK_TYPES: [&str; 2] = ["Clip", "Featurette"];

fn video_key(video: &TmdbVideo) -> Option<&str> {
    video.key.as_deref().filter(|k| !k.is_empty())
}

fn is_type(video: &TmdbVideo, wanted: &str) -> bool {
    video.video_type.as_deref() == Some(wanted)
}

fn is_chinese(video: &TmdbVideo) -> bool {
    video
        .iso_639_1
        .as_deref()
        .is_some_and(|lang| CHINESE_LANGUAGES.contains(&lang))
}

/// Viewing URL for a video key on the target platform
pub fn watch_url(key: &str) -> String {
    format!("{}{}", WATCH_URL, key)
}

/// Picks the best trailer and formats its viewing URL
pub fn select_trailer(videos: &[TmdbVideo]) -> Option<String> {
    let on_site: Vec<&TmdbVideo> = videos
        .iter()
        .filter(|v| v.site.as_deref() == Some(VIDEO_SITE) && video_key(v).is_some())
        .collect();

    let trailers: Vec<&TmdbVideo> = on_site
        .iter()
        .copied()
        .filter(|v| is_type(v, "Trailer"))
        .collect();

    let chosen = trailers
        .iter()
        .copied()
        .find(|v| is_chinese(v))
        .or_else(|| trailers.first().copied())
        .or_else(|| on_site.iter().copied().find(|v| is_type(v, "Teaser")))
        .or_else(|| {
            on_site.iter().copied().find(|v| {
                !v.video_type
                    .as_deref()
                    .is_some_and(|t| EXCLUDED_FALLBACK_TYPES.contains(&t))
            })
        })?;

    video_key(chosen).map(watch_url)
}
