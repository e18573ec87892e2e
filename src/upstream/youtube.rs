//! YouTube URL parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YOUTUBE_URL: Regex = Regex::new(
        r"^(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/shorts/)([a-zA-Z0-9_-]{11})"
    )
    .expect("valid youtube url pattern");
}

/// Check whether `url` points at a YouTube video.
pub fn is_valid_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url.trim())
}

/// Extract the 11-character video id from a watch, short link or shorts URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    YOUTUBE_URL
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Embeddable player URL for a video URL.
pub fn embed_url(url: &str) -> Option<String> {
    extract_video_id(url).map(|id| format!("https://www.youtube.com/embed/{id}"))
}
