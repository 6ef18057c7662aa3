//! Video URL handling
//!
//! Only YouTube links can be shown with an inline player; everything
//! else falls back to a preview frame or a placeholder.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Length of every YouTube video identifier
pub const VIDEO_ID_LEN: usize = 11;

fn youtube_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // The greedy prefix makes the last marker in the URL win
        Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .unwrap_or_else(|e| unreachable!("invalid video id pattern: {e}"))
    })
}

/// A validated 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.0)
    }

    /// Still frame published by the host for this video
    pub fn still_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Extract the video identifier from a YouTube URL
///
/// Returns `None` for other hosts, for URLs without a recognized path
/// marker, and for identifiers that are not exactly 11 characters.
pub fn extract_youtube_id(url: &str) -> Option<VideoId> {
    if !is_youtube_url(url) {
        return None;
    }

    let id = youtube_pattern().captures(url)?.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then(|| VideoId(id.to_string()))
}
