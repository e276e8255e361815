// src/backend/utils/youtube.rs
use crate::models::common::VideoId;
use regex::Regex;
use std::sync::OnceLock;

static VIDEO_ID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn video_id_pattern() -> &'static Regex {
    VIDEO_ID_PATTERN.get_or_init(|| {
        Regex::new(r"(?:youtube\.com/(?:shorts/|watch\?v=)|youtu\.be/)([A-Za-z0-9_-]{11})")
            .expect("video id pattern is valid")
    })
}

/// Extracts the 11-character external video id from a submitted URL.
///
/// Recognizes `watch?v=<id>`, `shorts/<id>` and `youtu.be/<id>` shapes on a
/// substring basis, so trailing query parameters or surrounding text do not
/// prevent a match. Returns None when no shape is present.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    video_id_pattern()
        .captures(url)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_watch_urls() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_shorts_urls() {
        assert_eq!(
            extract_video_id("https://youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_short_link_urls() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn tolerates_extra_query_parameters() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s&list=PL123"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn rejects_unrecognized_urls() {
        assert_eq!(extract_video_id("https://example.com/video/12345"), None);
        assert_eq!(extract_video_id("not a url at all"), None);
        // Token shorter than 11 characters does not match.
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
    }
}
