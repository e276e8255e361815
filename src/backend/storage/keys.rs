// src/backend/storage/keys.rs
//
// Persisted key layout:
//   metadata/index.json                        - aggregate index document
//   metadata/items/{id}.json                   - one document per item
//   files/{identity}/{item_id}/{ts}_{filename} - uploaded attachments

use crate::models::common::Identity;

pub const INDEX_KEY: &str = "metadata/index.json";

pub fn item_key(id: &str) -> String {
    format!("metadata/items/{}.json", id)
}

pub fn attachment_key(
    identity: &Identity,
    item_id: &str,
    timestamp_secs: i64,
    filename: &str,
) -> String {
    format!(
        "files/{}/{}/{}_{}",
        identity.as_str(),
        item_id,
        timestamp_secs,
        sanitize_filename(filename)
    )
}

/// Reduces a client-supplied filename to a safe key segment: path
/// separators and anything outside `[A-Za-z0-9._-]` become underscores.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_key_layout() {
        assert_eq!(item_key("abc"), "metadata/items/abc.json");
    }

    #[test]
    fn attachment_key_layout() {
        let key = attachment_key(&Identity::from("user@adda247.com"), "item1", 1700000000, "clip.mp4");
        assert_eq!(key, "files/user@adda247.com/item1/1700000000_clip.mp4");
    }

    #[test]
    fn sanitize_strips_path_separators_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("my video (1).mp4"), "my_video__1_.mp4");
        assert_eq!(sanitize_filename("???"), "file");
    }
}
