#![cfg(test)]

use crate::types::{VideoId, Viewer};

#[test]
fn ids_display_as_their_raw_value() {
    let id = VideoId::new("video_42");
    assert_eq!(id.to_string(), "video_42");
    assert_eq!(id.as_str(), "video_42");
    assert_eq!(VideoId::from("video_42"), id);
}

#[test]
fn ids_serialize_transparently() {
    let json = serde_json::to_string(&VideoId::new("3")).unwrap();
    assert_eq!(json, "\"3\"");
}

#[test]
fn viewer_authors_are_unverified() {
    let viewer = Viewer::current();
    let author = viewer.as_author();
    assert_eq!(author.id.as_str(), "current_user");
    assert_eq!(author.username, "you");
    assert!(!author.verified);
    assert_eq!(viewer.as_comment_author().avatar, "👤");
}
