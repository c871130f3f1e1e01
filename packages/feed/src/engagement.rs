//! Viewer engagement: like, share, follow, comment, publish.
//!
//! Every operation is keyed by id and treats an unknown id as a no-op. The
//! return value says whether anything changed so the caller can decide on a
//! transient notice.

use crate::catalog::Catalog;
use crate::types::{Comment, CommentId, UserId, Video, VideoId, Viewer};
use tracing::{debug, info, warn};

/// Timestamp label given to comments created in this session.
pub const NEW_COMMENT_LABEL: &str = "now";

impl Catalog {
    /// Flip the viewer's like. Returns the new `is_liked`.
    pub fn toggle_like(&mut self, video_id: &VideoId) -> Option<bool> {
        let Some(video) = self.video_mut(video_id) else {
            warn!("engagement.toggle_like: unknown video_id={}", video_id);
            return None;
        };

        video.is_liked = !video.is_liked;
        video.likes = if video.is_liked {
            video.likes.saturating_add(1)
        } else {
            video.likes.saturating_sub(1)
        };
        debug!(
            "engagement.toggle_like: video_id={} is_liked={} likes={}",
            video_id, video.is_liked, video.likes
        );
        Some(video.is_liked)
    }

    /// Count a share and return the link that was handed out.
    pub fn record_share(&mut self, video_id: &VideoId, origin: &str) -> Option<String> {
        let Some(video) = self.video_mut(video_id) else {
            warn!("engagement.record_share: unknown video_id={}", video_id);
            return None;
        };

        video.shares = video.shares.saturating_add(1);
        debug!(
            "engagement.record_share: video_id={} shares={}",
            video_id, video.shares
        );
        Some(share_link(origin, video_id))
    }

    /// Flip the follow state of an author across all of their videos.
    ///
    /// The new state is the negation of the first matching video's flag, and
    /// is written to every video by that author so they never disagree.
    pub fn toggle_follow(&mut self, user_id: &UserId) -> Option<bool> {
        let Some(current) = self.videos_by(user_id).next().map(|v| v.is_following) else {
            warn!("engagement.toggle_follow: no videos for user_id={}", user_id);
            return None;
        };

        let following = !current;
        let mut touched = 0usize;
        for video in self.videos.iter_mut().filter(|v| &v.user.id == user_id) {
            video.is_following = following;
            touched += 1;
        }
        debug!(
            "engagement.toggle_follow: user_id={} following={} videos={}",
            user_id, following, touched
        );
        Some(following)
    }

    /// Prepend a comment by `viewer` to the targeted video.
    ///
    /// Skipped entirely when no video is targeted, the id is unknown, or the
    /// text is blank after trimming.
    pub fn add_comment(
        &mut self,
        target: Option<&VideoId>,
        text: &str,
        viewer: &Viewer,
    ) -> Option<CommentId> {
        let Some(video_id) = target else {
            debug!("engagement.add_comment: skipped, no target");
            return None;
        };
        let text = text.trim();
        if text.is_empty() {
            debug!("engagement.add_comment: skipped, blank text video_id={}", video_id);
            return None;
        }
        if self.video(video_id).is_none() {
            warn!("engagement.add_comment: unknown video_id={}", video_id);
            return None;
        }

        let id = self.next_comment_id();
        let comment = Comment {
            id: id.clone(),
            user: viewer.as_comment_author(),
            text: text.to_string(),
            timestamp: NEW_COMMENT_LABEL.to_string(),
        };
        self.comments
            .entry(video_id.clone())
            .or_default()
            .insert(0, comment);

        if let Some(video) = self.video_mut(video_id) {
            video.comments = video.comments.saturating_add(1);
        }
        debug!("engagement.add_comment: video_id={} comment_id={}", video_id, id);
        Some(id)
    }

    /// Put a freshly uploaded video at the top of the feed.
    ///
    /// Refuses a video whose id is already present. The navigation index is
    /// not touched here; the caller resets the navigator.
    pub fn publish(&mut self, video: Video) -> bool {
        if self.video(&video.id).is_some() {
            warn!("engagement.publish: duplicate video_id={}", video.id);
            return false;
        }

        info!(
            "engagement.publish: video_id={} author={}",
            video.id, video.user.username
        );
        self.videos.insert(0, video);
        true
    }
}

pub fn share_link(origin: &str, video_id: &VideoId) -> String {
    format!("{}/video/{}", origin.trim_end_matches('/'), video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::seed().expect("seed parses")
    }

    fn id(s: &str) -> VideoId {
        VideoId::new(s)
    }

    #[test]
    fn like_then_unlike_restores_count() {
        let mut c = catalog();
        let before = c.video(&id("1")).unwrap().clone();

        assert_eq!(c.toggle_like(&id("1")), Some(true));
        let liked = c.video(&id("1")).unwrap();
        assert_eq!(liked.likes, before.likes + 1);
        assert!(liked.is_liked);

        assert_eq!(c.toggle_like(&id("1")), Some(false));
        assert_eq!(c.video(&id("1")).unwrap(), &before);
    }

    #[test]
    fn unlike_at_zero_does_not_underflow() {
        let mut c = catalog();
        {
            let v = c.video_mut(&id("2")).unwrap();
            v.likes = 0;
            v.is_liked = true;
        }
        assert_eq!(c.toggle_like(&id("2")), Some(false));
        assert_eq!(c.video(&id("2")).unwrap().likes, 0);
    }

    #[test]
    fn unknown_ids_leave_catalog_untouched() {
        let mut c = catalog();
        let before = c.clone();
        assert_eq!(c.toggle_like(&id("nope")), None);
        assert_eq!(c.record_share(&id("nope"), "https://x"), None);
        assert_eq!(c.toggle_follow(&UserId::new("nope")), None);
        assert_eq!(c.add_comment(Some(&id("nope")), "hi", &Viewer::current()), None);
        assert_eq!(c, before);
    }

    #[test]
    fn share_increments_and_builds_link() {
        let mut c = catalog();
        let link = c.record_share(&id("4"), "https://reels.test/").unwrap();
        assert_eq!(link, "https://reels.test/video/4");
        assert_eq!(c.video(&id("4")).unwrap().shares, 235);
    }

    #[test]
    fn follow_applies_to_every_video_by_author() {
        let mut c = catalog();
        let mut extra = c.video(&id("2")).unwrap().clone();
        extra.id = id("2b");
        assert!(c.publish(extra));

        let chef = UserId::new("2");
        assert_eq!(c.toggle_follow(&chef), Some(true));
        assert!(c.videos_by(&chef).all(|v| v.is_following));
        assert_eq!(c.videos_by(&chef).count(), 2);

        // Other authors are untouched.
        assert!(!c.video(&id("1")).unwrap().is_following);
        assert!(c.video(&id("3")).unwrap().is_following);
    }

    #[test]
    fn follow_repairs_inconsistent_flags() {
        let mut c = catalog();
        let mut extra = c.video(&id("3")).unwrap().clone();
        extra.id = id("3b");
        extra.is_following = false;
        c.publish(extra);

        // First match ("3b", prepended) is not followed, so the toggle follows.
        assert_eq!(c.toggle_follow(&UserId::new("3")), Some(true));
        assert!(c.videos_by(&UserId::new("3")).all(|v| v.is_following));
    }

    #[test]
    fn comment_is_prepended_and_counted() {
        let mut c = catalog();
        let viewer = Viewer::current();
        let cid = c
            .add_comment(Some(&id("1")), "  first!  ", &viewer)
            .expect("comment added");

        let comments = c.comments_for(&id("1"));
        assert_eq!(comments.len(), 4);
        assert_eq!(comments[0].id, cid);
        assert_eq!(comments[0].text, "first!");
        assert_eq!(comments[0].timestamp, NEW_COMMENT_LABEL);
        assert_eq!(comments[0].user.username, "you");
        assert_eq!(c.video(&id("1")).unwrap().comments, 2342);
    }

    #[test]
    fn blank_comment_is_skipped() {
        let mut c = catalog();
        let before = c.clone();
        assert_eq!(c.add_comment(Some(&id("1")), " \t\n ", &Viewer::current()), None);
        assert_eq!(c, before);
    }

    #[test]
    fn comment_without_target_is_skipped() {
        let mut c = catalog();
        let before = c.clone();
        assert_eq!(c.add_comment(None, "hello", &Viewer::current()), None);
        assert_eq!(c, before);
    }

    #[test]
    fn comment_on_video_without_list_creates_one() {
        let mut c = catalog();
        let mut fresh = c.video(&id("1")).unwrap().clone();
        fresh.id = id("fresh");
        c.publish(fresh);
        c.add_comment(Some(&id("fresh")), "hi", &Viewer::current());
        assert_eq!(c.comments_for(&id("fresh")).len(), 1);
    }

    #[test]
    fn publish_prepends_and_rejects_duplicates() {
        let mut c = catalog();
        let mut v = c.video(&id("5")).unwrap().clone();
        v.id = id("new");
        assert!(c.publish(v.clone()));
        assert_eq!(c.videos()[0].id, id("new"));
        assert_eq!(c.len(), 6);

        assert!(!c.publish(v));
        assert_eq!(c.len(), 6);
    }
}
