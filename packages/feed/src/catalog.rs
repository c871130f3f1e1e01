use crate::types::{Comment, CommentId, UserId, Video, VideoId};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, info};

const SEED_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog seed is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate video id in catalog seed: {0}")]
    DuplicateVideo(VideoId),
    #[error("comments reference unknown video id: {0}")]
    OrphanComments(VideoId),
}

/// A bundled mock data set (discover, inbox) failed to parse.
#[derive(Debug, Error)]
#[error("{section} seed is not valid JSON: {source}")]
pub struct SeedError {
    pub section: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl SeedError {
    pub(crate) fn parse<T: serde::de::DeserializeOwned>(
        section: &'static str,
        json: &str,
    ) -> Result<T, SeedError> {
        serde_json::from_str(json).map_err(|source| SeedError { section, source })
    }
}

#[derive(Debug, Deserialize)]
struct CatalogSeed {
    videos: Vec<Video>,
    #[serde(default)]
    comments: HashMap<VideoId, Vec<Comment>>,
}

/// In-memory videos plus the comment lists keyed by video id.
///
/// Display order is the order of `videos`; uploads are prepended. All
/// mutation goes through the engagement operations in `crate::engagement`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub(crate) videos: Vec<Video>,
    pub(crate) comments: HashMap<VideoId, Vec<Comment>>,
    pub(crate) local_seq: u64,
}

impl Catalog {
    /// The bundled mock catalog.
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let seed: CatalogSeed = serde_json::from_str(json)?;
        let catalog = Self::from_parts(seed.videos, seed.comments)?;
        info!(
            "catalog.from_json: videos={} comment_lists={}",
            catalog.videos.len(),
            catalog.comments.len()
        );
        Ok(catalog)
    }

    pub fn from_parts(
        videos: Vec<Video>,
        comments: HashMap<VideoId, Vec<Comment>>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(videos.len());
        for video in &videos {
            if !seen.insert(video.id.clone()) {
                return Err(CatalogError::DuplicateVideo(video.id.clone()));
            }
        }
        if let Some(orphan) = comments.keys().find(|id| !seen.contains(*id)) {
            return Err(CatalogError::OrphanComments(orphan.clone()));
        }

        Ok(Self {
            videos,
            comments,
            local_seq: 0,
        })
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn video(&self, id: &VideoId) -> Option<&Video> {
        self.videos.iter().find(|v| &v.id == id)
    }

    pub fn position(&self, id: &VideoId) -> Option<usize> {
        self.videos.iter().position(|v| &v.id == id)
    }

    /// Comments for a video, most recent first. Unknown ids yield an empty slice.
    pub fn comments_for(&self, id: &VideoId) -> &[Comment] {
        self.comments.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn videos_by<'a>(&'a self, user_id: &'a UserId) -> impl Iterator<Item = &'a Video> + 'a {
        self.videos.iter().filter(move |v| &v.user.id == user_id)
    }

    pub fn liked_videos(&self) -> impl Iterator<Item = &Video> + '_ {
        self.videos.iter().filter(|v| v.is_liked)
    }

    /// A fresh id for a locally uploaded video.
    pub fn next_video_id(&mut self) -> VideoId {
        loop {
            self.local_seq += 1;
            let id = VideoId::new(format!("video_local_{}", self.local_seq));
            if self.video(&id).is_none() {
                debug!("catalog.next_video_id: id={}", id);
                return id;
            }
        }
    }

    pub(crate) fn next_comment_id(&mut self) -> CommentId {
        self.local_seq += 1;
        CommentId::new(format!("c_local_{}", self.local_seq))
    }

    pub(crate) fn video_mut(&mut self, id: &VideoId) -> Option<&mut Video> {
        self.videos.iter_mut().find(|v| &v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_loads_five_videos_in_display_order() {
        let catalog = Catalog::seed().expect("seed parses");
        let ids: Vec<&str> = catalog.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(catalog.comments_for(&VideoId::new("1")).len(), 3);
        assert_eq!(catalog.comments_for(&VideoId::new("4")).len(), 1);
    }

    #[test]
    fn unknown_video_has_no_comments() {
        let catalog = Catalog::seed().unwrap();
        assert!(catalog.comments_for(&VideoId::new("missing")).is_empty());
        assert!(catalog.video(&VideoId::new("missing")).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = Catalog::seed().unwrap();
        let mut videos = catalog.videos().to_vec();
        videos.push(videos[0].clone());
        let err = Catalog::from_parts(videos, HashMap::new()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateVideo(id) if id.as_str() == "1"));
    }

    #[test]
    fn orphan_comment_lists_are_rejected() {
        let mut comments = HashMap::new();
        comments.insert(VideoId::new("ghost"), Vec::new());
        let err = Catalog::from_parts(Vec::new(), comments).unwrap_err();
        assert!(matches!(err, CatalogError::OrphanComments(_)));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn profile_filters_follow_flags() {
        let catalog = Catalog::seed().unwrap();
        let liked: Vec<&str> = catalog.liked_videos().map(|v| v.id.as_str()).collect();
        assert_eq!(liked, vec!["2", "5"]);

        let author = UserId::new("3");
        assert_eq!(catalog.videos_by(&author).count(), 1);
    }

    #[test]
    fn local_video_ids_are_unique() {
        let mut catalog = Catalog::seed().unwrap();
        let a = catalog.next_video_id();
        let b = catalog.next_video_id();
        assert_ne!(a, b);
    }
}
