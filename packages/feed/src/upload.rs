use crate::types::{Video, VideoId, Viewer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Music label used when the uploader leaves the field blank.
pub const DEFAULT_MUSIC: &str = "Original Sound";

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Metadata of the file picked in the upload dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Please select a video file")]
    NotAVideo { mime_type: String },
    #[error("File size must be less than {}MB", .limit_bytes / BYTES_PER_MB)]
    TooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("Please select a video and add a description")]
    Incomplete,
}

/// Accept only `video/*` files up to `max_bytes`.
pub fn check_file(file: &SelectedFile, max_bytes: u64) -> Result<(), UploadRejection> {
    if !file.mime_type.starts_with("video/") {
        return Err(UploadRejection::NotAVideo {
            mime_type: file.mime_type.clone(),
        });
    }
    if file.size_bytes > max_bytes {
        return Err(UploadRejection::TooLarge {
            size_bytes: file.size_bytes,
            limit_bytes: max_bytes,
        });
    }
    Ok(())
}

/// A validated upload, ready to become a [`Video`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSubmission {
    pub description: String,
    pub music: String,
}

impl UploadSubmission {
    pub fn prepare(
        file: Option<&SelectedFile>,
        description: &str,
        music: &str,
    ) -> Result<Self, UploadRejection> {
        let description = description.trim();
        if file.is_none() || description.is_empty() {
            return Err(UploadRejection::Incomplete);
        }

        let music = match music.trim() {
            "" => DEFAULT_MUSIC,
            m => m,
        };
        Ok(Self {
            description: description.to_string(),
            music: music.to_string(),
        })
    }

    /// Zeroed counters, flags off, authored by `viewer`.
    pub fn into_video(self, id: VideoId, src: String, viewer: &Viewer) -> Video {
        info!("upload.into_video: video_id={}", id);
        Video {
            id,
            src,
            user: viewer.as_author(),
            description: self.description,
            music: self.music,
            likes: 0,
            comments: 0,
            shares: 0,
            is_liked: false,
            is_following: false,
        }
    }
}

/// Releases object URLs created for local file previews.
pub trait UrlRevoker {
    fn revoke(&self, url: &str);
}

/// Owns the preview URL of the currently selected file.
///
/// A URL is revoked when it is replaced, when the upload flow is closed, or
/// when the slot is dropped, and never more than once. [`PreviewSlot::commit`]
/// hands the URL to a published video instead.
pub struct PreviewSlot<R: UrlRevoker> {
    revoker: R,
    current: Option<String>,
}

impl<R: UrlRevoker> PreviewSlot<R> {
    pub fn new(revoker: R) -> Self {
        Self {
            revoker,
            current: None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn replace(&mut self, url: String) {
        self.release();
        debug!("upload.preview: acquired");
        self.current = Some(url);
    }

    pub fn release(&mut self) {
        if let Some(url) = self.current.take() {
            debug!("upload.preview: revoked");
            self.revoker.revoke(&url);
        }
    }

    pub fn commit(&mut self) -> Option<String> {
        self.current.take()
    }
}

impl<R: UrlRevoker> Drop for PreviewSlot<R> {
    fn drop(&mut self) {
        self.release();
    }
}
