//! Platform-independent core of the reels app: data model, engagement,
//! feed navigation and the view models behind every tab.

pub mod catalog;
pub mod config;
pub mod discover;
pub mod engagement;
pub mod format;
pub mod inbox;
pub mod navigation;
pub mod profile;
pub mod shell;
pub mod types;
pub mod upload;

#[cfg(test)]
mod types_tests;

pub use catalog::{Catalog, CatalogError, SeedError};
pub use config::{ConfigError, FeedConfig};
pub use navigation::{CooldownTicket, FeedNavigator, NavCommand, NavKey, NavResponse};
pub use shell::{ShellState, Tab};
pub use types::{Author, Comment, CommentAuthor, CommentId, UserId, Video, VideoId, Viewer};
