//! This crate contains all shared UI for the workspace.

mod app;
pub use app::{use_app, AppState, SocialApp};

mod bottom_nav;
mod comments;
mod discover;
mod grid;
mod inbox;
mod profile;
mod search;
mod timer;
mod upload;

mod reel;
pub use reel::VideoReel;

mod video_feed;
pub use video_feed::{NavDriver, VideoFeed};

mod theme;
pub use theme::ReelsTheme;

mod toast;
pub use toast::{use_toasts, ToastKind, ToastProvider, Toasts};

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};
