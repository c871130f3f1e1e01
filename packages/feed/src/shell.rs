//! Tab and overlay state of the app shell.

use crate::discover::hashtag_query;
use crate::types::VideoId;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Discover,
    Create,
    Inbox,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Discover, Tab::Create, Tab::Inbox, Tab::Profile];

    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Home => "nav.home",
            Tab::Discover => "nav.discover",
            Tab::Create => "nav.create",
            Tab::Inbox => "nav.inbox",
            Tab::Profile => "nav.profile",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    pub active_tab: Tab,
    /// `Some(query)` while the search overlay is shown.
    pub search: Option<String>,
    pub upload_open: bool,
    /// Video whose comment sheet is open.
    pub comments_for: Option<VideoId>,
}

impl ShellState {
    /// `Create` only opens the upload modal; the current tab stays.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!("shell.select_tab: tab={:?}", tab);
        if tab == Tab::Create {
            self.upload_open = true;
            return;
        }
        self.active_tab = tab;
        self.search = None;
    }

    pub fn open_search(&mut self, query: impl Into<String>) {
        self.search = Some(query.into());
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        if let Some(current) = self.search.as_mut() {
            *current = query.into();
        }
    }

    pub fn close_search(&mut self) {
        self.search = None;
    }

    pub fn open_hashtag(&mut self, tag: &str) {
        debug!("shell.open_hashtag: tag={}", tag);
        self.search = Some(hashtag_query(tag));
    }

    /// A video picked from a grid or search result plays on Home.
    pub fn select_video(&mut self) {
        self.active_tab = Tab::Home;
        self.search = None;
    }

    pub fn open_comments(&mut self, video_id: VideoId) {
        self.comments_for = Some(video_id);
    }

    pub fn close_comments(&mut self) {
        self.comments_for = None;
    }

    pub fn close_upload(&mut self) {
        self.upload_open = false;
    }

    pub fn after_publish(&mut self) {
        self.upload_open = false;
        self.active_tab = Tab::Home;
        self.search = None;
    }
}
