use dioxus::prelude::*;
use feed::discover::Discover;
use feed::inbox::Inbox;
use feed::profile::{Profile, ProfileStats};
use feed::{Catalog, FeedConfig, FeedNavigator, ShellState, Tab, VideoId, Viewer};
use tracing::{error, info};

use crate::bottom_nav::BottomNav;
use crate::comments::CommentSheet;
use crate::discover::DiscoverPage;
use crate::inbox::InboxPage;
use crate::profile::ProfilePage;
use crate::search::SearchPage;
use crate::upload::UploadModal;
use crate::video_feed::{CooldownSlot, NavDriver, VideoFeed};

const APP_CSS: Asset = asset!("/assets/styling/app.css");

/// Shared state of the whole app. Every field is a signal, so the struct is
/// `Copy` and can be moved into as many handlers as needed.
#[derive(Clone, Copy)]
pub struct AppState {
    pub catalog: Signal<Catalog>,
    pub shell: Signal<ShellState>,
    pub nav: NavDriver,
    pub config: Signal<FeedConfig>,
    pub viewer: Signal<Viewer>,
    pub profile: Signal<Profile>,
    pub stats: Signal<ProfileStats>,
    pub discover: Signal<Discover>,
    pub inbox: Signal<Inbox>,
}

impl AppState {
    /// Jump the feed to `video_id` and show Home.
    pub fn play(self, video_id: &VideoId) {
        let mut shell = self.shell;
        shell.write().select_video();
        let index = self.catalog.read().position(video_id);
        if let Some(index) = index {
            self.nav.jump_to(index);
        }
    }
}

pub fn use_app() -> AppState {
    use_context::<AppState>()
}

fn load_or_default<T: Default, E: std::fmt::Display>(what: &str, loaded: Result<T, E>) -> T {
    loaded.unwrap_or_else(|e| {
        error!("app.seed: {what} failed to load: {e}");
        T::default()
    })
}

/// The complete reels app: feed, tabs, overlays and modals.
///
/// `start_video` selects the reel shown first, e.g. from a shared link.
#[component]
pub fn SocialApp(config: FeedConfig, start_video: Option<VideoId>) -> Element {
    let catalog = use_signal(|| load_or_default("catalog", Catalog::seed()));
    let discover = use_signal(|| load_or_default("discover", Discover::seed()));
    let inbox = use_signal(|| load_or_default("inbox", Inbox::seed()));
    let viewer = use_signal(Viewer::current);
    let profile = use_signal(|| Profile::for_viewer(&Viewer::current()));
    let stats = use_signal(ProfileStats::default);
    let shell = use_signal(ShellState::default);
    let config = use_signal(|| config);

    let nav_state = use_signal(|| {
        let mut navigator = FeedNavigator::new(catalog.peek().len(), &config.peek());
        if let Some(index) = start_video.as_ref().and_then(|id| catalog.peek().position(id)) {
            navigator.jump_to(index);
        }
        navigator
    });
    let cooldown = use_signal(CooldownSlot::default);
    let nav = NavDriver::new(nav_state, cooldown);

    use_context_provider(|| AppState {
        catalog,
        shell,
        nav,
        config,
        viewer,
        profile,
        stats,
        discover,
        inbox,
    });

    use_hook(|| {
        info!(
            "app.mount: videos={} start_video={:?}",
            catalog.peek().len(),
            start_video
        );
    });

    let state = shell();

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }

        div { class: "reels_app",
            main { class: "reels_main",
                if let Some(query) = state.search.clone() {
                    SearchPage { query }
                } else {
                    match state.active_tab {
                        Tab::Home | Tab::Create => rsx! { VideoFeed {} },
                        Tab::Discover => rsx! { DiscoverPage {} },
                        Tab::Inbox => rsx! { InboxPage {} },
                        Tab::Profile => rsx! { ProfilePage {} },
                    }
                }
            }

            BottomNav { active: state.active_tab }

            if let Some(video_id) = state.comments_for.clone() {
                CommentSheet { video_id }
            }
            if state.upload_open {
                UploadModal {}
            }
        }
    }
}
