use dioxus::prelude::*;
use feed::{FeedConfig, VideoId};
use tracing::{debug, info};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(ReelsShell)]
    #[route("/")]
    Home {},
    #[route("/video/:id")]
    SharedVideo { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config(config: &FeedConfig) {
    info!(
        "startup: swipe_threshold={} wheel_cooldown_ms={} max_upload_bytes={} share_origin={}",
        config.swipe_threshold,
        config.wheel_cooldown.as_millis(),
        config.max_upload_bytes,
        config.share_origin
    );
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = FeedConfig::from_env();
        log_runtime_config(&config);
        config
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ReelsTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Reel to open first for the route the app was entered on.
fn start_video_for(route: &Route) -> Option<VideoId> {
    match route {
        Route::Home {} => None,
        Route::SharedVideo { id } => Some(VideoId::new(id.as_str())),
    }
}

/// Hosts the single app instance; route changes below it keep its state.
#[component]
fn ReelsShell() -> Element {
    let config = use_context::<FeedConfig>();
    let route = use_route::<Route>();
    let start_video = use_hook(|| start_video_for(&route));

    rsx! {
        ui::SocialApp { config, start_video }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {}
}

/// Landing page of a share link; the shell opens the feed on this reel.
#[component]
fn SharedVideo(id: String) -> Element {
    use_hook(|| debug!("route.shared_video: id={id}"));
    rsx! {}
}
