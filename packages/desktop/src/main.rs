use dioxus::prelude::*;
use feed::FeedConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_tracing();
    dioxus::launch(App);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Dioxus may already have installed a subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = FeedConfig::from_env();
        info!(
            "startup: swipe_threshold={} wheel_cooldown_ms={} max_upload_bytes={} share_origin={}",
            config.swipe_threshold,
            config.wheel_cooldown.as_millis(),
            config.max_upload_bytes,
            config.share_origin
        );
        config
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ReelsTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                ui::SocialApp { config, start_video: None }
            }
        }
    }
}
