use dioxus::prelude::*;
use feed::format::format_count;
use feed::Video;
use std::time::Duration;

/// Thumbnail grid; a tile click plays the video on Home.
#[component]
pub fn VideoGrid(videos: Vec<Video>, #[props(default)] private: bool) -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    rsx! {
        div { class: "video_grid",
            if videos.is_empty() {
                p { class: "hint empty", {crate::t(lang, "common.no_videos_yet")} }
            }
            for video in videos.iter() {
                div {
                    key: "{video.id}",
                    class: "grid_tile",
                    onclick: {
                        let id = video.id.clone();
                        let username = video.user.username.clone();
                        move |_| {
                            app.play(&id);
                            toasts.flash(
                                format!("{} @{username}", crate::t(lang, "toast.playing_by")),
                                Duration::from_secs(2),
                            );
                        }
                    },
                    if private {
                        div { class: "grid_tile_lock", "🔒" }
                    }
                    div { class: "grid_tile_icon", "▶" }
                    div { class: "grid_tile_meta",
                        p { class: "grid_tile_text", "{video.description}" }
                        span { "❤️ " {format_count(video.likes)} }
                        span { " @{video.user.username}" }
                    }
                }
            }
        }
    }
}
