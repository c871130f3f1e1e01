use dioxus::core::Task;
use dioxus::prelude::*;
use feed::format::{description_segments, format_count, Segment};
use feed::{Author, Video, VideoId};
use std::time::Duration;
use tracing::debug;

const HEART_COUNT: usize = 6;
const HEART_BURST: Duration = Duration::from_secs(2);
const CONTROLS_VISIBLE: Duration = Duration::from_secs(2);

fn player_id(video_id: &VideoId) -> String {
    format!("reel-video-{video_id}")
}

/// Start or stop the `<video>` element. Resolves to whether it is playing.
fn playback_script(element_id: &str, play: bool) -> String {
    if play {
        format!(
            r#"const v = document.getElementById("{element_id}");
if (!v) return false;
try {{ await v.play(); return true; }} catch (e) {{ return false; }}"#
        )
    } else {
        format!(
            r#"const v = document.getElementById("{element_id}");
if (v) {{ v.pause(); v.currentTime = 0; }}
return false;"#
        )
    }
}

async fn set_playing(element_id: String, play: bool) -> bool {
    match document::eval(&playback_script(&element_id, play)).await {
        Ok(value) => value.as_bool().unwrap_or(false),
        Err(e) => {
            debug!("reel.set_playing: {element_id} eval failed: {e}");
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HeartSpot {
    /// Percent of the reel width.
    left: u64,
    /// Percent of the reel height.
    top: u64,
    delay_ms: u64,
}

fn heart_spots(seed: u64) -> [HeartSpot; HEART_COUNT] {
    std::array::from_fn(|i| {
        let i = i as u64;
        HeartSpot {
            left: (seed.wrapping_mul(37).wrapping_add(i * 53)) % 100,
            top: 50 + (seed.wrapping_mul(11).wrapping_add(i * 7)) % 20,
            delay_ms: i * 100,
        }
    })
}

#[component]
fn ReelPlayer(video_id: VideoId, src: String, is_active: bool) -> Element {
    let element_id = player_id(&video_id);
    let mut playing = use_signal(|| false);
    let mut muted = use_signal(|| true);
    let mut controls = use_signal(|| false);
    let mut controls_timer = use_signal(|| None::<Task>);

    let id_for_effect = element_id.clone();
    use_effect(use_reactive((&is_active,), move |(active,)| {
        let id = id_for_effect.clone();
        spawn(async move {
            playing.set(set_playing(id, active).await);
        });
    }));

    let id_for_click = element_id.clone();
    let on_tap = move |_| {
        let id = id_for_click.clone();
        let play = !playing();
        spawn(async move {
            playing.set(set_playing(id, play).await);
        });

        controls.set(true);
        let previous = controls_timer.write().take();
        if let Some(task) = previous {
            task.cancel();
        }
        controls_timer.set(Some(spawn(async move {
            crate::timer::sleep(CONTROLS_VISIBLE).await;
            controls.set(false);
        })));
    };

    let overlay_class = if controls() || !playing() {
        "reel-play-overlay visible"
    } else {
        "reel-play-overlay"
    };
    let mute_class = if controls() || !is_active {
        "reel-mute visible"
    } else {
        "reel-mute"
    };

    rsx! {
        div { class: "reel-player",
            video {
                id: "{element_id}",
                class: "video-player",
                src: "{src}",
                muted: muted(),
                r#loop: true,
                playsinline: true,
                preload: "metadata",
            }
            div { class: overlay_class, onclick: on_tap,
                if !playing() {
                    div { class: "reel-play-icon", "▶" }
                }
            }
            button {
                class: mute_class,
                onclick: move |_| muted.toggle(),
                if muted() { "🔇" } else { "🔊" }
            }
        }
    }
}

#[component]
fn ReelInfo(user: Author, description: String, music: String, is_following: bool) -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let is_own = user.id == app.viewer.read().id;

    let author = user.clone();
    let on_follow = move |_| {
        let mut catalog = app.catalog;
        let followed = catalog.write().toggle_follow(&author.id);
        if followed == Some(true) {
            toasts.flash(
                format!("{} @{}", crate::t(lang, "toast.now_following"), author.username),
                Duration::from_secs(2),
            );
        }
    };

    rsx! {
        div { class: "reel-info",
            div { class: "reel-author",
                div { class: "reel-avatar",
                    "{user.avatar}"
                    if user.verified {
                        span { class: "reel-verified", "✓" }
                    }
                }
                h3 { class: "reel-username", "@{user.username}" }
                if !is_own {
                    button {
                        class: if is_following { "btn reel-follow following" } else { "btn reel-follow" },
                        onclick: on_follow,
                        if is_following {
                            {crate::t(lang, "reel.following")}
                        } else {
                            {crate::t(lang, "reel.follow")}
                        }
                    }
                }
            }
            p { class: "reel-description",
                for (i, segment) in description_segments(&description).into_iter().enumerate() {
                    match segment {
                        Segment::Text(text) => rsx! { span { key: "{i}", "{text}" } },
                        Segment::Hashtag(tag) => rsx! {
                            span {
                                key: "{i}",
                                class: "reel-hashtag",
                                onclick: {
                                    let tag = tag.clone();
                                    move |_| {
                                        let mut shell = app.shell;
                                        shell.write().open_hashtag(&tag[1..]);
                                    }
                                },
                                "{tag}"
                            }
                        },
                        Segment::Mention(name) => rsx! { span { key: "{i}", class: "reel-mention", "{name}" } },
                    }
                }
            }
            div { class: "reel-music",
                span { class: "reel-music-note", "♪" }
                span { "{music}" }
            }
        }
    }
}

#[component]
fn ReelActions(
    video_id: VideoId,
    likes: u64,
    comments: u64,
    shares: u64,
    is_liked: bool,
    on_liked: EventHandler<()>,
) -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    let id_for_like = video_id.clone();
    let on_like = move |_| {
        let mut catalog = app.catalog;
        if catalog.write().toggle_like(&id_for_like) == Some(true) {
            on_liked.call(());
            toasts.flash(crate::t(lang, "toast.liked"), Duration::from_secs(1));
        }
    };

    let id_for_comment = video_id.clone();
    let on_comment = move |_| {
        let mut shell = app.shell;
        shell.write().open_comments(id_for_comment.clone());
    };

    let id_for_share = video_id.clone();
    let on_share = move |_| {
        let origin = app.config.read().share_origin.clone();
        let mut catalog = app.catalog;
        let Some(link) = catalog.write().record_share(&id_for_share, &origin) else {
            return;
        };
        spawn(async move {
            let js = format!(
                "try {{ await navigator.clipboard.writeText({}); }} catch (e) {{}} return \"\";",
                serde_json::to_string(&link).unwrap_or_default()
            );
            let _ = document::eval(&js).await;
        });
        toasts.flash(crate::t(lang, "toast.link_copied"), Duration::from_secs(2));
    };

    rsx! {
        div { class: "reel-actions",
            button {
                class: if is_liked { "action-button liked" } else { "action-button" },
                onclick: on_like,
                div { class: "action-icon", if is_liked { "❤️" } else { "🤍" } }
                div { class: "action-count", {format_count(likes)} }
            }
            button { class: "action-button", onclick: on_comment,
                div { class: "action-icon", "💬" }
                div { class: "action-count", {format_count(comments)} }
            }
            button { class: "action-button", onclick: on_share,
                div { class: "action-icon", "↗" }
                div { class: "action-count", {format_count(shares)} }
            }
        }
    }
}

/// One full-viewport reel: player, author and caption, action column.
#[component]
pub fn VideoReel(video: Video, is_active: bool) -> Element {
    let mut burst = use_signal(|| None::<u64>);
    let mut bursts = use_signal(|| 0_u64);

    let on_liked = move |_: ()| {
        let seed = bursts() + 1;
        bursts.set(seed);
        burst.set(Some(seed));
        spawn(async move {
            crate::timer::sleep(HEART_BURST).await;
            if burst() == Some(seed) {
                burst.set(None);
            }
        });
    };

    rsx! {
        div { id: "video-{video.id}", class: "video-reel",
            ReelPlayer { video_id: video.id.clone(), src: video.src.clone(), is_active }

            if let Some(seed) = burst() {
                div { class: "heart-burst",
                    for (i, spot) in heart_spots(seed).into_iter().enumerate() {
                        div {
                            key: "{seed}-{i}",
                            class: "floating-heart",
                            style: "left: {spot.left}%; top: {spot.top}%; animation-delay: {spot.delay_ms}ms;",
                            "❤️"
                        }
                    }
                }
            }

            div { class: "reel-info-wrap",
                ReelInfo {
                    user: video.user.clone(),
                    description: video.description.clone(),
                    music: video.music.clone(),
                    is_following: video.is_following,
                }
            }
            div { class: "reel-actions-wrap",
                ReelActions {
                    video_id: video.id.clone(),
                    likes: video.likes,
                    comments: video.comments,
                    shares: video.shares,
                    is_liked: video.is_liked,
                    on_liked,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hearts_stay_inside_the_reel() {
        for seed in [0, 1, 7, u64::MAX] {
            for spot in heart_spots(seed) {
                assert!(spot.left < 100);
                assert!((50..70).contains(&spot.top));
            }
        }
    }

    #[test]
    fn hearts_are_staggered() {
        let delays: Vec<u64> = heart_spots(3).iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
    }

    #[test]
    fn playback_script_addresses_the_player() {
        let id = player_id(&VideoId::new("42"));
        assert_eq!(id, "reel-video-42");
        assert!(playback_script(&id, true).contains("await v.play()"));
        assert!(playback_script(&id, false).contains("v.currentTime = 0"));
    }
}
