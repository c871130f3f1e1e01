use dioxus::prelude::*;
use feed::discover::{DiscoverTab, Difficulty};
use std::time::Duration;

const DISCOVER_CSS: Asset = asset!("/assets/styling/discover.css");

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "badge badge_easy",
        Difficulty::Medium => "badge badge_medium",
        Difficulty::Hard => "badge badge_hard",
    }
}

#[component]
pub fn DiscoverPage() -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let mut query = use_signal(String::new);
    let mut tab = use_signal(DiscoverTab::default);

    let discover = app.discover.read().clone();

    let run_search = move || {
        let q = query();
        if q.trim().is_empty() {
            return;
        }
        let mut shell = app.shell;
        shell.write().open_search(q.trim().to_string());
    };

    let open_tag = move |tag: String| {
        let mut shell = app.shell;
        shell.write().open_hashtag(&tag);
    };

    let show_user = move |username: String| {
        toasts.flash(
            format!("{} @{username}", crate::t(lang, "toast.viewing_profile")),
            Duration::from_secs(2),
        );
    };

    rsx! {
        document::Link { rel: "stylesheet", href: DISCOVER_CSS }

        div { class: "page discover",
            div { class: "page_header sticky",
                div { class: "search_row",
                    input {
                        class: "search_input",
                        value: "{query}",
                        placeholder: crate::t(lang, "search.placeholder"),
                        oninput: move |e| query.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                run_search();
                            }
                        },
                    }
                    button { class: "btn primary", onclick: move |_| run_search(),
                        {crate::t(lang, "search.button")}
                    }
                }
                div { class: "tabs",
                    for item in DiscoverTab::ALL {
                        button {
                            key: "{item:?}",
                            class: if tab() == item { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(item),
                            {crate::t(lang, item.label_key())}
                        }
                    }
                }
            }

            match tab() {
                DiscoverTab::Trending => rsx! {
                    section { class: "panel",
                        h2 { "🔥 " {crate::t(lang, "discover.challenges")} }
                        for challenge in discover.challenges.iter() {
                            div { key: "{challenge.name}", class: "challenge",
                                div { class: "challenge_head",
                                    h4 { "{challenge.name}" }
                                    span { class: difficulty_class(challenge.difficulty),
                                        {crate::t(lang, &format!("discover.difficulty.{}", challenge.difficulty.as_str()))}
                                    }
                                }
                                p { class: "hint", "{challenge.description}" }
                                div { class: "challenge_foot",
                                    span {
                                        class: "link",
                                        onclick: {
                                            let tag = challenge.hashtag.clone();
                                            move |_| open_tag(tag.clone())
                                        },
                                        "{challenge.hashtag}"
                                    }
                                    span { class: "hint",
                                        "{challenge.participants} " {crate::t(lang, "discover.participants")}
                                    }
                                }
                            }
                        }
                    }
                    section { class: "stats_grid",
                        div { class: "stat",
                            div { class: "stat_value", "12.5M" }
                            div { class: "hint", {crate::t(lang, "discover.videos_today")} }
                        }
                        div { class: "stat",
                            div { class: "stat_value", "89K" }
                            div { class: "hint", {crate::t(lang, "discover.new_creators")} }
                        }
                    }
                },
                DiscoverTab::Hashtags => rsx! {
                    for hashtag in discover.hashtags.iter() {
                        div {
                            key: "{hashtag.tag}",
                            class: "row clickable",
                            onclick: {
                                let tag = hashtag.tag.clone();
                                move |_| open_tag(tag.clone())
                            },
                            div { class: "row_icon", "#" }
                            div { class: "row_main",
                                div { class: "row_title", "#{hashtag.tag}" }
                                div { class: "hint", "{hashtag.count} " {crate::t(lang, "discover.videos")} }
                            }
                            if hashtag.trending {
                                span { class: "badge badge_trending", {crate::t(lang, "discover.trending")} }
                            }
                        }
                    }
                },
                DiscoverTab::Sounds => rsx! {
                    for sound in discover.sounds.iter() {
                        div {
                            key: "{sound.id}",
                            class: "row clickable",
                            onclick: move |_| toasts.flash(crate::t(lang, "toast.sound_soon"), Duration::from_secs(2)),
                            div { class: "row_icon", "♪" }
                            div { class: "row_main",
                                div { class: "row_title", "{sound.title}" }
                                div { class: "hint", {crate::t(lang, "discover.by")} " {sound.artist}" }
                            }
                            div { class: "row_side",
                                div { "{sound.uses}" }
                                div { class: "hint", {crate::t(lang, "discover.uses")} }
                            }
                        }
                    }
                },
                DiscoverTab::Creators => rsx! {
                    for creator in discover.creators.iter() {
                        div {
                            key: "{creator.username}",
                            class: "row clickable",
                            onclick: {
                                let username = creator.username.clone();
                                move |_| show_user(username.clone())
                            },
                            div { class: "row_icon avatar", "{creator.avatar}" }
                            div { class: "row_main",
                                div { class: "row_title",
                                    "@{creator.username}"
                                    if creator.verified {
                                        span { class: "verified", " ★" }
                                    }
                                }
                                div { class: "hint", "{creator.followers} " {crate::t(lang, "discover.followers")} }
                            }
                            button { class: "btn", {crate::t(lang, "reel.follow")} }
                        }
                    }
                },
            }
        }
    }
}
