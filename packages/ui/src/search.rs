use dioxus::prelude::*;
use feed::discover::SearchTab;

use crate::grid::VideoGrid;

/// Search overlay. The query lives in the shell so hashtag links anywhere
/// can open it pre-filled.
#[component]
pub fn SearchPage(query: String) -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();
    let mut tab = use_signal(SearchTab::default);

    let results = app.discover.read().search(&query, &app.catalog.read());
    let blank = query.trim().is_empty();
    let recent = app.discover.read().recent_searches.clone();
    let trending: Vec<String> = app
        .discover
        .read()
        .trending_hashtags()
        .map(|h| h.tag.clone())
        .collect();

    let set_query = move |q: String| {
        let mut shell = app.shell;
        shell.write().set_query(q);
    };

    rsx! {
        div { class: "page search",
            div { class: "page_header sticky",
                div { class: "search_row",
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let mut shell = app.shell;
                            shell.write().close_search();
                        },
                        "←"
                    }
                    input {
                        class: "search_input",
                        value: "{query}",
                        placeholder: crate::t(lang, "search.placeholder"),
                        oninput: move |e| set_query(e.value()),
                    }
                }
                if !blank {
                    div { class: "tabs",
                        for item in SearchTab::ALL {
                            button {
                                key: "{item:?}",
                                class: if tab() == item { "tab active" } else { "tab" },
                                onclick: move |_| tab.set(item),
                                {crate::t(lang, item.label_key())}
                            }
                        }
                    }
                }
            }

            if blank {
                section { class: "panel",
                    h2 { "🕘 " {crate::t(lang, "search.recent")} }
                    for entry in recent {
                        div {
                            key: "{entry}",
                            class: "row clickable",
                            onclick: {
                                let entry = entry.clone();
                                move |_| set_query(entry.clone())
                            },
                            "{entry}"
                        }
                    }
                }
                section { class: "panel",
                    h2 { "📈 " {crate::t(lang, "search.trending")} }
                    div { class: "chips",
                        for tag in trending {
                            button {
                                key: "{tag}",
                                class: "chip",
                                onclick: {
                                    let tag = tag.clone();
                                    move |_| {
                                        let mut shell = app.shell;
                                        shell.write().open_hashtag(&tag);
                                    }
                                },
                                "#{tag}"
                            }
                        }
                    }
                }
            } else if results.is_empty() {
                p { class: "hint empty", {crate::t(lang, "search.no_results")} " \"{query}\"" }
            } else {
                if matches!(tab(), SearchTab::All | SearchTab::Videos) && !results.videos.is_empty() {
                    section { class: "panel",
                        h2 { {crate::t(lang, "search.tab.videos")} }
                        VideoGrid { videos: results.videos.clone() }
                    }
                }
                if matches!(tab(), SearchTab::All | SearchTab::Users) && !results.users.is_empty() {
                    section { class: "panel",
                        h2 { {crate::t(lang, "search.tab.users")} }
                        for user in results.users.iter() {
                            div { key: "{user.username}", class: "row",
                                div { class: "row_icon avatar", "{user.avatar}" }
                                div { class: "row_main",
                                    div { class: "row_title", "@{user.username}" }
                                    div { class: "hint", "{user.bio}" }
                                }
                                div { class: "row_side hint",
                                    "{user.followers} " {crate::t(lang, "discover.followers")}
                                }
                            }
                        }
                    }
                }
                if matches!(tab(), SearchTab::All | SearchTab::Hashtags) && !results.hashtags.is_empty() {
                    section { class: "panel",
                        h2 { {crate::t(lang, "search.tab.hashtags")} }
                        for hashtag in results.hashtags.iter() {
                            div {
                                key: "{hashtag.tag}",
                                class: "row clickable",
                                onclick: {
                                    let tag = hashtag.tag.clone();
                                    move |_| {
                                        let mut shell = app.shell;
                                        shell.write().open_hashtag(&tag);
                                    }
                                },
                                div { class: "row_icon", "#" }
                                div { class: "row_main",
                                    div { class: "row_title", "#{hashtag.tag}" }
                                    div { class: "hint", "{hashtag.count} " {crate::t(lang, "discover.videos")} }
                                }
                            }
                        }
                    }
                }
                if matches!(tab(), SearchTab::All | SearchTab::Sounds) && !results.sounds.is_empty() {
                    section { class: "panel",
                        h2 { {crate::t(lang, "search.tab.sounds")} }
                        for sound in results.sounds.iter() {
                            div { key: "{sound.id}", class: "row",
                                div { class: "row_icon", "♪" }
                                div { class: "row_main",
                                    div { class: "row_title", "{sound.title}" }
                                    div { class: "hint", {crate::t(lang, "discover.by")} " {sound.artist}" }
                                }
                                div { class: "row_side hint", "{sound.uses}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
