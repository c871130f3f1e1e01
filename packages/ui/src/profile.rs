use dioxus::prelude::*;
use feed::format::format_grouped;
use feed::profile::{ProfileForm, ProfileTab};
use feed::Video;
use std::time::Duration;
use tracing::debug;

use crate::Lang;

const PROFILE_CSS: Asset = asset!("/assets/styling/profile.css");

#[component]
fn ProfileEditDialog(on_close: EventHandler<()>) -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    let initial = app.profile.read().form();
    let mut display_name = use_signal(|| initial.display_name.clone());
    let mut bio = use_signal(|| initial.bio.clone());
    let mut website = use_signal(|| initial.website.clone());
    let mut location = use_signal(|| initial.location.clone());

    let save = move |_| {
        let form = ProfileForm {
            display_name: display_name(),
            bio: bio(),
            website: website(),
            location: location(),
        };
        let mut profile = app.profile;
        let result = form.apply(&mut profile.write());
        match result {
            Ok(()) => {
                toasts.success(crate::t(lang, "toast.profile_saved"), Duration::from_secs(2));
                on_close.call(());
            }
            Err(rejection) => {
                debug!("profile.save: {rejection}");
                toasts.error(rejection.to_string());
            }
        }
    };

    rsx! {
        div { class: "modal_root",
            div { class: "modal_backdrop", onclick: move |_| on_close.call(()) }
            div { class: "modal",
                div { class: "modal_header",
                    h3 { {crate::t(lang, "profile.edit")} }
                }
                label { {crate::t(lang, "profile.display_name")} }
                input { value: "{display_name}", oninput: move |e| display_name.set(e.value()) }
                label { {crate::t(lang, "profile.bio")} }
                textarea { value: "{bio}", oninput: move |e| bio.set(e.value()), rows: 3 }
                label { {crate::t(lang, "profile.website")} }
                input { value: "{website}", oninput: move |e| website.set(e.value()) }
                label { {crate::t(lang, "profile.location")} }
                input { value: "{location}", oninput: move |e| location.set(e.value()) }
                div { class: "modal_actions",
                    button { class: "btn", onclick: move |_| on_close.call(()), {crate::t(lang, "common.cancel")} }
                    button { class: "btn primary", onclick: save, {crate::t(lang, "common.save")} }
                }
            }
        }
    }
}

#[component]
pub fn ProfilePage() -> Element {
    let app = crate::use_app();
    let lang_signal = crate::use_lang();
    let lang = lang_signal();
    let mut tab = use_signal(ProfileTab::default);
    let mut editing = use_signal(|| false);

    let profile = app.profile.read().clone();
    let stats = *app.stats.read();
    let (own, liked): (Vec<Video>, Vec<Video>) = {
        let catalog = app.catalog.read();
        (
            catalog.videos_by(&profile.id).cloned().collect(),
            catalog.liked_videos().cloned().collect(),
        )
    };

    rsx! {
        document::Link { rel: "stylesheet", href: PROFILE_CSS }

        div { class: "page profile",
            div { class: "profile_header",
                div { class: "profile_avatar", "{profile.avatar}" }
                h1 { class: "profile_name",
                    "{profile.display_name}"
                    if profile.verified {
                        span { class: "verified", " ✓" }
                    }
                }
                p { class: "hint", "@{profile.username}" }

                div { class: "profile_stats",
                    div { class: "stat",
                        div { class: "stat_value", {format_grouped(stats.following)} }
                        div { class: "hint", {crate::t(lang, "profile.following")} }
                    }
                    div { class: "stat",
                        div { class: "stat_value", {format_grouped(stats.followers)} }
                        div { class: "hint", {crate::t(lang, "profile.followers")} }
                    }
                    div { class: "stat",
                        div { class: "stat_value", {format_grouped(stats.total_likes)} }
                        div { class: "hint", {crate::t(lang, "profile.likes")} }
                    }
                }

                if !profile.bio.is_empty() {
                    p { class: "profile_bio", "{profile.bio}" }
                }
                div { class: "profile_meta hint",
                    if !profile.location.is_empty() {
                        span { "📍 {profile.location}" }
                    }
                    if !profile.website.is_empty() {
                        a { href: "{profile.website}", target: "_blank", "🔗 {profile.website}" }
                    }
                    if !profile.join_date.is_empty() {
                        span { "📅 " {crate::t(lang, "profile.joined")} " {profile.join_date}" }
                    }
                }

                div { class: "cta_row",
                    button { class: "btn", onclick: move |_| editing.set(true), {crate::t(lang, "profile.edit")} }
                    button {
                        class: "btn",
                        "aria-label": crate::t(lang, "lang.label"),
                        onclick: move |_| {
                            let next = match lang {
                                Lang::En => Lang::Fr,
                                Lang::Fr => Lang::En,
                            };
                            crate::set_lang(lang_signal, next);
                        },
                        "🌐 " {lang.code()}
                    }
                }
            }

            div { class: "tabs",
                button {
                    class: if tab() == ProfileTab::Videos { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(ProfileTab::Videos),
                    {crate::t(lang, "profile.tab.videos")}
                }
                button {
                    class: if tab() == ProfileTab::Liked { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(ProfileTab::Liked),
                    {crate::t(lang, "profile.tab.liked")}
                }
                button {
                    class: if tab() == ProfileTab::Private { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(ProfileTab::Private),
                    {crate::t(lang, "profile.tab.private")}
                }
            }

            match tab() {
                ProfileTab::Videos => rsx! { crate::grid::VideoGrid { videos: own } },
                ProfileTab::Liked => rsx! { crate::grid::VideoGrid { videos: liked } },
                ProfileTab::Private => rsx! { crate::grid::VideoGrid { videos: Vec::new(), private: true } },
            }

            if editing() {
                ProfileEditDialog { on_close: move |_| editing.set(false) }
            }
        }
    }
}
