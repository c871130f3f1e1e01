use dioxus::prelude::*;
use feed::inbox::InboxTab;
use std::time::Duration;

#[component]
pub fn InboxPage() -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let mut query = use_signal(String::new);
    let mut tab = use_signal(InboxTab::default);

    let inbox = app.inbox.read().clone();
    let unread_messages = inbox.unread_message_total();
    let unread_notifications = inbox.unread_notification_count();
    let messages: Vec<_> = inbox.filter_messages(&query()).into_iter().cloned().collect();

    rsx! {
        div { class: "page inbox",
            div { class: "page_header sticky",
                h1 { {crate::t(lang, "inbox.title")} }
                input {
                    class: "search_input",
                    value: "{query}",
                    placeholder: crate::t(lang, "inbox.search_ph"),
                    oninput: move |e| query.set(e.value()),
                }
                div { class: "tabs",
                    for item in InboxTab::ALL {
                        button {
                            key: "{item:?}",
                            class: if tab() == item { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(item),
                            {crate::t(lang, item.label_key())}
                            match item {
                                InboxTab::Messages if unread_messages > 0 => rsx! {
                                    span { class: "count_badge", "{unread_messages}" }
                                },
                                InboxTab::Notifications if unread_notifications > 0 => rsx! {
                                    span { class: "count_badge", "{unread_notifications}" }
                                },
                                _ => rsx! {},
                            }
                        }
                    }
                }
            }

            match tab() {
                InboxTab::Messages => rsx! {
                    if messages.is_empty() {
                        p { class: "hint empty", {crate::t(lang, "inbox.no_messages")} }
                    }
                    for message in messages.iter() {
                        div {
                            key: "{message.id}",
                            class: "row clickable",
                            onclick: move |_| toasts.flash(crate::t(lang, "toast.opening_conversation"), Duration::from_secs(2)),
                            div { class: "row_icon avatar",
                                "{message.user.avatar}"
                                if message.is_online {
                                    span { class: "online_dot" }
                                }
                            }
                            div { class: "row_main",
                                div { class: "row_title",
                                    "@{message.user.username}"
                                    if message.user.verified {
                                        span { class: "verified", " ✓" }
                                    }
                                }
                                div { class: if message.unread_count > 0 { "preview unread" } else { "preview hint" },
                                    "{message.last_message}"
                                }
                            }
                            div { class: "row_side",
                                div { class: "hint", "{message.timestamp}" }
                                if message.unread_count > 0 {
                                    span { class: "count_badge", "{message.unread_count}" }
                                }
                            }
                        }
                    }
                },
                InboxTab::Notifications => rsx! {
                    for notification in inbox.notifications.iter() {
                        div {
                            key: "{notification.id}",
                            class: if notification.is_read { "row clickable" } else { "row clickable unread" },
                            onclick: {
                                let username = notification.user.username.clone();
                                move |_| toasts.flash(
                                    format!("{} @{username}", crate::t(lang, "toast.viewing_profile")),
                                    Duration::from_secs(2),
                                )
                            },
                            div { class: "row_icon avatar", "{notification.user.avatar}" }
                            div { class: "row_main",
                                div {
                                    span { class: "row_title", "@{notification.user.username} " }
                                    span { "{notification.content}" }
                                }
                                div { class: "hint", "{notification.timestamp}" }
                            }
                            div { class: "row_side", {notification.kind.glyph()} }
                        }
                    }
                },
                InboxTab::Archive => rsx! {
                    p { class: "hint empty", {crate::t(lang, "inbox.no_archive")} }
                },
            }
        }
    }
}
