use dioxus::prelude::*;
use feed::Tab;

fn icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "⌂",
        Tab::Discover => "🔍",
        Tab::Create => "+",
        Tab::Inbox => "💬",
        Tab::Profile => "👤",
    }
}

#[component]
pub fn BottomNav(active: Tab) -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();

    rsx! {
        nav { class: "bottom_nav",
            for tab in Tab::ALL {
                if tab == Tab::Create {
                    button {
                        key: "{tab:?}",
                        class: "bottom_nav_create",
                        "aria-label": crate::t(lang, tab.label_key()),
                        onclick: move |_| {
                            let mut shell = app.shell;
                            shell.write().select_tab(tab);
                        },
                        span { class: "create_icon", {icon(tab)} }
                    }
                } else {
                    button {
                        key: "{tab:?}",
                        class: if tab == active { "bottom_nav_item active" } else { "bottom_nav_item" },
                        onclick: move |_| {
                            let mut shell = app.shell;
                            shell.write().select_tab(tab);
                        },
                        span { class: "bottom_nav_icon", {icon(tab)} }
                        span { class: "bottom_nav_label", {crate::t(lang, tab.label_key())} }
                    }
                }
            }
        }
    }
}
