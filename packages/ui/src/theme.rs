use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Dark palette, fonts and resets shared by every screen.
#[component]
pub fn ReelsTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: THEME_CSS } }
}
