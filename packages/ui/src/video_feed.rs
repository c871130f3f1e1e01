use dioxus::core::Task;
use dioxus::prelude::*;
use feed::{CooldownTicket, FeedNavigator, NavCommand, NavKey, NavResponse};
use std::time::Duration;
use tracing::debug;

use crate::reel::VideoReel;

const VIDEO_FEED_CSS: Asset = asset!("/assets/styling/video_feed.css");

pub(crate) const FEED_ELEMENT_ID: &str = "reel-feed";

/// The wheel cool-down timer currently armed, if any.
///
/// Only the ticket that armed the slot can clear it; a timer that fires after
/// being superseded leaves the newer entry alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CooldownSlot<H> {
    armed: Option<(CooldownTicket, H)>,
}

impl<H> Default for CooldownSlot<H> {
    fn default() -> Self {
        Self { armed: None }
    }
}

impl<H: Copy> CooldownSlot<H> {
    pub(crate) fn pending(&self) -> Option<CooldownTicket> {
        self.armed.map(|(ticket, _)| ticket)
    }

    /// Returns the handle this replaces; the caller cancels it.
    pub(crate) fn arm(&mut self, ticket: CooldownTicket, handle: H) -> Option<H> {
        self.armed.replace((ticket, handle)).map(|(_, previous)| previous)
    }

    /// The timer for `ticket` ran to completion.
    pub(crate) fn fired(&mut self, ticket: CooldownTicket) -> bool {
        if self.pending() == Some(ticket) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    /// Returns the handle to cancel when `ticket` is the armed one.
    pub(crate) fn cancel(&mut self, ticket: CooldownTicket) -> Option<H> {
        match self.armed {
            Some((armed, handle)) if armed == ticket => {
                self.armed = None;
                Some(handle)
            }
            _ => None,
        }
    }
}

/// Executes the commands a [`FeedNavigator`] hands back: viewport scrolling
/// and the wheel cool-down timer.
#[derive(Clone, Copy, PartialEq)]
pub struct NavDriver {
    state: Signal<FeedNavigator>,
    cooldown: Signal<CooldownSlot<Task>>,
}

impl NavDriver {
    pub(crate) fn new(
        state: Signal<FeedNavigator>,
        cooldown: Signal<CooldownSlot<Task>>,
    ) -> Self {
        Self { state, cooldown }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.read().current_index()
    }

    pub fn is_active(&self, position: usize) -> bool {
        self.state.read().is_active(position)
    }

    pub fn start(self) {
        let mut state = self.state;
        state.write().start();
        let index = state.peek().current_index();
        if let Some(index) = index {
            scroll_feed_to(index, false);
        }
    }

    pub fn stop(self) {
        let mut state = self.state;
        let response = state.write().stop();
        self.run(response);
    }

    pub fn touch_start(self, y: f64) -> bool {
        let mut state = self.state;
        let response = state.write().touch_start(y);
        self.run(response)
    }

    pub fn touch_move(self, y: f64) -> bool {
        let mut state = self.state;
        let response = state.write().touch_move(y);
        self.run(response)
    }

    pub fn touch_end(self, y: Option<f64>) -> bool {
        let mut state = self.state;
        let response = state.write().touch_end(y);
        self.run(response)
    }

    pub fn wheel(self, delta_y: f64) -> bool {
        let mut state = self.state;
        let response = state.write().wheel(delta_y);
        self.run(response)
    }

    pub fn key(self, key: NavKey) -> bool {
        let mut state = self.state;
        let response = state.write().key(key);
        self.run(response)
    }

    pub fn jump_to(self, index: usize) {
        let mut state = self.state;
        let response = state.write().jump_to(index);
        self.run(response);
    }

    /// Re-target the feed after the sequence changed shape (e.g. a publish).
    pub fn reset(self, len: usize) {
        let mut state = self.state;
        let response = state.write().reset(len);
        self.run(response);
    }

    /// Returns whether the platform default must be suppressed.
    fn run(self, response: NavResponse) -> bool {
        for command in response.commands {
            match command {
                NavCommand::ScrollTo { index } => scroll_feed_to(index, true),
                NavCommand::ArmCooldown { ticket, after } => self.arm(ticket, after),
                NavCommand::CancelCooldown { ticket } => self.cancel(ticket),
            }
        }
        response.suppress_default
    }

    fn arm(self, ticket: CooldownTicket, after: Duration) {
        let mut state = self.state;
        let mut cooldown = self.cooldown;
        let task = spawn(async move {
            crate::timer::sleep(after).await;
            state.write().cooldown_elapsed(ticket);
            cooldown.write().fired(ticket);
        });

        let replaced = cooldown.write().arm(ticket, task);
        if let Some(previous) = replaced {
            previous.cancel();
        }
    }

    fn cancel(self, ticket: CooldownTicket) {
        let mut cooldown = self.cooldown;
        let pending = cooldown.write().cancel(ticket);
        if let Some(task) = pending {
            debug!("video_feed.cancel_cooldown: {:?}", ticket);
            task.cancel();
        }
    }
}

const KEY_HANDLER_SLOT: &str = "__reelsFeedKeys";

/// Document-wide arrow key listener; forwards the key name over the eval
/// channel. Typing in a text field never pages the feed.
fn keyboard_script() -> String {
    format!(
        r#"if (window.{KEY_HANDLER_SLOT}) {{
  document.removeEventListener("keydown", window.{KEY_HANDLER_SLOT});
}}
window.{KEY_HANDLER_SLOT} = (e) => {{
  if (e.key !== "ArrowUp" && e.key !== "ArrowDown") return;
  const t = e.target;
  if (t && (t.tagName === "INPUT" || t.tagName === "TEXTAREA" || t.isContentEditable)) return;
  e.preventDefault();
  dioxus.send(e.key);
}};
document.addEventListener("keydown", window.{KEY_HANDLER_SLOT});"#
    )
}

fn release_keyboard_script() -> String {
    format!(
        r#"if (window.{KEY_HANDLER_SLOT}) {{
  document.removeEventListener("keydown", window.{KEY_HANDLER_SLOT});
  window.{KEY_HANDLER_SLOT} = null;
}}
return "";"#
    )
}

fn scroll_script(index: usize, smooth: bool) -> String {
    let behavior = if smooth { "smooth" } else { "instant" };
    format!(
        r#"(function(){{
  const el = document.getElementById("{FEED_ELEMENT_ID}");
  if (el) {{ el.scrollTo({{ top: {index} * el.clientHeight, behavior: "{behavior}" }}); }}
  return "";
}})()"#
    )
}

fn scroll_feed_to(index: usize, smooth: bool) {
    let js = scroll_script(index, smooth);
    spawn(async move {
        let _ = document::eval(&js).await;
    });
}

/// Full-viewport vertical pager over the catalog.
///
/// Swipes, wheel and arrow keys move one reel at a time. Input is accepted
/// from mount to unmount only.
#[component]
pub fn VideoFeed() -> Element {
    let app = crate::use_app();
    let nav = app.nav;
    let lang = crate::use_lang()();

    use_hook(|| {
        spawn(async move {
            let mut listener = document::eval(&keyboard_script());
            while let Ok(name) = listener.recv::<String>().await {
                let overlay_open = {
                    let shell = app.shell.peek();
                    shell.comments_for.is_some() || shell.upload_open
                };
                if overlay_open {
                    continue;
                }
                if let Some(key) = NavKey::from_key_name(&name) {
                    nav.key(key);
                }
            }
        })
    });
    use_drop(move || {
        nav.stop();
        let _ = document::eval(&release_keyboard_script());
    });

    let videos = app.catalog.read().videos().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: VIDEO_FEED_CSS }

        div {
            id: FEED_ELEMENT_ID,
            class: "video-feed-container",
            onmounted: move |_| nav.start(),
            ontouchstart: move |e| {
                if let Some(touch) = e.touches().first() {
                    nav.touch_start(touch.client_coordinates().y);
                }
            },
            ontouchmove: move |e| {
                if let Some(touch) = e.touches().first() {
                    if nav.touch_move(touch.client_coordinates().y) {
                        e.prevent_default();
                    }
                }
            },
            ontouchend: move |e| {
                let end = e.touches_changed().first().map(|t| t.client_coordinates().y);
                nav.touch_end(end);
            },
            onwheel: move |e| {
                if nav.wheel(e.delta().strip_units().y) {
                    e.prevent_default();
                }
            },

            if videos.is_empty() {
                div { class: "video-feed-empty", {crate::t(lang, "feed.empty")} }
            }
            for (idx, video) in videos.iter().enumerate() {
                VideoReel {
                    key: "{video.id}",
                    video: video.clone(),
                    is_active: nav.is_active(idx),
                }
            }
        }
    }
}
