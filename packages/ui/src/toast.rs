use dioxus::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    Error,
    Info,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Info => "toast toast_info",
            ToastKind::Success => "toast toast_success",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

/// Transient notices shown above the bottom navigation.
#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = (next_id)();
        next_id.set(id + 1);
        let toast = Toast {
            id,
            title,
            body,
            kind,
        };
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.push(toast));
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    /// Push and remove again after `after`.
    pub fn push_timed(&self, title: String, kind: ToastKind, after: Duration) {
        let id = self.push(title, None, kind);
        let this = *self;
        spawn(async move {
            crate::timer::sleep(after).await;
            this.dismiss(id);
        });
    }

    /// Short-lived info notice ("Liked!", "Link copied").
    pub fn flash(&self, title: String, after: Duration) {
        self.push_timed(title, ToastKind::Info, after);
    }

    /// Stays until dismissed.
    pub fn error(&self, title: String) {
        self.push(title, None, ToastKind::Error);
    }

    pub fn success(&self, title: String, after: Duration) {
        self.push_timed(title, ToastKind::Success, after);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = use_context_provider(|| Toasts { toasts, next_id });

    rsx! {
        {children}
        ToastViewport { toasts: ctx.toasts }
    }
}

#[component]
fn ToastViewport(toasts: Signal<Vec<Toast>>) -> Element {
    let lang = crate::use_lang()();
    let items = toasts();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items.iter() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            let mut toasts = toasts;
                            move |_| {
                                toasts.with_mut(|items| items.retain(|t| t.id != id));
                            }
                        },
                        {crate::t(lang, "toast.dismiss")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_maps_to_its_own_class() {
        assert_eq!(ToastKind::Error.class(), "toast toast_error");
        assert_eq!(ToastKind::Info.class(), "toast toast_info");
        assert_eq!(ToastKind::Success.class(), "toast toast_success");
    }
}
