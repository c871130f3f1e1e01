use dioxus::prelude::*;
use feed::VideoId;

/// Bottom sheet listing a video's comments with a composer.
#[component]
pub fn CommentSheet(video_id: VideoId) -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();
    let mut draft = use_signal(String::new);

    // Keep the page underneath from scrolling while the sheet is open.
    use_hook(|| {
        spawn(async move {
            let _ = document::eval(r#"document.body.style.overflow = "hidden"; return "";"#).await;
        });
    });
    use_drop(|| {
        let _ = document::eval(r#"document.body.style.overflow = ""; return "";"#);
    });

    let comments = app.catalog.read().comments_for(&video_id).to_vec();
    let count = comments.len();

    let close = move |_| {
        let mut shell = app.shell;
        shell.write().close_comments();
    };

    let target = video_id.clone();
    let submit = move |e: FormEvent| {
        e.prevent_default();
        let viewer = app.viewer.read().clone();
        let mut catalog = app.catalog;
        let added = catalog.write().add_comment(Some(&target), &draft(), &viewer);
        if added.is_some() {
            draft.set(String::new());
        }
    };

    rsx! {
        div { class: "sheet_root",
            div { class: "sheet_backdrop", onclick: close }
            div { class: "sheet",
                div { class: "sheet_header",
                    h3 { "{count} " {crate::t(lang, "comments.title")} }
                    button { class: "sheet_close", onclick: close, "✕" }
                }
                div { class: "sheet_body",
                    if comments.is_empty() {
                        p { class: "hint", {crate::t(lang, "comments.none")} }
                    }
                    for c in comments.iter() {
                        div { key: "{c.id}", class: "comment",
                            div { class: "comment_avatar", "{c.user.avatar}" }
                            div { class: "comment_main",
                                div { class: "comment_meta",
                                    span { class: "comment_user", "@{c.user.username}" }
                                    span { class: "hint", "{c.timestamp}" }
                                }
                                p { class: "comment_text", "{c.text}" }
                            }
                        }
                    }
                }
                form { class: "sheet_composer", onsubmit: submit,
                    input {
                        value: "{draft}",
                        oninput: move |e| draft.set(e.value()),
                        placeholder: crate::t(lang, "comments.placeholder"),
                    }
                    button {
                        class: "btn primary",
                        r#type: "submit",
                        disabled: draft().trim().is_empty(),
                        {crate::t(lang, "comments.post")}
                    }
                }
            }
        }
    }
}
