use dioxus::prelude::*;
use feed::upload::{check_file, PreviewSlot, SelectedFile, UploadSubmission, UrlRevoker};
use std::time::Duration;
use tracing::{info, warn};

const FILE_INPUT_ID: &str = "upload-file-input";
const SIMULATED_UPLOAD: Duration = Duration::from_secs(2);

/// Revokes `blob:` preview URLs in the page that created them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRevoker;

impl UrlRevoker for BrowserRevoker {
    #[cfg(target_arch = "wasm32")]
    fn revoke(&self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            warn!("upload.revoke: {e:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn revoke(&self, url: &str) {
        let _ = document::eval(&revoke_script(url));
    }
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn revoke_script(url: &str) -> String {
    format!("URL.revokeObjectURL({}); return \"\";", js_string(url))
}

fn selected_file_script() -> String {
    format!(
        r#"const input = document.getElementById("{FILE_INPUT_ID}");
const f = input && input.files && input.files[0];
if (!f) return null;
return {{ name: f.name, mime_type: f.type || "", size_bytes: f.size }};"#
    )
}

fn object_url_script() -> String {
    format!(
        r#"const input = document.getElementById("{FILE_INPUT_ID}");
const f = input && input.files && input.files[0];
return f ? URL.createObjectURL(f) : null;"#
    )
}

fn clear_input_script() -> String {
    format!(
        r#"const input = document.getElementById("{FILE_INPUT_ID}");
if (input) {{ input.value = ""; }}
return "";"#
    )
}

async fn read_selected_file() -> Option<SelectedFile> {
    let value = document::eval(&selected_file_script()).await.ok()?;
    if value.is_null() {
        return None;
    }
    serde_json::from_value(value)
        .map_err(|e| warn!("upload.read_selected_file: {e}"))
        .ok()
}

async fn create_object_url() -> Option<String> {
    let value = document::eval(&object_url_script()).await.ok()?;
    value.as_str().map(str::to_string)
}

/// Pick a clip, caption it and publish it to the top of the feed.
#[component]
pub fn UploadModal() -> Element {
    let app = crate::use_app();
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    let mut selected = use_signal(|| None::<SelectedFile>);
    let mut preview = use_signal(|| PreviewSlot::new(BrowserRevoker));
    let mut description = use_signal(String::new);
    let mut music = use_signal(String::new);
    let mut uploading = use_signal(|| false);

    use_drop(move || preview.write().release());

    let on_file = move |_| {
        spawn(async move {
            let Some(file) = read_selected_file().await else {
                return;
            };
            let limit = app.config.read().max_upload_bytes;
            if let Err(rejection) = check_file(&file, limit) {
                warn!("upload.select: rejected {}: {rejection}", file.name);
                toasts.error(rejection.to_string());
                let _ = document::eval(&clear_input_script()).await;
                return;
            }
            if let Some(url) = create_object_url().await {
                preview.write().replace(url);
                selected.set(Some(file));
            }
        });
    };

    let close = move |_| {
        preview.write().release();
        let mut shell = app.shell;
        shell.write().close_upload();
    };

    let on_post = move |_| {
        let submission = match UploadSubmission::prepare(
            selected.read().as_ref(),
            &description(),
            &music(),
        ) {
            Ok(submission) => submission,
            Err(rejection) => {
                toasts.error(rejection.to_string());
                return;
            }
        };

        uploading.set(true);
        spawn(async move {
            crate::timer::sleep(SIMULATED_UPLOAD).await;
            let Some(src) = preview.write().commit() else {
                uploading.set(false);
                toasts.error(crate::t(lang, "upload.failed"));
                return;
            };

            let viewer = app.viewer.read().clone();
            let mut catalog = app.catalog;
            let id = catalog.write().next_video_id();
            let video = submission.into_video(id.clone(), src, &viewer);
            if !catalog.write().publish(video) {
                uploading.set(false);
                toasts.error(crate::t(lang, "upload.failed"));
                return;
            }

            info!("upload.publish: video_id={}", id);
            let len = catalog.read().len();
            app.nav.reset(len);
            let mut shell = app.shell;
            shell.write().after_publish();
            toasts.success(crate::t(lang, "upload.success"), Duration::from_secs(2));
        });
    };

    let preview_url = preview.read().url().map(str::to_string);

    rsx! {
        div { class: "modal_root",
            div { class: "modal_backdrop", onclick: close }
            div { class: "modal",
                div { class: "modal_header",
                    h3 { {crate::t(lang, "upload.title")} }
                    button { class: "modal_close", onclick: close, "✕" }
                }

                if let Some(url) = preview_url {
                    div { class: "upload_preview",
                        video { src: "{url}", controls: true, playsinline: true }
                        if let Some(file) = selected() {
                            p { class: "hint", "{file.name}" }
                        }
                    }
                } else {
                    label { class: "upload_drop", r#for: FILE_INPUT_ID,
                        div { class: "upload_icon", "⬆" }
                        p { {crate::t(lang, "upload.pick")} }
                        p { class: "hint", {crate::t(lang, "upload.limits")} }
                    }
                }
                input {
                    id: FILE_INPUT_ID,
                    class: "upload_input",
                    r#type: "file",
                    accept: "video/*",
                    onchange: on_file,
                }

                label { {crate::t(lang, "upload.description")} }
                textarea {
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                    placeholder: crate::t(lang, "upload.description_ph"),
                    rows: 3,
                }
                label { {crate::t(lang, "upload.music")} }
                input {
                    value: "{music}",
                    oninput: move |e| music.set(e.value()),
                    placeholder: crate::t(lang, "upload.music_ph"),
                }

                div { class: "modal_actions",
                    button { class: "btn", onclick: close, {crate::t(lang, "common.cancel")} }
                    button {
                        class: "btn primary",
                        disabled: uploading(),
                        onclick: on_post,
                        if uploading() {
                            {crate::t(lang, "upload.posting")}
                        } else {
                            {crate::t(lang, "upload.post")}
                        }
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
    fn revoke_script_quotes_the_url() {
        assert_eq!(
            revoke_script("blob:http://x/\"1\""),
            r#"URL.revokeObjectURL("blob:http://x/\"1\""); return "";"#
        );
    }

    #[test]
    fn file_scripts_read_the_upload_input() {
        assert!(selected_file_script().contains(FILE_INPUT_ID));
        assert!(object_url_script().contains("URL.createObjectURL(f)"));
    }

    #[test]
    fn selected_file_payload_deserializes() {
        let value = serde_json::json!({
            "name": "clip.mp4",
            "mime_type": "video/mp4",
            "size_bytes": 2048
        });
        let file: SelectedFile = serde_json::from_value(value).unwrap();
        assert_eq!(file.size_bytes, 2048);
    }
}
