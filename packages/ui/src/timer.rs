use std::time::Duration;

/// Sleep on whichever clock the platform has: `setTimeout` in the browser,
/// the tokio timer under the desktop webview.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
