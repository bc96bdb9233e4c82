//! Timer and wall-clock helpers shared by the scan pipeline and views.

/// Suspend the current future for `ms` milliseconds.
///
/// The scan sequence and the demo-form send delay are the only
/// suspension points in the app; both go through here so the two
/// launch targets share one timer surface.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Current wall-clock time as a short `HH:MM` stamp for activity
/// entries and report headers.
///
/// Web builds read the browser's local clock; native builds stamp UTC
/// (the `time` feature set carries no local-offset probing).
#[cfg(target_arch = "wasm32")]
pub fn clock_now() -> String {
    let now = js_sys::Date::new_0();
    format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clock_now() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "--:--".to_string())
}
