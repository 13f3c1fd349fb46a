use web_sys::window;

// User-facing notifications. The chat manager reports its own failures
// through these; session errors are rendered inline by the screens.

pub fn notify_success(message: &str) {
    log::info!("✅ {}", message);
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn notify_error(message: &str) {
    log::error!("❌ {}", message);
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}
