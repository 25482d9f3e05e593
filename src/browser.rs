//! Browser Helpers
//!
//! Thin wrappers over `window` for alerts, navigation and the current path.

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn navigate(url: &str) {
    web_sys::console::log_1(&format!("[NAV] -> {}", url).into());
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(url);
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_default()
}
