//! Console Configuration
//!
//! The deployment ships a `config.js` that sets `window.check42.apiUrl`;
//! the build-time `CHECK42_API_URL` variable is the fallback.

use wasm_bindgen::JsValue;

pub const DEFAULT_API_URL: &str = "/api";
pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub request_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// First non-blank source wins: page global, build env, default
    pub fn resolve(from_window: Option<String>, from_env: Option<&str>) -> Self {
        let api_url = from_window
            .as_deref()
            .into_iter()
            .chain(from_env)
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        Self { api_url, ..Self::default() }
    }

    pub fn from_window() -> Self {
        let config = Self::resolve(window_api_url(), option_env!("CHECK42_API_URL"));
        web_sys::console::log_1(&format!("[CONFIG] API base URL: {}", config.api_url).into());
        config
    }
}

/// `window.check42.apiUrl`, if the page defines it
fn window_api_url() -> Option<String> {
    let window = web_sys::window()?;
    let global = js_sys::Reflect::get(&window, &JsValue::from_str("check42")).ok()?;
    if global.is_undefined() || global.is_null() {
        return None;
    }
    js_sys::Reflect::get(&global, &JsValue::from_str("apiUrl")).ok()?.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_value_wins() {
        let config = Config::resolve(Some("https://a.example/prod/".into()), Some("https://b.example"));
        assert_eq!(config.api_url, "https://a.example/prod");
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_blank_window_falls_back_to_env() {
        let config = Config::resolve(Some("  ".into()), Some("https://b.example"));
        assert_eq!(config.api_url, "https://b.example");
    }

    #[test]
    fn test_default() {
        assert_eq!(Config::resolve(None, None), Config::default());
    }
}
