//! Login Page
//!
//! Exchanges credentials for a session token, stores it and moves on to
//! the checklist page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::app::Page;
use crate::browser;
use crate::context::use_app_context;
use crate::session::{LocalTokenStore, TokenStore};

/// What the page does once the login request settles
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Redirect(&'static str),
    Failed(String),
}

/// Persist the token on success; anything else becomes an error message
pub fn complete_login(store: &impl TokenStore, result: Result<String, ApiError>) -> LoginOutcome {
    match result.and_then(|token| store.save(&token)) {
        Ok(()) => LoginOutcome::Redirect(Page::Checklist.url()),
        Err(e) => LoginOutcome::Failed(format!("Login failed: {}", e.raw_text())),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(guard) = ctx.begin("login") else { return };
        let user = username.get_untracked();
        let pass = password.get_untracked();
        let client = ctx.client();

        spawn_local(async move {
            let _guard = guard;
            let result = api::login(&client, &user, &pass).await;
            match complete_login(&LocalTokenStore, result) {
                LoginOutcome::Redirect(url) => {
                    web_sys::console::log_1(&"[LOGIN] Login successful".into());
                    browser::navigate(url);
                }
                LoginOutcome::Failed(message) => {
                    web_sys::console::error_1(&format!("[LOGIN] {}", message).into());
                    set_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <h1>"check42"</h1>
            <form id="loginForm" on:submit=on_submit>
                <label for="username">"Username"</label>
                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit">"Log in"</button>
            </form>
            <div
                id="errorMessage"
                class="error"
                style:display=move || if error.get().is_some() { "block" } else { "none" }
            >
                {move || error.get().unwrap_or_default()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode_login;
    use crate::session::{MemoryTokenStore, Session};

    #[test]
    fn test_success_stores_token_and_redirects() {
        let store = MemoryTokenStore::default();
        let result = decode_login(r#"{"status":"success","token":"tok-9"}"#);
        assert_eq!(complete_login(&store, result), LoginOutcome::Redirect("/checks/checks.html"));
        assert_eq!(Session::load(&store).token(), Some("tok-9"));
    }

    #[test]
    fn test_rejected_login_shows_error() {
        let store = MemoryTokenStore::default();
        let result = decode_login(r#"{"status":"error","message":"Invalid credentials"}"#);
        assert_eq!(
            complete_login(&store, result),
            LoginOutcome::Failed("Login failed: Invalid credentials".into())
        );
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_transport_error_shows_raw_text() {
        let store = MemoryTokenStore::with_token("old");
        let result = Err(ApiError::Status { status: 401, body: "{\"status\":\"error\"}".into() });
        assert_eq!(
            complete_login(&store, result),
            LoginOutcome::Failed("Login failed: {\"status\":\"error\"}".into())
        );
        assert_eq!(store.load().as_deref(), Some("old"));
    }
}
