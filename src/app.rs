//! check42 Console App
//!
//! One wasm binary serves the login, checklist and settings pages; the
//! page is picked from the URL path at mount time.

use leptos::prelude::*;
use leptos_banner::create_banner_signals;

use crate::api::ApiClient;
use crate::browser;
use crate::components::{ChecklistPage, LoginPage, NavBar, SettingsPage};
use crate::config::Config;
use crate::context::AppContext;
use crate::session::{LocalTokenStore, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Checklist,
    Settings,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.contains("/checks") {
            Page::Checklist
        } else if path.contains("/settings") {
            Page::Settings
        } else {
            Page::Login
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            Page::Login => "/login/login.html",
            Page::Checklist => "/checks/checks.html",
            Page::Settings => "/settings/settings.html",
        }
    }
}

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Token is read once per page load
    let session = Session::load(&LocalTokenStore);
    provide_context(AppContext::new(ApiClient::new(&config, &session), create_banner_signals()));

    let page = Page::from_path(&browser::current_path());
    web_sys::console::log_1(
        &format!("[APP] Mounting {:?} page, token present: {}", page, session.token().is_some()).into(),
    );

    view! {
        <div class="app-layout">
            {match page {
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::Checklist => view! {
                    <NavBar current=page />
                    <ChecklistPage />
                }.into_any(),
                Page::Settings => view! {
                    <NavBar current=page />
                    <SettingsPage />
                }.into_any(),
            }}
        </div>
    }
}
