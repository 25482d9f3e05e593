//! Application Context
//!
//! Shared state provided via Leptos Context API. Components get the API
//! client, banner and in-flight tracker from here instead of reading
//! browser storage or looking up elements themselves.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_banner::BannerSignals;

use crate::api::ApiClient;
use crate::inflight::{InFlight, InFlightGuard};

/// Page-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    client: StoredValue<ApiClient>,
    inflight: StoredValue<InFlight, LocalStorage>,
    /// Success banner shared by every page
    pub banner: BannerSignals,
}

impl AppContext {
    pub fn new(client: ApiClient, banner: BannerSignals) -> Self {
        Self {
            client: StoredValue::new(client),
            inflight: StoredValue::new_local(InFlight::new()),
            banner,
        }
    }

    /// Client snapshot for a spawned request
    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    /// Claim the in-flight slot for `key`
    pub fn begin(&self, key: impl Into<String>) -> Option<InFlightGuard> {
        let key = key.into();
        let guard = self.inflight.with_value(|inflight| inflight.try_begin(key.clone()));
        if guard.is_none() {
            web_sys::console::log_1(&format!("[INFLIGHT] dropping duplicate request for {}", key).into());
        }
        guard
    }

    pub fn show_success(&self) {
        leptos_banner::show_banner(&self.banner);
    }

    pub fn show_message(&self, text: impl Into<String>) {
        leptos_banner::show_banner_with_text(&self.banner, text);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
