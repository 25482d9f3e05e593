//! Checklist Page
//!
//! Loads check items once on mount and renders a toggle row per item.
//! A failed load replaces the list with an inline error for the rest of
//! the page's life.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_banner::TransientBanner;
use reactive_stores::Store;

use crate::api;
use crate::checklist::load_failure_message;
use crate::components::{CheckRow, RunNowButton, ScheduleEditor};
use crate::context::use_app_context;
use crate::models::Schedule;
use crate::store::{store_load_error, store_loaded, store_rows, store_set_items, store_set_load_error, ChecklistState};

#[component]
pub fn ChecklistPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(ChecklistState::default());

    // Load items on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            match api::list_checks(&client).await {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[CHECKS] Loaded {} items", items.len()).into());
                    store_set_items(&store, items);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[CHECKS] Load failed: {}", e).into());
                    store_set_load_error(&store, load_failure_message(&e));
                }
            }
        });
    });

    view! {
        <TransientBanner banner=ctx.banner id="success-banner" />

        <h1>"Checks"</h1>

        <div class="checklist-controls">
            <ScheduleEditor initial=Signal::derive(|| None::<Schedule>) />
            <RunNowButton />
        </div>

        <div id="checklist-container">
            {move || match store_load_error(&store) {
                Some(message) => view! { <div class="error">{message}</div> }.into_any(),
                None if !store_loaded(&store) => view! { <p class="loading">"Loading..."</p> }.into_any(),
                None => view! {
                    <div class="checklist-items">
                        <For
                            each=move || store_rows(&store)
                            key=|row| row.id.clone()
                            children=move |row| view! { <CheckRow row=row store=store /> }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
