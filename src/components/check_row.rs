//! Check Row Component
//!
//! One checklist item with its toggle switch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::decode_ack;
use crate::browser;
use crate::checklist::{toggle_failure_message, toggle_for, CheckRowView, ToggleControl, ToggleOutcome};
use crate::context::use_app_context;
use crate::store::{store_commit_enabled, store_items_untracked, ChecklistStore};

/// Checklist row; the switch is disabled while its own request runs
#[component]
pub fn CheckRow(row: CheckRowView, store: ChecklistStore) -> impl IntoView {
    let ctx = use_app_context();
    let control = RwSignal::new(ToggleControl::new(row.checked));
    let id = row.id.clone();
    let dom_id = row.dom_id.clone();

    let on_change = move |ev: web_sys::Event| {
        let requested = event_target_checked(&ev);
        let Some(request) = toggle_for(&store_items_untracked(&store), &id, requested) else {
            return;
        };
        let mut started = false;
        control.update(|c| started = c.begin(requested));
        if !started {
            return;
        }
        let Some(guard) = ctx.begin(dom_id.clone()) else {
            control.update(|c| {
                c.finish(false);
            });
            return;
        };

        let client = ctx.client();
        let id = id.clone();
        spawn_local(async move {
            let _guard = guard;
            let result = match client.execute(&request).await {
                Ok(body) => decode_ack(&body),
                Err(e) => Err(e),
            };
            let mut outcome = ToggleOutcome::RolledBack(!requested);
            control.update(|c| outcome = c.finish(result.is_ok()));

            match result {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[CHECKS] {} -> {:?}", id, outcome).into());
                    store_commit_enabled(&store, &id, requested);
                    ctx.show_success();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[CHECKS] toggle {} failed: {}", id, e).into());
                    browser::alert(&toggle_failure_message(&e));
                }
            }
        });
    };

    view! {
        <div class="item">
            <div class="item-content">
                <div class="item-title">{row.title}</div>
                <div class="item-description">{row.description}</div>
            </div>
            <div class="switch-container">
                <label class="switch">
                    <input
                        type="checkbox"
                        id=row.dom_id
                        prop:checked=move || control.get().checked
                        prop:disabled=move || control.get().disabled
                        on:change=on_change
                    />
                    <span class="slider"></span>
                </label>
            </div>
        </div>
    }
}
