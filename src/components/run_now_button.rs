//! Run Now Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::checklist::RUN_SUCCESS_TEXT;
use crate::context::use_app_context;

/// Triggers an on-demand run; swaps in a processing button until it completes
#[component]
pub fn RunNowButton() -> impl IntoView {
    let ctx = use_app_context();
    let (running, set_running) = signal(false);

    let run = move |_| {
        let Some(guard) = ctx.begin("run-now") else { return };
        set_running.set(true);
        let client = ctx.client();
        spawn_local(async move {
            let _guard = guard;
            let text = match api::run_checks(&client).await {
                Ok(()) => RUN_SUCCESS_TEXT.to_string(),
                Err(e) => e.raw_text(),
            };
            set_running.set(false);
            ctx.show_message(text);
        });
    };

    view! {
        <button
            id="run-now"
            type="button"
            class="run-button"
            style:display=move || if running.get() { "none" } else { "inline-block" }
            on:click=run
        >
            "Run checks now"
        </button>
        <button
            id="processing-button"
            type="button"
            class="run-button processing"
            disabled=true
            style:display=move || if running.get() { "inline-block" } else { "none" }
        >
            "Processing..."
        </button>
    }
}
