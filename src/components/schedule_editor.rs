//! Schedule Editor Component
//!
//! Frequency/hour/minute selectors with a save button. Shared by the
//! checklist and settings pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ScheduleForm};
use crate::browser;
use crate::checklist::schedule_failure_message;
use crate::context::use_app_context;
use crate::models::{hour_options, minute_options, Schedule, FREQUENCIES};

/// Schedule selectors; pre-set from the first schedule `initial` yields
#[component]
pub fn ScheduleEditor(#[prop(into)] initial: Signal<Option<Schedule>>) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(ScheduleForm::default());

    Effect::new(move |seeded: Option<bool>| {
        let seeded = seeded.unwrap_or(false);
        match api::preset_form(seeded, initial.get().as_ref()) {
            Some(preset) => {
                form.set(preset);
                true
            }
            None => seeded,
        }
    });

    let save = move |_| {
        let schedule = match form.get_untracked().to_schedule() {
            Ok(schedule) => schedule,
            Err(msg) => {
                browser::alert(&msg);
                return;
            }
        };
        let Some(guard) = ctx.begin("schedule") else { return };
        let client = ctx.client();
        spawn_local(async move {
            let _guard = guard;
            match api::update_schedule(&client, &schedule).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[SCHEDULE] Updated to {:?}", schedule).into());
                    ctx.show_success();
                }
                Err(e) => browser::alert(&schedule_failure_message(&e)),
            }
        });
    };

    view! {
        <div class="schedule-editor">
            <label for="frequency-select">"Frequency"</label>
            <select
                id="frequency-select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.frequency = value);
                }
            >
                {FREQUENCIES.iter().map(|(value, label)| {
                    let value = *value;
                    view! {
                        <option value=value prop:selected=move || form.with(|f| f.frequency == value)>
                            {*label}
                        </option>
                    }
                }).collect_view()}
            </select>

            <label for="hour-select">"At"</label>
            <select
                id="hour-select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.hour = value);
                }
            >
                {hour_options().into_iter().map(|hour| {
                    let current = hour.clone();
                    let label = hour.clone();
                    view! {
                        <option value=hour prop:selected=move || form.with(|f| f.hour == current)>
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
            ":"
            <select
                id="minute-select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.minute = value);
                }
            >
                {minute_options().into_iter().map(|minute| {
                    let current = minute.clone();
                    let label = minute.clone();
                    view! {
                        <option value=minute prop:selected=move || form.with(|f| f.minute == current)>
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>

            <button id="save-frequency" type="button" on:click=save>"Save schedule"</button>
        </div>
    }
}
