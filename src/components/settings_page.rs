//! Settings Page
//!
//! Shows account settings as input placeholders and submits one field at a
//! time. Secret values are never rendered; the password only shows whether
//! one is set.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_banner::TransientBanner;
use wasm_bindgen::JsCast;

use crate::api::{self, field_update_request};
use crate::browser;
use crate::components::ScheduleEditor;
use crate::context::use_app_context;
use crate::models::Settings;

/// Editable fields as (field, label, input type)
pub const SETTING_FIELDS: &[(&str, &str, &str)] = &[
    ("subscriber", "Subscriber", "email"),
    ("sender", "Sender", "email"),
    ("password", "Password", "password"),
];

pub const PASSWORD_MASK: &str = "********";

/// Placeholder text for each settings input
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPlaceholders {
    pub subscriber: String,
    pub sender: String,
    pub password: String,
}

impl SettingsPlaceholders {
    pub fn from_settings(settings: Option<&Settings>) -> Self {
        let value_or = |value: Option<&String>, fallback: &str| {
            value
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            subscriber: value_or(settings.and_then(|s| s.subscriber.as_ref()), "No subscriber set"),
            sender: value_or(settings.and_then(|s| s.sender.as_ref()), "No sender set"),
            password: if settings.is_some_and(Settings::has_password) {
                PASSWORD_MASK.to_string()
            } else {
                "No password set".to_string()
            },
        }
    }

    pub fn for_field(&self, field: &str) -> String {
        match field {
            "subscriber" => self.subscriber.clone(),
            "sender" => self.sender.clone(),
            "password" => self.password.clone(),
            _ => String::new(),
        }
    }
}

/// `data-field` of the clicked update button
fn data_field(ev: &web_sys::MouseEvent) -> Option<String> {
    ev.current_target()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?
        .dataset()
        .get("field")
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (settings, set_settings) = signal::<Option<Settings>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let drafts = RwSignal::new(HashMap::<String, String>::new());
    let placeholders = Memo::new(move |_| SettingsPlaceholders::from_settings(settings.get().as_ref()));

    // Load settings on mount and after every successful update
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let client = ctx.client();
        spawn_local(async move {
            match api::get_settings(&client).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[SETTINGS] Loaded, trigger={}", trigger).into());
                    set_settings.set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[SETTINGS] Load failed: {}", e).into());
                    browser::alert(&format!("Failed to load settings: {}", e.raw_text()));
                }
            }
        });
    });

    let update_setting = move |ev: web_sys::MouseEvent| {
        let Some(field) = data_field(&ev) else { return };
        let value = drafts.with_untracked(|d| d.get(&field).cloned().unwrap_or_default());
        let request = match field_update_request(&field, &value) {
            Ok(request) => request,
            Err(msg) => {
                browser::alert(&msg);
                return;
            }
        };
        let Some(guard) = ctx.begin(format!("settings-{}", field)) else { return };

        let client = ctx.client();
        spawn_local(async move {
            let _guard = guard;
            match api::send_field_update(&client, &request).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[SETTINGS] {} updated", field).into());
                    ctx.show_success();
                    drafts.update(|d| {
                        d.remove(&field);
                    });
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(e) => browser::alert(&format!("Failed to update {}: {}", field, e.raw_text())),
            }
        });
    };

    view! {
        <TransientBanner banner=ctx.banner id="success-banner" />

        <h1>"Settings"</h1>

        <div class="settings-form">
            {SETTING_FIELDS.iter().map(|(field, label, input_type)| {
                let field = *field;
                view! {
                    <div class="setting-row">
                        <label for=field>{*label}</label>
                        <input
                            id=field
                            name=field
                            type=*input_type
                            placeholder=move || placeholders.get().for_field(field)
                            prop:value=move || drafts.with(|d| d.get(field).cloned().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                drafts.update(|d| {
                                    d.insert(field.to_string(), value);
                                });
                            }
                        />
                        <button type="button" class="update-button" data-field=field on:click=update_setting>
                            "Update"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>

        <h2>"Schedule"</h2>
        <ScheduleEditor initial=Signal::derive(move || settings.get().and_then(|s| s.schedule())) />
    }
}
