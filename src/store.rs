//! Checklist Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::checklist::{commit_enabled, row_views, CheckRowView};
use crate::models::{CheckId, CheckItem};

/// Checklist page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ChecklistState {
    /// Items from the last successful load
    pub items: Vec<CheckItem>,
    /// Set when the initial load failed; terminal for the page
    pub load_error: Option<String>,
    pub loaded: bool,
}

/// Type alias for the store
pub type ChecklistStore = Store<ChecklistState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_items(store: &ChecklistStore, items: Vec<CheckItem>) {
    *store.items().write() = items;
    *store.loaded().write() = true;
}

pub fn store_set_load_error(store: &ChecklistStore, message: String) {
    *store.load_error().write() = Some(message);
    *store.loaded().write() = true;
}

/// Commit a confirmed toggle into local state
pub fn store_commit_enabled(store: &ChecklistStore, id: &CheckId, enabled: bool) {
    commit_enabled(&mut store.items().write(), id, enabled);
}

pub fn store_rows(store: &ChecklistStore) -> Vec<CheckRowView> {
    store.items().with(|items| row_views(items))
}

pub fn store_items_untracked(store: &ChecklistStore) -> Vec<CheckItem> {
    store.items().get_untracked()
}

pub fn store_load_error(store: &ChecklistStore) -> Option<String> {
    store.load_error().get()
}

pub fn store_loaded(store: &ChecklistStore) -> bool {
    store.loaded().get()
}
