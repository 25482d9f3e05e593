//! Checklist Logic
//!
//! Per-row toggle state machine and row rendering helpers, kept free of
//! browser calls.

use crate::api::{toggle_request, ApiError, ApiRequest};
use crate::models::{CheckId, CheckItem};

pub const RUN_SUCCESS_TEXT: &str = "Checks completed successfully";

/// Toggle lifecycle: `Idle -> Submitting -> Idle`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TogglePhase {
    Idle,
    Submitting { previous: bool },
}

/// How a submitted toggle ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Confirmed(bool),
    RolledBack(bool),
}

/// Visual state of one toggle control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleControl {
    pub checked: bool,
    pub disabled: bool,
    phase: TogglePhase,
}

impl ToggleControl {
    pub fn new(checked: bool) -> Self {
        Self { checked, disabled: false, phase: TogglePhase::Idle }
    }

    pub fn phase(&self) -> TogglePhase {
        self.phase
    }

    /// User flipped the control; returns false if a toggle is already pending
    pub fn begin(&mut self, requested: bool) -> bool {
        if let TogglePhase::Submitting { .. } = self.phase {
            return false;
        }
        self.phase = TogglePhase::Submitting { previous: self.checked };
        self.checked = requested;
        self.disabled = true;
        true
    }

    /// Settle the pending toggle; the control is re-enabled either way
    pub fn finish(&mut self, succeeded: bool) -> ToggleOutcome {
        let previous = match self.phase {
            TogglePhase::Submitting { previous } => previous,
            TogglePhase::Idle => self.checked,
        };
        self.phase = TogglePhase::Idle;
        self.disabled = false;
        if succeeded {
            ToggleOutcome::Confirmed(self.checked)
        } else {
            self.checked = previous;
            ToggleOutcome::RolledBack(previous)
        }
    }
}

/// One rendered checklist row
#[derive(Clone, Debug, PartialEq)]
pub struct CheckRowView {
    pub id: CheckId,
    pub dom_id: String,
    pub title: String,
    pub description: String,
    pub checked: bool,
}

pub fn row_views(items: &[CheckItem]) -> Vec<CheckRowView> {
    items
        .iter()
        .map(|item| CheckRowView {
            id: item.id.clone(),
            dom_id: item.toggle_dom_id(),
            title: item.title.clone(),
            description: item.description_or_placeholder().to_string(),
            checked: item.enabled,
        })
        .collect()
}

/// Toggle request for `id`, or `None` if the id is not loaded
pub fn toggle_for(items: &[CheckItem], id: &CheckId, enabled: bool) -> Option<ApiRequest> {
    items.iter().any(|item| &item.id == id).then(|| toggle_request(id, enabled))
}

/// Record a server-confirmed `enabled` value
pub fn commit_enabled(items: &mut [CheckItem], id: &CheckId, enabled: bool) -> bool {
    match items.iter_mut().find(|item| &item.id == id) {
        Some(item) => {
            item.enabled = enabled;
            true
        }
        None => false,
    }
}

pub fn load_failure_message(err: &ApiError) -> String {
    format!("Failed to load checklist items: {}", err.raw_text())
}

pub fn toggle_failure_message(err: &ApiError) -> String {
    format!("Failed to update check: {}", err.raw_text())
}

pub fn schedule_failure_message(err: &ApiError) -> String {
    format!("Failed to update schedule: {}", err.raw_text())
}
