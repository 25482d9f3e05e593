//! Leptos Banner Utilities
//!
//! Transient, auto-dismissing notification banner for Leptos.
//! A shown banner stays fully visible, fades out, then hides itself.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Time the banner stays at full opacity
pub const VISIBLE_MS: i32 = 3000;
/// Length of the fade-out before the banner is hidden
pub const FADE_MS: i32 = 300;

/// Text shown when no explicit message is given
pub const DEFAULT_TEXT: &str = "Changes saved successfully";

/// Banner display phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerPhase {
    #[default]
    Hidden,
    Visible,
    Fading,
}

impl BannerPhase {
    /// Phase of a banner `elapsed_ms` after it was shown
    pub fn at(elapsed_ms: i32) -> Self {
        if elapsed_ms < VISIBLE_MS {
            BannerPhase::Visible
        } else if elapsed_ms < VISIBLE_MS + FADE_MS {
            BannerPhase::Fading
        } else {
            BannerPhase::Hidden
        }
    }

    /// CSS `display` value
    pub fn display(self) -> &'static str {
        match self {
            BannerPhase::Hidden => "none",
            _ => "block",
        }
    }

    /// CSS `opacity` value
    pub fn opacity(self) -> &'static str {
        match self {
            BannerPhase::Visible => "1",
            _ => "0",
        }
    }
}

/// Delays after a show, in milliseconds, at which the phase is re-evaluated
pub const TIMER_STEPS_MS: [i32; 2] = [VISIBLE_MS, VISIBLE_MS + FADE_MS];

/// Phase plus the show counter that owns the running timers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    pub phase: BannerPhase,
    generation: u32,
}

impl BannerState {
    /// Make the banner visible; returns the generation its timers must carry
    pub fn show(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.phase = BannerPhase::Visible;
        self.generation
    }

    /// Apply a timer that fired `elapsed_ms` after show `generation`
    ///
    /// Timers left over from an earlier show are ignored.
    pub fn tick(&mut self, generation: u32, elapsed_ms: i32) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = BannerPhase::at(elapsed_ms);
        true
    }
}

/// Banner state signals
#[derive(Clone, Copy)]
pub struct BannerSignals {
    pub state_read: ReadSignal<BannerState>,
    pub state_write: WriteSignal<BannerState>,
    pub text_read: ReadSignal<String>,
    pub text_write: WriteSignal<String>,
}

impl BannerSignals {
    pub fn phase(&self) -> BannerPhase {
        self.state_read.get().phase
    }
}

pub fn create_banner_signals() -> BannerSignals {
    let (state_read, state_write) = signal(BannerState::default());
    let (text_read, text_write) = signal(DEFAULT_TEXT.to_string());
    BannerSignals {
        state_read,
        state_write,
        text_read,
        text_write,
    }
}

/// Show the banner with the default text
pub fn show_banner(banner: &BannerSignals) {
    show_banner_with_text(banner, DEFAULT_TEXT);
}

/// Show the banner with `text`, then fade and hide it on a timer
pub fn show_banner_with_text(banner: &BannerSignals, text: impl Into<String>) {
    banner.text_write.set(text.into());
    let mut generation = 0;
    banner.state_write.update(|state| generation = state.show());

    let banner = *banner;
    for step in TIMER_STEPS_MS {
        schedule(step, move || {
            banner.state_write.update(|state| {
                state.tick(generation, step);
            });
        });
    }
}

/// Run `f` once after `ms` milliseconds
fn schedule(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(win) = web_sys::window() {
        let cb = Closure::once_into_js(f);
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// Banner element bound to `banner`
#[component]
pub fn TransientBanner(
    banner: BannerSignals,
    #[prop(into)] id: String,
    #[prop(into, optional)] class: Option<String>,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=class.unwrap_or_else(|| "success-banner".to_string())
            style:transition="opacity 0.3s ease"
            style:display=move || banner.phase().display()
            style:opacity=move || banner.phase().opacity()
        >
            {move || banner.text_read.get()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_timeline() {
        assert_eq!(BannerPhase::at(0), BannerPhase::Visible);
        assert_eq!(BannerPhase::at(2999), BannerPhase::Visible);
        assert_eq!(BannerPhase::at(3000), BannerPhase::Fading);
        assert_eq!(BannerPhase::at(3299), BannerPhase::Fading);
        assert_eq!(BannerPhase::at(3300), BannerPhase::Hidden);
    }

    #[test]
    fn test_hidden_within_total_duration() {
        assert!(VISIBLE_MS + FADE_MS <= 3300);
        assert_eq!(BannerPhase::at(VISIBLE_MS + FADE_MS).display(), "none");
    }

    /// Fire every timer of a show at its delay, as the runtime does
    fn run_timers(state: &mut BannerState, generation: u32) -> Vec<BannerPhase> {
        TIMER_STEPS_MS
            .iter()
            .map(|step| {
                state.tick(generation, *step);
                state.phase
            })
            .collect()
    }

    #[test]
    fn test_show_fades_then_hides() {
        let mut state = BannerState::default();
        let generation = state.show();
        assert_eq!(state.phase, BannerPhase::Visible);
        assert_eq!(run_timers(&mut state, generation), vec![BannerPhase::Fading, BannerPhase::Hidden]);
        assert_eq!(TIMER_STEPS_MS, [3000, 3300]);
    }

    #[test]
    fn test_stale_timers_ignored() {
        let mut state = BannerState::default();
        let first = state.show();
        // second show lands before the first show's timers fire
        let second = state.show();

        assert!(!state.tick(first, VISIBLE_MS));
        assert!(!state.tick(first, VISIBLE_MS + FADE_MS));
        assert_eq!(state.phase, BannerPhase::Visible);

        assert!(state.tick(second, VISIBLE_MS));
        assert_eq!(state.phase, BannerPhase::Fading);
        assert!(state.tick(second, VISIBLE_MS + FADE_MS));
        assert_eq!(state.phase, BannerPhase::Hidden);
    }

    #[test]
    fn test_css_values() {
        assert_eq!(BannerPhase::Visible.display(), "block");
        assert_eq!(BannerPhase::Visible.opacity(), "1");
        assert_eq!(BannerPhase::Fading.display(), "block");
        assert_eq!(BannerPhase::Fading.opacity(), "0");
        assert_eq!(BannerPhase::default(), BannerPhase::Hidden);
    }
}
