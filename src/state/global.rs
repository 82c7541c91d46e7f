//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Shared state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Transient notice rendered by the toast container
    pub notice: RwSignal<Option<String>>,
}

/// Provide shared state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Show a notice message (auto-clears after timeout)
    pub fn show_notice(&self, message: &str) {
        self.notice.set(Some(message.to_string()));

        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(3000, move || {
            notice_signal.set(None);
        })
        .forget();
    }

    /// Clear the notice immediately
    pub fn clear_notice(&self) {
        self.notice.set(None);
    }
}
