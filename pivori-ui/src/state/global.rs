//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use pivori_studio::settings::{self, MemorySettingsStore, Settings, SettingsError, SettingsStore};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Saved dashboard settings (in memory only)
    pub settings_store: RwSignal<MemorySettingsStore>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        settings_store: create_rw_signal(MemorySettingsStore::new()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Currently saved settings, without subscribing to changes
    pub fn saved_settings(&self) -> Settings {
        self.settings_store.with_untracked(|store| store.load())
    }

    /// Validate and save the settings form
    pub fn save_settings(&self, api_url: &str, theme: &str) -> Result<Settings, SettingsError> {
        self.settings_store
            .try_update(|store| settings::save_settings(store, api_url, theme))
            .unwrap_or_else(|| Err(SettingsError::Store("settings store disposed".to_string())))
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.error.set(None);
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.success.set(None);
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
