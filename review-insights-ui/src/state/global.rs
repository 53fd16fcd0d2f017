//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use review_insights::client::{Notification, NotificationVariant};

/// How long a regular toast stays up (ms)
const TOAST_TIMEOUT_MS: u32 = 3000;
/// How long a destructive toast stays up (ms)
const ERROR_TOAST_TIMEOUT_MS: u32 = 5000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Toasts currently on screen, oldest first
    pub toasts: RwSignal<Vec<ToastEntry>>,
    /// Bumped by "Refresh Data"; the dashboard remounts its cards on change
    pub refresh_epoch: RwSignal<u64>,
    /// Last time the cards were (re)mounted, unix millis
    pub last_refresh: RwSignal<Option<i64>>,
    next_toast_id: StoredValue<u64>,
}

/// A toast on screen
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notification: Notification,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        toasts: create_rw_signal(Vec::new()),
        refresh_epoch: create_rw_signal(0),
        last_refresh: create_rw_signal(None),
        next_toast_id: store_value(0),
    };

    provide_context(state);
    state
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    /// Show a toast (auto-clears after timeout)
    pub fn push_toast(&self, notification: Notification) -> u64 {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);

        let timeout = match notification.variant {
            NotificationVariant::Destructive => ERROR_TOAST_TIMEOUT_MS,
            NotificationVariant::Default => TOAST_TIMEOUT_MS,
        };

        self.toasts
            .update(|toasts| toasts.push(ToastEntry { id, notification }));

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(timeout, move || {
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();

        id
    }

    /// Show a success message
    pub fn show_success(&self, title: &str, description: &str) {
        self.push_toast(Notification::info(title, description));
    }

    /// Remove a toast before its timeout
    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Remount the dashboard cards so every card fetches again
    pub fn refresh(&self) {
        self.refresh_epoch.update(|epoch| *epoch += 1);
    }

    /// Record a (re)mount of the cards
    fn mark_refreshed(&self) {
        self.last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Stamp `last_refresh` now and again on every refresh
    pub fn track_refreshes(&self) {
        let state = *self;
        create_effect(move |_| {
            state.refresh_epoch.track();
            state.mark_refreshed();
        });
    }
}
