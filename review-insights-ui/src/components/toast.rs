//! Toast Notification Component
//!
//! Shows fetch failures, refresh/analysis progress and export results.

use leptos::*;
use review_insights::client::NotificationVariant;

use crate::state::global::{use_global_state, ToastEntry};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2 w-80">
            <For
                each=move || state.toasts.get()
                key=|entry| entry.id
                children=move |entry| view! { <ToastMessage entry=entry /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(entry: ToastEntry) -> impl IntoView {
    let state = use_global_state();
    let id = entry.id;
    let notification = entry.notification;

    let (icon, bg_class) = match notification.variant {
        NotificationVariant::Default => ("✓", "bg-white text-gray-900 border border-gray-200"),
        NotificationVariant::Destructive => ("✕", "bg-red-600 text-white"),
    };

    view! {
        <div
            role="status"
            class=format!(
                "flex items-start space-x-3 {} px-4 py-3 rounded-lg shadow-lg cursor-pointer \
                 transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
            on:click=move |_| state.dismiss_toast(id)
        >
            <span class="text-lg">{icon}</span>
            <div>
                <div class="text-sm font-semibold">{notification.title}</div>
                <div class="text-sm opacity-90">{notification.description}</div>
            </div>
        </div>
    }
}
