//! Backend error modal state
//!
//! Every card owns its own surface; two failing cards show two modals.

use leptos::*;
use review_insights::state::ErrorSurface;

/// Reactive handle on one card's `ErrorSurface`
#[derive(Clone, Copy)]
pub struct BackendError {
    surface: RwSignal<ErrorSurface>,
}

/// Create a fresh error surface owned by the calling component
pub fn use_backend_error() -> BackendError {
    BackendError {
        surface: create_rw_signal(ErrorSurface::new()),
    }
}

impl BackendError {
    /// Open the modal; `None` uses the generic backend message
    pub fn show_error(&self, message: Option<&str>) {
        self.surface.try_update(|surface| surface.show_error(message));
    }

    pub fn dismiss(&self) {
        self.surface.update(|surface| surface.dismiss());
    }

    pub fn is_visible(&self) -> bool {
        self.surface.with(|surface| surface.is_visible())
    }

    pub fn message(&self) -> String {
        self.surface.with(|surface| surface.message().to_string())
    }
}
