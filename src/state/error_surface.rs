//! Backend error modal state
//!
//! Each card owns its own `ErrorSurface`; there is no shared registry, so
//! two failing cards give two independent modals.

/// Message shown when the caller does not supply one
pub const DEFAULT_ERROR_MESSAGE: &str =
    "The backend service is currently unavailable. Please try again later.";

/// Modal title
pub const ERROR_MODAL_TITLE: &str = "Backend Error";

/// Label of the single modal action
pub const DISMISS_LABEL: &str = "Dismiss";

/// Visible flag plus message for one modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSurface {
    visible: bool,
    message: String,
}

impl Default for ErrorSurface {
    fn default() -> Self {
        Self {
            visible: false,
            message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl ErrorSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal with `message`, or the default text
    pub fn show_error(&mut self, message: Option<&str>) {
        self.message = message.unwrap_or(DEFAULT_ERROR_MESSAGE).to_string();
        self.visible = true;
    }

    /// Hide the modal. Only visibility changes; nothing is retried.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
