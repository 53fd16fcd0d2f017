//! View State
//!
//! Framework-free state used by the dashboard cards: the fetch lifecycle
//! and the backend error modal.

pub mod error_surface;
pub mod fetch_state;

pub use error_surface::{ErrorSurface, DEFAULT_ERROR_MESSAGE, DISMISS_LABEL, ERROR_MODAL_TITLE};
pub use fetch_state::{load_failure_message, outcome, ErrorInfo, FetchState};
