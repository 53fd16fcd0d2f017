//! State Management
//!
//! Global toast/refresh state and the per-card backend error surface.

pub mod backend_error;
pub mod global;
pub mod resource;

pub use backend_error::BackendError;
pub use resource::spawn_fetch;
