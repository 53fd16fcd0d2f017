//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod reviews;

pub use dashboard::Dashboard;
pub use reviews::Reviews;
