//! API access
//!
//! Browser transport and toast notifier for the analytics client.

pub mod client;

pub use client::{use_client, ToastNotifier};
