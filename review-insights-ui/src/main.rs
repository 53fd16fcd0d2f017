//! Review Insights Dashboard
//!
//! e-GMAT review analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Review statistics, feature requests, strengths and trend cards
//! - Per-card loading skeletons and dismissible backend error modals
//! - PDF export of the rendered dashboard
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos app compiled to WebAssembly. Data
//! access, fetch state and export geometry live in the `review-insights`
//! crate; this crate supplies the browser implementations of its seams
//! (`gloo-net` transport, toast notifier, DOM chrome, html2canvas viewport,
//! jsPDF document) and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
