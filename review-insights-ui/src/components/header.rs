//! Header Component
//!
//! Sticky header with brand, navigation and the refresh / analysis actions.
//! Hidden while the dashboard is captured for the PDF report.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;

use crate::state::global::use_global_state;

/// DOM id the export flow hides during capture
pub const HEADER_ID: &str = "app-header";

const REFRESH_TOAST_DELAY_MS: u32 = 1500;
const ANALYSIS_DELAY_MS: u32 = 2000;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let go_home = {
        let navigate = navigate.clone();
        move |_| navigate("/", Default::default())
    };
    let go_reviews = {
        let navigate = navigate.clone();
        move |_| navigate("/reviews", Default::default())
    };

    let refresh_data = move |_| {
        state.show_success("Refreshing Data", "Fetching the latest data from the server...");
        state.refresh();

        Timeout::new(REFRESH_TOAST_DELAY_MS, move || {
            state.show_success("Data Refreshed", "The latest data has been loaded.");
        })
        .forget();
    };

    let run_analysis = move |_| {
        state.show_success("Running Analysis", "Processing data and generating insights...");

        let navigate = navigate.clone();
        Timeout::new(ANALYSIS_DELAY_MS, move || {
            state.show_success("Analysis Complete", "Your insights are ready to view.");
            navigate("/analysis", Default::default());
        })
        .forget();
    };

    view! {
        <header id=HEADER_ID class="bg-white border-b border-gray-100 sticky top-0 z-40 shadow-sm">
            <div class="container mx-auto px-4 py-3 flex items-center justify-between">
                <div class="flex items-center space-x-2">
                    <span class="text-2xl">"📊"</span>
                    <h1 class="font-bold text-xl text-sky-700">"e-GMAT Review Analyzer"</h1>
                </div>

                <div class="flex items-center space-x-4">
                    <button class=GHOST_BUTTON on:click=go_home>"Dashboard"</button>
                    <button class=GHOST_BUTTON on:click=go_reviews>"Reports"</button>
                    <button class=OUTLINE_BUTTON on:click=refresh_data>"Refresh Data"</button>
                    <button class=PRIMARY_BUTTON on:click=run_analysis>"Run Analysis"</button>
                </div>
            </div>
        </header>
    }
}

const GHOST_BUTTON: &str =
    "px-3 py-1.5 rounded-md text-sm text-gray-700 hover:bg-gray-100 transition-colors";
pub(crate) const OUTLINE_BUTTON: &str =
    "px-3 py-1.5 rounded-md text-sm border border-gray-300 hover:bg-gray-50 transition-colors \
     disabled:opacity-50 disabled:cursor-not-allowed";
const PRIMARY_BUTTON: &str =
    "px-3 py-1.5 rounded-md text-sm bg-sky-600 text-white hover:bg-sky-700 transition-colors";
