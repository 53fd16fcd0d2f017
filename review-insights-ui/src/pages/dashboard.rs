//! Dashboard Page
//!
//! Review analysis dashboard, served on `/` and `/analysis`.

use leptos::*;
use leptos_router::*;

use crate::components::{
    ExportButton, FeatureRequestsCard, ReviewStatisticsCard, StrengthsCard, TrendAnalysisCard,
};
use crate::state::global::use_global_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let is_main_page = move || pathname.get() == "/";

    state.track_refreshes();

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-4">
                    <Show when=move || !is_main_page()>
                        {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="px-3 py-1.5 rounded-md text-sm border border-gray-300 hover:bg-gray-50"
                                    on:click=move |_| navigate("/", Default::default())
                                >
                                    "Back to Home"
                                </button>
                            }
                        }
                    </Show>
                    <h2 class="text-2xl font-semibold text-gray-800">"Review Analysis Dashboard"</h2>
                </div>
                <ExportButton />
            </div>

            // Remounting on refresh restarts every card's fetch
            {move || {
                state.refresh_epoch.track();
                view! {
                    <ReviewStatisticsCard />
                    <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
                        <FeatureRequestsCard />
                        <StrengthsCard />
                        <TrendAnalysisCard />
                    </div>
                }
            }}

            <AboutAnalysis />
        </div>
    }
}

#[component]
fn AboutAnalysis() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="mt-8 bg-gray-50 border border-gray-100 rounded-lg p-4">
            <h3 class="text-sm font-medium text-gray-500 mb-2">"About This Analysis"</h3>
            <p class="text-sm text-gray-600">
                "This analysis is based on GMAT Club e-GMAT reviews. The data has been processed \
                 using natural language processing techniques to identify key strengths, feature \
                 requests, and trends over time."
            </p>
            <p class="text-xs text-gray-400 mt-2">
                {move || {
                    state.last_refresh.get()
                        .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                        .map(|dt| format!("Loaded at {}", dt.format("%H:%M:%S")))
                        .unwrap_or_default()
                }}
            </p>
        </div>
    }
}
