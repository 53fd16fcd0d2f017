//! Trend Analysis Card
//!
//! Year-by-year line charts behind three tabs. Series shorter than the year
//! axis leave gaps instead of failing.

use leptos::*;
use review_insights::client::Resource;
use review_insights::models::{TrendAnalysis, TrendRow, TrendSeries};
use review_insights::state::FetchState;

use super::chart::{series_color, LineChart, LineSeries, BRAND_COLOR};
use super::error_modal::ErrorModal;
use super::loading::CardSkeleton;
use crate::api::use_client;
use crate::state::spawn_fetch;

const TITLE: &str = "Trend Analysis";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrendTab {
    Strengths,
    FeatureRequests,
    Rating,
}

impl TrendTab {
    const ALL: [TrendTab; 3] = [TrendTab::Strengths, TrendTab::FeatureRequests, TrendTab::Rating];

    fn label(self) -> &'static str {
        match self {
            TrendTab::Strengths => "Strengths",
            TrendTab::FeatureRequests => "Feature Requests",
            TrendTab::Rating => "Rating",
        }
    }
}

#[component]
pub fn TrendAnalysisCard() -> impl IntoView {
    let client = use_client();
    let (state, errors) = spawn_fetch(Resource::TrendAnalysis, async move {
        client.fetch_trend_analysis().await
    });

    move || match state.get() {
        FetchState::Loading => {
            view! { <CardSkeleton title=TITLE span="lg:col-span-4" height="h-[320px]" /> }.into_view()
        }
        FetchState::Failure(_) => view! { <ErrorModal errors=errors /> }.into_view(),
        FetchState::Success(trends) => view! { <TrendBody trends=trends /> }.into_view(),
    }
}

#[component]
fn TrendBody(trends: TrendAnalysis) -> impl IntoView {
    let (active, set_active) = create_signal(TrendTab::Strengths);

    if !trends.is_aligned() {
        logging::warn!("Trend series lengths do not match {} years", trends.years.len());
    }

    let years = trends.years.clone();
    let strengths = lines(&trends.strengths, &trends.strength_rows());
    let features = lines(&trends.feature_requests, &trends.feature_request_rows());
    let rating = vec![LineSeries {
        name: "rating".to_string(),
        color: BRAND_COLOR,
        values: trends
            .rating_rows()
            .iter()
            .map(|row| row.values.first().copied().flatten())
            .collect(),
    }];

    view! {
        <div class="col-span-1 lg:col-span-4 bg-white rounded-lg border border-gray-100 shadow-sm p-6">
            <h3 class="text-lg font-semibold mb-4">{TITLE}</h3>

            <div role="tablist" class="inline-flex mb-4 rounded-md bg-gray-100 p-1">
                {TrendTab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            role="tab"
                            class=move || {
                                let base = "px-3 py-1.5 text-sm rounded transition-colors";
                                if active.get() == tab {
                                    format!("{} bg-white shadow font-medium", base)
                                } else {
                                    format!("{} text-gray-600 hover:text-gray-900", base)
                                }
                            }
                            on:click=move |_| set_active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="h-[300px]">
                {move || match active.get() {
                    TrendTab::Strengths => view! {
                        <LineChart labels=years.clone() series=strengths.clone() />
                    }.into_view(),
                    TrendTab::FeatureRequests => view! {
                        <LineChart labels=years.clone() series=features.clone() />
                    }.into_view(),
                    TrendTab::Rating => view! {
                        <LineChart labels=years.clone() series=rating.clone() y_range=(4.0, 5.0) />
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

/// One line per series, values taken from the aligned rows
fn lines(series: &[TrendSeries], rows: &[TrendRow]) -> Vec<LineSeries> {
    series
        .iter()
        .enumerate()
        .map(|(idx, s)| LineSeries {
            name: s.name.clone(),
            color: series_color(idx),
            values: rows
                .iter()
                .map(|row| row.values.get(idx).copied().flatten())
                .collect(),
        })
        .collect()
}
