//! Review Statistics Row
//!
//! Total reviews, average rating with stars, sentiment split and the
//! reviews-over-time bar chart.

use leptos::*;
use review_insights::client::Resource;
use review_insights::models::{ReviewStatistics, StatisticsSummary};
use review_insights::state::FetchState;

use super::chart::BarChart;
use super::error_modal::ErrorModal;
use super::loading::StatisticsSkeleton;
use crate::api::use_client;
use crate::state::spawn_fetch;

#[component]
pub fn ReviewStatisticsCard() -> impl IntoView {
    let client = use_client();
    let (state, errors) = spawn_fetch(Resource::Statistics, async move {
        client.fetch_review_statistics().await
    });

    move || match state.get() {
        FetchState::Loading => view! { <StatisticsSkeleton /> }.into_view(),
        FetchState::Failure(_) => view! { <ErrorModal errors=errors /> }.into_view(),
        FetchState::Success(stats) => view! { <StatisticsRow stats=stats /> }.into_view(),
    }
}

#[component]
fn StatisticsRow(stats: ReviewStatistics) -> impl IntoView {
    let summary = StatisticsSummary::from(&stats);
    let months = stats
        .reviews_over_time
        .iter()
        .map(|m| m.month.clone())
        .collect::<Vec<_>>();
    let counts = stats
        .reviews_over_time
        .iter()
        .map(|m| m.count as f64)
        .collect::<Vec<_>>();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6">
            <StatTile title="Total Reviews">
                <div class="text-3xl font-bold">{summary.total_reviews}</div>
            </StatTile>

            <StatTile title="Average Rating">
                <div class="text-3xl font-bold">{summary.average_label.clone()}</div>
                <Stars filled=summary.filled_stars />
            </StatTile>

            <StatTile title="Sentiment Analysis">
                {match summary.sentiment {
                    Some(s) => view! {
                        <div class="flex items-center justify-between">
                            <SentimentFigure value=s.positive label="Positive" color="text-green-500" />
                            <SentimentFigure value=s.neutral label="Neutral" color="text-gray-400" />
                            <SentimentFigure value=s.negative label="Negative" color="text-red-500" />
                        </div>
                    }.into_view(),
                    None => view! {
                        <p class="text-sm text-gray-500">"No ratings yet"</p>
                    }.into_view(),
                }}
            </StatTile>

            <div class="md:col-span-3 bg-white rounded-lg border border-gray-100 shadow-sm p-6">
                <h3 class="text-lg font-semibold mb-4">"Reviews Over Time"</h3>
                <BarChart labels=months values=counts />
            </div>
        </div>
    }
}

#[component]
fn StatTile(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-100 shadow-sm p-6">
            <h3 class="text-sm font-medium text-gray-500 pb-2">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
fn Stars(filled: u8) -> impl IntoView {
    view! {
        <div class="flex mt-2 text-xl">
            {(1..=5u8)
                .map(|star| {
                    let class = if star <= filled { "text-yellow-400" } else { "text-gray-300" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SentimentFigure(value: f64, label: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class=format!("text-3xl font-bold {}", color)>{format!("{:.0}%", value)}</div>
            <div class="text-xs text-gray-500">{label}</div>
        </div>
    }
}
