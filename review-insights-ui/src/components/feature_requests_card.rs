//! Top Feature Requests Card
//!
//! Ranked list with bars next to a donut of request counts.

use leptos::*;
use review_insights::client::Resource;
use review_insights::models::FeatureRequest;
use review_insights::state::FetchState;

use super::breakdown::{Breakdown, BreakdownItem};
use super::chart::DonutChart;
use super::error_modal::ErrorModal;
use super::loading::CardSkeleton;
use crate::api::use_client;
use crate::state::spawn_fetch;

const TITLE: &str = "Top Feature Requests";

#[component]
pub fn FeatureRequestsCard() -> impl IntoView {
    let client = use_client();
    let (state, errors) = spawn_fetch(Resource::FeatureRequests, async move {
        client.fetch_feature_requests().await
    });

    move || match state.get() {
        FetchState::Loading => view! { <CardSkeleton title=TITLE /> }.into_view(),
        FetchState::Failure(_) => view! { <ErrorModal errors=errors /> }.into_view(),
        FetchState::Success(features) => view! { <FeatureRequestsBody features=features /> }.into_view(),
    }
}

#[component]
fn FeatureRequestsBody(features: Vec<FeatureRequest>) -> impl IntoView {
    let items = features
        .iter()
        .map(|f| BreakdownItem {
            name: f.name.clone(),
            count: f.count,
            width: f.bar_width(),
        })
        .collect::<Vec<_>>();
    let labels = features.iter().map(|f| f.name.clone()).collect::<Vec<_>>();
    let counts = features.iter().map(|f| f.count as f64).collect::<Vec<_>>();

    view! {
        <div class="col-span-1 lg:col-span-2 bg-white rounded-lg border border-gray-100 shadow-sm p-6">
            <h3 class="text-lg font-semibold mb-4">{TITLE}</h3>
            <div class="flex flex-col-reverse md:flex-row items-start justify-between gap-4">
                <div class="w-full md:w-1/2">
                    <Breakdown items=items />
                </div>
                <div class="w-full md:w-1/2">
                    <DonutChart labels=labels values=counts />
                </div>
            </div>
        </div>
    }
}
