//! Top Strengths Card

use leptos::*;
use review_insights::client::Resource;
use review_insights::models::Strength;
use review_insights::state::FetchState;

use super::breakdown::{Breakdown, BreakdownItem};
use super::chart::{BarChart, SERIES_COLORS};
use super::error_modal::ErrorModal;
use super::loading::CardSkeleton;
use crate::api::use_client;
use crate::state::spawn_fetch;

const TITLE: &str = "Top Strengths Mentioned";

#[component]
pub fn StrengthsCard() -> impl IntoView {
    let client = use_client();
    let (state, errors) = spawn_fetch(Resource::Strengths, async move {
        client.fetch_strengths().await
    });

    move || match state.get() {
        FetchState::Loading => view! { <CardSkeleton title=TITLE /> }.into_view(),
        FetchState::Failure(_) => view! { <ErrorModal errors=errors /> }.into_view(),
        FetchState::Success(strengths) => view! { <StrengthsBody strengths=strengths /> }.into_view(),
    }
}

#[component]
fn StrengthsBody(strengths: Vec<Strength>) -> impl IntoView {
    let items = strengths
        .iter()
        .map(|s| BreakdownItem {
            name: s.name.clone(),
            count: s.count,
            width: s.bar_width(),
        })
        .collect::<Vec<_>>();
    let labels = strengths.iter().map(|s| s.name.clone()).collect::<Vec<_>>();
    let shares = strengths.iter().map(|s| s.bar_width()).collect::<Vec<_>>();

    view! {
        <div class="col-span-1 lg:col-span-2 bg-white rounded-lg border border-gray-100 shadow-sm p-6">
            <h3 class="text-lg font-semibold mb-4">{TITLE}</h3>
            <div class="flex flex-col md:flex-row items-start justify-between gap-4">
                <div class="w-full md:w-1/2">
                    <BarChart labels=labels values=shares color=SERIES_COLORS[1] height=250 />
                </div>
                <div class="w-full md:w-1/2">
                    <Breakdown items=items />
                </div>
            </div>
        </div>
    }
}
