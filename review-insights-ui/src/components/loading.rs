//! Loading Component
//!
//! Skeleton states shown while a card's fetch is pending.

use leptos::*;

/// Skeleton for the statistics row
#[component]
pub fn StatisticsSkeleton() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6 animate-pulse">
            <div class="bg-gray-100 rounded-lg h-28" />
            <div class="bg-gray-100 rounded-lg h-28" />
            <div class="bg-gray-100 rounded-lg h-28" />
            <div class="bg-gray-100 rounded-lg h-64 md:col-span-3" />
        </div>
    }
}

/// Titled card with a pulsing body
#[component]
pub fn CardSkeleton(
    title: &'static str,
    #[prop(default = "lg:col-span-2")]
    span: &'static str,
    #[prop(default = "h-[270px]")]
    height: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("col-span-1 {} bg-white rounded-lg border border-gray-100 shadow-sm", span)>
            <h3 class="px-6 pt-6 pb-2 text-lg font-semibold">{title}</h3>
            <div class=format!("mx-6 mb-6 animate-pulse bg-gray-100 rounded {}", height) />
        </div>
    }
}

/// Skeleton for the review list
#[component]
pub fn ReviewListSkeleton(
    #[prop(default = 5)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid gap-6 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-white rounded-lg border border-gray-100 p-6">
                    <div class="flex justify-between">
                        <div class="h-6 bg-gray-200 rounded w-[150px]" />
                        <div class="h-6 bg-gray-200 rounded w-[50px]" />
                    </div>
                    <div class="h-4 bg-gray-200 rounded w-[100px] mt-2 mb-4" />
                    <div class="h-4 bg-gray-200 rounded w-full mb-2" />
                    <div class="h-4 bg-gray-200 rounded w-full mb-2" />
                    <div class="h-4 bg-gray-200 rounded w-3/4" />
                </div>
            }).collect_view()}
        </div>
    }
}
