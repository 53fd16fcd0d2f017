//! Reviews Page
//!
//! Latest reviews, one card each. A failed fetch shows an empty list; the
//! toast raised by the client is the only error signal here.

use leptos::*;
use review_insights::models::Review;

use crate::api::use_client;
use crate::components::ReviewListSkeleton;

#[component]
pub fn Reviews() -> impl IntoView {
    let client = use_client();
    let reviews = create_rw_signal(None::<Vec<Review>>);

    spawn_local(async move {
        let list = client.fetch_reviews().await;
        reviews.try_set(Some(list));
    });

    view! {
        <div class="container mx-auto p-6">
            <h1 class="text-2xl font-bold mb-6">"Latest Reviews"</h1>

            {move || match reviews.get() {
                None => view! { <ReviewListSkeleton /> }.into_view(),
                Some(list) if list.is_empty() => view! {
                    <p class="text-gray-500">"No reviews available."</p>
                }.into_view(),
                Some(list) => view! {
                    <div class="grid gap-6">
                        {list
                            .into_iter()
                            .map(|review| view! { <ReviewCard review=review /> })
                            .collect_view()}
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-100 shadow-sm p-6 transition-all hover:shadow-md">
            <div class="flex justify-between text-lg font-semibold">
                <span>{review.author}</span>
                <span class="px-2 py-1 bg-blue-100 text-blue-800 rounded-full text-sm">
                    {format!("{}/5", review.rating)}
                </span>
            </div>
            <div class="text-sm text-gray-500">{review.date}</div>
            <p class="mt-4">{review.text}</p>
        </div>
    }
}
