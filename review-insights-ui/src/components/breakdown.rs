//! Ranked list with colored progress bars

use leptos::*;

use super::chart::series_color;

/// One row of a breakdown list
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownItem {
    pub name: String,
    pub count: u64,
    /// Bar width in percent, already clamped
    pub width: f64,
}

#[component]
pub fn Breakdown(items: Vec<BreakdownItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="text-sm text-gray-500">"Nothing reported yet"</p> }.into_view();
    }

    view! {
        <div class="space-y-4">
            {items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| {
                    let color = series_color(idx);
                    view! {
                        <div class="flex items-center">
                            <div
                                class="w-3 h-3 rounded-full mr-2"
                                style=format!("background-color: {}", color)
                            />
                            <div class="flex-1 text-sm">
                                <div class="flex justify-between font-medium">
                                    <span>{item.name}</span>
                                    <span>{item.count}</span>
                                </div>
                                <div class="w-full bg-gray-200 rounded-full h-1.5 mt-1">
                                    <div
                                        class="rounded-full h-1.5"
                                        style=format!(
                                            "width: {}%; background-color: {}",
                                            item.width, color
                                        )
                                    />
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}
