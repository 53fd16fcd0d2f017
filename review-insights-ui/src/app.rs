//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, Toast};
use crate::pages::{Dashboard, Reviews};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50">
                <Header />

                <main class="container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/analysis" view=Dashboard />
                        <Route path="/reviews" view=Reviews />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-xl text-gray-600 mb-4">"Oops! Page not found"</p>
            <A href="/" class="text-sky-600 hover:text-sky-800 underline">
                "Return to Home"
            </A>
        </div>
    }
}
