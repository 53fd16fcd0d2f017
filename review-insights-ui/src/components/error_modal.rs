//! Backend Error Modal
//!
//! Rendered by a card whose fetch failed. Dismissing only hides it; the
//! card stays in its failed state until the dashboard remounts.

use leptos::*;
use review_insights::state::{DISMISS_LABEL, ERROR_MODAL_TITLE};

use crate::state::BackendError;

#[component]
pub fn ErrorModal(errors: BackendError) -> impl IntoView {
    move || {
        errors.is_visible().then(|| {
            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40">
                    <div
                        role="alertdialog"
                        aria-modal="true"
                        class="bg-white rounded-lg shadow-xl max-w-md w-full mx-4 p-6"
                    >
                        <h2 class="text-lg font-semibold text-red-600">{ERROR_MODAL_TITLE}</h2>
                        <p class="mt-2 text-sm text-gray-600">{errors.message()}</p>
                        <div class="mt-6 flex justify-end">
                            <button
                                class="px-4 py-2 rounded-md bg-gray-900 text-white text-sm hover:bg-gray-800"
                                on:click=move |_| errors.dismiss()
                            >
                                {DISMISS_LABEL}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::backend_error::use_backend_error;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dialog_count() -> u32 {
        document()
            .query_selector_all("[role=alertdialog]")
            .map(|nodes| nodes.length())
            .unwrap_or(0)
    }

    #[wasm_bindgen_test]
    fn test_dismiss_hides_modal() {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();

        let runtime = create_runtime();
        let surface = use_backend_error();
        mount_to(
            root.clone().unchecked_into(),
            move || view! { <ErrorModal errors=surface /> },
        );

        assert_eq!(dialog_count(), 0);

        surface.show_error(Some("Failed to load strengths data"));
        assert_eq!(dialog_count(), 1);
        assert!(root
            .text_content()
            .unwrap_or_default()
            .contains("Failed to load strengths data"));

        let button: web_sys::HtmlElement = root
            .query_selector("button")
            .unwrap()
            .unwrap()
            .unchecked_into();
        button.click();
        assert_eq!(dialog_count(), 0);

        root.remove();
        runtime.dispose();
    }
}
