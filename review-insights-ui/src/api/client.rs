//! HTTP API Client
//!
//! Browser side of the analytics client: a `gloo-net` transport and a
//! notifier that turns fetch failures into toasts.

use async_trait::async_trait;
use gloo_net::http::Request;
use review_insights::client::{
    AnalyticsClient, FetchError, HttpResponse, Notification, Notifier, Transport,
    DEFAULT_API_BASE,
};

use crate::state::global::{use_global_state, GlobalState};

/// Local storage key holding an API base URL override
pub const API_URL_KEY: &str = "review_insights_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(HttpResponse::new(status, body))
    }
}

/// Routes notifications to the toast stack
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    state: GlobalState,
}

impl ToastNotifier {
    pub fn new(state: GlobalState) -> Self {
        Self { state }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        self.state.push_toast(notification);
    }
}

pub type UiClient = AnalyticsClient<GlooTransport, ToastNotifier>;

/// Client for the configured backend, reporting into the toast stack
pub fn use_client() -> UiClient {
    AnalyticsClient::new(
        get_api_base(),
        GlooTransport,
        ToastNotifier::new(use_global_state()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::provide_global_state;
    use leptos::*;
    use review_insights::client::Resource;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn storage() -> web_sys::Storage {
        web_sys::window()
            .unwrap()
            .local_storage()
            .unwrap()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_api_base_override() {
        storage().remove_item(API_URL_KEY).unwrap();
        assert_eq!(get_api_base(), DEFAULT_API_BASE);

        storage()
            .set_item(API_URL_KEY, "https://reviews.example.com/")
            .unwrap();
        assert_eq!(get_api_base(), "https://reviews.example.com");

        storage().remove_item(API_URL_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_notifier_pushes_toast() {
        let runtime = create_runtime();
        let state = provide_global_state();

        ToastNotifier::new(state).notify(Notification::fetch_failed(Resource::Strengths));

        let toasts = state.toasts.get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].notification.title, "Error");
        assert_eq!(
            toasts[0].notification.description,
            "Failed to fetch strengths. Please try again later."
        );

        runtime.dispose();
    }
}
