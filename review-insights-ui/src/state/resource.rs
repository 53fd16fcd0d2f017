//! Fetch-on-mount for cards

use leptos::*;
use review_insights::client::{FetchError, Resource};
use review_insights::state::{outcome, FetchState};
use std::future::Future;

use super::backend_error::{use_backend_error, BackendError};

/// Start `fetch` for the calling card
///
/// Returns the card's `FetchState` signal, resolved exactly once, and its own
/// error surface, opened with the card-specific message on failure.
pub fn spawn_fetch<T, F>(resource: Resource, fetch: F) -> (RwSignal<FetchState<T>>, BackendError)
where
    T: 'static,
    F: Future<Output = Result<T, FetchError>> + 'static,
{
    let state = create_rw_signal(FetchState::Loading);
    let errors = use_backend_error();

    spawn_local(async move {
        let result = outcome(resource, fetch.await);

        if let Err(info) = &result {
            logging::error!("{}: {}", info.message, info.detail);
            errors.show_error(Some(&info.message));
        }

        // the card may have been unmounted by a refresh in the meantime
        state.try_update(|s| s.resolve(result));
    });

    (state, errors)
}
