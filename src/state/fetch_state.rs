//! Per-card fetch lifecycle
//!
//! A card starts in `Loading` and moves exactly once to `Success` or
//! `Failure`. Later resolutions are ignored for the lifetime of the mount.

use crate::client::{FetchError, Resource};

/// What a card shows when its fetch failed
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    /// Card-specific text for the error modal
    pub message: String,
    /// Underlying failure, for logs
    pub detail: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Wrap a fetch failure with the modal text for `resource`
    pub fn from_fetch(resource: Resource, error: &FetchError) -> Self {
        Self::new(load_failure_message(resource), error.to_string())
    }
}

/// Modal text shown by the card for each resource
pub fn load_failure_message(resource: Resource) -> &'static str {
    match resource {
        Resource::Reviews => "Failed to load reviews",
        Resource::Statistics => "Failed to load review statistics",
        Resource::FeatureRequests => "Failed to load feature requests data",
        Resource::Strengths => "Failed to load strengths data",
        Resource::TrendAnalysis => "Failed to load trend analysis data",
    }
}

/// Loading, then success or failure
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Failure(ErrorInfo),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    /// Apply the fetch outcome. Returns `false` if already resolved.
    pub fn resolve(&mut self, outcome: Result<T, ErrorInfo>) -> bool {
        if !self.is_loading() {
            tracing::debug!("Ignoring late resolution of a settled fetch");
            return false;
        }

        *self = match outcome {
            Ok(value) => FetchState::Success(value),
            Err(info) => FetchState::Failure(info),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            FetchState::Failure(info) => Some(info),
            _ => None,
        }
    }
}

/// Convert a fetch result into the card's outcome type
pub fn outcome<T>(resource: Resource, result: Result<T, FetchError>) -> Result<T, ErrorInfo> {
    result.map_err(|e| ErrorInfo::from_fetch(resource, &e))
}
