//! Analytics API Client
//!
//! One operation per resource. Every call is a plain GET against a fixed
//! path under the configured base URL; any non-2xx status is a failure.
//!
//! Failure behaviour is deliberately asymmetric:
//! - `fetch_reviews` notifies and falls back to an empty list
//! - every other fetch notifies and hands the error back to the caller
//!
//! There is no retry, no timeout and no caching here. Callers keep results
//! for as long as they need them.

mod notify;
mod transport;

pub use notify::{Notification, NotificationVariant, Notifier, TracingNotifier};
pub use transport::{HttpResponse, Transport};

#[cfg(feature = "native")]
pub use transport::ReqwestTransport;

use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{FeatureRequest, Review, ReviewStatistics, Strength, TrendAnalysis};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// The five analytics resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Reviews,
    Statistics,
    FeatureRequests,
    Strengths,
    TrendAnalysis,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Reviews,
        Resource::Statistics,
        Resource::FeatureRequests,
        Resource::Strengths,
        Resource::TrendAnalysis,
    ];

    /// Endpoint path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Reviews => "/api/reviews",
            Resource::Statistics => "/api/statistics",
            Resource::FeatureRequests => "/api/features",
            Resource::Strengths => "/api/strengths",
            Resource::TrendAnalysis => "/api/trends",
        }
    }

    /// Human-readable name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Reviews => "reviews",
            Resource::Statistics => "statistics",
            Resource::FeatureRequests => "feature requests",
            Resource::Strengths => "strengths",
            Resource::TrendAnalysis => "trend analysis",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reviews" => Ok(Resource::Reviews),
            "statistics" | "stats" => Ok(Resource::Statistics),
            "features" | "feature-requests" => Ok(Resource::FeatureRequests),
            "strengths" => Ok(Resource::Strengths),
            "trends" | "trend-analysis" => Ok(Resource::TrendAnalysis),
            other => Err(format!(
                "unknown resource '{}' (expected reviews, statistics, features, strengths or trends)",
                other
            )),
        }
    }
}

/// Errors raised while fetching a resource
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("Failed to fetch {resource}: HTTP {status}")]
    Status { resource: Resource, status: u16 },

    /// Body did not match the expected shape
    #[error("Failed to decode {resource}: {message}")]
    Decode { resource: Resource, message: String },
}

/// Client for the analytics API
pub struct AnalyticsClient<T, N> {
    base_url: String,
    transport: T,
    notifier: N,
}

impl<T: Transport, N: Notifier> AnalyticsClient<T, N> {
    /// Create a client; a trailing slash on `base_url` is ignored
    pub fn new(base_url: impl Into<String>, transport: T, notifier: N) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            notifier,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a resource
    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }

    /// Fetch all reviews, falling back to an empty list on failure
    pub async fn fetch_reviews(&self) -> Vec<Review> {
        self.fetch_or_notify(Resource::Reviews)
            .await
            .unwrap_or_default()
    }

    pub async fn fetch_review_statistics(&self) -> Result<ReviewStatistics, FetchError> {
        self.fetch_or_notify(Resource::Statistics).await
    }

    pub async fn fetch_feature_requests(&self) -> Result<Vec<FeatureRequest>, FetchError> {
        self.fetch_or_notify(Resource::FeatureRequests).await
    }

    pub async fn fetch_strengths(&self) -> Result<Vec<Strength>, FetchError> {
        self.fetch_or_notify(Resource::Strengths).await
    }

    pub async fn fetch_trend_analysis(&self) -> Result<TrendAnalysis, FetchError> {
        self.fetch_or_notify(Resource::TrendAnalysis).await
    }

    /// Check that a resource answers with a 2xx status, without notifying
    pub async fn probe(&self, resource: Resource) -> Result<u16, FetchError> {
        let response = self.transport.get(&self.url_for(resource)).await?;
        if response.is_success() {
            Ok(response.status)
        } else {
            Err(FetchError::Status {
                resource,
                status: response.status,
            })
        }
    }

    async fn fetch_or_notify<R: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<R, FetchError> {
        match self.get_json(resource).await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(resource = %resource, error = %e, "Fetch failed");
                self.notifier.notify(Notification::fetch_failed(resource));
                Err(e)
            }
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, resource: Resource) -> Result<R, FetchError> {
        let url = self.url_for(resource);
        tracing::debug!(%url, "GET");

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                resource,
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| FetchError::Decode {
            resource,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned responses keyed by path; unknown paths fail at the network level
    struct FakeTransport {
        responses: HashMap<&'static str, HttpResponse>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn with(mut self, resource: Resource, status: u16, body: &str) -> Self {
            self.responses
                .insert(resource.path(), HttpResponse::new(status, body));
            self
        }

        fn failing_all(status: u16) -> Self {
            Resource::ALL
                .iter()
                .fold(Self::new(), |t, r| t.with(*r, status, "Internal Server Error"))
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.responses
                .iter()
                .find(|(path, _)| url.ends_with(*path))
                .map(|(_, r)| r.clone())
                .ok_or_else(|| FetchError::Network("connection refused".into()))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.borrow_mut().push(notification);
        }
    }

    fn client<'a>(
        transport: &'a FakeTransport,
        notifier: &'a RecordingNotifier,
    ) -> AnalyticsClient<&'a FakeTransport, &'a RecordingNotifier> {
        AnalyticsClient::new("http://localhost:8000/", transport, notifier)
    }

    #[test]
    fn test_url_for_strips_trailing_slash() {
        let transport = FakeTransport::new();
        let notifier = RecordingNotifier::default();
        let client = client(&transport, &notifier);

        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url_for(Resource::TrendAnalysis),
            "http://localhost:8000/api/trends"
        );
        assert_eq!(
            client.url_for(Resource::FeatureRequests),
            "http://localhost:8000/api/features"
        );
    }

    #[test]
    fn test_resource_from_str() {
        assert_eq!("features".parse::<Resource>(), Ok(Resource::FeatureRequests));
        assert_eq!("TRENDS".parse::<Resource>(), Ok(Resource::TrendAnalysis));
        assert!("ratings".parse::<Resource>().is_err());
    }

    #[tokio::test]
    async fn test_reviews_failure_returns_empty() {
        let transport = FakeTransport::failing_all(500);
        let notifier = RecordingNotifier::default();
        let client = client(&transport, &notifier);

        let reviews = client.fetch_reviews().await;

        assert!(reviews.is_empty());
        let seen = notifier.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].description,
            "Failed to fetch reviews. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_other_failures_propagate_with_one_notification() {
        let transport = FakeTransport::failing_all(503);
        let notifier = RecordingNotifier::default();
        let client = client(&transport, &notifier);

        let stats = client.fetch_review_statistics().await;
        assert_eq!(
            stats,
            Err(FetchError::Status {
                resource: Resource::Statistics,
                status: 503
            })
        );
        assert_eq!(notifier.seen.borrow().len(), 1);

        assert!(client.fetch_feature_requests().await.is_err());
        assert_eq!(notifier.seen.borrow().len(), 2);

        assert!(client.fetch_strengths().await.is_err());
        assert_eq!(notifier.seen.borrow().len(), 3);

        assert!(client.fetch_trend_analysis().await.is_err());
        assert_eq!(notifier.seen.borrow().len(), 4);

        assert!(notifier.seen.borrow().iter().all(|n| n.is_destructive()));
    }

    #[tokio::test]
    async fn test_network_error_propagates() {
        let transport = FakeTransport::new();
        let notifier = RecordingNotifier::default();
        let client = client(&transport, &notifier);

        let result = client.fetch_strengths().await;
        assert!(matches!(result, Err(FetchError::Network(_))));
        assert_eq!(notifier.seen.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_successful_fetches() {
        let transport = FakeTransport::new()
            .with(
                Resource::Reviews,
                200,
                r#"[{"id": "1", "text": "Great", "rating": 5, "date": "2025-01-02", "author": "amy"}]"#,
            )
            .with(
                Resource::Statistics,
                200,
                r#"{"totalReviews": 2, "averageRating": 4.5, "reviewsOverTime": [], "ratingsDistribution": []}"#,
            )
            .with(
                Resource::FeatureRequests,
                200,
                r#"[{"feature": "More practice", "count": 4, "percentage": 40}]"#,
            )
            .with(
                Resource::Strengths,
                200,
                r#"[{"strength": "Support", "count": 9, "percentage": 90}]"#,
            )
            .with(
                Resource::TrendAnalysis,
                200,
                r#"{"years": ["2024"], "ratings": [4.8], "strengths": [], "featureRequests": []}"#,
            );
        let notifier = RecordingNotifier::default();
        let client = client(&transport, &notifier);

        let reviews = client.fetch_reviews().await;
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].author, "amy");

        let stats = client.fetch_review_statistics().await.unwrap();
        assert_eq!(stats.total_reviews, 2);

        let features = client.fetch_feature_requests().await.unwrap();
        assert_eq!(features[0].name, "More practice");

        let strengths = client.fetch_strengths().await.unwrap();
        assert_eq!(strengths[0].count, 9);

        let trends = client.fetch_trend_analysis().await.unwrap();
        assert_eq!(trends.years, vec!["2024".to_string()]);

        assert!(notifier.seen.borrow().is_empty());
        assert_eq!(transport.requests.borrow().len(), 5);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let transport = FakeTransport::new().with(Resource::TrendAnalysis, 200, "{not json");
        let notifier = RecordingNotifier::default();
        let client = client(&transport, &notifier);

        let result = client.fetch_trend_analysis().await;
        assert!(matches!(
            result,
            Err(FetchError::Decode {
                resource: Resource::TrendAnalysis,
                ..
            })
        ));
        assert_eq!(notifier.seen.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_probe_does_not_notify() {
        let transport = FakeTransport::new()
            .with(Resource::Reviews, 200, "[]")
            .with(Resource::Strengths, 404, "");
        let notifier = RecordingNotifier::default();
        let client = client(&transport, &notifier);

        assert_eq!(client.probe(Resource::Reviews).await, Ok(200));
        assert!(client.probe(Resource::Strengths).await.is_err());
        assert!(notifier.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_dismissing_error_keeps_failure_and_does_not_refetch() {
        use crate::state::{outcome, ErrorSurface, FetchState};

        let transport = FakeTransport::failing_all(500);
        let notifier = RecordingNotifier::default();
        let client = client(&transport, &notifier);

        let mut state: FetchState<Vec<Strength>> = FetchState::Loading;
        let mut surface = ErrorSurface::new();

        let result = client.fetch_strengths().await;
        assert!(state.resolve(outcome(Resource::Strengths, result)));
        let message = state.error().map(|e| e.message.clone());
        surface.show_error(message.as_deref());
        assert!(surface.is_visible());
        assert_eq!(transport.requests.borrow().len(), 1);

        surface.dismiss();

        assert!(!surface.is_visible());
        assert_eq!(
            state.error().map(|e| e.message.as_str()),
            Some("Failed to load strengths data")
        );
        assert_eq!(transport.requests.borrow().len(), 1);
        assert_eq!(notifier.seen.borrow().len(), 1);
    }
}
