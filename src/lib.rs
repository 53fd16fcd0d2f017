//! # Review Insights
//!
//! Data layer for the e-GMAT review analytics dashboard: typed access to the
//! analytics backend, per-card loading state, a backend error surface, and
//! PDF export of the rendered dashboard.
//!
//! The crate compiles for the browser (`--no-default-features`, used by the
//! `review-insights-ui` Leptos app) and natively, where the `native` feature
//! adds a reqwest transport, TOML configuration and the `review-insights` CLI.
//!
//! ## Modules
//!
//! - [`models`]: wire types and the view helpers the cards render from
//! - [`client`]: backend client, transport seam, notifications
//! - [`state`]: loading/success/failure state and the error modal model
//! - [`export`]: page geometry and the capture → PDF pipeline
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use review_insights::client::{AnalyticsClient, ReqwestTransport, TracingNotifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalyticsClient::new(
//!         "http://localhost:8000",
//!         ReqwestTransport::new(),
//!         TracingNotifier,
//!     );
//!
//!     let stats = client.fetch_review_statistics().await?;
//!     println!("{} reviews, avg {:.1}", stats.total_reviews, stats.average_rating);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod export;
pub mod models;
pub mod state;

pub use client::{
    AnalyticsClient, FetchError, Notification, NotificationVariant, Notifier, Resource,
    Transport, DEFAULT_API_BASE,
};

pub use config::{ApiConfig, Config, LoggingConfig};

#[cfg(feature = "native")]
pub use config::ConfigError;

pub use export::{ExportError, ExportReport, ExportSettings, PageLayout, ReportExporter};

pub use models::{
    FeatureRequest, Review, ReviewStatistics, Sentiment, StatisticsSummary, Strength,
    TrendAnalysis, TrendRow, TrendSeries,
};

pub use state::{ErrorInfo, ErrorSurface, FetchState};
