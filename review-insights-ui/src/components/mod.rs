//! UI Components
//!
//! Header, dashboard cards, charts, toasts and the export button.

pub mod breakdown;
pub mod chart;
pub mod error_modal;
pub mod export_button;
pub mod feature_requests_card;
pub mod header;
pub mod loading;
pub mod stats_card;
pub mod strengths_card;
pub mod toast;
pub mod trend_card;

pub use export_button::ExportButton;
pub use feature_requests_card::FeatureRequestsCard;
pub use header::Header;
pub use loading::ReviewListSkeleton;
pub use stats_card::ReviewStatisticsCard;
pub use strengths_card::StrengthsCard;
pub use toast::Toast;
pub use trend_card::TrendAnalysisCard;
