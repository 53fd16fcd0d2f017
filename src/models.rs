//! Analytics Data Model
//!
//! Plain records returned by the analytics API. The client passes them
//! through to rendering without validating or transforming them; the
//! helpers here only derive display values and never panic on odd input.

use serde::{Deserialize, Serialize};

/// A single review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub text: String,
    /// 0-5, fractional ratings are allowed
    pub rating: f64,
    pub date: String,
    pub author: String,
}

/// Aggregate statistics over all reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStatistics {
    pub total_reviews: u64,
    pub average_rating: f64,
    #[serde(default)]
    pub reviews_over_time: Vec<MonthlyCount>,
    #[serde(default)]
    pub ratings_distribution: Vec<RatingCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCount {
    pub rating: u8,
    pub count: u64,
}

/// A requested feature or improvement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRequest {
    #[serde(alias = "feature")]
    pub name: String,
    pub count: u64,
    pub percentage: f64,
}

/// A strength mentioned in reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    #[serde(alias = "strength")]
    pub name: String,
    pub count: u64,
    pub percentage: f64,
}

impl FeatureRequest {
    /// Progress bar width in percent
    pub fn bar_width(&self) -> f64 {
        clamp_percentage(self.percentage)
    }
}

impl Strength {
    /// Progress bar width in percent
    pub fn bar_width(&self) -> f64 {
        clamp_percentage(self.percentage)
    }
}

fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Year-by-year trends
///
/// Every `data` sequence is expected to have one entry per year. The API
/// does not guarantee it, so the row builders below are bounds-safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub years: Vec<String>,
    #[serde(default)]
    pub ratings: Vec<f64>,
    #[serde(default)]
    pub strengths: Vec<TrendSeries>,
    #[serde(default)]
    pub feature_requests: Vec<TrendSeries>,
}

/// One named series aligned to `TrendAnalysis::years`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub name: String,
    pub data: Vec<f64>,
}

/// One x-axis position of a trend chart
#[derive(Debug, Clone, PartialEq)]
pub struct TrendRow {
    pub year: String,
    /// One value per series, in series order; `None` where the series is short
    pub values: Vec<Option<f64>>,
}

impl TrendAnalysis {
    /// Rows for the strengths tab
    pub fn strength_rows(&self) -> Vec<TrendRow> {
        align_series(&self.years, &self.strengths)
    }

    /// Rows for the feature requests tab
    pub fn feature_request_rows(&self) -> Vec<TrendRow> {
        align_series(&self.years, &self.feature_requests)
    }

    /// Rows for the rating tab (single series)
    pub fn rating_rows(&self) -> Vec<TrendRow> {
        self.years
            .iter()
            .enumerate()
            .map(|(idx, year)| TrendRow {
                year: year.clone(),
                values: vec![self.ratings.get(idx).copied()],
            })
            .collect()
    }

    /// True when every series matches the year count
    pub fn is_aligned(&self) -> bool {
        let expected = self.years.len();
        self.ratings.len() == expected
            && self
                .strengths
                .iter()
                .chain(self.feature_requests.iter())
                .all(|series| series.data.len() == expected)
    }
}

/// Pivot named series into per-year rows
pub fn align_series(years: &[String], series: &[TrendSeries]) -> Vec<TrendRow> {
    years
        .iter()
        .enumerate()
        .map(|(idx, year)| TrendRow {
            year: year.clone(),
            values: series.iter().map(|s| s.data.get(idx).copied()).collect(),
        })
        .collect()
}

/// Share of positive, neutral and negative ratings in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Display values for the statistics row
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    pub total_reviews: u64,
    pub average_label: String,
    /// Number of highlighted stars, 0..=5
    pub filled_stars: u8,
    /// Largest monthly count, 0 when there is no history
    pub max_monthly_count: u64,
    /// `None` when the distribution is empty
    pub sentiment: Option<Sentiment>,
}

impl From<&ReviewStatistics> for StatisticsSummary {
    fn from(stats: &ReviewStatistics) -> Self {
        let average = if stats.average_rating.is_finite() {
            stats.average_rating
        } else {
            0.0
        };

        Self {
            total_reviews: stats.total_reviews,
            average_label: format!("{:.1}/5", average),
            filled_stars: average.round().clamp(0.0, 5.0) as u8,
            max_monthly_count: stats
                .reviews_over_time
                .iter()
                .map(|m| m.count)
                .max()
                .unwrap_or(0),
            sentiment: sentiment(&stats.ratings_distribution),
        }
    }
}

fn sentiment(distribution: &[RatingCount]) -> Option<Sentiment> {
    let total: u64 = distribution.iter().map(|r| r.count).sum();
    if total == 0 {
        return None;
    }

    let share = |pred: fn(u8) -> bool| {
        let count: u64 = distribution
            .iter()
            .filter(|r| pred(r.rating))
            .map(|r| r.count)
            .sum();
        count as f64 / total as f64 * 100.0
    };

    Some(Sentiment {
        positive: share(|r| r >= 4),
        neutral: share(|r| r == 3),
        negative: share(|r| r <= 2),
    })
}
