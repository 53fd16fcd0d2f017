//! Review Insights CLI
//!
//! Command-line companion to the dashboard:
//! - Check which analytics endpoints answer
//! - Print a resource the way the dashboard receives it
//! - Preview how a page of a given size splits into PDF pages
//! - Generate a default config file

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use review_insights::client::{AnalyticsClient, ReqwestTransport, Resource, TracingNotifier};
use review_insights::config::{generate_default_config, Config, LoggingConfig};
use review_insights::export::{layout, ExportSettings};
use review_insights::models::StatisticsSummary;

#[derive(Parser)]
#[command(name = "review-insights")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the e-GMAT review analytics backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/review-insights/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Analytics API base URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe every analytics endpoint
    Status,

    /// Fetch one resource and print it
    Show {
        /// reviews, statistics, features, strengths or trends
        resource: Resource,
        /// Print the decoded resource as normalized JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show how a captured page would be split across PDF pages
    Plan {
        /// Captured raster width in pixels
        #[arg(long)]
        width_px: u32,
        /// Captured raster height in pixels
        #[arg(long)]
        height_px: u32,
        /// Use the 1.3x height stretch of early reports
        #[arg(long)]
        legacy: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default().context("loading default config")?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_tracing(&config.logging);

    let client = AnalyticsClient::new(
        config.api.base_url.clone(),
        ReqwestTransport::new(),
        TracingNotifier,
    );

    match cli.command {
        Commands::Status => {
            println!("Review Insights v{}", env!("CARGO_PKG_VERSION"));
            println!("API: {}", client.base_url());
            println!("Checked at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
            println!();
            println!("{:<18} {:<18} {}", "Resource", "Path", "Status");
            println!("{}", "-".repeat(50));

            let mut failures = 0;
            for resource in Resource::ALL {
                let status = match client.probe(resource).await {
                    Ok(code) => format!("ok ({})", code),
                    Err(e) => {
                        failures += 1;
                        e.to_string()
                    }
                };
                println!("{:<18} {:<18} {}", resource.label(), resource.path(), status);
            }

            if failures > 0 {
                println!();
                bail!("{} of {} endpoints unavailable", failures, Resource::ALL.len());
            }
        }

        Commands::Show { resource, json } => show(&client, resource, json).await?,

        Commands::Plan {
            width_px,
            height_px,
            legacy,
        } => {
            let settings = if legacy {
                ExportSettings {
                    height_correction: review_insights::export::LEGACY_HEIGHT_CORRECTION,
                    ..config.export.clone()
                }
            } else {
                config.export.clone()
            };
            let plan = layout(width_px, height_px, &settings)?;

            println!(
                "Raster: {} x {} px ({:.1} x {:.1} mm)",
                width_px, height_px, plan.image_width_mm, plan.image_height_mm
            );
            println!(
                "Scaled to {:.1} x {:.1} mm (factor {:.4})",
                settings.page_width_mm, plan.scaled_height_mm, plan.scale
            );
            println!(
                "Pages: {} of {} x {} mm -> {}",
                plan.page_count, settings.page_width_mm, settings.page_height_mm, settings.file_name
            );
            println!();
            println!("{:<6} {:>10} {:>12}", "Page", "Offset", "Height");
            for placement in &plan.placements {
                println!(
                    "{:<6} {:>10.1} {:>12.1}",
                    placement.page_index + 1,
                    placement.y,
                    placement.height
                );
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("review_insights={}", logging.level).into());

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn show(
    client: &AnalyticsClient<ReqwestTransport, TracingNotifier>,
    resource: Resource,
    json: bool,
) -> anyhow::Result<()> {
    match resource {
        Resource::Reviews => {
            let reviews = client.fetch_reviews().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&reviews)?);
            } else if reviews.is_empty() {
                println!("No reviews available.");
            } else {
                println!("Latest Reviews ({})", reviews.len());
                println!();
                for review in &reviews {
                    println!("{:.1}/5  {}  {}", review.rating, review.date, review.author);
                    println!("  {}", review.text);
                }
            }
        }

        Resource::Statistics => {
            let stats = client.fetch_review_statistics().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                let summary = StatisticsSummary::from(&stats);
                println!("Total reviews:  {}", summary.total_reviews);
                println!(
                    "Average rating: {} {}",
                    summary.average_label,
                    "*".repeat(summary.filled_stars as usize)
                );
                println!("Busiest month:  {} reviews", summary.max_monthly_count);
                match summary.sentiment {
                    Some(s) => println!(
                        "Sentiment:      {:.0}% positive, {:.0}% neutral, {:.0}% negative",
                        s.positive, s.neutral, s.negative
                    ),
                    None => println!("Sentiment:      no ratings yet"),
                }
            }
        }

        Resource::FeatureRequests => {
            let features = client.fetch_feature_requests().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&features)?);
            } else {
                println!("{:<40} {:>8} {:>8}", "Feature", "Count", "Share");
                for f in &features {
                    println!("{:<40} {:>8} {:>7.1}%", f.name, f.count, f.percentage);
                }
            }
        }

        Resource::Strengths => {
            let strengths = client.fetch_strengths().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&strengths)?);
            } else {
                println!("{:<40} {:>8} {:>8}", "Strength", "Count", "Share");
                for s in &strengths {
                    println!("{:<40} {:>8} {:>7.1}%", s.name, s.count, s.percentage);
                }
            }
        }

        Resource::TrendAnalysis => {
            let trends = client.fetch_trend_analysis().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&trends)?);
            } else {
                if !trends.is_aligned() {
                    tracing::warn!("Trend series lengths do not match the year axis");
                }
                let names = |series: &[review_insights::models::TrendSeries]| {
                    series.iter().map(|s| s.name.clone()).collect::<Vec<_>>()
                };
                for (title, rows, header) in [
                    ("Ratings", trends.rating_rows(), vec!["Average".to_string()]),
                    ("Strengths", trends.strength_rows(), names(&trends.strengths)),
                    (
                        "Feature requests",
                        trends.feature_request_rows(),
                        names(&trends.feature_requests),
                    ),
                ] {
                    println!("{}", title);
                    println!("  {:<8} {}", "Year", header.join(" | "));
                    for row in rows {
                        let cells: Vec<String> = row
                            .values
                            .iter()
                            .map(|v| v.map(|x| format!("{:.1}", x)).unwrap_or_else(|| "-".into()))
                            .collect();
                        println!("  {:<8} {}", row.year, cells.join(" | "));
                    }
                    println!();
                }
            }
        }
    }

    Ok(())
}
