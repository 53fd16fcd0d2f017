//! PDF Report Export
//!
//! Captures the rendered dashboard as one raster and slices it across
//! fixed-size pages.
//!
//! - [`geometry`]: unit conversion, scaling and page placement
//! - [`chrome`]: hides header/button during capture, restores on drop
//! - [`lock`]: refuses overlapping exports
//! - [`pipeline`]: the capture → pages → save sequence

pub mod chrome;
pub mod geometry;
pub mod lock;
pub mod pipeline;

pub use chrome::{ChromeElement, HiddenChrome};
pub use geometry::{
    layout, page_count, ExportSettings, ImagePlacement, PageLayout, LEGACY_HEIGHT_CORRECTION,
    PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PIXEL_DENSITY, PX_PER_MM, REPORT_FILE_NAME, SETTLE_DELAY_MS,
};
pub use lock::{ExportLock, ExportTicket};
pub use pipeline::{export_report, ExportReport, Raster, ReportDocument, ReportExporter, Viewport};

use thiserror::Error;

/// Errors raised while exporting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Another export holds the lock
    #[error("An export is already in progress")]
    InProgress,

    /// A required DOM node is missing
    #[error("Element not found: {0}")]
    MissingRoot(String),

    /// Rasterisation failed
    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("Captured image is empty ({width}x{height} px)")]
    EmptyRaster { width: u32, height: u32 },

    #[error("Invalid export settings: {0}")]
    InvalidSettings(String),

    /// PDF writer failure
    #[error("PDF generation failed: {0}")]
    Document(String),
}
