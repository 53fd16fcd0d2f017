//! Page geometry for the PDF report
//!
//! The whole page is captured as one tall raster. The raster is scaled so
//! its width fills the page exactly, then the same image is placed once per
//! page, shifted up by one page height each time so every page shows the
//! next vertical slice.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ExportError;

/// File name of the generated report
pub const REPORT_FILE_NAME: &str = "e-GMAT_Analysis_Report.pdf";

/// Portrait page width in millimetres
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// Page height in millimetres
pub const PAGE_HEIGHT_MM: f64 = 398.0;

/// Capture resolution multiplier
pub const PIXEL_DENSITY: f64 = 2.0;

/// CSS pixels per millimetre (96 dpi)
pub const PX_PER_MM: f64 = 96.0 / 25.4;

/// Wait after scrolling to the top before capturing
pub const SETTLE_DELAY_MS: u64 = 500;

/// Height multiplier the first version of the report shipped with.
/// Stretches every slice vertically; kept for reproducing old reports.
pub const LEGACY_HEIGHT_CORRECTION: f64 = 1.3;

/// Slack when deciding whether content spills onto another page
const PAGE_EPSILON_MM: f64 = 1e-6;

/// Tunables for the export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub pixel_density: f64,
    pub px_per_mm: f64,
    pub settle_delay_ms: u64,
    /// Multiplier on the placed image height; 1.0 preserves aspect ratio
    pub height_correction: f64,
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            page_width_mm: PAGE_WIDTH_MM,
            page_height_mm: PAGE_HEIGHT_MM,
            pixel_density: PIXEL_DENSITY,
            px_per_mm: PX_PER_MM,
            settle_delay_ms: SETTLE_DELAY_MS,
            height_correction: 1.0,
            file_name: REPORT_FILE_NAME.to_string(),
        }
    }
}

impl ExportSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Same settings with the legacy 1.3x height stretch
    pub fn legacy() -> Self {
        Self {
            height_correction: LEGACY_HEIGHT_CORRECTION,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        let positive = [
            ("page_width_mm", self.page_width_mm),
            ("page_height_mm", self.page_height_mm),
            ("pixel_density", self.pixel_density),
            ("px_per_mm", self.px_per_mm),
            ("height_correction", self.height_correction),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ExportError::InvalidSettings(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.file_name.trim().is_empty() {
            return Err(ExportError::InvalidSettings(
                "file_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Where the raster goes on one page, in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub page_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Result of fitting a raster onto pages
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Raster size converted to millimetres
    pub image_width_mm: f64,
    pub image_height_mm: f64,
    /// Factor applied so the width matches the page width
    pub scale: f64,
    pub scaled_height_mm: f64,
    pub page_count: usize,
    pub placements: Vec<ImagePlacement>,
}

/// Pages needed for content of `scaled_height_mm`
pub fn page_count(scaled_height_mm: f64, page_height_mm: f64) -> usize {
    if scaled_height_mm <= 0.0 || page_height_mm <= 0.0 {
        return 0;
    }
    ((scaled_height_mm - PAGE_EPSILON_MM) / page_height_mm).ceil().max(1.0) as usize
}

/// Fit a `width_px` x `height_px` raster onto pages
pub fn layout(
    width_px: u32,
    height_px: u32,
    settings: &ExportSettings,
) -> Result<PageLayout, ExportError> {
    settings.validate()?;

    if width_px == 0 || height_px == 0 {
        return Err(ExportError::EmptyRaster {
            width: width_px,
            height: height_px,
        });
    }

    let image_width_mm = width_px as f64 / settings.px_per_mm;
    let image_height_mm = height_px as f64 / settings.px_per_mm;

    let scale = settings.page_width_mm / image_width_mm;
    let scaled_height_mm = image_height_mm * scale;
    let pages = page_count(scaled_height_mm, settings.page_height_mm);

    let placements = (0..pages)
        .map(|page_index| ImagePlacement {
            page_index,
            x: 0.0,
            // 0.0 - x keeps the first offset at +0.0
            y: 0.0 - page_index as f64 * settings.page_height_mm,
            width: settings.page_width_mm,
            height: scaled_height_mm * settings.height_correction,
        })
        .collect();

    Ok(PageLayout {
        image_width_mm,
        image_height_mm,
        scale,
        scaled_height_mm,
        page_count: pages,
        placements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_ceiling() {
        assert_eq!(page_count(1200.0, 398.0), 4);
        assert_eq!(page_count(398.0, 398.0), 1);
        assert_eq!(page_count(398.5, 398.0), 2);
        assert_eq!(page_count(10.0, 398.0), 1);
        assert_eq!(page_count(0.0, 398.0), 0);
    }

    #[test]
    fn test_page_count_ignores_float_noise() {
        assert_eq!(page_count(796.000_000_000_1, 398.0), 2);
    }

    #[test]
    fn test_layout_fills_page_width() {
        // 2100 x 12000 px scales to 210 x 1200 mm whatever the px/mm ratio
        let settings = ExportSettings::default();
        let layout = layout(2100, 12000, &settings).unwrap();

        assert!((layout.scaled_height_mm - 1200.0).abs() < 1e-9);
        assert_eq!(layout.page_count, 4);
        assert_eq!(layout.placements.len(), 4);

        for (i, placement) in layout.placements.iter().enumerate() {
            assert_eq!(placement.page_index, i);
            assert_eq!(placement.x, 0.0);
            assert_eq!(placement.y, -(i as f64 * 398.0));
            assert_eq!(placement.width, 210.0);
            assert!((placement.height - 1200.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_page_offset_is_positive_zero() {
        let layout = layout(2100, 12000, &ExportSettings::default()).unwrap();
        let first = layout.placements[0].y;

        assert!(first.is_sign_positive());
        assert_eq!(format!("{:.1}", first), "0.0");
        assert_eq!(layout.placements[1].y, -398.0);
    }

    #[test]
    fn test_layout_mm_conversion() {
        let settings = ExportSettings::default();
        let layout = layout(1588, 3000, &settings).unwrap();

        assert!((layout.image_width_mm - 1588.0 / PX_PER_MM).abs() < 1e-9);
        assert!((layout.scale * layout.image_width_mm - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_height_correction() {
        let layout = layout(2100, 3980, &ExportSettings::legacy()).unwrap();
        assert_eq!(layout.page_count, 1);
        assert!((layout.placements[0].height - 398.0 * 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_layout_rejects_empty_raster() {
        let result = layout(0, 100, &ExportSettings::default());
        assert_eq!(result, Err(ExportError::EmptyRaster { width: 0, height: 100 }));
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = ExportSettings::default();
        assert!(settings.validate().is_ok());

        settings.page_height_mm = 0.0;
        assert!(matches!(settings.validate(), Err(ExportError::InvalidSettings(_))));

        let settings = ExportSettings {
            file_name: "  ".into(),
            ..ExportSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_partial_toml_shape() {
        let settings: ExportSettings =
            serde_json::from_str(r#"{"height_correction": 1.3}"#).unwrap();
        assert_eq!(settings.height_correction, 1.3);
        assert_eq!(settings.page_height_mm, PAGE_HEIGHT_MM);
        assert_eq!(settings.file_name, REPORT_FILE_NAME);
    }
}
