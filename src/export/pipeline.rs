//! Capture → geometry → pagination → save
//!
//! The browser supplies the `Viewport` (scrolling, settle delay, raster
//! capture) and the `ReportDocument` (PDF writer). Either everything is
//! written and saved, or nothing is saved.

use async_trait::async_trait;
use std::time::Duration;

use super::chrome::{ChromeElement, HiddenChrome};
use super::geometry::{layout, ExportSettings, ImagePlacement, PageLayout};
use super::lock::ExportLock;
use super::ExportError;
use crate::client::{Notification, Notifier};

/// A captured image of the page
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width_px: u32,
    pub height_px: u32,
    /// `data:image/png;base64,...`
    pub data_url: String,
}

/// The rendered page being exported
#[async_trait(?Send)]
pub trait Viewport {
    fn scroll_to_origin(&self);

    /// Full document height in CSS pixels
    fn scroll_height(&self) -> Result<f64, ExportError>;

    /// Give layout time to settle
    async fn settle(&self, delay: Duration);

    /// Rasterise the document body at `pixel_density`, `height` CSS pixels tall
    async fn capture(&self, pixel_density: f64, height: f64) -> Result<Raster, ExportError>;
}

/// Multi-page document writer
///
/// A fresh document starts with one empty page.
pub trait ReportDocument {
    fn add_page(&mut self) -> Result<(), ExportError>;
    fn add_image(&mut self, raster: &Raster, placement: &ImagePlacement)
        -> Result<(), ExportError>;
    fn save(&mut self, file_name: &str) -> Result<(), ExportError>;
}

/// Summary of a finished export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub file_name: String,
    pub page_count: usize,
    pub layout: PageLayout,
}

/// Run one export with the chrome hidden for its whole duration
pub async fn export_report<V, E, D, F>(
    viewport: &V,
    chrome: Vec<E>,
    new_document: F,
    settings: &ExportSettings,
) -> Result<ExportReport, ExportError>
where
    V: Viewport + ?Sized,
    E: ChromeElement,
    D: ReportDocument,
    F: FnOnce(&ExportSettings) -> Result<D, ExportError>,
{
    settings.validate()?;

    let _hidden = HiddenChrome::hide(chrome);

    viewport.scroll_to_origin();
    viewport.settle(settings.settle_delay()).await;

    let height = viewport.scroll_height()?;
    let raster = viewport.capture(settings.pixel_density, height).await?;
    tracing::info!(
        width = raster.width_px,
        height = raster.height_px,
        "Captured page raster"
    );

    let layout = layout(raster.width_px, raster.height_px, settings)?;

    let mut document = new_document(settings)?;
    for placement in &layout.placements {
        if placement.page_index > 0 {
            document.add_page()?;
        }
        document.add_image(&raster, placement)?;
    }
    document.save(&settings.file_name)?;

    tracing::info!(pages = layout.page_count, file = %settings.file_name, "Report saved");

    Ok(ExportReport {
        file_name: settings.file_name.clone(),
        page_count: layout.page_count,
        layout,
    })
}

/// Export entry point behind the button: single-flight, notifies on outcome
pub struct ReportExporter<N> {
    settings: ExportSettings,
    lock: ExportLock,
    notifier: N,
}

impl<N: Notifier> ReportExporter<N> {
    pub fn new(settings: ExportSettings, notifier: N) -> Self {
        Self {
            settings,
            lock: ExportLock::new(),
            notifier,
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Shared handle to the in-progress flag, for disabling the trigger
    pub fn lock(&self) -> ExportLock {
        self.lock.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.lock.is_busy()
    }

    pub async fn export<V, E, D, F>(
        &self,
        viewport: &V,
        chrome: Vec<E>,
        new_document: F,
    ) -> Result<ExportReport, ExportError>
    where
        V: Viewport + ?Sized,
        E: ChromeElement,
        D: ReportDocument,
        F: FnOnce(&ExportSettings) -> Result<D, ExportError>,
    {
        let Some(_ticket) = self.lock.try_acquire() else {
            tracing::warn!("Export already in progress, ignoring trigger");
            return Err(ExportError::InProgress);
        };

        match export_report(viewport, chrome, new_document, &self.settings).await {
            Ok(report) => {
                self.notifier.notify(Notification::info(
                    "Report Generated",
                    "Your analysis report has been successfully generated.",
                ));
                Ok(report)
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                self.notifier.notify(Notification::error(
                    "Export Failed",
                    format!("Could not generate the PDF report: {}", e),
                ));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::chrome::tests::FakeElement;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Scroll,
        Settle(Duration),
        Capture(f64, f64),
        AddPage,
        AddImage(ImagePlacement),
        Save(String),
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct FakeViewport {
        log: Log,
        height: f64,
        raster: Result<Raster, ExportError>,
        header: FakeElement,
        header_seen_during_capture: RefCell<Option<String>>,
    }

    impl FakeViewport {
        fn new(log: &Log, raster: Result<Raster, ExportError>, header: &FakeElement) -> Self {
            Self {
                log: Rc::clone(log),
                height: 6000.0,
                raster,
                header: header.clone(),
                header_seen_during_capture: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl Viewport for FakeViewport {
        fn scroll_to_origin(&self) {
            self.log.borrow_mut().push(Call::Scroll);
        }

        fn scroll_height(&self) -> Result<f64, ExportError> {
            Ok(self.height)
        }

        async fn settle(&self, delay: Duration) {
            self.log.borrow_mut().push(Call::Settle(delay));
        }

        async fn capture(&self, pixel_density: f64, height: f64) -> Result<Raster, ExportError> {
            *self.header_seen_during_capture.borrow_mut() = Some(self.header.current());
            self.log
                .borrow_mut()
                .push(Call::Capture(pixel_density, height));
            self.raster.clone()
        }
    }

    struct FakeDocument {
        log: Log,
        fail_on_image: Option<usize>,
        images: usize,
    }

    impl ReportDocument for FakeDocument {
        fn add_page(&mut self) -> Result<(), ExportError> {
            self.log.borrow_mut().push(Call::AddPage);
            Ok(())
        }

        fn add_image(
            &mut self,
            _raster: &Raster,
            placement: &ImagePlacement,
        ) -> Result<(), ExportError> {
            if self.fail_on_image == Some(self.images) {
                return Err(ExportError::Document("image too large".into()));
            }
            self.images += 1;
            self.log.borrow_mut().push(Call::AddImage(*placement));
            Ok(())
        }

        fn save(&mut self, file_name: &str) -> Result<(), ExportError> {
            self.log.borrow_mut().push(Call::Save(file_name.to_string()));
            Ok(())
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

    fn raster(width_px: u32, height_px: u32) -> Raster {
        Raster {
            width_px,
            height_px,
            data_url: "data:image/png;base64,AAAA".into(),
        }
    }

    fn document(log: &Log, fail_on_image: Option<usize>) -> impl FnOnce(&ExportSettings) -> Result<FakeDocument, ExportError> {
        let log = Rc::clone(log);
        move |_settings| {
            Ok(FakeDocument {
                log,
                fail_on_image,
                images: 0,
            })
        }
    }

    #[tokio::test]
    async fn test_export_paginates_and_saves() {
        let log: Log = Rc::default();
        let header = FakeElement::new("flex");
        let button = FakeElement::new("");
        let viewport = FakeViewport::new(&log, Ok(raster(2100, 12000)), &header);

        let report = export_report(
            &viewport,
            vec![header.clone(), button.clone()],
            document(&log, None),
            &ExportSettings::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.page_count, 4);
        assert_eq!(report.file_name, "e-GMAT_Analysis_Report.pdf");

        let calls = log.borrow();
        assert_eq!(calls[0], Call::Scroll);
        assert_eq!(calls[1], Call::Settle(Duration::from_millis(500)));
        assert_eq!(calls[2], Call::Capture(2.0, 6000.0));

        let pages = calls.iter().filter(|c| **c == Call::AddPage).count();
        let offsets: Vec<f64> = calls
            .iter()
            .filter_map(|c| match c {
                Call::AddImage(p) => Some(p.y),
                _ => None,
            })
            .collect();
        assert_eq!(pages, 3);
        assert_eq!(offsets, vec![0.0, -398.0, -796.0, -1194.0]);
        assert_eq!(
            calls.last(),
            Some(&Call::Save("e-GMAT_Analysis_Report.pdf".to_string()))
        );

        assert_eq!(viewport.header_seen_during_capture.borrow().as_deref(), Some("none"));
        assert_eq!(header.current(), "flex");
        assert_eq!(button.current(), "");
    }

    #[tokio::test]
    async fn test_capture_failure_restores_chrome() {
        let log: Log = Rc::default();
        let header = FakeElement::new("block");
        let button = FakeElement::new("inline-flex");
        let viewport = FakeViewport::new(
            &log,
            Err(ExportError::Capture("canvas tainted".into())),
            &header,
        );

        let result = export_report(
            &viewport,
            vec![header.clone(), button.clone()],
            document(&log, None),
            &ExportSettings::default(),
        )
        .await;

        assert_eq!(result, Err(ExportError::Capture("canvas tainted".into())));
        assert_eq!(header.current(), "block");
        assert_eq!(button.current(), "inline-flex");
        assert!(!log.borrow().iter().any(|c| matches!(c, Call::Save(_))));
    }

    #[tokio::test]
    async fn test_pagination_failure_saves_nothing() {
        let log: Log = Rc::default();
        let header = FakeElement::new("");
        let viewport = FakeViewport::new(&log, Ok(raster(2100, 12000)), &header);

        let result = export_report(
            &viewport,
            vec![header.clone()],
            document(&log, Some(2)),
            &ExportSettings::default(),
        )
        .await;

        assert!(matches!(result, Err(ExportError::Document(_))));
        assert!(!log.borrow().iter().any(|c| matches!(c, Call::Save(_))));
        assert_eq!(header.current(), "");
    }

    #[tokio::test]
    async fn test_exporter_notifies_success_and_failure() {
        let log: Log = Rc::default();
        let notifier = RecordingNotifier::default();
        let exporter = ReportExporter::new(ExportSettings::default(), &notifier);
        let header = FakeElement::new("");

        let ok_viewport = FakeViewport::new(&log, Ok(raster(800, 400)), &header);
        let report = exporter
            .export(&ok_viewport, vec![header.clone()], document(&log, None))
            .await
            .unwrap();
        assert_eq!(report.page_count, 1);

        let bad_viewport =
            FakeViewport::new(&log, Err(ExportError::MissingRoot("body".into())), &header);
        assert!(exporter
            .export(&bad_viewport, vec![header.clone()], document(&log, None))
            .await
            .is_err());

        let seen = notifier.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].title, "Report Generated");
        assert!(!seen[0].is_destructive());
        assert_eq!(seen[1].title, "Export Failed");
        assert!(seen[1].is_destructive());
        assert!(!exporter.is_busy());
    }

    #[tokio::test]
    async fn test_exporter_refuses_reentry() {
        let log: Log = Rc::default();
        let notifier = RecordingNotifier::default();
        let exporter = ReportExporter::new(ExportSettings::default(), &notifier);
        let header = FakeElement::new("flex");
        let viewport = FakeViewport::new(&log, Ok(raster(800, 400)), &header);

        let _running = exporter.lock().try_acquire().unwrap();
        let result = exporter
            .export(&viewport, vec![header.clone()], document(&log, None))
            .await;

        assert_eq!(result, Err(ExportError::InProgress));
        assert!(log.borrow().is_empty());
        assert_eq!(header.current(), "flex");
        assert!(notifier.seen.borrow().is_empty());
    }
}
