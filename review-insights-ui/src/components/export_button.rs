//! PDF Export Button
//!
//! Browser side of the report export: html2canvas captures the page,
//! jsPDF writes the pages. Both libraries are loaded from `index.html`.

use async_trait::async_trait;
use js_sys::{Array, Object, Promise, Reflect};
use leptos::*;
use review_insights::export::{
    ChromeElement, ExportError, ExportSettings, ImagePlacement, Raster, ReportDocument,
    ReportExporter, Viewport,
};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};

use super::header::{HEADER_ID, OUTLINE_BUTTON};
use crate::api::ToastNotifier;
use crate::state::global::use_global_state;

/// DOM id of the button itself, hidden during capture
pub const EXPORT_BUTTON_ID: &str = "pdf-export-button";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas, catch)]
    fn html2canvas(element: &HtmlElement, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, js_namespace = jspdf, js_class = "jsPDF", catch)]
    fn new(options: &JsValue) -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method, js_name = addPage, catch)]
    fn add_page(this: &JsPdf) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = addImage, catch)]
    fn add_image(
        this: &JsPdf,
        data_url: &str,
        format: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn save(this: &JsPdf, file_name: &str) -> Result<JsValue, JsValue>;
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object.into()
}

/// Element whose inline `display` style is toggled
pub struct DomChrome(HtmlElement);

impl DomChrome {
    /// Chrome elements currently in the document
    pub fn collect(ids: &[&str]) -> Vec<DomChrome> {
        ids.iter()
            .filter_map(|id| document().get_element_by_id(id))
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
            .map(DomChrome)
            .collect()
    }
}

impl ChromeElement for DomChrome {
    fn display(&self) -> String {
        self.0
            .style()
            .get_property_value("display")
            .unwrap_or_default()
    }

    fn set_display(&self, value: &str) {
        if let Err(e) = apply_display(&self.0, value) {
            logging::warn!(
                "Could not set display of #{} to {:?}: {}",
                self.0.id(),
                value,
                js_message(&e)
            );
        }
    }
}

/// Write `display`; an empty value removes the inline property
fn apply_display(element: &HtmlElement, value: &str) -> Result<(), JsValue> {
    let style = element.style();
    if value.is_empty() {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", value)
    }
}

/// The live page
pub struct BrowserViewport;

#[async_trait(?Send)]
impl Viewport for BrowserViewport {
    fn scroll_to_origin(&self) {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn scroll_height(&self) -> Result<f64, ExportError> {
        document()
            .document_element()
            .map(|root| root.scroll_height() as f64)
            .ok_or_else(|| ExportError::MissingRoot("documentElement".to_string()))
    }

    async fn settle(&self, delay: Duration) {
        gloo_timers::future::sleep(delay).await;
    }

    async fn capture(&self, pixel_density: f64, height: f64) -> Result<Raster, ExportError> {
        let body = document()
            .body()
            .ok_or_else(|| ExportError::MissingRoot("body".to_string()))?;

        let opts = options(&[
            ("scale", pixel_density.into()),
            ("height", height.into()),
            ("windowHeight", height.into()),
            ("useCORS", true.into()),
            ("logging", false.into()),
        ]);

        let promise = html2canvas(&body, &opts).map_err(|e| ExportError::Capture(js_message(&e)))?;
        let canvas: HtmlCanvasElement = JsFuture::from(promise)
            .await
            .map_err(|e| ExportError::Capture(js_message(&e)))?
            .dyn_into()
            .map_err(|_| ExportError::Capture("html2canvas did not return a canvas".to_string()))?;

        let data_url = canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| ExportError::Capture(js_message(&e)))?;

        Ok(Raster {
            width_px: canvas.width(),
            height_px: canvas.height(),
            data_url,
        })
    }
}

/// jsPDF document sized from the export settings
pub struct JsPdfDocument {
    pdf: JsPdf,
}

impl JsPdfDocument {
    pub fn new(settings: &ExportSettings) -> Result<Self, ExportError> {
        let format = Array::of2(
            &settings.page_width_mm.into(),
            &settings.page_height_mm.into(),
        );
        let opts = options(&[
            ("orientation", "portrait".into()),
            ("unit", "mm".into()),
            ("format", format.into()),
        ]);

        let pdf = JsPdf::new(&opts).map_err(|e| ExportError::Document(js_message(&e)))?;
        Ok(Self { pdf })
    }
}

impl ReportDocument for JsPdfDocument {
    fn add_page(&mut self) -> Result<(), ExportError> {
        self.pdf
            .add_page()
            .map(|_| ())
            .map_err(|e| ExportError::Document(js_message(&e)))
    }

    fn add_image(&mut self, raster: &Raster, placement: &ImagePlacement) -> Result<(), ExportError> {
        self.pdf
            .add_image(
                &raster.data_url,
                "PNG",
                placement.x,
                placement.y,
                placement.width,
                placement.height,
            )
            .map(|_| ())
            .map_err(|e| ExportError::Document(js_message(&e)))
    }

    fn save(&mut self, file_name: &str) -> Result<(), ExportError> {
        self.pdf
            .save(file_name)
            .map(|_| ())
            .map_err(|e| ExportError::Document(js_message(&e)))
    }
}

/// "Export PDF" trigger, disabled while an export runs
#[component]
pub fn ExportButton() -> impl IntoView {
    let state = use_global_state();
    let exporter = Rc::new(ReportExporter::new(
        ExportSettings::default(),
        ToastNotifier::new(state),
    ));
    let (exporting, set_exporting) = create_signal(false);

    let on_click = move |_| {
        let exporter = Rc::clone(&exporter);
        set_exporting.set(true);

        spawn_local(async move {
            let chrome = DomChrome::collect(&[HEADER_ID, EXPORT_BUTTON_ID]);
            match exporter
                .export(&BrowserViewport, chrome, JsPdfDocument::new)
                .await
            {
                Ok(report) => logging::log!(
                    "Saved {} ({} pages)",
                    report.file_name,
                    report.page_count
                ),
                Err(ExportError::InProgress) => {}
                Err(e) => logging::error!("PDF export failed: {}", e),
            }
            set_exporting.try_set(false);
        });
    };

    view! {
        <button
            id=EXPORT_BUTTON_ID
            class=OUTLINE_BUTTON
            disabled=move || exporting.get()
            on:click=on_click
        >
            {move || if exporting.get() { "Generating PDF..." } else { "Export PDF" }}
        </button>
    }
}
