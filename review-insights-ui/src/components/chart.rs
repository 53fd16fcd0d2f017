//! Chart Components
//!
//! Bar, line and donut charts drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Chart colors for different series
pub const SERIES_COLORS: [&str; 6] = [
    "#0088FE", // Blue
    "#00C49F", // Green
    "#FFBB28", // Yellow
    "#FF8042", // Orange
    "#8884d8", // Purple
    "#82ca9d", // Mint
];

/// Bar color of the reviews-over-time chart
pub const BRAND_COLOR: &str = "#0073b9";

const BACKGROUND: &str = "#ffffff";
const GRID: &str = "#e5e7eb";
const LABEL: &str = "#6b7280";

pub fn series_color(idx: usize) -> &'static str {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// Vertical bar chart
#[component]
pub fn BarChart(
    labels: Vec<String>,
    values: Vec<f64>,
    #[prop(default = BRAND_COLOR)]
    color: &'static str,
    #[prop(default = 200)]
    height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &labels, &values, color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height=height
            class="w-full rounded"
            style=format!("height: {}px", height)
        />
    }
}

/// One line per series over a shared x axis
#[component]
pub fn LineChart(
    labels: Vec<String>,
    series: Vec<LineSeries>,
    /// Fixed y range, e.g. `(4.0, 5.0)` for ratings
    #[prop(optional)]
    y_range: Option<(f64, f64)>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = series
        .iter()
        .map(|s| (s.name.clone(), s.color))
        .collect::<Vec<_>>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_lines(&canvas, &labels, &series, y_range);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-[260px] rounded"
            />
            <ChartLegend items=legend />
        </div>
    }
}

/// Ring chart of shares
#[component]
pub fn DonutChart(labels: Vec<String>, values: Vec<f64>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| (label.clone(), series_color(idx)))
        .collect::<Vec<_>>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_donut(&canvas, &values);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="300"
                height="300"
                class="mx-auto w-[220px] h-[220px]"
            />
            <ChartLegend items=legend />
        </div>
    }
}

/// A named line; `None` values leave a gap
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<Option<f64>>,
}

/// Chart legend showing series colors
#[component]
fn ChartLegend(items: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-3">
            {items
                .into_iter()
                .map(|(name, color)| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", color)
                        />
                        <span class="text-xs text-gray-600">{name}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Plot area inside the margins
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn new(canvas: &HtmlCanvasElement) -> Self {
        let margin_left = 50.0;
        let margin_right = 20.0;
        let margin_top = 15.0;
        let margin_bottom = 35.0;

        Self {
            left: margin_left,
            top: margin_top,
            width: canvas.width() as f64 - margin_left - margin_right,
            height: canvas.height() as f64 - margin_top - margin_bottom,
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Canvas y for `value`, pinned to the frame when outside `min..=max`
    fn y_for(&self, value: f64, min: f64, max: f64) -> f64 {
        let value = value.max(min).min(max);
        self.top + ((max - value) / (max - min)) * self.height
    }
}

fn clear(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

fn draw_y_grid(ctx: &CanvasRenderingContext2d, frame: &Frame, min: f64, max: f64) {
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");

    for i in 0..=4 {
        let y = frame.top + (i as f64 / 4.0) * frame.height;
        ctx.begin_path();
        ctx.move_to(frame.left, y);
        ctx.line_to(frame.left + frame.width, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * (max - min);
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }
}

fn draw_no_data(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text(
        "No data",
        canvas.width() as f64 / 2.0 - 30.0,
        canvas.height() as f64 / 2.0,
    );
}

fn draw_bars(canvas: &HtmlCanvasElement, labels: &[String], values: &[f64], color: &str) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    clear(&ctx, canvas);

    if values.is_empty() {
        draw_no_data(&ctx, canvas);
        return;
    }

    let frame = Frame::new(canvas);
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let max = if max > 0.0 { max * 1.1 } else { 1.0 };
    draw_y_grid(&ctx, &frame, 0.0, max);

    let slot = frame.width / values.len() as f64;
    let bar_width = slot * 0.7;

    ctx.set_font("12px sans-serif");
    for (idx, value) in values.iter().enumerate() {
        let x = frame.left + idx as f64 * slot + (slot - bar_width) / 2.0;
        let y = frame.y_for(value.max(0.0), 0.0, max);

        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, frame.bottom() - y);

        if let Some(label) = labels.get(idx) {
            ctx.set_fill_style(&LABEL.into());
            let _ = ctx.fill_text(label, x, frame.bottom() + 20.0);
        }
    }
}

fn draw_lines(
    canvas: &HtmlCanvasElement,
    labels: &[String],
    series: &[LineSeries],
    y_range: Option<(f64, f64)>,
) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    clear(&ctx, canvas);

    let points = series
        .iter()
        .flat_map(|s| s.values.iter().flatten().copied())
        .collect::<Vec<_>>();

    if labels.is_empty() || points.is_empty() {
        draw_no_data(&ctx, canvas);
        return;
    }

    let (mut min, mut max) = y_range.unwrap_or_else(|| {
        let min = points.iter().copied().fold(f64::INFINITY, f64::min);
        let max = points.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let padding = if max > min { (max - min) * 0.1 } else { 1.0 };
        (min - padding, max + padding)
    });
    if min == max {
        min -= 1.0;
        max += 1.0;
    }

    let frame = Frame::new(canvas);
    draw_y_grid(&ctx, &frame, min, max);

    let step = if labels.len() > 1 {
        frame.width / (labels.len() - 1) as f64
    } else {
        0.0
    };
    let x_for = |idx: usize| {
        if labels.len() > 1 {
            frame.left + idx as f64 * step
        } else {
            frame.left + frame.width / 2.0
        }
    };

    for s in series {
        ctx.set_stroke_style(&s.color.into());
        ctx.set_fill_style(&s.color.into());
        ctx.set_line_width(2.0);

        // a missing value breaks the line
        ctx.begin_path();
        let mut pen_down = false;
        for (idx, value) in s.values.iter().enumerate().take(labels.len()) {
            match value {
                Some(v) => {
                    let (x, y) = (x_for(idx), frame.y_for(*v, min, max));
                    if pen_down {
                        ctx.line_to(x, y);
                    } else {
                        ctx.move_to(x, y);
                        pen_down = true;
                    }
                }
                None => pen_down = false,
            }
        }
        ctx.stroke();

        for (idx, value) in s.values.iter().enumerate().take(labels.len()) {
            if let Some(v) = value {
                ctx.begin_path();
                let _ = ctx.arc(
                    x_for(idx),
                    frame.y_for(*v, min, max),
                    4.0,
                    0.0,
                    std::f64::consts::PI * 2.0,
                );
                ctx.fill();
            }
        }
    }

    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");
    for (idx, label) in labels.iter().enumerate() {
        let _ = ctx.fill_text(label, x_for(idx) - 15.0, frame.bottom() + 20.0);
    }
}

fn draw_donut(canvas: &HtmlCanvasElement, values: &[f64]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    clear(&ctx, canvas);

    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        draw_no_data(&ctx, canvas);
        return;
    }

    let cx = canvas.width() as f64 / 2.0;
    let cy = canvas.height() as f64 / 2.0;
    let outer = cx.min(cy) * 0.8;
    let inner = outer * 0.55 / 0.8;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (idx, value) in values.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let sweep = value / total * std::f64::consts::PI * 2.0;

        ctx.set_fill_style(&series_color(idx).into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, start + sweep);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, start + sweep, start, true);
        ctx.close_path();
        ctx.fill();

        start += sweep;
    }
}
