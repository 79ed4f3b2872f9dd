//! Inline SVG rendering for `ChartSpec` descriptors. Geometry is computed by
//! pure helpers so layout stays testable without a renderer.

use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::{ChartKind, ChartSpec};

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 360.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 34.0;
const MARGIN_BOTTOM: f64 = 78.0;

const PLOT_W: f64 = VIEW_W - MARGIN_LEFT - MARGIN_RIGHT;
const PLOT_H: f64 = VIEW_H - MARGIN_TOP - MARGIN_BOTTOM;

// Bars take this share of their category slot.
const BAR_FILL_RATIO: f64 = 0.6;
const VALUE_TICKS: usize = 5;

#[component]
pub fn MetricsChart(spec: ChartSpec) -> Element {
    if spec.points.is_empty() {
        // Policy for empty datasets: a placeholder card, never an empty axis
        // frame or a divide-by-zero in the scaling math.
        return rsx! {
            figure { class: "metrics-chart metrics-chart--empty",
                figcaption { class: "metrics-chart__title", "{spec.title}" }
                p { class: "metrics-chart__placeholder", "No data to chart yet." }
            }
        };
    }

    let layout = ChartLayout::from_spec(&spec);

    rsx! {
        figure { class: "metrics-chart",
            figcaption { class: "metrics-chart__title", "{spec.title}" }
            svg {
                class: "metrics-chart__canvas",
                view_box: "0 0 640 360",
                role: "img",
                "aria-label": "{spec.title}",

                for gridline in layout.gridlines.iter() {
                    line {
                        class: "metrics-chart__gridline",
                        x1: "{gridline.x1}",
                        y1: "{gridline.y1}",
                        x2: "{gridline.x2}",
                        y2: "{gridline.y2}",
                    }
                }

                if let Some(baseline) = layout.baseline {
                    line {
                        class: "metrics-chart__axis",
                        x1: "{baseline.x1}",
                        y1: "{baseline.y1}",
                        x2: "{baseline.x2}",
                        y2: "{baseline.y2}",
                    }
                }

                for bar in layout.bars.iter() {
                    rect {
                        class: "metrics-chart__bar",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                    }
                }

                if let Some(path) = layout.polyline.as_ref() {
                    polyline {
                        class: "metrics-chart__line",
                        fill: "none",
                        points: "{path}",
                    }
                }

                for (cx, cy) in layout.markers.iter() {
                    circle {
                        class: "metrics-chart__marker",
                        cx: "{cx}",
                        cy: "{cy}",
                        r: "5",
                    }
                }

                for label in layout.labels.iter() {
                    if let Some(transform) = label.transform.as_ref() {
                        text {
                            class: "{label.class}",
                            x: "{label.x}",
                            y: "{label.y}",
                            text_anchor: "{label.anchor}",
                            transform: "{transform}",
                            "{label.text}"
                        }
                    } else {
                        text {
                            class: "{label.class}",
                            x: "{label.x}",
                            y: "{label.y}",
                            text_anchor: "{label.anchor}",
                            "{label.text}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BarRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LineSeg {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct TextLabel {
    x: f64,
    y: f64,
    text: String,
    anchor: &'static str,
    class: &'static str,
    transform: Option<String>,
}

/// Everything the SVG needs, precomputed so the rsx body stays declarative.
#[derive(Debug, Clone, Default, PartialEq)]
struct ChartLayout {
    gridlines: Vec<LineSeg>,
    baseline: Option<LineSeg>,
    bars: Vec<BarRect>,
    polyline: Option<String>,
    markers: Vec<(f64, f64)>,
    labels: Vec<TextLabel>,
}

impl ChartLayout {
    fn from_spec(spec: &ChartSpec) -> Self {
        let values = spec.values();
        let range = spec.y_range.resolve(&values);

        let mut layout = match spec.kind {
            ChartKind::Bar => Self::vertical_bar(spec, &values, range),
            ChartKind::Line => Self::line(spec, &values, range),
            ChartKind::HorizontalBar => Self::horizontal_bar(spec, &values, range),
        };

        layout.push_axis_captions(spec);
        layout
    }

    fn vertical_bar(spec: &ChartSpec, values: &[f64], range: (f64, f64)) -> Self {
        let bars = vertical_bars(values, range);
        let mut layout = Self {
            bars: bars.clone(),
            baseline: Some(category_baseline()),
            ..Self::default()
        };
        layout.push_value_gridlines(range);

        for (bar, point) in bars.iter().zip(&spec.points) {
            layout.labels.push(category_tick(
                bar.x + bar.width / 2.0,
                &point.label,
                spec.tick_rotation_deg,
            ));
        }

        layout
    }

    fn line(spec: &ChartSpec, values: &[f64], range: (f64, f64)) -> Self {
        let points = line_points(values, range);
        let mut layout = Self {
            baseline: Some(category_baseline()),
            polyline: Some(polyline_attr(&points)),
            markers: points.clone(),
            ..Self::default()
        };
        layout.push_value_gridlines(range);

        for ((x, _), point) in points.iter().zip(&spec.points) {
            layout
                .labels
                .push(category_tick(*x, &point.label, spec.tick_rotation_deg));
        }

        layout
    }

    fn horizontal_bar(spec: &ChartSpec, values: &[f64], range: (f64, f64)) -> Self {
        let bars = horizontal_bars(values, range);
        let mut layout = Self {
            bars: bars.clone(),
            ..Self::default()
        };

        // Value axis runs along the bottom for horizontal bars.
        for tick in value_ticks(range, PLOT_W) {
            let x = MARGIN_LEFT + tick.offset;
            layout.gridlines.push(LineSeg {
                x1: x,
                y1: MARGIN_TOP,
                x2: x,
                y2: MARGIN_TOP + PLOT_H,
            });
            layout.labels.push(TextLabel {
                x,
                y: MARGIN_TOP + PLOT_H + 20.0,
                text: tick.label,
                anchor: "middle",
                class: "metrics-chart__tick-label",
                transform: None,
            });
        }

        for (bar, point) in bars.iter().zip(&spec.points) {
            layout.labels.push(TextLabel {
                x: MARGIN_LEFT - 8.0,
                y: bar.y + bar.height / 2.0 + 4.0,
                text: point.label.clone(),
                anchor: "end",
                class: "metrics-chart__tick-label",
                transform: None,
            });
        }

        layout
    }

    fn push_value_gridlines(&mut self, range: (f64, f64)) {
        for tick in value_ticks(range, PLOT_H) {
            let y = MARGIN_TOP + PLOT_H - tick.offset;
            self.gridlines.push(LineSeg {
                x1: MARGIN_LEFT,
                y1: y,
                x2: MARGIN_LEFT + PLOT_W,
                y2: y,
            });
            self.labels.push(TextLabel {
                x: MARGIN_LEFT - 8.0,
                y: y + 4.0,
                text: tick.label,
                anchor: "end",
                class: "metrics-chart__tick-label",
                transform: None,
            });
        }
    }

    fn push_axis_captions(&mut self, spec: &ChartSpec) {
        if !spec.x_label.is_empty() {
            self.labels.push(TextLabel {
                x: MARGIN_LEFT + PLOT_W / 2.0,
                y: VIEW_H - 10.0,
                text: spec.x_label.clone(),
                anchor: "middle",
                class: "metrics-chart__axis-label",
                transform: None,
            });
        }

        if !spec.y_label.is_empty() {
            let mid_y = MARGIN_TOP + PLOT_H / 2.0;
            self.labels.push(TextLabel {
                x: 16.0,
                y: mid_y,
                text: spec.y_label.clone(),
                anchor: "middle",
                class: "metrics-chart__axis-label",
                transform: Some(format!("rotate(-90 16 {mid_y})")),
            });
        }
    }
}

fn category_baseline() -> LineSeg {
    LineSeg {
        x1: MARGIN_LEFT,
        y1: MARGIN_TOP + PLOT_H,
        x2: MARGIN_LEFT + PLOT_W,
        y2: MARGIN_TOP + PLOT_H,
    }
}

fn category_tick(x: f64, label: &str, rotation_deg: f32) -> TextLabel {
    let y = MARGIN_TOP + PLOT_H + 18.0;
    if rotation_deg == 0.0 {
        TextLabel {
            x,
            y,
            text: label.to_string(),
            anchor: "middle",
            class: "metrics-chart__tick-label",
            transform: None,
        }
    } else {
        // Slanted like rotated axis labels: anchored at the tick, tilted up
        // to the right.
        TextLabel {
            x,
            y,
            text: label.to_string(),
            anchor: "end",
            class: "metrics-chart__tick-label",
            transform: Some(format!("rotate(-{rotation_deg} {x} {y})")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ValueTick {
    offset: f64,
    label: String,
}

/// Pixels covered by `value` within `range` across a `span`-wide axis.
fn scale(value: f64, range: (f64, f64), span: f64) -> f64 {
    let (min, max) = range;
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min) * span).clamp(0.0, span)
}

fn vertical_bars(values: &[f64], range: (f64, f64)) -> Vec<BarRect> {
    let slot = PLOT_W / values.len() as f64;
    let width = slot * BAR_FILL_RATIO;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let height = scale(*value, range, PLOT_H);
            BarRect {
                x: MARGIN_LEFT + slot * index as f64 + (slot - width) / 2.0,
                y: MARGIN_TOP + PLOT_H - height,
                width,
                height,
            }
        })
        .collect()
}

fn horizontal_bars(values: &[f64], range: (f64, f64)) -> Vec<BarRect> {
    let slot = PLOT_H / values.len() as f64;
    let height = slot * BAR_FILL_RATIO;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let width = scale(*value, range, PLOT_W);
            BarRect {
                x: MARGIN_LEFT,
                y: MARGIN_TOP + slot * index as f64 + (slot - height) / 2.0,
                width,
                height,
            }
        })
        .collect()
}

fn line_points(values: &[f64], range: (f64, f64)) -> Vec<(f64, f64)> {
    let slot = PLOT_W / values.len() as f64;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            (
                MARGIN_LEFT + slot * index as f64 + slot / 2.0,
                MARGIN_TOP + PLOT_H - scale(*value, range, PLOT_H),
            )
        })
        .collect()
}

fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn value_ticks(range: (f64, f64), span: f64) -> Vec<ValueTick> {
    let (min, max) = range;
    (0..VALUE_TICKS)
        .map(|index| {
            let fraction = index as f64 / (VALUE_TICKS - 1) as f64;
            let value = min + (max - min) * fraction;
            ValueTick {
                offset: scale(value, range, span),
                label: format::format_number(value, 0),
            }
        })
        .collect()
}
