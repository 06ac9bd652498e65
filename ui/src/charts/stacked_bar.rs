//! Stacked horizontal percentage bars, one bar per survey year.

use dioxus::prelude::*;

use crate::core::format;

use super::percent_ticks;

const LABEL_W: f64 = 70.0;
const PLOT_W: f64 = 560.0;
const BAR_H: f64 = 30.0;
const BAR_GAP: f64 = 18.0;
const TOP: f64 = 12.0;
const AXIS_H: f64 = 30.0;
const LEGEND_H: f64 = 32.0;
const VIEW_W: f64 = 720.0;

/// One horizontal bar split into colored percentage segments.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBar {
    pub label: String,
    pub segments: Vec<BarSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub label: String,
    pub percentage: f64,
    pub color: &'static str,
}

/// Cumulative (offset, width) spans for a stacked bar, in percentage units.
pub fn stacked_spans(segments: &[BarSegment]) -> Vec<(f64, f64)> {
    let mut offset = 0.0;
    segments
        .iter()
        .map(|segment| {
            let span = (offset, segment.percentage);
            offset += segment.percentage;
            span
        })
        .collect()
}

#[component]
pub fn StackedBarChart(
    title: String,
    axis_label: String,
    legend_title: String,
    legend: Vec<(String, &'static str)>,
    bars: Vec<StackedBar>,
) -> Element {
    let rows = bars.len() as f64;
    let axis_y = TOP + rows * (BAR_H + BAR_GAP);
    let view_h = axis_y + AXIS_H + LEGEND_H;
    let scale = PLOT_W / 100.0;

    rsx! {
        figure { class: "chart-card chart-card--stacked",
            h3 { class: "chart-card__title", "{title}" }
            svg {
                class: "chart-card__plot",
                view_box: "0 0 {VIEW_W} {view_h}",
                role: "img",
                "aria-label": "{title}",

                for (bar_idx, bar) in bars.iter().enumerate() {
                    {
                        let y = TOP + bar_idx as f64 * (BAR_H + BAR_GAP);
                        let spans = stacked_spans(&bar.segments);
                        rsx! {
                            text {
                                x: "{LABEL_W - 10.0}",
                                y: "{y + BAR_H / 2.0}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                class: "chart-axis-label",
                                "{bar.label}"
                            }
                            for (segment, (offset, width)) in bar.segments.iter().zip(spans) {
                                rect {
                                    x: "{LABEL_W + offset * scale}",
                                    y: "{y}",
                                    width: "{width * scale}",
                                    height: "{BAR_H}",
                                    fill: segment.color,
                                    title { "{segment.label} — {format::format_percent(segment.percentage)}" }
                                }
                                text {
                                    x: "{LABEL_W + (offset + width / 2.0) * scale}",
                                    y: "{y + BAR_H / 2.0}",
                                    text_anchor: "middle",
                                    dominant_baseline: "middle",
                                    class: "chart-segment-label",
                                    "{format::format_percent(segment.percentage)}"
                                }
                            }
                        }
                    }
                }

                // Percent axis under the bars.
                for tick in percent_ticks(25) {
                    text {
                        x: "{LABEL_W + f64::from(tick) * scale}",
                        y: "{axis_y + 14.0}",
                        text_anchor: "middle",
                        class: "chart-tick-label",
                        "{tick}%"
                    }
                }
                text {
                    x: "{LABEL_W + PLOT_W / 2.0}",
                    y: "{axis_y + AXIS_H}",
                    text_anchor: "middle",
                    class: "chart-axis-title",
                    "{axis_label}"
                }

                // Legend row.
                text {
                    x: "{LABEL_W}",
                    y: "{axis_y + AXIS_H + 20.0}",
                    class: "chart-legend-title",
                    "{legend_title}:"
                }
                for (idx, (label, color)) in legend.iter().enumerate() {
                    {
                        let x = LABEL_W + 70.0 + idx as f64 * 120.0;
                        rsx! {
                            rect {
                                x: "{x}",
                                y: "{axis_y + AXIS_H + 10.0}",
                                width: "12",
                                height: "12",
                                fill: *color,
                            }
                            text {
                                x: "{x + 18.0}",
                                y: "{axis_y + AXIS_H + 20.0}",
                                class: "chart-legend-label",
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(label: &str, percentage: f64) -> BarSegment {
        BarSegment {
            label: label.to_string(),
            percentage,
            color: "#000000",
        }
    }

    #[test]
    fn spans_accumulate_left_to_right() {
        let segments = vec![segment("a", 32.7), segment("b", 67.3)];
        let spans = stacked_spans(&segments);
        assert_eq!(spans[0], (0.0, 32.7));
        assert_eq!(spans[1], (32.7, 67.3));
    }

    #[test]
    fn full_bar_spans_the_whole_axis() {
        let segments = vec![segment("a", 40.0), segment("b", 35.0), segment("c", 25.0)];
        let spans = stacked_spans(&segments);
        let (last_offset, last_width) = spans[spans.len() - 1];
        assert!((last_offset + last_width - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_bar_has_no_spans() {
        assert!(stacked_spans(&[]).is_empty());
    }
}
