//! Technology usage bars with a mean-proficiency marker overlay.
//!
//! The marker plots the 1–5 proficiency score rescaled onto the percent
//! axis (×10), matching the caption shown under the chart.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::palette;

use super::percent_ticks;

const LABEL_W: f64 = 210.0;
const PLOT_W: f64 = 430.0;
const BAR_H: f64 = 18.0;
const BAR_GAP: f64 = 10.0;
const TOP: f64 = 12.0;
const AXIS_H: f64 = 30.0;
const VIEW_W: f64 = 700.0;

/// One technology row, already in canonical display order.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRow {
    pub technology: String,
    /// Share of respondents using the technology, 0–100.
    pub percentage: f64,
    /// Mean self-rated proficiency on the 1–5 scale.
    pub average_proficiency: f64,
}

fn marker_x(average_proficiency: f64, scale: f64) -> f64 {
    LABEL_W + average_proficiency * 10.0 * scale
}

#[component]
pub fn UsageProficiencyChart(title: String, rows: Vec<UsageRow>) -> Element {
    let axis_y = TOP + rows.len() as f64 * (BAR_H + BAR_GAP);
    let view_h = axis_y + AXIS_H;
    let scale = PLOT_W / 100.0;

    let marker_points = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let y = TOP + idx as f64 * (BAR_H + BAR_GAP) + BAR_H / 2.0;
            format!("{:.1},{:.1}", marker_x(row.average_proficiency, scale), y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        figure { class: "chart-card chart-card--usage",
            h3 { class: "chart-card__title", "{title}" }
            svg {
                class: "chart-card__plot",
                view_box: "0 0 {VIEW_W} {view_h}",
                role: "img",
                "aria-label": "{title}",

                for (idx, row) in rows.iter().enumerate() {
                    {
                        let y = TOP + idx as f64 * (BAR_H + BAR_GAP);
                        rsx! {
                            text {
                                x: "{LABEL_W - 10.0}",
                                y: "{y + BAR_H / 2.0}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                class: "chart-item-label",
                                "{row.technology}"
                            }
                            rect {
                                x: "{LABEL_W}",
                                y: "{y}",
                                width: "{row.percentage * scale}",
                                height: "{BAR_H}",
                                fill: palette::USAGE_BAR,
                                title {
                                    "{row.technology} — {format::format_percent(row.percentage)} of respondents, mean proficiency {format::format_score(row.average_proficiency)}"
                                }
                            }
                            text {
                                x: "{LABEL_W + row.percentage * scale / 2.0}",
                                y: "{y + BAR_H / 2.0}",
                                text_anchor: "middle",
                                dominant_baseline: "middle",
                                class: "chart-segment-label",
                                "{format::format_percent_whole(row.percentage)}"
                            }
                        }
                    }
                }

                // Mean-proficiency overlay, rescaled onto the percent axis.
                polyline {
                    points: "{marker_points}",
                    fill: "none",
                    stroke: palette::PROFICIENCY_MARKER,
                    stroke_width: "1.5",
                }
                for (idx, row) in rows.iter().enumerate() {
                    circle {
                        cx: "{marker_x(row.average_proficiency, scale)}",
                        cy: "{TOP + idx as f64 * (BAR_H + BAR_GAP) + BAR_H / 2.0}",
                        r: "3.5",
                        fill: palette::PROFICIENCY_MARKER,
                        title {
                            "{row.technology} — mean proficiency {format::format_score(row.average_proficiency)} of 5"
                        }
                    }
                }

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
                    y: "{axis_y + AXIS_H - 2.0}",
                    text_anchor: "middle",
                    class: "chart-axis-title",
                    "Percentage of respondents"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_marker_lands_on_the_rescaled_axis() {
        let scale = PLOT_W / 100.0;
        // A 3.5/5 score sits at the 35% gridline.
        let x = marker_x(3.5, scale);
        assert!((x - (LABEL_W + 35.0 * scale)).abs() < 1e-9);
    }

    #[test]
    fn top_score_stays_inside_the_plot() {
        let scale = PLOT_W / 100.0;
        assert!(marker_x(5.0, scale) <= LABEL_W + PLOT_W / 2.0);
    }
}
