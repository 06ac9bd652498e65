//! Ranked horizontal bars: one bar per item, segments stacked by rank share.

use dioxus::prelude::*;

use crate::core::format;

use super::percent_ticks;

const LABEL_W: f64 = 260.0;
const PLOT_W: f64 = 400.0;
const BAR_H: f64 = 20.0;
const BAR_GAP: f64 = 12.0;
const TOP: f64 = 12.0;
const AXIS_H: f64 = 26.0;
const LEGEND_H: f64 = 34.0;
const VIEW_W: f64 = 720.0;

/// One ranked item and its rank shares, in ramp order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBar {
    pub item: String,
    pub segments: Vec<RankSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankSegment {
    pub rank: String,
    pub percentage: f64,
    pub color: &'static str,
}

#[component]
pub fn RankedBarChart(
    title: String,
    legend: Vec<(String, &'static str)>,
    bars: Vec<RankedBar>,
) -> Element {
    let axis_y = TOP + bars.len() as f64 * (BAR_H + BAR_GAP);
    let view_h = axis_y + AXIS_H + LEGEND_H;
    let scale = PLOT_W / 100.0;

    rsx! {
        figure { class: "chart-card chart-card--ranked",
            h3 { class: "chart-card__title", "{title}" }
            svg {
                class: "chart-card__plot",
                view_box: "0 0 {VIEW_W} {view_h}",
                role: "img",
                "aria-label": "{title}",

                for (bar_idx, bar) in bars.iter().enumerate() {
                    {
                        let y = TOP + bar_idx as f64 * (BAR_H + BAR_GAP);
                        let mut offset = 0.0;
                        let spans: Vec<(&RankSegment, f64)> = bar
                            .segments
                            .iter()
                            .map(|segment| {
                                let span = (segment, offset);
                                offset += segment.percentage;
                                span
                            })
                            .collect();
                        rsx! {
                            text {
                                x: "{LABEL_W - 10.0}",
                                y: "{y + BAR_H / 2.0}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                class: "chart-item-label",
                                "{bar.item}"
                            }
                            for (segment, offset) in spans {
                                rect {
                                    x: "{LABEL_W + offset * scale}",
                                    y: "{y}",
                                    width: "{segment.percentage * scale}",
                                    height: "{BAR_H}",
                                    fill: segment.color,
                                    stroke: "#FFFFFF",
                                    stroke_width: "0.5",
                                    title {
                                        "{bar.item}\nRanking: {segment.rank}\n{format::format_percent(segment.percentage)}"
                                    }
                                }
                            }
                        }
                    }
                }

                for tick in percent_ticks(20) {
                    text {
                        x: "{LABEL_W + f64::from(tick) * scale}",
                        y: "{axis_y + 16.0}",
                        text_anchor: "middle",
                        class: "chart-tick-label",
                        "{tick}%"
                    }
                }

                text {
                    x: "{LABEL_W}",
                    y: "{axis_y + AXIS_H + 22.0}",
                    class: "chart-legend-title",
                    "Ranking:"
                }
                for (idx, (label, color)) in legend.iter().enumerate() {
                    {
                        let x = LABEL_W + 80.0 + idx as f64 * 60.0;
                        rsx! {
                            rect {
                                x: "{x}",
                                y: "{axis_y + AXIS_H + 12.0}",
                                width: "12",
                                height: "12",
                                fill: *color,
                                stroke: "#D0D0D0",
                                stroke_width: "0.5",
                            }
                            text {
                                x: "{x + 18.0}",
                                y: "{axis_y + AXIS_H + 22.0}",
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
