//! Count bubbles on a category × year grid.

use dioxus::prelude::*;

use crate::core::year::SurveyYear;

const LABEL_W: f64 = 230.0;
const COL_START: f64 = 300.0;
const COL_STEP: f64 = 160.0;
const ROW_H: f64 = 70.0;
const TOP: f64 = 20.0;
const AXIS_H: f64 = 36.0;
const VIEW_W: f64 = 760.0;
const MAX_RADIUS: f64 = 32.0;

/// One grid row: a canonical category and its zero-filled per-year counts.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleRow {
    pub category: String,
    pub counts: [u32; SurveyYear::ALL.len()],
}

/// Marker radius with area proportional to the count.
pub fn bubble_radius(count: u32, max_count: u32, max_radius: f64) -> f64 {
    if count == 0 || max_count == 0 {
        return 0.0;
    }
    max_radius * (f64::from(count) / f64::from(max_count)).sqrt()
}

#[component]
pub fn BubbleGrid(title: String, colors: [&'static str; 3], rows: Vec<BubbleRow>) -> Element {
    let max_count = rows
        .iter()
        .flat_map(|row| row.counts.iter().copied())
        .max()
        .unwrap_or(0);
    let axis_y = TOP + rows.len() as f64 * ROW_H;
    let view_h = axis_y + AXIS_H;

    rsx! {
        figure { class: "chart-card chart-card--bubble",
            h3 { class: "chart-card__title", "{title}" }
            svg {
                class: "chart-card__plot",
                view_box: "0 0 {VIEW_W} {view_h}",
                role: "img",
                "aria-label": "{title}",

                for (row_idx, row) in rows.iter().enumerate() {
                    {
                        let cy = TOP + row_idx as f64 * ROW_H + ROW_H / 2.0;
                        rsx! {
                            text {
                                x: "{LABEL_W}",
                                y: "{cy}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                class: "chart-axis-label",
                                "{row.category}"
                            }
                            for year in SurveyYear::ALL {
                                {
                                    let count = row.counts[year.index()];
                                    let cx = COL_START + year.index() as f64 * COL_STEP;
                                    let radius = bubble_radius(count, max_count, MAX_RADIUS);
                                    rsx! {
                                        if count > 0 {
                                            circle {
                                                cx: "{cx}",
                                                cy: "{cy}",
                                                r: "{radius}",
                                                fill: colors[year.index()],
                                                fill_opacity: "0.7",
                                                title { "{row.category} — {year}: {count} respondents" }
                                            }
                                            text {
                                                x: "{cx}",
                                                y: "{cy}",
                                                text_anchor: "middle",
                                                dominant_baseline: "middle",
                                                class: "chart-bubble-count",
                                                "{count}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                for year in SurveyYear::ALL {
                    text {
                        x: "{COL_START + year.index() as f64 * COL_STEP}",
                        y: "{axis_y + 22.0}",
                        text_anchor: "middle",
                        class: "chart-axis-label chart-axis-label--year",
                        "{year}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_scales_with_area_not_diameter() {
        let full = bubble_radius(100, 100, 32.0);
        let quarter = bubble_radius(25, 100, 32.0);
        assert_eq!(full, 32.0);
        // A quarter of the count is half the radius.
        assert!((quarter - 16.0).abs() < 1e-9);
    }

    #[test]
    fn zero_counts_disappear() {
        assert_eq!(bubble_radius(0, 80, 32.0), 0.0);
        assert_eq!(bubble_radius(5, 0, 32.0), 0.0);
    }

    #[test]
    fn radius_is_monotonic_in_count() {
        let radii: Vec<f64> = (1..=10).map(|n| bubble_radius(n, 10, 32.0)).collect();
        assert!(radii.windows(2).all(|w| w[0] < w[1]));
    }
}
